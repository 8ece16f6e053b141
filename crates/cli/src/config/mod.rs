//! # Server Configuration
//!
//! Bind address handling for the serve command. Database settings live in
//! [`migration::DatabaseConfig`].

use std::net::SocketAddr;

/// Parses a host and port into a SocketAddr.
///
/// IPv6 hosts are accepted with or without brackets.
pub fn parse_socket_addr(host: &str, port: u16) -> Result<SocketAddr, std::net::AddrParseError> {
    let addr_str = if host.contains(':') && !host.starts_with('[') {
        format!("[{}]:{}", host, port)
    }
    else {
        format!("{}:{}", host, port)
    };
    addr_str.parse()
}
