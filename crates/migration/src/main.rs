use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The sea-orm-migration CLI reads DATABASE_URL; derive it from KPI_DATABASE_* when unset.
    if std::env::var_os("DATABASE_URL").is_none() {
        match migration::DatabaseConfig::from_env() {
            Ok(config) => std::env::set_var("DATABASE_URL", config.build_connection_string()),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            },
        }
    }

    cli::run_cli(migration::Migrator).await;
}
