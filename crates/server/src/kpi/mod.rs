//! # KPI Resource Handlers
//!
//! Create, retrieve, update, list and delete for every KPI resource. Handlers
//! take the shared [`AppState`](crate::AppState) and an already-extracted
//! request, so they can be called directly from tests without going through
//! the router.

use error::{AppError, PaginationMeta, Result};
use sea_orm::{
    ColumnTrait,
    ConnectionTrait,
    DbConn,
    EntityTrait,
    Iterable,
    PaginatorTrait,
    PrimaryKeyToColumn,
    QueryFilter,
    QuerySelect,
    Select,
};

use crate::dto::ListParams;

pub mod indicator_sorts;
pub mod indicator_types;
pub mod indicators;
pub mod levels;
pub mod objectives;
pub mod outcomes;
pub mod periodic_targets;

/// Fail with a validation error naming the first id in `ids` that has no row in `E`.
pub(crate) async fn ensure_exists<E, C>(db: &C, field: &str, ids: &[i32]) -> Result<()>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    if ids.is_empty() {
        return Ok(());
    }
    let Some(pk) = E::PrimaryKey::iter().next()
    else {
        return Ok(());
    };
    let column = pk.into_column();

    let found: Vec<i32> = E::find()
        .select_only()
        .column(column)
        .filter(column.is_in(ids.iter().copied()))
        .into_tuple()
        .all(db)
        .await?;

    match ids.iter().find(|id| !found.contains(id)) {
        Some(missing) => {
            Err(AppError::validation(format!(
                "{}: Invalid pk \"{}\" - object does not exist.",
                field, missing
            )))
        },
        None => Ok(()),
    }
}

/// Count and fetch one page of an ordered query.
pub(crate) async fn fetch_page<E>(
    db: &DbConn,
    select: Select<E>,
    params: &impl ListParams,
) -> Result<(Vec<E::Model>, PaginationMeta)>
where
    E: EntityTrait,
    E::Model: Sync,
{
    let page = params.page();
    let per_page = params.per_page();

    let total = select.clone().count(db).await?;
    let items = select
        .paginate(db, per_page)
        .fetch_page(page.saturating_sub(1))
        .await?;

    Ok((items, PaginationMeta::new(page, per_page, total)))
}
