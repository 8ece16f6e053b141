//! # Indicator Sort Handlers
//!
//! At most one sort row exists per (workflow level 1, level) pair. The pair is
//! checked before writing so the client gets a field-level message instead of
//! a raw constraint error.

use axum::Json;
use entity::{
    indicator_sorts::{self, Column as IndicatorSortColumn, Entity as IndicatorSortsEntity, SortArray},
    levels::Entity as LevelsEntity,
    timestamps::Timestamped,
};
use error::{AppError, Result, ResultExt};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set};
use tracing::info;
use validator::Validate;

use super::{ensure_exists, fetch_page};
use crate::{
    dto::{
        indicator_sorts::{IndicatorSortListQuery, IndicatorSortListResponse, IndicatorSortRequest, IndicatorSortResponse},
        DeleteResponse,
    },
    AppState,
};

fn apply(active: &mut indicator_sorts::ActiveModel, req: IndicatorSortRequest) {
    active.workflowlevel1 = Set(req.workflowlevel1);
    active.level_id = Set(req.level_id);
    active.sort_array = Set(req.sort_array.map(SortArray::from));
}

async fn find(state: &AppState, id: i32) -> Result<indicator_sorts::Model> {
    IndicatorSortsEntity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Indicator sort {} not found", id)))
}

/// Check references and the (workflowlevel1, level) uniqueness, ignoring `current`.
async fn validate_request(state: &AppState, req: &IndicatorSortRequest, current: Option<i32>) -> Result<()> {
    req.validate()?;
    if let Some(level_id) = req.level_id {
        ensure_exists::<LevelsEntity, _>(&state.db, "level_id", &[level_id]).await?;
    }

    // Rows with a null in either column never collide.
    let (Some(workflowlevel1), Some(level_id)) = (req.workflowlevel1, req.level_id)
    else {
        return Ok(());
    };

    let mut duplicate = IndicatorSortsEntity::find()
        .filter(IndicatorSortColumn::Workflowlevel1.eq(workflowlevel1))
        .filter(IndicatorSortColumn::LevelId.eq(level_id));
    if let Some(id) = current {
        duplicate = duplicate.filter(IndicatorSortColumn::Id.ne(id));
    }

    if duplicate.one(&state.db).await?.is_some() {
        return Err(AppError::validation(
            "non_field_errors: The fields workflowlevel1, level must make a unique set.",
        ));
    }
    Ok(())
}

/// Create the sort row for a (workflow level 1, level) pair
pub async fn create_indicator_sort_handler(
    state: &AppState,
    req: IndicatorSortRequest,
) -> Result<Json<IndicatorSortResponse>> {
    validate_request(state, &req, None).await?;

    let mut active = indicator_sorts::ActiveModel {
        ..Default::default()
    };
    apply(&mut active, req);
    active.touch(state.clock.now());

    let created = active
        .insert(&state.db)
        .await
        .context("Failed to create indicator sort")?;

    info!(indicator_sort_id = %created.id, level_id = ?created.level_id, "Indicator sort created");

    Ok(Json(created.into()))
}

/// Get a single indicator sort by ID
pub async fn get_indicator_sort_handler(state: &AppState, id: i32) -> Result<Json<IndicatorSortResponse>> {
    Ok(Json(find(state, id).await?.into()))
}

/// Replace every writable field of an indicator sort
pub async fn update_indicator_sort_handler(
    state: &AppState,
    id: i32,
    req: IndicatorSortRequest,
) -> Result<Json<IndicatorSortResponse>> {
    let existing = find(state, id).await?;
    validate_request(state, &req, Some(id)).await?;

    let mut active = existing.into_active_model();
    apply(&mut active, req);
    active.touch(state.clock.now());

    let updated = active
        .update(&state.db)
        .await
        .context("Failed to update indicator sort")?;

    info!(indicator_sort_id = %id, "Indicator sort updated");

    Ok(Json(updated.into()))
}

/// List indicator sorts ordered by workflow level 1, then level
pub async fn list_indicator_sorts_handler(
    state: &AppState,
    query: IndicatorSortListQuery,
) -> Result<Json<IndicatorSortListResponse>> {
    let mut select = IndicatorSortsEntity::find();
    if let Some(workflowlevel1) = query.workflowlevel1 {
        select = select.filter(IndicatorSortColumn::Workflowlevel1.eq(workflowlevel1));
    }
    if let Some(level_id) = query.level_id {
        select = select.filter(IndicatorSortColumn::LevelId.eq(level_id));
    }
    let select = select
        .order_by_asc(IndicatorSortColumn::Workflowlevel1)
        .order_by_asc(IndicatorSortColumn::LevelId)
        .order_by_asc(IndicatorSortColumn::Id);

    let (items, pagination) = fetch_page(&state.db, select, &query).await?;

    Ok(Json(IndicatorSortListResponse {
        success: true,
        indicator_sorts: items.into_iter().map(Into::into).collect(),
        pagination,
    }))
}

/// Delete an indicator sort
pub async fn delete_indicator_sort_handler(state: &AppState, id: i32) -> Result<Json<DeleteResponse>> {
    find(state, id).await?;
    IndicatorSortsEntity::delete_by_id(id)
        .exec(&state.db)
        .await?;

    info!(indicator_sort_id = %id, "Indicator sort deleted");

    Ok(Json(DeleteResponse::new("Indicator sort deleted successfully")))
}
