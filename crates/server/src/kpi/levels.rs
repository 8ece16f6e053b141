//! # Level Handlers

use axum::Json;
use entity::{
    indicator_sorts::{self, Entity as IndicatorSortsEntity},
    indicators::{self, Entity as IndicatorsEntity},
    levels::{self, Column as LevelColumn, Entity as LevelsEntity},
    timestamps::Timestamped,
};
use error::{AppError, Result, ResultExt};
use sea_orm::{
    sea_query::Expr,
    ActiveModelTrait,
    ColumnTrait,
    EntityTrait,
    IntoActiveModel,
    QueryFilter,
    QueryOrder,
    Set,
    TransactionTrait,
};
use tracing::info;
use validator::Validate;

use super::fetch_page;
use crate::{
    dto::{
        levels::{LevelListQuery, LevelListResponse, LevelRequest, LevelResponse},
        DeleteResponse,
    },
    AppState,
};

fn apply(active: &mut levels::ActiveModel, req: LevelRequest) {
    active.name = Set(req.name);
    active.workflowlevel1 = Set(req.workflowlevel1);
    active.sort = Set(req.sort);
    active.organization = Set(req.organization);
    active.parent_id = Set(req.parent_id);
    active.global_default = Set(req.global_default);
    active.description = Set(req.description);
    active.color = Set(req.color);
    active.created_by = Set(req.created_by);
}

async fn find(state: &AppState, id: i32) -> Result<levels::Model> {
    LevelsEntity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Level {} not found", id)))
}

/// Create a new level
///
/// `parent_id` is stored as given; no cycle detection is done.
pub async fn create_level_handler(state: &AppState, req: LevelRequest) -> Result<Json<LevelResponse>> {
    req.validate()?;

    let mut active = levels::ActiveModel {
        ..Default::default()
    };
    apply(&mut active, req);
    active.touch(state.clock.now());

    let created = active
        .insert(&state.db)
        .await
        .context("Failed to create level")?;

    info!(level_id = %created.id, parent_id = created.parent_id, "Level created");

    Ok(Json(created.into()))
}

/// Get a single level by ID
pub async fn get_level_handler(state: &AppState, id: i32) -> Result<Json<LevelResponse>> {
    Ok(Json(find(state, id).await?.into()))
}

/// Replace every writable field of a level
pub async fn update_level_handler(state: &AppState, id: i32, req: LevelRequest) -> Result<Json<LevelResponse>> {
    req.validate()?;

    let mut active = find(state, id).await?.into_active_model();
    apply(&mut active, req);
    active.touch(state.clock.now());

    let updated = active
        .update(&state.db)
        .await
        .context("Failed to update level")?;

    info!(level_id = %id, "Level updated");

    Ok(Json(updated.into()))
}

/// List levels, optionally for one organization or workflow level 1
pub async fn list_levels_handler(state: &AppState, query: LevelListQuery) -> Result<Json<LevelListResponse>> {
    let mut select = LevelsEntity::find();
    if let Some(organization) = query.organization {
        select = select.filter(LevelColumn::Organization.eq(organization));
    }
    if let Some(workflowlevel1) = query.workflowlevel1 {
        select = select.filter(LevelColumn::Workflowlevel1.eq(workflowlevel1));
    }
    let select = select.order_by_asc(LevelColumn::Id);

    let (items, pagination) = fetch_page(&state.db, select, &query).await?;

    Ok(Json(LevelListResponse {
        success: true,
        levels: items.into_iter().map(Into::into).collect(),
        pagination,
    }))
}

/// Delete a level
///
/// Indicators and indicator sorts that referenced it keep existing with no level.
pub async fn delete_level_handler(state: &AppState, id: i32) -> Result<Json<DeleteResponse>> {
    find(state, id).await?;

    let txn = state.db.begin().await?;
    let detached = IndicatorsEntity::update_many()
        .col_expr(indicators::Column::LevelId, Expr::value(Option::<i32>::None))
        .filter(indicators::Column::LevelId.eq(id))
        .exec(&txn)
        .await?;
    IndicatorSortsEntity::update_many()
        .col_expr(indicator_sorts::Column::LevelId, Expr::value(Option::<i32>::None))
        .filter(indicator_sorts::Column::LevelId.eq(id))
        .exec(&txn)
        .await?;
    LevelsEntity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    info!(level_id = %id, detached_indicators = detached.rows_affected, "Level deleted");

    Ok(Json(DeleteResponse::new("Level deleted successfully")))
}
