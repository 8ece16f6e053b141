//! # Periodic Target Handlers
//!
//! Targets are not stamped on write; `create_date` and `edit_date` keep
//! whatever the store holds.

use axum::Json;
use entity::{
    indicators::Entity as IndicatorsEntity,
    periodic_targets::{self, Column as PeriodicTargetColumn, Entity as PeriodicTargetsEntity},
};
use error::{AppError, Result, ResultExt};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set};
use tracing::info;
use validator::Validate;

use super::{ensure_exists, fetch_page};
use crate::{
    dto::{
        periodic_targets::{
            PeriodicTargetListQuery,
            PeriodicTargetListResponse,
            PeriodicTargetRequest,
            PeriodicTargetResponse,
        },
        DeleteResponse,
    },
    AppState,
};

fn apply(active: &mut periodic_targets::ActiveModel, req: PeriodicTargetRequest) {
    active.indicator_id = Set(req.indicator_id);
    active.period = Set(req.period);
    active.target = Set(req.target);
    active.customsort = Set(req.customsort);
}

async fn find(state: &AppState, id: i32) -> Result<periodic_targets::Model> {
    PeriodicTargetsEntity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Periodic target {} not found", id)))
}

async fn validate_request(state: &AppState, req: &PeriodicTargetRequest) -> Result<()> {
    req.validate()?;
    if let Some(indicator_id) = req.indicator_id {
        ensure_exists::<IndicatorsEntity, _>(&state.db, "indicator_id", &[indicator_id]).await?;
    }
    Ok(())
}

/// Create a new periodic target for an indicator
pub async fn create_periodic_target_handler(
    state: &AppState,
    req: PeriodicTargetRequest,
) -> Result<Json<PeriodicTargetResponse>> {
    validate_request(state, &req).await?;

    let mut active = periodic_targets::ActiveModel {
        ..Default::default()
    };
    apply(&mut active, req);

    let created = active
        .insert(&state.db)
        .await
        .context("Failed to create periodic target")?;

    info!(
        periodic_target_id = %created.id,
        indicator_id = ?created.indicator_id,
        "Periodic target created"
    );

    Ok(Json(created.into()))
}

/// Get a single periodic target by ID
pub async fn get_periodic_target_handler(state: &AppState, id: i32) -> Result<Json<PeriodicTargetResponse>> {
    Ok(Json(find(state, id).await?.into()))
}

/// Replace every writable field of a periodic target
pub async fn update_periodic_target_handler(
    state: &AppState,
    id: i32,
    req: PeriodicTargetRequest,
) -> Result<Json<PeriodicTargetResponse>> {
    let existing = find(state, id).await?;
    validate_request(state, &req).await?;

    let mut active = existing.into_active_model();
    apply(&mut active, req);

    let updated = active
        .update(&state.db)
        .await
        .context("Failed to update periodic target")?;

    info!(periodic_target_id = %id, "Periodic target updated");

    Ok(Json(updated.into()))
}

/// List periodic targets ordered by `customsort`, then id
pub async fn list_periodic_targets_handler(
    state: &AppState,
    query: PeriodicTargetListQuery,
) -> Result<Json<PeriodicTargetListResponse>> {
    let mut select = PeriodicTargetsEntity::find();
    if let Some(indicator_id) = query.indicator_id {
        select = select.filter(PeriodicTargetColumn::IndicatorId.eq(indicator_id));
    }
    let select = select
        .order_by_asc(PeriodicTargetColumn::Customsort)
        .order_by_asc(PeriodicTargetColumn::Id);

    let (items, pagination) = fetch_page(&state.db, select, &query).await?;

    Ok(Json(PeriodicTargetListResponse {
        success: true,
        periodic_targets: items.into_iter().map(Into::into).collect(),
        pagination,
    }))
}

/// Delete a periodic target
pub async fn delete_periodic_target_handler(state: &AppState, id: i32) -> Result<Json<DeleteResponse>> {
    find(state, id).await?;
    PeriodicTargetsEntity::delete_by_id(id)
        .exec(&state.db)
        .await?;

    info!(periodic_target_id = %id, "Periodic target deleted");

    Ok(Json(DeleteResponse::new("Periodic target deleted successfully")))
}
