//! # Indicator Type Handlers

use axum::Json;
use entity::{
    indicator_indicator_types::{self, Entity as IndicatorIndicatorTypesEntity},
    indicator_types::{self, Column as IndicatorTypeColumn, Entity as IndicatorTypesEntity},
    timestamps::Timestamped,
};
use error::{AppError, Result, ResultExt};
use sea_orm::{
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
        indicator_types::{IndicatorTypeListQuery, IndicatorTypeListResponse, IndicatorTypeRequest, IndicatorTypeResponse},
        DeleteResponse,
    },
    AppState,
};

fn apply(active: &mut indicator_types::ActiveModel, req: IndicatorTypeRequest) {
    active.indicator_type = Set(req.indicator_type);
    active.description = Set(req.description);
    active.default_global = Set(req.default_global);
    active.organization = Set(req.organization);
}

async fn find(state: &AppState, id: i32) -> Result<indicator_types::Model> {
    IndicatorTypesEntity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Indicator type {} not found", id)))
}

/// Create a new indicator type
pub async fn create_indicator_type_handler(
    state: &AppState,
    req: IndicatorTypeRequest,
) -> Result<Json<IndicatorTypeResponse>> {
    req.validate()?;

    let mut active = indicator_types::ActiveModel {
        ..Default::default()
    };
    apply(&mut active, req);
    active.touch(state.clock.now());

    let created = active
        .insert(&state.db)
        .await
        .context("Failed to create indicator type")?;

    info!(indicator_type_id = %created.id, "Indicator type created");

    Ok(Json(created.into()))
}

/// Get a single indicator type by ID
pub async fn get_indicator_type_handler(state: &AppState, id: i32) -> Result<Json<IndicatorTypeResponse>> {
    Ok(Json(find(state, id).await?.into()))
}

/// Replace every writable field of an indicator type
pub async fn update_indicator_type_handler(
    state: &AppState,
    id: i32,
    req: IndicatorTypeRequest,
) -> Result<Json<IndicatorTypeResponse>> {
    req.validate()?;

    let mut active = find(state, id).await?.into_active_model();
    apply(&mut active, req);
    active.touch(state.clock.now());

    let updated = active
        .update(&state.db)
        .await
        .context("Failed to update indicator type")?;

    info!(indicator_type_id = %id, "Indicator type updated");

    Ok(Json(updated.into()))
}

/// List indicator types, optionally for one organization
pub async fn list_indicator_types_handler(
    state: &AppState,
    query: IndicatorTypeListQuery,
) -> Result<Json<IndicatorTypeListResponse>> {
    let mut select = IndicatorTypesEntity::find();
    if let Some(organization) = query.organization {
        select = select.filter(IndicatorTypeColumn::Organization.eq(organization));
    }
    let select = select.order_by_asc(IndicatorTypeColumn::Id);

    let (items, pagination) = fetch_page(&state.db, select, &query).await?;

    Ok(Json(IndicatorTypeListResponse {
        success: true,
        indicator_types: items.into_iter().map(Into::into).collect(),
        pagination,
    }))
}

/// Delete an indicator type and unlink it from every indicator
pub async fn delete_indicator_type_handler(state: &AppState, id: i32) -> Result<Json<DeleteResponse>> {
    find(state, id).await?;

    let txn = state.db.begin().await?;
    IndicatorIndicatorTypesEntity::delete_many()
        .filter(indicator_indicator_types::Column::IndicatorTypeId.eq(id))
        .exec(&txn)
        .await?;
    IndicatorTypesEntity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    info!(indicator_type_id = %id, "Indicator type deleted");

    Ok(Json(DeleteResponse::new("Indicator type deleted successfully")))
}
