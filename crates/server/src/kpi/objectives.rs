//! # Objective Handlers

use axum::Json;
use entity::{
    indicator_objectives::{self, Entity as IndicatorObjectivesEntity},
    objectives::{self, Column as ObjectiveColumn, Entity as ObjectivesEntity},
    outcome_objectives::{self, Entity as OutcomeObjectivesEntity},
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
        objectives::{ObjectiveListQuery, ObjectiveListResponse, ObjectiveRequest, ObjectiveResponse},
        DeleteResponse,
    },
    AppState,
};

fn apply(active: &mut objectives::ActiveModel, req: ObjectiveRequest) {
    active.name = Set(req.name);
    active.workflowlevel1 = Set(req.workflowlevel1);
    active.description = Set(req.description);
    active.created_by = Set(req.created_by);
}

async fn find(state: &AppState, id: i32) -> Result<objectives::Model> {
    ObjectivesEntity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Objective {} not found", id)))
}

/// Create a new objective
pub async fn create_objective_handler(state: &AppState, req: ObjectiveRequest) -> Result<Json<ObjectiveResponse>> {
    req.validate()?;

    let mut active = objectives::ActiveModel {
        ..Default::default()
    };
    apply(&mut active, req);
    active.touch(state.clock.now());

    let created = active
        .insert(&state.db)
        .await
        .context("Failed to create objective")?;

    info!(objective_id = %created.id, "Objective created");

    Ok(Json(created.into()))
}

/// Get a single objective by ID
pub async fn get_objective_handler(state: &AppState, id: i32) -> Result<Json<ObjectiveResponse>> {
    Ok(Json(find(state, id).await?.into()))
}

/// Replace every writable field of an objective
pub async fn update_objective_handler(
    state: &AppState,
    id: i32,
    req: ObjectiveRequest,
) -> Result<Json<ObjectiveResponse>> {
    req.validate()?;

    let mut active = find(state, id).await?.into_active_model();
    apply(&mut active, req);
    active.touch(state.clock.now());

    let updated = active
        .update(&state.db)
        .await
        .context("Failed to update objective")?;

    info!(objective_id = %id, "Objective updated");

    Ok(Json(updated.into()))
}

/// List objectives ordered by workflow level 1, then name
pub async fn list_objectives_handler(state: &AppState, query: ObjectiveListQuery) -> Result<Json<ObjectiveListResponse>> {
    let mut select = ObjectivesEntity::find();
    if let Some(workflowlevel1) = query.workflowlevel1 {
        select = select.filter(ObjectiveColumn::Workflowlevel1.eq(workflowlevel1));
    }
    let select = select
        .order_by_asc(ObjectiveColumn::Workflowlevel1)
        .order_by_asc(ObjectiveColumn::Name)
        .order_by_asc(ObjectiveColumn::Id);

    let (items, pagination) = fetch_page(&state.db, select, &query).await?;

    Ok(Json(ObjectiveListResponse {
        success: true,
        objectives: items.into_iter().map(Into::into).collect(),
        pagination,
    }))
}

/// Delete an objective and unlink it from indicators and outcomes
pub async fn delete_objective_handler(state: &AppState, id: i32) -> Result<Json<DeleteResponse>> {
    find(state, id).await?;

    let txn = state.db.begin().await?;
    IndicatorObjectivesEntity::delete_many()
        .filter(indicator_objectives::Column::ObjectiveId.eq(id))
        .exec(&txn)
        .await?;
    OutcomeObjectivesEntity::delete_many()
        .filter(outcome_objectives::Column::ObjectiveId.eq(id))
        .exec(&txn)
        .await?;
    ObjectivesEntity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    info!(objective_id = %id, "Objective deleted");

    Ok(Json(DeleteResponse::new("Objective deleted successfully")))
}
