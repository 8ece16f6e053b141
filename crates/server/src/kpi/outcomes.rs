//! # Outcome Handlers

use std::collections::HashMap;

use axum::Json;
use entity::{
    indicator_outcomes::{self, Entity as IndicatorOutcomesEntity},
    indicators::{self, Entity as IndicatorsEntity},
    objectives::Entity as ObjectivesEntity,
    outcome_objectives::{self, Entity as OutcomeObjectivesEntity},
    outcomes::{self, Column as OutcomeColumn, Entity as OutcomesEntity},
    timestamps::Timestamped,
};
use error::{AppError, Result, ResultExt};
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
    ConnectionTrait,
    EntityTrait,
    IntoActiveModel,
    QueryFilter,
    QueryOrder,
    Set,
    TransactionTrait,
};
use tracing::info;
use validator::Validate;

use super::{ensure_exists, fetch_page};
use crate::{
    dto::{
        dedup_ids,
        outcomes::{OutcomeListQuery, OutcomeListResponse, OutcomeRequest, OutcomeResponse},
        DeleteResponse,
    },
    AppState,
};

fn apply(active: &mut outcomes::ActiveModel, req: &OutcomeRequest) {
    active.name = Set(req.name.clone());
    active.indicator_id = Set(req.indicator_id);
    active.achieved_percent = Set(req.achieved_percent);
    active.description = Set(req.description.clone());
    active.created_by = Set(req.created_by);
}

async fn find(state: &AppState, id: i32) -> Result<outcomes::Model> {
    OutcomesEntity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Outcome {} not found", id)))
}

async fn check_references<C: ConnectionTrait>(db: &C, req: &OutcomeRequest) -> Result<()> {
    ensure_exists::<ObjectivesEntity, _>(db, "objective_ids", &req.objective_ids).await?;
    if let Some(indicator_id) = req.indicator_id {
        ensure_exists::<IndicatorsEntity, _>(db, "indicator_id", &[indicator_id]).await?;
    }
    Ok(())
}

/// Replace the objective links of one outcome, keeping request order.
async fn replace_objectives<C: ConnectionTrait>(db: &C, outcome_id: i32, objective_ids: &[i32]) -> Result<Vec<i32>> {
    OutcomeObjectivesEntity::delete_many()
        .filter(outcome_objectives::Column::OutcomeId.eq(outcome_id))
        .exec(db)
        .await?;

    let ids = dedup_ids(objective_ids);
    if !ids.is_empty() {
        let links = ids.iter().map(|objective_id| {
            outcome_objectives::ActiveModel {
                outcome_id: Set(outcome_id),
                objective_id: Set(*objective_id),
                ..Default::default()
            }
        });
        OutcomeObjectivesEntity::insert_many(links).exec(db).await?;
    }
    Ok(ids)
}

/// Objective ids per outcome, in link order.
async fn objective_ids_for<C: ConnectionTrait>(db: &C, outcome_ids: &[i32]) -> Result<HashMap<i32, Vec<i32>>> {
    let links = OutcomeObjectivesEntity::find()
        .filter(outcome_objectives::Column::OutcomeId.is_in(outcome_ids.iter().copied()))
        .order_by_asc(outcome_objectives::Column::Id)
        .all(db)
        .await?;

    let mut grouped: HashMap<i32, Vec<i32>> = HashMap::new();
    for link in links {
        grouped
            .entry(link.outcome_id)
            .or_default()
            .push(link.objective_id);
    }
    Ok(grouped)
}

/// Create a new outcome together with its objective links
pub async fn create_outcome_handler(state: &AppState, req: OutcomeRequest) -> Result<Json<OutcomeResponse>> {
    req.validate()?;

    let txn = state.db.begin().await?;
    check_references(&txn, &req).await?;

    let mut active = outcomes::ActiveModel {
        ..Default::default()
    };
    apply(&mut active, &req);
    active.touch(state.clock.now());

    let created = active
        .insert(&txn)
        .await
        .context("Failed to create outcome")?;
    let objective_ids = replace_objectives(&txn, created.id, &req.objective_ids).await?;
    txn.commit().await?;

    info!(outcome_id = %created.id, objectives = objective_ids.len(), "Outcome created");

    Ok(Json(OutcomeResponse::new(created, objective_ids)))
}

/// Get a single outcome by ID
pub async fn get_outcome_handler(state: &AppState, id: i32) -> Result<Json<OutcomeResponse>> {
    let outcome = find(state, id).await?;
    let objective_ids = objective_ids_for(&state.db, &[id])
        .await?
        .remove(&id)
        .unwrap_or_default();

    Ok(Json(OutcomeResponse::new(outcome, objective_ids)))
}

/// Replace every writable field and the objective links of an outcome
pub async fn update_outcome_handler(state: &AppState, id: i32, req: OutcomeRequest) -> Result<Json<OutcomeResponse>> {
    req.validate()?;

    let existing = find(state, id).await?;

    let txn = state.db.begin().await?;
    check_references(&txn, &req).await?;

    let mut active = existing.into_active_model();
    apply(&mut active, &req);
    active.touch(state.clock.now());

    let updated = active
        .update(&txn)
        .await
        .context("Failed to update outcome")?;
    let objective_ids = replace_objectives(&txn, id, &req.objective_ids).await?;
    txn.commit().await?;

    info!(outcome_id = %id, "Outcome updated");

    Ok(Json(OutcomeResponse::new(updated, objective_ids)))
}

/// List outcomes ordered by the name of their indicator, then their own name
///
/// Outcomes without an indicator sort where the backend puts nulls.
pub async fn list_outcomes_handler(state: &AppState, query: OutcomeListQuery) -> Result<Json<OutcomeListResponse>> {
    let mut select = OutcomesEntity::find().left_join(IndicatorsEntity);
    if let Some(indicator_id) = query.indicator_id {
        select = select.filter(OutcomeColumn::IndicatorId.eq(indicator_id));
    }
    let select = select
        .order_by_asc(indicators::Column::Name)
        .order_by_asc(OutcomeColumn::Name)
        .order_by_asc(OutcomeColumn::Id);

    let (items, pagination) = fetch_page(&state.db, select, &query).await?;

    let ids: Vec<i32> = items.iter().map(|o| o.id).collect();
    let mut links = objective_ids_for(&state.db, &ids).await?;

    let outcomes = items
        .into_iter()
        .map(|outcome| {
            let objective_ids = links.remove(&outcome.id).unwrap_or_default();
            OutcomeResponse::new(outcome, objective_ids)
        })
        .collect();

    Ok(Json(OutcomeListResponse {
        success: true,
        outcomes,
        pagination,
    }))
}

/// Delete an outcome and unlink it from objectives and indicators
pub async fn delete_outcome_handler(state: &AppState, id: i32) -> Result<Json<DeleteResponse>> {
    find(state, id).await?;

    let txn = state.db.begin().await?;
    OutcomeObjectivesEntity::delete_many()
        .filter(outcome_objectives::Column::OutcomeId.eq(id))
        .exec(&txn)
        .await?;
    IndicatorOutcomesEntity::delete_many()
        .filter(indicator_outcomes::Column::OutcomeId.eq(id))
        .exec(&txn)
        .await?;
    OutcomesEntity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    info!(outcome_id = %id, "Outcome deleted");

    Ok(Json(DeleteResponse::new("Outcome deleted successfully")))
}
