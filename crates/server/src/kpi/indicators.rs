//! # Indicator Handlers
//!
//! An indicator and its links to indicator types, objectives and outcomes are
//! written in one transaction. Every committed create, update and delete is
//! passed to the configured [`IndicatorHistory`](crate::IndicatorHistory).

use std::collections::HashMap;

use axum::Json;
use chrono::{DateTime, Utc};
use entity::{
    indicator_indicator_types::{self, Entity as IndicatorIndicatorTypesEntity},
    indicator_objectives::{self, Entity as IndicatorObjectivesEntity},
    indicator_outcomes::{self, Entity as IndicatorOutcomesEntity},
    indicator_types::{self, Entity as IndicatorTypesEntity},
    indicators::{self, Column as IndicatorColumn, Entity as IndicatorsEntity, IndicatorWithAssociations},
    levels::Entity as LevelsEntity,
    objectives::{self, Entity as ObjectivesEntity},
    outcomes::{self, Entity as OutcomesEntity},
    periodic_targets::{self, Entity as PeriodicTargetsEntity},
    timestamps::Timestamped,
};
use error::{AppError, Result, ResultExt};
use sea_orm::{
    sea_query::Expr,
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
use uuid::Uuid;
use validator::Validate;

use super::{ensure_exists, fetch_page};
use crate::{
    dto::{
        dedup_ids,
        indicators::{
            IndicatorDisplay,
            IndicatorLinks,
            IndicatorListQuery,
            IndicatorListResponse,
            IndicatorRequest,
            IndicatorResponse,
            IndicatorRetrieveQuery,
        },
        DeleteResponse,
    },
    history::HistoryAction,
    AppState,
};

fn apply(active: &mut indicators::ActiveModel, req: &IndicatorRequest) {
    active.name = Set(req.name.clone());
    active.level_id = Set(req.level_id);
    active.definition = Set(req.definition.clone());
    active.comments = Set(req.comments.clone());
    active.workflowlevel1 = Set(req.workflowlevel1);
    active.key_performance_indicator = Set(req.key_performance_indicator);
    active.direction = Set(req.direction);
    active.actual_formula = Set(req.actual_formula);
    active.actuals = Set(req.actuals);
    active.notes = Set(req.notes.clone());
    active.created_by = Set(req.created_by);
}

async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<indicators::Model> {
    IndicatorsEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Indicator {} not found", id)))
}

async fn check_references<C: ConnectionTrait>(db: &C, req: &IndicatorRequest) -> Result<()> {
    if let Some(level_id) = req.level_id {
        ensure_exists::<LevelsEntity, _>(db, "level_id", &[level_id]).await?;
    }
    ensure_exists::<IndicatorTypesEntity, _>(db, "indicator_type_ids", &req.indicator_type_ids).await?;
    ensure_exists::<ObjectivesEntity, _>(db, "objective_ids", &req.objective_ids).await?;
    ensure_exists::<OutcomesEntity, _>(db, "outcome_ids", &req.outcome_ids).await?;
    Ok(())
}

/// Replace all association rows of one indicator with the ids in `req`.
async fn replace_links<C: ConnectionTrait>(db: &C, indicator_id: i32, req: &IndicatorRequest) -> Result<IndicatorLinks> {
    IndicatorIndicatorTypesEntity::delete_many()
        .filter(indicator_indicator_types::Column::IndicatorId.eq(indicator_id))
        .exec(db)
        .await?;
    IndicatorObjectivesEntity::delete_many()
        .filter(indicator_objectives::Column::IndicatorId.eq(indicator_id))
        .exec(db)
        .await?;
    IndicatorOutcomesEntity::delete_many()
        .filter(indicator_outcomes::Column::IndicatorId.eq(indicator_id))
        .exec(db)
        .await?;

    let links = IndicatorLinks {
        indicator_type_ids: dedup_ids(&req.indicator_type_ids),
        objective_ids:      dedup_ids(&req.objective_ids),
        outcome_ids:        dedup_ids(&req.outcome_ids),
    };

    if !links.indicator_type_ids.is_empty() {
        let rows = links.indicator_type_ids.iter().map(|id| {
            indicator_indicator_types::ActiveModel {
                indicator_id: Set(indicator_id),
                indicator_type_id: Set(*id),
                ..Default::default()
            }
        });
        IndicatorIndicatorTypesEntity::insert_many(rows).exec(db).await?;
    }
    if !links.objective_ids.is_empty() {
        let rows = links.objective_ids.iter().map(|id| {
            indicator_objectives::ActiveModel {
                indicator_id: Set(indicator_id),
                objective_id: Set(*id),
                ..Default::default()
            }
        });
        IndicatorObjectivesEntity::insert_many(rows).exec(db).await?;
    }
    if !links.outcome_ids.is_empty() {
        let rows = links.outcome_ids.iter().map(|id| {
            indicator_outcomes::ActiveModel {
                indicator_id: Set(indicator_id),
                outcome_id: Set(*id),
                ..Default::default()
            }
        });
        IndicatorOutcomesEntity::insert_many(rows).exec(db).await?;
    }

    Ok(links)
}

/// Association ids for a batch of indicators, in link order.
async fn load_links<C: ConnectionTrait>(db: &C, indicator_ids: &[i32]) -> Result<HashMap<i32, IndicatorLinks>> {
    let mut grouped: HashMap<i32, IndicatorLinks> = HashMap::new();
    if indicator_ids.is_empty() {
        return Ok(grouped);
    }

    let type_links = IndicatorIndicatorTypesEntity::find()
        .filter(indicator_indicator_types::Column::IndicatorId.is_in(indicator_ids.iter().copied()))
        .order_by_asc(indicator_indicator_types::Column::Id)
        .all(db)
        .await?;
    for link in type_links {
        grouped
            .entry(link.indicator_id)
            .or_default()
            .indicator_type_ids
            .push(link.indicator_type_id);
    }

    let objective_links = IndicatorObjectivesEntity::find()
        .filter(indicator_objectives::Column::IndicatorId.is_in(indicator_ids.iter().copied()))
        .order_by_asc(indicator_objectives::Column::Id)
        .all(db)
        .await?;
    for link in objective_links {
        grouped
            .entry(link.indicator_id)
            .or_default()
            .objective_ids
            .push(link.objective_id);
    }

    let outcome_links = IndicatorOutcomesEntity::find()
        .filter(indicator_outcomes::Column::IndicatorId.is_in(indicator_ids.iter().copied()))
        .order_by_asc(indicator_outcomes::Column::Id)
        .all(db)
        .await?;
    for link in outcome_links {
        grouped
            .entry(link.indicator_id)
            .or_default()
            .outcome_ids
            .push(link.outcome_id);
    }

    Ok(grouped)
}

/// Reorder `rows` to follow `ids`.
fn in_link_order<M>(rows: Vec<M>, ids: &[i32], id_of: impl Fn(&M) -> i32) -> Vec<M> {
    let mut by_id: HashMap<i32, M> = rows.into_iter().map(|row| (id_of(&row), row)).collect();
    ids.iter().filter_map(|id| by_id.remove(id)).collect()
}

async fn load_associations<C: ConnectionTrait>(
    db: &C,
    indicator: indicators::Model,
    links: &IndicatorLinks,
) -> Result<IndicatorWithAssociations> {
    let level = match indicator.level_id {
        Some(level_id) => LevelsEntity::find_by_id(level_id).one(db).await?,
        None => None,
    };

    let indicator_types = IndicatorTypesEntity::find()
        .filter(indicator_types::Column::Id.is_in(links.indicator_type_ids.iter().copied()))
        .all(db)
        .await?;
    let objectives = ObjectivesEntity::find()
        .filter(objectives::Column::Id.is_in(links.objective_ids.iter().copied()))
        .all(db)
        .await?;
    let outcomes = OutcomesEntity::find()
        .filter(outcomes::Column::Id.is_in(links.outcome_ids.iter().copied()))
        .all(db)
        .await?;

    Ok(IndicatorWithAssociations {
        indicator,
        level,
        indicator_types: in_link_order(indicator_types, &links.indicator_type_ids, |t| t.id),
        objectives: in_link_order(objectives, &links.objective_ids, |o| o.id),
        outcomes: in_link_order(outcomes, &links.outcome_ids, |o| o.id),
    })
}

async fn build_response<C: ConnectionTrait>(
    db: &C,
    indicator: indicators::Model,
    links: IndicatorLinks,
    with_associations: bool,
    now: DateTime<Utc>,
) -> Result<IndicatorResponse> {
    if !with_associations {
        return Ok(IndicatorResponse::new(indicator, links));
    }

    let loaded = load_associations(db, indicator.clone(), &links).await?;
    Ok(IndicatorResponse::new(indicator, links).with_display(IndicatorDisplay::new(&loaded, now)))
}

/// Load one indicator together with its level, indicator types, objectives
/// and outcomes.
pub async fn load_indicator_with_associations(state: &AppState, id: i32) -> Result<IndicatorWithAssociations> {
    let indicator = find(&state.db, id).await?;
    let links = load_links(&state.db, &[id])
        .await?
        .remove(&id)
        .unwrap_or_default();
    load_associations(&state.db, indicator, &links).await
}

/// Create a new indicator
///
/// A fresh v4 `indicator_uuid` is generated; any value sent by the client is ignored.
pub async fn create_indicator_handler(state: &AppState, req: IndicatorRequest) -> Result<Json<IndicatorResponse>> {
    req.validate()?;

    let txn = state.db.begin().await?;
    check_references(&txn, &req).await?;

    let mut active = indicators::ActiveModel {
        indicator_uuid: Set(Uuid::new_v4().to_string()),
        ..Default::default()
    };
    apply(&mut active, &req);
    active.touch(state.clock.now());

    let created = active
        .insert(&txn)
        .await
        .context("Failed to create indicator")?;
    let links = replace_links(&txn, created.id, &req).await?;
    txn.commit().await?;

    state.history.record(HistoryAction::Created, &created);
    info!(indicator_id = %created.id, indicator_uuid = %created.indicator_uuid, "Indicator created");

    Ok(Json(IndicatorResponse::new(created, links)))
}

/// Get a single indicator by ID
pub async fn get_indicator_handler(
    state: &AppState,
    id: i32,
    query: IndicatorRetrieveQuery,
) -> Result<Json<IndicatorResponse>> {
    let indicator = find(&state.db, id).await?;
    let links = load_links(&state.db, &[id])
        .await?
        .remove(&id)
        .unwrap_or_default();

    let response = build_response(
        &state.db,
        indicator,
        links,
        query.with_associations,
        state.clock.now(),
    )
    .await?;

    Ok(Json(response))
}

/// Replace every writable field and all association links of an indicator
///
/// `indicator_uuid` and `create_date` are kept.
pub async fn update_indicator_handler(
    state: &AppState,
    id: i32,
    req: IndicatorRequest,
) -> Result<Json<IndicatorResponse>> {
    req.validate()?;

    let txn = state.db.begin().await?;
    let existing = find(&txn, id).await?;
    check_references(&txn, &req).await?;

    let mut active = existing.into_active_model();
    apply(&mut active, &req);
    active.touch(state.clock.now());

    let updated = active
        .update(&txn)
        .await
        .context("Failed to update indicator")?;
    let links = replace_links(&txn, id, &req).await?;
    txn.commit().await?;

    state.history.record(HistoryAction::Updated, &updated);
    info!(indicator_id = %id, "Indicator updated");

    Ok(Json(IndicatorResponse::new(updated, links)))
}

/// List indicators ordered by `create_date`
pub async fn list_indicators_handler(state: &AppState, query: IndicatorListQuery) -> Result<Json<IndicatorListResponse>> {
    let mut select = IndicatorsEntity::find();
    if let Some(workflowlevel1) = query.workflowlevel1 {
        select = select.filter(IndicatorColumn::Workflowlevel1.eq(workflowlevel1));
    }
    if let Some(level_id) = query.level_id {
        select = select.filter(IndicatorColumn::LevelId.eq(level_id));
    }
    let select = select
        .order_by_asc(IndicatorColumn::CreateDate)
        .order_by_asc(IndicatorColumn::Id);

    let (items, pagination) = fetch_page(&state.db, select, &query).await?;

    let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
    let mut links = load_links(&state.db, &ids).await?;
    let now = state.clock.now();

    let mut indicators = Vec::with_capacity(items.len());
    for indicator in items {
        let indicator_links = links.remove(&indicator.id).unwrap_or_default();
        indicators.push(build_response(&state.db, indicator, indicator_links, query.with_associations, now).await?);
    }

    Ok(Json(IndicatorListResponse {
        success: true,
        indicators,
        pagination,
    }))
}

/// Delete an indicator
///
/// Outcomes and periodic targets that referenced it are kept with a null
/// `indicator_id`; its association links are removed.
pub async fn delete_indicator_handler(state: &AppState, id: i32) -> Result<Json<DeleteResponse>> {
    let txn = state.db.begin().await?;
    let existing = find(&txn, id).await?;

    OutcomesEntity::update_many()
        .col_expr(outcomes::Column::IndicatorId, Expr::value(Option::<i32>::None))
        .filter(outcomes::Column::IndicatorId.eq(id))
        .exec(&txn)
        .await?;
    PeriodicTargetsEntity::update_many()
        .col_expr(periodic_targets::Column::IndicatorId, Expr::value(Option::<i32>::None))
        .filter(periodic_targets::Column::IndicatorId.eq(id))
        .exec(&txn)
        .await?;
    IndicatorIndicatorTypesEntity::delete_many()
        .filter(indicator_indicator_types::Column::IndicatorId.eq(id))
        .exec(&txn)
        .await?;
    IndicatorObjectivesEntity::delete_many()
        .filter(indicator_objectives::Column::IndicatorId.eq(id))
        .exec(&txn)
        .await?;
    IndicatorOutcomesEntity::delete_many()
        .filter(indicator_outcomes::Column::IndicatorId.eq(id))
        .exec(&txn)
        .await?;
    IndicatorsEntity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    state.history.record(HistoryAction::Deleted, &existing);
    info!(indicator_id = %id, "Indicator deleted");

    Ok(Json(DeleteResponse::new("Indicator deleted successfully")))
}
