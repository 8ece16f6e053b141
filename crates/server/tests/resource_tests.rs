//! # Resource Integration Tests
//!
//! Create, update, list and delete behaviour of the supporting KPI resources.

mod common;

use std::str::FromStr;

use chrono::Duration;
use common::{indicator_request, level_request, objective_request, t0, TestContext};
use rust_decimal::Decimal;
use server::{
    dto::{
        indicator_sorts::{IndicatorSortListQuery, IndicatorSortRequest},
        indicator_types::{IndicatorTypeListQuery, IndicatorTypeRequest},
        indicators::{IndicatorRequest, IndicatorRetrieveQuery},
        levels::LevelListQuery,
        objectives::{ObjectiveListQuery, ObjectiveRequest},
        outcomes::{OutcomeListQuery, OutcomeRequest},
        periodic_targets::{PeriodicTargetListQuery, PeriodicTargetRequest},
    },
    kpi::{
        indicator_sorts::{
            create_indicator_sort_handler,
            get_indicator_sort_handler,
            list_indicator_sorts_handler,
            update_indicator_sort_handler,
        },
        indicator_types::{
            create_indicator_type_handler,
            delete_indicator_type_handler,
            list_indicator_types_handler,
            update_indicator_type_handler,
        },
        indicators::{create_indicator_handler, delete_indicator_handler, get_indicator_handler},
        levels::{create_level_handler, delete_level_handler, get_level_handler, list_levels_handler},
        objectives::{create_objective_handler, delete_objective_handler, list_objectives_handler},
        outcomes::{create_outcome_handler, list_outcomes_handler, update_outcome_handler},
        periodic_targets::{
            create_periodic_target_handler,
            delete_periodic_target_handler,
            list_periodic_targets_handler,
            update_periodic_target_handler,
        },
    },
};
use uuid::Uuid;

fn outcome_request(name: &str, indicator_id: Option<i32>) -> OutcomeRequest {
    OutcomeRequest {
        name: name.to_string(),
        objective_ids: vec![],
        indicator_id,
        achieved_percent: None,
        description: String::new(),
        created_by: None,
    }
}

fn target_request(indicator_id: i32, period: &str, customsort: Option<i32>) -> PeriodicTargetRequest {
    PeriodicTargetRequest {
        indicator_id: Some(indicator_id),
        period: Some(period.to_string()),
        target: Decimal::ONE,
        customsort,
    }
}

#[tokio::test]
async fn test_indicator_type_crud() {
    let ctx = TestContext::new().await;
    let organization = Uuid::new_v4();

    let created = create_indicator_type_handler(&ctx.state, IndicatorTypeRequest {
        indicator_type: "Quantitative".to_string(),
        description:    "Counted things".to_string(),
        default_global: false,
        organization:   Some(organization),
    })
    .await
    .unwrap()
    .0;
    create_indicator_type_handler(&ctx.state, IndicatorTypeRequest {
        indicator_type: "Qualitative".to_string(),
        description:    String::new(),
        default_global: true,
        organization:   None,
    })
    .await
    .unwrap();

    ctx.clock.advance(Duration::minutes(3));
    let updated = update_indicator_type_handler(&ctx.state, created.id, IndicatorTypeRequest {
        indicator_type: "Quantitative (count)".to_string(),
        description:    String::new(),
        default_global: true,
        organization:   Some(organization),
    })
    .await
    .unwrap()
    .0;
    assert_eq!(updated.indicator_type, "Quantitative (count)");
    assert_eq!(updated.create_date, Some(t0()));
    assert_eq!(updated.edit_date, Some(t0() + Duration::minutes(3)));

    let scoped = list_indicator_types_handler(&ctx.state, IndicatorTypeListQuery {
        organization: Some(organization),
        ..Default::default()
    })
    .await
    .unwrap()
    .0;
    assert_eq!(scoped.indicator_types.len(), 1);
    assert_eq!(scoped.indicator_types[0].id, created.id);

    delete_indicator_type_handler(&ctx.state, created.id)
        .await
        .unwrap();
    let err = delete_indicator_type_handler(&ctx.state, created.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_indicator_type_label_length() {
    let ctx = TestContext::new().await;
    let err = create_indicator_type_handler(&ctx.state, IndicatorTypeRequest {
        indicator_type: "x".repeat(136),
        description:    String::new(),
        default_global: false,
        organization:   None,
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert_eq!(
        err.message(),
        "indicator_type: Ensure this field has no more than 135 characters."
    );
}

#[tokio::test]
async fn test_objectives_ordered_by_workflow_then_name() {
    let ctx = TestContext::new().await;
    let wfl = Uuid::new_v4();

    for name in ["Zinc", "Access", "Moderate"] {
        create_objective_handler(&ctx.state, ObjectiveRequest {
            workflowlevel1: Some(wfl),
            ..objective_request(name)
        })
        .await
        .unwrap();
    }
    create_objective_handler(&ctx.state, objective_request("Elsewhere"))
        .await
        .unwrap();

    let listed = list_objectives_handler(&ctx.state, ObjectiveListQuery {
        workflowlevel1: Some(wfl),
        ..Default::default()
    })
    .await
    .unwrap()
    .0;
    let names: Vec<&str> = listed.objectives.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Access", "Moderate", "Zinc"]);
}

#[tokio::test]
async fn test_deleting_objective_unlinks_indicator() {
    let ctx = TestContext::new().await;
    let a = create_objective_handler(&ctx.state, objective_request("A"))
        .await
        .unwrap()
        .0;
    let b = create_objective_handler(&ctx.state, objective_request("B"))
        .await
        .unwrap()
        .0;
    let indicator = create_indicator_handler(&ctx.state, IndicatorRequest {
        objective_ids: vec![a.id, b.id],
        ..indicator_request("Literacy Rate")
    })
    .await
    .unwrap()
    .0;

    delete_objective_handler(&ctx.state, a.id).await.unwrap();

    let reloaded = get_indicator_handler(&ctx.state, indicator.id, IndicatorRetrieveQuery {
        with_associations: true,
    })
    .await
    .unwrap()
    .0;
    assert_eq!(reloaded.objective_ids, vec![b.id]);
    assert_eq!(reloaded.display.unwrap().objectives_list, "B");
}

#[tokio::test]
async fn test_outcomes_ordered_by_indicator_name_then_name() {
    let ctx = TestContext::new().await;
    let literacy = create_indicator_handler(&ctx.state, indicator_request("Literacy"))
        .await
        .unwrap()
        .0;
    let access = create_indicator_handler(&ctx.state, indicator_request("Access"))
        .await
        .unwrap()
        .0;

    create_outcome_handler(&ctx.state, outcome_request("Second", Some(literacy.id)))
        .await
        .unwrap();
    create_outcome_handler(&ctx.state, outcome_request("First", Some(literacy.id)))
        .await
        .unwrap();
    create_outcome_handler(&ctx.state, outcome_request("Only", Some(access.id)))
        .await
        .unwrap();

    let listed = list_outcomes_handler(&ctx.state, OutcomeListQuery::default())
        .await
        .unwrap()
        .0;
    let names: Vec<&str> = listed.outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Only", "First", "Second"]);

    let filtered = list_outcomes_handler(&ctx.state, OutcomeListQuery {
        indicator_id: Some(access.id),
        ..Default::default()
    })
    .await
    .unwrap()
    .0;
    assert_eq!(filtered.outcomes.len(), 1);
    assert_eq!(filtered.pagination.total_items, 1);
}

#[tokio::test]
async fn test_outcome_objective_links_replaced_on_update() {
    let ctx = TestContext::new().await;
    let a = create_objective_handler(&ctx.state, objective_request("A"))
        .await
        .unwrap()
        .0;
    let b = create_objective_handler(&ctx.state, objective_request("B"))
        .await
        .unwrap()
        .0;

    let created = create_outcome_handler(&ctx.state, OutcomeRequest {
        objective_ids: vec![a.id],
        achieved_percent: Some(Decimal::from_str("50").unwrap()),
        ..outcome_request("More adults read", None)
    })
    .await
    .unwrap()
    .0;
    assert_eq!(created.objective_ids, vec![a.id]);
    assert_eq!(created.achieved_percent.unwrap().to_string(), "50.0000");

    let updated = update_outcome_handler(&ctx.state, created.id, OutcomeRequest {
        objective_ids: vec![b.id, a.id],
        ..outcome_request("More adults read", None)
    })
    .await
    .unwrap()
    .0;
    assert_eq!(updated.objective_ids, vec![b.id, a.id]);
    assert_eq!(updated.achieved_percent, None);

    let err = update_outcome_handler(&ctx.state, created.id, OutcomeRequest {
        objective_ids: vec![999],
        ..outcome_request("More adults read", None)
    })
    .await
    .unwrap_err();
    assert_eq!(
        err.message(),
        "objective_ids: Invalid pk \"999\" - object does not exist."
    );
}

#[tokio::test]
async fn test_levels_filter_and_missing_level() {
    let ctx = TestContext::new().await;
    let organization = Uuid::new_v4();

    let root = create_level_handler(&ctx.state, level_request("Goal"))
        .await
        .unwrap()
        .0;
    create_level_handler(&ctx.state, server::dto::levels::LevelRequest {
        organization: Some(organization),
        parent_id: root.id,
        sort: 1,
        color: "#1f77b4".to_string(),
        ..level_request("Outcome")
    })
    .await
    .unwrap();

    let scoped = list_levels_handler(&ctx.state, LevelListQuery {
        organization: Some(organization),
        ..Default::default()
    })
    .await
    .unwrap()
    .0;
    assert_eq!(scoped.levels.len(), 1);
    assert_eq!(scoped.levels[0].parent_id, root.id);

    let err = get_level_handler(&ctx.state, 9999).await.unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.message(), "Level 9999 not found");
}

#[tokio::test]
async fn test_periodic_targets_ordered_by_customsort() {
    let ctx = TestContext::new().await;
    let indicator = create_indicator_handler(&ctx.state, indicator_request("Literacy Rate"))
        .await
        .unwrap()
        .0;

    create_periodic_target_handler(&ctx.state, target_request(indicator.id, "Q3", Some(3)))
        .await
        .unwrap();
    create_periodic_target_handler(&ctx.state, target_request(indicator.id, "Q1", Some(1)))
        .await
        .unwrap();
    create_periodic_target_handler(&ctx.state, target_request(indicator.id, "Q2", Some(2)))
        .await
        .unwrap();

    let listed = list_periodic_targets_handler(&ctx.state, PeriodicTargetListQuery {
        indicator_id: Some(indicator.id),
        ..Default::default()
    })
    .await
    .unwrap()
    .0;
    let periods: Vec<&str> = listed
        .periodic_targets
        .iter()
        .filter_map(|t| t.period.as_deref())
        .collect();
    assert_eq!(periods, vec!["Q1", "Q2", "Q3"]);
}

#[tokio::test]
async fn test_periodic_target_survives_indicator_delete() {
    let ctx = TestContext::new().await;
    let indicator = create_indicator_handler(&ctx.state, indicator_request("Literacy Rate"))
        .await
        .unwrap()
        .0;
    let target = create_periodic_target_handler(&ctx.state, target_request(indicator.id, "Q1", None))
        .await
        .unwrap()
        .0;

    delete_indicator_handler(&ctx.state, indicator.id)
        .await
        .unwrap();

    let orphaned = list_periodic_targets_handler(&ctx.state, PeriodicTargetListQuery::default())
        .await
        .unwrap()
        .0;
    assert_eq!(orphaned.periodic_targets.len(), 1);
    assert_eq!(orphaned.periodic_targets[0].indicator_id, None);

    // A write must name a live indicator again.
    let err = update_periodic_target_handler(&ctx.state, target.id, target_request(indicator.id, "Q1", None))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");

    delete_periodic_target_handler(&ctx.state, target.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_indicator_sort_unique_per_grouping_and_level() {
    let ctx = TestContext::new().await;
    let wfl = Uuid::new_v4();
    let level = create_level_handler(&ctx.state, level_request("Goal"))
        .await
        .unwrap()
        .0;

    let req = IndicatorSortRequest {
        workflowlevel1: Some(wfl),
        level_id:       Some(level.id),
        sort_array:     Some(vec![3, 1, 2]),
    };
    let created = create_indicator_sort_handler(&ctx.state, req.clone())
        .await
        .unwrap()
        .0;
    assert_eq!(created.sort_array, Some(vec![3, 1, 2]));

    let err = create_indicator_sort_handler(&ctx.state, req.clone())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert!(err.message().contains("must make a unique set"));

    // Updating the row onto its own pair is fine.
    let updated = update_indicator_sort_handler(&ctx.state, created.id, IndicatorSortRequest {
        sort_array: Some(vec![1, 2, 3]),
        ..req
    })
    .await
    .unwrap()
    .0;
    assert_eq!(updated.sort_array, Some(vec![1, 2, 3]));

    // Rows without a level never collide.
    for _ in 0..2 {
        create_indicator_sort_handler(&ctx.state, IndicatorSortRequest {
            workflowlevel1: Some(wfl),
            level_id:       None,
            sort_array:     None,
        })
        .await
        .unwrap();
    }

    let listed = list_indicator_sorts_handler(&ctx.state, IndicatorSortListQuery {
        workflowlevel1: Some(wfl),
        ..Default::default()
    })
    .await
    .unwrap()
    .0;
    assert_eq!(listed.indicator_sorts.len(), 3);
}

#[tokio::test]
async fn test_indicator_sort_keeps_stale_ids_and_loses_level() {
    let ctx = TestContext::new().await;
    let level = create_level_handler(&ctx.state, level_request("Goal"))
        .await
        .unwrap()
        .0;
    let indicator = create_indicator_handler(&ctx.state, indicator_request("Literacy Rate"))
        .await
        .unwrap()
        .0;

    let sort = create_indicator_sort_handler(&ctx.state, IndicatorSortRequest {
        workflowlevel1: None,
        level_id:       Some(level.id),
        sort_array:     Some(vec![indicator.id, 42]),
    })
    .await
    .unwrap()
    .0;

    delete_indicator_handler(&ctx.state, indicator.id)
        .await
        .unwrap();
    delete_level_handler(&ctx.state, level.id).await.unwrap();

    let reloaded = get_indicator_sort_handler(&ctx.state, sort.id)
        .await
        .unwrap()
        .0;
    assert_eq!(reloaded.level_id, None);
    assert_eq!(reloaded.sort_array, Some(vec![indicator.id, 42]));
}

#[tokio::test]
async fn test_outcome_and_sort_timestamps() {
    let ctx = TestContext::new().await;

    let outcome = create_outcome_handler(&ctx.state, outcome_request("Reading age", None))
        .await
        .unwrap()
        .0;
    let sort = create_indicator_sort_handler(&ctx.state, IndicatorSortRequest {
        workflowlevel1: Some(Uuid::new_v4()),
        level_id:       None,
        sort_array:     Some(vec![]),
    })
    .await
    .unwrap()
    .0;
    assert_eq!(outcome.create_date, Some(t0()));
    assert_eq!(outcome.edit_date, Some(t0()));
    assert_eq!(sort.create_date, Some(t0()));
    assert_eq!(sort.edit_date, Some(t0()));

    ctx.clock.advance(Duration::minutes(2));
    let outcome = update_outcome_handler(&ctx.state, outcome.id, outcome_request("Reading age (10)", None))
        .await
        .unwrap()
        .0;
    let sort = update_indicator_sort_handler(&ctx.state, sort.id, IndicatorSortRequest {
        workflowlevel1: sort.workflowlevel1,
        level_id:       None,
        sort_array:     Some(vec![5]),
    })
    .await
    .unwrap()
    .0;

    assert_eq!(outcome.create_date, Some(t0()));
    assert_eq!(outcome.edit_date, Some(t0() + Duration::minutes(2)));
    assert_eq!(sort.create_date, Some(t0()));
    assert_eq!(sort.edit_date, Some(t0() + Duration::minutes(2)));
    assert!(sort.edit_date >= sort.create_date);
}

#[tokio::test]
async fn test_periodic_target_dates_are_not_stamped() {
    let ctx = TestContext::new().await;
    let indicator = create_indicator_handler(&ctx.state, indicator_request("Literacy Rate"))
        .await
        .unwrap()
        .0;

    let target = create_periodic_target_handler(&ctx.state, target_request(indicator.id, "Q1", Some(1)))
        .await
        .unwrap()
        .0;
    assert_eq!(target.create_date, None);
    assert_eq!(target.edit_date, None);

    ctx.clock.advance(Duration::minutes(2));
    let target = update_periodic_target_handler(&ctx.state, target.id, target_request(indicator.id, "Q1", Some(2)))
        .await
        .unwrap()
        .0;
    assert_eq!(target.customsort, Some(2));
    assert_eq!(target.create_date, None);
    assert_eq!(target.edit_date, None);
}
