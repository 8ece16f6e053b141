//! # API Router Configuration
//!
//! Routes every KPI resource under `/api/v1`. Wrapper handlers turn axum
//! extractor rejections into [`AppError`] so malformed input gets the same
//! JSON error shape as any other failure.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path,
        Query,
        State as AxumState,
    },
    http::StatusCode,
    middleware,
    routing::get,
    Json,
    Router,
};
use error::{AppError, Result};

use crate::{
    dto::{
        indicator_sorts::{IndicatorSortListQuery, IndicatorSortRequest},
        indicator_types::{IndicatorTypeListQuery, IndicatorTypeRequest},
        indicators::{
            IndicatorListQuery,
            IndicatorListResponse,
            IndicatorRequest,
            IndicatorResponse,
            IndicatorRetrieveQuery,
        },
        levels::{LevelListQuery, LevelRequest},
        objectives::{ObjectiveListQuery, ObjectiveRequest},
        outcomes::{OutcomeListQuery, OutcomeRequest},
        periodic_targets::{PeriodicTargetListQuery, PeriodicTargetRequest},
        DeleteResponse,
        HealthResponse,
    },
    kpi,
    AppState,
};

type JsonBody<T> = std::result::Result<Json<T>, JsonRejection>;
type IdPath = std::result::Result<Path<i32>, PathRejection>;
type QueryParams<T> = std::result::Result<Query<T>, QueryRejection>;

fn json_body<T>(body: JsonBody<T>) -> Result<T> { body.map(|Json(value)| value).map_err(AppError::from) }

fn path_id(path: IdPath) -> Result<i32> { path.map(|Path(id)| id).map_err(AppError::from) }

fn query_params<T>(query: QueryParams<T>) -> Result<T> { query.map(|Query(value)| value).map_err(AppError::from) }

/// Build the five CRUD routes of one resource from its handler module.
macro_rules! resource_router {
    (
        $path:literal,
        $handlers:ident,
        request: $request:ty,
        query: $query:ty,
        create: $create:ident,
        get: $get:ident,
        update: $update:ident,
        list: $list:ident,
        delete: $delete:ident $(,)?
    ) => {
        Router::<AppState>::new()
            .route(
                $path,
                get(
                    |AxumState(state): AxumState<AppState>, query: QueryParams<$query>| async move {
                        kpi::$handlers::$list(&state, query_params(query)?).await
                    },
                )
                .post(
                    |AxumState(state): AxumState<AppState>, body: JsonBody<$request>| async move {
                        let created = kpi::$handlers::$create(&state, json_body(body)?).await?;
                        Ok::<_, AppError>((StatusCode::CREATED, created))
                    },
                ),
            )
            .route(
                concat!($path, "/:id"),
                get(|AxumState(state): AxumState<AppState>, id: IdPath| async move {
                    kpi::$handlers::$get(&state, path_id(id)?).await
                })
                .put(
                    |AxumState(state): AxumState<AppState>, id: IdPath, body: JsonBody<$request>| async move {
                        kpi::$handlers::$update(&state, path_id(id)?, json_body(body)?).await
                    },
                )
                .delete(|AxumState(state): AxumState<AppState>, id: IdPath| async move {
                    kpi::$handlers::$delete(&state, path_id(id)?).await
                }),
            )
    };
}

async fn list_indicators(
    AxumState(state): AxumState<AppState>,
    query: QueryParams<IndicatorListQuery>,
) -> Result<Json<IndicatorListResponse>> {
    kpi::indicators::list_indicators_handler(&state, query_params(query)?).await
}

async fn create_indicator(
    AxumState(state): AxumState<AppState>,
    body: JsonBody<IndicatorRequest>,
) -> Result<(StatusCode, Json<IndicatorResponse>)> {
    let created = kpi::indicators::create_indicator_handler(&state, json_body(body)?).await?;
    Ok((StatusCode::CREATED, created))
}

async fn get_indicator(
    AxumState(state): AxumState<AppState>,
    id: IdPath,
    query: QueryParams<IndicatorRetrieveQuery>,
) -> Result<Json<IndicatorResponse>> {
    kpi::indicators::get_indicator_handler(&state, path_id(id)?, query_params(query)?).await
}

async fn update_indicator(
    AxumState(state): AxumState<AppState>,
    id: IdPath,
    body: JsonBody<IndicatorRequest>,
) -> Result<Json<IndicatorResponse>> {
    kpi::indicators::update_indicator_handler(&state, path_id(id)?, json_body(body)?).await
}

async fn delete_indicator(AxumState(state): AxumState<AppState>, id: IdPath) -> Result<Json<DeleteResponse>> {
    kpi::indicators::delete_indicator_handler(&state, path_id(id)?).await
}

/// Creates the KPI API router
pub fn create_router() -> Router<AppState> {
    let indicators = Router::<AppState>::new()
        .route(
            "/api/v1/indicators",
            get(list_indicators).post(create_indicator),
        )
        .route(
            "/api/v1/indicators/:id",
            get(get_indicator)
                .put(update_indicator)
                .delete(delete_indicator),
        );

    Router::<AppState>::new()
        .merge(indicators)
        .merge(resource_router!(
            "/api/v1/indicator-types",
            indicator_types,
            request: IndicatorTypeRequest,
            query: IndicatorTypeListQuery,
            create: create_indicator_type_handler,
            get: get_indicator_type_handler,
            update: update_indicator_type_handler,
            list: list_indicator_types_handler,
            delete: delete_indicator_type_handler,
        ))
        .merge(resource_router!(
            "/api/v1/objectives",
            objectives,
            request: ObjectiveRequest,
            query: ObjectiveListQuery,
            create: create_objective_handler,
            get: get_objective_handler,
            update: update_objective_handler,
            list: list_objectives_handler,
            delete: delete_objective_handler,
        ))
        .merge(resource_router!(
            "/api/v1/outcomes",
            outcomes,
            request: OutcomeRequest,
            query: OutcomeListQuery,
            create: create_outcome_handler,
            get: get_outcome_handler,
            update: update_outcome_handler,
            list: list_outcomes_handler,
            delete: delete_outcome_handler,
        ))
        .merge(resource_router!(
            "/api/v1/levels",
            levels,
            request: LevelRequest,
            query: LevelListQuery,
            create: create_level_handler,
            get: get_level_handler,
            update: update_level_handler,
            list: list_levels_handler,
            delete: delete_level_handler,
        ))
        .merge(resource_router!(
            "/api/v1/periodic-targets",
            periodic_targets,
            request: PeriodicTargetRequest,
            query: PeriodicTargetListQuery,
            create: create_periodic_target_handler,
            get: get_periodic_target_handler,
            update: update_periodic_target_handler,
            list: list_periodic_targets_handler,
            delete: delete_periodic_target_handler,
        ))
        .merge(resource_router!(
            "/api/v1/indicator-sorts",
            indicator_sorts,
            request: IndicatorSortRequest,
            query: IndicatorSortListQuery,
            create: create_indicator_sort_handler,
            get: get_indicator_sort_handler,
            update: update_indicator_sort_handler,
            list: list_indicator_sorts_handler,
            delete: delete_indicator_sort_handler,
        ))
}

async fn health_handler(AxumState(state): AxumState<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status:         "ok".to_string(),
        version:        env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// Creates the health check router
pub fn create_health_router() -> Router<AppState> { Router::new().route("/health", get(health_handler)) }

/// Creates the main application router
///
/// Every response carries an `x-request-id` header and API requests get an
/// access log line.
pub fn create_app_router(state: AppState) -> Router {
    Router::<AppState>::new()
        .merge(create_health_router())
        .merge(create_router())
        .layer(middleware::from_fn(crate::middleware::access_log))
        .layer(middleware::from_fn(logging::request_id_middleware))
        .with_state(state)
}
