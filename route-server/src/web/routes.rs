//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{Preference, TransportMode};
use crate::planner::{PlanError, Planner, RouteQuery};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/cities", get(list_cities))
        .route("/api/transport-modes", get(list_modes))
        .route("/api/routes/search", get(search_routes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List supported cities, optionally filtered by name prefix.
async fn list_cities(
    State(state): State<AppState>,
    Query(req): Query<CitySearchRequest>,
) -> Json<CityListResponse> {
    let limit = req.limit.unwrap_or(20).min(50);
    let snapshot = state.store.current();

    let cities = snapshot
        .registry
        .search(req.q.as_deref().unwrap_or(""), limit)
        .into_iter()
        .map(CityResult::from_city)
        .collect();

    Json(CityListResponse { cities })
}

/// List transport modes in ranking order.
async fn list_modes() -> Json<ModeListResponse> {
    let modes = TransportMode::ALL
        .into_iter()
        .map(ModeResult::from_mode)
        .collect();

    Json(ModeListResponse { modes })
}

/// Compare routes between two cities and recommend one.
async fn search_routes(
    State(state): State<AppState>,
    Query(req): Query<RouteSearchRequest>,
) -> Result<Json<RouteSearchResponse>, AppError> {
    let preference = match req.preference.as_deref().map(str::trim) {
        Some(p) if !p.is_empty() => p.parse::<Preference>().map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?,
        _ => Preference::default(),
    };

    let query = RouteQuery::new(&req.origin, &req.destination, preference)?;

    // One snapshot for the whole query
    let snapshot = state.store.current();
    let planner = Planner::new(&snapshot.registry, snapshot.routes.as_ref(), &state.config);

    let outcome = planner.plan(&query).map_err(|e| match e {
        PlanError::NoRoutesAvailable => AppError::Unprocessable {
            message: format!(
                "No routes available from {} to {}",
                query.origin, query.destination
            ),
        },
        other => AppError::from(other),
    })?;

    Ok(Json(RouteSearchResponse::from_outcome(&outcome)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidQuery(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            PlanError::UnknownCity(_) => AppError::NotFound {
                message: e.to_string(),
            },
            PlanError::NoRoutesAvailable => AppError::Unprocessable {
                message: e.to_string(),
            },
            PlanError::Source(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
