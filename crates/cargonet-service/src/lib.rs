//! Cargo station network HTTP microservice.
//!
//! Thin-handler axum service over `cargonet-lib`: station and path CRUD,
//! route computation, CORS for the browser frontend, RFC 9457 problem
//! responses, health probes, and structured logging.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Parse request JSON                                       │
//! │  - Validate parameters                                      │
//! │  - Call cargonet-lib APIs                                   │
//! │  - Format response                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![deny(warnings)]

pub mod handlers;
mod health;
pub mod logging;
mod problem;
mod request;
mod response;
mod state;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;

pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_DUPLICATE_PATH, PROBLEM_DUPLICATE_STATION,
    PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST, PROBLEM_PATH_NOT_FOUND,
    PROBLEM_ROUTE_NOT_FOUND, PROBLEM_STATION_IN_USE, PROBLEM_UNKNOWN_STATION,
};
pub use request::{
    DeletePathRequest, DeleteStationRequest, NewPathRequest, NewStationRequest, RouteRequest,
    UpdatePathRequest, UpdateStationRequest, Validate,
};
pub use response::{ServiceResponse, StatusMessage};
pub use state::AppState;

/// Allowed origin when `CORS_ORIGIN` is not configured; matches the
/// frontend dev server.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Build the application router with every endpoint wired to `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/stations", get(handlers::stations::list_stations))
        .route("/stations/add", post(handlers::stations::add_station))
        .route("/stations/update", put(handlers::stations::update_station))
        .route(
            "/stations/delete",
            delete(handlers::stations::delete_station),
        )
        .route("/paths", get(handlers::paths::list_paths))
        .route("/paths/add", post(handlers::paths::add_path))
        .route("/paths/update", put(handlers::paths::update_path))
        .route("/paths/delete", delete(handlers::paths::delete_path))
        .route("/route", post(handlers::route::compute))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .with_state(state)
}

/// CORS layer for browser clients: a single configured origin, the full
/// method list, and credentials enabled.
pub fn cors_layer(origin: &str) -> CorsLayer {
    let origin = origin
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_CORS_ORIGIN));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
