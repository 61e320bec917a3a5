//! Route computation handler.

use axum::{extract::State, Json};
use cargonet_lib::{compute_route, NetworkSource};
use tracing::{error, info};

use crate::handlers::generate_request_id;
use crate::problem::{from_lib_error, ProblemDetails};
use crate::request::{RouteRequest, Validate};
use crate::response::ServiceResponse;
use crate::AppState;

/// Handle `POST /route` requests.
///
/// Takes a consistent station/path snapshot under the store lock, resolves
/// both endpoint names against it (the core's precondition), then runs the
/// route computation on the snapshot with the lock released.
pub async fn compute(
    State(state): State<AppState>,
    Json(request): Json<RouteRequest>,
) -> Result<ServiceResponse<cargonet_lib::RoutePlan>, ProblemDetails> {
    let request_id = generate_request_id();

    info!(
        request_id = %request_id,
        from = %request.from,
        to = %request.to,
        "handling route request"
    );

    request.validate(&request_id).map_err(|problem| *problem)?;

    let (stations, paths) = {
        let store = state.store();
        let stations = store
            .stations()
            .map_err(|e| from_lib_error(&e, &request_id))?;
        let paths = store.paths().map_err(|e| from_lib_error(&e, &request_id))?;
        (stations, paths)
    };

    for name in [&request.from, &request.to] {
        if !stations.iter().any(|station| &station.name == name) {
            return Err(ProblemDetails::unknown_station(name, &request_id));
        }
    }

    let plan = compute_route(&stations, &paths, &request.from, &request.to).map_err(|e| {
        error!(request_id = %request_id, error = %e, "route computation failed");
        from_lib_error(&e, &request_id)
    })?;

    info!(
        request_id = %request_id,
        hops = plan.hop_count(),
        total_cargo = plan.total_cargo,
        total_cost = plan.total_cost,
        "route computed successfully"
    );

    Ok(ServiceResponse::new(plan))
}
