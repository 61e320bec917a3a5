//! Station CRUD handlers.

use axum::{extract::State, Json};
use cargonet_lib::{NetworkSource, Station};
use tracing::info;

use crate::handlers::generate_request_id;
use crate::problem::{from_lib_error, ProblemDetails};
use crate::request::{DeleteStationRequest, NewStationRequest, UpdateStationRequest, Validate};
use crate::response::{ServiceResponse, StatusMessage};
use crate::AppState;

/// Handle `GET /stations`.
pub async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Station>>, ProblemDetails> {
    let request_id = generate_request_id();
    let stations = state
        .store()
        .stations()
        .map_err(|e| from_lib_error(&e, &request_id))?;
    Ok(Json(stations))
}

/// Handle `POST /stations/add`.
pub async fn add_station(
    State(state): State<AppState>,
    Json(request): Json<NewStationRequest>,
) -> Result<ServiceResponse<StatusMessage>, ProblemDetails> {
    let request_id = generate_request_id();
    request.validate(&request_id).map_err(|problem| *problem)?;

    info!(request_id = %request_id, name = %request.name, "adding station");
    state
        .store()
        .add_station(Station {
            name: request.name,
            cargo_amount: request.cargo_amount,
        })
        .map_err(|e| from_lib_error(&e, &request_id))?;

    Ok(ServiceResponse::new(StatusMessage::new("New station added")))
}

/// Handle `PUT /stations/update`. Only the cargo amount is mutable.
pub async fn update_station(
    State(state): State<AppState>,
    Json(request): Json<UpdateStationRequest>,
) -> Result<ServiceResponse<StatusMessage>, ProblemDetails> {
    let request_id = generate_request_id();
    request.validate(&request_id).map_err(|problem| *problem)?;

    info!(
        request_id = %request_id,
        name = %request.name,
        cargo_amount = request.cargo_amount,
        "updating station cargo"
    );
    state
        .store()
        .update_station_cargo(&request.name, request.cargo_amount)
        .map_err(|e| from_lib_error(&e, &request_id))?;

    Ok(ServiceResponse::new(StatusMessage::new(
        "Station updated successfully",
    )))
}

/// Handle `DELETE /stations/delete`.
pub async fn delete_station(
    State(state): State<AppState>,
    Json(request): Json<DeleteStationRequest>,
) -> Result<ServiceResponse<StatusMessage>, ProblemDetails> {
    let request_id = generate_request_id();
    request.validate(&request_id).map_err(|problem| *problem)?;

    info!(request_id = %request_id, name = %request.name, "deleting station");
    state
        .store()
        .delete_station(&request.name)
        .map_err(|e| from_lib_error(&e, &request_id))?;

    Ok(ServiceResponse::new(StatusMessage::new(
        "Station deleted successfully",
    )))
}
