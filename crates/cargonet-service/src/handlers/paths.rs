//! Path CRUD handlers.

use axum::{extract::State, Json};
use cargonet_lib::{NetworkSource, Path};
use tracing::info;

use crate::handlers::generate_request_id;
use crate::problem::{from_lib_error, ProblemDetails};
use crate::request::{DeletePathRequest, NewPathRequest, UpdatePathRequest, Validate};
use crate::response::{ServiceResponse, StatusMessage};
use crate::AppState;

/// Handle `GET /paths`.
pub async fn list_paths(State(state): State<AppState>) -> Result<Json<Vec<Path>>, ProblemDetails> {
    let request_id = generate_request_id();
    let paths = state
        .store()
        .paths()
        .map_err(|e| from_lib_error(&e, &request_id))?;
    Ok(Json(paths))
}

/// Handle `POST /paths/add`.
pub async fn add_path(
    State(state): State<AppState>,
    Json(request): Json<NewPathRequest>,
) -> Result<ServiceResponse<StatusMessage>, ProblemDetails> {
    let request_id = generate_request_id();
    request.validate(&request_id).map_err(|problem| *problem)?;

    info!(
        request_id = %request_id,
        src = %request.src,
        dst = %request.dst,
        distance = request.distance,
        "adding path"
    );
    state
        .store()
        .add_path(Path {
            src: request.src,
            dst: request.dst,
            distance: request.distance,
        })
        .map_err(|e| from_lib_error(&e, &request_id))?;

    Ok(ServiceResponse::new(StatusMessage::new("New path added")))
}

/// Handle `PUT /paths/update`.
pub async fn update_path(
    State(state): State<AppState>,
    Json(request): Json<UpdatePathRequest>,
) -> Result<ServiceResponse<StatusMessage>, ProblemDetails> {
    let request_id = generate_request_id();
    request.validate(&request_id).map_err(|problem| *problem)?;

    info!(
        request_id = %request_id,
        init_src = %request.init_src,
        init_dst = %request.init_dst,
        final_src = %request.final_src,
        final_dst = %request.final_dst,
        "updating path"
    );
    state
        .store()
        .update_path(
            &request.init_src,
            &request.init_dst,
            &request.final_src,
            &request.final_dst,
            request.distance,
        )
        .map_err(|e| from_lib_error(&e, &request_id))?;

    Ok(ServiceResponse::new(StatusMessage::new(
        "Path updated successfully",
    )))
}

/// Handle `DELETE /paths/delete`.
pub async fn delete_path(
    State(state): State<AppState>,
    Json(request): Json<DeletePathRequest>,
) -> Result<ServiceResponse<StatusMessage>, ProblemDetails> {
    let request_id = generate_request_id();
    request.validate(&request_id).map_err(|problem| *problem)?;

    info!(request_id = %request_id, src = %request.src, dst = %request.dst, "deleting path");
    state
        .store()
        .delete_path(&request.src, &request.dst)
        .map_err(|e| from_lib_error(&e, &request_id))?;

    Ok(ServiceResponse::new(StatusMessage::new(
        "Path deleted successfully",
    )))
}
