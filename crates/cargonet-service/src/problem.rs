//! RFC 9457 Problem Details for HTTP APIs.
//!
//! Provides structured error responses following the Problem Details standard.
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use cargonet_lib::Error as LibError;

/// Problem type URI for unknown station names.
pub const PROBLEM_UNKNOWN_STATION: &str = "/problems/unknown-station";

/// Problem type URI for routes that cannot be found.
pub const PROBLEM_ROUTE_NOT_FOUND: &str = "/problems/route-not-found";

/// Problem type URI for invalid request parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for duplicate station names.
pub const PROBLEM_DUPLICATE_STATION: &str = "/problems/duplicate-station";

/// Problem type URI for duplicate paths between the same stations.
pub const PROBLEM_DUPLICATE_PATH: &str = "/problems/duplicate-path";

/// Problem type URI for paths that do not exist.
pub const PROBLEM_PATH_NOT_FOUND: &str = "/problems/path-not-found";

/// Problem type URI for deleting a station that is still part of a path.
pub const PROBLEM_STATION_IN_USE: &str = "/problems/station-in-use";

/// Problem type URI for internal server errors.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

/// RFC 9457 Problem Details response structure.
///
/// Provides a consistent format for error responses across all endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    /// Short, human-readable summary of the problem.
    pub title: String,

    /// HTTP status code for this problem.
    pub status: u16,

    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// URI reference identifying the specific occurrence (e.g., request ID).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// Content type for this response (always "application/problem+json").
    pub content_type: String,
}

impl ProblemDetails {
    /// Create a new ProblemDetails with required fields.
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
            content_type: "application/problem+json".to_string(),
        }
    }

    /// Add a detailed explanation of this specific problem occurrence.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add the request identifier for tracing.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// Create a 400 Bad Request problem for invalid input.
    pub fn bad_request(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_REQUEST,
            "Invalid Request",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// Create a 404 Not Found problem for unknown stations.
    pub fn unknown_station(name: &str, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_UNKNOWN_STATION,
            "Unknown Station",
            StatusCode::NOT_FOUND,
        )
        .with_detail(format!("Station '{}' not found", name))
        .with_request_id(request_id)
    }

    /// Create a 404 Not Found problem for unreachable routes.
    pub fn route_not_found(src: &str, dst: &str, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_ROUTE_NOT_FOUND,
            "Route Not Found",
            StatusCode::NOT_FOUND,
        )
        .with_detail(format!("No route exists from '{}' to '{}'", src, dst))
        .with_request_id(request_id)
    }

    /// Create a 409 Conflict problem with the given problem type.
    pub fn conflict(
        type_uri: &str,
        title: &str,
        detail: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self::new(type_uri, title, StatusCode::CONFLICT)
            .with_detail(detail)
            .with_request_id(request_id)
    }

    /// Create a 500 Internal Server Error problem.
    pub fn internal_error(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.title,
            self.detail.as_deref().unwrap_or("")
        )
    }
}

impl std::error::Error for ProblemDetails {}

/// Implement IntoResponse for axum to return ProblemDetails as HTTP responses.
impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Json(&self).into_response();
        response.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            axum::http::HeaderValue::from_static("application/problem+json"),
        );

        *response.status_mut() = status;
        response
    }
}

/// Convert library errors to ProblemDetails.
///
/// The `request_id` must be provided separately since library errors don't have it.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    match error {
        LibError::UnknownStation { name } => ProblemDetails::unknown_station(name, request_id),
        LibError::RouteNotFound { src, dst } => {
            ProblemDetails::route_not_found(src, dst, request_id)
        }
        LibError::DuplicateStation { name } => ProblemDetails::conflict(
            PROBLEM_DUPLICATE_STATION,
            "Duplicate Station",
            format!("Station '{}' already exists", name),
            request_id,
        ),
        LibError::DuplicatePath { src, dst } => ProblemDetails::conflict(
            PROBLEM_DUPLICATE_PATH,
            "Duplicate Path",
            format!("A path between '{}' and '{}' already exists", src, dst),
            request_id,
        ),
        LibError::PathNotFound { src, dst } => ProblemDetails::new(
            PROBLEM_PATH_NOT_FOUND,
            "Path Not Found",
            StatusCode::NOT_FOUND,
        )
        .with_detail(format!("No path exists between '{}' and '{}'", src, dst))
        .with_request_id(request_id),
        LibError::StationInPath { name } => ProblemDetails::conflict(
            PROBLEM_STATION_IN_USE,
            "Station In Use",
            format!(
                "Station '{}' cannot be deleted while it is part of a path",
                name
            ),
            request_id,
        ),
        _ => ProblemDetails::internal_error(error.to_string(), request_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_details_new() {
        let problem = ProblemDetails::new(
            PROBLEM_UNKNOWN_STATION,
            "Unknown Station",
            StatusCode::NOT_FOUND,
        );
        assert_eq!(problem.type_uri, PROBLEM_UNKNOWN_STATION);
        assert_eq!(problem.title, "Unknown Station");
        assert_eq!(problem.status, 404);
        assert_eq!(problem.content_type, "application/problem+json");
    }

    #[test]
    fn test_problem_details_bad_request() {
        let problem = ProblemDetails::bad_request("Invalid JSON", "req-123");
        assert_eq!(problem.status, 400);
        assert_eq!(problem.instance.as_deref(), Some("req-123"));
    }

    #[test]
    fn test_problem_details_serialization() {
        let problem = ProblemDetails::bad_request("Test error", "req-test");
        let json = serde_json::to_string(&problem).unwrap();

        assert!(json.contains("\"type\":\"/problems/invalid-request\""));
        assert!(json.contains("\"title\":\"Invalid Request\""));
        assert!(json.contains("\"status\":400"));
        assert!(json.contains("\"detail\":\"Test error\""));
        assert!(json.contains("\"instance\":\"req-test\""));
    }

    #[test]
    fn test_from_lib_error_unknown_station() {
        let error = LibError::UnknownStation {
            name: "Ghost".to_string(),
        };
        let problem = from_lib_error(&error, "req-lib");

        assert_eq!(problem.type_uri, PROBLEM_UNKNOWN_STATION);
        assert_eq!(problem.status, 404);
        assert!(problem.detail.as_deref().unwrap().contains("Ghost"));
    }

    #[test]
    fn test_from_lib_error_route_not_found() {
        let error = LibError::RouteNotFound {
            src: "A".to_string(),
            dst: "B".to_string(),
        };
        let problem = from_lib_error(&error, "req-route");

        assert_eq!(problem.type_uri, PROBLEM_ROUTE_NOT_FOUND);
        assert!(problem.detail.as_deref().unwrap().contains("A"));
        assert!(problem.detail.as_deref().unwrap().contains("B"));
    }

    #[test]
    fn test_from_lib_error_conflicts_are_409() {
        let duplicate = cargonet_lib::Error::DuplicateStation {
            name: "Hub".to_string(),
        };
        assert_eq!(from_lib_error(&duplicate, "req-1").status, 409);

        let in_use = cargonet_lib::Error::StationInPath {
            name: "Hub".to_string(),
        };
        assert_eq!(from_lib_error(&in_use, "req-2").status, 409);
    }

    #[test]
    fn test_from_lib_error_io_is_internal() {
        let error = LibError::Io(std::io::Error::other("disk on fire"));
        let problem = from_lib_error(&error, "req-io");
        assert_eq!(problem.status, 500);
        assert_eq!(problem.type_uri, PROBLEM_INTERNAL_ERROR);
    }
}
