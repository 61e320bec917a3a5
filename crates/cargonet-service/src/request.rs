//! Request types and validation for HTTP endpoints.
//!
//! Format-level validation (non-empty names, non-negative numbers) happens
//! here, before the store or the route core is invoked. Referential checks
//! (does the station exist, is the path a duplicate) belong to the store.

use serde::{Deserialize, Serialize};

use crate::ProblemDetails;

/// Validation trait for request types.
///
/// Implementations should validate all fields and return a `ProblemDetails`
/// error for invalid input.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    ///
    /// The `request_id` is used to populate the `instance` field of any
    /// returned `ProblemDetails`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

fn require_name(
    value: &str,
    field: &str,
    request_id: &str,
) -> Result<(), Box<ProblemDetails>> {
    if value.trim().is_empty() {
        return Err(Box::new(ProblemDetails::bad_request(
            format!("The '{}' field is required and cannot be empty", field),
            request_id,
        )));
    }
    Ok(())
}

fn require_non_negative(
    value: f64,
    field: &str,
    request_id: &str,
) -> Result<(), Box<ProblemDetails>> {
    if value.is_nan() || value < 0.0 {
        return Err(Box::new(ProblemDetails::bad_request(
            format!("The '{}' field must be a non-negative number", field),
            request_id,
        )));
    }
    Ok(())
}

/// Request for computing a route between two stations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Source station name.
    pub from: String,
    /// Destination station name.
    pub to: String,
}

impl Validate for RouteRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        require_name(&self.from, "from", request_id)?;
        require_name(&self.to, "to", request_id)
    }
}

/// Request for adding a station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStationRequest {
    pub name: String,
    pub cargo_amount: f64,
}

impl Validate for NewStationRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        require_name(&self.name, "name", request_id)?;
        require_non_negative(self.cargo_amount, "cargo_amount", request_id)
    }
}

/// Request for updating a station's cargo amount. The name is immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStationRequest {
    pub name: String,
    pub cargo_amount: f64,
}

impl Validate for UpdateStationRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        require_name(&self.name, "name", request_id)?;
        require_non_negative(self.cargo_amount, "cargo_amount", request_id)
    }
}

/// Request for deleting a station by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteStationRequest {
    pub name: String,
}

impl Validate for DeleteStationRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        require_name(&self.name, "name", request_id)
    }
}

/// Request for adding a path between two stations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPathRequest {
    pub src: String,
    pub dst: String,
    pub distance: f64,
}

impl Validate for NewPathRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        require_name(&self.src, "src", request_id)?;
        require_name(&self.dst, "dst", request_id)?;
        require_non_negative(self.distance, "distance", request_id)
    }
}

/// Request for updating a path's endpoints and distance.
///
/// The path to edit is identified by its initial endpoints (matched in
/// either direction); the final endpoints and distance replace it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePathRequest {
    pub init_src: String,
    pub init_dst: String,
    pub distance: f64,
    pub final_src: String,
    pub final_dst: String,
}

impl Validate for UpdatePathRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        require_name(&self.init_src, "init_src", request_id)?;
        require_name(&self.init_dst, "init_dst", request_id)?;
        require_name(&self.final_src, "final_src", request_id)?;
        require_name(&self.final_dst, "final_dst", request_id)?;
        require_non_negative(self.distance, "distance", request_id)
    }
}

/// Request for deleting a path by its endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePathRequest {
    pub src: String,
    pub dst: String,
}

impl Validate for DeletePathRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        require_name(&self.src, "src", request_id)?;
        require_name(&self.dst, "dst", request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_request_valid() {
        let req = RouteRequest {
            from: "Alpha".to_string(),
            to: "Beta".to_string(),
        };
        assert!(req.validate("test").is_ok());
    }

    #[test]
    fn test_route_request_empty_from() {
        let req = RouteRequest {
            from: "".to_string(),
            to: "Beta".to_string(),
        };
        let err = req.validate("test").unwrap_err();
        assert!(err.detail.as_deref().unwrap().contains("'from'"));
    }

    #[test]
    fn test_route_request_whitespace_to() {
        let req = RouteRequest {
            from: "Alpha".to_string(),
            to: "   ".to_string(),
        };
        let err = req.validate("test").unwrap_err();
        assert!(err.detail.as_deref().unwrap().contains("'to'"));
    }

    #[test]
    fn test_new_station_negative_cargo() {
        let req = NewStationRequest {
            name: "Alpha".to_string(),
            cargo_amount: -1.0,
        };
        let err = req.validate("test").unwrap_err();
        assert!(err.detail.as_deref().unwrap().contains("'cargo_amount'"));
    }

    #[test]
    fn test_new_station_nan_cargo() {
        let req = NewStationRequest {
            name: "Alpha".to_string(),
            cargo_amount: f64::NAN,
        };
        assert!(req.validate("test").is_err());
    }

    #[test]
    fn test_new_path_negative_distance() {
        let req = NewPathRequest {
            src: "Alpha".to_string(),
            dst: "Beta".to_string(),
            distance: -3.0,
        };
        let err = req.validate("test").unwrap_err();
        assert!(err.detail.as_deref().unwrap().contains("'distance'"));
    }

    #[test]
    fn test_update_path_requires_all_endpoints() {
        let req = UpdatePathRequest {
            init_src: "Alpha".to_string(),
            init_dst: "Beta".to_string(),
            distance: 2.0,
            final_src: "Alpha".to_string(),
            final_dst: "".to_string(),
        };
        let err = req.validate("test").unwrap_err();
        assert!(err.detail.as_deref().unwrap().contains("'final_dst'"));
    }

    #[test]
    fn test_zero_values_are_valid() {
        let station = NewStationRequest {
            name: "Alpha".to_string(),
            cargo_amount: 0.0,
        };
        assert!(station.validate("test").is_ok());

        let path = NewPathRequest {
            src: "Alpha".to_string(),
            dst: "Beta".to_string(),
            distance: 0.0,
        };
        assert!(path.validate("test").is_ok());
    }
}
