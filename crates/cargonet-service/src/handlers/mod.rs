//! Thin HTTP handlers: parse, validate, call the library, format responses.

pub mod paths;
pub mod route;
pub mod stations;

/// Generate a unique request ID for tracing.
pub(crate) fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    format!("req-{:x}", timestamp)
}
