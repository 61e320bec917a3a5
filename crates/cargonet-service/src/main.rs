//! Cargo station network HTTP service entry point.
//!
//! # Endpoints
//!
//! - `GET /stations`, `POST /stations/add`, `PUT /stations/update`,
//!   `DELETE /stations/delete` - Station CRUD
//! - `GET /paths`, `POST /paths/add`, `PUT /paths/update`,
//!   `DELETE /paths/delete` - Path CRUD
//! - `POST /route` - Compute the best route between two stations
//! - `GET /health/live`, `GET /health/ready` - Probes
//!
//! # Configuration
//!
//! - `CARGONET_DATA_DIR` - Directory for stations.json/paths.json (default: data)
//! - `CORS_ORIGIN` - Allowed browser origin (default: http://localhost:5173)
//! - `SERVICE_PORT` - HTTP port (default: 3333)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

use std::env;
use std::net::SocketAddr;

use tracing::{error, info};

use cargonet_service::{app, cors_layer, init_logging, AppState, LoggingConfig, DEFAULT_CORS_ORIGIN};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (reads LOG_FORMAT from environment)
    let logging_config = LoggingConfig::from_env().with_service("cargonet");
    init_logging(&logging_config);

    // Load configuration from environment
    let data_dir = env::var("CARGONET_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let cors_origin = env::var("CORS_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());
    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3333);

    info!(data_dir = %data_dir, port = port, cors_origin = %cors_origin, "starting cargonet service");

    let state = AppState::open(&data_dir).map_err(|e| {
        error!(error = %e, data_dir = %data_dir, "failed to open station store");
        e
    })?;

    let app = app(state).layer(cors_layer(&cors_origin));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
