//! Cargonet library entry points.
//!
//! This crate exposes the cargo station network model, the JSON-backed
//! station/path store, graph construction with the cargo-discount cost
//! model, and the shortest-cost route solver. Higher-level consumers (the
//! HTTP service) should only depend on the functions exported here instead
//! of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod model;
pub mod route;
pub mod store;

pub use error::{Error, Result};
pub use graph::{build_graph, edge_cost, Edge, Graph, CARGO_DISCOUNT};
pub use model::{Path, Station};
pub use route::{compute_route, RoutePlan};
pub use store::{FileStore, NetworkSource};
