//! Record types for the cargo station network.

use serde::{Deserialize, Serialize};

/// A named station holding a quantity of queued cargo.
///
/// The name is the identity key: unique across the network and compared
/// case-sensitively everywhere except the duplicate check on insert, which
/// is deliberately case-insensitive so `Hub` and `hub` cannot coexist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub cargo_amount: f64,
}

/// An undirected physical connection between two stations.
///
/// `src`/`dst` order carries no meaning to callers; a path is identified by
/// its unordered endpoint pair. Direction only matters once the cost model
/// derives the two directed edges from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub src: String,
    pub dst: String,
    pub distance: f64,
}

impl Path {
    /// Whether this path connects the given unordered endpoint pair.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.src == a && self.dst == b) || (self.src == b && self.dst == a)
    }

    /// Whether the given station is one of this path's endpoints.
    pub fn touches(&self, name: &str) -> bool {
        self.src == name || self.dst == name
    }
}
