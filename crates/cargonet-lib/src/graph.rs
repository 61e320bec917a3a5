//! Directed cost graph derived from stations and paths.

use std::collections::HashMap;

use crate::model::{Path, Station};

/// Per-unit-cargo discount applied to the cost of departing a station.
///
/// A station with queued cargo is cheaper to depart from, so the directed
/// cost of an edge A to B is `distance - CARGO_DISCOUNT * cargo(A)`. The
/// discount can exceed the physical distance, producing a negative edge
/// cost; the solver accepts that as-is.
pub const CARGO_DISCOUNT: f64 = 0.02;

/// Directed edge within the routing graph.
#[derive(Debug, Clone)]
pub struct Edge {
    pub to: String,
    pub cost: f64,
}

/// Graph structure used by the route solver.
///
/// Ephemeral: rebuilt from the current station/path snapshot for every
/// query. Every station appears as a key; isolated stations map to an
/// empty edge list.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Edge>>,
}

impl Graph {
    /// Return the outgoing edges for a given station name.
    pub fn neighbours(&self, station: &str) -> &[Edge] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the station is a node of this graph.
    pub fn contains(&self, station: &str) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Number of stations in the graph.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph has no stations at all.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Directed cost of departing a station along a path of the given distance.
pub fn edge_cost(distance: f64, departure_cargo: f64) -> f64 {
    distance - CARGO_DISCOUNT * departure_cargo
}

/// Build the routing graph from the full station and path lists.
///
/// Each undirected path contributes two directed edges, one per direction,
/// each priced by the departure station's cargo discount. Endpoint
/// resolution is assumed to have been validated by the store; a path
/// endpoint missing from the station list contributes no edge. Edge order
/// follows path list order, which makes equal-cost tie-breaking in the
/// solver deterministic for a given input, though that is best-effort and
/// not a contract.
pub fn build_graph(stations: &[Station], paths: &[Path]) -> Graph {
    let cargo: HashMap<&str, f64> = stations
        .iter()
        .map(|station| (station.name.as_str(), station.cargo_amount))
        .collect();

    let mut adjacency: HashMap<String, Vec<Edge>> = HashMap::new();
    for station in stations {
        adjacency.entry(station.name.clone()).or_default();
    }

    for path in paths {
        let (Some(&src_cargo), Some(&dst_cargo)) =
            (cargo.get(path.src.as_str()), cargo.get(path.dst.as_str()))
        else {
            continue;
        };

        if let Some(edges) = adjacency.get_mut(&path.src) {
            edges.push(Edge {
                to: path.dst.clone(),
                cost: edge_cost(path.distance, src_cargo),
            });
        }
        if let Some(edges) = adjacency.get_mut(&path.dst) {
            edges.push(Edge {
                to: path.src.clone(),
                cost: edge_cost(path.distance, dst_cargo),
            });
        }
    }

    Graph { adjacency }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str, cargo_amount: f64) -> Station {
        Station {
            name: name.to_string(),
            cargo_amount,
        }
    }

    fn path(src: &str, dst: &str, distance: f64) -> Path {
        Path {
            src: src.to_string(),
            dst: dst.to_string(),
            distance,
        }
    }

    #[test]
    fn every_station_is_a_node() {
        let stations = vec![station("A", 0.0), station("B", 0.0), station("Lone", 5.0)];
        let paths = vec![path("A", "B", 3.0)];
        let graph = build_graph(&stations, &paths);

        assert_eq!(graph.len(), 3);
        assert!(graph.contains("Lone"));
        assert!(graph.neighbours("Lone").is_empty());
    }

    #[test]
    fn each_path_yields_two_directed_edges() {
        let stations = vec![station("A", 50.0), station("B", 0.0)];
        let paths = vec![path("A", "B", 10.0)];
        let graph = build_graph(&stations, &paths);

        let out_a = graph.neighbours("A");
        assert_eq!(out_a.len(), 1);
        assert_eq!(out_a[0].to, "B");
        assert!((out_a[0].cost - 9.0).abs() < f64::EPSILON);

        let out_b = graph.neighbours("B");
        assert_eq!(out_b.len(), 1);
        assert_eq!(out_b[0].to, "A");
        assert!((out_b[0].cost - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn discount_follows_departure_station() {
        let a_to_b = edge_cost(10.0, 0.0);
        let b_to_a = edge_cost(10.0, 100.0);
        assert!((a_to_b - b_to_a - CARGO_DISCOUNT * 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn heavy_cargo_can_push_cost_negative() {
        assert!(edge_cost(1.0, 100.0) < 0.0);
    }
}
