//! Shortest-cost route computation between two stations.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{build_graph, Graph};
use crate::model::{Path, Station};

/// Computed route between two stations.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    /// Ordered station names from source to destination inclusive.
    pub route: Vec<String>,
    /// Sum of cargo over intermediate stations, excluding both endpoints.
    pub total_cargo: f64,
    /// Cumulative directed edge cost along the route.
    pub total_cost: f64,
}

impl RoutePlan {
    /// Number of hops (edges) in the route.
    pub fn hop_count(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

/// Compute the minimal-cost route from `src` to `dst` over the given
/// station/path snapshot.
///
/// Builds a fresh graph from the inputs, runs a label-setting search that
/// terminates as soon as the destination is finalized, and reconstructs
/// the route from predecessor links. The caller is expected to have
/// resolved `src` and `dst` against the station list already; names
/// missing from it still come back as [`Error::UnknownStation`] rather
/// than a panic.
///
/// The cost model can produce negative directed edges (heavy cargo at the
/// departure station), which the label-setting search does not account
/// for; routes touching negative edges may be marginally suboptimal.
pub fn compute_route(
    stations: &[Station],
    paths: &[Path],
    src: &str,
    dst: &str,
) -> Result<RoutePlan> {
    let graph = build_graph(stations, paths);
    tracing::debug!(
        stations = stations.len(),
        paths = paths.len(),
        src = %src,
        dst = %dst,
        "routing graph built"
    );

    for name in [src, dst] {
        if !graph.contains(name) {
            return Err(Error::UnknownStation {
                name: name.to_string(),
            });
        }
    }

    if src == dst {
        return Ok(RoutePlan {
            route: vec![src.to_string()],
            total_cargo: 0.0,
            total_cost: 0.0,
        });
    }

    let search = shortest_costs(&graph, src, dst);
    reconstruct(stations, &search, src, dst)
}

/// Distance and predecessor labels produced by one search.
struct SearchState {
    dist: HashMap<String, f64>,
    prev: HashMap<String, String>,
}

/// Dijkstra-style search from `src`, stopping early once `dst` is popped.
///
/// Labels cover only the stations actually reached; an absent `dist` entry
/// for `dst` after the queue drains means the destination is unreachable.
fn shortest_costs(graph: &Graph, src: &str, dst: &str) -> SearchState {
    let mut dist: HashMap<String, f64> = HashMap::new();
    let mut prev: HashMap<String, String> = HashMap::new();
    let mut queue = BinaryHeap::new();

    dist.insert(src.to_string(), 0.0);
    queue.push(QueueEntry::new(src.to_string(), 0.0));

    while let Some(entry) = queue.pop() {
        let current_cost = match dist.get(entry.station.as_str()) {
            // A better label was found after this entry was queued.
            Some(cost) if *cost < entry.cost.0 => continue,
            Some(cost) => *cost,
            None => continue,
        };

        if entry.station == dst {
            break;
        }

        for edge in graph.neighbours(&entry.station) {
            let candidate = current_cost + edge.cost;
            if candidate < *dist.get(edge.to.as_str()).unwrap_or(&f64::INFINITY) {
                dist.insert(edge.to.clone(), candidate);
                prev.insert(edge.to.clone(), entry.station.clone());
                queue.push(QueueEntry::new(edge.to.clone(), candidate));
            }
        }
    }

    SearchState { dist, prev }
}

/// Walk predecessor links back from `dst` and assemble the route plan.
///
/// The walk must land exactly on `src`; anything else (destination never
/// labeled, or a chain that stops short) is reported as no route rather
/// than a truncated result.
fn reconstruct(
    stations: &[Station],
    search: &SearchState,
    src: &str,
    dst: &str,
) -> Result<RoutePlan> {
    let no_route = || Error::RouteNotFound {
        src: src.to_string(),
        dst: dst.to_string(),
    };

    let total_cost = *search.dist.get(dst).ok_or_else(no_route)?;

    let mut route = Vec::new();
    let mut current = Some(dst);
    while let Some(station) = current {
        route.push(station.to_string());
        if station == src {
            break;
        }
        current = search.prev.get(station).map(String::as_str);
    }
    route.reverse();

    if route.first().map(String::as_str) != Some(src) || route.last().map(String::as_str) != Some(dst)
    {
        return Err(no_route());
    }

    let cargo: HashMap<&str, f64> = stations
        .iter()
        .map(|station| (station.name.as_str(), station.cargo_amount))
        .collect();
    let total_cargo = route[1..route.len() - 1]
        .iter()
        .map(|name| cargo.get(name.as_str()).copied().unwrap_or(0.0))
        .sum();

    Ok(RoutePlan {
        route,
        total_cargo,
        total_cost,
    })
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    station: String,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(station: String, cost: f64) -> Self {
        Self {
            station,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost. Equal
        // costs fall back to the station name; which of two equal-cost
        // frontiers expands first is implementation-defined.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
