//! Trade network construction and single-objective routing.
//!
//! The network is a directed multigraph over country nodes, materialized
//! fresh from the route store on every computation so the latest mutations
//! (tariffs, wars, disasters) are always reflected. It is never persisted.

use crate::modes::TransportMode;
use crate::store::{CountryId, WorldStore};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use trade_pathfinding::{Dijkstra, Graph};

/// Optimization objective for route search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Cost,
    Time,
    Risk,
}

impl Objective {
    pub const ALL: [Objective; 3] = [Objective::Cost, Objective::Time, Objective::Risk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Objective::Cost => "cost",
            Objective::Time => "time",
            Objective::Risk => "risk",
        }
    }
}

/// Current metrics of one directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttrs {
    pub cost: f64,
    pub time: f64,
    pub risk: f64,
    pub mode: TransportMode,
}

/// Directed graph over country nodes, derived and ephemeral.
#[derive(Debug, Clone, Default)]
pub struct TradeNetwork {
    /// origin -> destination -> edge. BTreeMap values keep neighbor
    /// iteration deterministic.
    adjacency: FxHashMap<CountryId, BTreeMap<CountryId, EdgeAttrs>>,
    /// Every country that appears as an endpoint of any edge.
    nodes: BTreeSet<CountryId>,
}

impl TradeNetwork {
    /// Materialize the current route store into a graph. Uses the live
    /// (possibly event-modified) metrics, not the base snapshots.
    pub fn from_store(store: &WorldStore) -> Self {
        let mut network = TradeNetwork::default();
        for (origin, edges) in &store.routes {
            for (destination, record) in edges {
                network.add_edge(
                    origin,
                    destination,
                    EdgeAttrs {
                        cost: record.cost,
                        time: record.time,
                        risk: record.risk,
                        mode: record.mode,
                    },
                );
            }
        }
        network
    }

    pub fn add_edge(&mut self, origin: &str, destination: &str, attrs: EdgeAttrs) {
        self.adjacency
            .entry(origin.to_string())
            .or_default()
            .insert(destination.to_string(), attrs);
        self.nodes.insert(origin.to_string());
        self.nodes.insert(destination.to_string());
    }

    pub fn contains(&self, country: &str) -> bool {
        self.nodes.contains(country)
    }

    pub fn edge(&self, origin: &str, destination: &str) -> Option<&EdgeAttrs> {
        self.adjacency.get(origin)?.get(destination)
    }

    /// Countries in the network, in deterministic order.
    pub fn nodes(&self) -> impl Iterator<Item = &CountryId> {
        self.nodes.iter()
    }

    /// Outgoing edges of a country, in deterministic order.
    pub fn edges_from(&self, origin: &str) -> impl Iterator<Item = (&CountryId, &EdgeAttrs)> {
        self.adjacency
            .get(origin)
            .into_iter()
            .flat_map(|edges| edges.iter())
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }
}

/// Build the trade network from the store. Thin alias kept as the public
/// entry point of the network-building stage.
pub fn build_network(store: &WorldStore) -> TradeNetwork {
    TradeNetwork::from_store(store)
}

/// Adapter presenting the unexpanded network to the pathfinder, weighted by
/// a single objective (no modal transfers).
struct NetworkView<'a> {
    network: &'a TradeNetwork,
}

/// Weighting for the plain (unexpanded) search. `None` means unweighted
/// hop counting.
#[derive(Clone, Copy)]
enum PlainWeight {
    By(Objective),
    Hops,
}

impl<'a> Graph<&'a str, PlainWeight> for NetworkView<'a> {
    fn neighbors(&self, node: &'a str, _context: &PlainWeight) -> Vec<&'a str> {
        self.network
            .adjacency
            .get(node)
            .map(|edges| edges.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn cost(&self, from: &'a str, to: &'a str, context: &PlainWeight) -> f64 {
        let edge = match self.network.edge(from, to) {
            Some(edge) => edge,
            None => return f64::INFINITY,
        };
        match context {
            PlainWeight::By(Objective::Cost) => edge.cost,
            PlainWeight::By(Objective::Time) => edge.time,
            PlainWeight::By(Objective::Risk) => edge.risk,
            PlainWeight::Hops => 1.0,
        }
    }
}

/// Single-objective shortest path over the raw network, ignoring modal
/// transfers. Returns `None` when either endpoint is absent or no path
/// exists; "no route" is an expected outcome, not an error.
pub fn shortest_route(
    network: &TradeNetwork,
    source: &str,
    destination: &str,
    objective: Objective,
) -> Option<(Vec<CountryId>, f64)> {
    plain_search(network, source, destination, PlainWeight::By(objective))
}

/// Cheapest path by raw edge cost.
pub fn cheapest_route(
    network: &TradeNetwork,
    source: &str,
    destination: &str,
) -> Option<(Vec<CountryId>, f64)> {
    shortest_route(network, source, destination, Objective::Cost)
}

/// Fastest path by raw edge time.
pub fn fastest_route(
    network: &TradeNetwork,
    source: &str,
    destination: &str,
) -> Option<(Vec<CountryId>, f64)> {
    shortest_route(network, source, destination, Objective::Time)
}

/// Safest path by raw edge risk.
pub fn safest_route(
    network: &TradeNetwork,
    source: &str,
    destination: &str,
) -> Option<(Vec<CountryId>, f64)> {
    shortest_route(network, source, destination, Objective::Risk)
}

/// Minimum-hop path, used by event handlers that must touch every segment
/// between two countries lacking a direct edge.
pub fn hop_path(
    network: &TradeNetwork,
    source: &str,
    destination: &str,
) -> Option<Vec<CountryId>> {
    plain_search(network, source, destination, PlainWeight::Hops).map(|(path, _)| path)
}

fn plain_search(
    network: &TradeNetwork,
    source: &str,
    destination: &str,
    weight: PlainWeight,
) -> Option<(Vec<CountryId>, f64)> {
    if !network.contains(source) || !network.contains(destination) {
        return None;
    }
    // Resolve the query names to the network's owned strings so borrowed
    // node identifiers share one lifetime.
    let source = network.nodes.get(source)?.as_str();
    let destination = network.nodes.get(destination)?.as_str();
    let view = NetworkView { network };
    let (path, total) = Dijkstra::find_path(&view, source, destination, &weight)?;
    Some((path.into_iter().map(String::from).collect(), total))
}
