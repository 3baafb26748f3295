//! Hybrid multi-modal route search.
//!
//! The base network is expanded into a mode-augmented graph: every country
//! is replicated once per transport mode, same-mode edges carry the
//! factor/cargo-adjusted metrics of the underlying route, and same-country
//! cross-mode edges carry the fixed modal-transfer penalties. A shortest
//! path is searched for every (entry mode, exit mode) combination and the
//! winner is picked among candidates within the modal-switch budget.

use crate::factors::{compute_factor_impacts, FactorSet};
use crate::metrics::compute_route_metrics;
use crate::modes::{transfer_penalty, TransportMode};
use crate::network::{Objective, TradeNetwork};
use crate::store::CountryId;
use rustc_hash::FxHashMap;
use tracing::instrument;
use trade_pathfinding::{Dijkstra, Graph};

/// A mode-expanded graph node: one country in one transport mode.
///
/// Composite key rather than a string suffix, so country names containing
/// separators stay unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ModalNode {
    country: u32,
    mode: TransportMode,
}

struct ExpandedEdge {
    /// Adjusted cost, summed for candidate comparison and reporting.
    cost: f64,
    /// Objective-specific search weight (risk is scaled x1000 to be
    /// numerically comparable with cost/time).
    weight: f64,
}

/// The mode-expanded graph, rebuilt per route-finding call; never cached
/// because the factor state may have changed between calls.
#[derive(Default)]
struct ExpandedGraph {
    adjacency: FxHashMap<ModalNode, Vec<ModalNode>>,
    edges: FxHashMap<(ModalNode, ModalNode), ExpandedEdge>,
}

impl ExpandedGraph {
    fn add_edge(&mut self, from: ModalNode, to: ModalNode, edge: ExpandedEdge) {
        self.adjacency.entry(from).or_default().push(to);
        self.edges.insert((from, to), edge);
    }
}

impl Graph<ModalNode, ()> for ExpandedGraph {
    fn neighbors(&self, node: ModalNode, _context: &()) -> Vec<ModalNode> {
        self.adjacency.get(&node).cloned().unwrap_or_default()
    }

    fn cost(&self, from: ModalNode, to: ModalNode, _context: &()) -> f64 {
        self.edges
            .get(&(from, to))
            .map(|edge| edge.weight)
            .unwrap_or(f64::INFINITY)
    }
}

/// Result of a hybrid search: the country path, its summed adjusted cost,
/// and the parallel modal sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct HybridRoute {
    pub path: Vec<CountryId>,
    pub cost: f64,
    pub modes: Vec<TransportMode>,
}

/// Find the optimal route from `source` to `destination`, allowing modal
/// transitions when `allow_switches` is set and at most `max_switches` of
/// them.
///
/// Returns `None` when either endpoint is absent from the network or no
/// (entry, exit) mode combination yields a path within the switch budget —
/// an expected "no route" outcome, not an error.
#[instrument(skip_all, fields(source, destination, ?objective))]
pub fn find_hybrid_optimal_route(
    network: &TradeNetwork,
    source: &str,
    destination: &str,
    factors: &FactorSet,
    cargo_weight: f64,
    allow_switches: bool,
    max_switches: usize,
    objective: Objective,
) -> Option<HybridRoute> {
    if !network.contains(source) || !network.contains(destination) {
        return None;
    }

    let impacts = compute_factor_impacts(factors);

    // Intern country names; deterministic order comes from the network's
    // sorted node set.
    let countries: Vec<&CountryId> = network.nodes().collect();
    let index: FxHashMap<&str, u32> = countries
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i as u32))
        .collect();

    let mut expanded = ExpandedGraph::default();

    // Same-mode edges: each base edge lives in its route's native mode,
    // weighted by the adjusted metrics.
    for origin in &countries {
        for (destination, attrs) in network.edges_from(origin) {
            let metrics = compute_route_metrics(
                attrs.cost,
                attrs.time,
                attrs.risk,
                attrs.mode,
                factors,
                cargo_weight,
            );
            let weight = match objective {
                Objective::Cost => metrics.adjusted_cost,
                Objective::Time => metrics.adjusted_time,
                Objective::Risk => metrics.adjusted_risk * 1000.0,
            };
            expanded.add_edge(
                ModalNode {
                    country: index[origin.as_str()],
                    mode: attrs.mode,
                },
                ModalNode {
                    country: index[destination.as_str()],
                    mode: attrs.mode,
                },
                ExpandedEdge {
                    cost: metrics.adjusted_cost,
                    weight,
                },
            );
        }
    }

    // Cross-mode edges at each country: fixed transfer penalties scaled by
    // the factor multipliers (cargo weight does not apply to transfers).
    if allow_switches {
        for country in 0..countries.len() as u32 {
            for from_mode in TransportMode::ALL {
                for to_mode in TransportMode::ALL {
                    let Some(transfer) = transfer_penalty(from_mode, to_mode) else {
                        continue;
                    };
                    let weight = match objective {
                        Objective::Cost => transfer.cost * impacts.cost_multiplier,
                        Objective::Time => transfer.time * impacts.time_multiplier,
                        Objective::Risk => transfer.risk * impacts.risk_multiplier * 1000.0,
                    };
                    expanded.add_edge(
                        ModalNode {
                            country,
                            mode: from_mode,
                        },
                        ModalNode {
                            country,
                            mode: to_mode,
                        },
                        ExpandedEdge {
                            cost: transfer.cost * impacts.cost_multiplier,
                            weight,
                        },
                    );
                }
            }
        }
    }

    let source_idx = index[source];
    let destination_idx = index[destination];

    // Search every (entry, exit) mode combination; keep the best candidate
    // within the switch budget. Candidates are always compared by summed
    // edge cost, even when optimizing for time or risk: cost is the figure
    // reported either way.
    let mut best: Option<(Vec<ModalNode>, f64)> = None;

    for entry_mode in TransportMode::ALL {
        for exit_mode in TransportMode::ALL {
            let start = ModalNode {
                country: source_idx,
                mode: entry_mode,
            };
            let goal = ModalNode {
                country: destination_idx,
                mode: exit_mode,
            };
            let Some((path, _)) = Dijkstra::find_path(&expanded, start, goal, &()) else {
                continue;
            };

            let switches = path
                .windows(2)
                .filter(|pair| pair[0].mode != pair[1].mode)
                .count();
            if switches > max_switches {
                continue;
            }

            let cost: f64 = path
                .windows(2)
                .map(|pair| expanded.edges[&(pair[0], pair[1])].cost)
                .sum();

            if best.as_ref().map_or(true, |(_, best_cost)| cost < *best_cost) {
                best = Some((path, cost));
            }
        }
    }

    let (path, cost) = best?;

    // Strip the expansion back to (country, mode) pairs and collapse the
    // consecutive duplicates introduced by same-country transfer hops.
    let mut clean_path: Vec<CountryId> = Vec::new();
    let mut clean_modes: Vec<TransportMode> = Vec::new();
    for node in &path {
        let country = countries[node.country as usize];
        if let (Some(last_country), Some(last_mode)) = (clean_path.last(), clean_modes.last()) {
            if last_country == country && *last_mode == node.mode {
                continue;
            }
        }
        clean_path.push(country.clone());
        clean_modes.push(node.mode);
    }

    log::debug!(
        "hybrid route {} -> {}: {} steps, {} switches, cost {:.3}",
        source,
        destination,
        clean_path.len().saturating_sub(1),
        clean_modes.windows(2).filter(|m| m[0] != m[1]).count(),
        cost
    );

    Some(HybridRoute {
        path: clean_path,
        cost,
        modes: clean_modes,
    })
}
