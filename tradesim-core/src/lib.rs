//! # Trade Simulation Core
//!
//! Deterministic simulation engine for a global trade network.
//!
//! This crate implements the full scenario pipeline: a stored world of
//! countries, routes, factors, alliances and treaties flows through
//! multi-modal routing, factor adjustment and a game-theoretic outlook.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐     ┌───────────────┐     ┌──────────────────┐
//! │ WorldStore │────▶│ TradeNetwork  │────▶│ hybrid / plain   │
//! │ (mutable)  │     │ (ephemeral)   │     │ route search     │
//! └─────┬──────┘     └───────────────┘     └────────┬─────────┘
//!       │                                           │
//!       │ events                                    ▼
//!       │            ┌───────────────┐     ┌──────────────────┐
//!       └───────────▶│ factor layer  │────▶│ simulate_scenario│
//!                    │ (multipliers) │     │ + game theory    │
//!                    └───────────────┘     └──────────────────┘
//! ```
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`WorldStore`] | Complete stored world (routes, factors, alliances, ...) |
//! | [`TradeNetwork`] | Directed graph materialized fresh per computation |
//! | [`simulate_scenario`] | Full pipeline: legs, routing, adjustment, outlook |
//! | [`find_hybrid_optimal_route`] | Mode-expanded multi-modal Dijkstra |
//! | [`evaluate_strategic_outlook`] | Iterated-game cooperation heuristic |
//!
//! ## Determinism
//!
//! Every collection is ordered (`BTreeMap`), ties in route and supplier
//! selection resolve by store order, and the game-theory noise term is a
//! stable hash of the country pair. Identical inputs always produce
//! identical results.

pub mod config;
pub mod events;
pub mod factors;
pub mod game_theory;
pub mod hybrid;
pub mod metrics;
pub mod modes;
pub mod network;
pub mod numeric;
pub mod scenario;
pub mod store;
pub mod testing;

pub use config::{ScenarioOverrides, ScenarioParams};
pub use factors::{compute_factor_impacts, Factor, FactorImpacts, FactorSet};
pub use game_theory::{evaluate_strategic_outlook, pair_seed, StrategicOutlook};
pub use hybrid::{find_hybrid_optimal_route, HybridRoute};
pub use metrics::{cargo_weight_from_manifest, compute_route_metrics, RouteMetrics};
pub use modes::{apply_mode_profile, mode_profile, transfer_penalty, TransportMode};
pub use network::{
    build_network, cheapest_route, fastest_route, hop_path, safest_route, shortest_route,
    Objective, TradeNetwork,
};
pub use scenario::{simulate_scenario, ScenarioResult};
pub use store::{CargoItem, CountryId, RouteRecord, WorldStore};
