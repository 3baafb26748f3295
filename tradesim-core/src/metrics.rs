//! Per-edge metric adjustment.
//!
//! Combines a base edge (cost/time/risk/mode) with the live factor set,
//! the cargo-weight scalar, and mode-specific factor sensitivities into the
//! adjusted metrics used for both route search and reporting.

use crate::factors::{compute_factor_impacts, FactorSet};
use crate::modes::{capacity_multiplier, TransportMode};
use crate::store::{normalize_commodity, CargoItem, Commodity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The factor multipliers applied to one edge, retained for auditability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorMultipliers {
    pub cost: f64,
    pub time: f64,
    pub risk: f64,
}

/// Adjusted metrics for one edge, alongside the inputs that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    pub adjusted_cost: f64,
    pub adjusted_time: f64,
    pub adjusted_risk: f64,
    pub base_cost: f64,
    pub base_time: f64,
    pub base_risk: f64,
    pub factor_multipliers: FactorMultipliers,
    pub cargo_multiplier: f64,
    pub mode: TransportMode,
}

/// Compute adjusted metrics for a single edge.
///
/// Three layers apply in order:
/// 1. the global factor multipliers (cost/time/risk),
/// 2. the cargo-weight burden scaled by the mode's capacity multiplier
///    (cost only),
/// 3. mode-specific secondary sensitivities, matched by factor-name
///    substring and counting only factors with `effect < 0` (pressure).
///
/// Adjusted risk never exceeds 0.99.
pub fn compute_route_metrics(
    base_cost: f64,
    base_time: f64,
    base_risk: f64,
    mode: TransportMode,
    factors: &FactorSet,
    cargo_weight: f64,
) -> RouteMetrics {
    let impacts = compute_factor_impacts(factors);

    // cargo_weight is a 1-10 burden scale; each mode absorbs it differently
    let cargo_cost_mult = cargo_weight * capacity_multiplier(mode);

    let mut adjusted_cost = base_cost * impacts.cost_multiplier * cargo_cost_mult;
    let mut adjusted_time = base_time * impacts.time_multiplier;
    let mut adjusted_risk = (base_risk * impacts.risk_multiplier).min(0.99);

    // Accumulate |effect| * strength over pressure factors whose name
    // carries the given tag.
    let pressure_bucket = |tags: &[&str]| -> f64 {
        factors
            .iter()
            .filter(|(name, factor)| {
                factor.effect < 0.0 && tags.iter().any(|tag| name.contains(tag))
            })
            .map(|(_, factor)| factor.effect.abs() * factor.strength)
            .sum()
    };

    match mode {
        TransportMode::Sea => {
            // Maritime security dominates sea exposure; the climate tag is
            // tracked separately but carries no time bucket of its own.
            let maritime_pressure = pressure_bucket(&["Maritime", "Climate"]);
            adjusted_risk = (adjusted_risk + maritime_pressure * 0.15).min(0.99);
        }
        TransportMode::Land => {
            let border_pressure = pressure_bucket(&["Border", "Diplomatic"]);
            adjusted_cost *= 1.0 + border_pressure * 0.25;
            adjusted_risk = (adjusted_risk + border_pressure * 0.12).min(0.99);
        }
        TransportMode::Air => {
            let cyber_pressure = pressure_bucket(&["Cyber"]);
            let energy_pressure = pressure_bucket(&["Energy"]);
            adjusted_risk = (adjusted_risk + cyber_pressure * 0.18).min(0.99);
            adjusted_cost *= 1.0 + energy_pressure * 0.35;
        }
    }

    RouteMetrics {
        adjusted_cost,
        adjusted_time,
        adjusted_risk,
        base_cost,
        base_time,
        base_risk,
        factor_multipliers: FactorMultipliers {
            cost: impacts.cost_multiplier,
            time: impacts.time_multiplier,
            risk: impacts.risk_multiplier,
        },
        cargo_multiplier: cargo_cost_mult,
        mode,
    }
}

/// Derive the cargo-weight scalar from a manifest's total value.
///
/// Log10 scale keeps multipliers reasonable: roughly 3x for a $1M manifest,
/// 6x for $100M, clamped to [1, 10]. An empty or valueless manifest leaves
/// the neutral weight 1.0.
pub fn cargo_weight_from_manifest(
    manifest: &[CargoItem],
    commodities: &BTreeMap<String, Commodity>,
) -> f64 {
    let total_value: f64 = manifest
        .iter()
        .map(|item| {
            let unit_cost = commodities
                .get(&normalize_commodity(&item.name))
                .map(|commodity| commodity.unit_cost)
                .unwrap_or(1.0);
            item.quantity * unit_cost
        })
        .sum();

    if total_value <= 0.0 {
        return 1.0;
    }
    let weight = 1.0 + (total_value / 100_000.0).max(1.0).log10();
    weight.clamp(1.0, 10.0)
}
