//! Global factor aggregation.
//!
//! Factors are named sentiment/pressure signals with an `effect` in [-1, 1]
//! and a `strength`. Sign convention (load-bearing, preserved everywhere):
//! **positive effect = beneficial/supportive to trade, negative = harmful
//! pressure**. The aggregation collapses the whole factor set into a small
//! record of multipliers and indices that the routing and game-theory layers
//! consume.

use crate::numeric::{clamp, sigmoid};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named global sentiment/pressure signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    /// Polarity in [-1, 1]. Positive supports trade, negative pressures it.
    pub effect: f64,
    /// Confidence/magnitude. Zero or absent is treated as 0.5 so a weak
    /// factor never vanishes from the strength denominator.
    #[serde(default)]
    pub strength: f64,
}

/// The live factor set, keyed by factor name.
///
/// `BTreeMap` so iteration (and therefore every derived breakdown) is
/// deterministic.
pub type FactorSet = BTreeMap<String, Factor>;

/// Aggregated impact of the current factor set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorImpacts {
    /// Net signed contribution, normalized by total strength.
    pub net_bias: f64,
    /// Normalized supportive contribution (from positive contributions).
    pub support_index: f64,
    /// Normalized pressure contribution (from negative contributions).
    pub pressure_index: f64,
    /// Total normalized activity, regardless of sign.
    pub volatility_index: f64,
    /// Sigmoid-squashed pressure-minus-support, clamped to [0.01, 0.99].
    pub global_pressure: f64,
    /// Cost scaling, clamped to [0.65, 1.85].
    pub cost_multiplier: f64,
    /// Time scaling, clamped to [0.7, 1.45].
    pub time_multiplier: f64,
    /// Risk scaling, clamped to [0.45, 1.75].
    pub risk_multiplier: f64,
}

/// Split the factor set into (positive, negative, strength_sum) components.
///
/// An empty set yields (0, 0, 1) so the derived indices come out neutral.
fn factor_components(factors: &FactorSet) -> (f64, f64, f64) {
    if factors.is_empty() {
        return (0.0, 0.0, 1.0);
    }

    let mut positive = 0.0;
    let mut negative = 0.0;
    let mut strength_sum = 0.0;

    for factor in factors.values() {
        let mut strength = factor.strength.abs();
        if strength == 0.0 {
            strength = 0.5;
        }
        let contribution = factor.effect * strength;
        strength_sum += strength;
        if contribution >= 0.0 {
            positive += contribution;
        } else {
            negative += contribution.abs();
        }
    }

    if strength_sum == 0.0 {
        strength_sum = 1.0;
    }
    (positive, negative, strength_sum)
}

/// Aggregate the factor set into multipliers and indices.
///
/// Pure function; safe to call once per scenario and reuse.
pub fn compute_factor_impacts(factors: &FactorSet) -> FactorImpacts {
    let (positive, negative, strength_sum) = factor_components(factors);
    let denom = strength_sum.max(1.0);

    let net_bias = (positive - negative) / denom;
    let support_index = positive / denom;
    let pressure_index = negative / denom;
    let volatility_index = (positive + negative) / denom;

    let global_pressure = clamp(sigmoid((pressure_index - support_index) * 4.5), 0.01, 0.99);

    let risk_multiplier = clamp(
        1.0 + pressure_index * 0.6 - support_index * 0.4 + volatility_index * 0.15,
        0.45,
        1.75,
    );

    // Rising risk feeds back into cost: security spending, insurance
    // premiums, hedging.
    let risk_cost_impact = ((risk_multiplier - 1.0) * 0.28).max(0.0);
    let cost_multiplier = clamp(
        1.0 + (pressure_index - support_index) * 0.35 + volatility_index * 0.12 + risk_cost_impact,
        0.65,
        1.85,
    );

    let time_multiplier = clamp(
        1.0 + (pressure_index - support_index) * 0.22 + volatility_index * 0.08,
        0.7,
        1.45,
    );

    FactorImpacts {
        net_bias,
        support_index,
        pressure_index,
        volatility_index,
        global_pressure,
        cost_multiplier,
        time_multiplier,
        risk_multiplier,
    }
}
