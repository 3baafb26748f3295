//! Game-theoretic assessment of a computed route.
//!
//! Layers an iterated prisoner's-dilemma payoff structure over the route
//! totals: alliance support discounts risk, treaties anchor the breach
//! baseline, and the resulting cooperation/treaty-break probabilities
//! compose into a stability index. Deterministic scoring heuristic, not an
//! equilibrium solver.

use crate::config::ScenarioParams;
use crate::factors::{FactorImpacts, FactorSet};
use crate::numeric::{clamp, sigmoid};
use crate::store::{Alliance, CountryId, Treaty};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which endpoint(s) of the scenario an alliance covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Involvement {
    Source,
    Destination,
}

/// An alliance touching the scenario, with its computed leverage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllianceRecord {
    pub name: String,
    pub members: Vec<CountryId>,
    pub cohesion: f64,
    pub support_multiplier: f64,
    pub deterrence: f64,
    pub involvement: Vec<Involvement>,
    pub leverage: f64,
}

/// A treaty binding both endpoints, with its computed breach probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatyRecord {
    pub name: String,
    pub parties: Vec<CountryId>,
    pub stability: f64,
    pub enforcement: f64,
    pub breach_probability: f64,
}

/// Payoffs for one (source action, destination action) cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffPair {
    pub src: f64,
    pub dst: f64,
}

/// 2x2 cooperate/defect payoff matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffMatrix {
    pub cooperate_cooperate: PayoffPair,
    pub cooperate_defect: PayoffPair,
    pub defect_cooperate: PayoffPair,
    pub defect_defect: PayoffPair,
}

/// Intermediate quantities surfaced for auditability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlookMetrics {
    pub critical_delta_src: f64,
    pub critical_delta_dst: f64,
    pub safety_margin: f64,
    pub global_pressure: f64,
}

/// One raw factor echoed back into the outlook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorRecord {
    pub name: String,
    pub effect: f64,
    pub strength: f64,
}

/// The raw factors and their aggregated impacts, as used for this outlook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlookFactors {
    pub records: Vec<FactorRecord>,
    pub impacts: FactorImpacts,
}

/// Full strategic assessment of a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategicOutlook {
    pub alliances: Vec<AllianceRecord>,
    pub treaties: Vec<TreatyRecord>,
    pub payoff_matrix: PayoffMatrix,
    pub cooperation_probability: f64,
    pub treaty_break_probability: f64,
    pub equilibrium_strategy: String,
    pub stability_index: f64,
    pub escalation_risk: f64,
    pub expected_rounds: u32,
    pub recommendation: String,
    pub summary: String,
    pub metrics: OutlookMetrics,
    pub factors: OutlookFactors,
}

/// FNV-1a 64-bit hash. Pinned here (rather than relying on any language or
/// stdlib hasher) so the per-pair variation is reproducible across
/// implementations.
fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// Deterministic per-pair variation seed in [0, 1).
///
/// Gives distinct country pairs non-identical baseline numbers; not for
/// cryptographic purposes.
pub fn pair_seed(source: &str, destination: &str) -> f64 {
    let mut key = String::with_capacity(source.len() + destination.len());
    key.push_str(source);
    key.push_str(destination);
    (fnv1a64(key.as_bytes()) % 100) as f64 / 100.0
}

/// Compute the strategic outlook for a routed scenario.
#[allow(clippy::too_many_arguments)]
pub fn evaluate_strategic_outlook(
    source: &str,
    destination: &str,
    path: &[CountryId],
    total_cost: f64,
    total_time: f64,
    total_risk: f64,
    alliances: &BTreeMap<String, Alliance>,
    treaties: &BTreeMap<String, Treaty>,
    factors: &FactorSet,
    factor_impacts: &FactorImpacts,
    params: &ScenarioParams,
) -> StrategicOutlook {
    let seed = pair_seed(source, destination);

    // ------------------------------------------------------------------
    // Alliance support and shared deterrence
    // ------------------------------------------------------------------
    let mut alliance_records = Vec::new();
    let mut src_support = 0.0;
    let mut dst_support = 0.0;
    let mut shared_deterrence = 0.0;

    for (name, alliance) in alliances {
        let mut involvement = Vec::new();
        // Lower-risk routes attract more alliance support
        let risk_adjusted_support =
            alliance.cohesion * alliance.support_multiplier * (1.5 - total_risk * 0.8);

        if alliance.members.iter().any(|m| m == source) {
            involvement.push(Involvement::Source);
            src_support += risk_adjusted_support;
        }
        if alliance.members.iter().any(|m| m == destination) {
            involvement.push(Involvement::Destination);
            dst_support += risk_adjusted_support;
        }

        let leverage = alliance.cohesion * alliance.deterrence;
        if involvement.len() == 2 {
            shared_deterrence += leverage;
        }
        if !involvement.is_empty() {
            alliance_records.push(AllianceRecord {
                name: name.clone(),
                members: alliance.members.clone(),
                cohesion: alliance.cohesion,
                support_multiplier: alliance.support_multiplier,
                deterrence: alliance.deterrence,
                involvement,
                leverage,
            });
        }
    }

    // ------------------------------------------------------------------
    // Treaty breach baseline
    // ------------------------------------------------------------------
    let mut treaty_records = Vec::new();
    let mut breach_components = Vec::new();

    for (name, treaty) in treaties {
        let covers_both = treaty.parties.iter().any(|p| p == source)
            && treaty.parties.iter().any(|p| p == destination);
        if !covers_both {
            continue;
        }

        let history = &treaty.breach_history;
        let historic_pressure = f64::from(history.breaches) / f64::from(history.years_active.max(1));
        // High cost/time routes strain treaties more
        let economic_strain = (total_cost / 40.0 + total_time / 20.0) * 0.12;
        let base = (1.0 - treaty.stability) * 0.6
            + (1.0 - treaty.enforcement) * 0.4
            + historic_pressure
            + economic_strain;
        let breach_probability = clamp(sigmoid((base - 0.5) * 4.0), 0.01, 0.99);
        breach_components.push(breach_probability);
        treaty_records.push(TreatyRecord {
            name: name.clone(),
            parties: treaty.parties.clone(),
            stability: treaty.stability,
            enforcement: treaty.enforcement,
            breach_probability,
        });
    }

    let treaty_break_base = if breach_components.is_empty() {
        // No treaty binds the pair: synthesize a baseline from route
        // characteristics plus the pair seed so each pair gets a distinct
        // resting tension.
        let route_tension = total_risk * 0.45 + total_cost / 80.0 * 0.25 + seed * 0.35;
        clamp(0.10 + route_tension, 0.05, 0.55)
    } else {
        breach_components.iter().sum::<f64>() / breach_components.len() as f64
    };

    // ------------------------------------------------------------------
    // Payoff matrix
    // ------------------------------------------------------------------
    let global_pressure = factor_impacts.global_pressure;
    let shock = params.shock;
    let aggression = params.aggression;

    // More hops means more complexity, eating into trade gains
    let hop_count = path.len().saturating_sub(1) as f64;
    let complexity_penalty = hop_count * 15.0;
    let pair_variation = (seed - 0.5) * 45.0;

    let base_trade_gain = (185.0 - (total_cost * 5.5 + total_time * 3.2) - complexity_penalty
        + pair_variation)
        .max(15.0);
    let risk_penalty = total_risk * 135.0;
    let pressure_penalty = (global_pressure + shock) * 35.0;

    let support_scale = 95.0;
    let reward_src = base_trade_gain + src_support * support_scale - risk_penalty - pressure_penalty;
    let reward_dst = base_trade_gain + dst_support * support_scale - risk_penalty - pressure_penalty;

    let temptation_src = reward_src + 15.0 + aggression * 20.0;
    let temptation_dst = reward_dst + 15.0 + aggression * 20.0;
    let punishment_src = reward_src - 12.0 - global_pressure * 10.0;
    let punishment_dst = reward_dst - 12.0 - global_pressure * 10.0;
    let sucker_src = reward_src - 28.0;
    let sucker_dst = reward_dst - 28.0;

    let payoff_matrix = PayoffMatrix {
        cooperate_cooperate: PayoffPair {
            src: reward_src,
            dst: reward_dst,
        },
        cooperate_defect: PayoffPair {
            src: sucker_src,
            dst: temptation_dst,
        },
        defect_cooperate: PayoffPair {
            src: temptation_src,
            dst: sucker_dst,
        },
        defect_defect: PayoffPair {
            src: punishment_src,
            dst: punishment_dst,
        },
    };

    // ------------------------------------------------------------------
    // Repeated-game cooperation threshold
    // ------------------------------------------------------------------
    let critical_delta_src =
        (temptation_src - reward_src) / (temptation_src - punishment_src).max(0.0001);
    let critical_delta_dst =
        (temptation_dst - reward_dst) / (temptation_dst - punishment_dst).max(0.0001);
    let safety_margin = params.discount - critical_delta_src.max(critical_delta_dst);

    // Expensive/risky routes erode trust
    let route_trust_factor = 1.0 - (total_cost / 120.0) * 0.45 - total_risk * 0.35;
    let trust_bonus =
        (1.0 - treaty_break_base) * 0.5 + shared_deterrence * 0.4 + route_trust_factor * 0.35;

    let cooperation_probability = clamp(
        sigmoid(3.2 * safety_margin + 2.1 * trust_bonus - 2.2 * global_pressure),
        0.02,
        0.98,
    );

    let treaty_break_probability = clamp(
        (1.0 - cooperation_probability) * 0.55 + treaty_break_base * 0.3 + shock * 0.25,
        0.01,
        0.995,
    );

    let stability_index = clamp(
        cooperation_probability
            * (1.0 - treaty_break_probability)
            * (0.65 + shared_deterrence * 0.5),
        0.0,
        1.0,
    );
    let escalation_risk = 1.0 - stability_index;

    let expected_rounds = ((f64::from(params.rounds) * (0.6 + cooperation_probability)).round()
        as i64)
        .max(2) as u32;

    let equilibrium_strategy = if safety_margin > 0.0 {
        "Sustain cooperation via grim-trigger"
    } else {
        "Prepare tit-for-tat retaliation"
    }
    .to_string();

    let recommendation = if stability_index >= 0.6 {
        "Leverage alliances and confidence-building"
    } else {
        "Hedge with diversified routing"
    }
    .to_string();

    let summary = format!(
        "Cooperation likelihood at {:.1}% with treaty break risk {:.1}%. \
         Equilibrium favors {} while escalation risk sits at {:.1}%.",
        cooperation_probability * 100.0,
        treaty_break_probability * 100.0,
        equilibrium_strategy.to_lowercase(),
        escalation_risk * 100.0
    );

    let factor_records = factors
        .iter()
        .map(|(name, factor)| FactorRecord {
            name: name.clone(),
            effect: factor.effect,
            strength: factor.strength,
        })
        .collect();

    StrategicOutlook {
        alliances: alliance_records,
        treaties: treaty_records,
        payoff_matrix,
        cooperation_probability,
        treaty_break_probability,
        equilibrium_strategy,
        stability_index,
        escalation_risk,
        expected_rounds,
        recommendation,
        summary,
        metrics: OutlookMetrics {
            critical_delta_src,
            critical_delta_dst,
            safety_margin,
            global_pressure,
        },
        factors: OutlookFactors {
            records: factor_records,
            impacts: *factor_impacts,
        },
    }
}
