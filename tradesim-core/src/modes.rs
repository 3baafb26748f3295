//! Transport modes, their static profiles, and modal-transfer penalties.
//!
//! Three concerns live here:
//! - per-mode scaling of a (cost, time, risk) triple, used both for
//!   mode-selection scoring and for recomputing a stored route's metrics
//!   from its base snapshot
//! - per-mode cargo capacity multipliers (sea absorbs bulk cheaply, air
//!   charges a premium)
//! - fixed transfer penalties paid when a shipment changes mode at a country

use crate::numeric::clamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport mode of a trade route edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Land,
    Sea,
    Air,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] = [TransportMode::Land, TransportMode::Sea, TransportMode::Air];

    /// Parse a case-insensitive mode name.
    pub fn parse(name: &str) -> Option<TransportMode> {
        match name.to_ascii_lowercase().as_str() {
            "land" => Some(TransportMode::Land),
            "sea" => Some(TransportMode::Sea),
            "air" => Some(TransportMode::Air),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Land => "land",
            TransportMode::Sea => "sea",
            TransportMode::Air => "air",
        }
    }
}

impl Default for TransportMode {
    fn default() -> Self {
        TransportMode::Land
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static per-mode scaling applied to a cost/time/risk triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeProfile {
    pub cost_scale: f64,
    pub time_scale: f64,
    pub risk_delta: f64,
}

/// Profile table: cost/time scale multiplicatively, risk shifts additively.
pub fn mode_profile(mode: TransportMode) -> ModeProfile {
    match mode {
        TransportMode::Land => ModeProfile {
            cost_scale: 0.95,
            time_scale: 1.15,
            risk_delta: 0.02,
        },
        TransportMode::Sea => ModeProfile {
            cost_scale: 0.70,
            time_scale: 1.35,
            risk_delta: 0.05,
        },
        TransportMode::Air => ModeProfile {
            cost_scale: 1.25,
            time_scale: 0.65,
            risk_delta: -0.02,
        },
    }
}

/// A (cost, time, risk) triple after mode-profile scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeAdjusted {
    pub cost: f64,
    pub time: f64,
    pub risk: f64,
}

/// Apply a mode profile to a cost/time/risk triple.
///
/// Cost is floored at 0.01 and time at 0.1 so scaling can never drive them
/// to zero; risk stays inside (0.0001, 0.999).
pub fn apply_mode_profile(cost: f64, time: f64, risk: f64, mode: TransportMode) -> ModeAdjusted {
    let profile = mode_profile(mode);
    ModeAdjusted {
        cost: (cost * profile.cost_scale).max(0.01),
        time: (time * profile.time_scale).max(0.1),
        risk: clamp(risk + profile.risk_delta, 0.0001, 0.999),
    }
}

/// Cargo capacity multiplier: how strongly cargo weight inflates cost on
/// this mode. Sea moves bulk cheaply, air charges a premium.
pub fn capacity_multiplier(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Land => 1.0,
        TransportMode::Sea => 0.5,
        TransportMode::Air => 2.5,
    }
}

/// Fixed penalty paid when a shipment switches transport mode at a country.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransferPenalty {
    pub cost: f64,
    pub time: f64,
    pub risk: f64,
}

/// Modal transfer table. Symmetric: the penalty is the same in both
/// directions of the switch.
pub fn transfer_penalty(from: TransportMode, to: TransportMode) -> Option<TransferPenalty> {
    use TransportMode::*;
    match (from, to) {
        // Port handling
        (Land, Sea) | (Sea, Land) => Some(TransferPenalty {
            cost: 50.0,
            time: 4.0,
            risk: 0.02,
        }),
        // Airport handling
        (Land, Air) | (Air, Land) => Some(TransferPenalty {
            cost: 100.0,
            time: 2.0,
            risk: 0.01,
        }),
        // Complex ship-to-plane transfer
        (Sea, Air) | (Air, Sea) => Some(TransferPenalty {
            cost: 150.0,
            time: 6.0,
            risk: 0.03,
        }),
        _ => None,
    }
}
