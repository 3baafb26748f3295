//! The world store: countries, commodities, routes, alliances, treaties,
//! factors.
//!
//! This is an owned, in-memory snapshot of the flat key-value collections
//! the core computes over. Every collection is a `BTreeMap` keyed by name so
//! iteration order (supplier selection, factor breakdowns) is reproducible,
//! and each collection serializes 1:1 with its JSON file on disk. The core
//! never holds a store across calls; callers pass a snapshot into each
//! operation.

use crate::factors::{Factor, FactorSet};
use crate::modes::TransportMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Country identifier (the country's display name in the store).
pub type CountryId = String;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("factor '{0}' does not exist")]
    UnknownFactor(String),
}

/// A country record. Only production matters to the core; any other fields
/// in the stored JSON are ignored on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Country {
    /// Commodity key (normalized name) -> production quantity.
    #[serde(default)]
    pub production: BTreeMap<String, f64>,
}

/// A tradeable commodity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Commodity {
    pub unit_cost: f64,
}

/// One item of a cargo manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CargoItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
}

fn default_quantity() -> f64 {
    1.0
}

/// Undisturbed (cost, time, risk) snapshot of a route, captured the first
/// time a mutating event touches it. Mode recomputation anchors here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteBase {
    pub cost: f64,
    pub time: f64,
    pub risk: f64,
}

/// A directed trade route edge. origin -> destination is distinct from the
/// reverse edge and the two may diverge after asymmetric events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub cost: f64,
    pub time: f64,
    /// Failure probability in [0, 1].
    pub risk: f64,
    #[serde(default)]
    pub mode: TransportMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<RouteBase>,
}

impl RouteRecord {
    pub fn new(cost: f64, time: f64, risk: f64, mode: TransportMode) -> Self {
        Self {
            cost,
            time,
            risk,
            mode,
            base: None,
        }
    }

    /// Capture the base snapshot if it has not been captured yet. Once set
    /// it is never overwritten.
    pub fn ensure_base(&mut self) {
        if self.base.is_none() {
            self.base = Some(RouteBase {
                cost: self.cost,
                time: self.time,
                risk: self.risk,
            });
        }
    }
}

/// An alliance between countries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alliance {
    #[serde(default)]
    pub members: Vec<CountryId>,
    #[serde(default = "default_cohesion")]
    pub cohesion: f64,
    #[serde(default = "default_support_multiplier")]
    pub support_multiplier: f64,
    #[serde(default = "default_deterrence")]
    pub deterrence: f64,
}

fn default_cohesion() -> f64 {
    0.5
}

fn default_support_multiplier() -> f64 {
    0.1
}

fn default_deterrence() -> f64 {
    0.4
}

/// Historic breach record of a treaty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BreachHistory {
    #[serde(default)]
    pub breaches: u32,
    #[serde(default = "default_years_active")]
    pub years_active: u32,
}

fn default_years_active() -> u32 {
    1
}

impl Default for BreachHistory {
    fn default() -> Self {
        Self {
            breaches: 0,
            years_active: 1,
        }
    }
}

/// A treaty between countries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treaty {
    #[serde(default)]
    pub parties: Vec<CountryId>,
    #[serde(default = "default_half")]
    pub stability: f64,
    #[serde(default = "default_half")]
    pub enforcement: f64,
    #[serde(default)]
    pub breach_history: BreachHistory,
}

fn default_half() -> f64 {
    0.5
}

/// origin -> destination -> edge record.
pub type RouteMap = BTreeMap<CountryId, BTreeMap<CountryId, RouteRecord>>;

/// The complete stored world: every collection the core reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldStore {
    #[serde(default)]
    pub factors: FactorSet,
    #[serde(default)]
    pub routes: RouteMap,
    #[serde(default)]
    pub countries: BTreeMap<CountryId, Country>,
    #[serde(default)]
    pub commodities: BTreeMap<String, Commodity>,
    #[serde(default)]
    pub alliances: BTreeMap<String, Alliance>,
    #[serde(default)]
    pub treaties: BTreeMap<String, Treaty>,
}

impl WorldStore {
    // ------------------------------------------------------------------
    // Factors
    // ------------------------------------------------------------------

    pub fn add_factor(&mut self, name: &str, effect: f64, strength: f64) {
        self.factors
            .insert(name.to_string(), Factor { effect, strength });
    }

    /// Update an existing factor. Unlike [`add_factor`](Self::add_factor)
    /// this refuses to create new entries.
    pub fn update_factor(&mut self, name: &str, effect: f64, strength: f64) -> Result<(), StoreError> {
        match self.factors.get_mut(name) {
            Some(factor) => {
                *factor = Factor { effect, strength };
                Ok(())
            }
            None => Err(StoreError::UnknownFactor(name.to_string())),
        }
    }

    pub fn delete_factor(&mut self, name: &str) {
        self.factors.remove(name);
    }

    /// Overwrite every factor with the same (effect, strength) pair.
    pub fn set_all_factors(&mut self, effect: f64, strength: f64) {
        for factor in self.factors.values_mut() {
            *factor = Factor { effect, strength };
        }
    }

    /// Replace the live factor set with a defaults snapshot.
    pub fn reset_factors(&mut self, defaults: FactorSet) {
        self.factors = defaults;
    }

    // ------------------------------------------------------------------
    // Routes
    // ------------------------------------------------------------------

    /// Insert or replace a directed route. The base snapshot is captured
    /// from the given metrics unless the record already carries one.
    pub fn add_route(&mut self, origin: &str, destination: &str, mut record: RouteRecord) {
        record.ensure_base();
        self.routes
            .entry(origin.to_string())
            .or_default()
            .insert(destination.to_string(), record);
    }

    /// Remove a directed route. Returns whether the edge existed.
    pub fn delete_route(&mut self, origin: &str, destination: &str) -> bool {
        match self.routes.get_mut(origin) {
            Some(edges) => edges.remove(destination).is_some(),
            None => false,
        }
    }

    pub fn route(&self, origin: &str, destination: &str) -> Option<&RouteRecord> {
        self.routes.get(origin)?.get(destination)
    }

    pub fn route_mut(&mut self, origin: &str, destination: &str) -> Option<&mut RouteRecord> {
        self.routes.get_mut(origin)?.get_mut(destination)
    }

    // ------------------------------------------------------------------
    // Countries / commodities / alliances / treaties
    // ------------------------------------------------------------------

    pub fn add_country(&mut self, name: &str, country: Country) {
        self.countries.insert(name.to_string(), country);
    }

    pub fn delete_country(&mut self, name: &str) {
        self.countries.remove(name);
    }

    pub fn add_commodity(&mut self, name: &str, unit_cost: f64) {
        self.commodities
            .insert(normalize_commodity(name), Commodity { unit_cost });
    }

    pub fn add_alliance(&mut self, name: &str, alliance: Alliance) {
        self.alliances.insert(name.to_string(), alliance);
    }

    pub fn delete_alliance(&mut self, name: &str) {
        self.alliances.remove(name);
    }

    pub fn add_treaty(&mut self, name: &str, treaty: Treaty) {
        self.treaties.insert(name.to_string(), treaty);
    }

    pub fn delete_treaty(&mut self, name: &str) {
        self.treaties.remove(name);
    }
}

/// Commodity names are matched case-insensitively with spaces collapsed to
/// underscores ("Rare Earths" == "rare_earths").
pub fn normalize_commodity(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_route_captures_base() {
        let mut store = WorldStore::default();
        store.add_route(
            "Brazil",
            "Chile",
            RouteRecord::new(8.0, 10.0, 0.12, TransportMode::Land),
        );
        let route = store.route("Brazil", "Chile").unwrap();
        let base = route.base.unwrap();
        assert_eq!(base.cost, 8.0);
        assert_eq!(base.time, 10.0);
        assert_eq!(base.risk, 0.12);
    }

    #[test]
    fn test_ensure_base_never_overwrites() {
        let mut record = RouteRecord::new(8.0, 10.0, 0.12, TransportMode::Land);
        record.ensure_base();
        record.cost = 99.0;
        record.ensure_base();
        assert_eq!(record.base.unwrap().cost, 8.0);
    }

    #[test]
    fn test_update_factor_requires_existing() {
        let mut store = WorldStore::default();
        assert!(store.update_factor("Cyber Threat Level", -0.5, 0.8).is_err());
        store.add_factor("Cyber Threat Level", 0.0, 0.5);
        assert!(store.update_factor("Cyber Threat Level", -0.5, 0.8).is_ok());
        assert_eq!(store.factors["Cyber Threat Level"].effect, -0.5);
    }

    #[test]
    fn test_alliance_defaults_from_partial_json() {
        let alliance: Alliance = serde_json::from_str(r#"{"members": ["A", "B"]}"#).unwrap();
        assert_eq!(alliance.cohesion, 0.5);
        assert_eq!(alliance.support_multiplier, 0.1);
        assert_eq!(alliance.deterrence, 0.4);
    }

    #[test]
    fn test_treaty_defaults_from_partial_json() {
        let treaty: Treaty = serde_json::from_str(r#"{"parties": ["A", "B"]}"#).unwrap();
        assert_eq!(treaty.stability, 0.5);
        assert_eq!(treaty.enforcement, 0.5);
        assert_eq!(treaty.breach_history.breaches, 0);
        assert_eq!(treaty.breach_history.years_active, 1);
    }

    #[test]
    fn test_route_map_round_trip() {
        let mut store = WorldStore::default();
        store.add_route(
            "Japan",
            "Vietnam",
            RouteRecord::new(11.0, 13.0, 0.15, TransportMode::Sea),
        );
        let json = serde_json::to_string(&store.routes).unwrap();
        let back: RouteMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back["Japan"]["Vietnam"], store.routes["Japan"]["Vietnam"]);
    }

    #[test]
    fn test_factor_set_round_trip() {
        let mut store = WorldStore::default();
        store.add_factor("Cyber Threat Level", -0.4, 0.7);
        store.add_factor("Diplomatic Alignment", 0.6, 0.9);
        let json = serde_json::to_string(&store.factors).unwrap();
        let back: FactorSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store.factors);
    }

    #[test]
    fn test_country_round_trip() {
        let mut store = WorldStore::default();
        store.add_country(
            "Chile",
            Country {
                production: BTreeMap::from([("copper".to_string(), 5600.0)]),
            },
        );
        let json = serde_json::to_string(&store.countries).unwrap();
        let back: BTreeMap<CountryId, Country> = serde_json::from_str(&json).unwrap();
        assert_eq!(back["Chile"].production, store.countries["Chile"].production);
    }

    #[test]
    fn test_commodity_round_trip() {
        let mut store = WorldStore::default();
        store.add_commodity("Rare Earths", 120000.0);
        let json = serde_json::to_string(&store.commodities).unwrap();
        let back: BTreeMap<String, Commodity> = serde_json::from_str(&json).unwrap();
        assert_eq!(back["rare_earths"].unit_cost, 120000.0);
    }

    #[test]
    fn test_alliance_round_trip() {
        let mut store = WorldStore::default();
        store.add_alliance(
            "Pacific Compact",
            Alliance {
                members: vec!["Japan".into(), "Vietnam".into()],
                cohesion: 0.8,
                support_multiplier: 0.2,
                deterrence: 0.6,
            },
        );
        let json = serde_json::to_string(&store.alliances).unwrap();
        let back: BTreeMap<String, Alliance> = serde_json::from_str(&json).unwrap();
        let alliance = &back["Pacific Compact"];
        assert_eq!(alliance.members, vec!["Japan", "Vietnam"]);
        assert_eq!(alliance.cohesion, 0.8);
        assert_eq!(alliance.support_multiplier, 0.2);
        assert_eq!(alliance.deterrence, 0.6);
    }

    #[test]
    fn test_treaty_round_trip() {
        let mut store = WorldStore::default();
        store.add_treaty(
            "Open Lanes Accord",
            Treaty {
                parties: vec!["Brazil".into(), "Chile".into()],
                stability: 0.7,
                enforcement: 0.6,
                breach_history: BreachHistory {
                    breaches: 2,
                    years_active: 5,
                },
            },
        );
        let json = serde_json::to_string(&store.treaties).unwrap();
        let back: BTreeMap<String, Treaty> = serde_json::from_str(&json).unwrap();
        let treaty = &back["Open Lanes Accord"];
        assert_eq!(treaty.parties, vec!["Brazil", "Chile"]);
        assert_eq!(treaty.stability, 0.7);
        assert_eq!(treaty.enforcement, 0.6);
        assert_eq!(treaty.breach_history.breaches, 2);
        assert_eq!(treaty.breach_history.years_active, 5);
    }

    #[test]
    fn test_route_mode_defaults_to_land() {
        let record: RouteRecord =
            serde_json::from_str(r#"{"cost": 5.0, "time": 3.0, "risk": 0.1}"#).unwrap();
        assert_eq!(record.mode, TransportMode::Land);
        assert!(record.base.is_none());
    }

    #[test]
    fn test_normalize_commodity() {
        assert_eq!(normalize_commodity("Rare Earths"), "rare_earths");
        assert_eq!(normalize_commodity("oil"), "oil");
    }
}
