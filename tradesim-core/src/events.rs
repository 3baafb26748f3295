//! Geopolitical events that mutate the route store.
//!
//! Each event edits route metrics in place (risk re-clamped to [0, 1] after
//! every change) and, where warranted, shifts the global factor set so the
//! adjustment layer feels the aftermath too. Pairwise events without a
//! direct edge fall back to mutating every segment of the minimum-hop path
//! between the two countries; no path means the event reports `false`.

use crate::factors::Factor;
use crate::modes::{mode_profile, TransportMode};
use crate::network::{build_network, hop_path};
use crate::numeric::clamp;
use crate::store::{RouteBase, RouteMap, RouteRecord, WorldStore};

/// Apply `mutator` to the direct a -> b edge, or to every segment of the
/// minimum-hop path when no direct edge exists. Returns whether anything
/// was reachable to mutate.
fn mutate_route(
    store: &mut WorldStore,
    a: &str,
    b: &str,
    mut mutator: impl FnMut(&mut RouteRecord),
) -> bool {
    if let Some(route) = store.route_mut(a, b) {
        mutator(route);
        return true;
    }

    let network = build_network(store);
    let Some(path) = hop_path(&network, a, b) else {
        log::debug!("no direct edge or path {} -> {}, event dropped", a, b);
        return false;
    };
    for pair in path.windows(2) {
        if let Some(route) = store.route_mut(&pair[0], &pair[1]) {
            mutator(route);
        }
    }
    true
}

/// Apply `mutator` to the direct a -> b edge only, and only when
/// `predicate` accepts it. No indirect fallback.
fn mutate_route_guarded(
    store: &mut WorldStore,
    a: &str,
    b: &str,
    predicate: impl Fn(&RouteRecord) -> bool,
    mutator: impl FnOnce(&mut RouteRecord),
) -> bool {
    match store.route_mut(a, b) {
        Some(route) if predicate(route) => {
            mutator(route);
            true
        }
        _ => false,
    }
}

/// Apply `mutator` to every edge into or out of `country`. Returns whether
/// any edge was touched.
fn mutate_country_routes(
    store: &mut WorldStore,
    country: &str,
    mut mutator: impl FnMut(&mut RouteRecord),
) -> bool {
    let mut touched = 0usize;
    for edges in store.routes.values_mut() {
        if let Some(route) = edges.get_mut(country) {
            mutator(route);
            touched += 1;
        }
    }
    if let Some(edges) = store.routes.get_mut(country) {
        for route in edges.values_mut() {
            mutator(route);
            touched += 1;
        }
    }
    touched > 0
}

fn factor_entry<'a>(store: &'a mut WorldStore, name: &str) -> &'a mut Factor {
    store.factors.entry(name.to_string()).or_insert(Factor {
        effect: 0.0,
        strength: 0.5,
    })
}

/// Sever both directed edges between two countries and push the factor set
/// into wartime posture.
pub fn declare_war(store: &mut WorldStore, a: &str, b: &str) -> bool {
    let severed_ab = store.delete_route(a, b);
    let severed_ba = store.delete_route(b, a);

    store.add_factor("Border Tension Pressure", -1.0, 1.0);
    store.add_factor("Diplomatic Alignment", -1.0, 1.0);
    store.add_factor("Cyber Threat Level", -0.9, 1.0);

    log::info!("war declared between {} and {}", a, b);
    severed_ab || severed_ba
}

/// Raise route cost by a percentage and lean on border/currency factors.
pub fn impose_tariff(store: &mut WorldStore, a: &str, b: &str, percent: f64) -> bool {
    let pressure = (percent / 100.0).min(0.3);

    let border = factor_entry(store, "Border Tension Pressure");
    border.effect = clamp(border.effect - pressure, -1.0, 0.0);
    border.strength = (border.strength + 0.1).min(1.0);
    let currency = factor_entry(store, "Currency Instability");
    currency.effect = clamp(currency.effect - pressure * 0.5, -1.0, 0.0);

    mutate_route(store, a, b, |route| {
        route.cost *= 1.0 + percent / 100.0;
    })
}

/// Raise cost and risk, with diplomatic/debt factor pressure.
pub fn impose_sanction(store: &mut WorldStore, a: &str, b: &str, percent: f64) -> bool {
    let pressure = (percent / 100.0).min(0.35);

    let diplomatic = factor_entry(store, "Diplomatic Alignment");
    diplomatic.effect = clamp(diplomatic.effect - pressure, -1.0, 0.0);
    diplomatic.strength = (diplomatic.strength + 0.2).min(1.0);
    let debt = factor_entry(store, "Debt Distress Signal");
    debt.effect = clamp(debt.effect - pressure * 0.8, -1.0, 0.0);

    mutate_route(store, a, b, |route| {
        route.cost *= 1.0 + percent / 100.0;
        route.risk = clamp(route.risk + 0.05, 0.0, 1.0);
    })
}

/// Cut cost and risk, with innovation/supply-chain factor relief.
pub fn grant_subsidy(store: &mut WorldStore, a: &str, b: &str, percent: f64) -> bool {
    let relief = (percent / 100.0).min(0.4);

    let innovation = factor_entry(store, "Innovation Subsidy");
    innovation.effect = clamp(innovation.effect + relief, -1.0, 1.0);
    innovation.strength = (innovation.strength + 0.15).min(1.0);
    let supply = factor_entry(store, "Supply Chain Capacity");
    supply.effect = clamp(supply.effect + relief * 0.6, -1.0, 1.0);

    mutate_route(store, a, b, |route| {
        route.cost = (route.cost * (1.0 - percent / 100.0)).max(0.1);
        route.risk = clamp(route.risk - 0.03, 0.0, 1.0);
    })
}

/// Shift route risk by a signed delta, echoed into maritime/cyber factors.
pub fn apply_risk_modification(store: &mut WorldStore, a: &str, b: &str, delta: f64) -> bool {
    let shift = -delta * 2.0;

    let maritime = factor_entry(store, "Maritime Security Index");
    maritime.effect = clamp(maritime.effect + shift, -1.0, 1.0);
    maritime.strength = (maritime.strength + delta.abs() * 0.5).min(1.0);
    let cyber = factor_entry(store, "Cyber Threat Level");
    cyber.effect = clamp(cyber.effect + shift * 0.7, -1.0, 1.0);

    mutate_route(store, a, b, |route| {
        route.risk = clamp(route.risk + delta, 0.0, 1.0);
    })
}

pub fn fast_track_customs(store: &mut WorldStore, a: &str, b: &str, hours: f64) -> bool {
    mutate_route(store, a, b, |route| {
        route.time = (route.time - hours).max(1.0);
    })
}

pub fn disrupt_infrastructure(store: &mut WorldStore, a: &str, b: &str, hours: f64) -> bool {
    mutate_route(store, a, b, |route| {
        route.time += hours;
        route.risk = clamp(route.risk + 0.07, 0.0, 1.0);
    })
}

pub fn bolster_security(store: &mut WorldStore, a: &str, b: &str, delta: f64) -> bool {
    mutate_route(store, a, b, |route| {
        route.risk = clamp(route.risk - delta, 0.0, 1.0);
    })
}

pub fn launch_cyber_attack(store: &mut WorldStore, a: &str, b: &str, delta: f64) -> bool {
    mutate_route(store, a, b, |route| {
        route.risk = clamp(route.risk + delta, 0.0, 1.0);
        route.time += (delta * 10.0).max(1.0);
    })
}

pub fn open_humanitarian_corridor(store: &mut WorldStore, a: &str, b: &str, percent: f64) -> bool {
    mutate_route(store, a, b, |route| {
        route.cost = (route.cost * (1.0 - percent / 100.0)).max(0.1);
        route.time = (route.time * (1.0 - percent / 200.0)).max(1.0);
        route.risk = clamp(route.risk - 0.05, 0.0, 1.0);
    })
}

fn peace_terms(route: &mut RouteRecord, percent: f64) {
    route.ensure_base();
    let reduction = percent / 100.0;
    let base_cost = route.base.map(|base| base.cost).unwrap_or(route.cost);
    route.cost = (route.cost * (1.0 - reduction * 0.6)).max(base_cost * 0.35);
    route.time = (route.time * (1.0 - reduction * 0.4)).max(0.5);
    route.risk = clamp(route.risk - reduction * 0.3, 0.0, 1.0);
}

/// Ease a route under a new peace treaty. When the edge was severed (by a
/// war) it is first restored from the defaults snapshot.
pub fn broker_peace_treaty(
    store: &mut WorldStore,
    a: &str,
    b: &str,
    percent: f64,
    defaults: &RouteMap,
) -> bool {
    if mutate_route(store, a, b, |route| peace_terms(route, percent)) {
        return true;
    }
    let Some(record) = defaults.get(a).and_then(|edges| edges.get(b)) else {
        return false;
    };
    store.add_route(a, b, record.clone());
    mutate_route(store, a, b, |route| peace_terms(route, percent))
}

/// Fold a route into annexed territory: faster and cheaper to traverse but
/// riskier, and forced onto land.
pub fn annex_territory(store: &mut WorldStore, a: &str, b: &str, percent: f64) -> bool {
    let relief = percent / 100.0;
    mutate_route(store, a, b, |route| {
        route.ensure_base();
        route.time = (route.time * (1.0 - relief)).max(0.5);
        route.cost = (route.cost * (1.0 - relief * 0.6)).max(0.1);
        route.risk = clamp(route.risk + 0.05, 0.0, 1.0);
        route.mode = TransportMode::Land;
    })
}

/// Disaster striking a specific corridor.
pub fn route_natural_disaster(store: &mut WorldStore, a: &str, b: &str, severity: f64) -> bool {
    mutate_route(store, a, b, |route| {
        route.time += severity / 10.0 * 0.8;
        route.cost *= 1.0 + severity / 140.0;
        route.risk = clamp(route.risk + severity / 120.0, 0.0, 1.0);
    })
}

/// Storm on a sea lane. Only applies to a direct sea edge.
pub fn trigger_sea_storm(store: &mut WorldStore, a: &str, b: &str, severity: f64) -> bool {
    let severity = clamp(severity, 0.0, 100.0);
    mutate_route_guarded(
        store,
        a,
        b,
        |route| route.mode == TransportMode::Sea,
        |route| {
            route.time += severity / 5.0;
            route.cost *= 1.0 + severity / 200.0;
            route.risk = clamp(route.risk + severity / 150.0, 0.0, 1.0);
        },
    )
}

/// Piracy on a sea lane. Only applies to a direct sea edge.
pub fn report_pirate_activity(store: &mut WorldStore, a: &str, b: &str, severity: f64) -> bool {
    let severity = clamp(severity, 0.0, 100.0);
    mutate_route_guarded(
        store,
        a,
        b,
        |route| route.mode == TransportMode::Sea,
        |route| {
            route.cost *= 1.0 + severity / 120.0;
            route.risk = clamp(route.risk + severity / 80.0 + 0.02, 0.0, 1.0);
            route.time += severity / 20.0;
        },
    )
}

/// Famine in a country: every touching route carries aid overhead, and the
/// food-security factor (when tracked) collapses.
pub fn trigger_famine(store: &mut WorldStore, country: &str, severity: f64) -> bool {
    let severity = clamp(severity, 0.0, 100.0);

    if let Some(factor) = store.factors.get_mut("Food Security Buffer") {
        factor.effect = -severity / 100.0;
        factor.strength = (severity / 60.0).min(1.0);
    }

    mutate_country_routes(store, country, |route| {
        route.cost *= 1.0 + severity / 100.0;
        route.time *= 1.0 + severity / 150.0;
        route.risk = clamp(route.risk + severity / 200.0, 0.0, 1.0);
    })
}

/// Civil war in a country: severe cost, delay and risk on every touching
/// route, with border/diplomatic factor fallout.
pub fn trigger_civil_war(store: &mut WorldStore, country: &str, intensity: f64) -> bool {
    let intensity = clamp(intensity, 0.0, 100.0);

    if let Some(factor) = store.factors.get_mut("Border Tension Pressure") {
        factor.effect = intensity / 100.0;
        factor.strength = (intensity / 50.0).min(1.0);
    }
    if let Some(factor) = store.factors.get_mut("Diplomatic Alignment") {
        factor.effect = -intensity / 100.0;
        factor.strength = (intensity / 50.0).min(1.0);
    }

    mutate_country_routes(store, country, |route| {
        route.cost *= 1.0 + intensity / 40.0;
        route.time *= 1.0 + intensity / 60.0;
        route.risk = clamp(route.risk + intensity / 100.0 + 0.2, 0.0, 1.0);
    })
}

/// Natural disaster in a country. Impact profile depends on the disaster
/// kind; every touching route is affected.
pub fn country_natural_disaster(
    store: &mut WorldStore,
    country: &str,
    kind: &str,
    magnitude: f64,
) -> bool {
    let magnitude = clamp(magnitude, 0.0, 100.0);

    if let Some(factor) = store.factors.get_mut("Climate Shock Exposure") {
        factor.effect = magnitude / 100.0;
        factor.strength = (magnitude / 55.0).min(1.0);
    }

    let (cost_mult, time_mult, risk_add) = match kind.to_lowercase().as_str() {
        "earthquake" | "tsunami" => (
            1.0 + magnitude / 80.0,
            1.0 + magnitude / 50.0,
            magnitude / 150.0,
        ),
        "hurricane" | "typhoon" | "cyclone" => (
            1.0 + magnitude / 100.0,
            1.0 + magnitude / 40.0,
            magnitude / 120.0,
        ),
        "flood" | "drought" => (
            1.0 + magnitude / 120.0,
            1.0 + magnitude / 70.0,
            magnitude / 180.0,
        ),
        _ => (
            1.0 + magnitude / 100.0,
            1.0 + magnitude / 60.0,
            magnitude / 150.0,
        ),
    };

    mutate_country_routes(store, country, |route| {
        route.cost *= cost_mult;
        route.time *= time_mult;
        route.risk = clamp(route.risk + risk_add, 0.0, 1.0);
    })
}

/// Switch a route's transport mode, recomputing its metrics from the base
/// snapshot through the mode profile. When no direct edge exists, a
/// bidirectional default route for the mode is created instead.
pub fn set_route_mode(store: &mut WorldStore, a: &str, b: &str, mode: TransportMode) -> bool {
    let profile = mode_profile(mode);

    if store.route(a, b).is_none() {
        let (base_cost, base_time, base_risk) = match mode {
            TransportMode::Air => (15.0, 18.0, 0.18),
            TransportMode::Sea => (11.0, 13.0, 0.15),
            TransportMode::Land => (8.0, 10.0, 0.12),
        };
        for (origin, destination) in [(a, b), (b, a)] {
            store.add_route(
                origin,
                destination,
                RouteRecord::new(
                    base_cost * profile.cost_scale,
                    base_time * profile.time_scale,
                    clamp(base_risk + profile.risk_delta, 0.0, 1.0),
                    mode,
                ),
            );
        }
        return true;
    }

    mutate_route(store, a, b, |route| {
        route.ensure_base();
        let base = route.base.unwrap_or(RouteBase {
            cost: route.cost,
            time: route.time,
            risk: route.risk,
        });
        route.mode = mode;
        route.cost = (base.cost * profile.cost_scale).max(0.05);
        route.time = (base.time * profile.time_scale).max(0.25);
        route.risk = clamp(base.risk + profile.risk_delta, 0.0, 1.0);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::cheapest_route;
    use crate::testing::WorldBuilder;

    fn linked_store() -> WorldStore {
        WorldBuilder::new()
            .with_bidirectional_route("A", "B", 10.0, 5.0, 0.1, TransportMode::Land)
            .build()
    }

    #[test]
    fn test_declare_war_severs_both_directions() {
        let mut store = linked_store();
        assert!(declare_war(&mut store, "A", "B"));
        assert!(store.route("A", "B").is_none());
        assert!(store.route("B", "A").is_none());
        let network = build_network(&store);
        assert!(cheapest_route(&network, "A", "B").is_none());

        let border = &store.factors["Border Tension Pressure"];
        assert_eq!(border.effect, -1.0);
        assert_eq!(border.strength, 1.0);
        assert_eq!(store.factors["Cyber Threat Level"].effect, -0.9);
    }

    #[test]
    fn test_war_leaves_detour_intact() {
        let mut store = WorldBuilder::new()
            .with_route("A", "B", 10.0, 5.0, 0.1, TransportMode::Land)
            .with_route("A", "C", 8.0, 4.0, 0.1, TransportMode::Land)
            .with_route("C", "B", 8.0, 4.0, 0.1, TransportMode::Land)
            .build();
        declare_war(&mut store, "A", "B");
        let network = build_network(&store);
        let (path, _) = cheapest_route(&network, "A", "B").unwrap();
        assert_eq!(path, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_tariff_scales_cost_and_pressures_factors() {
        let mut store = linked_store();
        assert!(impose_tariff(&mut store, "A", "B", 20.0));
        assert!((store.route("A", "B").unwrap().cost - 12.0).abs() < 1e-9);
        // Reverse edge untouched
        assert_eq!(store.route("B", "A").unwrap().cost, 10.0);

        let border = &store.factors["Border Tension Pressure"];
        assert!((border.effect - -0.2).abs() < 1e-9);
        assert!((border.strength - 0.6).abs() < 1e-9);
        assert!((store.factors["Currency Instability"].effect - -0.1).abs() < 1e-9);
    }

    #[test]
    fn test_indirect_fallback_mutates_every_segment() {
        let mut store = WorldBuilder::new()
            .with_route("A", "B", 10.0, 5.0, 0.1, TransportMode::Land)
            .with_route("B", "C", 10.0, 5.0, 0.1, TransportMode::Land)
            .build();
        assert!(impose_tariff(&mut store, "A", "C", 10.0));
        assert!((store.route("A", "B").unwrap().cost - 11.0).abs() < 1e-9);
        assert!((store.route("B", "C").unwrap().cost - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_event_without_path_reports_false() {
        let mut store = linked_store();
        assert!(!impose_tariff(&mut store, "A", "Z", 10.0));
        assert!(!fast_track_customs(&mut store, "X", "Y", 2.0));
    }

    #[test]
    fn test_sea_storm_guard() {
        let mut store = WorldBuilder::new()
            .with_route("A", "B", 10.0, 5.0, 0.1, TransportMode::Land)
            .with_route("A", "C", 10.0, 5.0, 0.1, TransportMode::Sea)
            .build();
        assert!(!trigger_sea_storm(&mut store, "A", "B", 50.0));
        assert_eq!(store.route("A", "B").unwrap().time, 5.0);

        assert!(trigger_sea_storm(&mut store, "A", "C", 50.0));
        let route = store.route("A", "C").unwrap();
        assert!((route.time - 15.0).abs() < 1e-9);
        assert!((route.cost - 12.5).abs() < 1e-9);
        assert!((route.risk - (0.1 + 50.0 / 150.0)).abs() < 1e-9);
    }

    #[test]
    fn test_risk_clamps_at_bounds() {
        let mut store = linked_store();
        launch_cyber_attack(&mut store, "A", "B", 5.0);
        assert_eq!(store.route("A", "B").unwrap().risk, 1.0);
        bolster_security(&mut store, "A", "B", 9.0);
        assert_eq!(store.route("A", "B").unwrap().risk, 0.0);
    }

    #[test]
    fn test_peace_treaty_restores_severed_route() {
        let mut store = WorldBuilder::new()
            .with_route("A", "B", 8.0, 10.0, 0.12, TransportMode::Land)
            .build();
        let defaults = store.routes.clone();
        declare_war(&mut store, "A", "B");
        assert!(store.route("A", "B").is_none());

        assert!(broker_peace_treaty(&mut store, "A", "B", 50.0, &defaults));
        let route = store.route("A", "B").unwrap();
        // Restored 8/10/0.12, then eased by the treaty terms
        assert!((route.cost - 5.6).abs() < 1e-9);
        assert!((route.time - 8.0).abs() < 1e-9);
        assert!((route.risk - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_peace_treaty_without_defaults_fails() {
        let mut store = linked_store();
        declare_war(&mut store, "A", "B");
        assert!(!broker_peace_treaty(&mut store, "A", "B", 50.0, &RouteMap::new()));
    }

    #[test]
    fn test_set_route_mode_anchors_on_base() {
        let mut store = WorldBuilder::new()
            .with_route("A", "B", 8.0, 10.0, 0.12, TransportMode::Land)
            .build();
        // Drift the live metrics away from base first
        disrupt_infrastructure(&mut store, "A", "B", 5.0);
        assert!((store.route("A", "B").unwrap().time - 15.0).abs() < 1e-9);

        assert!(set_route_mode(&mut store, "A", "B", TransportMode::Sea));
        let route = store.route("A", "B").unwrap();
        assert_eq!(route.mode, TransportMode::Sea);
        assert!((route.cost - 8.0 * 0.70).abs() < 1e-9);
        assert!((route.time - 13.5).abs() < 1e-9);
        assert!((route.risk - 0.17).abs() < 1e-9);
    }

    #[test]
    fn test_set_route_mode_creates_default_bidirectional() {
        let mut store = WorldStore::default();
        assert!(set_route_mode(&mut store, "A", "B", TransportMode::Sea));
        for (origin, destination) in [("A", "B"), ("B", "A")] {
            let route = store.route(origin, destination).unwrap();
            assert_eq!(route.mode, TransportMode::Sea);
            assert!((route.cost - 11.0 * 0.70).abs() < 1e-9);
            assert!((route.time - 13.0 * 1.35).abs() < 1e-9);
            assert!((route.risk - 0.20).abs() < 1e-9);
        }
    }

    #[test]
    fn test_famine_touches_every_edge_of_country() {
        let mut store = WorldBuilder::new()
            .with_route("A", "B", 10.0, 6.0, 0.1, TransportMode::Land)
            .with_route("B", "C", 10.0, 6.0, 0.1, TransportMode::Land)
            .with_route("C", "A", 10.0, 6.0, 0.1, TransportMode::Land)
            .with_factor("Food Security Buffer", 0.3, 0.5)
            .build();
        assert!(trigger_famine(&mut store, "B", 60.0));

        // In-edge and out-edge of B scaled, unrelated edge untouched
        assert!((store.route("A", "B").unwrap().cost - 16.0).abs() < 1e-9);
        assert!((store.route("B", "C").unwrap().cost - 16.0).abs() < 1e-9);
        assert_eq!(store.route("C", "A").unwrap().cost, 10.0);

        let factor = &store.factors["Food Security Buffer"];
        assert!((factor.effect - -0.6).abs() < 1e-9);
        assert!((factor.strength - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_famine_with_no_routes_reports_false() {
        let mut store = linked_store();
        assert!(!trigger_famine(&mut store, "Z", 50.0));
    }

    #[test]
    fn test_civil_war_profile() {
        let mut store = linked_store();
        assert!(trigger_civil_war(&mut store, "B", 40.0));
        let route = store.route("A", "B").unwrap();
        assert!((route.cost - 20.0).abs() < 1e-9);
        assert!((route.time - 5.0 * (1.0 + 40.0 / 60.0)).abs() < 1e-9);
        assert!((route.risk - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_disaster_kind_profiles_differ() {
        let mut quake = linked_store();
        let mut flood = linked_store();
        assert!(country_natural_disaster(&mut quake, "B", "Earthquake", 40.0));
        assert!(country_natural_disaster(&mut flood, "B", "flood", 40.0));

        let quake_route = quake.route("A", "B").unwrap();
        let flood_route = flood.route("A", "B").unwrap();
        assert!((quake_route.cost - 15.0).abs() < 1e-9);
        assert!(quake_route.cost > flood_route.cost);
        assert!(quake_route.time > flood_route.time);
        assert!(quake_route.risk > flood_route.risk);
    }

    #[test]
    fn test_annex_forces_land_mode() {
        let mut store = WorldBuilder::new()
            .with_route("A", "B", 10.0, 8.0, 0.1, TransportMode::Sea)
            .build();
        assert!(annex_territory(&mut store, "A", "B", 30.0));
        let route = store.route("A", "B").unwrap();
        assert_eq!(route.mode, TransportMode::Land);
        assert!((route.time - 5.6).abs() < 1e-9);
        assert!((route.cost - 8.2).abs() < 1e-9);
        assert!((route.risk - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_humanitarian_corridor_floors() {
        let mut store = WorldBuilder::new()
            .with_route("A", "B", 0.2, 1.5, 0.02, TransportMode::Land)
            .build();
        assert!(open_humanitarian_corridor(&mut store, "A", "B", 90.0));
        let route = store.route("A", "B").unwrap();
        assert_eq!(route.cost, 0.1);
        assert_eq!(route.time, 1.0);
        assert_eq!(route.risk, 0.0);
    }
}
