use crate::modes::TransportMode;
use crate::store::{Alliance, BreachHistory, Country, RouteRecord, Treaty, WorldStore};

/// Fluent fixture builder for a [`WorldStore`].
pub struct WorldBuilder {
    store: WorldStore,
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self {
            store: WorldStore::default(),
        }
    }

    pub fn with_factor(mut self, name: &str, effect: f64, strength: f64) -> Self {
        self.store.add_factor(name, effect, strength);
        self
    }

    pub fn with_route(
        mut self,
        origin: &str,
        destination: &str,
        cost: f64,
        time: f64,
        risk: f64,
        mode: TransportMode,
    ) -> Self {
        self.store
            .add_route(origin, destination, RouteRecord::new(cost, time, risk, mode));
        self
    }

    /// Add the same edge in both directions.
    pub fn with_bidirectional_route(
        self,
        a: &str,
        b: &str,
        cost: f64,
        time: f64,
        risk: f64,
        mode: TransportMode,
    ) -> Self {
        self.with_route(a, b, cost, time, risk, mode)
            .with_route(b, a, cost, time, risk, mode)
    }

    /// Add a country with the given (commodity key, quantity) production.
    pub fn with_country(mut self, name: &str, production: &[(&str, f64)]) -> Self {
        self.store.add_country(
            name,
            Country {
                production: production
                    .iter()
                    .map(|&(commodity, quantity)| (commodity.to_string(), quantity))
                    .collect(),
            },
        );
        self
    }

    pub fn with_commodity(mut self, name: &str, unit_cost: f64) -> Self {
        self.store.add_commodity(name, unit_cost);
        self
    }

    pub fn with_alliance(
        mut self,
        name: &str,
        members: &[&str],
        cohesion: f64,
        support_multiplier: f64,
        deterrence: f64,
    ) -> Self {
        self.store.add_alliance(
            name,
            Alliance {
                members: members.iter().map(|m| m.to_string()).collect(),
                cohesion,
                support_multiplier,
                deterrence,
            },
        );
        self
    }

    pub fn with_treaty(
        mut self,
        name: &str,
        parties: &[&str],
        stability: f64,
        enforcement: f64,
        breaches: u32,
        years_active: u32,
    ) -> Self {
        self.store.add_treaty(
            name,
            Treaty {
                parties: parties.iter().map(|p| p.to_string()).collect(),
                stability,
                enforcement,
                breach_history: BreachHistory {
                    breaches,
                    years_active,
                },
            },
        );
        self
    }

    pub fn build(self) -> WorldStore {
        self.store
    }
}

impl Default for WorldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let store = WorldBuilder::default()
            .with_factor("Cyber Threat Level", -0.5, 0.8)
            .with_bidirectional_route("A", "B", 10.0, 5.0, 0.1, TransportMode::Sea)
            .with_country("A", &[("oil", 120.0)])
            .with_commodity("Oil", 50.0)
            .build();

        assert!(store.factors.contains_key("Cyber Threat Level"));
        assert!(store.route("A", "B").is_some());
        assert!(store.route("B", "A").is_some());
        assert_eq!(store.countries["A"].production["oil"], 120.0);
        assert_eq!(store.commodities["oil"].unit_cost, 50.0);
    }
}
