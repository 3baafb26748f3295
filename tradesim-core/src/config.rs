use serde::{Deserialize, Serialize};

/// Parameters of the iterated-game layer of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Iterated-game horizon.
    pub rounds: u32,
    /// Patience threshold for sustained cooperation.
    pub discount: f64,
    /// Exogenous instability injected into treaty-break and cooperation math.
    pub shock: f64,
    /// Skews temptation payoffs.
    pub aggression: f64,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            rounds: 6,
            discount: 0.92,
            shock: 0.12,
            aggression: 0.35,
        }
    }
}

/// Caller-supplied partial parameters, merged over the defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScenarioOverrides {
    #[serde(default)]
    pub rounds: Option<u32>,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub shock: Option<f64>,
    #[serde(default)]
    pub aggression: Option<f64>,
}

impl ScenarioParams {
    /// Defaults with any supplied overrides applied on top.
    pub fn merged(overrides: Option<&ScenarioOverrides>) -> Self {
        let mut params = Self::default();
        if let Some(overrides) = overrides {
            if let Some(rounds) = overrides.rounds {
                params.rounds = rounds;
            }
            if let Some(discount) = overrides.discount {
                params.discount = discount;
            }
            if let Some(shock) = overrides.shock {
                params.shock = shock;
            }
            if let Some(aggression) = overrides.aggression {
                params.aggression = aggression;
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = ScenarioParams::default();
        assert_eq!(params.rounds, 6);
        assert_eq!(params.discount, 0.92);
        assert_eq!(params.shock, 0.12);
        assert_eq!(params.aggression, 0.35);
    }

    #[test]
    fn test_partial_merge() {
        let overrides = ScenarioOverrides {
            shock: Some(0.4),
            ..Default::default()
        };
        let params = ScenarioParams::merged(Some(&overrides));
        assert_eq!(params.shock, 0.4);
        assert_eq!(params.rounds, 6);
        assert_eq!(params.discount, 0.92);
    }

    #[test]
    fn test_overrides_from_partial_json() {
        let overrides: ScenarioOverrides = serde_json::from_str(r#"{"rounds": 10}"#).unwrap();
        let params = ScenarioParams::merged(Some(&overrides));
        assert_eq!(params.rounds, 10);
        assert_eq!(params.aggression, 0.35);
    }
}
