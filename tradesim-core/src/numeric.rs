//! Shared numeric guards for the scoring pipeline.
//!
//! Every composite index in the simulation is clamped to a documented range,
//! and every sigmoid input is bounded before exponentiation. Keeping these
//! two primitives in one place makes the invariants auditable.

/// Clamp `value` into `[low, high]`.
pub fn clamp(value: f64, low: f64, high: f64) -> f64 {
    value.max(low).min(high)
}

/// Numerically stable logistic sigmoid.
///
/// The input is clamped to [-500, 500] before exponentiation, and the
/// two-branch form keeps `exp` arguments non-positive so it can never
/// overflow.
pub fn sigmoid(x: f64) -> f64 {
    let x = clamp(x, -500.0, 500.0);
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let exp_x = x.exp();
        exp_x / (1.0 + exp_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_midpoint() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_sigmoid_extremes_stay_finite() {
        assert!(sigmoid(1e9).is_finite());
        assert!(sigmoid(-1e9).is_finite());
        assert!(sigmoid(1e9) > 0.999);
        assert!(sigmoid(-1e9) < 0.001);
    }

    #[test]
    fn test_sigmoid_symmetry() {
        for x in [0.1, 1.0, 3.7, 42.0] {
            assert!((sigmoid(x) + sigmoid(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-2.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
    }
}
