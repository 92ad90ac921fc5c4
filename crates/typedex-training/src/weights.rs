//! Mapping class-conditional feature averages onto integer weights.

use typedex_engine::{Feature, Weight, WeightTable};

/// Average at which a linear feature gets weight 0.
pub const NEUTRAL_AVERAGE: f64 = 5.0;

/// Average distance from neutral that is worth one weight step.
pub const LINEAR_SCALE: f64 = 1.66;

/// `HasWings` averages above this saturate to the maximum weight.
pub const WINGS_THRESHOLD: f64 = 0.5;

/// Rounds half-way values up, so `-0.5` becomes `0` and `0.5` becomes `1`.
#[must_use]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Weight of a 0-10 feature from its class average.
///
/// # Examples
///
/// ```
/// use typedex_training::weights::linear_weight;
///
/// assert_eq!(linear_weight(7.0), 1);
/// assert_eq!(linear_weight(5.0), 0);
/// assert_eq!(linear_weight(0.0), -3);
/// assert_eq!(linear_weight(10.0), 3);
/// ```
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub fn linear_weight(average: f64) -> Weight {
    round_half_up((average - NEUTRAL_AVERAGE) / LINEAR_SCALE)
        .clamp(f64::from(WeightTable::MIN), f64::from(WeightTable::MAX)) as Weight
}

/// Weight of `HasWings` from its class average: always either the minimum or the maximum.
#[must_use]
pub fn wings_weight(average: f64) -> Weight {
    if average > WINGS_THRESHOLD {
        WeightTable::MAX
    } else {
        WeightTable::MIN
    }
}

#[must_use]
pub fn feature_weight(feature: Feature, average: f64) -> Weight {
    if feature.is_binary() {
        wings_weight(average)
    } else {
        linear_weight(average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert!((round_half_up(1.2) - 1.0).abs() < f64::EPSILON);
        assert!((round_half_up(1.5) - 2.0).abs() < f64::EPSILON);
        assert!((round_half_up(-0.5) - 0.0).abs() < f64::EPSILON);
        assert!((round_half_up(-1.5) + 1.0).abs() < f64::EPSILON);
        assert!((round_half_up(-1.6) + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_linear_weight_steps() {
        assert_eq!(linear_weight(7.0), 1);
        assert_eq!(linear_weight(3.0), -1);
        assert_eq!(linear_weight(8.5), 2);
        assert_eq!(linear_weight(1.0), -2);
        assert_eq!(linear_weight(5.8), 0);
    }

    #[test]
    fn test_linear_weight_is_clamped() {
        for step in 0..=100 {
            let average = f64::from(step) / 10.0;
            let weight = linear_weight(average);
            assert!((WeightTable::MIN..=WeightTable::MAX).contains(&weight));
        }
        assert_eq!(linear_weight(10.0), 3);
        assert_eq!(linear_weight(0.0), -3);
    }

    #[test]
    fn test_wings_weight_saturates() {
        assert_eq!(wings_weight(0.51), 3);
        assert_eq!(wings_weight(0.5), -3);
        assert_eq!(wings_weight(0.49), -3);
        assert_eq!(wings_weight(1.0), 3);
        assert_eq!(wings_weight(0.0), -3);
        assert_eq!(feature_weight(Feature::HasWings, 0.6), 3);
        assert_eq!(feature_weight(Feature::Speed, 0.6), -3);
    }
}
