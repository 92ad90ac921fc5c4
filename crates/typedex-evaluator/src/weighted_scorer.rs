//! Linear scoring with a learned [`WeightTable`].
//!
//! Each class scores a record as
//!
//! ```text
//! score(class) = Σ (value(feature) - 5) × weight(class, feature)
//! ```
//!
//! where `HasWings` is stretched from `{0, 1}` to `{0, 10}` first, so that every feature
//! is centered on the same neutral value. The prediction is the argmax of these raw
//! scores. [`confidence`] turns raw scores into display percentages with a softmax
//! (temperature 12); it never changes which class wins.

use std::cmp::Reverse;

use typedex_engine::{ClassMap, CreatureClass, CreatureRecord, Feature, WeightTable};

use crate::prediction::ClassPredictor;

/// Feature value that contributes nothing to any class score.
pub const NEUTRAL_VALUE: i32 = 5;

/// Divisor applied to raw scores before the softmax.
pub const CONFIDENCE_TEMPERATURE: f64 = 12.0;

/// Feature value on the common 0-10 scale.
#[must_use]
pub fn effective_value(record: &CreatureRecord, feature: Feature) -> i32 {
    let raw = i32::from(record.value(feature));
    if feature.is_binary() { raw * 10 } else { raw }
}

/// Softmax of `scores` divided by [`CONFIDENCE_TEMPERATURE`].
///
/// The returned values are in `(0, 1]` and sum to 1.
///
/// # Example
///
/// ```
/// use typedex_engine::{ClassMap, CreatureClass};
/// use typedex_evaluator::weighted_scorer::confidence;
///
/// let scores = ClassMap::from_fn(|_| 10);
/// let confidence = confidence(&scores);
/// assert!((confidence[CreatureClass::Fire] - 0.25).abs() < 1e-12);
/// ```
#[must_use]
pub fn confidence(scores: &ClassMap<i32>) -> ClassMap<f64> {
    let max = scores.values().copied().max().unwrap_or(0);
    let exp = scores.map(|_, score| (f64::from(score - max) / CONFIDENCE_TEMPERATURE).exp());
    let sum: f64 = exp.values().sum();
    exp.map(|_, value| value / sum)
}

/// One row of a weighted prediction, as shown on the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaderboardEntry {
    pub class: CreatureClass,
    pub score: i32,
    pub confidence: f64,
}

/// Scores records against a trained weight table.
#[derive(Debug, Clone)]
pub struct WeightedScorer {
    weights: WeightTable,
}

impl WeightedScorer {
    #[must_use]
    pub fn new(weights: WeightTable) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Raw score of a single class.
    #[must_use]
    pub fn class_score(&self, class: CreatureClass, record: &CreatureRecord) -> i32 {
        Feature::ALL
            .iter()
            .map(|&feature| {
                let weight = i32::from(self.weights.get(class, feature));
                (effective_value(record, feature) - NEUTRAL_VALUE) * weight
            })
            .sum()
    }

    /// All classes ordered by raw score, highest first.
    ///
    /// Classes with equal scores keep their canonical order.
    #[must_use]
    pub fn leaderboard(&self, record: &CreatureRecord) -> Vec<LeaderboardEntry> {
        let scores = self.scores(record);
        let confidence = confidence(&scores);
        let mut entries: Vec<_> = CreatureClass::ALL
            .iter()
            .map(|&class| LeaderboardEntry {
                class,
                score: scores[class],
                confidence: confidence[class],
            })
            .collect();
        entries.sort_by_key(|entry| Reverse(entry.score));
        entries
    }
}

impl ClassPredictor for WeightedScorer {
    type Score = i32;

    fn scores(&self, record: &CreatureRecord) -> ClassMap<i32> {
        ClassMap::from_fn(|class| self.class_score(class, record))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;
    use typedex_engine::FeatureMap;

    use super::*;

    use crate::tie_break::first_max_in_random_order;

    fn record(values: [u8; Feature::LEN]) -> CreatureRecord {
        let values = FeatureMap::from_fn(|feature| values[feature.index()]);
        CreatureRecord::new("Charmander", CreatureClass::Fire, values)
    }

    fn table() -> WeightTable {
        WeightTable::from_fn(|class, feature| match (class, feature) {
            (CreatureClass::Fire, Feature::Attack | Feature::HabitatTemperature) => 2,
            (CreatureClass::Fire, Feature::HasWings) => -3,
            (CreatureClass::Water, Feature::HabitatAltitude) => -2,
            (CreatureClass::Dragon, Feature::HasWings) => 3,
            (CreatureClass::Dragon, Feature::Attack) => 1,
            _ => 0,
        })
    }

    #[test]
    fn test_wings_are_stretched_to_ten() {
        let winged = record([1, 5, 5, 5, 5, 5]);
        let grounded = record([0, 5, 5, 5, 5, 5]);
        assert_eq!(effective_value(&winged, Feature::HasWings), 10);
        assert_eq!(effective_value(&grounded, Feature::HasWings), 0);
        assert_eq!(effective_value(&winged, Feature::Speed), 5);
    }

    #[test]
    fn test_class_scores() {
        let scorer = WeightedScorer::new(table());
        // HasWings, Speed, Attack, Defense, HabitatAltitude, HabitatTemperature
        let rec = record([0, 6, 9, 4, 2, 8]);
        let scores = scorer.scores(&rec);
        assert_eq!(scores[CreatureClass::Fire], (0 - 5) * -3 + (9 - 5) * 2 + (8 - 5) * 2);
        assert_eq!(scores[CreatureClass::Water], (2 - 5) * -2);
        assert_eq!(scores[CreatureClass::Grass], 0);
        assert_eq!(scores[CreatureClass::Dragon], (0 - 5) * 3 + (9 - 5));

        let mut rng = Pcg32::seed_from_u64(5);
        let prediction = scorer.predict(&rec, &mut rng);
        assert_eq!(prediction.class, CreatureClass::Fire);
        assert_eq!(prediction.score, 29);
    }

    #[test]
    fn test_confidence_sums_to_one_and_keeps_argmax() {
        let scorer = WeightedScorer::new(table());
        let mut rng = Pcg32::seed_from_u64(9);
        for values in [
            [0, 6, 9, 4, 2, 8],
            [1, 2, 10, 7, 9, 3],
            [1, 10, 0, 0, 0, 10],
            [0, 0, 0, 10, 10, 0],
        ] {
            let rec = record(values);
            let scores = scorer.scores(&rec);
            let confidence = confidence(&scores);
            let total: f64 = confidence.values().sum();
            assert!((total - 1.0).abs() < 1e-9);

            let max_score = *scores.values().max().unwrap();
            let (class, _) = first_max_in_random_order(&confidence, &mut rng);
            assert_eq!(scores[class], max_score);
        }
    }

    #[test]
    fn test_confidence_temperature() {
        let scores = ClassMap::from_fn(|class| match class {
            CreatureClass::Fire => 12,
            _ => 0,
        });
        let confidence = confidence(&scores);
        let e = 1.0_f64.exp();
        assert!((confidence[CreatureClass::Fire] - e / (e + 3.0)).abs() < 1e-12);
        assert!((confidence[CreatureClass::Grass] - 1.0 / (e + 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_leaderboard_is_sorted_by_score() {
        let scorer = WeightedScorer::new(table());
        let board = scorer.leaderboard(&record([0, 6, 9, 4, 2, 8]));
        let classes: Vec<_> = board.iter().map(|entry| entry.class).collect();
        assert_eq!(
            classes,
            [
                CreatureClass::Fire,
                CreatureClass::Water,
                CreatureClass::Grass,
                CreatureClass::Dragon
            ]
        );
        assert!(board.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn test_zero_table_scores_zero() {
        let scorer = WeightedScorer::new(WeightTable::zero());
        let scores = scorer.scores(&record([1, 10, 10, 10, 10, 10]));
        assert!(scores.values().all(|score| *score == 0));
    }
}
