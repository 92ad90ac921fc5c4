//! Averaging trainer.

use typedex_engine::{
    BundleCatalog, ClassMap, CreatureClass, CreatureRecord, Feature, FeatureMap,
    TrainingSelection, WeightTable,
};

use crate::weights::feature_weight;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("training set is empty")]
pub struct EmptyTrainingSetError;

/// Per-class record counts and feature sums.
#[derive(Debug, Clone, Default)]
pub struct ClassFeatureSums {
    counts: ClassMap<usize>,
    sums: ClassMap<FeatureMap<u32>>,
}

impl ClassFeatureSums {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CreatureRecord>,
    {
        let mut sums = Self::new();
        for record in records {
            sums.add(record);
        }
        sums
    }

    pub fn add(&mut self, record: &CreatureRecord) {
        let class = record.class();
        self.counts[class] += 1;
        for feature in Feature::ALL {
            self.sums[class][feature] += u32::from(record.value(feature));
        }
    }

    #[must_use]
    pub fn counts(&self) -> &ClassMap<usize> {
        &self.counts
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.counts.values().sum()
    }

    /// Mean value of `feature` over records of `class`, or `None` without records.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn average(&self, class: CreatureClass, feature: Feature) -> Option<f64> {
        let count = self.counts[class];
        (count > 0).then(|| f64::from(self.sums[class][feature]) / count as f64)
    }

    /// Maps every average onto a weight; classes without records get zeros.
    #[must_use]
    pub fn weights(&self) -> WeightTable {
        WeightTable::from_fn(|class, feature| {
            self.average(class, feature)
                .map_or(0, |average| feature_weight(feature, average))
        })
    }
}

/// Result of a training run.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub weights: WeightTable,
    /// Training records seen for each class.
    pub class_counts: ClassMap<usize>,
    pub record_count: usize,
}

/// Learns a weight table from `records`.
pub fn train<'a, I>(records: I) -> Result<TrainingOutcome, EmptyTrainingSetError>
where
    I: IntoIterator<Item = &'a CreatureRecord>,
{
    let sums = ClassFeatureSums::from_records(records);
    if sums.record_count() == 0 {
        return Err(EmptyTrainingSetError);
    }
    Ok(TrainingOutcome {
        weights: sums.weights(),
        class_counts: *sums.counts(),
        record_count: sums.record_count(),
    })
}

/// Learns a weight table from the records of the selected bundles.
pub fn train_selection(
    catalog: &BundleCatalog,
    selection: &TrainingSelection,
) -> Result<TrainingOutcome, EmptyTrainingSetError> {
    train(selection.records(catalog))
}

#[cfg(test)]
mod tests {
    use typedex_engine::BundleId;

    use super::*;

    fn record(class: CreatureClass, f: impl FnOnce(&mut FeatureMap<u8>)) -> CreatureRecord {
        let mut values = FeatureMap::from_fn(|_| 5);
        values[Feature::HasWings] = 0;
        f(&mut values);
        CreatureRecord::new("Test", class, values)
    }

    #[test]
    fn test_empty_training_set_is_rejected() {
        let records: [CreatureRecord; 0] = [];
        assert_eq!(train(&records).unwrap_err(), EmptyTrainingSetError);
    }

    #[test]
    fn test_fire_attack_average_seven_gives_one() {
        let records = [
            record(CreatureClass::Fire, |v| v[Feature::Attack] = 8),
            record(CreatureClass::Fire, |v| v[Feature::Attack] = 6),
        ];
        let outcome = train(&records).unwrap();
        assert_eq!(outcome.weights.get(CreatureClass::Fire, Feature::Attack), 1);
        assert_eq!(outcome.weights.get(CreatureClass::Fire, Feature::Speed), 0);
        assert_eq!(outcome.class_counts[CreatureClass::Fire], 2);
        assert_eq!(outcome.record_count, 2);
    }

    #[test]
    fn test_class_without_records_gets_zero_weights() {
        let records = [
            record(CreatureClass::Fire, |v| v[Feature::Attack] = 10),
            record(CreatureClass::Water, |v| v[Feature::Defense] = 0),
        ];
        let outcome = train(&records).unwrap();
        for class in [CreatureClass::Grass, CreatureClass::Dragon] {
            assert_eq!(outcome.class_counts[class], 0);
            assert!(
                outcome
                    .weights
                    .class_weights(class)
                    .values()
                    .all(|weight| *weight == 0)
            );
        }
    }

    #[test]
    fn test_wings_weight_is_always_saturated() {
        // 2 of 4 winged (average 0.5) stays at the minimum; 3 of 5 goes to the maximum.
        let half: Vec<_> = (0..4)
            .map(|i| record(CreatureClass::Dragon, |v| v[Feature::HasWings] = u8::from(i < 2)))
            .collect();
        let most: Vec<_> = (0..5)
            .map(|i| record(CreatureClass::Dragon, |v| v[Feature::HasWings] = u8::from(i < 3)))
            .collect();
        let half = train(&half).unwrap().weights;
        let most = train(&most).unwrap().weights;
        assert_eq!(half.get(CreatureClass::Dragon, Feature::HasWings), -3);
        assert_eq!(most.get(CreatureClass::Dragon, Feature::HasWings), 3);

        // Wingless classes with records get the minimum, not zero.
        let fire = train(&[record(CreatureClass::Fire, |_| {})]).unwrap().weights;
        assert_eq!(fire.get(CreatureClass::Fire, Feature::HasWings), -3);
    }

    #[test]
    fn test_train_selection_uses_selected_bundles() {
        let pool: Vec<_> = (0..BundleCatalog::REQUIRED_POOL_LEN)
            .map(|i| {
                let class = CreatureClass::ALL[i / (2 * BundleCatalog::SLICE_LEN)];
                record(class, |v| v[Feature::Speed] = 9)
            })
            .collect();
        let catalog = BundleCatalog::from_pool(&pool).unwrap();

        let mut selection = TrainingSelection::new();
        assert_eq!(
            train_selection(&catalog, &selection).unwrap_err(),
            EmptyTrainingSetError
        );

        selection.toggle(&catalog, BundleId(2)).unwrap();
        selection.toggle(&catalog, BundleId(9)).unwrap();
        let outcome = train_selection(&catalog, &selection).unwrap();
        assert_eq!(outcome.record_count, 40);
        assert_eq!(outcome.class_counts[CreatureClass::Water], 25);
        assert_eq!(outcome.class_counts[CreatureClass::Fire], 5);
        assert_eq!(outcome.weights.get(CreatureClass::Water, Feature::Speed), 2);
    }
}
