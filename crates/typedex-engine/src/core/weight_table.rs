use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ClassMap, CreatureClass, Feature, FeatureMap};

/// Integer coefficient of a feature for a class.
///
/// Values stored in a [`WeightTable`] always lie in `-3..=3`.
pub type Weight = i8;

#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum WeightTableError {
    #[display("weight {weight} for {class}/{feature} is outside -3..=3")]
    OutOfRange {
        class: CreatureClass,
        feature: Feature,
        weight: Weight,
    },
    #[display("missing weight for {class}/{feature}")]
    Missing {
        class: CreatureClass,
        feature: Feature,
    },
}

/// Learned per-class, per-feature weights.
///
/// Serialized as a nested map keyed by class then feature:
///
/// ```json
/// {"fire": {"HasWings": -3, "Speed": 1, ...}, "water": {...}, ...}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<CreatureClass, BTreeMap<Feature, Weight>>",
    try_from = "BTreeMap<CreatureClass, BTreeMap<Feature, Weight>>"
)]
pub struct WeightTable {
    weights: ClassMap<FeatureMap<Weight>>,
}

impl WeightTable {
    pub const MIN: Weight = -3;
    pub const MAX: Weight = 3;

    /// Table with every weight set to zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a table from a weight function, clamping each weight into range.
    #[must_use]
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(CreatureClass, Feature) -> Weight,
    {
        let weights = ClassMap::from_fn(|class| {
            FeatureMap::from_fn(|feature| f(class, feature).clamp(Self::MIN, Self::MAX))
        });
        Self { weights }
    }

    #[must_use]
    pub fn get(&self, class: CreatureClass, feature: Feature) -> Weight {
        self.weights[class][feature]
    }

    #[must_use]
    pub fn class_weights(&self, class: CreatureClass) -> &FeatureMap<Weight> {
        &self.weights[class]
    }
}

impl From<WeightTable> for BTreeMap<CreatureClass, BTreeMap<Feature, Weight>> {
    fn from(table: WeightTable) -> Self {
        table
            .weights
            .iter()
            .map(|(class, row)| (class, row.iter().map(|(f, w)| (f, *w)).collect()))
            .collect()
    }
}

impl TryFrom<BTreeMap<CreatureClass, BTreeMap<Feature, Weight>>> for WeightTable {
    type Error = WeightTableError;

    fn try_from(
        map: BTreeMap<CreatureClass, BTreeMap<Feature, Weight>>,
    ) -> Result<Self, Self::Error> {
        let mut table = Self::zero();
        for class in CreatureClass::ALL {
            for feature in Feature::ALL {
                let weight = *map
                    .get(&class)
                    .and_then(|row| row.get(&feature))
                    .ok_or(WeightTableError::Missing { class, feature })?;
                if !(Self::MIN..=Self::MAX).contains(&weight) {
                    return Err(WeightTableError::OutOfRange {
                        class,
                        feature,
                        weight,
                    });
                }
                table.weights[class][feature] = weight;
            }
        }
        Ok(table)
    }
}
