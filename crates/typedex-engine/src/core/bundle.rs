use serde::{Deserialize, Serialize};

use super::{CreatureClass, CreatureRecord};

/// Identifier of a data bundle in the catalog (`1` to `9`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct BundleId(pub u8);

/// Whether a bundle holds clean or corrupted samples.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    #[display("pure")]
    Pure,
    #[display("noisy")]
    Noisy,
}

/// What a bundle contains: samples of one class, or a mix of all classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum BundleTag {
    #[display("{_0}")]
    Class(CreatureClass),
    #[display("mixed")]
    Mixed,
}

/// A named, fixed slice of the training pool offered for selection.
#[derive(Debug, Clone)]
pub struct DataBundle {
    id: BundleId,
    name: String,
    tag: BundleTag,
    quality: Quality,
    records: Vec<CreatureRecord>,
}

impl DataBundle {
    #[must_use]
    pub fn id(&self) -> BundleId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tag(&self) -> BundleTag {
        self.tag
    }

    #[must_use]
    pub fn quality(&self) -> Quality {
        self.quality
    }

    #[must_use]
    pub fn records(&self) -> &[CreatureRecord] {
        &self.records
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("training pool has {actual} records, at least {required} are required")]
pub struct PoolTooSmallError {
    pub actual: usize,
    pub required: usize,
}

/// The nine bundles built from the training pool.
///
/// The pool is laid out as consecutive 20-record slices, clean then noisy for each
/// class in canonical order:
///
/// | Records   | Bundle          |
/// |-----------|-----------------|
/// | 0..20     | 1: clear fire   |
/// | 20..40    | 5: noisy fire   |
/// | 40..60    | 2: clear water  |
/// | 60..80    | 6: noisy water  |
/// | 80..100   | 3: clear grass  |
/// | 100..120  | 7: noisy grass  |
/// | 120..140  | 4: clear dragon |
/// | 140..160  | 8: noisy dragon |
///
/// Bundle 9 mixes the first 5 records of each clear slice.
#[derive(Debug, Clone)]
pub struct BundleCatalog {
    bundles: Vec<DataBundle>,
}

impl BundleCatalog {
    /// Records per class/quality slice of the pool.
    pub const SLICE_LEN: usize = 20;
    /// Records taken from each clear slice for the mixed bundle.
    pub const MIX_PER_CLASS: usize = 5;
    /// Minimum pool size needed to build every bundle.
    pub const REQUIRED_POOL_LEN: usize = Self::SLICE_LEN * 2 * CreatureClass::LEN;

    pub fn from_pool(pool: &[CreatureRecord]) -> Result<Self, PoolTooSmallError> {
        if pool.len() < Self::REQUIRED_POOL_LEN {
            return Err(PoolTooSmallError {
                actual: pool.len(),
                required: Self::REQUIRED_POOL_LEN,
            });
        }

        let slice = |class: CreatureClass, quality: Quality| {
            let offset = match quality {
                Quality::Pure => 0,
                Quality::Noisy => 1,
            };
            let start = (class.index() * 2 + offset) * Self::SLICE_LEN;
            &pool[start..start + Self::SLICE_LEN]
        };

        let mut bundles = Vec::with_capacity(2 * CreatureClass::LEN + 1);
        let mut next_id = 1;
        for quality in [Quality::Pure, Quality::Noisy] {
            for class in CreatureClass::ALL {
                let prefix = match quality {
                    Quality::Pure => "Clear",
                    Quality::Noisy => "Noisy",
                };
                bundles.push(DataBundle {
                    id: BundleId(next_id),
                    name: format!("{prefix} {}", capitalize(class)),
                    tag: BundleTag::Class(class),
                    quality,
                    records: slice(class, quality).to_vec(),
                });
                next_id += 1;
            }
        }

        let mixed = CreatureClass::ALL
            .iter()
            .flat_map(|class| &slice(*class, Quality::Pure)[..Self::MIX_PER_CLASS])
            .cloned()
            .collect();
        bundles.push(DataBundle {
            id: BundleId(next_id),
            name: "Big Clear Mix".to_owned(),
            tag: BundleTag::Mixed,
            quality: Quality::Pure,
            records: mixed,
        });

        Ok(Self { bundles })
    }

    #[must_use]
    pub fn get(&self, id: BundleId) -> Option<&DataBundle> {
        self.bundles.iter().find(|b| b.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataBundle> + '_ {
        self.bundles.iter()
    }
}

fn capitalize(class: CreatureClass) -> String {
    let name = class.to_string();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use crate::{Feature, FeatureMap};

    use super::*;

    fn pool() -> Vec<CreatureRecord> {
        (0..BundleCatalog::REQUIRED_POOL_LEN)
            .map(|i| {
                let class = CreatureClass::ALL[i / (2 * BundleCatalog::SLICE_LEN)];
                let mut values = FeatureMap::from_fn(|_| 0);
                values[Feature::Speed] = u8::try_from(i % 11).unwrap();
                CreatureRecord::new(format!("P{i}"), class, values)
            })
            .collect()
    }

    #[test]
    fn test_rejects_short_pool() {
        let mut pool = pool();
        pool.pop();
        let err = BundleCatalog::from_pool(&pool).unwrap_err();
        assert_eq!(err.actual, 159);
        assert_eq!(err.required, 160);
    }

    #[test]
    fn test_bundle_layout() {
        let catalog = BundleCatalog::from_pool(&pool()).unwrap();
        assert_eq!(catalog.iter().count(), 9);

        let clear_water = catalog.get(BundleId(2)).unwrap();
        assert_eq!(clear_water.name(), "Clear Water");
        assert_eq!(clear_water.tag(), BundleTag::Class(CreatureClass::Water));
        assert_eq!(clear_water.quality(), Quality::Pure);
        assert_eq!(clear_water.records().len(), 20);
        assert_eq!(clear_water.records()[0].name(), "P40");
        assert!(clear_water.records().iter().all(|r| r.class() == CreatureClass::Water));

        let noisy_fire = catalog.get(BundleId(5)).unwrap();
        assert_eq!(noisy_fire.name(), "Noisy Fire");
        assert_eq!(noisy_fire.quality(), Quality::Noisy);
        assert_eq!(noisy_fire.records()[0].name(), "P20");

        let noisy_dragon = catalog.get(BundleId(8)).unwrap();
        assert_eq!(noisy_dragon.records()[19].name(), "P159");
    }

    #[test]
    fn test_mixed_bundle_takes_five_clear_records_per_class() {
        let catalog = BundleCatalog::from_pool(&pool()).unwrap();
        let mixed = catalog.get(BundleId(9)).unwrap();
        assert!(mixed.tag().is_mixed());
        assert_eq!(mixed.quality(), Quality::Pure);
        let names: Vec<_> = mixed.records().iter().map(CreatureRecord::name).collect();
        assert_eq!(names.len(), 20);
        assert_eq!(&names[..5], ["P0", "P1", "P2", "P3", "P4"]);
        assert_eq!(&names[5..10], ["P40", "P41", "P42", "P43", "P44"]);
        assert_eq!(&names[15..], ["P120", "P121", "P122", "P123", "P124"]);
    }

    #[test]
    fn test_unknown_bundle() {
        let catalog = BundleCatalog::from_pool(&pool()).unwrap();
        assert!(catalog.get(BundleId(0)).is_none());
        assert!(catalog.get(BundleId(10)).is_none());
    }
}
