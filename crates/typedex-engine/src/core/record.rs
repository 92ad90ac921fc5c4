use serde::{Deserialize, Serialize};

use super::{CreatureClass, Feature, FeatureMap};

/// A creature with its six feature values and ground-truth class.
///
/// This is the exact shape of the entries in the test set and training pool files:
///
/// ```json
/// {"name": "Charmander-C", "CorrectType": "fire", "HasWings": 0, "Speed": 7,
///  "Attack": 8, "Defense": 4, "HabitatAltitude": 3, "HabitatTemperature": 9}
/// ```
///
/// Records are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatureRecord {
    #[serde(rename = "name")]
    name: String,
    #[serde(rename = "CorrectType")]
    class: CreatureClass,
    has_wings: u8,
    speed: u8,
    attack: u8,
    defense: u8,
    habitat_altitude: u8,
    habitat_temperature: u8,
}

/// Whether a pool record is the clean or the corrupted copy of a creature.
///
/// Encoded in the record name as a `-C` or `-N` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum SampleVariant {
    Clean,
    Noisy,
}

impl SampleVariant {
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Clean => "-C",
            Self::Noisy => "-N",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("record '{name}' has {feature}={value}, expected 0..={max}")]
pub struct RecordValueError {
    pub name: String,
    pub feature: Feature,
    pub value: u8,
    pub max: u8,
}

impl CreatureRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, class: CreatureClass, values: FeatureMap<u8>) -> Self {
        Self {
            name: name.into(),
            class,
            has_wings: values[Feature::HasWings],
            speed: values[Feature::Speed],
            attack: values[Feature::Attack],
            defense: values[Feature::Defense],
            habitat_altitude: values[Feature::HabitatAltitude],
            habitat_temperature: values[Feature::HabitatTemperature],
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn class(&self) -> CreatureClass {
        self.class
    }

    /// Raw value of `feature` as stored in the data file.
    #[must_use]
    pub fn value(&self, feature: Feature) -> u8 {
        match feature {
            Feature::HasWings => self.has_wings,
            Feature::Speed => self.speed,
            Feature::Attack => self.attack,
            Feature::Defense => self.defense,
            Feature::HabitatAltitude => self.habitat_altitude,
            Feature::HabitatTemperature => self.habitat_temperature,
        }
    }

    #[must_use]
    pub fn values(&self) -> FeatureMap<u8> {
        FeatureMap::from_fn(|feature| self.value(feature))
    }

    /// Value of `feature` reduced to 0/1 for rule matching.
    ///
    /// `HasWings` is already binary. Every other feature is 1 when strictly greater
    /// than 5, and 0 otherwise.
    ///
    /// ```
    /// use typedex_engine::{CreatureClass, CreatureRecord, Feature, FeatureMap};
    ///
    /// let record = CreatureRecord::new("Sample", CreatureClass::Fire, FeatureMap::from_fn(|_| 5));
    /// assert_eq!(record.binary_value(Feature::Attack), 0);
    /// ```
    #[must_use]
    pub fn binary_value(&self, feature: Feature) -> u8 {
        let raw = self.value(feature);
        if feature.is_binary() {
            raw
        } else {
            u8::from(raw > 5)
        }
    }

    /// Checks that every feature value lies in its allowed range.
    pub fn validate(&self) -> Result<(), RecordValueError> {
        for feature in Feature::ALL {
            let value = self.value(feature);
            let max = feature.max_value();
            if value > max {
                return Err(RecordValueError {
                    name: self.name.clone(),
                    feature,
                    value,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Position and variant of the first `-C`/`-N` marker in the name.
    fn variant_marker(&self) -> Option<(usize, SampleVariant)> {
        self.name.match_indices('-').find_map(|(pos, _)| {
            match self.name.as_bytes().get(pos + 1) {
                Some(b'C') => Some((pos, SampleVariant::Clean)),
                Some(b'N') => Some((pos, SampleVariant::Noisy)),
                _ => None,
            }
        })
    }

    /// Name without the clean/noisy marker and anything after it.
    ///
    /// ```
    /// use typedex_engine::{CreatureClass, CreatureRecord, FeatureMap};
    ///
    /// let record = CreatureRecord::new("Vulpix-N2", CreatureClass::Fire, FeatureMap::default());
    /// assert_eq!(record.base_name(), "Vulpix");
    /// ```
    #[must_use]
    pub fn base_name(&self) -> &str {
        match self.variant_marker() {
            Some((pos, _)) => &self.name[..pos],
            None => &self.name,
        }
    }

    #[must_use]
    pub fn sample_variant(&self) -> Option<SampleVariant> {
        self.variant_marker().map(|(_, variant)| variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"{
        "name": "Charmander-C",
        "CorrectType": "fire",
        "HasWings": 0,
        "Speed": 7,
        "Attack": 8,
        "Defense": 4,
        "HabitatAltitude": 3,
        "HabitatTemperature": 9
    }"#;

    #[test]
    fn test_parse_data_file_entry() {
        let record: CreatureRecord = serde_json::from_str(SAMPLE_JSON).unwrap();
        assert_eq!(record.name(), "Charmander-C");
        assert_eq!(record.class(), CreatureClass::Fire);
        assert_eq!(record.value(Feature::HasWings), 0);
        assert_eq!(record.value(Feature::Speed), 7);
        assert_eq!(record.value(Feature::Attack), 8);
        assert_eq!(record.value(Feature::Defense), 4);
        assert_eq!(record.value(Feature::HabitatAltitude), 3);
        assert_eq!(record.value(Feature::HabitatTemperature), 9);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"name": "X", "CorrectType": "fire", "HasWings": 0}"#;
        assert!(serde_json::from_str::<CreatureRecord>(json).is_err());
    }

    #[test]
    fn test_binarization_threshold_is_strictly_greater_than_five() {
        let mut values = FeatureMap::from_fn(|_| 0);
        values[Feature::Speed] = 5;
        values[Feature::Attack] = 6;
        values[Feature::HasWings] = 1;
        let record = CreatureRecord::new("T", CreatureClass::Water, values);
        assert_eq!(record.binary_value(Feature::Speed), 0);
        assert_eq!(record.binary_value(Feature::Attack), 1);
        assert_eq!(record.binary_value(Feature::HasWings), 1);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut values = FeatureMap::from_fn(|_| 3);
        values[Feature::HasWings] = 2;
        let record = CreatureRecord::new("Broken", CreatureClass::Grass, values);
        let err = record.validate().unwrap_err();
        assert_eq!(err.feature, Feature::HasWings);
        assert_eq!(err.value, 2);

        let mut values = FeatureMap::from_fn(|_| 0);
        values[Feature::Defense] = 11;
        let record = CreatureRecord::new("Broken", CreatureClass::Grass, values);
        assert_eq!(record.validate().unwrap_err().feature, Feature::Defense);
    }

    #[test]
    fn test_sample_variant_from_name() {
        let named =
            |name: &str| CreatureRecord::new(name, CreatureClass::Dragon, FeatureMap::default());
        assert_eq!(named("Dratini-C").sample_variant(), Some(SampleVariant::Clean));
        assert_eq!(named("Dratini-N").sample_variant(), Some(SampleVariant::Noisy));
        assert_eq!(named("Dratini").sample_variant(), None);
        assert_eq!(named("Ho-Oh-C").base_name(), "Ho-Oh");
        assert_eq!(named("Dratini-C").base_name(), "Dratini");
        assert_eq!(named("Dratini").base_name(), "Dratini");
    }
}
