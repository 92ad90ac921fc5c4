use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CreatureRecord, Feature, FeatureState};

/// A single `(feature, required state)` test.
///
/// # Example
///
/// ```
/// use typedex_engine::{CreatureClass, CreatureRecord, Feature, FeatureMap, FeatureState, Rule};
///
/// let rule: Rule = "HasWings=low".parse().unwrap();
/// assert_eq!(rule, Rule::new(Feature::HasWings, FeatureState::Low));
///
/// let grounded = CreatureRecord::new("Geodude", CreatureClass::Grass, FeatureMap::default());
/// assert!(rule.matches(&grounded));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{feature}={state}")]
pub struct Rule {
    pub feature: Feature,
    pub state: FeatureState,
}

impl Rule {
    #[must_use]
    pub const fn new(feature: Feature, state: FeatureState) -> Self {
        Self { feature, state }
    }

    /// Returns `true` if the record's binarized feature value equals the required bit.
    #[must_use]
    pub fn matches(&self, record: &CreatureRecord) -> bool {
        record.binary_value(self.feature) == self.state.required_bit()
    }

    /// Card text for this rule, e.g. `"Low Speed"`.
    #[must_use]
    pub const fn phrase(&self) -> &'static str {
        self.feature.phrase(self.state)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid rule '{input}': expected '<Feature>=<high|low>'")]
pub struct RuleParseError {
    pub input: String,
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || RuleParseError {
            input: s.to_owned(),
        };
        let (feature, state) = s.split_once('=').ok_or_else(err)?;
        let feature = feature.trim().parse::<Feature>().map_err(|_| err())?;
        let state = state.trim().parse::<FeatureState>().map_err(|_| err())?;
        Ok(Self { feature, state })
    }
}

#[cfg(test)]
mod tests {
    use crate::{CreatureClass, FeatureMap};

    use super::*;

    fn record_with(feature: Feature, value: u8) -> CreatureRecord {
        let mut values = FeatureMap::from_fn(|_| 0);
        values[feature] = value;
        CreatureRecord::new("Probe", CreatureClass::Fire, values)
    }

    #[test]
    fn test_wings_low_rule() {
        let rule = Rule::new(Feature::HasWings, FeatureState::Low);
        assert!(rule.matches(&record_with(Feature::HasWings, 0)));
        assert!(!rule.matches(&record_with(Feature::HasWings, 1)));
    }

    #[test]
    fn test_numeric_high_rule_uses_threshold() {
        let rule = Rule::new(Feature::Speed, FeatureState::High);
        assert!(!rule.matches(&record_with(Feature::Speed, 5)));
        assert!(rule.matches(&record_with(Feature::Speed, 6)));
        assert!(rule.matches(&record_with(Feature::Speed, 10)));

        let rule = Rule::new(Feature::Speed, FeatureState::Low);
        assert!(rule.matches(&record_with(Feature::Speed, 0)));
        assert!(rule.matches(&record_with(Feature::Speed, 5)));
        assert!(!rule.matches(&record_with(Feature::Speed, 6)));
    }

    #[test]
    fn test_parse_and_display() {
        let rule: Rule = "HabitatTemperature=high".parse().unwrap();
        assert_eq!(rule.feature, Feature::HabitatTemperature);
        assert_eq!(rule.state, FeatureState::High);
        assert_eq!(rule.to_string(), "HabitatTemperature=high");
        assert_eq!(rule.phrase(), "High Temp");

        assert!("Attack".parse::<Rule>().is_err());
        assert!("Magic=high".parse::<Rule>().is_err());
        assert!("Attack=medium".parse::<Rule>().is_err());
    }

    #[test]
    fn test_serde_shape() {
        let rule = Rule::new(Feature::Defense, FeatureState::Low);
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, r#"{"feature":"Defense","state":"low"}"#);
        assert_eq!(serde_json::from_str::<Rule>(&json).unwrap(), rule);
    }
}
