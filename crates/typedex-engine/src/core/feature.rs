use std::{
    iter,
    ops::{Index, IndexMut},
};

use serde::{Deserialize, Serialize};

/// One of the six attributes of a creature record used as classification input.
///
/// The variant names are the identifiers used in the data files (`"HasWings"`,
/// `"HabitatAltitude"`, ...). [`Feature::ALL`] lists them in the order the game
/// presents the feature cards.
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
pub enum Feature {
    HasWings = 0,
    Speed = 1,
    Attack = 2,
    Defense = 3,
    HabitatAltitude = 4,
    HabitatTemperature = 5,
}

impl Feature {
    /// Number of features (6).
    pub const LEN: usize = 6;

    pub const ALL: [Self; Self::LEN] = [
        Self::HasWings,
        Self::Speed,
        Self::Attack,
        Self::Defense,
        Self::HabitatAltitude,
        Self::HabitatTemperature,
    ];

    /// Largest raw value a record may carry for this feature.
    #[must_use]
    pub const fn max_value(self) -> u8 {
        match self {
            Self::HasWings => 1,
            _ => 10,
        }
    }

    /// Returns `true` for features whose raw value is already 0/1.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::HasWings)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short display label of the feature card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HasWings => "Wings",
            Self::Speed => "Speed",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::HabitatAltitude => "Altitude",
            Self::HabitatTemperature => "Temp",
        }
    }

    /// Card text for the given side of the feature card.
    ///
    /// ```
    /// use typedex_engine::{Feature, FeatureState};
    ///
    /// assert_eq!(Feature::HasWings.phrase(FeatureState::Low), "No Wings");
    /// assert_eq!(Feature::Attack.phrase(FeatureState::High), "High Attack");
    /// ```
    #[must_use]
    pub const fn phrase(self, state: FeatureState) -> &'static str {
        match (self, state) {
            (Self::HasWings, FeatureState::High) => "Has Wings",
            (Self::HasWings, FeatureState::Low) => "No Wings",
            (Self::Speed, FeatureState::High) => "High Speed",
            (Self::Speed, FeatureState::Low) => "Low Speed",
            (Self::Attack, FeatureState::High) => "High Attack",
            (Self::Attack, FeatureState::Low) => "Low Attack",
            (Self::Defense, FeatureState::High) => "High Defense",
            (Self::Defense, FeatureState::Low) => "Low Defense",
            (Self::HabitatAltitude, FeatureState::High) => "High Altitude",
            (Self::HabitatAltitude, FeatureState::Low) => "Low Altitude",
            (Self::HabitatTemperature, FeatureState::High) => "High Temp",
            (Self::HabitatTemperature, FeatureState::Low) => "Low Temp",
        }
    }
}

/// Required state of a feature in a rule.
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
    derive_more::FromStr,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum FeatureState {
    #[display("high")]
    High,
    #[display("low")]
    Low,
}

impl FeatureState {
    /// Binary value a record feature must have to satisfy this state.
    #[must_use]
    pub const fn required_bit(self) -> u8 {
        match self {
            Self::High => 1,
            Self::Low => 0,
        }
    }

    /// Returns the opposite state (turning the feature card over).
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
        }
    }
}

/// Fixed-size map holding one value per [`Feature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureMap<T>([T; Feature::LEN]);

impl<T> FeatureMap<T> {
    #[must_use]
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Feature) -> T,
    {
        Self(Feature::ALL.map(&mut f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, &T)> + '_ {
        iter::zip(Feature::ALL, &self.0)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter()
    }

    #[must_use]
    pub fn map<U, F>(&self, mut f: F) -> FeatureMap<U>
    where
        F: FnMut(Feature, &T) -> U,
    {
        FeatureMap::from_fn(|feature| f(feature, &self[feature]))
    }
}

impl<T> Index<Feature> for FeatureMap<T> {
    type Output = T;

    fn index(&self, feature: Feature) -> &T {
        &self.0[feature.index()]
    }
}

impl<T> IndexMut<Feature> for FeatureMap<T> {
    fn index_mut(&mut self, feature: Feature) -> &mut T {
        &mut self.0[feature.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_ids_match_data_file_keys() {
        let ids: Vec<_> = Feature::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            ids,
            [
                "HasWings",
                "Speed",
                "Attack",
                "Defense",
                "HabitatAltitude",
                "HabitatTemperature"
            ]
        );
        for feature in Feature::ALL {
            let json = serde_json::to_string(&feature).unwrap();
            assert_eq!(json, format!("\"{feature}\""));
        }
    }

    #[test]
    fn test_only_wings_is_binary() {
        for feature in Feature::ALL {
            assert_eq!(feature.is_binary(), feature == Feature::HasWings);
            assert_eq!(feature.max_value() == 1, feature.is_binary());
        }
    }

    #[test]
    fn test_flip_state() {
        assert_eq!(FeatureState::High.flipped(), FeatureState::Low);
        assert_eq!(FeatureState::Low.flipped().flipped(), FeatureState::Low);
        assert_eq!("high".parse::<FeatureState>().unwrap(), FeatureState::High);
        assert_eq!("low".parse::<FeatureState>().unwrap(), FeatureState::Low);
    }
}
