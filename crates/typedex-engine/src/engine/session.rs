use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    BundleCatalog, BundleId, ClassMap, CreatureClass, Rule, RuleList, RuleListError, WeightTable,
};

use super::{SelectionChange, SelectionError, TrainingSelection};

/// Seed for the random tie-break order of a session.
///
/// A 128-bit seed, written as a 32-character hex string. Two sessions created with
/// the same seed break ties identically.
///
/// # Example
///
/// ```
/// use typedex_engine::SessionSeed;
///
/// let seed: SessionSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// assert_eq!(seed.to_string(), "000102030405060708090a0b0c0d0e0f");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSeed([u8; 16]);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed '{input}': expected 32 hex characters")]
pub struct SessionSeedParseError {
    pub input: String,
}

impl fmt::Display for SessionSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = u128::from_be_bytes(self.0);
        write!(f, "{num:032x}")
    }
}

impl FromStr for SessionSeed {
    type Err = SessionSeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SessionSeedParseError {
            input: s.to_owned(),
        };
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| err())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for SessionSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SessionSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

impl Distribution<SessionSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SessionSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        SessionSeed(seed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no weights trained yet")]
pub struct NotTrainedError;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("select at least one bundle before training")]
pub struct EmptySelectionError;

/// Player state of one game session.
///
/// Holds everything the player changes while playing: the single-class rule list,
/// one rule list per class, the bundle selection, the latest trained weights and the
/// random source used to break scoring ties. Resetting replaces the relevant part
/// with a fresh default value.
///
/// # Example
///
/// ```
/// use typedex_engine::{CreatureClass, Feature, FeatureState, Rule, Session};
///
/// let mut session = Session::new();
/// let rule = Rule::new(Feature::HabitatAltitude, FeatureState::Low);
/// session.place_class_rule(CreatureClass::Water, 0, rule).unwrap();
/// assert_eq!(session.class_rules()[CreatureClass::Water].len(), 1);
///
/// session.reset();
/// assert!(session.class_rules()[CreatureClass::Water].is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    seed: SessionSeed,
    rng: Pcg32,
    single_rules: RuleList,
    class_rules: ClassMap<RuleList>,
    selection: TrainingSelection,
    weights: Option<WeightTable>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for reproducible tie-breaks.
    #[must_use]
    pub fn with_seed(seed: SessionSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::from_seed(seed.0),
            single_rules: RuleList::new(),
            class_rules: ClassMap::default(),
            selection: TrainingSelection::new(),
            weights: None,
        }
    }

    #[must_use]
    pub fn seed(&self) -> SessionSeed {
        self.seed
    }

    /// Random source for tie-breaks and random record picks.
    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    #[must_use]
    pub fn single_rules(&self) -> &RuleList {
        &self.single_rules
    }

    pub fn place_single_rule(&mut self, slot: usize, rule: Rule) -> Result<(), RuleListError> {
        self.single_rules.place(slot, rule)
    }

    pub fn reset_single_rules(&mut self) {
        self.single_rules = RuleList::new();
    }

    #[must_use]
    pub fn class_rules(&self) -> &ClassMap<RuleList> {
        &self.class_rules
    }

    pub fn place_class_rule(
        &mut self,
        class: CreatureClass,
        slot: usize,
        rule: Rule,
    ) -> Result<(), RuleListError> {
        self.class_rules[class].place(slot, rule)
    }

    pub fn reset_class_rules(&mut self, class: CreatureClass) {
        self.class_rules[class] = RuleList::new();
    }

    pub fn reset_all_class_rules(&mut self) {
        self.class_rules = ClassMap::default();
    }

    #[must_use]
    pub fn selection(&self) -> &TrainingSelection {
        &self.selection
    }

    pub fn toggle_bundle(
        &mut self,
        catalog: &BundleCatalog,
        id: BundleId,
    ) -> Result<SelectionChange, SelectionError> {
        self.selection.toggle(catalog, id)
    }

    /// Recomputes the weights from the current selection.
    ///
    /// `train` receives the non-empty selection and returns the new table, which
    /// replaces any previously trained one.
    pub fn train_with<F, E>(&mut self, train: F) -> Result<&WeightTable, E>
    where
        F: FnOnce(&TrainingSelection) -> Result<WeightTable, E>,
        E: From<EmptySelectionError>,
    {
        if self.selection.is_empty() {
            return Err(EmptySelectionError.into());
        }
        let table = train(&self.selection)?;
        Ok(&*self.weights.insert(table))
    }

    pub fn weights(&self) -> Result<&WeightTable, NotTrainedError> {
        self.weights.as_ref().ok_or(NotTrainedError)
    }

    /// Clears the bundle selection and the trained weights.
    pub fn reset_training(&mut self) {
        self.selection = TrainingSelection::new();
        self.weights = None;
    }

    /// Replaces the whole session with a fresh one.
    ///
    /// The new seed is drawn from the current random source, so a seeded session
    /// stays reproducible across resets.
    pub fn reset(&mut self) {
        *self = Self::with_seed(self.rng.random());
    }
}
