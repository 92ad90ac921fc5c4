use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use super::{Feature, Rule};

const SLOT_COUNT: usize = 4;

/// Points a matching rule contributes in multi-class scoring, indexed by slot.
pub const SLOT_POINTS: [u32; SLOT_COUNT] = [3, 2, 2, 1];

/// Errors raised when a rule cannot be placed into a [`RuleList`].
///
/// A failed placement never modifies the list.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum RuleListError {
    #[display("slot {slot} does not exist (rule lists have {SLOT_COUNT} slots)")]
    SlotOutOfRange { slot: usize },
    #[display("slots must be filled in order: slot {first_empty} is still empty")]
    SlotOutOfOrder { slot: usize, first_empty: usize },
    #[display("feature {feature} is already used in slot {existing_slot}")]
    DuplicateFeature {
        feature: Feature,
        existing_slot: usize,
    },
}

/// Ordered list of up to four rules.
///
/// Slots fill left to right and a feature appears in at most one slot. Both
/// invariants are enforced by [`RuleList::place`], so every value of this type
/// satisfies them.
///
/// # Example
///
/// ```
/// use typedex_engine::{Feature, FeatureState, Rule, RuleList};
///
/// let mut rules = RuleList::new();
/// rules.place(0, Rule::new(Feature::Attack, FeatureState::High)).unwrap();
///
/// // Slot 2 cannot be filled before slot 1.
/// assert!(rules.place(2, Rule::new(Feature::Speed, FeatureState::Low)).is_err());
/// // Attack is already in use.
/// assert!(rules.place(1, Rule::new(Feature::Attack, FeatureState::Low)).is_err());
///
/// rules.place(1, Rule::new(Feature::Speed, FeatureState::Low)).unwrap();
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Rule>", try_from = "Vec<Rule>")]
pub struct RuleList {
    rules: ArrayVec<Rule, SLOT_COUNT>,
}

impl RuleList {
    /// Number of rule slots (4).
    pub const SLOT_COUNT: usize = SLOT_COUNT;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `rule` into `slot`, replacing the rule already there.
    ///
    /// `slot` may be any filled slot or the first empty one.
    pub fn place(&mut self, slot: usize, rule: Rule) -> Result<(), RuleListError> {
        if slot >= Self::SLOT_COUNT {
            return Err(RuleListError::SlotOutOfRange { slot });
        }
        if slot > self.rules.len() {
            return Err(RuleListError::SlotOutOfOrder {
                slot,
                first_empty: self.rules.len(),
            });
        }
        if let Some(existing_slot) = self
            .rules
            .iter()
            .enumerate()
            .position(|(i, r)| i != slot && r.feature == rule.feature)
        {
            return Err(RuleListError::DuplicateFeature {
                feature: rule.feature,
                existing_slot,
            });
        }

        if slot == self.rules.len() {
            self.rules.push(rule);
        } else {
            self.rules[slot] = rule;
        }
        Ok(())
    }

    /// Puts `rule` into the first empty slot.
    pub fn push(&mut self, rule: Rule) -> Result<(), RuleListError> {
        self.place(self.rules.len(), rule)
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of filled slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn slot(&self, slot: usize) -> Option<Rule> {
        self.rules.get(slot).copied()
    }

    /// Iterates over all four slots, yielding `None` for empty ones.
    pub fn slots(&self) -> impl Iterator<Item = Option<Rule>> + '_ {
        (0..Self::SLOT_COUNT).map(|slot| self.slot(slot))
    }
}

impl From<RuleList> for Vec<Rule> {
    fn from(list: RuleList) -> Self {
        list.rules.to_vec()
    }
}

impl TryFrom<Vec<Rule>> for RuleList {
    type Error = RuleListError;

    fn try_from(rules: Vec<Rule>) -> Result<Self, Self::Error> {
        let mut list = Self::new();
        for rule in rules {
            list.push(rule)?;
        }
        Ok(list)
    }
}
