//! Multi-class rule scoring.
//!
//! Every class owns a [`RuleList`]. For a given record, each matching rule adds the point
//! value of its slot ([`SLOT_POINTS`]: 3, 2, 2, 1) to its class, and the class with the
//! most points is predicted. Empty lists are allowed here: a class without rules scores
//! zero, and when every class ties the winner is chosen at random.

use typedex_engine::{ClassMap, CreatureRecord, RuleList, SLOT_POINTS};

use crate::prediction::ClassPredictor;

/// Highest score a class can reach (all four slots matching).
pub const MAX_CLASS_SCORE: u32 = 8;

/// Points earned by `rules` for `record`.
#[must_use]
pub fn class_score(rules: &RuleList, record: &CreatureRecord) -> u32 {
    rules
        .slots()
        .zip(SLOT_POINTS)
        .filter(|(slot, _)| slot.is_some_and(|rule| rule.matches(record)))
        .map(|(_, points)| points)
        .sum()
}

#[derive(Debug, Clone, Default)]
pub struct RuleScorer {
    rules: ClassMap<RuleList>,
}

impl RuleScorer {
    #[must_use]
    pub fn new(rules: ClassMap<RuleList>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &ClassMap<RuleList> {
        &self.rules
    }
}

impl ClassPredictor for RuleScorer {
    type Score = u32;

    fn scores(&self, record: &CreatureRecord) -> ClassMap<u32> {
        self.rules.map(|_, rules| class_score(rules, record))
    }
}
