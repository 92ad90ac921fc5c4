//! Single-class rule evaluation.
//!
//! A [`SingleClassEvaluator`] answers one question for a target class: "is this record a
//! member?" The answer is yes only when every rule in the list matches the record.
//! There is no ranking and no randomness, so the same rules and record always give the
//! same answer.

use typedex_engine::{CreatureClass, CreatureRecord, Rule, RuleList};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("rule list is empty: place at least one rule first")]
pub struct EmptyRuleListError;

/// Predicts whether a record belongs to a single target class.
pub trait MembershipPredictor {
    fn is_member(&self, record: &CreatureRecord) -> bool;
}

impl<F> MembershipPredictor for F
where
    F: Fn(&CreatureRecord) -> bool,
{
    fn is_member(&self, record: &CreatureRecord) -> bool {
        self(record)
    }
}

/// Outcome of one rule against one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleCheck {
    pub rule: Rule,
    /// Raw feature value of the record.
    pub raw_value: u8,
    /// Value after binarization (`1` when high).
    pub binary_value: u8,
    pub matched: bool,
}

/// Membership test built from a non-empty rule list.
///
/// # Example
///
/// ```
/// use typedex_engine::{CreatureClass, CreatureRecord, FeatureMap, RuleList};
/// use typedex_evaluator::rule_evaluator::SingleClassEvaluator;
///
/// let mut rules = RuleList::new();
/// rules.push("HasWings=low".parse().unwrap()).unwrap();
/// let evaluator = SingleClassEvaluator::new(&rules, CreatureClass::Grass).unwrap();
///
/// let record = CreatureRecord::new("Oddish", CreatureClass::Grass, FeatureMap::default());
/// assert!(evaluator.matches(&record));
/// assert!(evaluator.is_correct(&record));
///
/// assert!(SingleClassEvaluator::new(&RuleList::new(), CreatureClass::Grass).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SingleClassEvaluator {
    rules: RuleList,
    target: CreatureClass,
}

impl SingleClassEvaluator {
    pub fn new(rules: &RuleList, target: CreatureClass) -> Result<Self, EmptyRuleListError> {
        if rules.is_empty() {
            return Err(EmptyRuleListError);
        }
        Ok(Self {
            rules: rules.clone(),
            target,
        })
    }

    #[must_use]
    pub fn target(&self) -> CreatureClass {
        self.target
    }

    #[must_use]
    pub fn rules(&self) -> &RuleList {
        &self.rules
    }

    /// Returns `true` if every rule matches `record`.
    #[must_use]
    pub fn matches(&self, record: &CreatureRecord) -> bool {
        self.rules.rules().iter().all(|rule| rule.matches(record))
    }

    /// Returns `true` if the membership prediction agrees with the record's class.
    #[must_use]
    pub fn is_correct(&self, record: &CreatureRecord) -> bool {
        self.matches(record) == (record.class() == self.target)
    }

    /// Checks each rule in slot order, including the ones after a failing rule.
    #[must_use]
    pub fn trace(&self, record: &CreatureRecord) -> Vec<RuleCheck> {
        self.rules
            .rules()
            .iter()
            .map(|rule| RuleCheck {
                rule: *rule,
                raw_value: record.value(rule.feature),
                binary_value: record.binary_value(rule.feature),
                matched: rule.matches(record),
            })
            .collect()
    }
}

impl MembershipPredictor for SingleClassEvaluator {
    fn is_member(&self, record: &CreatureRecord) -> bool {
        self.matches(record)
    }
}

#[cfg(test)]
mod tests {
    use typedex_engine::{Feature, FeatureMap, FeatureState};

    use super::*;

    fn record(class: CreatureClass, f: impl FnOnce(&mut FeatureMap<u8>)) -> CreatureRecord {
        let mut values = FeatureMap::from_fn(|_| 5);
        f(&mut values);
        CreatureRecord::new("Test", class, values)
    }

    #[test]
    fn test_empty_rule_list_is_rejected() {
        assert_eq!(
            SingleClassEvaluator::new(&RuleList::new(), CreatureClass::Fire).unwrap_err(),
            EmptyRuleListError
        );
    }

    #[test]
    fn test_wingless_rule() {
        let mut rules = RuleList::new();
        rules
            .push(Rule::new(Feature::HasWings, FeatureState::Low))
            .unwrap();
        let evaluator = SingleClassEvaluator::new(&rules, CreatureClass::Grass).unwrap();

        let grounded = record(CreatureClass::Grass, |v| v[Feature::HasWings] = 0);
        let winged = record(CreatureClass::Dragon, |v| v[Feature::HasWings] = 1);
        assert!(evaluator.matches(&grounded));
        assert!(!evaluator.matches(&winged));
        // A non-member correctly rejected also counts as correct.
        assert!(evaluator.is_correct(&winged));
    }

    #[test]
    fn test_all_rules_must_match() {
        let mut rules = RuleList::new();
        rules
            .push(Rule::new(Feature::Attack, FeatureState::High))
            .unwrap();
        rules
            .push(Rule::new(Feature::HabitatTemperature, FeatureState::High))
            .unwrap();
        let evaluator = SingleClassEvaluator::new(&rules, CreatureClass::Fire).unwrap();

        let hot = record(CreatureClass::Fire, |v| {
            v[Feature::Attack] = 8;
            v[Feature::HabitatTemperature] = 9;
        });
        let mild = record(CreatureClass::Fire, |v| {
            v[Feature::Attack] = 8;
            v[Feature::HabitatTemperature] = 5;
        });
        assert!(evaluator.matches(&hot));
        assert!(!evaluator.matches(&mild));
        assert!(!evaluator.is_correct(&mild));

        // Same inputs, same answer.
        for _ in 0..10 {
            assert!(evaluator.matches(&hot));
        }
    }

    #[test]
    fn test_trace_reports_every_rule() {
        let mut rules = RuleList::new();
        rules
            .push(Rule::new(Feature::Speed, FeatureState::High))
            .unwrap();
        rules
            .push(Rule::new(Feature::Defense, FeatureState::Low))
            .unwrap();
        let evaluator = SingleClassEvaluator::new(&rules, CreatureClass::Water).unwrap();
        let rec = record(CreatureClass::Water, |v| {
            v[Feature::Speed] = 3;
            v[Feature::Defense] = 2;
        });

        let trace = evaluator.trace(&rec);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace[0].raw_value, 3);
        assert_eq!(trace[0].binary_value, 0);
        assert!(!trace[0].matched);
        assert_eq!(trace[1].rule.feature, Feature::Defense);
        assert!(trace[1].matched);
    }

    #[test]
    fn test_closure_membership_predictor() {
        let always = |_: &CreatureRecord| true;
        let rec = record(CreatureClass::Dragon, |_| {});
        assert!(always.is_member(&rec));
    }
}
