//! Batch accuracy over a labeled test set.
//!
//! Accuracy is a plain ratio of correct predictions to records: no partial credit. An
//! empty test set has an accuracy of 0.

use rand::Rng;
use typedex_engine::{ClassMap, CreatureClass, CreatureRecord};

use crate::{prediction::ClassPredictor, rule_evaluator::MembershipPredictor};

#[expect(clippy::cast_precision_loss)]
fn ratio(correct: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64
    }
}

/// Result of a single-class membership test over a test set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleClassReport {
    pub target: CreatureClass,
    /// Target-class records predicted as members.
    pub target_correct: usize,
    pub target_total: usize,
    /// Other-class records predicted as non-members.
    pub non_target_correct: usize,
    pub non_target_total: usize,
}

impl SingleClassReport {
    #[must_use]
    pub fn correct(&self) -> usize {
        self.target_correct + self.non_target_correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.target_total + self.non_target_total
    }

    /// Overall accuracy in `0.0..=1.0`.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct(), self.total())
    }
}

/// Runs a membership predictor for `target` over `records`.
///
/// # Example
///
/// ```
/// use typedex_engine::{CreatureClass, CreatureRecord, FeatureMap};
/// use typedex_evaluator::accuracy::evaluate_single_class;
///
/// let records = [
///     CreatureRecord::new("Vulpix", CreatureClass::Fire, FeatureMap::default()),
///     CreatureRecord::new("Lapras", CreatureClass::Water, FeatureMap::default()),
/// ];
/// let report = evaluate_single_class(&|_: &CreatureRecord| true, CreatureClass::Fire, &records);
/// assert_eq!(report.target_correct, 1);
/// assert_eq!(report.non_target_correct, 0);
/// assert!((report.accuracy() - 0.5).abs() < 1e-12);
/// ```
pub fn evaluate_single_class<P>(
    predictor: &P,
    target: CreatureClass,
    records: &[CreatureRecord],
) -> SingleClassReport
where
    P: MembershipPredictor + ?Sized,
{
    let mut report = SingleClassReport {
        target,
        target_correct: 0,
        target_total: 0,
        non_target_correct: 0,
        non_target_total: 0,
    };
    for record in records {
        let member = predictor.is_member(record);
        if record.class() == target {
            report.target_total += 1;
            report.target_correct += usize::from(member);
        } else {
            report.non_target_total += 1;
            report.non_target_correct += usize::from(!member);
        }
    }
    report
}

/// Result of a multi-class prediction run over a test set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MultiClassReport {
    /// Correct predictions, keyed by the record's true class.
    pub correct: ClassMap<usize>,
    /// Records of each true class.
    pub totals: ClassMap<usize>,
}

impl MultiClassReport {
    #[must_use]
    pub fn correct_total(&self) -> usize {
        self.correct.values().sum()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.totals.values().sum()
    }

    #[must_use]
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct_total(), self.total())
    }

    #[must_use]
    pub fn class_accuracy(&self, class: CreatureClass) -> f64 {
        ratio(self.correct[class], self.totals[class])
    }
}

/// Predicts every record with `predictor` and tallies the correct ones per class.
pub fn evaluate_multi_class<P, R>(
    predictor: &P,
    records: &[CreatureRecord],
    rng: &mut R,
) -> MultiClassReport
where
    P: ClassPredictor + ?Sized,
    R: Rng + ?Sized,
{
    let mut report = MultiClassReport::default();
    for record in records {
        let class = record.class();
        report.totals[class] += 1;
        if predictor.predict(record, rng).class == class {
            report.correct[class] += 1;
        }
    }
    report
}
