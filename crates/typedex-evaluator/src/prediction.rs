//! Multi-class prediction results and the predictor trait.

use rand::Rng;
use typedex_engine::{ClassMap, CreatureClass, CreatureRecord};

use crate::tie_break::first_max_in_random_order;

/// Winning class of a multi-class prediction together with all class scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassPrediction<S> {
    pub class: CreatureClass,
    pub score: S,
    pub scores: ClassMap<S>,
}

impl<S> ClassPrediction<S>
where
    S: PartialOrd + Copy,
{
    /// Picks the winner from `scores` using the random-order tie-break.
    pub fn from_scores<R>(scores: ClassMap<S>, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let (class, score) = first_max_in_random_order(&scores, rng);
        Self {
            class,
            score,
            scores,
        }
    }
}

/// Scores a record for every class and predicts the best one.
pub trait ClassPredictor {
    type Score: PartialOrd + Copy;

    /// Computes the score of each class for `record`.
    fn scores(&self, record: &CreatureRecord) -> ClassMap<Self::Score>;

    /// Predicts the class of `record`; the random source only matters on ties.
    fn predict<R>(&self, record: &CreatureRecord, rng: &mut R) -> ClassPrediction<Self::Score>
    where
        R: Rng + ?Sized,
    {
        ClassPrediction::from_scores(self.scores(record), rng)
    }
}
