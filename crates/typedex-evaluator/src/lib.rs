//! Scoring creature records with rule lists and learned weights.
//!
//! The game offers three ways to classify a record:
//!
//! 1. **Single-class rules** ([`rule_evaluator`]) - A record is predicted to belong to the
//!    target class when every rule of the list matches it.
//! 2. **Multi-class rules** ([`rule_scorer`]) - Each class owns a rule list; matching
//!    rules add slot points (3, 2, 2, 1) and the highest-scoring class wins.
//! 3. **Learned weights** ([`weighted_scorer`]) - Each class scores
//!    `Σ (value - 5) × weight` over all features and the highest raw score wins.
//!
//! Multi-class predictions share one tie-break policy ([`tie_break`]): classes are
//! scanned in a fresh random order and the first strict maximum is kept, so ties are
//! resolved at random rather than by class order.
//!
//! [`accuracy`] runs any of these predictors over a whole test set.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg32;
//! use typedex_engine::{ClassMap, CreatureClass, CreatureRecord, FeatureMap, RuleList, Rule};
//! use typedex_evaluator::{prediction::ClassPredictor as _, rule_scorer::RuleScorer};
//!
//! let mut rules = ClassMap::<RuleList>::default();
//! rules[CreatureClass::Water].push("HabitatAltitude=low".parse::<Rule>().unwrap()).unwrap();
//! let scorer = RuleScorer::new(rules);
//!
//! let record = CreatureRecord::new("Psyduck", CreatureClass::Water, FeatureMap::default());
//! let mut rng = Pcg32::seed_from_u64(0);
//! let prediction = scorer.predict(&record, &mut rng);
//! assert_eq!(prediction.class, CreatureClass::Water);
//! assert_eq!(prediction.score, 3);
//! ```

pub mod accuracy;
pub mod prediction;
pub mod rule_evaluator;
pub mod rule_scorer;
pub mod tie_break;
pub mod weighted_scorer;
