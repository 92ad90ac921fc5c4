//! Learning weight tables by class-conditional averaging.
//!
//! Training is deliberately simple: there is no iteration and no loss function. For
//! every class, the trainer averages each feature over the training records of that
//! class and maps the average onto an integer weight in `-3..=3`:
//!
//! - `HasWings` saturates: `+3` when most records have wings (average > 0.5), else `-3`.
//! - Other features scale linearly around the neutral value 5:
//!   `round((average - 5) / 1.66)`, clamped to `-3..=3`.
//! - A class with no training records gets all-zero weights.
//!
//! # Architecture
//!
//! ```text
//! Bundle selection (typedex-engine)
//!     ↓ concatenated records
//! ClassFeatureSums (per-class counts and feature sums)
//!     ↓ averages
//! Weight mapping (weights module)
//!     ↓ produces
//! WeightTable, scored by typedex-evaluator
//! ```
//!
//! # Example
//!
//! ```
//! use typedex_engine::{CreatureClass, CreatureRecord, Feature, FeatureMap};
//! use typedex_training::trainer;
//!
//! let mut values = FeatureMap::from_fn(|_| 5);
//! values[Feature::Attack] = 8;
//! let records = [CreatureRecord::new("Growlithe", CreatureClass::Fire, values)];
//!
//! let outcome = trainer::train(&records).unwrap();
//! assert_eq!(outcome.weights.get(CreatureClass::Fire, Feature::Attack), 2);
//! assert_eq!(outcome.weights.get(CreatureClass::Water, Feature::Attack), 0);
//! ```

pub mod trainer;
pub mod weights;
