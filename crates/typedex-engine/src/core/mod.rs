//! Core data model: features, classes, records, rules, bundles and weights.
//!
//! Everything in this module is plain data with its invariants enforced at
//! construction. Scoring and training live in the evaluator and training crates.

pub use self::{bundle::*, class::*, feature::*, record::*, rule::*, rule_list::*, weight_table::*};

pub(crate) mod bundle;
pub(crate) mod class;
pub(crate) mod feature;
pub(crate) mod record;
pub(crate) mod rule;
pub(crate) mod rule_list;
pub(crate) mod weight_table;
