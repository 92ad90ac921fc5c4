//! Player-facing game state built on top of the core data model.
//!
//! - [`Session`] - Rule lists, bundle selection, trained weights and the tie-break
//!   random source of one game session
//! - [`SessionSeed`] - Seed for reproducible tie-breaks
//! - [`TrainingSelection`] - Up to four bundles chosen for training
//! - [`PurityChallenge`] - "Spot the clean package" mini-game over the training pool
//!
//! # Example
//!
//! ```
//! use typedex_engine::{CreatureClass, Feature, FeatureState, Rule, Session};
//!
//! let mut session = Session::new();
//! session
//!     .place_class_rule(CreatureClass::Fire, 0, Rule::new(Feature::Attack, FeatureState::High))
//!     .unwrap();
//!
//! // Slots fill in order, so slot 2 cannot be used before slot 1.
//! let rule = Rule::new(Feature::Speed, FeatureState::High);
//! assert!(session.place_class_rule(CreatureClass::Fire, 2, rule).is_err());
//! ```

pub use self::{purity_challenge::*, selection::*, session::*};

mod purity_challenge;
mod selection;
mod session;
