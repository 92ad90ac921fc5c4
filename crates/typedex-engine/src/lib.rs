//! Data model and game state for the creature-typing classifier game.
//!
//! The [`core`] module holds the plain data: creature records, features, rules,
//! rule lists, bundles and weight tables. The [`engine`] module holds the state a
//! player builds up while playing a [`Session`].

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
