//! "Spot the clean package" challenge.
//!
//! For each class in turn, the player sees two packages of the same creatures: one
//! holds the clean (`-C`) samples, the other the noisy (`-N`) ones. Picking the clean
//! package advances to the next class; a wrong pick keeps the same packages on the
//! table.

use std::collections::BTreeSet;

use rand::{Rng, seq::SliceRandom as _};

use crate::{CreatureClass, CreatureRecord, SampleVariant};

/// Maximum number of creatures shown in each package.
pub const PACKAGE_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum PackageSide {
    #[display("A")]
    A,
    #[display("B")]
    B,
}

/// Two packages of the same creatures, one clean and one noisy.
#[derive(Debug, Clone)]
pub struct PackagePair {
    class: CreatureClass,
    package_a: Vec<CreatureRecord>,
    package_b: Vec<CreatureRecord>,
    clean_side: PackageSide,
}

impl PackagePair {
    #[must_use]
    pub fn class(&self) -> CreatureClass {
        self.class
    }

    #[must_use]
    pub fn package(&self, side: PackageSide) -> &[CreatureRecord] {
        match side {
            PackageSide::A => &self.package_a,
            PackageSide::B => &self.package_b,
        }
    }

    #[must_use]
    pub fn clean_side(&self) -> PackageSide {
        self.clean_side
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum PurityChallengeError {
    #[display("no {class} creature has both a clean and a noisy sample")]
    NoComparablePairs { class: CreatureClass },
    #[display("the challenge is already complete")]
    Completed,
    #[display("no packages have been dealt")]
    NotDealt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum AnswerOutcome {
    /// The clean package was picked; the challenge moved on to the next class.
    Correct { completed: bool },
    /// The noisy package was picked; the same packages stay in play.
    Incorrect,
}

/// Progress through the four-class purity challenge.
#[derive(Debug, Clone, Default)]
pub struct PurityChallenge {
    step: usize,
    current: Option<PackagePair>,
}

impl PurityChallenge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Class of the current step, or `None` once all classes are done.
    #[must_use]
    pub fn current_class(&self) -> Option<CreatureClass> {
        CreatureClass::ALL.get(self.step).copied()
    }

    /// Number of classes already completed.
    #[must_use]
    pub fn completed_steps(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.step >= CreatureClass::LEN
    }

    #[must_use]
    pub fn current(&self) -> Option<&PackagePair> {
        self.current.as_ref()
    }

    /// Deals fresh packages for the current class from the training pool.
    pub fn deal<R>(
        &mut self,
        pool: &[CreatureRecord],
        rng: &mut R,
    ) -> Result<&PackagePair, PurityChallengeError>
    where
        R: Rng + ?Sized,
    {
        let class = self
            .current_class()
            .ok_or(PurityChallengeError::Completed)?;
        let class_pool: Vec<&CreatureRecord> =
            pool.iter().filter(|r| r.class() == class).collect();

        let find = |base: &str, variant: SampleVariant| {
            class_pool
                .iter()
                .find(|r| r.base_name() == base && r.sample_variant() == Some(variant))
                .map(|r| (*r).clone())
        };

        let mut names: Vec<&str> = class_pool
            .iter()
            .map(|r| r.base_name())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter(|base| {
                find(*base, SampleVariant::Clean).is_some()
                    && find(*base, SampleVariant::Noisy).is_some()
            })
            .collect();
        if names.is_empty() {
            return Err(PurityChallengeError::NoComparablePairs { class });
        }
        names.shuffle(rng);
        names.truncate(PACKAGE_SIZE);

        let clean: Vec<_> = names
            .iter()
            .filter_map(|base| find(*base, SampleVariant::Clean))
            .collect();
        let noisy: Vec<_> = names
            .iter()
            .filter_map(|base| find(*base, SampleVariant::Noisy))
            .collect();

        let (clean_side, package_a, package_b) = if rng.random_bool(0.5) {
            (PackageSide::A, clean, noisy)
        } else {
            (PackageSide::B, noisy, clean)
        };
        Ok(&*self.current.insert(PackagePair {
            class,
            package_a,
            package_b,
            clean_side,
        }))
    }

    /// Records the player's pick for the dealt packages.
    pub fn answer(&mut self, side: PackageSide) -> Result<AnswerOutcome, PurityChallengeError> {
        let pair = self.current.as_ref().ok_or(PurityChallengeError::NotDealt)?;
        if pair.clean_side != side {
            return Ok(AnswerOutcome::Incorrect);
        }
        self.current = None;
        self.step += 1;
        Ok(AnswerOutcome::Correct {
            completed: self.is_complete(),
        })
    }
}
