use std::{
    iter,
    ops::{Index, IndexMut},
};

use serde::{Deserialize, Serialize};

/// Target category a creature record can be predicted into.
///
/// Serialized in lowercase (`"fire"`, `"water"`, ...), which is also the form used by
/// the `CorrectType` field of the data files.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum CreatureClass {
    #[display("fire")]
    Fire = 0,
    #[display("water")]
    Water = 1,
    #[display("grass")]
    Grass = 2,
    #[display("dragon")]
    Dragon = 3,
}

impl CreatureClass {
    /// Number of classes (4).
    pub const LEN: usize = 4;

    /// All classes in their canonical order.
    pub const ALL: [Self; Self::LEN] = [Self::Fire, Self::Water, Self::Grass, Self::Dragon];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Fixed-size map holding one value per [`CreatureClass`].
///
/// # Example
///
/// ```
/// use typedex_engine::{ClassMap, CreatureClass};
///
/// let mut counts = ClassMap::from_fn(|_| 0);
/// counts[CreatureClass::Grass] += 2;
/// assert_eq!(counts[CreatureClass::Grass], 2);
/// assert_eq!(counts.values().sum::<i32>(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassMap<T>([T; CreatureClass::LEN]);

impl<T> ClassMap<T> {
    #[must_use]
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(CreatureClass) -> T,
    {
        Self(CreatureClass::ALL.map(&mut f))
    }

    /// Iterates over `(class, value)` pairs in canonical class order.
    pub fn iter(&self) -> impl Iterator<Item = (CreatureClass, &T)> + '_ {
        iter::zip(CreatureClass::ALL, &self.0)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter()
    }

    #[must_use]
    pub fn map<U, F>(&self, mut f: F) -> ClassMap<U>
    where
        F: FnMut(CreatureClass, &T) -> U,
    {
        ClassMap::from_fn(|class| f(class, &self[class]))
    }
}

impl<T> Index<CreatureClass> for ClassMap<T> {
    type Output = T;

    fn index(&self, class: CreatureClass) -> &T {
        &self.0[class.index()]
    }
}

impl<T> IndexMut<CreatureClass> for ClassMap<T> {
    fn index_mut(&mut self, class: CreatureClass) -> &mut T {
        &mut self.0[class.index()]
    }
}
