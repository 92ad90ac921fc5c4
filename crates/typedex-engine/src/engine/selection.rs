use arrayvec::ArrayVec;

use crate::{BundleCatalog, BundleId, CreatureRecord};

const MAX_SELECTED: usize = 4;

#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum SelectionError {
    #[display("bundle {id} does not exist")]
    UnknownBundle { id: BundleId },
    #[display("at most {MAX_SELECTED} bundles can be selected")]
    SelectionFull,
}

/// Result of toggling a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionChange {
    Selected,
    Deselected,
}

/// Ordered set of up to four bundles chosen for training.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingSelection {
    ids: ArrayVec<BundleId, MAX_SELECTED>,
}

impl TrainingSelection {
    /// Maximum number of bundles that can be selected at once.
    pub const MAX_SELECTED: usize = MAX_SELECTED;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `id`, or deselects it if it is already selected.
    ///
    /// Selecting a fifth bundle fails and leaves the selection unchanged.
    pub fn toggle(
        &mut self,
        catalog: &BundleCatalog,
        id: BundleId,
    ) -> Result<SelectionChange, SelectionError> {
        if let Some(pos) = self.ids.iter().position(|selected| *selected == id) {
            self.ids.remove(pos);
            return Ok(SelectionChange::Deselected);
        }
        if catalog.get(id).is_none() {
            return Err(SelectionError::UnknownBundle { id });
        }
        self.ids
            .try_push(id)
            .map_err(|_| SelectionError::SelectionFull)?;
        Ok(SelectionChange::Selected)
    }

    #[must_use]
    pub fn ids(&self) -> &[BundleId] {
        &self.ids
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn contains(&self, id: BundleId) -> bool {
        self.ids.contains(&id)
    }

    /// Records of all selected bundles, concatenated in selection order.
    pub fn records<'a>(
        &'a self,
        catalog: &'a BundleCatalog,
    ) -> impl Iterator<Item = &'a CreatureRecord> + 'a {
        self.ids
            .iter()
            .filter_map(|id| catalog.get(*id))
            .flat_map(|bundle| bundle.records())
    }
}
