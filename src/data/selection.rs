use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Selection – toggle set of picked row indices
// ---------------------------------------------------------------------------

/// The set of currently picked row indices.
///
/// Clicking a row once selects it, clicking it again deselects it; identity
/// is the row index, so duplicate (x, y) rows toggle independently. Backed
/// by a `BTreeSet`, which keeps iteration sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    indices: BTreeSet<usize>,
}

impl Selection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a row: insert when absent, remove when present.
    /// Returns whether the row is selected afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.indices.contains(&index) {
            self.indices.remove(&index);
            false
        } else {
            self.indices.insert(index);
            true
        }
    }

    /// Whether a row is currently selected.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Selected indices, ascending.
    pub fn indices(&self) -> Vec<usize> {
        self.indices.iter().copied().collect()
    }

    /// Iterate over the selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}
