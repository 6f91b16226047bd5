//! Slot availability tracking for automatic widget placement.

use std::fmt;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::{Layout, LayoutError, SLOTS_PER_ROW};

/// A row or column of slot indices.
pub type SlotGroup = SmallVec<[usize; SLOTS_PER_ROW]>;

/// An external source of claimed slots.
///
/// The slot manager only ever asks it about a slot, it never records anything in it.
pub trait ClaimAuthority {
    /// Returns whether `index` is already taken according to this authority.
    fn is_claimed(&self, index: usize) -> bool;
}

impl<F: Fn(usize) -> bool> ClaimAuthority for F {
    fn is_claimed(&self, index: usize) -> bool {
        self(index)
    }
}

/// Tracks which slots of a [`Layout`] are still free.
///
/// A slot is available when it lies inside the layout, has not been claimed locally
/// and is not reported as claimed by the injected [`ClaimAuthority`].
pub struct SlotManager {
    layout: Layout,
    used: FxHashSet<usize>,
    authority: Option<Box<dyn ClaimAuthority + Send + Sync>>,
}

impl fmt::Debug for SlotManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotManager")
            .field("layout", &self.layout)
            .field("used", &self.used)
            .field("has_authority", &self.authority.is_some())
            .finish()
    }
}

impl SlotManager {
    /// Creates a slot manager with nothing claimed.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            used: FxHashSet::default(),
            authority: None,
        }
    }

    /// Creates a slot manager that also consults `authority` for claimed slots.
    #[must_use]
    pub fn with_authority(
        layout: Layout,
        authority: impl ClaimAuthority + Send + Sync + 'static,
    ) -> Self {
        Self {
            layout,
            used: FxHashSet::default(),
            authority: Some(Box::new(authority)),
        }
    }

    /// Returns the layout this manager tracks.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns whether `index` is claimed locally or by the authority.
    #[must_use]
    pub fn is_claimed(&self, index: usize) -> bool {
        self.used.contains(&index)
            || self
                .authority
                .as_ref()
                .is_some_and(|authority| authority.is_claimed(index))
    }

    /// Returns whether `index` is inside the layout and unclaimed.
    #[must_use]
    pub fn is_available(&self, index: usize) -> bool {
        self.layout.contains(index) && !self.is_claimed(index)
    }

    /// Iterates the available indices in index order.
    pub fn iter_available(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.layout.total()).filter(|&index| !self.is_claimed(index))
    }

    /// Returns every available index, primary region first.
    #[must_use]
    pub fn available_indices(&self) -> Vec<usize> {
        self.iter_available().collect()
    }

    /// Returns the first available index.
    #[must_use]
    pub fn next_available(&self) -> Option<usize> {
        self.iter_available().next()
    }

    /// Returns the available indices of every layout row that still has any.
    #[must_use]
    pub fn available_rows(&self) -> Vec<SlotGroup> {
        (0..self.layout.row_count())
            .filter_map(|row| self.available_in_row(row))
            .collect()
    }

    /// Returns the available indices of every primary-grid column that still has any.
    #[must_use]
    pub fn available_columns(&self) -> Vec<SlotGroup> {
        (0..self.layout.grid.columns())
            .filter_map(|column| {
                let group: SlotGroup = self
                    .layout
                    .column(column)
                    .filter(|&index| !self.is_claimed(index))
                    .collect();
                (!group.is_empty()).then_some(group)
            })
            .collect()
    }

    fn available_in_row(&self, row: usize) -> Option<SlotGroup> {
        let group: SlotGroup = self
            .layout
            .row(row)?
            .filter(|&index| !self.is_claimed(index))
            .collect();
        (!group.is_empty()).then_some(group)
    }

    /// Marks `index` as used.
    ///
    /// Indices outside the layout are accepted and simply never show up as available.
    pub fn claim(&mut self, index: usize) {
        self.used.insert(index);
    }

    /// Marks every index in `indices` as used.
    pub fn claim_all(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.used.extend(indices);
    }

    /// Makes exactly `indices` available by claiming every other slot in the layout.
    ///
    /// Slots already claimed stay claimed.
    pub fn set_available(&mut self, indices: impl IntoIterator<Item = usize>) {
        let keep: FxHashSet<usize> = indices.into_iter().collect();
        let total = self.layout.total();
        self.used
            .extend((0..total).filter(|index| !keep.contains(index)));
    }

    /// Returns the available slots of the first row that has any, without claiming them.
    ///
    /// Rows are scanned from the top when `from_top` is set, otherwise from the bottom.
    #[must_use]
    pub fn peek_row(&self, from_top: bool) -> Option<SlotGroup> {
        let row_count = self.layout.row_count();
        if from_top {
            (0..row_count).find_map(|row| self.available_in_row(row))
        } else {
            (0..row_count).rev().find_map(|row| self.available_in_row(row))
        }
    }

    /// Claims the remaining slots of the first row that has any.
    ///
    /// Rows are scanned like [`peek_row`](Self::peek_row). Returns the claimed indices,
    /// or `None` when every row is exhausted.
    pub fn reserve_row(&mut self, from_top: bool) -> Option<SlotGroup> {
        let reserved = self.peek_row(from_top)?;

        self.used.extend(reserved.iter().copied());
        log::trace!("Reserved row slots {reserved:?}");
        Some(reserved)
    }

    /// Clears every local claim. The authority is left untouched.
    pub fn reset(&mut self) {
        self.used.clear();
    }

    /// Returns the available index at `position`, counting from the end when negative.
    pub fn nth(&self, position: isize) -> Result<usize, LayoutError> {
        let available = self.available_indices();
        let resolved = if position < 0 {
            available.len().checked_sub(position.unsigned_abs())
        } else {
            Some(position.unsigned_abs())
        };

        resolved
            .and_then(|index| available.get(index).copied())
            .ok_or(LayoutError::IndexOutOfRange {
                index: position,
                available: available.len(),
            })
    }
}
