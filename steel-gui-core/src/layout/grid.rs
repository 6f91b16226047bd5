//! Grid geometry for a screen's primary region and the appended player inventory.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// The number of slots per row in the player inventory and hotbar.
pub const SLOTS_PER_ROW: usize = 9;
/// The number of player inventory rows, excluding the hotbar.
pub const PLAYER_INVENTORY_ROWS: usize = 3;
/// The number of hotbar slots.
pub const HOTBAR_SIZE: usize = 9;
/// The number of player inventory slots including the hotbar.
pub const PLAYER_INVENTORY_SIZE: usize = PLAYER_INVENTORY_ROWS * SLOTS_PER_ROW + HOTBAR_SIZE;

/// The primary slot grid of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Creates a grid with the given dimensions.
    #[must_use]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn columns(self) -> usize {
        self.columns
    }

    /// Returns the number of slots in the grid.
    #[must_use]
    pub const fn total(self) -> usize {
        self.rows * self.columns
    }
}

/// Which part of the player's inventory is appended after the primary grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryRegion {
    /// Only the primary grid is addressable.
    #[default]
    None,
    /// The 27 main inventory slots.
    Inventory,
    /// The 27 main inventory slots followed by the 9 hotbar slots.
    InventoryWithHotbar,
}

impl SecondaryRegion {
    /// Picks the region from the two flags used by definitions.
    ///
    /// The hotbar is only included together with the inventory.
    #[must_use]
    pub const fn from_flags(player_inventory: bool, hotbar: bool) -> Self {
        match (player_inventory, hotbar) {
            (false, _) => Self::None,
            (true, false) => Self::Inventory,
            (true, true) => Self::InventoryWithHotbar,
        }
    }

    /// Returns the number of rows this region adds.
    #[must_use]
    pub const fn rows(self) -> usize {
        match self {
            Self::None => 0,
            Self::Inventory => PLAYER_INVENTORY_ROWS,
            Self::InventoryWithHotbar => PLAYER_INVENTORY_ROWS + 1,
        }
    }

    /// Returns the number of slots this region adds.
    #[must_use]
    pub const fn slot_count(self) -> usize {
        self.rows() * SLOTS_PER_ROW
    }

    /// Returns whether the hotbar row is part of the region.
    #[must_use]
    pub const fn has_hotbar(self) -> bool {
        matches!(self, Self::InventoryWithHotbar)
    }
}

/// A primary grid together with its secondary region.
///
/// Indices `0..grid.total()` address the primary grid in row-major order. The
/// secondary region follows directly after, inventory rows first, then the hotbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    /// The primary grid.
    pub grid: Grid,
    /// The appended player inventory region.
    pub secondary: SecondaryRegion,
}

impl Layout {
    /// Creates a new layout.
    #[must_use]
    pub const fn new(grid: Grid, secondary: SecondaryRegion) -> Self {
        Self { grid, secondary }
    }

    /// Returns the number of addressable slots.
    #[must_use]
    pub const fn total(self) -> usize {
        self.grid.total() + self.secondary.slot_count()
    }

    /// Returns the number of rows across both regions.
    #[must_use]
    pub const fn row_count(self) -> usize {
        self.grid.rows() + self.secondary.rows()
    }

    /// Returns whether `index` lies in the primary grid.
    #[must_use]
    pub const fn is_primary(self, index: usize) -> bool {
        index < self.grid.total()
    }

    /// Returns whether `index` is addressable at all.
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        index < self.total()
    }

    /// Returns the indices of layout row `row`.
    ///
    /// Primary rows come first and are `columns` wide, secondary rows are always 9 wide.
    #[must_use]
    pub fn row(self, row: usize) -> Option<Range<usize>> {
        if row < self.grid.rows() {
            let start = row * self.grid.columns();
            return Some(start..start + self.grid.columns());
        }

        let secondary_row = row - self.grid.rows();
        if secondary_row < self.secondary.rows() {
            let start = self.grid.total() + secondary_row * SLOTS_PER_ROW;
            Some(start..start + SLOTS_PER_ROW)
        } else {
            None
        }
    }

    /// Returns the primary-grid indices of `column`, top to bottom.
    pub fn column(self, column: usize) -> impl Iterator<Item = usize> {
        let columns = self.grid.columns();
        let rows = if column < columns { self.grid.rows() } else { 0 };
        (0..rows).map(move |row| row * columns + column)
    }

    /// Returns the layout row containing `index`.
    #[must_use]
    pub const fn row_of(self, index: usize) -> Option<usize> {
        if index < self.grid.total() {
            Some(index / self.grid.columns())
        } else if index < self.total() {
            Some(self.grid.rows() + (index - self.grid.total()) / SLOTS_PER_ROW)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secondary_region_sizes() {
        assert_eq!(SecondaryRegion::None.slot_count(), 0);
        assert_eq!(SecondaryRegion::Inventory.slot_count(), 27);
        assert_eq!(SecondaryRegion::InventoryWithHotbar.slot_count(), 36);
        assert_eq!(
            SecondaryRegion::from_flags(false, true),
            SecondaryRegion::None
        );
    }

    #[test]
    fn test_rows_span_both_regions() {
        let layout = Layout::new(Grid::new(2, 5), SecondaryRegion::InventoryWithHotbar);
        assert_eq!(layout.total(), 10 + 36);
        assert_eq!(layout.row_count(), 6);
        assert_eq!(layout.row(0), Some(0..5));
        assert_eq!(layout.row(1), Some(5..10));
        assert_eq!(layout.row(2), Some(10..19));
        assert_eq!(layout.row(5), Some(37..46));
        assert_eq!(layout.row(6), None);
    }

    #[test]
    fn test_row_of() {
        let layout = Layout::new(Grid::new(3, 3), SecondaryRegion::Inventory);
        assert_eq!(layout.row_of(4), Some(1));
        assert_eq!(layout.row_of(9), Some(3));
        assert_eq!(layout.row_of(35), Some(5));
        assert_eq!(layout.row_of(36), None);
    }

    #[test]
    fn test_column_is_primary_only() {
        let layout = Layout::new(Grid::new(3, 9), SecondaryRegion::InventoryWithHotbar);
        assert_eq!(layout.column(2).collect::<Vec<_>>(), vec![2, 11, 20]);
        assert_eq!(layout.column(9).count(), 0);
    }
}
