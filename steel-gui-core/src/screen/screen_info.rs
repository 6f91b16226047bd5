//! Pixel geometry of a screen's slots.

use crate::layout::{Grid, Layout, PLAYER_INVENTORY_ROWS, SLOTS_PER_ROW, SecondaryRegion};

use super::ScreenType;

/// Standard slot size in pixels, including the 1px border on each side.
pub const SLOT_SIZE: i32 = 18;

/// Vertical gap between the last inventory row and the hotbar.
pub const HOTBAR_GAP: i32 = 4;

/// Top-left corner of a slot's item area, relative to the screen background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotPosition {
    /// Horizontal offset in pixels.
    pub x: i32,
    /// Vertical offset in pixels.
    pub y: i32,
}

impl SlotPosition {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position `column` slots right and `row` slots down from this one.
    #[must_use]
    pub const fn offset(self, column: usize, row: usize) -> Self {
        Self {
            x: self.x + column as i32 * SLOT_SIZE,
            y: self.y + row as i32 * SLOT_SIZE,
        }
    }

    /// Returns whether the pixel `(x, y)` falls in the 18x18 cell this slot owns.
    #[must_use]
    pub const fn cell_contains(self, x: i32, y: i32) -> bool {
        let (left, top) = (self.x - 1, self.y - 1);
        x >= left && x < left + SLOT_SIZE && y >= top && y < top + SLOT_SIZE
    }
}

/// Layout metadata for one screen type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenInfo {
    /// The screen this metadata describes.
    pub screen_type: ScreenType,
    /// The primary slot grid.
    pub grid: Grid,
    /// Position of primary slot 0.
    pub origin: SlotPosition,
    /// Position of the first player inventory slot.
    pub inventory_origin: SlotPosition,
    /// Background width in pixels.
    pub width: i32,
    /// Background height in pixels.
    pub height: i32,
}

impl ScreenInfo {
    /// Creates chest-style metadata (9 columns, 1-6 rows).
    #[must_use]
    pub fn generic(rows: usize) -> Option<Self> {
        let screen_type = ScreenType::generic_rows(rows)?;
        let chest_top = 18;
        let rows_height = rows as i32 * SLOT_SIZE;

        Some(Self {
            screen_type,
            grid: Grid::new(rows, SLOTS_PER_ROW),
            origin: SlotPosition::new(8, chest_top),
            inventory_origin: SlotPosition::new(8, chest_top + rows_height + 13),
            width: 176,
            height: 114 + rows_height,
        })
    }

    /// Creates dispenser/dropper metadata.
    #[must_use]
    pub const fn generic_3x3() -> Self {
        Self {
            screen_type: ScreenType::Generic3x3,
            grid: Grid::new(3, 3),
            origin: SlotPosition::new(62, 17),
            inventory_origin: SlotPosition::new(8, 84),
            width: 176,
            height: 166,
        }
    }

    /// Creates hopper metadata.
    #[must_use]
    pub const fn hopper() -> Self {
        Self {
            screen_type: ScreenType::Hopper,
            grid: Grid::new(1, 5),
            origin: SlotPosition::new(44, 20),
            inventory_origin: SlotPosition::new(8, 51),
            width: 176,
            height: 133,
        }
    }

    /// Creates shulker box metadata.
    #[must_use]
    pub const fn shulker_box() -> Self {
        Self {
            screen_type: ScreenType::ShulkerBox,
            grid: Grid::new(3, SLOTS_PER_ROW),
            origin: SlotPosition::new(8, 18),
            inventory_origin: SlotPosition::new(8, 84),
            width: 176,
            height: 166,
        }
    }

    /// Returns the slot layout of this screen with the given secondary region.
    #[must_use]
    pub const fn layout(&self, secondary: SecondaryRegion) -> Layout {
        Layout::new(self.grid, secondary)
    }

    /// Returns the pixel position of slot `index`.
    ///
    /// Player inventory slots are laid out from `inventory_origin`, with the hotbar
    /// separated by [`HOTBAR_GAP`].
    #[must_use]
    pub fn slot_position(&self, index: usize, secondary: SecondaryRegion) -> Option<SlotPosition> {
        let layout = self.layout(secondary);
        if !layout.contains(index) {
            return None;
        }

        if layout.is_primary(index) {
            let columns = self.grid.columns();
            return Some(self.origin.offset(index % columns, index / columns));
        }

        let local = index - self.grid.total();
        let row = local / SLOTS_PER_ROW;
        let mut position = self.inventory_origin.offset(local % SLOTS_PER_ROW, row);
        if row == PLAYER_INVENTORY_ROWS {
            position.y += HOTBAR_GAP;
        }
        Some(position)
    }

    /// Returns the slot whose cell contains the pixel `(x, y)`.
    #[must_use]
    pub fn slot_at(&self, x: i32, y: i32, secondary: SecondaryRegion) -> Option<usize> {
        (0..self.layout(secondary).total()).find(|&index| {
            self.slot_position(index, secondary)
                .is_some_and(|position| position.cell_contains(x, y))
        })
    }
}
