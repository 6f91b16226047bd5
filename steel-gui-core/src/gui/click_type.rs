//! Click type definitions for container interactions.

/// Special slot index indicating a click outside the inventory window.
pub const SLOT_CLICKED_OUTSIDE: i16 = -999;

/// The type of click action performed on a container slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ClickType {
    /// Normal left or right click to pick up or place items.
    Pickup = 0,
    /// Shift-click to quickly move items between container sections.
    QuickMove = 1,
    /// Number key (1-9) or offhand key (F) to swap with hotbar/offhand.
    Swap = 2,
    /// Middle-click in creative mode to clone the full stack.
    Clone = 3,
    /// Q key to throw items out of the inventory.
    Throw = 4,
    /// Drag across multiple slots to distribute items.
    QuickCraft = 5,
    /// Double-click to collect all matching items to cursor.
    PickupAll = 6,
}

impl ClickType {
    /// Converts a byte value to a `ClickType`.
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Pickup),
            1 => Some(Self::QuickMove),
            2 => Some(Self::Swap),
            3 => Some(Self::Clone),
            4 => Some(Self::Throw),
            5 => Some(Self::QuickCraft),
            6 => Some(Self::PickupAll),
            _ => None,
        }
    }

    /// Returns whether this click can pull items into other slots of the menu.
    #[must_use]
    pub const fn moves_between_slots(self) -> bool {
        matches!(self, Self::QuickMove | Self::QuickCraft | Self::PickupAll)
    }
}

/// The mouse button or action used in a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickAction {
    /// Left mouse button or primary action.
    Primary,
    /// Right mouse button or secondary action.
    Secondary,
}

impl ClickAction {
    /// Converts a button number to a `ClickAction`.
    #[must_use]
    pub fn from_button(button: i8) -> Self {
        if button == 0 {
            Self::Primary
        } else {
            Self::Secondary
        }
    }
}
