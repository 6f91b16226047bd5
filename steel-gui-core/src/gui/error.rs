use thiserror::Error;

use crate::screen::ScreenType;

/// Errors raised while building or interacting with a [`Gui`](super::Gui).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuiError {
    /// The screen type has no layout in the registry.
    #[error("screen {0:?} is not registered")]
    UnknownScreen(ScreenType),
    /// A widget was placed outside the layout.
    #[error("slot {index} is outside the {size} slot layout")]
    OutOfBounds {
        /// The requested slot.
        index: usize,
        /// The number of slots in the layout.
        size: usize,
    },
    /// A widget was placed on a slot that already holds one.
    #[error("slot {0} already holds a widget")]
    Occupied(usize),
    /// Automatic placement ran out of free slots.
    #[error("no free slot left")]
    NoSpace,
    /// The client sent a slot index the menu doesn't have.
    #[error("invalid slot index {0}")]
    InvalidSlot(i16),
    /// Text was submitted for a slot without a text input.
    #[error("slot {0} does not hold a text input")]
    NotAnInput(usize),
}
