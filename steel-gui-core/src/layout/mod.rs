//! Slot layout: grid geometry and slot availability bookkeeping.

mod error;
mod grid;
mod slot_manager;

pub use error::LayoutError;
pub use grid::{
    Grid, HOTBAR_SIZE, Layout, PLAYER_INVENTORY_ROWS, PLAYER_INVENTORY_SIZE, SLOTS_PER_ROW,
    SecondaryRegion,
};
pub use slot_manager::{ClaimAuthority, SlotGroup, SlotManager};
