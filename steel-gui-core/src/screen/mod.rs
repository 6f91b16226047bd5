//! Screen types and their slot geometry.

mod registry;
mod screen_info;
mod screen_type;

pub use registry::{ScreenRegistry, ScreenRegistryBuilder};
pub use screen_info::{HOTBAR_GAP, SLOT_SIZE, ScreenInfo, SlotPosition};
pub use screen_type::ScreenType;
