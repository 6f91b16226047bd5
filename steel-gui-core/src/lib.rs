//! # Steel GUI Core
//!
//! Layout and interaction core for custom inventory screens: slot bookkeeping,
//! screen geometry, widgets and click/change event dispatch.
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    missing_docs,
    clippy::unwrap_used
)]
#![allow(
    clippy::single_call_fn,
    clippy::multiple_inherent_impl,
    clippy::shadow_unrelated,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata
)]

pub mod gui;
pub mod layout;
pub mod screen;

pub use gui::{Gui, GuiError};
pub use layout::{
    ClaimAuthority, Grid, Layout, LayoutError, SecondaryRegion, SlotGroup, SlotManager,
};
pub use screen::{ScreenInfo, ScreenRegistry, ScreenType, SlotPosition};
