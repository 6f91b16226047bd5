//! # Steel GUI Utils
//!
//! Shared value types for the Steel GUI crates: resource locations and text components.
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

pub mod text;
pub mod types;

pub use text::{TextComponent, TextExt};
pub use types::{ResourceLocation, ResourceLocationError};
