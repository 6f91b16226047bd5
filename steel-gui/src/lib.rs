//! # Steel GUI
//!
//! Configuration, json5 screen definitions and tooling on top of `steel-gui-core`.
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

/// Library configuration.
pub mod config;
/// Declarative screen definitions.
pub mod definition;
/// Logging setup.
pub mod logger;
/// Text rendering of screens.
pub mod preview;

pub use config::{CONFIG_PATH, ConfigError, GuiConfig};
pub use definition::{DefinitionError, DefinitionStore, GuiDefinition};
