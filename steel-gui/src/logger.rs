//! Installs the `tracing` subscriber used by the preview tool.

use std::env;

use tracing_subscriber::{
    EnvFilter, fmt,
    layer::SubscriberExt,
    registry,
    util::{SubscriberInitExt, TryInitError},
};

/// Builds the filter string from the configured level and `RUST_LOG`.
///
/// Directives from the environment are appended, so they win over the default.
#[must_use]
pub fn filter_directives(default_level: &str, env_filter: Option<&str>) -> String {
    let mut filter = default_level.trim().to_owned();
    if let Some(env_filter) = env_filter.filter(|f| !f.trim().is_empty()) {
        filter.push(',');
        filter.push_str(env_filter.trim());
    }
    filter
}

/// Installs a compact `fmt` subscriber filtered by `default_level` and `RUST_LOG`.
///
/// `log` records from the library crates are forwarded through the subscriber.
pub fn init(default_level: &str) -> Result<(), TryInitError> {
    let env_filter = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = filter_directives(default_level, env_filter.as_deref());

    registry()
        .with(EnvFilter::new(filter))
        .with(fmt::layer().compact().with_target(false))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_only() {
        assert_eq!(filter_directives("info", None), "info");
        assert_eq!(filter_directives(" debug ", Some("  ")), "debug");
    }

    #[test]
    fn test_env_appended() {
        assert_eq!(
            filter_directives("info", Some("steel_gui_core=trace")),
            "info,steel_gui_core=trace"
        );
    }
}
