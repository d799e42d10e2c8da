pub mod format;
pub mod paths;

use std::sync::Once;

use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "budget_engine=info";

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    init_tracing_with(None);
}

/// Same as [`init_tracing`] but adds an extra filter directive (for example
/// the `log_filter` from [`crate::config::Config`]). `RUST_LOG` still applies.
pub fn init_tracing_with(directive: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        for raw in std::iter::once(DEFAULT_DIRECTIVE).chain(directive) {
            match raw.parse::<Directive>() {
                Ok(parsed) => filter = filter.add_directive(parsed),
                Err(err) => eprintln!("ignoring invalid log directive `{raw}`: {err}"),
            }
        }

        // Another subscriber may already be installed by the host application.
        if fmt().with_env_filter(filter).try_init().is_ok() {
            tracing::info!("Budget Engine tracing initialized.");
        }
    });
}
