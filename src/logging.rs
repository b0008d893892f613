//! Logging initialization for the issueblog CLI.
//!
//! Uses `tracing` with `tracing-subscriber`. Log lines go to stderr so that
//! stdout only carries the run summary. The level can be controlled via the
//! `RUST_LOG` environment variable.
//!
//! ```bash
//! # Show every tracker request
//! RUST_LOG=issueblog_github=debug issueblog main "$TOKEN" octocat/blog
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "issueblog=info,issueblog_site=info,issueblog_github=warn,octocrab=error";
const QUIET_FILTER: &str = "issueblog=warn,issueblog_site=warn,issueblog_github=warn,octocrab=error";

/// Initialize the logging subsystem.
///
/// `RUST_LOG` overrides the built-in filter when set.
pub fn init_logging(quiet: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = if quiet { QUIET_FILTER } else { DEFAULT_FILTER };
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
