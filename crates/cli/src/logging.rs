//! Logging setup
//!
//! Narration goes to stderr so prompts and the final report own stdout.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "checkout=info,checkout_core=info";

/// Install the global subscriber
///
/// # Environment Variables
///
/// - `RUST_LOG`: filter directives (default: `checkout=info,checkout_core=info`)
/// - `CHECKOUT_LOG_FORMAT`: `json` for structured output, anything else for pretty
pub fn init(format: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .context("Failed to create env filter")?;

    match format {
        "json" => {
            // Machine-readable: one JSON object per event
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install JSON subscriber")?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install subscriber")?;
        }
    }

    Ok(())
}
