//! Log file setup
//!
//! The terminal belongs to the UI, so logs only go to a file, and only when
//! `FLATVIEW_LOG` names one. Levels are filtered through `RUST_LOG`.

use std::fs::File;
use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file
pub const LOG_PATH_ENV: &str = "FLATVIEW_LOG";

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "flatview=info";

/// Install the file logger if `FLATVIEW_LOG` is set
///
/// Returns the log path in use, or `None` when logging is off.
pub fn init() -> color_eyre::Result<Option<PathBuf>> {
    let Some(log_path) = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from) else {
        return Ok(None);
    };

    let file = File::options().create(true).append(true).open(&log_path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file)),
        )
        .with(filter)
        .try_init()
        .map_err(|error| color_eyre::eyre::eyre!("{}", error))?;

    tracing::info!(path = %log_path.display(), "logging started");
    Ok(Some(log_path))
}
