//! File-backed tracing setup. The terminal is owned by the TUI, so log
//! output never goes to stdout or stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Default log location: `<cache_dir>/chefmenu/chefmenu.log`.
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("chefmenu").join("chefmenu.log")
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured level. Returns the file being written to.
pub fn init_tracing(config: &LoggingConfig, override_path: Option<&Path>) -> std::io::Result<PathBuf> {
    let path = override_path
        .map(Path::to_path_buf)
        .or_else(|| config.file.clone())
        .unwrap_or_else(default_log_path);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .init();

    tracing::info!(path = %path.display(), "Logging initialized");
    Ok(path)
}
