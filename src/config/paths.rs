//! Path management for driveback
//!
//! Resolves where the configuration file and the on/off status marker live.
//!
//! ## Path Resolution Order
//!
//! 1. `DRIVEBACK_CONFIG_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `dirs`, e.g.
//!    `~/.config/driveback` on Linux

use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{DrivebackError, DrivebackResult};

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "DRIVEBACK_CONFIG_DIR";

const APP_DIR: &str = "driveback";
const CONFIG_FILE: &str = "config.yaml";
const STATUS_FILE: &str = "backup_status.txt";

/// Manages all paths used by driveback
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Base directory for all driveback state
    base_dir: PathBuf,
}

impl ConfigPaths {
    /// Resolve the configuration directory for this invocation.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform configuration
    /// directory cannot be determined.
    pub fn resolve() -> DrivebackResult<Self> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            let config_root = dirs::config_dir().ok_or_else(|| {
                DrivebackError::Config("could not determine the user configuration directory".into())
            })?;
            config_root.join(APP_DIR)
        };

        Ok(Self { base_dir })
    }

    /// Create ConfigPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/driveback/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the YAML job configuration file
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE)
    }

    /// Get the path to the on/off status marker file
    pub fn status_file(&self) -> PathBuf {
        self.base_dir.join(STATUS_FILE)
    }

    /// Ensure the configuration file exists, creating it empty if absent.
    ///
    /// A fresh file is created with permissions restricted to the owner so
    /// that backup source listings stay private.
    pub fn ensure_config_file(&self) -> DrivebackResult<PathBuf> {
        let path = self.config_file();
        if path.exists() {
            return Ok(path);
        }

        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            DrivebackError::Io(format!("Failed to create configuration directory: {}", e))
        })?;

        match create_empty_restricted(&path) {
            Ok(()) => {
                info!("Created empty configuration file: {}", path.display());
                Ok(path)
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(path),
            Err(e) => Err(DrivebackError::Io(format!(
                "Failed to create configuration file {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(unix)]
fn create_empty_restricted(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::OpenOptionsExt;

    std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)
        .map(|_| ())
}

#[cfg(not(unix))]
fn create_empty_restricted(path: &Path) -> io::Result<()> {
    std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map(|_| ())
}
