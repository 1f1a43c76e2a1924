//! On/off switch for the whole backup functionality.
//!
//! The switch lives in a tiny marker file next to the configuration. A
//! missing file counts as on, so a fresh installation backs up by default
//! and only an explicit switch-off stops it.

use std::fs;
use std::io;

use tracing::info;

use crate::config::ConfigPaths;
use crate::error::{DrivebackError, DrivebackResult};

const STATUS_ON: &str = "On";
const STATUS_OFF: &str = "Off";

/// Read the switch. Only a file whose first line is exactly `On`, or no file
/// at all, counts as on.
pub fn is_switched_on(paths: &ConfigPaths) -> DrivebackResult<bool> {
    match fs::read_to_string(paths.status_file()) {
        Ok(content) => Ok(content.lines().next() == Some(STATUS_ON)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("No backup status file found. Backups default to on.");
            Ok(true)
        }
        Err(e) => Err(DrivebackError::Io(format!(
            "Failed to read backup status {}: {}",
            paths.status_file().display(),
            e
        ))),
    }
}

/// Flip the switch, creating the configuration directory if needed.
pub fn set_switched_on(paths: &ConfigPaths, enabled: bool) -> DrivebackResult<()> {
    fs::create_dir_all(paths.base_dir()).map_err(|e| {
        DrivebackError::Io(format!("Failed to create configuration directory: {}", e))
    })?;
    let marker = if enabled { STATUS_ON } else { STATUS_OFF };
    fs::write(paths.status_file(), marker).map_err(|e| {
        DrivebackError::Io(format!(
            "Failed to write backup status {}: {}",
            paths.status_file().display(),
            e
        ))
    })
}
