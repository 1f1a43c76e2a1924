//! Configuration module for driveback
//!
//! This module covers the whole path from disk to run plan:
//! - path resolution for the configuration directory
//! - the raw YAML document schema
//! - validation of that document into a [`RunConfig`](crate::backup::RunConfig)
//! - the diagnostics collected while validating

pub mod diagnostics;
pub mod document;
pub mod paths;
pub mod validate;

pub use paths::{ConfigPaths, CONFIG_DIR_ENV};
pub use validate::{validate_document, Validation};

use std::fs;

use crate::backup::RunConfig;
use crate::error::{DrivebackError, DrivebackResult};

/// Load, parse, and validate the configuration file for a run.
///
/// Filesystem problems reading or creating the file are hard errors. A file
/// that parses or validates badly is not: the findings are logged and the
/// surviving jobs (possibly none) are returned.
pub fn load_run_config(paths: &ConfigPaths) -> DrivebackResult<RunConfig> {
    let path = paths.ensure_config_file()?;
    let text = fs::read_to_string(&path).map_err(|e| {
        DrivebackError::Io(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let validation = match serde_yaml::from_str::<serde_yaml::Value>(&text) {
        Ok(document) => validate_document(&document),
        Err(e) => Validation::document_error(format!(
            "Yaml structure of the configuration file {} is not valid: {e}.",
            path.display()
        )),
    };
    validation.emit_all();
    Ok(validation.run_config)
}
