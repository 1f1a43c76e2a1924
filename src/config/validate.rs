//! Turns a parsed YAML document into a validated run plan.
//!
//! Validation is strictly per job: a rejected job never sinks its neighbors,
//! and a missing drive never sinks its job as long as another listed drive is
//! present. The output is always a usable [`RunConfig`] (possibly empty) plus
//! the list of findings describing everything that was skipped on the way.
//!
//! Checks, in order:
//!
//! 1. document shape: the top level must be a mapping carrying
//!    `backup_configurations`, itself a mapping of job names to job specs
//! 2. per job: `source` and `list_of_harddrive` must be present and the
//!    source directory must exist
//! 3. per listed drive: drop the ones that are not mounted; reject the job
//!    when none survive
//! 4. exclusions and quick-restore entries: relative entries are anchored
//!    under the source, absolute entries must already point below it

use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::backup::{BackupJob, RunConfig};

use super::diagnostics::{Diagnostic, Severity};
use super::document::{JobSpec, TOP_LEVEL_KEY};

/// Result of validating one configuration document.
#[derive(Debug, Clone)]
pub struct Validation {
    pub run_config: RunConfig,
    pub diagnostics: Vec<Diagnostic>,
}

impl Validation {
    /// A document-level failure: no jobs, exactly one error finding.
    pub fn document_error(message: impl Into<String>) -> Self {
        Self {
            run_config: RunConfig::default(),
            diagnostics: vec![Diagnostic::error(message)],
        }
    }

    /// Forward every finding to the tracing subscriber.
    pub fn emit_all(&self) {
        for diagnostic in &self.diagnostics {
            diagnostic.emit();
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }
}

/// Validate a whole configuration document.
///
/// Jobs come back in document order so runs are reproducible from the file
/// alone.
pub fn validate_document(document: &Value) -> Validation {
    if document.is_null() {
        return Validation::document_error("No configuration found in the configuration file.");
    }
    if !document.is_mapping() {
        return Validation::document_error(
            "Yaml structure of the configuration file is not valid: expected a mapping at the top level.",
        );
    }

    let Some(jobs_value) = document.get(TOP_LEVEL_KEY).filter(|v| !v.is_null()) else {
        return Validation::document_error(
            "No backup configurations found in the configuration file.",
        );
    };
    let Some(jobs) = jobs_value.as_mapping() else {
        return Validation::document_error(format!(
            "Yaml structure of the configuration file is not valid: '{TOP_LEVEL_KEY}' must map job names to job specs.",
        ));
    };

    let mut run_config = RunConfig::default();
    let mut diagnostics = Vec::new();

    for (name, spec) in jobs {
        let Some(name) = name.as_str() else {
            diagnostics.push(Diagnostic::error(format!(
                "Backup configuration name {:?} is not a string. Configuration skipped.",
                name
            )));
            continue;
        };
        if let Some(job) = validate_job(name, spec, &mut diagnostics) {
            run_config.jobs.push(job);
        }
    }

    Validation {
        run_config,
        diagnostics,
    }
}

fn validate_job(name: &str, spec: &Value, diagnostics: &mut Vec<Diagnostic>) -> Option<BackupJob> {
    let spec: JobSpec = match serde_yaml::from_value(spec.clone()) {
        Ok(spec) => spec,
        Err(e) => {
            diagnostics.push(Diagnostic::error(format!(
                "Invalid entry for backup configuration '{name}': {e}. Configuration skipped."
            )));
            return None;
        }
    };

    let Some(source) = spec.source else {
        diagnostics.push(Diagnostic::error(format!(
            "Missing key 'source' for backup configuration '{name}'. Configuration skipped."
        )));
        return None;
    };
    if !source.exists() {
        diagnostics.push(Diagnostic::error(format!(
            "Source folder {} does not exist for configuration '{name}'. Configuration skipped.",
            source.display()
        )));
        return None;
    }

    let Some(listed_targets) = spec.list_of_harddrive else {
        diagnostics.push(Diagnostic::error(format!(
            "Missing key 'list_of_harddrive' for backup configuration '{name}'. Configuration skipped."
        )));
        return None;
    };
    let mut targets = Vec::new();
    for target in listed_targets {
        if target.exists() {
            targets.push(target);
        } else {
            diagnostics.push(Diagnostic::error(format!(
                "Harddrive {} does not exist for configuration '{name}'. Harddrive skipped.",
                target.display()
            )));
        }
    }
    if targets.is_empty() {
        diagnostics.push(Diagnostic::error(format!(
            "No harddrive available for configuration '{name}'. Configuration skipped."
        )));
        return None;
    }

    let excluded_paths = resolve_source_subpaths(
        &spec.list_of_excluded_folders,
        "list_of_excluded_folders",
        &source,
        name,
        diagnostics,
    );
    let quick_restore_paths = resolve_source_subpaths(
        &spec.quick_restore_path,
        "quick_restore_path",
        &source,
        name,
        diagnostics,
    );

    Some(BackupJob {
        name: name.to_string(),
        source,
        targets,
        excluded_paths,
        quick_restore_paths,
    })
}

/// Resolve a list of paths that must all live below the job's source.
///
/// Relative entries are joined onto the source. Absolute entries must be
/// strict descendants of it; anything else is dropped with a warning. The
/// entries themselves are not required to exist.
fn resolve_source_subpaths(
    field: &Option<Option<Vec<PathBuf>>>,
    key: &str,
    source: &Path,
    name: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<PathBuf> {
    let entries = match field {
        None => return Vec::new(),
        Some(Some(entries)) if !entries.is_empty() => entries,
        Some(_) => {
            diagnostics.push(Diagnostic::warning(format!(
                "'{key}' specified but empty for configuration '{name}'."
            )));
            return Vec::new();
        }
    };

    let mut resolved = Vec::new();
    for entry in entries {
        if entry.is_relative() {
            resolved.push(source.join(entry));
        } else if entry.starts_with(source) && entry.as_path() != source {
            resolved.push(entry.clone());
        } else {
            diagnostics.push(Diagnostic::warning(format!(
                "{} is not a subpath of source {} for configuration '{name}'. Entry skipped.",
                entry.display(),
                source.display()
            )));
        }
    }
    resolved
}
