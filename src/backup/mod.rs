pub mod restore;
pub mod rsync;
pub mod runner;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One validated backup job: a source directory mirrored onto external drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupJob {
    pub name: String,
    pub source: PathBuf,
    /// Drives that were actually present at validation time.
    pub targets: Vec<PathBuf>,
    /// Absolute paths under `source` that rsync must skip.
    pub excluded_paths: Vec<PathBuf>,
    /// Absolute paths under `source` that get a restore helper script.
    pub quick_restore_paths: Vec<PathBuf>,
}

/// Everything a single invocation will do, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub jobs: Vec<BackupJob>,
}

impl RunConfig {
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Number of (job, target) pairs the run fans out to.
    pub fn sync_pair_count(&self) -> usize {
        self.jobs.iter().map(|job| job.targets.len()).sum()
    }

    /// Targets in first-appearance order with duplicates removed.
    ///
    /// Per-drive records are written once even when several jobs share a
    /// drive.
    pub fn unique_targets(&self) -> Vec<&Path> {
        let mut seen = HashSet::new();
        let mut targets = Vec::new();
        for job in &self.jobs {
            for target in &job.targets {
                if seen.insert(target.as_path()) {
                    targets.push(target.as_path());
                }
            }
        }
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(name: &str, targets: &[&str]) -> BackupJob {
        BackupJob {
            name: name.to_string(),
            source: PathBuf::from("/home/user").join(name),
            targets: targets.iter().map(PathBuf::from).collect(),
            excluded_paths: Vec::new(),
            quick_restore_paths: Vec::new(),
        }
    }

    #[test]
    fn sync_pair_count_sums_over_jobs() {
        let config = RunConfig {
            jobs: vec![job("docs", &["/media/a", "/media/b"]), job("music", &["/media/a"])],
        };
        assert_eq!(config.sync_pair_count(), 3);
        assert!(!config.is_empty());
    }

    #[test]
    fn unique_targets_dedupes_across_jobs_in_order() {
        let config = RunConfig {
            jobs: vec![
                job("docs", &["/media/b", "/media/a"]),
                job("music", &["/media/a", "/media/c"]),
            ],
        };
        let targets = config.unique_targets();
        assert_eq!(
            targets,
            vec![
                Path::new("/media/b"),
                Path::new("/media/a"),
                Path::new("/media/c"),
            ]
        );
    }

    #[test]
    fn empty_config_has_no_pairs() {
        let config = RunConfig::default();
        assert!(config.is_empty());
        assert_eq!(config.sync_pair_count(), 0);
        assert!(config.unique_targets().is_empty());
    }
}
