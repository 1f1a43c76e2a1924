use std::path::{Path, PathBuf};

use tracing::{error, warn};

use super::BackupJob;

const SYNC_PROGRAM: &str = "rsync";

/// Fixed options for every backup invocation: mirror semantics (delete before
/// transfer), checksum comparison, and human-readable progress on the
/// inherited terminal.
pub const SYNC_OPTIONS: [&str; 12] = [
    "--mkpath",
    "--delete",
    "--delete-before",
    "--update",
    "--progress",
    "-t",
    "-a",
    "-r",
    "-v",
    "-E",
    "-c",
    "-h",
];

/// Per-host backup directory on an external drive
pub fn backup_dir_on_target(target: &Path, hostname: &str) -> PathBuf {
    target.join("Backup").join(hostname)
}

/// Build the full rsync argv for one (job, target) pair
pub fn sync_command(job: &BackupJob, target: &Path, hostname: &str) -> Vec<String> {
    let mut argv = Vec::with_capacity(SYNC_OPTIONS.len() + job.excluded_paths.len() + 3);
    argv.push(SYNC_PROGRAM.to_string());
    argv.extend(SYNC_OPTIONS.iter().map(|opt| opt.to_string()));

    for exclude in &job.excluded_paths {
        argv.push(format!("--exclude={}", exclude.display()));
    }

    argv.push(job.source.display().to_string());
    argv.push(backup_dir_on_target(target, hostname).display().to_string());
    argv
}

/// Render an argv the way a user would type it
pub fn render_command(argv: &[String]) -> String {
    argv.join(" ")
}

/// Check that rsync can be found on the PATH.
///
/// A dry run only warns when it is missing, since nothing will be executed.
/// A wet run logs an error; the caller is expected to abort.
pub fn ensure_rsync_available(dry_run: bool) -> bool {
    if which::which(SYNC_PROGRAM).is_ok() {
        return true;
    }

    let message = "rsync not found in PATH. Consider installing rsync with 'sudo apt-get install rsync'.";
    if dry_run {
        warn!("{}", message);
    } else {
        error!("{}", message);
    }
    false
}
