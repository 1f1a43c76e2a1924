use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use futures::future::join_all;
use tokio::process::Command;
use tracing::{debug, error, info, warn};

use super::restore::{restore_script, restore_script_path, write_restore_script};
use super::rsync::{backup_dir_on_target, render_command, sync_command};
use super::{BackupJob, RunConfig};

const TIMESTAMP_FILE: &str = "timestamp.txt";
const DATE_LIST_FILE: &str = "backup_date_list.txt";
const DATE_LIST_HEADER: &str = "List of Backup date";

/// One rsync launch: a job paired with one of its targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncInvocation {
    pub job: String,
    pub target: PathBuf,
    pub argv: Vec<String>,
}

/// Hostname of this machine, resolved once per run and threaded through
/// every path that embeds it.
pub fn hostname() -> String {
    gethostname::gethostname().to_string_lossy().into_owned()
}

/// Expand a run plan into the full list of rsync invocations, job by job.
pub fn sync_invocations(run_config: &RunConfig, hostname: &str) -> Vec<SyncInvocation> {
    let mut invocations = Vec::with_capacity(run_config.sync_pair_count());
    for job in &run_config.jobs {
        for target in &job.targets {
            invocations.push(SyncInvocation {
                job: job.name.clone(),
                target: target.clone(),
                argv: sync_command(job, target, hostname),
            });
        }
    }
    invocations
}

/// Execute a run plan.
///
/// Dry runs print the commands and stop. Wet runs launch every rsync at once,
/// wait for the whole batch to finish, then write the per-drive records and
/// restore scripts. Child output goes straight to the inherited terminal so
/// rsync progress stays visible.
pub async fn execute(run_config: &RunConfig, dry_run: bool) {
    let hostname = hostname();
    let invocations = sync_invocations(run_config, &hostname);

    if dry_run {
        info!("Dry run mode enabled. The following commands would be executed:");
        for invocation in &invocations {
            println!("{}", render_command(&invocation.argv));
        }
        return;
    }

    if invocations.is_empty() {
        info!("No backup jobs to run.");
        return;
    }

    info!("Starting {} rsync transfer(s)", invocations.len());
    let mut children = Vec::new();
    for invocation in &invocations {
        debug!("Running: {}", render_command(&invocation.argv));
        let Some((program, args)) = invocation.argv.split_first() else {
            continue;
        };
        match Command::new(program).args(args).spawn() {
            Ok(child) => children.push((invocation, child)),
            Err(e) => error!(
                "Failed to launch rsync for configuration '{}' on {}: {}",
                invocation.job,
                invocation.target.display(),
                e
            ),
        }
    }

    let waits = children
        .into_iter()
        .map(|(invocation, mut child)| async move { (invocation, child.wait().await) });
    for (invocation, result) in join_all(waits).await {
        match result {
            Ok(status) if status.success() => debug!(
                "rsync finished for configuration '{}' on {}",
                invocation.job,
                invocation.target.display()
            ),
            Ok(status) => warn!(
                "rsync exited with {} for configuration '{}' on {}",
                status,
                invocation.job,
                invocation.target.display()
            ),
            Err(e) => warn!(
                "Failed to wait for rsync for configuration '{}': {}",
                invocation.job, e
            ),
        }
    }

    write_run_records(run_config, &hostname);
}

/// Per-drive records and restore scripts, written once the whole batch is
/// done. Failures here are logged and never abort the run.
fn write_run_records(run_config: &RunConfig, hostname: &str) {
    for target in run_config.unique_targets() {
        let backup_dir = backup_dir_on_target(target, hostname);
        if let Err(e) = write_timestamp(&backup_dir) {
            error!("Failed to write timestamp on {}: {}", target.display(), e);
        }
        if let Err(e) = append_backup_date(&backup_dir) {
            error!(
                "Failed to record backup date on {}: {}",
                target.display(),
                e
            );
        }
    }

    for job in &run_config.jobs {
        if !job.quick_restore_paths.is_empty() {
            info!("Creating restore scripts for configuration '{}'", job.name);
        }
        create_restore_scripts(job, hostname);
    }
}

/// Overwrite the drive's record of when it last saw a backup
fn write_timestamp(backup_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(backup_dir)?;
    let now = Local::now().format("%Y-%m-%d %H:%M:%S%.6f");
    fs::write(backup_dir.join(TIMESTAMP_FILE), now.to_string())
}

/// Append today to the drive's running list of backup dates
fn append_backup_date(backup_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(backup_dir)?;
    let path = backup_dir.join(DATE_LIST_FILE);
    if !path.exists() {
        fs::write(&path, DATE_LIST_HEADER)?;
    }
    let mut file = fs::OpenOptions::new().append(true).open(&path)?;
    write!(file, "\n{}", Local::now().format("%d_%m_%Y"))
}

fn create_restore_scripts(job: &BackupJob, hostname: &str) {
    for target in &job.targets {
        let backup_dir = backup_dir_on_target(target, hostname);
        for quick_restore_path in &job.quick_restore_paths {
            // the validator only admits descendants of the source
            let Ok(relative) = quick_restore_path.strip_prefix(&job.source) else {
                continue;
            };
            let Some(body) = restore_script(quick_restore_path, &job.source) else {
                continue;
            };
            let path = restore_script_path(&backup_dir, relative);
            if let Err(e) = write_restore_script(&path, &body) {
                error!("Failed to write restore script {}: {}", path.display(), e);
            }
        }
    }
}
