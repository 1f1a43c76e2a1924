//! Command line interface definition.
//!
//! The binary is flag-driven rather than subcommand-driven: with no flags it
//! performs a backup run, and the mode flags below select the other
//! operations. When several flags are combined they are evaluated in a fixed
//! precedence order: `--status`, `--switch-on`, `--switch-off`, then the run
//! itself.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "driveback",
    version,
    about = "Back up local directories to external drives via rsync",
    long_about = "driveback reads a declarative YAML description of backup jobs \
                  (source directory, external drive targets, exclusions) and \
                  mirrors every source onto every available target in one \
                  concurrent rsync pass."
)]
pub struct Cli {
    /// Print whether backups are switched on and exit
    #[arg(long)]
    pub status: bool,

    /// Switch the backup functionality on and exit
    #[arg(long)]
    pub switch_on: bool,

    /// Switch the backup functionality off and exit
    #[arg(long)]
    pub switch_off: bool,

    /// Print the rsync commands a run would execute, without executing them
    #[arg(long)]
    pub dry_run: bool,
}
