use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use driveback::backup::{runner, rsync};
use driveback::cli::Cli;
use driveback::config::{self, ConfigPaths};
use driveback::logging;
use driveback::status;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Dispatch one invocation. Mode flags win over the default run, in the
/// order status, switch-on, switch-off.
async fn run(cli: Cli) -> Result<ExitCode> {
    let paths = ConfigPaths::resolve()?;

    if cli.status {
        return Ok(if status::is_switched_on(&paths)? {
            println!("Backup is switched on.");
            ExitCode::SUCCESS
        } else {
            println!("Backup is switched off.");
            ExitCode::from(2)
        });
    }

    if cli.switch_on {
        status::set_switched_on(&paths, true)?;
        info!("Backup is switched on.");
        return Ok(ExitCode::SUCCESS);
    }

    if cli.switch_off {
        status::set_switched_on(&paths, false)?;
        info!("Backup is switched off.");
        return Ok(ExitCode::SUCCESS);
    }

    if !status::is_switched_on(&paths)? {
        info!("Backup is switched off. Exiting.");
        return Ok(ExitCode::SUCCESS);
    }

    // a dry run may proceed without rsync since nothing gets executed
    if !rsync::ensure_rsync_available(cli.dry_run) && !cli.dry_run {
        return Ok(ExitCode::from(1));
    }

    let run_config = config::load_run_config(&paths)?;
    runner::execute(&run_config, cli.dry_run).await;
    Ok(ExitCode::SUCCESS)
}
