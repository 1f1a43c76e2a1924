//! driveback - config-driven backup of local directories to external drives
//!
//! driveback reads one YAML file describing backup jobs (a source directory,
//! the external drives it should land on, optional exclusions and
//! quick-restore paths), validates it into a run plan, and mirrors every
//! source onto every available drive with one rsync process per pair.
//!
//! # Architecture
//!
//! - `cli`: command line flags and their precedence
//! - `config`: path resolution, the YAML schema, and validation into a run plan
//! - `backup`: the run plan model, rsync command building, the concurrent
//!   runner, and restore script generation
//! - `status`: the persistent on/off switch
//! - `error`: shared error types
//! - `logging`: tracing subscriber setup

pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod status;

pub use error::{DrivebackError, DrivebackResult};
