//! Raw shape of the YAML configuration document.
//!
//! These types mirror what users actually write, before any validation. The
//! document is a mapping with one well-known top-level key:
//!
//! ```yaml
//! backup_configurations:
//!   documents:
//!     source: /home/user/Documents
//!     list_of_harddrive:
//!       - /media/user/usb-a
//!     list_of_excluded_folders:
//!       - node_modules
//!     quick_restore_path:
//!       - letters
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Deserializer};

/// Top-level key holding the map of job name to job spec.
pub const TOP_LEVEL_KEY: &str = "backup_configurations";

/// One job entry as written in the file.
///
/// Every field is optional at this stage. The validator decides which
/// omissions reject the job and which only produce a warning.
#[derive(Debug, Clone, Deserialize)]
pub struct JobSpec {
    #[serde(default)]
    pub source: Option<PathBuf>,

    #[serde(default)]
    pub list_of_harddrive: Option<Vec<PathBuf>>,

    /// `None` = key absent, `Some(None)` = explicit null, `Some(Some(_))` = list.
    #[serde(default, deserialize_with = "nullable_list")]
    pub list_of_excluded_folders: Option<Option<Vec<PathBuf>>>,

    #[serde(default, deserialize_with = "nullable_list")]
    pub quick_restore_path: Option<Option<Vec<PathBuf>>>,
}

/// Keeps "key present but null" distinguishable from "key absent".
fn nullable_list<'de, D>(deserializer: D) -> Result<Option<Option<Vec<PathBuf>>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<PathBuf>>::deserialize(deserializer).map(Some)
}
