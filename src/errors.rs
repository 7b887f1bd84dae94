use std::io;

use thiserror::Error;

use crate::types::{TableName, TablePath};

/// Error type for configuration, planning, and content-handling failures.
///
/// Every variant is fatal for the run: the shuffle either completes fully
/// or produces no output bundle at all.
#[derive(Debug, Error)]
pub enum ShuffleError {
    #[error(
        "tables listed on both the {first_list} and {second_list} lists: {}",
        tables.join(", ")
    )]
    CategoryConflict {
        first_list: &'static str,
        second_list: &'static str,
        tables: Vec<TableName>,
    },
    #[error("owner pool ({owners}) and donor pool ({donors}) diverged before assignment")]
    PoolMismatch { owners: usize, donors: usize },
    #[error("loot table '{path}' could not be loaded: {reason}")]
    ContentLoad { path: TablePath, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
}
