use std::path::PathBuf;

use crate::constants::catalog::DEFAULT_TABLE_ROOT;
use crate::constants::pack::DEFAULT_OUTPUT_DIR;
use crate::types::SeedText;

/// Top-level shuffle configuration.
#[derive(Clone, Debug)]
pub struct ShuffleConfig {
    /// Folder holding the extracted loot tables.
    pub table_root: PathBuf,
    /// Folder the category list files are read from.
    pub config_dir: PathBuf,
    /// Folder the datapack bundle is written into.
    pub output_dir: PathBuf,
    /// User seed text; `None` means a system-random, non-reproducible run.
    pub seed_text: Option<SeedText>,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            table_root: PathBuf::from(DEFAULT_TABLE_ROOT),
            config_dir: PathBuf::from("."),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed_text: None,
        }
    }
}
