//! Identity discovery: scan the table root for loot-table files.

use std::path::Path;

use tracing::info;
use walkdir::WalkDir;

use crate::catalog::{FolderKind, TableIdentity};
use crate::constants::catalog::{BLOCKS_DIR, ENTITIES_DIR, TABLE_EXTENSION};
use crate::errors::ShuffleError;
use crate::types::TablePath;

/// True if the path has the loot-table extension (case-insensitive).
pub fn is_table_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(TABLE_EXTENSION))
        .unwrap_or(false)
}

/// Discover every loot table under `root`, in stable sorted path order.
///
/// Identity paths keep the root folder name as their first component
/// (e.g. `loot_tables/entities/zombie.json`), matching where the table
/// lands inside the output bundle. Tables whose direct parent is the
/// `blocks` or `entities` folder get the matching folder tag; deeper
/// nesting (e.g. `entities/sheep/white.json`) is tagged by its top-level
/// folder as well, since the tag drives entity-vs-not decisions only.
pub fn discover_tables(root: &Path) -> Result<Vec<TableIdentity>, ShuffleError> {
    if !root.is_dir() {
        return Err(ShuffleError::Configuration(format!(
            "loot tables folder '{}' is not accessible or does not exist",
            root.display()
        )));
    }
    let root_name = root
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("loot_tables")
        .to_string();

    let mut identities = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && is_table_file(entry.path()))
    {
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|_| {
                ShuffleError::Configuration(format!(
                    "discovered file '{}' escapes the table root",
                    entry.path().display()
                ))
            })?;
        let folder = match relative.iter().next().and_then(|c| c.to_str()) {
            Some(BLOCKS_DIR) => FolderKind::Blocks,
            Some(ENTITIES_DIR) => FolderKind::Entities,
            _ => FolderKind::Other,
        };
        let mut path: TablePath = root_name.clone();
        for component in relative.iter() {
            path.push('/');
            path.push_str(&component.to_string_lossy());
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        identities.push(TableIdentity { path, name, folder });
    }
    identities.sort_by(|a, b| a.path.cmp(&b.path));
    info!(count = identities.len(), root = %root.display(), "discovered loot tables");
    Ok(identities)
}
