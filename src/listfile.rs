//! Category list files: one table name per line, `#` comments allowed.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::constants::catalog::COMMENT_MARKER;
use crate::errors::ShuffleError;
use crate::types::TableName;

/// Load a category list, stripping blank lines and comment lines.
///
/// A missing file is treated as an empty list with a warning, so a table
/// set can be shuffled with no customization at all. An unreadable file
/// that does exist is an error.
pub fn load_list(path: &Path) -> Result<Vec<TableName>, ShuffleError> {
    if !path.is_file() {
        warn!(path = %path.display(), "category list not found; using an empty list");
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)?;
    Ok(parse_list(&raw))
}

/// Parse list content that has already been read into memory.
pub fn parse_list(raw: &str) -> Vec<TableName> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parse_list_strips_blanks_and_comments() {
        let raw = "# progression-critical drops\n\ndiamond_ore.json\n  ancient_debris.json  \n   # indented comment\n";
        assert_eq!(
            parse_list(raw),
            vec!["diamond_ore.json".to_string(), "ancient_debris.json".to_string()]
        );
    }

    #[test]
    fn load_list_missing_file_is_empty() {
        let temp = tempdir().unwrap();
        let loaded = load_list(&temp.path().join("nope.config")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn load_list_reads_entries_in_order() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bottlenecks.config");
        fs::write(&path, "b.json\na.json\n").unwrap();
        assert_eq!(
            load_list(&path).unwrap(),
            vec!["b.json".to_string(), "a.json".to_string()]
        );
    }
}
