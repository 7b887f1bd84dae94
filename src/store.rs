//! Content store seam: load parsed table trees, collect revised ones.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;

use crate::catalog::{Partition, TableIdentity};
use crate::errors::ShuffleError;
use crate::planner::Assignment;
use crate::revision::{RevisionContext, revise};
use crate::types::TablePath;

/// Backend for reading original table contents and accepting revised ones.
///
/// Load and parse failures must surface as [`ShuffleError::ContentLoad`]
/// so the run can abort without producing a partial bundle.
pub trait ContentStore {
    /// Load the parsed content tree for one table.
    fn load(&self, table: &TableIdentity) -> Result<Value, ShuffleError>;
    /// Accept the revised content for `owner`, for eventual packaging.
    fn accept(&mut self, owner: &TableIdentity, revised: Value) -> Result<(), ShuffleError>;
}

/// Filesystem-backed store reading tables relative to a base folder.
///
/// Identity paths include the table-root folder name, so the base folder
/// is the root's parent (usually the working directory).
pub struct FsContentStore {
    base: PathBuf,
    revised: IndexMap<TablePath, Value>,
}

impl FsContentStore {
    /// Create a store resolving identity paths under `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            revised: IndexMap::new(),
        }
    }

    /// Consume the store, yielding accepted content in acceptance order.
    pub fn into_revised(self) -> IndexMap<TablePath, Value> {
        self.revised
    }
}

impl ContentStore for FsContentStore {
    fn load(&self, table: &TableIdentity) -> Result<Value, ShuffleError> {
        let path = self.base.join(&table.path);
        let raw = fs::read_to_string(&path).map_err(|err| ShuffleError::ContentLoad {
            path: table.path.clone(),
            reason: err.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|err| ShuffleError::ContentLoad {
            path: table.path.clone(),
            reason: err.to_string(),
        })
    }

    fn accept(&mut self, owner: &TableIdentity, revised: Value) -> Result<(), ShuffleError> {
        self.revised.insert(owner.path.clone(), revised);
        Ok(())
    }
}

/// In-memory store used by tests and ad hoc fixtures.
#[derive(Default)]
pub struct InMemoryStore {
    contents: IndexMap<TablePath, Value>,
    revised: IndexMap<TablePath, Value>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register original content for one table path.
    pub fn insert(&mut self, path: impl Into<TablePath>, content: Value) {
        self.contents.insert(path.into(), content);
    }

    /// Consume the store, yielding accepted content in acceptance order.
    pub fn into_revised(self) -> IndexMap<TablePath, Value> {
        self.revised
    }
}

impl ContentStore for InMemoryStore {
    fn load(&self, table: &TableIdentity) -> Result<Value, ShuffleError> {
        self.contents
            .get(&table.path)
            .cloned()
            .ok_or_else(|| ShuffleError::ContentLoad {
                path: table.path.clone(),
                reason: "no content registered".to_string(),
            })
    }

    fn accept(&mut self, owner: &TableIdentity, revised: Value) -> Result<(), ShuffleError> {
        self.revised.insert(owner.path.clone(), revised);
        Ok(())
    }
}

/// Run every assigned pair through the revision rules.
///
/// Loads each donor's tree, revises it for its owner, and hands the
/// result back to the store. Any load or parse failure aborts the whole
/// pass; nothing is considered packaged until every pair succeeded.
pub fn revise_assignment<S: ContentStore>(
    assignment: &Assignment,
    partition: &Partition,
    store: &mut S,
) -> Result<(), ShuffleError> {
    for (owner, donor) in assignment {
        let tree = store.load(donor)?;
        let ctx = RevisionContext {
            owner,
            donor,
            partition,
        };
        store.accept(owner, revise(&ctx, tree))?;
    }
    Ok(())
}

/// Helper for anchoring identity paths on disk: the parent of `root`.
pub fn base_of(root: &Path) -> PathBuf {
    root.parent().map(Path::to_path_buf).unwrap_or_default()
}
