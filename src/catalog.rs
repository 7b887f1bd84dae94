//! Table classification and pool partitioning.
//!
//! Raw category lists plus the discovered table set become four disjoint
//! category sets and the working pools the planner draws from. A table
//! name appearing on more than one special list is a fatal configuration
//! conflict, caught here before any assignment work happens.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::catalog::{
    BLOCKERS_FILE, BOTTLENECKS_FILE, EXCLUSIONS_FILE, TWO_BLOCK_OBJECTS_FILE,
};
use crate::errors::ShuffleError;
use crate::listfile::load_list;
use crate::types::{TableName, TablePath};

/// Which sub-folder of the table root a table was discovered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FolderKind {
    /// Direct child of the `blocks` folder.
    Blocks,
    /// Direct child of the `entities` folder.
    Entities,
    /// Anything else (chests, gameplay, ...).
    Other,
}

/// One discovered loot table: its relative path, base name, and folder tag.
///
/// Identities are discovered once per run and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableIdentity {
    /// Path relative to the folder holding the table root.
    /// Example: `loot_tables/entities/zombie.json`
    pub path: TablePath,
    /// Base file name. Example: `zombie.json`
    pub name: TableName,
    /// Sub-folder classification tag.
    pub folder: FolderKind,
}

impl TableIdentity {
    /// Convenience constructor used by tests and in-memory fixtures.
    pub fn new(path: impl Into<TablePath>, folder: FolderKind) -> Self {
        let path = path.into();
        let name = path
            .rsplit('/')
            .next()
            .unwrap_or(path.as_str())
            .to_string();
        Self { path, name, folder }
    }
}

/// Category a table name belongs to (at most one).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Never participates in the shuffle.
    Excluded,
    /// Donor resolved before the general pool; never lands on a blocker.
    Bottleneck,
    /// Must not receive bottleneck-tier content.
    Blocker,
    /// Everything else.
    Normal,
}

/// The four raw category lists, in file order.
#[derive(Clone, Debug, Default)]
pub struct CategoryLists {
    /// Tables left out of the shuffle entirely.
    pub excluded: Vec<TableName>,
    /// Tables whose contents are assigned away before the general pass.
    pub bottlenecks: Vec<TableName>,
    /// Tables that must not carry bottleneck drops.
    pub blockers: Vec<TableName>,
    /// Doors, beds, and tall flowers (positional-check pruning tag).
    pub two_block_objects: Vec<TableName>,
}

impl CategoryLists {
    /// Load all four lists from their conventional file names under `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ShuffleError> {
        Ok(Self {
            excluded: load_list(&dir.join(EXCLUSIONS_FILE))?,
            bottlenecks: load_list(&dir.join(BOTTLENECKS_FILE))?,
            blockers: load_list(&dir.join(BLOCKERS_FILE))?,
            two_block_objects: load_list(&dir.join(TWO_BLOCK_OBJECTS_FILE))?,
        })
    }

    /// Category of a single table name under these lists.
    pub fn categorize(&self, name: &str) -> Category {
        if self.excluded.iter().any(|n| n == name) {
            Category::Excluded
        } else if self.bottlenecks.iter().any(|n| n == name) {
            Category::Bottleneck
        } else if self.blockers.iter().any(|n| n == name) {
            Category::Blocker
        } else {
            Category::Normal
        }
    }

    /// Verify the three special lists are pairwise disjoint.
    ///
    /// Any overlap is a fatal configuration conflict reporting every
    /// colliding table name for the offending pair of lists.
    pub fn check_conflicts(&self) -> Result<(), ShuffleError> {
        let pairs: [(&[TableName], &[TableName], &'static str, &'static str); 3] = [
            (&self.excluded, &self.bottlenecks, "exclusions", "bottlenecks"),
            (&self.excluded, &self.blockers, "exclusions", "blockers"),
            (&self.bottlenecks, &self.blockers, "bottlenecks", "blockers"),
        ];
        for (first, second, first_list, second_list) in pairs {
            let second_set: HashSet<&TableName> = second.iter().collect();
            let mut tables: Vec<TableName> = first
                .iter()
                .filter(|name| second_set.contains(name))
                .cloned()
                .collect();
            if !tables.is_empty() {
                tables.sort();
                tables.dedup();
                return Err(ShuffleError::CategoryConflict {
                    first_list,
                    second_list,
                    tables,
                });
            }
        }
        Ok(())
    }
}

/// Working pools and tag sets produced by partitioning.
#[derive(Clone, Debug, Default)]
pub struct Partition {
    /// Tables still eligible to receive an assignment (blockers held back).
    pub owners: Vec<TableIdentity>,
    /// Tables still eligible to donate their contents.
    pub donors: Vec<TableIdentity>,
    /// Bottleneck donors, assigned before the general pool, in list order.
    pub bottleneck_queue: Vec<TableIdentity>,
    /// Blocker owners, merged into the owner pool after the bottleneck pass.
    pub blocker_holdback: Vec<TableIdentity>,
    /// Base names of tables discovered under the `entities` folder.
    pub entity_tables: HashSet<TableName>,
    /// Base names of tables discovered under the `blocks` folder.
    pub block_tables: HashSet<TableName>,
    /// Base names on the two-block objects list.
    pub two_block_objects: HashSet<TableName>,
}

/// Split the discovered table set into category sets and working pools.
///
/// Fails with [`ShuffleError::CategoryConflict`] before touching any pool
/// when the special lists overlap. Excluded tables are logged and dropped;
/// folder tagging (blocks/entities) happens regardless of category so the
/// revision rules can see excluded neighbors too.
pub fn partition(
    identities: &[TableIdentity],
    lists: &CategoryLists,
) -> Result<Partition, ShuffleError> {
    lists.check_conflicts()?;

    let mut split = Partition {
        two_block_objects: lists.two_block_objects.iter().cloned().collect(),
        ..Partition::default()
    };
    for identity in identities {
        match identity.folder {
            FolderKind::Blocks => {
                split.block_tables.insert(identity.name.clone());
            }
            FolderKind::Entities => {
                split.entity_tables.insert(identity.name.clone());
            }
            FolderKind::Other => {}
        }
        match lists.categorize(&identity.name) {
            Category::Excluded => {
                debug!(table = %identity.path, "skipping excluded loot table");
            }
            Category::Bottleneck => {
                split.owners.push(identity.clone());
                split.bottleneck_queue.push(identity.clone());
            }
            Category::Blocker => {
                split.blocker_holdback.push(identity.clone());
                split.donors.push(identity.clone());
            }
            Category::Normal => {
                split.owners.push(identity.clone());
                split.donors.push(identity.clone());
            }
        }
    }
    Ok(split)
}
