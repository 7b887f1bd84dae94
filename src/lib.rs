#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Table classification and pool partitioning.
pub mod catalog;
/// Top-level shuffle configuration.
pub mod config;
/// Centralized constants used across catalog, revision, and packaging.
pub mod constants;
/// Identity discovery over the table-root folder.
pub mod discovery;
/// Category list file parsing.
pub mod listfile;
/// Datapack bundle assembly and output.
pub mod pack;
/// Tiered random assignment planning.
pub mod planner;
/// Content revision rule table.
pub mod revision;
/// Reusable demo/CLI runners.
pub mod runner;
/// Content store trait and built-in backends.
pub mod store;
/// Generic tree pruning over parsed table contents.
pub mod tree;
/// Shared type aliases.
pub mod types;

mod errors;
mod hash;

pub use catalog::{Category, CategoryLists, FolderKind, Partition, TableIdentity, partition};
pub use config::ShuffleConfig;
pub use discovery::discover_tables;
pub use errors::ShuffleError;
pub use pack::{DatapackBundle, PackNaming};
pub use planner::{Assignment, DeterministicRng, plan, resolve_seed};
pub use revision::{RevisionContext, revise};
pub use runner::run_shuffle;
pub use store::{ContentStore, FsContentStore, InMemoryStore, revise_assignment};
pub use tree::{kill_keys, prune};
pub use types::{PackName, ReportLine, SeedText, TableName, TablePath};
