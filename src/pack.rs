//! Datapack bundle assembly and all-or-nothing output.
//!
//! The bundle is assembled fully in memory (metadata, load hook, revised
//! tables, assignment reports) and only then written out, staged under a
//! temporary sibling folder and renamed into place so a failed run leaves
//! nothing at the destination.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::{Value, json};
use tracing::info;

use crate::constants::pack::{
    DATA_ROOT, INFO_DIR, LOAD_TAG_PATH, MCMETA_FILE, MINECRAFT_VERSION, PACK_FORMAT,
    PACK_NAME_PREFIX, RANDOM_SEED_PACK_NAME, REPORT_BY_FILE, REPORT_BY_TREE, RESET_MESSAGE,
};
use crate::errors::ShuffleError;
use crate::planner::Assignment;
use crate::types::{PackName, ReportLine, TablePath};

/// Seed-derived datapack identifiers.
#[derive(Clone, Debug)]
pub struct PackNaming {
    /// Datapack id used in the load hook and function namespace.
    pub name: PackName,
    /// Description embedded in the bundle metadata.
    pub description: String,
    /// Folder name the bundle is written under.
    pub folder_name: String,
}

impl PackNaming {
    /// Derive all naming from the user's seed text (or its absence).
    pub fn from_seed_text(seed_text: Option<&str>) -> Self {
        match seed_text {
            Some(seed) => Self {
                name: format!("{PACK_NAME_PREFIX}{seed}"),
                description: format!("Random Loot Tables: seed = {seed}"),
                folder_name: format!("RLT (seed = {seed}) for Minecraft {MINECRAFT_VERSION}"),
            },
            None => Self {
                name: RANDOM_SEED_PACK_NAME.to_string(),
                description: "Random Loot Tables: random seed".to_string(),
                folder_name: format!("RLT (random seed) for Minecraft {MINECRAFT_VERSION}"),
            },
        }
    }
}

/// A fully assembled bundle: relative path → file contents.
#[derive(Clone, Debug)]
pub struct DatapackBundle {
    naming: PackNaming,
    files: IndexMap<String, String>,
}

impl DatapackBundle {
    /// Assemble the bundle from the assignment and the revised contents.
    ///
    /// `revised` maps each owner's table path to the content it will ship
    /// with; every owner in `assignment` must have an entry.
    pub fn build(
        naming: PackNaming,
        assignment: &Assignment,
        revised: &IndexMap<TablePath, Value>,
    ) -> Result<Self, ShuffleError> {
        let mut files = IndexMap::new();

        files.insert(
            format!("{INFO_DIR}/{REPORT_BY_TREE}"),
            report_by_tree(&naming, assignment),
        );
        files.insert(
            format!("{INFO_DIR}/{REPORT_BY_FILE}"),
            report_by_file(&naming, assignment),
        );

        for (owner, _) in assignment {
            let content = revised.get(&owner.path).ok_or_else(|| {
                ShuffleError::Configuration(format!(
                    "no revised content for owner '{}'",
                    owner.path
                ))
            })?;
            let body = serde_json::to_string_pretty(content).map_err(|err| {
                ShuffleError::ContentLoad {
                    path: owner.path.clone(),
                    reason: err.to_string(),
                }
            })?;
            files.insert(format!("{DATA_ROOT}/{}", owner.path), body);
        }

        let meta = json!({
            "pack": {
                "pack_format": PACK_FORMAT,
                "description": naming.description,
            }
        });
        let meta_body = serde_json::to_string_pretty(&meta).map_err(|err| {
            ShuffleError::Configuration(format!("pack metadata failed to serialize: {err}"))
        })?;
        files.insert(MCMETA_FILE.to_string(), meta_body);
        let namespace = naming.name.to_lowercase();
        let load_tag = json!({ "values": [format!("{namespace}:reset")] });
        files.insert(LOAD_TAG_PATH.to_string(), load_tag.to_string());
        files.insert(
            format!("data/{namespace}/functions/reset.mcfunction"),
            RESET_MESSAGE.to_string(),
        );

        Ok(Self { naming, files })
    }

    /// Relative paths of every file in the bundle, in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Contents of one bundle file, if present.
    pub fn file(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Write the bundle under `output_dir`, replacing any previous bundle
    /// with the same folder name.
    ///
    /// Files are staged into a hidden sibling folder first and the staged
    /// tree is renamed into place at the end, so an interrupted or failed
    /// write never leaves a partial bundle at the destination.
    pub fn write_to(&self, output_dir: &Path) -> Result<PathBuf, ShuffleError> {
        fs::create_dir_all(output_dir)?;
        let destination = output_dir.join(&self.naming.folder_name);
        let staging = output_dir.join(format!(
            ".{}.staging-{}",
            self.naming.folder_name,
            std::process::id()
        ));
        if staging.exists() {
            fs::remove_dir_all(&staging)?;
        }

        let result = self.write_staged(&staging, &destination);
        if result.is_err() {
            let _ = fs::remove_dir_all(&staging);
        }
        result
    }

    fn write_staged(&self, staging: &Path, destination: &Path) -> Result<PathBuf, ShuffleError> {
        for (relative, contents) in &self.files {
            let target = staging.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, contents)?;
        }
        if destination.exists() {
            fs::remove_dir_all(destination)?;
        }
        fs::rename(staging, destination)?;
        info!(bundle = %destination.display(), files = self.files.len(), "datapack bundle written");
        Ok(destination.to_path_buf())
    }
}

fn report_header(naming: &PackNaming, title: &str) -> String {
    let mut header = String::new();
    let _ = writeln!(header, "RLT datapack: {}", naming.name);
    let _ = writeln!(header, "Datapack folder: {}", naming.folder_name);
    let _ = writeln!(header);
    let _ = writeln!(header, "{title}:");
    let _ = writeln!(header);
    header
}

/// Assignment report keyed and sorted by full tree path.
fn report_by_tree(naming: &PackNaming, assignment: &Assignment) -> String {
    let mut lines: Vec<ReportLine> = assignment
        .iter()
        .map(|(owner, donor)| format!("{} --> {}", owner.path, donor.name))
        .collect();
    lines.sort();
    let mut report = report_header(naming, "Loot table assignments sorted by loot table tree path");
    for line in lines {
        report.push_str(&line);
        report.push('\n');
    }
    report
}

/// Assignment report keyed and sorted by base file name.
fn report_by_file(naming: &PackNaming, assignment: &Assignment) -> String {
    let mut lines: Vec<ReportLine> = assignment
        .iter()
        .map(|(owner, donor)| format!("{} --> {}", owner.name, donor.name))
        .collect();
    lines.sort();
    let mut report = report_header(naming, "Loot table assignments by file");
    for line in lines {
        report.push_str(&line);
        report.push('\n');
    }
    report
}
