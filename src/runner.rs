//! Reusable end-to-end runner shared by the demo binaries.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::catalog::{CategoryLists, partition};
use crate::config::ShuffleConfig;
use crate::discovery::discover_tables;
use crate::pack::{DatapackBundle, PackNaming};
use crate::planner::{DeterministicRng, plan, resolve_seed};
use crate::store::{FsContentStore, base_of, revise_assignment};

#[derive(Debug, Parser)]
#[command(
    name = "generate_datapack",
    disable_help_subcommand = true,
    about = "Shuffle a loot-table set into a datapack bundle",
    long_about = "Discover loot tables, deal every table's contents to a random new owner \
                  under the configured category lists, repair relocated drop conditions, and \
                  write a deployable datapack bundle plus assignment reports.",
    after_help = "Omit --seed for a system-random, non-reproducible shuffle."
)]
struct GenerateDatapackCli {
    #[arg(
        long = "table-root",
        value_name = "PATH",
        default_value = "loot_tables",
        help = "Folder holding the extracted loot tables"
    )]
    table_root: PathBuf,
    #[arg(
        long = "config-dir",
        value_name = "PATH",
        default_value = ".",
        help = "Folder the category list files are read from"
    )]
    config_dir: PathBuf,
    #[arg(
        long = "output-dir",
        value_name = "PATH",
        default_value = "RLT datapacks",
        help = "Folder the datapack bundle is written into"
    )]
    output_dir: PathBuf,
    #[arg(long, value_name = "TEXT", help = "Seed text for a reproducible shuffle")]
    seed: Option<String>,
}

impl From<GenerateDatapackCli> for ShuffleConfig {
    fn from(cli: GenerateDatapackCli) -> Self {
        Self {
            table_root: cli.table_root,
            config_dir: cli.config_dir,
            output_dir: cli.output_dir,
            seed_text: cli.seed,
        }
    }
}

/// Run one complete shuffle: discover, partition, plan, revise, package.
///
/// Returns the path of the written bundle folder.
pub fn run_shuffle(config: &ShuffleConfig) -> Result<PathBuf, crate::ShuffleError> {
    let lists = CategoryLists::load_from_dir(&config.config_dir)?;
    let identities = discover_tables(&config.table_root)?;
    let split = partition(&identities, &lists)?;

    let seed = resolve_seed(config.seed_text.as_deref());
    let mut rng = DeterministicRng::new(seed);
    let assignment = plan(split.clone(), &mut rng)?;

    let mut store = FsContentStore::new(base_of(&config.table_root));
    revise_assignment(&assignment, &split, &mut store)?;

    let naming = PackNaming::from_seed_text(config.seed_text.as_deref());
    let revised = store.into_revised();
    let bundle = DatapackBundle::build(naming, &assignment, &revised)?;
    bundle.write_to(&config.output_dir)
}

/// Entry point for the `generate_datapack` demo.
pub fn run_generate_datapack() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let cli = GenerateDatapackCli::parse();
    match &cli.seed {
        Some(seed) => info!(seed = %seed, "generating datapack with a fixed seed"),
        None => info!("generating datapack with a system-random seed"),
    }
    let config = ShuffleConfig::from(cli);
    let bundle = run_shuffle(&config)?;
    println!("Datapack bundle written to: {}", bundle.display());
    Ok(())
}
