/// Constants used by discovery and category-list handling.
pub mod catalog {
    /// Sub-folder of the table root holding block loot tables.
    pub const BLOCKS_DIR: &str = "blocks";
    /// Sub-folder of the table root holding entity loot tables.
    pub const ENTITIES_DIR: &str = "entities";
    /// Default table-root folder name (as extracted from the game files).
    pub const DEFAULT_TABLE_ROOT: &str = "loot_tables";
    /// File extension loot tables are stored with.
    pub const TABLE_EXTENSION: &str = "json";
    /// Comment marker recognized by category list files.
    pub const COMMENT_MARKER: char = '#';
    /// File name of the exclusions list.
    pub const EXCLUSIONS_FILE: &str = "exclusions.config";
    /// File name of the bottlenecks list.
    pub const BOTTLENECKS_FILE: &str = "bottlenecks.config";
    /// File name of the blockers list.
    pub const BLOCKERS_FILE: &str = "blockers.config";
    /// File name of the two-block objects list.
    pub const TWO_BLOCK_OBJECTS_FILE: &str = "2-block_objects.config";
}

/// Constants used by the content revision rule table.
pub mod revision {
    /// The one entity table whose owner can never be killed by a player.
    pub const ARMOR_STAND_TABLE: &str = "armor_stand.json";
    /// The fishing gameplay table with a self-entity bobber check.
    pub const FISHING_TABLE: &str = "fishing.json";
    /// The glow lichen table with per-face self checks in its functions.
    pub const GLOW_LICHEN_TABLE: &str = "glow_lichen.json";
    /// Key of a single predicate entry inside a conditions list.
    pub const CONDITION_KEY: &str = "condition";
    /// Key of a conditions list attached to a pool or entry.
    pub const CONDITIONS_KEY: &str = "conditions";
    /// Key of the functions list attached to a pool entry.
    pub const FUNCTIONS_KEY: &str = "functions";
    /// Sub-key marking a self-referential block-state check.
    pub const BLOCK_SUBKEY: &str = "block";
    /// Sub-key marking an entity-target check.
    pub const ENTITY_SUBKEY: &str = "entity";
    /// Entity-target value meaning "the dropping object itself".
    pub const THIS_ENTITY: &str = "this";
    /// Condition id that only an entity killed by a player can satisfy.
    pub const KILLED_BY_PLAYER: &str = "minecraft:killed_by_player";
    /// Condition id checking the tool used for the kill.
    pub const MATCH_TOOL: &str = "minecraft:match_tool";
}

/// Constants used by datapack bundle layout and naming.
pub mod pack {
    /// Datapack format number expected by the supported game version.
    pub const PACK_FORMAT: u32 = 10;
    /// Game version the bundle layout targets.
    pub const MINECRAFT_VERSION: &str = "1.19.3";
    /// Bundle-relative root the shuffled tables are written under.
    pub const DATA_ROOT: &str = "data/minecraft";
    /// Bundle-relative folder holding the assignment reports.
    pub const INFO_DIR: &str = "RLT_info";
    /// Report file listing assignments by full tree path.
    pub const REPORT_BY_TREE: &str = "Loot table assignments by tree.txt";
    /// Report file listing assignments by base file name.
    pub const REPORT_BY_FILE: &str = "Loot table assignments by file.txt";
    /// Bundle metadata file name.
    pub const MCMETA_FILE: &str = "pack.mcmeta";
    /// Bundle-relative path of the load-tag file.
    pub const LOAD_TAG_PATH: &str = "data/minecraft/tags/functions/load.json";
    /// Prefix for seed-derived pack names.
    pub const PACK_NAME_PREFIX: &str = "RLT_";
    /// Pack name used when no seed was supplied.
    pub const RANDOM_SEED_PACK_NAME: &str = "RLT_random_seed";
    /// Default output folder the bundle is written into.
    pub const DEFAULT_OUTPUT_DIR: &str = "RLT datapacks";
    /// Message broadcast by the bundle's reset function on world load.
    pub const RESET_MESSAGE: &str =
        r#"tellraw @a ["",{"text":"Random Loot Tables","color":"green"}]"#;
}
