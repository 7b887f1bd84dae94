/// Base file name of one loot table.
/// Example: `armor_stand.json`
pub type TableName = String;
/// Relative path of one loot table, rooted at the table-set folder.
/// Example: `loot_tables/entities/armor_stand.json`
pub type TablePath = String;
/// Raw seed text entered by the user (hashed into the RNG seed).
/// Example: `cheese wheel 42`
pub type SeedText = String;
/// Datapack identifier derived from the seed.
/// Examples: `RLT_cheese wheel 42`, `RLT_random_seed`
pub type PackName = String;
/// One line of an assignment report.
/// Example: `loot_tables/blocks/dirt.json --> fishing.json`
pub type ReportLine = String;
