use std::fs;
use std::path::Path;

use serde_json::json;

use lootswap::ShuffleConfig;
use lootswap::runner::run_shuffle;
use tempfile::tempdir;

fn write_table(root: &Path, relative: &str, content: &serde_json::Value) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_string_pretty(content).unwrap()).unwrap();
}

fn entity_table(item: &str) -> serde_json::Value {
    json!({
        "type": "minecraft:entity",
        "pools": [
            {
                "rolls": 1,
                "entries": [ { "type": "minecraft:item", "name": item } ],
                "conditions": [ { "condition": "minecraft:killed_by_player" } ]
            }
        ]
    })
}

fn block_table(item: &str) -> serde_json::Value {
    json!({
        "type": "minecraft:block",
        "pools": [
            {
                "rolls": 1,
                "entries": [ { "type": "minecraft:item", "name": item } ]
            }
        ]
    })
}

/// Build a small but representative table set plus category lists.
fn build_fixture(dir: &Path) -> ShuffleConfig {
    let root = dir.join("loot_tables");
    write_table(&root, "blocks/dirt.json", &block_table("minecraft:dirt"));
    write_table(&root, "blocks/stone.json", &block_table("minecraft:cobblestone"));
    write_table(&root, "blocks/diamond_ore.json", &block_table("minecraft:diamond"));
    write_table(&root, "blocks/sand.json", &block_table("minecraft:sand"));
    write_table(&root, "blocks/gravel.json", &block_table("minecraft:gravel"));
    write_table(&root, "blocks/secret.json", &block_table("minecraft:barrier"));
    write_table(&root, "entities/cow.json", &entity_table("minecraft:beef"));
    write_table(&root, "entities/chicken.json", &entity_table("minecraft:chicken"));
    write_table(&root, "entities/armor_stand.json", &block_table("minecraft:armor_stand"));
    write_table(
        &root,
        "gameplay/fishing.json",
        &json!({
            "pools": [
                {
                    "rolls": 1,
                    "entries": [ { "type": "minecraft:item", "name": "minecraft:cod" } ],
                    "conditions": [ { "entity": "this", "condition": "minecraft:entity_properties" } ]
                }
            ]
        }),
    );

    fs::write(dir.join("exclusions.config"), "# kept out\nsecret.json\n").unwrap();
    fs::write(dir.join("bottlenecks.config"), "diamond_ore.json\n").unwrap();
    fs::write(dir.join("blockers.config"), "dirt.json\n").unwrap();
    fs::write(dir.join("2-block_objects.config"), "").unwrap();

    ShuffleConfig {
        table_root: root,
        config_dir: dir.to_path_buf(),
        output_dir: dir.join("out"),
        seed_text: Some("roundtrip".to_string()),
    }
}

#[test]
fn full_run_produces_a_complete_bundle() {
    let temp = tempdir().unwrap();
    let config = build_fixture(temp.path());
    let bundle = run_shuffle(&config).unwrap();

    assert!(bundle.join("pack.mcmeta").is_file());
    assert!(bundle
        .join("data/minecraft/tags/functions/load.json")
        .is_file());
    assert!(bundle
        .join("data/rlt_roundtrip/functions/reset.mcfunction")
        .is_file());

    // Nine non-excluded tables, each shipped exactly once.
    let mut shipped = Vec::new();
    for entry in walk(&bundle.join("data/minecraft/loot_tables")) {
        shipped.push(entry);
    }
    assert_eq!(shipped.len(), 9);
    assert!(!shipped.iter().any(|p| p.ends_with("secret.json")));

    // Every shipped table is valid JSON.
    for path in &shipped {
        let raw = fs::read_to_string(path).unwrap();
        serde_json::from_str::<serde_json::Value>(&raw).unwrap();
    }

    let tree_report = fs::read_to_string(
        bundle.join("RLT_info/Loot table assignments by tree.txt"),
    )
    .unwrap();
    let lines: Vec<&str> = tree_report
        .lines()
        .filter(|line| line.contains(" --> "))
        .collect();
    assert_eq!(lines.len(), 9);
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted, "tree report is sorted by owner path");
    assert!(!tree_report.contains("secret.json"));
}

#[test]
fn same_seed_reproduces_the_same_bundle() {
    let temp = tempdir().unwrap();
    let config = build_fixture(temp.path());
    let bundle = run_shuffle(&config).unwrap();
    let report_path = bundle.join("RLT_info/Loot table assignments by file.txt");
    let first = fs::read_to_string(&report_path).unwrap();

    // Re-running overwrites the bundle in place with identical content.
    let bundle_again = run_shuffle(&config).unwrap();
    assert_eq!(bundle, bundle_again);
    let second = fs::read_to_string(&report_path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn conflicting_lists_abort_without_writing_anything() {
    let temp = tempdir().unwrap();
    let config = build_fixture(temp.path());
    fs::write(
        temp.path().join("blockers.config"),
        "dirt.json\ndiamond_ore.json\n",
    )
    .unwrap();
    run_shuffle(&config).unwrap_err();
    assert!(!config.output_dir.exists());
}

#[test]
fn unparseable_table_content_aborts_without_writing_anything() {
    let temp = tempdir().unwrap();
    let config = build_fixture(temp.path());
    fs::write(
        config.table_root.join("blocks/gravel.json"),
        "{ not json at all",
    )
    .unwrap();
    let err = run_shuffle(&config).unwrap_err();
    assert!(matches!(err, lootswap::ShuffleError::ContentLoad { .. }));
    assert!(!config.output_dir.exists());
}

fn walk(root: &Path) -> Vec<std::path::PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(dir).unwrap().filter_map(Result::ok) {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else {
                files.push(path);
            }
        }
    }
    files
}
