//! Generic pruning over parsed loot-table trees.
//!
//! Both operations are total recursive functions over `serde_json::Value`:
//! they consume the input tree and return a new one, cascading emptiness
//! upward so that a branch reduced to nothing disappears from its parent.
//! Neither knows anything about loot-table semantics; the revision rule
//! table supplies the keys and values worth killing.

use serde_json::Value;

/// True for the node shapes treated as "nothing left here".
fn is_empty_node(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

fn key_matches(target: Option<&str>, key: &str) -> bool {
    target.is_none_or(|t| t == key)
}

fn value_matches(target: Option<&Value>, value: &Value) -> bool {
    target.is_none_or(|t| t == value)
}

/// Remove map entries matching `kill_key`/`kill_value` anywhere in `tree`,
/// then drop every branch that is (or becomes) empty.
///
/// An omitted `kill_key` or `kill_value` matches anything, so
/// `prune(tree, None, None)` would strip every map entry; callers always
/// pass at least one of the two. Leaf scalars pass through unchanged.
/// Idempotent: pruning an already-pruned tree changes nothing.
pub fn prune(tree: Value, kill_key: Option<&str>, kill_value: Option<&Value>) -> Value {
    match tree {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| prune(item, kill_key, kill_value))
                .filter(|item| !is_empty_node(item))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(key, value)| {
                    !(key_matches(kill_key, key) && value_matches(kill_value, value))
                })
                .map(|(key, value)| (key, prune(value, kill_key, kill_value)))
                .filter(|(_, value)| !is_empty_node(value))
                .collect(),
        ),
        leaf => leaf,
    }
}

/// Remove map entries named `key` whose value carries a nested marker,
/// then drop every branch that is (or becomes) empty.
///
/// With no `subkey`/`subvalue` constraint, every entry named `key` is
/// removed. With a constraint, an entry named `key` is removed only when
/// its value is a list containing at least one map that has an entry
/// matching `subkey`/`subvalue` (omitted again meaning "matches
/// anything"). This removes a named block only when a nested condition
/// marker is present, rather than unconditionally.
pub fn kill_keys(tree: Value, key: &str, subkey: Option<&str>, subvalue: Option<&Value>) -> Value {
    match tree {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| kill_keys(item, key, subkey, subvalue))
                .filter(|item| !is_empty_node(item))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(entry_key, value)| {
                    !(entry_key == key && subcondition_met(value, subkey, subvalue))
                })
                .map(|(entry_key, value)| {
                    (entry_key, kill_keys(value, key, subkey, subvalue))
                })
                .filter(|(_, value)| !is_empty_node(value))
                .collect(),
        ),
        leaf => leaf,
    }
}

/// Whether a matched entry's value satisfies the nested-marker constraint.
fn subcondition_met(value: &Value, subkey: Option<&str>, subvalue: Option<&Value>) -> bool {
    if subkey.is_none() && subvalue.is_none() {
        return true;
    }
    let Value::Array(items) = value else {
        return false;
    };
    items.iter().any(|item| {
        item.as_object().is_some_and(|map| {
            map.iter()
                .any(|(sk, sv)| key_matches(subkey, sk) && value_matches(subvalue, sv))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prune_removes_key_value_pairs_and_cascades_emptiness() {
        let tree = json!({
            "pools": [
                {
                    "conditions": [
                        { "condition": "minecraft:killed_by_player" }
                    ],
                    "rolls": 1
                }
            ]
        });
        let pruned = prune(
            tree,
            Some("condition"),
            Some(&json!("minecraft:killed_by_player")),
        );
        // The condition entry vanishes, the now-empty map vanishes from the
        // list, and the now-empty conditions list vanishes from the pool.
        assert_eq!(pruned, json!({ "pools": [ { "rolls": 1 } ] }));
    }

    #[test]
    fn prune_with_key_only_removes_all_values_under_that_key() {
        let tree = json!({ "a": { "kill": 1, "keep": 2 }, "kill": "x" });
        let pruned = prune(tree, Some("kill"), None);
        assert_eq!(pruned, json!({ "a": { "keep": 2 } }));
    }

    #[test]
    fn prune_with_value_only_removes_entries_regardless_of_key() {
        let tree = json!({ "a": "gone", "b": "stays", "c": { "d": "gone" } });
        let pruned = prune(tree, None, Some(&json!("gone")));
        assert_eq!(pruned, json!({ "b": "stays" }));
    }

    #[test]
    fn prune_leaves_scalars_and_nonmatching_trees_alone() {
        let tree = json!({ "rolls": 2, "bonus_rolls": 0.5, "flag": false });
        let pruned = prune(tree.clone(), Some("condition"), None);
        assert_eq!(pruned, tree);
    }

    #[test]
    fn prune_can_reduce_a_tree_to_an_empty_map() {
        let tree = json!({ "conditions": [ { "condition": "only_thing" } ] });
        let pruned = prune(tree, Some("condition"), None);
        assert_eq!(pruned, json!({}));
    }

    #[test]
    fn prune_is_idempotent() {
        let tree = json!({
            "keep": [ { "condition": "x", "other": [] }, "", null ],
            "also": { "inner": {} }
        });
        let once = prune(tree, Some("condition"), Some(&json!("x")));
        let twice = prune(once.clone(), Some("condition"), Some(&json!("x")));
        assert_eq!(once, twice);
    }

    #[test]
    fn kill_keys_without_constraint_removes_every_match() {
        let tree = json!({
            "functions": [ { "function": "copy_state" } ],
            "pools": [ { "functions": [ { "function": "set_count" } ], "rolls": 1 } ]
        });
        let killed = kill_keys(tree, "functions", None, None);
        assert_eq!(killed, json!({ "pools": [ { "rolls": 1 } ] }));
    }

    #[test]
    fn kill_keys_with_subkey_requires_the_nested_marker() {
        let tree = json!({
            "entries": [
                {
                    "name": "minecraft:dark_oak_door",
                    "conditions": [
                        { "block": "minecraft:dark_oak_door", "condition": "c" }
                    ]
                },
                {
                    "name": "minecraft:stick",
                    "conditions": [ { "condition": "plain" } ]
                }
            ]
        });
        let killed = kill_keys(tree, "conditions", Some("block"), None);
        assert_eq!(
            killed,
            json!({
                "entries": [
                    { "name": "minecraft:dark_oak_door" },
                    {
                        "name": "minecraft:stick",
                        "conditions": [ { "condition": "plain" } ]
                    }
                ]
            })
        );
    }

    #[test]
    fn kill_keys_with_subkey_and_subvalue_requires_both() {
        let tree = json!({
            "conditions": [ { "entity": "this", "predicate": {} } ],
            "other": { "conditions": [ { "entity": "killer" } ] }
        });
        let killed = kill_keys(
            tree,
            "conditions",
            Some("entity"),
            Some(&json!("this")),
        );
        assert_eq!(
            killed,
            json!({ "other": { "conditions": [ { "entity": "killer" } ] } })
        );
    }

    #[test]
    fn kill_keys_handles_deep_nesting() {
        let mut tree = json!({ "functions": [ { "function": "explode" } ] });
        for _ in 0..64 {
            tree = json!({ "child": [ tree ] });
        }
        let killed = kill_keys(tree, "functions", None, None);
        // The whole chain collapses once the innermost map empties out.
        assert_eq!(killed, json!({}));
    }

    #[test]
    fn kill_keys_is_idempotent() {
        let tree = json!({
            "conditions": [ { "entity": "this" } ],
            "pools": [ { "conditions": [ { "entity": "this" } ], "rolls": 1 } ]
        });
        let once = kill_keys(tree, "conditions", Some("entity"), Some(&json!("this")));
        let twice = kill_keys(
            once.clone(),
            "conditions",
            Some("entity"),
            Some(&json!("this")),
        );
        assert_eq!(once, twice);
    }
}
