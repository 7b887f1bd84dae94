//! Rules deciding how relocated table contents get rewritten.
//!
//! Every assigned (owner, donor) pair runs through an ordered rule table,
//! first match wins. Each rule pairs a predicate over the pair's identity
//! tags with a pruning transformation; adding a rule is a data addition,
//! and each rule is testable in isolation.

use serde_json::{Value, json};

use crate::catalog::{Partition, TableIdentity};
use crate::constants::revision::{
    ARMOR_STAND_TABLE, BLOCK_SUBKEY, CONDITION_KEY, CONDITIONS_KEY, ENTITY_SUBKEY, FISHING_TABLE,
    FUNCTIONS_KEY, GLOW_LICHEN_TABLE, KILLED_BY_PLAYER, MATCH_TOOL, THIS_ENTITY,
};
use crate::tree::{kill_keys, prune};

/// Identity tags for one assigned pair, as seen by the rule predicates.
#[derive(Clone, Copy, Debug)]
pub struct RevisionContext<'a> {
    /// Table receiving the content.
    pub owner: &'a TableIdentity,
    /// Table whose original content is being relocated.
    pub donor: &'a TableIdentity,
    /// Pool partition carrying the entity and two-block tag sets.
    pub partition: &'a Partition,
}

impl RevisionContext<'_> {
    fn owner_is_entity(&self) -> bool {
        self.partition.entity_tables.contains(&self.owner.name)
    }

    fn donor_is_entity(&self) -> bool {
        self.partition.entity_tables.contains(&self.donor.name)
    }

    fn donor_is_two_block(&self) -> bool {
        self.partition.two_block_objects.contains(&self.donor.name)
    }
}

/// One revision rule: a predicate plus the transformation it selects.
struct Rule {
    name: &'static str,
    applies: fn(&RevisionContext) -> bool,
    transform: fn(Value) -> Value,
}

/// The rule table, in priority order. First match wins.
const RULES: &[Rule] = &[
    // Content dealt back to its own table needs no repair.
    Rule {
        name: "self_assignment",
        applies: |ctx| ctx.owner == ctx.donor,
        transform: |tree| tree,
    },
    // The armor stand is the one entity that cannot be killed by a
    // player, so conditions requiring that (or a matching tool) would
    // never fire on it.
    Rule {
        name: "unkillable_entity_owner",
        applies: |ctx| {
            ctx.owner_is_entity() && ctx.donor_is_entity() && ctx.owner.name == ARMOR_STAND_TABLE
        },
        transform: |tree| {
            let tree = prune(tree, Some(CONDITION_KEY), Some(&json!(KILLED_BY_PLAYER)));
            prune(tree, Some(CONDITION_KEY), Some(&json!(MATCH_TOOL)))
        },
    },
    // Any other entity can still be killed, so entity drops moved between
    // entities keep their conditions.
    Rule {
        name: "entity_to_entity",
        applies: |ctx| ctx.owner_is_entity() && ctx.donor_is_entity(),
        transform: |tree| tree,
    },
    // A non-entity owner can never be "killed by a player"; drop the
    // condition so the relocated content stays reachable.
    Rule {
        name: "entity_drops_on_non_entity",
        applies: |ctx| !ctx.owner_is_entity() && ctx.donor_is_entity(),
        transform: |tree| prune(tree, Some(CONDITION_KEY), Some(&json!(KILLED_BY_PLAYER))),
    },
    // Doors, beds, and tall flowers check their own block state before
    // dropping; relocated to another object class, that check blocks
    // everything.
    Rule {
        name: "two_block_donor",
        applies: |ctx| ctx.donor_is_two_block(),
        transform: |tree| kill_keys(tree, CONDITIONS_KEY, Some(BLOCK_SUBKEY), None),
    },
    // The fishing table checks the catching entity itself (bobber in open
    // water); detached from fishing, that check is meaningless.
    Rule {
        name: "fishing_donor",
        applies: |ctx| ctx.donor.name == FISHING_TABLE,
        transform: |tree| {
            kill_keys(tree, CONDITIONS_KEY, Some(ENTITY_SUBKEY), Some(&json!(THIS_ENTITY)))
        },
    },
    // Glow lichen checks itself once per face to prevent double drops;
    // the whole functions block only makes sense on the original.
    Rule {
        name: "glow_lichen_donor",
        applies: |ctx| ctx.donor.name == GLOW_LICHEN_TABLE,
        transform: |tree| kill_keys(tree, FUNCTIONS_KEY, None, None),
    },
];

/// Revise one donor's content tree for its new owner.
///
/// Evaluates the rule table in order and applies the first matching
/// transformation; no match leaves the tree untouched.
pub fn revise(ctx: &RevisionContext, tree: Value) -> Value {
    for rule in RULES {
        if (rule.applies)(ctx) {
            tracing::debug!(
                rule = rule.name,
                owner = %ctx.owner.path,
                donor = %ctx.donor.path,
                "revision rule matched"
            );
            return (rule.transform)(tree);
        }
    }
    tree
}
