//! Tiered random assignment of donor tables to owner tables.
//!
//! The planner turns the partitioned pools into a complete bijection over
//! the non-excluded table set. Bottleneck donors are dealt first, while
//! blocker owners are still held out of the pool, which is what guarantees
//! bottleneck drops never land on a blocker table. All draws come from one
//! RNG stream seeded exactly once, so a fixed seed and a fixed table set
//! reproduce the identical assignment.

use indexmap::IndexMap;
use rand::Rng;
use tracing::{debug, info};

use crate::catalog::{Partition, TableIdentity};
use crate::errors::ShuffleError;
use crate::hash::stable_hash_str;

/// Final owner → donor mapping, in draw order.
pub type Assignment = IndexMap<TableIdentity, TableIdentity>;

#[derive(Debug, Clone)]
/// Small deterministic RNG used for reproducible assignment draws.
pub struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    /// Create an RNG seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64_internal(&mut self) -> u64 {
        let mut z = self.state.wrapping_add(0x9E3779B97F4A7C15);
        self.state = z;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

impl rand::RngCore for DeterministicRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64_internal() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u64_internal()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut offset = 0;
        while offset < dest.len() {
            let value = self.next_u64_internal();
            let bytes = value.to_le_bytes();
            let remaining = dest.len() - offset;
            let copy_len = remaining.min(bytes.len());
            dest[offset..offset + copy_len].copy_from_slice(&bytes[..copy_len]);
            offset += copy_len;
        }
    }
}

/// Resolve user seed material into the RNG seed.
///
/// Seed text hashes to a stable value, so the same text reproduces the
/// same datapack across runs. Absent seed text falls back to system
/// entropy and the run is not reproducible.
pub fn resolve_seed(seed_text: Option<&str>) -> u64 {
    match seed_text {
        Some(text) => stable_hash_str(0, text),
        None => rand::rng().random(),
    }
}

/// Phase 1: deal each bottleneck donor to a random owner.
///
/// Owners are drawn from the current pool (blockers not yet merged) and
/// removed as they are consumed, one draw per queued donor in list order.
pub fn assign_bottlenecks(
    owners: &mut Vec<TableIdentity>,
    queue: Vec<TableIdentity>,
    rng: &mut impl Rng,
    assignment: &mut Assignment,
) -> Result<(), ShuffleError> {
    let queued = queue.len();
    for (drawn, donor) in queue.into_iter().enumerate() {
        if owners.is_empty() {
            return Err(ShuffleError::PoolMismatch {
                owners: 0,
                donors: queued - drawn,
            });
        }
        let index = rng.random_range(0..owners.len());
        let owner = owners.remove(index);
        debug!(owner = %owner.path, donor = %donor.path, "bottleneck assignment");
        assignment.insert(owner, donor);
    }
    Ok(())
}

/// Phase 2: deal the remaining donors to the remaining owners.
///
/// Precondition: both pools are the same size; divergence means the
/// partitioning or phase 1 is defective and the run aborts.
pub fn assign_remaining(
    owners: Vec<TableIdentity>,
    mut donors: Vec<TableIdentity>,
    rng: &mut impl Rng,
    assignment: &mut Assignment,
) -> Result<(), ShuffleError> {
    if owners.len() != donors.len() {
        return Err(ShuffleError::PoolMismatch {
            owners: owners.len(),
            donors: donors.len(),
        });
    }
    for owner in owners {
        let index = rng.random_range(0..donors.len());
        let donor = donors.remove(index);
        assignment.insert(owner, donor);
    }
    Ok(())
}

/// Produce the complete owner → donor bijection for `partition`.
///
/// An empty table set yields an empty assignment, not an error.
/// Self-assignment (a table dealt its own contents) is permitted and left
/// unguarded; the revision rules treat it as "keep as-is".
pub fn plan(partition: Partition, rng: &mut impl Rng) -> Result<Assignment, ShuffleError> {
    let Partition {
        mut owners,
        donors,
        bottleneck_queue,
        blocker_holdback,
        ..
    } = partition;

    let mut assignment = Assignment::new();
    if !bottleneck_queue.is_empty() {
        info!(count = bottleneck_queue.len(), "assigning bottleneck drops first");
    }
    assign_bottlenecks(&mut owners, bottleneck_queue, rng, &mut assignment)?;
    owners.extend(blocker_holdback);
    assign_remaining(owners, donors, rng, &mut assignment)?;
    info!(count = assignment.len(), "assignment complete");
    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FolderKind, TableIdentity};

    fn identity(name: &str) -> TableIdentity {
        TableIdentity::new(format!("loot_tables/blocks/{name}"), FolderKind::Blocks)
    }

    fn partition_of(names: &[&str]) -> Partition {
        let identities: Vec<TableIdentity> = names.iter().map(|n| identity(n)).collect();
        Partition {
            owners: identities.clone(),
            donors: identities,
            ..Partition::default()
        }
    }

    #[test]
    fn plan_with_empty_pools_is_empty() {
        let mut rng = DeterministicRng::new(7);
        let assignment = plan(Partition::default(), &mut rng).unwrap();
        assert!(assignment.is_empty());
    }

    #[test]
    fn plan_is_deterministic_for_a_fixed_seed() {
        let names = ["a.json", "b.json", "c.json", "d.json", "e.json"];
        let mut first_rng = DeterministicRng::new(1234);
        let first = plan(partition_of(&names), &mut first_rng).unwrap();
        let mut second_rng = DeterministicRng::new(1234);
        let second = plan(partition_of(&names), &mut second_rng).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn mismatched_pools_abort() {
        let mut split = partition_of(&["a.json", "b.json"]);
        split.donors.pop();
        let mut rng = DeterministicRng::new(5);
        let err = plan(split, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            ShuffleError::PoolMismatch {
                owners: 2,
                donors: 1
            }
        ));
    }

    #[test]
    fn resolve_seed_is_stable_for_the_same_text() {
        assert_eq!(resolve_seed(Some("pickles")), resolve_seed(Some("pickles")));
        assert_ne!(resolve_seed(Some("pickles")), resolve_seed(Some("onions")));
    }
}
