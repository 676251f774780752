//! # Reachability
//!
//! Breadth-first hop distances from a home person, and the tier classification
//! laid over them.
//!
//! ```text
//! store + home → distances() → DistanceMap → classify(horizon) → TierAssignment
//! ```
//!
//! The traversal itself is unbounded: it records the exact distance of every
//! reachable person. The horizon only decides which distances get a named tier.

use std::collections::VecDeque;

use hashbrown::HashMap;
use tracing::debug;

use crate::model::{PersonId, TierAssignment};
use crate::storage::GraphStore;
use crate::{Error, Result};

/// Exact hop distance from the origin for every reachable person (origin at 0).
pub type DistanceMap = HashMap<PersonId, u32>;

/// BFS from `origin` over the whole reachable component.
///
/// Each person is visited at most once, at their minimum distance.
pub fn distances<S: GraphStore>(store: &S, origin: &PersonId) -> Result<DistanceMap> {
    if !store.contains(origin) {
        return Err(Error::UnknownPerson(origin.clone()));
    }

    let mut visited: DistanceMap = HashMap::new();
    let mut queue: VecDeque<(PersonId, u32)> = VecDeque::new();

    visited.insert(origin.clone(), 0);
    queue.push_back((origin.clone(), 0));

    while let Some((current, depth)) = queue.pop_front() {
        for next in store.connections(&current)? {
            if !visited.contains_key(next) {
                visited.insert(next.clone(), depth + 1);
                queue.push_back((next.clone(), depth + 1));
            }
        }
    }

    Ok(visited)
}

/// Bucket every person except `home` into tiers `1..=horizon` or the residual set.
pub fn classify<S: GraphStore>(
    store: &S,
    home: &PersonId,
    distances: &DistanceMap,
    horizon: u32,
) -> TierAssignment {
    let mut tiers = TierAssignment::empty(home.clone(), horizon);
    for person in store.people() {
        if person.id == *home {
            continue;
        }
        tiers.place(person.id.clone(), distances.get(&person.id).copied());
    }
    tiers
}

/// Compute the tier assignment for `home`.
///
/// Fails with `UnknownPerson` if `home` is not stored. A `horizon` of 0
/// puts everyone in the residual set.
pub fn compute_tiers<S: GraphStore>(
    store: &S,
    home: &PersonId,
    horizon: u32,
) -> Result<TierAssignment> {
    let dist = distances(store, home)?;
    let tiers = classify(store, home, &dist, horizon);

    let tier_sizes: Vec<usize> = tiers.tiers().map(|(_, s)| s.len()).collect();
    debug!(
        home = %home,
        horizon,
        reachable = dist.len() - 1,
        ?tier_sizes,
        residual = tiers.residual().len(),
        "tiers computed"
    );

    Ok(tiers)
}

// ============================================================================
// Tests
// ============================================================================
