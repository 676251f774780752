//! # Route Finder
//!
//! Enumerates every shortest route from home to a target.
//!
//! The target's tier number is its minimal hop distance, so any search that
//! never goes deeper than that tier only ever records shortest routes, and an
//! exhaustive search records all of them. Two strategies are available:
//!
//! - `Backtracking` walks every simple path from home, cut off at the target's tier.
//! - `DistancePruned` runs a BFS from the target first and only steps to
//!   neighbours that are one hop closer to it.
//!
//! Both produce the same set of routes; order is unspecified.

use tracing::debug;

use crate::config::RouteStrategy;
use crate::model::{PersonId, Route, TierAssignment};
use crate::reach::{self, DistanceMap};
use crate::storage::GraphStore;
use crate::{Error, Result};

/// All shortest routes from `tiers.home()` to `target`.
///
/// `tiers` must have been computed against the current state of `store`.
/// Returns an empty list when `target` is home or in the residual set.
pub fn find_routes<S: GraphStore>(
    store: &S,
    tiers: &TierAssignment,
    target: &PersonId,
    strategy: RouteStrategy,
) -> Result<Vec<Route>> {
    if !store.contains(target) {
        return Err(Error::UnknownPerson(target.clone()));
    }
    let home = tiers.home();
    if !store.contains(home) {
        return Err(Error::UnknownPerson(home.clone()));
    }

    let Some(depth) = tiers.tier_of(target) else {
        debug!(%target, "target is home or beyond the horizon, no routes");
        return Ok(Vec::new());
    };

    let found = match strategy {
        RouteStrategy::Backtracking => backtrack(store, home, target, depth as usize)?,
        RouteStrategy::DistancePruned => {
            let to_target = reach::distances(store, target)?;
            descend(store, home, &to_target)?
        }
    };

    debug!(%home, %target, tier = depth, routes = found.len(), ?strategy, "routes found");
    Ok(found)
}

// Both searches keep an explicit stack of frames instead of recursing, so the
// depth of a search is bounded by memory rather than by the thread's stack.
// `frames[k]` holds the hops still to try from the person at level `k`; when a
// frame runs dry, the person that opened it is popped off the path.

/// Depth-limited backtracking, cut off once a route reaches `depth` hops.
fn backtrack<S: GraphStore>(
    store: &S,
    home: &PersonId,
    target: &PersonId,
    depth: usize,
) -> Result<Vec<Route>> {
    let mut found = Vec::new();
    let mut path = Route::single(home.clone());
    let mut frames: Vec<Vec<PersonId>> = vec![unvisited(store, &path, home)?];

    while let Some(frame) = frames.last_mut() {
        let Some(next) = frame.pop() else {
            frames.pop();
            path.pop();
            continue;
        };

        let level = path.len() + 1;
        if next == *target && level == depth {
            path.push(next);
            found.push(path.clone());
            path.pop();
        } else if level < depth {
            path.push(next.clone());
            frames.push(unvisited(store, &path, &next)?);
        }
    }
    Ok(found)
}

/// Connections of `from` that are not already on `path`.
fn unvisited<S: GraphStore>(store: &S, path: &Route, from: &PersonId) -> Result<Vec<PersonId>> {
    Ok(store
        .connections(from)?
        .iter()
        .filter(|next| !path.contains(next))
        .cloned()
        .collect())
}

/// Follow strictly decreasing distance-to-target until it reaches 0.
fn descend<S: GraphStore>(
    store: &S,
    home: &PersonId,
    to_target: &DistanceMap,
) -> Result<Vec<Route>> {
    let mut found = Vec::new();
    let mut path = Route::single(home.clone());
    let mut frames: Vec<Vec<PersonId>> = vec![closer(store, to_target, home)?];

    while let Some(frame) = frames.last_mut() {
        let Some(next) = frame.pop() else {
            frames.pop();
            path.pop();
            continue;
        };

        if to_target.get(&next) == Some(&0) {
            path.push(next);
            found.push(path.clone());
            path.pop();
        } else {
            let hops = closer(store, to_target, &next)?;
            path.push(next);
            frames.push(hops);
        }
    }
    Ok(found)
}

/// Connections of `from` one hop nearer the target.
///
/// Strict decrease toward the target also rules out revisiting.
fn closer<S: GraphStore>(
    store: &S,
    to_target: &DistanceMap,
    from: &PersonId,
) -> Result<Vec<PersonId>> {
    let Some(&remaining) = to_target.get(from) else {
        return Ok(Vec::new());
    };
    if remaining == 0 {
        return Ok(Vec::new());
    }
    Ok(store
        .connections(from)?
        .iter()
        .filter(|next| to_target.get(*next) == Some(&(remaining - 1)))
        .cloned()
        .collect())
}

// ============================================================================
// Tests
// ============================================================================
