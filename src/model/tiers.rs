//! Tier assignment — everyone bucketed by hop distance from a home person.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use super::PersonId;
use crate::config::DEFAULT_HORIZON;

/// Where a person landed relative to home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    Home,
    /// Exact hop distance, `1..=horizon`.
    Tier(u32),
    /// Farther than the horizon or in another component.
    Residual,
}

/// Immutable snapshot of tiers `1..=horizon` plus the residual set for one home.
///
/// Every person other than home appears in exactly one tier or in the residual set.
///
/// Tier sets are allocated as distances are seen, so the horizon may be far
/// larger than the graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierAssignment {
    home: PersonId,
    horizon: u32,
    /// `tiers[0]` holds distance 1.
    tiers: Vec<HashSet<PersonId>>,
    residual: HashSet<PersonId>,
    /// Stand-in for in-range tiers that were never allocated.
    #[serde(skip)]
    vacant: HashSet<PersonId>,
}

impl TierAssignment {
    pub(crate) fn empty(home: PersonId, horizon: u32) -> Self {
        let eager = horizon.min(DEFAULT_HORIZON) as usize;
        Self {
            home,
            horizon,
            tiers: vec![HashSet::new(); eager],
            residual: HashSet::new(),
            vacant: HashSet::new(),
        }
    }

    pub(crate) fn place(&mut self, id: PersonId, distance: Option<u32>) {
        match distance {
            Some(d) if d >= 1 && d <= self.horizon => {
                let idx = d as usize - 1;
                if idx >= self.tiers.len() {
                    self.tiers.resize_with(idx + 1, HashSet::new);
                }
                self.tiers[idx].insert(id);
            }
            _ => {
                self.residual.insert(id);
            }
        }
    }

    pub fn home(&self) -> &PersonId {
        &self.home
    }

    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    /// People at exactly `level` hops. `None` outside `1..=horizon`.
    pub fn tier(&self, level: u32) -> Option<&HashSet<PersonId>> {
        if level == 0 || level > self.horizon {
            return None;
        }
        Some(self.tiers.get(level as usize - 1).unwrap_or(&self.vacant))
    }

    /// `(level, members)` for every allocated tier, nearest first.
    ///
    /// Covers at least `1..=min(horizon, 4)` and every level anyone landed on.
    pub fn tiers(&self) -> impl Iterator<Item = (u32, &HashSet<PersonId>)> {
        self.tiers.iter().enumerate().map(|(i, set)| (i as u32 + 1, set))
    }

    pub fn residual(&self) -> &HashSet<PersonId> {
        &self.residual
    }

    /// Tier number of `id`, or `None` for home, residual or unknown ids.
    pub fn tier_of(&self, id: &PersonId) -> Option<u32> {
        self.tiers()
            .find(|(_, set)| set.contains(id))
            .map(|(level, _)| level)
    }

    /// Placement of `id`, or `None` if the snapshot has never seen it.
    pub fn placement(&self, id: &PersonId) -> Option<Placement> {
        if *id == self.home {
            return Some(Placement::Home);
        }
        if let Some(level) = self.tier_of(id) {
            return Some(Placement::Tier(level));
        }
        self.residual.contains(id).then_some(Placement::Residual)
    }

    /// Number of people placed (home excluded).
    pub fn len(&self) -> usize {
        self.tiers.iter().map(HashSet::len).sum::<usize>() + self.residual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Members of a tier in sorted order, for stable display.
    pub fn sorted_tier(&self, level: u32) -> Vec<PersonId> {
        let mut ids: Vec<PersonId> = self.tier(level).into_iter().flatten().cloned().collect();
        ids.sort();
        ids
    }
}

/// Equal when every level holds the same people; trailing unallocated tiers
/// compare equal to empty ones.
impl PartialEq for TierAssignment {
    fn eq(&self, other: &Self) -> bool {
        let levels = self.tiers.len().max(other.tiers.len()) as u32;
        self.home == other.home
            && self.horizon == other.horizon
            && self.residual == other.residual
            && (1..=levels).all(|level| self.tier(level) == other.tier(level))
    }
}

impl Eq for TierAssignment {}
