//! In-memory graph store.
//!
//! The reference implementation of `GraphStore`: one hash map from id to
//! person, with each person carrying its own adjacency set. Owned by a single
//! caller; there is no interior locking.

use hashbrown::HashMap;
use tracing::debug;

use crate::config::RemovalPolicy;
use crate::model::{Person, PersonId};
use crate::{Error, Result};
use super::{violation, GraphStore};

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory social graph.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    people: HashMap<PersonId, Person>,
    removal_policy: RemovalPolicy,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(people: usize) -> Self {
        Self {
            people: HashMap::with_capacity(people),
            removal_policy: RemovalPolicy::default(),
        }
    }

    pub fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        self.removal_policy
    }

    fn require_pair(&self, a: &PersonId, b: &PersonId) -> Result<()> {
        for id in [a, b] {
            if !self.people.contains_key(id) {
                return Err(Error::UnknownPerson(id.clone()));
            }
        }
        Ok(())
    }

    fn link(&mut self, from: &PersonId, to: &PersonId, present: bool) {
        if let Some(p) = self.people.get_mut(from) {
            if present {
                p.connections.insert(to.clone());
            } else {
                p.connections.remove(to);
            }
        }
    }

    /// Post-mutation check on the two touched endpoints.
    fn check_pair(&self, a: &PersonId, b: &PersonId) -> Result<()> {
        let ab = self.people.get(a).is_some_and(|p| p.is_connected_to(b));
        let ba = self.people.get(b).is_some_and(|p| p.is_connected_to(a));
        if ab != ba {
            return Err(violation(format!("asymmetric connection between {a} and {b}")));
        }
        if cfg!(debug_assertions) {
            self.check_invariants()?;
        }
        Ok(())
    }
}

// ============================================================================
// GraphStore impl
// ============================================================================

impl GraphStore for MemoryStore {
    fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    fn person_count(&self) -> usize {
        self.people.len()
    }

    fn contains(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    fn insert_person(&mut self, mut person: Person) -> Result<()> {
        if self.people.contains_key(&person.id) {
            return Err(Error::DuplicatePerson(person.id));
        }
        person.connections.clear();
        debug!(person = %person.id, "insert person");
        self.people.insert(person.id.clone(), person);
        Ok(())
    }

    fn add_connection(&mut self, a: &PersonId, b: &PersonId) -> Result<bool> {
        self.require_pair(a, b)?;
        if a == b {
            return Err(Error::SelfConnection(a.clone()));
        }
        if self.people[a].is_connected_to(b) {
            // Already connected: no-op, but still verify the other side.
            self.check_pair(a, b)?;
            return Ok(false);
        }

        self.link(a, b, true);
        self.link(b, a, true);
        debug!(%a, %b, "connection added");
        self.check_pair(a, b)?;
        Ok(true)
    }

    fn remove_connection(&mut self, a: &PersonId, b: &PersonId) -> Result<bool> {
        self.require_pair(a, b)?;
        if !self.people[a].is_connected_to(b) {
            self.check_pair(a, b)?;
            return match self.removal_policy {
                RemovalPolicy::Strict => Err(Error::UnknownEdge { a: a.clone(), b: b.clone() }),
                RemovalPolicy::Lenient => Ok(false),
            };
        }

        self.link(a, b, false);
        self.link(b, a, false);
        debug!(%a, %b, "connection removed");
        self.check_pair(a, b)?;
        Ok(true)
    }

    fn set_removal_policy(&mut self, policy: RemovalPolicy) {
        self.removal_policy = policy;
    }
}

// ============================================================================
// Tests
// ============================================================================
