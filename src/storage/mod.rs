//! # Graph Store
//!
//! The contract between the engine and whatever holds people and connections.
//! Reachability and route finding only ever take `&impl GraphStore`; mutation
//! takes `&mut`, so a traversal can never overlap a mutation.
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `MemoryStore` | `memory` | Hash maps, fully resident |

pub mod memory;

use hashbrown::HashSet;
use tracing::error;

use crate::config::RemovalPolicy;
use crate::model::{Person, PersonId};
use crate::{Error, Result};

pub use memory::MemoryStore;

/// The graph store contract.
///
/// Connections are undirected: implementations must keep
/// `b ∈ connections(a) ⇔ a ∈ connections(b)` after every mutation, and every
/// connection id must name a stored person.
pub trait GraphStore {
    // ========================================================================
    // Read access
    // ========================================================================

    /// Get a person by id. Returns None if not found.
    fn person(&self, id: &PersonId) -> Option<&Person>;

    /// All stored people, in no particular order.
    fn people(&self) -> impl Iterator<Item = &Person>;

    fn person_count(&self) -> usize;

    fn contains(&self, id: &PersonId) -> bool {
        self.person(id).is_some()
    }

    /// Current connection set of `id`.
    fn connections(&self, id: &PersonId) -> Result<&HashSet<PersonId>> {
        self.person(id)
            .map(|p| &p.connections)
            .ok_or_else(|| Error::UnknownPerson(id.clone()))
    }

    /// All person ids, sorted.
    fn person_ids(&self) -> Vec<PersonId> {
        let mut ids: Vec<PersonId> = self.people().map(|p| p.id.clone()).collect();
        ids.sort();
        ids
    }

    /// Number of undirected connections.
    fn connection_count(&self) -> usize {
        self.people().map(Person::degree).sum::<usize>() / 2
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Register a person with no connections. Fails on a duplicate id.
    ///
    /// Any connections listed on `person` are dropped; wire them with
    /// `add_connection` so symmetry is maintained.
    fn insert_person(&mut self, person: Person) -> Result<()>;

    /// Connect `a` and `b` in both directions.
    ///
    /// Returns `true` if the connection is new, `false` if it already existed.
    fn add_connection(&mut self, a: &PersonId, b: &PersonId) -> Result<bool>;

    /// Disconnect `a` and `b` in both directions.
    ///
    /// Returns `true` if a connection was removed. A missing connection is
    /// handled per the store's `RemovalPolicy`.
    fn remove_connection(&mut self, a: &PersonId, b: &PersonId) -> Result<bool>;

    /// Decide what `remove_connection` does with a missing connection.
    fn set_removal_policy(&mut self, policy: RemovalPolicy);

    // ========================================================================
    // Invariants
    // ========================================================================

    /// Verify symmetry and referential integrity over the whole graph.
    ///
    /// A failure here is a store defect, not a caller error.
    fn check_invariants(&self) -> Result<()> {
        for person in self.people() {
            for other in &person.connections {
                if *other == person.id {
                    return Err(violation(format!("{} is connected to itself", person.id)));
                }
                let back = self
                    .person(other)
                    .ok_or_else(|| violation(format!("{} lists unknown person {other}", person.id)))?;
                if !back.is_connected_to(&person.id) {
                    return Err(violation(format!(
                        "{} lists {other} but {other} does not list {}",
                        person.id, person.id
                    )));
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn violation(message: String) -> Error {
    error!(%message, "graph invariant violated");
    Error::InvariantViolation(message)
}
