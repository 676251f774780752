//! People file import/export.
//!
//! The data set is a single JSON document:
//!
//! ```text
//! { "users": [ { "id": "1", "name": "Ada", "connections": ["2", "3"] }, ... ] }
//! ```
//!
//! Loading validates the records as a whole (unique ids, every connection
//! names a listed person, nobody lists themselves, adjacency is symmetric)
//! before anything reaches a store. Export writes people and connections in
//! id order so a dump can be diffed and loaded back unchanged.

use std::io::Read;

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Person, PersonId};
use crate::storage::{violation, GraphStore, MemoryStore};
use crate::{Error, Result};

/// One person as written in the people file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub connections: Vec<PersonId>,
}

impl PersonRecord {
    pub fn new(
        id: impl Into<PersonId>,
        name: impl Into<String>,
        connections: impl IntoIterator<Item = impl Into<PersonId>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            connections: connections.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&Person> for PersonRecord {
    fn from(p: &Person) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            connections: p.sorted_connections(),
        }
    }
}

/// The people file document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleFile {
    pub users: Vec<PersonRecord>,
}

// ============================================================================
// Import
// ============================================================================

pub fn from_json_str(s: &str) -> Result<MemoryStore> {
    let file: PeopleFile = serde_json::from_str(s)?;
    from_records(file.users)
}

pub fn from_json_reader<R: Read>(reader: R) -> Result<MemoryStore> {
    let file: PeopleFile = serde_json::from_reader(reader)?;
    from_records(file.users)
}

/// Validate `records` and build a store from them.
pub fn from_records(records: impl IntoIterator<Item = PersonRecord>) -> Result<MemoryStore> {
    let records: Vec<PersonRecord> = records.into_iter().collect();

    let mut adjacency: HashMap<&PersonId, HashSet<&PersonId>> = HashMap::with_capacity(records.len());
    for r in &records {
        if adjacency.insert(&r.id, r.connections.iter().collect()).is_some() {
            return Err(Error::DuplicatePerson(r.id.clone()));
        }
    }

    for (&id, conns) in &adjacency {
        for &other in conns {
            if other == id {
                return Err(violation(format!("{id} lists itself as a connection")));
            }
            let Some(back) = adjacency.get(other) else {
                return Err(violation(format!("{id} lists unknown person {other}")));
            };
            if !back.contains(id) {
                return Err(violation(format!("{id} lists {other} but {other} does not list {id}")));
            }
        }
    }

    let mut store = MemoryStore::with_capacity(records.len());
    for r in &records {
        store.insert_person(Person::new(r.id.clone(), r.name.clone()))?;
    }
    for r in &records {
        for other in &r.connections {
            if r.id < *other {
                store.add_connection(&r.id, other)?;
            }
        }
    }

    debug!(
        people = store.person_count(),
        connections = store.connection_count(),
        "people loaded"
    );
    Ok(store)
}

// ============================================================================
// Export
// ============================================================================

/// Records for every stored person, sorted by id.
pub fn to_records<S: GraphStore>(store: &S) -> Vec<PersonRecord> {
    let mut records: Vec<PersonRecord> = store.people().map(PersonRecord::from).collect();
    records.sort_by(|a, b| a.id.cmp(&b.id));
    records
}

pub fn to_json_string<S: GraphStore>(store: &S) -> Result<String> {
    let file = PeopleFile { users: to_records(store) };
    Ok(serde_json::to_string_pretty(&file)?)
}

// ============================================================================
// Tests
// ============================================================================
