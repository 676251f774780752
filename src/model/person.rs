//! Person in the social graph.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

/// Opaque, stable person identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A person and their (undirected) connection set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub connections: HashSet<PersonId>,
}

impl Person {
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            connections: HashSet::new(),
        }
    }

    pub fn with_connections(
        mut self,
        connections: impl IntoIterator<Item = impl Into<PersonId>>,
    ) -> Self {
        self.connections = connections.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_connected_to(&self, other: &PersonId) -> bool {
        self.connections.contains(other)
    }

    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    /// Connection ids in sorted order, for stable display and export.
    pub fn sorted_connections(&self) -> Vec<PersonId> {
        let mut ids: Vec<PersonId> = self.connections.iter().cloned().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_builder() {
        let p = Person::new("1", "Ada").with_connections(["3", "2", "3"]);
        assert_eq!(p.id, PersonId::from("1"));
        assert_eq!(p.degree(), 2);
        assert!(p.is_connected_to(&"2".into()));
        assert_eq!(p.sorted_connections(), vec![PersonId::from("2"), PersonId::from("3")]);
    }

    #[test]
    fn test_person_id_is_transparent_in_json() {
        let id = PersonId::from("u-42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"u-42\"");
        assert_eq!(id.to_string(), "u-42");
    }
}
