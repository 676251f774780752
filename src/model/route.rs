//! Route — a simple path of connections from home to a target.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::PersonId;

/// Routes rarely exceed the default four-hop horizon, so five ids stay inline.
pub type RouteHops = SmallVec<[PersonId; 5]>;

/// A route: home -> p1 -> p2 -> ... -> target. No id repeats.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    hops: RouteHops,
}

impl Route {
    pub fn single(start: PersonId) -> Self {
        let mut hops = RouteHops::new();
        hops.push(start);
        Self { hops }
    }

    /// Number of connections traversed.
    pub fn len(&self) -> usize {
        self.hops.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn start(&self) -> Option<&PersonId> {
        self.hops.first()
    }

    pub fn end(&self) -> Option<&PersonId> {
        self.hops.last()
    }

    pub fn people(&self) -> &[PersonId] {
        &self.hops
    }

    pub fn contains(&self, id: &PersonId) -> bool {
        self.hops.contains(id)
    }

    /// Extend the route by one connection.
    pub fn push(&mut self, next: PersonId) {
        self.hops.push(next);
    }

    pub(crate) fn pop(&mut self) -> Option<PersonId> {
        // The start of a route is never popped.
        if self.hops.len() > 1 { self.hops.pop() } else { None }
    }

    /// Consecutive pairs along the route.
    pub fn edges(&self) -> impl Iterator<Item = (&PersonId, &PersonId)> {
        self.hops.windows(2).map(|w| (&w[0], &w[1]))
    }
}

impl FromIterator<PersonId> for Route {
    fn from_iter<I: IntoIterator<Item = PersonId>>(iter: I) -> Self {
        Self { hops: iter.into_iter().collect() }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, id) in self.hops.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_keeps_start() {
        let mut r = Route::single("a".into());
        r.push("b".into());
        assert_eq!(r.len(), 1);
        assert_eq!(r.pop(), Some(PersonId::from("b")));
        assert_eq!(r.pop(), None);
        assert!(r.is_empty());
        assert_eq!(r.start(), Some(&PersonId::from("a")));
    }

    #[test]
    fn test_edges_and_display() {
        let r: Route = ["a", "b", "c"].into_iter().map(PersonId::from).collect();
        let edges: Vec<_> = r.edges().map(|(x, y)| (x.as_str(), y.as_str())).collect();
        assert_eq!(edges, vec![("a", "b"), ("b", "c")]);
        assert_eq!(r.to_string(), "a -> b -> c");
    }
}
