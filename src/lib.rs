//! # friend-bloom — Social Graph Tiers and Routes
//!
//! Tracks people and their mutual connections, and answers two questions for
//! a signed-in "home" person:
//!
//! 1. How many hops away is everyone else? (tiers 1..=4, plus everyone farther
//!    or unreachable in a residual set)
//! 2. What are *all* the shortest routes from home to a given person?
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `GraphStore` is the contract between the engine and storage
//! 2. **Plain data**: `Person`, `TierAssignment`, `Route` are owned snapshots
//! 3. **No ambient state**: tiers are threaded into route finding explicitly
//! 4. **General traversal**: BFS computes exact distances; the horizon is
//!    only a classification step on top
//!
//! ## Quick Start
//!
//! ```rust
//! use friend_bloom::{Network, EngineConfig, PersonId};
//!
//! # fn example() -> friend_bloom::Result<()> {
//! let mut net = Network::from_json_str(
//!     r#"{"users": [
//!         {"id": "a", "name": "Ada", "connections": ["b"]},
//!         {"id": "b", "name": "Bo",  "connections": ["a", "c"]},
//!         {"id": "c", "name": "Cy",  "connections": ["b"]}
//!     ]}"#,
//!     EngineConfig::default(),
//! )?;
//!
//! let tiers = net.sign_in(&PersonId::from("a"))?;
//! assert_eq!(tiers.tier_of(&PersonId::from("c")), Some(2));
//!
//! let routes = net.routes_to(&PersonId::from("c"))?;
//! assert_eq!(routes[0].to_string(), "a -> b -> c");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod storage;
pub mod reach;
pub mod route;
pub mod config;
pub mod load;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Person, PersonId, Placement, Route, TierAssignment};
pub use storage::{GraphStore, MemoryStore};
pub use config::{EngineConfig, RemovalPolicy, RouteStrategy, DEFAULT_HORIZON};
pub use load::{PeopleFile, PersonRecord};

use tracing::debug;

// ============================================================================
// Top-level Network handle
// ============================================================================

/// The primary entry point. A `Network` owns a graph store and the current
/// session, and keeps the session's tiers in step with every mutation.
pub struct Network<S: GraphStore = MemoryStore> {
    store: S,
    config: EngineConfig,
    session: Option<Session>,
}

/// Who is signed in, and their tiers as of the last mutation.
struct Session {
    home: PersonId,
    tiers: TierAssignment,
}

impl<S: GraphStore> Network<S> {
    /// Wrap an existing store, applying `config.removal_policy` to it.
    pub fn with_store(mut store: S, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        store.set_removal_policy(config.removal_policy);
        Ok(Self { store, config, session: None })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Make `home` the signed-in person and compute their tiers.
    pub fn sign_in(&mut self, home: &PersonId) -> Result<&TierAssignment> {
        let tiers = reach::compute_tiers(&self.store, home, self.config.horizon)?;
        debug!(%home, "signed in");
        let session = self.session.insert(Session { home: home.clone(), tiers });
        Ok(&session.tiers)
    }

    pub fn sign_out(&mut self) {
        if let Some(s) = self.session.take() {
            debug!(home = %s.home, "signed out");
        }
    }

    pub fn home(&self) -> Option<&PersonId> {
        self.session.as_ref().map(|s| &s.home)
    }

    /// The signed-in person's tiers, current as of the last mutation.
    pub fn tiers(&self) -> Option<&TierAssignment> {
        self.session.as_ref().map(|s| &s.tiers)
    }

    fn session(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(Error::NoSession)
    }

    /// Discard the session's tiers and compute them again.
    fn refresh(&mut self) -> Result<()> {
        if let Some(session) = self.session.as_mut() {
            session.tiers = reach::compute_tiers(&self.store, &session.home, self.config.horizon)?;
        }
        Ok(())
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Connect any two people. Tiers are recomputed before returning.
    pub fn connect(&mut self, a: &PersonId, b: &PersonId) -> Result<bool> {
        let added = self.store.add_connection(a, b)?;
        if added {
            self.refresh()?;
        }
        Ok(added)
    }

    /// Disconnect any two people. Tiers are recomputed before returning.
    pub fn disconnect(&mut self, a: &PersonId, b: &PersonId) -> Result<bool> {
        let removed = self.store.remove_connection(a, b)?;
        if removed {
            self.refresh()?;
        }
        Ok(removed)
    }

    /// Connect the signed-in person to `other`.
    pub fn add_connection(&mut self, other: &PersonId) -> Result<bool> {
        let home = self.session()?.home.clone();
        self.connect(&home, other)
    }

    /// Disconnect the signed-in person from `other`.
    pub fn remove_connection(&mut self, other: &PersonId) -> Result<bool> {
        let home = self.session()?.home.clone();
        self.disconnect(&home, other)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Every shortest route from the signed-in person to `target`.
    pub fn routes_to(&self, target: &PersonId) -> Result<Vec<Route>> {
        let session = self.session()?;
        route::find_routes(&self.store, &session.tiers, target, self.config.route_strategy)
    }

    /// The signed-in person's connections, sorted by id.
    pub fn current_connections(&self) -> Result<Vec<PersonId>> {
        let home = &self.session()?.home;
        let mut ids: Vec<PersonId> = self.store.connections(home)?.iter().cloned().collect();
        ids.sort();
        Ok(ids)
    }

    /// Everyone the signed-in person could still connect to, sorted by id.
    pub fn available_connections(&self) -> Result<Vec<PersonId>> {
        let home = &self.session()?.home;
        let current = self.store.connections(home)?;
        Ok(self
            .store
            .person_ids()
            .into_iter()
            .filter(|id| id != home && !current.contains(id))
            .collect())
    }

    pub fn display_name(&self, id: &PersonId) -> Option<&str> {
        self.store.person(id).map(|p| p.name.as_str())
    }

    /// Names for `ids`, in the same order; unknown ids are skipped.
    pub fn display_names<'a>(&self, ids: impl IntoIterator<Item = &'a PersonId>) -> Vec<String> {
        ids.into_iter()
            .filter_map(|id| self.display_name(id))
            .map(str::to_string)
            .collect()
    }
}

/// In-memory network built from the people file.
impl Network<MemoryStore> {
    pub fn from_json_str(s: &str, config: EngineConfig) -> Result<Self> {
        let store = load::from_json_str(s)?;
        Self::with_store(store, config)
    }

    pub fn from_reader<R: std::io::Read>(reader: R, config: EngineConfig) -> Result<Self> {
        let store = load::from_json_reader(reader)?;
        Self::with_store(store, config)
    }

    pub fn from_records(
        records: impl IntoIterator<Item = PersonRecord>,
        config: EngineConfig,
    ) -> Result<Self> {
        let store = load::from_records(records)?;
        Self::with_store(store, config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        load::to_json_string(&self.store)
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown person: {0}")]
    UnknownPerson(PersonId),

    #[error("No connection between {a} and {b}")]
    UnknownEdge { a: PersonId, b: PersonId },

    #[error("Cannot connect {0} to themselves")]
    SelfConnection(PersonId),

    #[error("Duplicate person: {0}")]
    DuplicatePerson(PersonId),

    #[error("Graph invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Nobody is signed in")]
    NoSession,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
