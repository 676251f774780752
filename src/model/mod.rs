//! # Social Graph Model
//!
//! Plain data that crosses every boundary: store ↔ reachability ↔ routes ↔ caller.
//! No I/O and no state here.

pub mod person;
pub mod route;
pub mod tiers;

pub use person::{Person, PersonId};
pub use route::{Route, RouteHops};
pub use tiers::{Placement, TierAssignment};
