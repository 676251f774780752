//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of named tiers shown to a signed-in person.
pub const DEFAULT_HORIZON: u32 = 4;

/// What `remove_connection` does when the edge does not exist.
///
/// Applied the same way whichever endpoint order the caller passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Fail with `Error::UnknownEdge`.
    #[default]
    Strict,
    /// Succeed without changing anything.
    Lenient,
}

/// How the route finder enumerates shortest routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStrategy {
    /// Depth-limited backtracking from home, cut off at the target's tier.
    #[default]
    Backtracking,
    /// Walk from home along neighbours whose distance to the target strictly decreases.
    DistancePruned,
}

/// Configuration for a `Network`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub horizon: u32,
    pub removal_policy: RemovalPolicy,
    pub route_strategy: RouteStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            removal_policy: RemovalPolicy::default(),
            route_strategy: RouteStrategy::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_horizon(mut self, horizon: u32) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    pub fn with_route_strategy(mut self, strategy: RouteStrategy) -> Self {
        self.route_strategy = strategy;
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 {
            return Err(Error::InvalidConfig("horizon must be at least 1".into()));
        }
        Ok(())
    }
}
