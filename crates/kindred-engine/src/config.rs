//! Configuration for kinship computations
//!
//! Bounds how deep walks may go and what to do when parent links loop.

use serde::{Deserialize, Serialize};

/// What a walk does when it finds a cycle in parent/child links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Stop with [`KinshipError::GraphIntegrity`](crate::KinshipError::GraphIntegrity)
    Fail,

    /// Log a warning and cut the link that closes the cycle
    Prune,
}

/// Configuration for the kinship engine
///
/// # Examples
///
/// ```
/// use kindred_engine::{CyclePolicy, KinshipConfig};
///
/// let config = KinshipConfig::default();
/// assert_eq!(config.max_depth, 256);
/// assert_eq!(config.cycle_policy, CyclePolicy::Fail);
///
/// let config = KinshipConfig::lenient();
/// assert_eq!(config.cycle_policy, CyclePolicy::Prune);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinshipConfig {
    /// Maximum number of generations any walk may cover
    /// Default: 256
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Reaction to a parent/child cycle
    /// Default: fail
    #[serde(default = "default_cycle_policy")]
    pub cycle_policy: CyclePolicy,
}

fn default_max_depth() -> usize {
    256
}

fn default_cycle_policy() -> CyclePolicy {
    CyclePolicy::Fail
}

impl Default for KinshipConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            cycle_policy: default_cycle_policy(),
        }
    }
}

impl KinshipConfig {
    /// Strict configuration: fail on cycles, shallow depth limit
    ///
    /// Suitable for validating imported trees.
    pub fn strict() -> Self {
        Self {
            max_depth: 64,
            cycle_policy: CyclePolicy::Fail,
        }
    }

    /// Lenient configuration: prune cycles, deep depth limit
    ///
    /// Suitable for browsing trees that may contain bad edits.
    pub fn lenient() -> Self {
        Self {
            max_depth: 1024,
            cycle_policy: CyclePolicy::Prune,
        }
    }
}
