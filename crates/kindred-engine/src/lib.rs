//! Kindred Engine
//!
//! Kinship computations over a family graph read through
//! [`PersonStore`](kindred_domain::PersonStore).
//!
//! # Overview
//!
//! - **Walkers**: ancestors with minimum generation distance; descendants
//!   in birth order, line by line
//! - **Relative sets**: every blood relative, found from root ancestors
//! - **Namer**: the natural-language label for one person relative to another
//! - **Kinship**: the query facade tying the above together, plus spouses,
//!   siblings, children and ages
//!
//! All walks use explicit stacks and queues and are bounded by
//! [`KinshipConfig::max_depth`]. A cycle in parent links is reported as
//! [`KinshipError::GraphIntegrity`] or pruned with a warning, per
//! [`CyclePolicy`].
//!
//! # Usage
//!
//! ```no_run
//! use kindred_engine::{Kinship, KinshipConfig};
//! use kindred_store::MemoryStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::load("family.json")?;
//! let config = KinshipConfig::default();
//! let kinship = Kinship::new(&store, &config);
//!
//! let me = store.find_by_name("Ada Byron")[0];
//! for relative in kinship.annotated_relatives(me)? {
//!     println!("{}: {}", relative.person, relative.relationship);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! max_depth = 256
//! cycle_policy = "fail"   # or "prune"
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod family;
pub mod namer;
pub mod relatives;
pub mod walker;

pub use config::{CyclePolicy, KinshipConfig};
pub use error::KinshipError;
pub use family::{Kinship, Relative};
pub use namer::{describe_relative, CommonAncestor, Couples, KinshipNamer};
pub use relatives::{blood_relatives, brute_force_relatives, root_ancestors};
pub use walker::{ancestor_distances, ancestors, descendant_distances, descendants, AncestorDistances};
