//! Kindred Domain Layer
//!
//! This crate holds the value types of a family tree and the trait boundary
//! that the kinship engine reads through. It depends only on small primitive
//! crates (ids, dates, serde) and contains no traversal logic.
//!
//! ## Key Concepts
//!
//! - **Person**: an individual with optional mother/father links
//! - **Marriage**: a husband/wife pairing, the only non-blood link
//! - **RelationshipLabel**: how one person is related to another, with
//!   natural-language phrasing ("great-aunt", "second cousin twice removed")
//! - **PersonStore**: read-only access to a snapshot of the family graph
//!
//! ## Architecture
//!
//! - Pure data and arithmetic only
//! - Graph walks live in kindred-engine
//! - Storage implementations live in kindred-store

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod marriage;
pub mod person;
pub mod relationship;
pub mod traits;

// Re-exports for convenience
pub use marriage::Marriage;
pub use person::{age_between, Gender, Person, PersonId};
pub use relationship::RelationshipLabel;
pub use traits::PersonStore;
