//! Error types for kinship computations

use kindred_domain::PersonId;
use thiserror::Error;

/// Errors that can occur while walking a family graph
///
/// "No relation" is never an error; it is reported as
/// [`RelationshipLabel::Unrelated`](kindred_domain::RelationshipLabel::Unrelated).
#[derive(Error, Debug)]
pub enum KinshipError {
    /// Storage layer error
    #[error("Storage error: {0}")]
    Store(String),

    /// Parent links form a cycle (someone is their own ancestor)
    #[error("Graph integrity error at {person}: {detail}")]
    GraphIntegrity {
        /// Person at which the cycle closes
        person: PersonId,
        /// What was found
        detail: String,
    },

    /// A walk went deeper than the configured generation limit
    #[error("Walk from {person} exceeded {limit} generations")]
    DepthExceeded {
        /// Person the walk started from
        person: PersonId,
        /// Configured limit
        limit: usize,
    },
}

/// Map any store error into [`KinshipError::Store`]
pub(crate) fn store_error<E: std::fmt::Display>(e: E) -> KinshipError {
    KinshipError::Store(e.to_string())
}
