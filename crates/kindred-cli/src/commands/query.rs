//! Relative listing commands.

use super::resolve_person;
use crate::cli::PersonArgs;
use crate::error::Result;
use crate::output::Formatter;
use kindred_engine::{Kinship, KinshipConfig};
use kindred_store::MemoryStore;

/// Which relatives to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// Ancestors, nearest first
    Ancestors,
    /// Descendants, line by line
    Descendants,
    /// All blood relatives
    Relatives,
    /// Full and half siblings
    Siblings,
    /// Children
    Children,
    /// Spouses
    Spouses,
}

/// Execute a listing command.
pub fn execute_query(
    listing: Listing,
    args: PersonArgs,
    store: &MemoryStore,
    config: &KinshipConfig,
    formatter: &Formatter,
) -> Result<String> {
    let id = resolve_person(store, &args.person)?;
    let kinship = Kinship::new(store, config);
    tracing::debug!(person = %id, ?listing, "Listing relatives");

    let relatives = match listing {
        Listing::Ancestors => kinship.annotated_ancestors(id)?,
        Listing::Descendants => kinship.annotated_descendants(id)?,
        Listing::Relatives => kinship.annotated_relatives(id)?,
        Listing::Siblings => kinship.annotated_siblings(id)?,
        Listing::Children => kinship.annotated_children(id)?,
        Listing::Spouses => kinship.annotated_spouses(id)?,
    };

    formatter.format_relatives(&relatives)
}
