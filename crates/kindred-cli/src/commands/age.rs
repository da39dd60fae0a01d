//! Age command implementation.

use super::resolve_person;
use crate::cli::AgeArgs;
use crate::error::Result;
use crate::output::Formatter;
use kindred_engine::{Kinship, KinshipConfig};
use kindred_store::MemoryStore;

/// Execute the age command.
pub fn execute_age(
    args: AgeArgs,
    store: &MemoryStore,
    config: &KinshipConfig,
    formatter: &Formatter,
) -> Result<String> {
    let id = resolve_person(store, &args.person)?;
    let kinship = Kinship::new(store, config);

    let age = match args.on {
        Some(date) => kinship.age_on(id, date)?,
        None => kinship.age(id)?,
    };

    formatter.format_age(&kinship.person(id)?, age)
}
