//! Command implementations.
//!
//! Each command renders its result to a string so `main` decides where it goes.

pub mod age;
pub mod describe;
pub mod marriages;
pub mod people;
pub mod query;

pub use self::age::execute_age;
pub use self::describe::execute_describe;
pub use self::marriages::execute_marriages;
pub use self::people::execute_people;
pub use self::query::{execute_query, Listing};

use crate::cli::Command;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kindred_domain::{PersonId, PersonStore};
use kindred_engine::KinshipConfig;
use kindred_store::MemoryStore;

/// Run one command against a loaded family.
pub fn execute(
    command: Command,
    store: &MemoryStore,
    config: &KinshipConfig,
    formatter: &Formatter,
) -> Result<String> {
    match command {
        Command::People => execute_people(store, formatter),
        Command::Marriages => execute_marriages(store, formatter),
        Command::Ancestors(args) => execute_query(Listing::Ancestors, args, store, config, formatter),
        Command::Descendants(args) => execute_query(Listing::Descendants, args, store, config, formatter),
        Command::Relatives(args) => execute_query(Listing::Relatives, args, store, config, formatter),
        Command::Siblings(args) => execute_query(Listing::Siblings, args, store, config, formatter),
        Command::Children(args) => execute_query(Listing::Children, args, store, config, formatter),
        Command::Spouses(args) => execute_query(Listing::Spouses, args, store, config, formatter),
        Command::Describe(args) => execute_describe(args, store, config, formatter),
        Command::Age(args) => execute_age(args, store, config, formatter),
    }
}

/// Find a person by id, or else by exact full name.
pub fn resolve_person(store: &MemoryStore, reference: &str) -> Result<PersonId> {
    if let Ok(id) = PersonId::from_string(reference.trim()) {
        if store.get_person(id)?.is_some() {
            return Ok(id);
        }
    }

    let matches = store.find_by_name(reference);
    match matches.as_slice() {
        [] => Err(CliError::PersonNotFound(reference.to_string())),
        [id] => Ok(*id),
        _ => Err(CliError::Ambiguous(reference.to_string(), matches.len())),
    }
}
