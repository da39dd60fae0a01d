//! Marriages command implementation.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use kindred_domain::{Marriage, Person, PersonId, PersonStore};
use kindred_store::MemoryStore;

/// Execute the marriages command: every marriage, earliest wedding first.
pub fn execute_marriages(store: &MemoryStore, formatter: &Formatter) -> Result<String> {
    let mut marriages = store.marriages().to_vec();
    marriages.sort_by_key(|m| (m.wedding_date.is_none(), m.wedding_date));

    let rows = marriages
        .into_iter()
        .map(|marriage| -> Result<(Marriage, Person, Person)> {
            let husband = person(store, marriage.husband)?;
            let wife = person(store, marriage.wife)?;
            Ok((marriage, husband, wife))
        })
        .collect::<Result<Vec<_>>>()?;

    formatter.format_marriages(&rows)
}

fn person(store: &MemoryStore, id: PersonId) -> Result<Person> {
    store
        .get_person(id)?
        .ok_or_else(|| CliError::PersonNotFound(id.to_string()))
}
