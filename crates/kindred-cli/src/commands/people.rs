//! People command implementation.

use crate::error::Result;
use crate::output::Formatter;
use kindred_domain::{Person, PersonStore};
use kindred_store::MemoryStore;

/// Execute the people command: everyone, sorted by surname then forename.
pub fn execute_people(store: &MemoryStore, formatter: &Formatter) -> Result<String> {
    let mut people: Vec<Person> = store.all_persons()?;
    people.sort_by(|a, b| {
        (&a.surname, &a.forename, a.id).cmp(&(&b.surname, &b.forename, b.id))
    });
    formatter.format_people(&people)
}
