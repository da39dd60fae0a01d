//! Blood-relative sets
//!
//! Two people are blood relatives when they share an ancestor. Rather than
//! expanding every ancestor's descendants, only root ancestors (no recorded
//! parents at all) are expanded: every other ancestor, and so every other
//! ancestor's descendants, already sits below some root.

use crate::config::KinshipConfig;
use crate::error::KinshipError;
use crate::walker::{ancestor_graph, ancestors, descendants};
use kindred_domain::{PersonId, PersonStore};
use std::collections::BTreeSet;

/// Ancestors of `person` with no recorded parent on either side
///
/// When `person` has no ancestors at all, they are their own root.
pub fn root_ancestors<S>(
    store: &S,
    person: PersonId,
    config: &KinshipConfig,
) -> Result<Vec<PersonId>, KinshipError>
where
    S: PersonStore,
    S::Error: std::fmt::Display,
{
    let graph = ancestor_graph(store, person, config)?;

    let mut roots: Vec<PersonId> = graph
        .iter()
        .filter(|(id, parents)| **id != person && parents.is_empty())
        .map(|(id, _)| *id)
        .collect();
    if roots.is_empty() {
        roots.push(person);
    }
    roots.sort();
    Ok(roots)
}

/// Every blood relative of `person`, excluding `person`
pub fn blood_relatives<S>(
    store: &S,
    person: PersonId,
    config: &KinshipConfig,
) -> Result<BTreeSet<PersonId>, KinshipError>
where
    S: PersonStore,
    S::Error: std::fmt::Display,
{
    let roots = root_ancestors(store, person, config)?;

    let mut relatives = BTreeSet::new();
    for root in &roots {
        relatives.insert(*root);
        relatives.extend(descendants(store, *root, config)?);
    }
    relatives.remove(&person);

    tracing::info!(
        "{} has {} blood relatives below {} root ancestors",
        person,
        relatives.len(),
        roots.len()
    );
    Ok(relatives)
}

/// Blood relatives by exhaustive expansion
///
/// The union of every ancestor, every ancestor's descendants and the
/// person's own descendants. Always equal to [`blood_relatives`]; kept as a
/// reference for checking it.
pub fn brute_force_relatives<S>(
    store: &S,
    person: PersonId,
    config: &KinshipConfig,
) -> Result<BTreeSet<PersonId>, KinshipError>
where
    S: PersonStore,
    S::Error: std::fmt::Display,
{
    let mut relatives = BTreeSet::new();
    relatives.extend(descendants(store, person, config)?);
    for ancestor in ancestors(store, person, config)? {
        relatives.insert(ancestor);
        relatives.extend(descendants(store, ancestor, config)?);
    }
    relatives.remove(&person);
    Ok(relatives)
}
