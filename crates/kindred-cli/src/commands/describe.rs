//! Describe command implementation.

use super::resolve_person;
use crate::cli::DescribeArgs;
use crate::error::Result;
use crate::output::Formatter;
use kindred_engine::{Kinship, KinshipConfig};
use kindred_store::MemoryStore;

/// Execute the describe command.
///
/// Blood relationships win; a spouse is named only when the two are not
/// related by blood.
pub fn execute_describe(
    args: DescribeArgs,
    store: &MemoryStore,
    config: &KinshipConfig,
    formatter: &Formatter,
) -> Result<String> {
    let subject = resolve_person(store, &args.subject)?;
    let other = resolve_person(store, &args.other)?;

    let kinship = Kinship::new(store, config);
    let label = kinship.relationship_between(subject, other)?;

    formatter.format_label(&kinship.person(subject)?, &kinship.person(other)?, &label)
}
