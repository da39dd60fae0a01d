//! Trait definitions for external interactions
//!
//! These traits define the boundary between kinship logic and whatever holds
//! the family records. Implementations live in other crates.

use crate::{Gender, Marriage, Person, PersonId};
use chrono::NaiveDate;

/// Read access to a snapshot of the family graph
///
/// Implemented by the infrastructure layer (kindred-store). Every method is a
/// pure read; callers assume the snapshot does not change while they walk it.
pub trait PersonStore {
    /// Error type for store operations
    type Error;

    /// Get a person record by ID
    fn get_person(&self, id: PersonId) -> Result<Option<Person>, Self::Error>;

    /// List every person in the store
    fn all_persons(&self) -> Result<Vec<Person>, Self::Error>;

    /// Mother of `id`, if recorded
    fn get_mother(&self, id: PersonId) -> Result<Option<PersonId>, Self::Error>;

    /// Father of `id`, if recorded
    fn get_father(&self, id: PersonId) -> Result<Option<PersonId>, Self::Error>;

    /// People whose mother is `id`, ordered by date of birth
    fn children_of_mother(&self, id: PersonId) -> Result<Vec<PersonId>, Self::Error>;

    /// People whose father is `id`, ordered by date of birth
    fn children_of_father(&self, id: PersonId) -> Result<Vec<PersonId>, Self::Error>;

    /// Marriages in which `id` is the husband
    fn marriages_as_husband(&self, id: PersonId) -> Result<Vec<Marriage>, Self::Error>;

    /// Marriages in which `id` is the wife
    fn marriages_as_wife(&self, id: PersonId) -> Result<Vec<Marriage>, Self::Error>;

    /// Gender of `id`
    fn get_gender(&self, id: PersonId) -> Result<Gender, Self::Error>;

    /// Date of birth of `id`
    fn get_birth_date(&self, id: PersonId) -> Result<Option<NaiveDate>, Self::Error>;

    /// Date of death of `id`
    fn get_death_date(&self, id: PersonId) -> Result<Option<NaiveDate>, Self::Error>;

    /// Whether `id` is recorded as deceased
    fn is_deceased(&self, id: PersonId) -> Result<bool, Self::Error>;
}
