//! Relationship queries over one family snapshot

use crate::config::KinshipConfig;
use crate::error::{store_error, KinshipError};
use crate::namer::{CommonAncestor, KinshipNamer};
use crate::{relatives, walker};
use chrono::NaiveDate;
use kindred_domain::{age_between, Gender, Person, PersonId, PersonStore, RelationshipLabel};
use serde::Serialize;
use std::collections::HashSet;

/// A person paired with how they are related to a subject
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relative {
    /// The related person
    pub person: Person,
    /// How they are related to the subject
    pub relationship: RelationshipLabel,
}

/// Read-only relationship queries against a PersonStore
///
/// Every call builds its own traversal state, so one `Kinship` can serve any
/// number of queries against the same snapshot.
///
/// # Examples
///
/// ```
/// use kindred_domain::{Gender, Person, PersonId};
/// use kindred_engine::{Kinship, KinshipConfig};
/// use kindred_store::MemoryStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut store = MemoryStore::new();
/// let gran = store.insert_person(Person::new(PersonId::new(), "Edith", "Ray", Gender::Female))?;
/// let mum = store.insert_person(
///     Person::new(PersonId::new(), "Joan", "Ray", Gender::Female).with_parents(Some(gran), None),
/// )?;
/// let kid = store.insert_person(
///     Person::new(PersonId::new(), "Tom", "Ray", Gender::Male).with_parents(Some(mum), None),
/// )?;
///
/// let config = KinshipConfig::default();
/// let kinship = Kinship::new(&store, &config);
/// assert_eq!(kinship.describe_relative(kid, gran)?.to_string(), "grandmother");
/// assert_eq!(kinship.describe_relative(gran, kid)?.to_string(), "grandson");
/// # Ok(())
/// # }
/// ```
pub struct Kinship<'s, S> {
    store: &'s S,
    config: &'s KinshipConfig,
}

impl<'s, S> Kinship<'s, S>
where
    S: PersonStore,
    S::Error: std::fmt::Display,
{
    /// Create a query facade over `store`
    pub fn new(store: &'s S, config: &'s KinshipConfig) -> Self {
        Self { store, config }
    }

    /// The configuration in use
    pub fn config(&self) -> &KinshipConfig {
        self.config
    }

    /// Fetch a person record
    pub fn person(&self, id: PersonId) -> Result<Person, KinshipError> {
        self.store
            .get_person(id)
            .map_err(store_error)?
            .ok_or_else(|| KinshipError::Store(format!("Person not found: {}", id)))
    }

    /// Full name, with middle names and maiden name note
    pub fn name(&self, id: PersonId) -> Result<String, KinshipError> {
        Ok(self.person(id)?.name(true, false))
    }

    /// Age in years today; `None` when it cannot be known
    pub fn age(&self, id: PersonId) -> Result<Option<u32>, KinshipError> {
        self.age_on(id, chrono::Local::now().date_naive())
    }

    /// Age in years as of `today`; `None` when it cannot be known
    pub fn age_on(&self, id: PersonId, today: NaiveDate) -> Result<Option<u32>, KinshipError> {
        let birth = self.store.get_birth_date(id).map_err(store_error)?;
        let death = self.store.get_death_date(id).map_err(store_error)?;
        let deceased = self.store.is_deceased(id).map_err(store_error)?;
        Ok(age_between(birth, death, deceased, today))
    }

    /// Everyone this person is or was married to
    pub fn spouses(&self, id: PersonId) -> Result<Vec<Person>, KinshipError> {
        let spouses: Vec<PersonId> = match self.store.get_gender(id).map_err(store_error)? {
            Gender::Female => self
                .store
                .marriages_as_wife(id)
                .map_err(store_error)?
                .into_iter()
                .map(|m| m.husband)
                .collect(),
            Gender::Male => self
                .store
                .marriages_as_husband(id)
                .map_err(store_error)?
                .into_iter()
                .map(|m| m.wife)
                .collect(),
        };
        self.people(&spouses)
    }

    /// Brothers and sisters, half-siblings included, eldest first
    pub fn siblings(&self, id: PersonId) -> Result<Vec<Person>, KinshipError> {
        let mut found: Vec<PersonId> = Vec::new();
        if let Some(mother) = self.store.get_mother(id).map_err(store_error)? {
            found.extend(self.store.children_of_mother(mother).map_err(store_error)?);
        }
        if let Some(father) = self.store.get_father(id).map_err(store_error)? {
            found.extend(self.store.children_of_father(father).map_err(store_error)?);
        }

        let mut seen = HashSet::from([id]);
        found.retain(|sibling| seen.insert(*sibling));
        self.by_birth(found)
    }

    /// Children, eldest first
    pub fn children(&self, id: PersonId) -> Result<Vec<Person>, KinshipError> {
        let children = walker::children_of(self.store, id)?;
        self.people(&children)
    }

    /// Descendants, each generation's children in birth order, line by line
    pub fn descendants(&self, id: PersonId) -> Result<Vec<Person>, KinshipError> {
        let found = walker::descendants(self.store, id, self.config)?;
        self.people(&found)
    }

    /// Ancestors, nearest generation first
    pub fn ancestors(&self, id: PersonId) -> Result<Vec<Person>, KinshipError> {
        let mut found: Vec<(u32, PersonId)> = walker::ancestor_distances(self.store, id, self.config)?
            .into_iter()
            .map(|(ancestor, distance)| (distance, ancestor))
            .collect();
        found.sort();
        let ids: Vec<PersonId> = found.into_iter().map(|(_, ancestor)| ancestor).collect();
        self.people(&ids)
    }

    /// Blood relatives, eldest first
    pub fn relatives(&self, id: PersonId) -> Result<Vec<Person>, KinshipError> {
        let found = relatives::blood_relatives(self.store, id, self.config)?;
        self.by_birth(found.into_iter().collect())
    }

    /// How `other` is related by blood to `subject`
    pub fn describe_relative(
        &self,
        subject: PersonId,
        other: PersonId,
    ) -> Result<RelationshipLabel, KinshipError> {
        KinshipNamer::new(self.store, subject, self.config)?.describe(other)
    }

    /// How `other` is related to `subject`, by blood or else by marriage
    pub fn relationship_between(
        &self,
        subject: PersonId,
        other: PersonId,
    ) -> Result<RelationshipLabel, KinshipError> {
        let blood = self.describe_relative(subject, other)?;
        if blood.is_related() {
            return Ok(blood);
        }

        if self.spouses(subject)?.iter().any(|spouse| spouse.id == other) {
            let gender = self.store.get_gender(other).map_err(store_error)?;
            return Ok(RelationshipLabel::Spouse { gender });
        }
        Ok(RelationshipLabel::Unrelated)
    }

    /// Ancestors shared by two people, closest first
    pub fn common_ancestors(
        &self,
        subject: PersonId,
        other: PersonId,
    ) -> Result<Vec<CommonAncestor>, KinshipError> {
        KinshipNamer::new(self.store, subject, self.config)?.common_ancestors(other)
    }

    /// Ancestors with their relationship to `id`
    pub fn annotated_ancestors(&self, id: PersonId) -> Result<Vec<Relative>, KinshipError> {
        let people = self.ancestors(id)?;
        self.annotate(id, people)
    }

    /// Descendants with their relationship to `id`
    pub fn annotated_descendants(&self, id: PersonId) -> Result<Vec<Relative>, KinshipError> {
        let people = self.descendants(id)?;
        self.annotate(id, people)
    }

    /// Blood relatives with their relationship to `id`
    pub fn annotated_relatives(&self, id: PersonId) -> Result<Vec<Relative>, KinshipError> {
        let people = self.relatives(id)?;
        self.annotate(id, people)
    }

    /// Siblings labelled as full or half
    pub fn annotated_siblings(&self, id: PersonId) -> Result<Vec<Relative>, KinshipError> {
        let people = self.siblings(id)?;
        self.annotate(id, people)
    }

    /// Children labelled son or daughter
    pub fn annotated_children(&self, id: PersonId) -> Result<Vec<Relative>, KinshipError> {
        let people = self.children(id)?;
        self.annotate(id, people)
    }

    /// Spouses labelled husband or wife
    pub fn annotated_spouses(&self, id: PersonId) -> Result<Vec<Relative>, KinshipError> {
        Ok(self
            .spouses(id)?
            .into_iter()
            .map(|person| Relative {
                relationship: RelationshipLabel::Spouse {
                    gender: person.gender,
                },
                person,
            })
            .collect())
    }

    fn annotate(&self, subject: PersonId, people: Vec<Person>) -> Result<Vec<Relative>, KinshipError> {
        let namer = KinshipNamer::new(self.store, subject, self.config)?;
        people
            .into_iter()
            .map(|person| -> Result<Relative, KinshipError> {
                let relationship = namer.describe(person.id)?;
                Ok(Relative { person, relationship })
            })
            .collect()
    }

    fn people(&self, ids: &[PersonId]) -> Result<Vec<Person>, KinshipError> {
        ids.iter().map(|id| self.person(*id)).collect()
    }

    /// Records for `ids`, eldest first; unknown birth dates last
    fn by_birth(&self, ids: Vec<PersonId>) -> Result<Vec<Person>, KinshipError> {
        let mut people = self.people(&ids)?;
        people.sort_by_key(|p| (p.date_of_birth.is_none(), p.date_of_birth, p.id));
        Ok(people)
    }
}
