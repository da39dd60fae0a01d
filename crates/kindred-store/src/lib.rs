//! Kindred Storage Layer
//!
//! Implements the PersonStore trait over an in-memory snapshot of a family.
//!
//! # Architecture
//!
//! - People are indexed by id; mother/father links are indexed in reverse so
//!   children lookups do not scan the whole family
//! - Marriages are kept in insertion order
//! - Snapshots load from and save to JSON (see [`FamilySnapshot`])
//!
//! # Examples
//!
//! ```
//! use kindred_domain::{Gender, Person, PersonId, PersonStore};
//! use kindred_store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! let mum = store.insert_person(Person::new(PersonId::new(), "Jane", "Doe", Gender::Female)).unwrap();
//! let kid = Person::new(PersonId::new(), "Sam", "Doe", Gender::Male).with_parents(Some(mum), None);
//! let kid = store.insert_person(kid).unwrap();
//!
//! assert_eq!(store.children_of_mother(mum).unwrap(), vec![kid]);
//! ```

#![warn(missing_docs)]

mod snapshot;

pub use snapshot::FamilySnapshot;

use chrono::NaiveDate;
use kindred_domain::{Gender, Marriage, Person, PersonId, PersonStore};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Person not found
    #[error("Person not found: {0}")]
    NotFound(String),

    /// Invalid data format or inconsistent links
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Duplicate person id
    #[error("Duplicate person detected")]
    Duplicate,

    /// Snapshot (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reading or writing a snapshot
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// In-memory implementation of PersonStore
///
/// Holds an immutable-by-convention snapshot of a family. Mutating methods
/// exist to build the snapshot; the engine only ever reads.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    people: HashMap<PersonId, Person>,
    children_by_mother: HashMap<PersonId, Vec<PersonId>>,
    children_by_father: HashMap<PersonId, Vec<PersonId>>,
    marriages: Vec<Marriage>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a snapshot, validating every link
    ///
    /// People may appear in any order; parents are checked once everyone is
    /// loaded.
    pub fn from_snapshot(snapshot: FamilySnapshot) -> Result<Self, StoreError> {
        let mut store = Self::new();

        for person in &snapshot.people {
            if store.people.contains_key(&person.id) {
                return Err(StoreError::Duplicate);
            }
            store.people.insert(person.id, person.clone());
        }
        for person in &snapshot.people {
            store.check_parents(person)?;
            store.link(person);
        }
        for marriage in snapshot.marriages {
            store.add_marriage(marriage)?;
        }

        Ok(store)
    }

    /// Parse a JSON snapshot
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let snapshot: FamilySnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// Load a JSON snapshot from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Write the current contents as a JSON snapshot
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(&self.snapshot())?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Current contents as a snapshot, people ordered by id
    pub fn snapshot(&self) -> FamilySnapshot {
        let mut people: Vec<Person> = self.people.values().cloned().collect();
        people.sort_by_key(|p| p.id);
        FamilySnapshot {
            people,
            marriages: self.marriages.clone(),
        }
    }

    /// Every marriage, in the order recorded
    pub fn marriages(&self) -> &[Marriage] {
        &self.marriages
    }

    /// Number of people in the store
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the store holds nobody
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Add a person whose parents (if any) are already present
    pub fn insert_person(&mut self, person: Person) -> Result<PersonId, StoreError> {
        if self.people.contains_key(&person.id) {
            return Err(StoreError::Duplicate);
        }
        self.check_parents(&person)?;

        let id = person.id;
        self.link(&person);
        self.people.insert(id, person);
        Ok(id)
    }

    /// Replace an existing person record
    ///
    /// Parents must exist and have the right gender. Gender may only change
    /// for someone not yet recorded as a parent or spouse. Ancestry is not
    /// checked for cycles here; the engine guards against malformed graphs itself.
    pub fn update_person(&mut self, person: Person) -> Result<(), StoreError> {
        let old = self
            .people
            .get(&person.id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(person.id.to_string()))?;
        self.check_parents(&person)?;
        if old.gender != person.gender {
            self.check_unused_role(&old)?;
        }

        self.unlink(&old);
        self.link(&person);
        self.people.insert(person.id, person);
        Ok(())
    }

    /// Record a marriage between two existing people
    pub fn add_marriage(&mut self, marriage: Marriage) -> Result<(), StoreError> {
        self.expect_gender(marriage.husband, Gender::Male, "husband")?;
        self.expect_gender(marriage.wife, Gender::Female, "wife")?;
        self.marriages.push(marriage);
        Ok(())
    }

    /// Every person whose full name matches, ignoring case
    ///
    /// Middle names are optional, and either the current or the maiden
    /// surname may be used.
    pub fn find_by_name(&self, name: &str) -> Vec<PersonId> {
        let wanted = name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        let mut found: Vec<PersonId> = self
            .people
            .values()
            .filter(|p| {
                let mut surnames = vec![p.surname.as_str()];
                if !p.maiden_name.is_empty() {
                    surnames.push(&p.maiden_name);
                }
                let given = [p.forename.clone(), format!("{} {}", p.forename, p.middle_names)];
                given.iter().any(|g| {
                    surnames
                        .iter()
                        .any(|s| format!("{} {}", g.trim(), s).to_lowercase() == wanted)
                }) || p.name(true, false).to_lowercase() == wanted
            })
            .map(|p| p.id)
            .collect();
        found.sort();
        found
    }

    fn person(&self, id: PersonId) -> Result<&Person, StoreError> {
        self.people
            .get(&id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn expect_gender(&self, id: PersonId, gender: Gender, role: &str) -> Result<(), StoreError> {
        let person = self.person(id)?;
        if person.gender != gender {
            return Err(StoreError::InvalidData(format!(
                "{} recorded as {} but has gender {}",
                id,
                role,
                person.gender.as_str()
            )));
        }
        Ok(())
    }

    fn check_parents(&self, person: &Person) -> Result<(), StoreError> {
        if person.mother == Some(person.id) || person.father == Some(person.id) {
            return Err(StoreError::InvalidData(format!(
                "{} recorded as their own parent",
                person.id
            )));
        }
        if let Some(mother) = person.mother {
            self.expect_gender(mother, Gender::Female, "mother")?;
        }
        if let Some(father) = person.father {
            self.expect_gender(father, Gender::Male, "father")?;
        }
        Ok(())
    }

    /// Fail if `person` is a parent or spouse under their recorded gender
    fn check_unused_role(&self, person: &Person) -> Result<(), StoreError> {
        let (children, role) = match person.gender {
            Gender::Female => (self.children_by_mother.get(&person.id), "mother"),
            Gender::Male => (self.children_by_father.get(&person.id), "father"),
        };
        let married = self
            .marriages
            .iter()
            .any(|m| m.husband == person.id || m.wife == person.id);

        if children.is_some_and(|c| !c.is_empty()) {
            return Err(StoreError::InvalidData(format!(
                "{} is recorded as a {} and cannot change gender",
                person.id, role
            )));
        }
        if married {
            return Err(StoreError::InvalidData(format!(
                "{} is recorded in a marriage and cannot change gender",
                person.id
            )));
        }
        Ok(())
    }

    fn link(&mut self, person: &Person) {
        if let Some(mother) = person.mother {
            self.children_by_mother.entry(mother).or_default().push(person.id);
        }
        if let Some(father) = person.father {
            self.children_by_father.entry(father).or_default().push(person.id);
        }
    }

    fn unlink(&mut self, person: &Person) {
        if let Some(mother) = person.mother {
            if let Some(children) = self.children_by_mother.get_mut(&mother) {
                children.retain(|c| *c != person.id);
            }
        }
        if let Some(father) = person.father {
            if let Some(children) = self.children_by_father.get_mut(&father) {
                children.retain(|c| *c != person.id);
            }
        }
    }

    /// Order ids by date of birth; unknown dates last, then by id
    fn by_birth(&self, ids: &[PersonId]) -> Vec<PersonId> {
        let mut sorted = ids.to_vec();
        sorted.sort_by_key(|id| {
            let dob = self.people.get(id).and_then(|p| p.date_of_birth);
            (dob.is_none(), dob, *id)
        });
        sorted
    }
}

impl PersonStore for MemoryStore {
    type Error = StoreError;

    fn get_person(&self, id: PersonId) -> Result<Option<Person>, Self::Error> {
        Ok(self.people.get(&id).cloned())
    }

    fn all_persons(&self) -> Result<Vec<Person>, Self::Error> {
        Ok(self.snapshot().people)
    }

    fn get_mother(&self, id: PersonId) -> Result<Option<PersonId>, Self::Error> {
        Ok(self.person(id)?.mother)
    }

    fn get_father(&self, id: PersonId) -> Result<Option<PersonId>, Self::Error> {
        Ok(self.person(id)?.father)
    }

    fn children_of_mother(&self, id: PersonId) -> Result<Vec<PersonId>, Self::Error> {
        self.person(id)?;
        let children = self.children_by_mother.get(&id).map(Vec::as_slice).unwrap_or(&[]);
        Ok(self.by_birth(children))
    }

    fn children_of_father(&self, id: PersonId) -> Result<Vec<PersonId>, Self::Error> {
        self.person(id)?;
        let children = self.children_by_father.get(&id).map(Vec::as_slice).unwrap_or(&[]);
        Ok(self.by_birth(children))
    }

    fn marriages_as_husband(&self, id: PersonId) -> Result<Vec<Marriage>, Self::Error> {
        self.person(id)?;
        Ok(self
            .marriages
            .iter()
            .filter(|m| m.husband == id)
            .cloned()
            .collect())
    }

    fn marriages_as_wife(&self, id: PersonId) -> Result<Vec<Marriage>, Self::Error> {
        self.person(id)?;
        Ok(self
            .marriages
            .iter()
            .filter(|m| m.wife == id)
            .cloned()
            .collect())
    }

    fn get_gender(&self, id: PersonId) -> Result<Gender, Self::Error> {
        Ok(self.person(id)?.gender)
    }

    fn get_birth_date(&self, id: PersonId) -> Result<Option<NaiveDate>, Self::Error> {
        Ok(self.person(id)?.date_of_birth)
    }

    fn get_death_date(&self, id: PersonId) -> Result<Option<NaiveDate>, Self::Error> {
        Ok(self.person(id)?.date_of_death)
    }

    fn is_deceased(&self, id: PersonId) -> Result<bool, Self::Error> {
        Ok(self.person(id)?.deceased)
    }
}
