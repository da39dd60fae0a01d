//! Person module - the individuals that make up a family tree

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a person based on UUIDv7
///
/// UUIDv7 gives ids that sort by creation time and need no coordination
/// between whoever records people into a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonId(u128);

impl PersonId {
    /// Generate a new UUIDv7-based PersonId
    ///
    /// # Examples
    ///
    /// ```
    /// use kindred_domain::PersonId;
    ///
    /// let id = PersonId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a PersonId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a PersonId from its hyphenated UUID form
    ///
    /// # Examples
    ///
    /// ```
    /// use kindred_domain::PersonId;
    ///
    /// let id = PersonId::new();
    /// let parsed = PersonId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid person id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl TryFrom<String> for PersonId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_string(&s)
    }
}

impl From<PersonId> for String {
    fn from(id: PersonId) -> Self {
        id.to_string()
    }
}

/// Gender of a person
///
/// Decides which parent link (mother/father) and which marriage role
/// (wife/husband) applies, and the terminal noun of a relationship label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male; fathers and husbands
    #[serde(rename = "M", alias = "male")]
    Male,

    /// Female; mothers and wives
    #[serde(rename = "F", alias = "female")]
    Female,
}

impl Gender {
    /// Single-letter code used in snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    /// Parse a gender from a code or word
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "m" | "male" => Some(Gender::Male),
            "f" | "female" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Pick the noun matching this gender
    pub fn pick<'a>(&self, male: &'a str, female: &'a str) -> &'a str {
        match self {
            Gender::Male => male,
            Gender::Female => female,
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid gender: {}", s))
    }
}

/// A person record
///
/// The engine never mutates people; it only follows the `mother`/`father`
/// links and reads dates for ordering and age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    /// Given name
    pub forename: String,

    /// Middle names, space separated
    #[serde(default)]
    pub middle_names: String,

    /// Family name
    pub surname: String,

    /// Family name before marriage, if any
    #[serde(default)]
    pub maiden_name: String,

    /// Gender
    pub gender: Gender,

    /// Date of birth
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,

    /// Date of death
    #[serde(default)]
    pub date_of_death: Option<NaiveDate>,

    /// Whether the person has died (a death date may still be unknown)
    #[serde(default)]
    pub deceased: bool,

    /// Mother, if recorded
    #[serde(default)]
    pub mother: Option<PersonId>,

    /// Father, if recorded
    #[serde(default)]
    pub father: Option<PersonId>,
}

impl Person {
    /// Create a living person with no recorded dates or parents
    pub fn new(id: PersonId, forename: &str, surname: &str, gender: Gender) -> Self {
        Self {
            id,
            forename: forename.to_string(),
            middle_names: String::new(),
            surname: surname.to_string(),
            maiden_name: String::new(),
            gender,
            date_of_birth: None,
            date_of_death: None,
            deceased: false,
            mother: None,
            father: None,
        }
    }

    /// Set the date of birth
    pub fn born(mut self, date: NaiveDate) -> Self {
        self.date_of_birth = Some(date);
        self
    }

    /// Mark as deceased, with an optional date of death
    pub fn died(mut self, date: Option<NaiveDate>) -> Self {
        self.deceased = true;
        self.date_of_death = date;
        self
    }

    /// Set the parents
    pub fn with_parents(mut self, mother: Option<PersonId>, father: Option<PersonId>) -> Self {
        self.mother = mother;
        self.father = father;
        self
    }

    /// Full name of this person
    ///
    /// # Examples
    ///
    /// ```
    /// use kindred_domain::{Gender, Person, PersonId};
    ///
    /// let mut mary = Person::new(PersonId::new(), "Mary", "Smith", Gender::Female);
    /// mary.middle_names = "Anne".to_string();
    /// mary.maiden_name = "Jones".to_string();
    ///
    /// assert_eq!(mary.name(true, false), "Mary Anne Smith (née Jones)");
    /// assert_eq!(mary.name(false, true), "Mary Jones");
    /// ```
    pub fn name(&self, use_middle_names: bool, use_maiden_name: bool) -> String {
        let given = if use_middle_names && !self.middle_names.is_empty() {
            format!("{} {}", self.forename, self.middle_names)
        } else {
            self.forename.clone()
        };

        if self.maiden_name.is_empty() {
            format!("{} {}", given, self.surname)
        } else if use_maiden_name {
            format!("{} {}", given, self.maiden_name)
        } else {
            format!("{} {} (née {})", given, self.surname, self.maiden_name)
        }
    }

    /// Age in whole years as of `today`
    ///
    /// Returns `None` when the birth date is unknown, or when the person is
    /// deceased without a recorded date of death.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use kindred_domain::{Gender, Person, PersonId};
    ///
    /// let born = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
    /// let p = Person::new(PersonId::new(), "Ann", "Lee", Gender::Female).born(born);
    ///
    /// assert_eq!(p.age_on(NaiveDate::from_ymd_opt(2020, 6, 14).unwrap()), Some(19));
    /// assert_eq!(p.age_on(NaiveDate::from_ymd_opt(2020, 6, 15).unwrap()), Some(20));
    /// ```
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        age_between(self.date_of_birth, self.date_of_death, self.deceased, today)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name(true, false))
    }
}

/// Age arithmetic shared by [`Person::age_on`] and store-backed lookups
pub fn age_between(
    birth: Option<NaiveDate>,
    death: Option<NaiveDate>,
    deceased: bool,
    today: NaiveDate,
) -> Option<u32> {
    let birth = birth?;
    let end = if deceased { death? } else { today };

    let mut years = end.year() - birth.year();
    if (end.month(), end.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let p = Person::new(PersonId::new(), "Ann", "Lee", Gender::Female).born(date(2000, 6, 15));
        assert_eq!(p.age_on(date(2020, 6, 14)), Some(19));
        assert_eq!(p.age_on(date(2020, 6, 15)), Some(20));
        assert_eq!(p.age_on(date(2020, 12, 31)), Some(20));
    }

    #[test]
    fn test_age_unknown() {
        let p = Person::new(PersonId::new(), "Ann", "Lee", Gender::Female);
        assert_eq!(p.age_on(date(2020, 1, 1)), None);

        // Deceased without a date of death
        let p = p.born(date(1900, 1, 1)).died(None);
        assert_eq!(p.age_on(date(2020, 1, 1)), None);
    }

    #[test]
    fn test_age_at_death() {
        let p = Person::new(PersonId::new(), "Tom", "Lee", Gender::Male)
            .born(date(1900, 3, 10))
            .died(Some(date(1970, 3, 9)));
        assert_eq!(p.age_on(date(2020, 1, 1)), Some(69));
    }

    #[test]
    fn test_age_born_in_future() {
        let p = Person::new(PersonId::new(), "Ann", "Lee", Gender::Female).born(date(2030, 1, 1));
        assert_eq!(p.age_on(date(2020, 1, 1)), None);
    }

    #[test]
    fn test_name_variants() {
        let mut p = Person::new(PersonId::new(), "John", "Smith", Gender::Male);
        assert_eq!(p.name(true, false), "John Smith");

        p.middle_names = "Paul George".to_string();
        assert_eq!(p.name(true, false), "John Paul George Smith");
        assert_eq!(p.name(false, false), "John Smith");
        assert_eq!(p.to_string(), "John Paul George Smith");
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!(Gender::parse("M"), Some(Gender::Male));
        assert_eq!(Gender::parse("female"), Some(Gender::Female));
        assert_eq!("f".parse::<Gender>(), Ok(Gender::Female));
        assert!(Gender::parse("x").is_none());
    }

    #[test]
    fn test_person_id_serde_as_string() {
        let id = PersonId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let back: PersonId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_person_from_snapshot_json() {
        let json = r#"{
            "id": "0190a0b2-7c3d-7000-8000-000000000001",
            "forename": "Ada",
            "surname": "Byron",
            "gender": "F",
            "date_of_birth": "1815-12-10"
        }"#;
        let p: Person = serde_json::from_str(json).unwrap();
        assert_eq!(p.gender, Gender::Female);
        assert_eq!(p.date_of_birth, Some(date(1815, 12, 10)));
        assert!(p.mother.is_none());
        assert!(!p.deceased);
    }
}
