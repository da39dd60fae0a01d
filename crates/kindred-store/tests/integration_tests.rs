//! Integration tests for kindred-store
//!
//! These tests verify person/marriage bookkeeping and snapshot loading.

use chrono::NaiveDate;
use kindred_domain::{Gender, Marriage, Person, PersonId, PersonStore};
use kindred_store::{FamilySnapshot, MemoryStore, StoreError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn woman(name: &str) -> Person {
    Person::new(PersonId::new(), name, "Test", Gender::Female)
}

fn man(name: &str) -> Person {
    Person::new(PersonId::new(), name, "Test", Gender::Male)
}

#[test]
fn test_store_initialization() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert!(store.all_persons().unwrap().is_empty());
}

#[test]
fn test_insert_and_get_person() {
    let mut store = MemoryStore::new();
    let person = woman("Alice").born(date(1950, 2, 3));
    let id = store.insert_person(person.clone()).unwrap();

    let retrieved = store.get_person(id).unwrap();
    assert_eq!(retrieved, Some(person));
    assert_eq!(store.get_gender(id).unwrap(), Gender::Female);
    assert_eq!(store.get_birth_date(id).unwrap(), Some(date(1950, 2, 3)));
    assert_eq!(store.get_death_date(id).unwrap(), None);
    assert!(!store.is_deceased(id).unwrap());
}

#[test]
fn test_duplicate_detection() {
    let mut store = MemoryStore::new();
    let person = man("Bob");

    assert!(store.insert_person(person.clone()).is_ok());
    let result = store.insert_person(person);
    assert!(matches!(result, Err(StoreError::Duplicate)));
}

#[test]
fn test_unknown_person_is_not_found() {
    let store = MemoryStore::new();
    let missing = PersonId::new();

    assert!(store.get_person(missing).unwrap().is_none());
    assert!(matches!(store.get_mother(missing), Err(StoreError::NotFound(_))));
    assert!(matches!(store.children_of_father(missing), Err(StoreError::NotFound(_))));
}

#[test]
fn test_parent_gender_is_enforced() {
    let mut store = MemoryStore::new();
    let dad = store.insert_person(man("Dad")).unwrap();

    let child = woman("Kid").with_parents(Some(dad), None);
    let result = store.insert_person(child);
    assert!(matches!(result, Err(StoreError::InvalidData(_))));
}

#[test]
fn test_parent_must_exist() {
    let mut store = MemoryStore::new();
    let child = woman("Kid").with_parents(None, Some(PersonId::new()));
    assert!(matches!(store.insert_person(child), Err(StoreError::NotFound(_))));
}

#[test]
fn test_children_ordered_by_birth() {
    let mut store = MemoryStore::new();
    let mum = store.insert_person(woman("Mum")).unwrap();
    let dad = store.insert_person(man("Dad")).unwrap();

    let youngest = store
        .insert_person(man("Youngest").born(date(1990, 1, 1)).with_parents(Some(mum), Some(dad)))
        .unwrap();
    let unknown = store
        .insert_person(man("Unknown").with_parents(Some(mum), Some(dad)))
        .unwrap();
    let eldest = store
        .insert_person(woman("Eldest").born(date(1980, 5, 5)).with_parents(Some(mum), Some(dad)))
        .unwrap();

    let expected = vec![eldest, youngest, unknown];
    assert_eq!(store.children_of_mother(mum).unwrap(), expected);
    assert_eq!(store.children_of_father(dad).unwrap(), expected);
    assert!(store.children_of_mother(eldest).unwrap().is_empty());
}

#[test]
fn test_update_person_relinks_children() {
    let mut store = MemoryStore::new();
    let first = store.insert_person(woman("First")).unwrap();
    let second = store.insert_person(woman("Second")).unwrap();
    let kid = store.insert_person(man("Kid").with_parents(Some(first), None)).unwrap();

    let mut record = store.get_person(kid).unwrap().unwrap();
    record.mother = Some(second);
    store.update_person(record).unwrap();

    assert!(store.children_of_mother(first).unwrap().is_empty());
    assert_eq!(store.children_of_mother(second).unwrap(), vec![kid]);
    assert_eq!(store.get_mother(kid).unwrap(), Some(second));
}

#[test]
fn test_parent_gender_cannot_change() {
    let mut store = MemoryStore::new();
    let mum = store.insert_person(woman("Mum")).unwrap();
    let kid = store.insert_person(man("Kid").with_parents(Some(mum), None)).unwrap();

    let mut record = store.get_person(mum).unwrap().unwrap();
    record.gender = Gender::Male;
    assert!(matches!(store.update_person(record), Err(StoreError::InvalidData(_))));

    // Nothing changed
    assert_eq!(store.children_of_mother(mum).unwrap(), vec![kid]);
    assert_eq!(store.get_gender(mum).unwrap(), Gender::Female);
}

#[test]
fn test_spouse_gender_cannot_change() {
    let mut store = MemoryStore::new();
    let h = store.insert_person(man("Husband")).unwrap();
    let w = store.insert_person(woman("Wife")).unwrap();
    store.add_marriage(Marriage::new(h, w)).unwrap();

    let mut record = store.get_person(h).unwrap().unwrap();
    record.gender = Gender::Female;
    assert!(matches!(store.update_person(record), Err(StoreError::InvalidData(_))));
}

#[test]
fn test_gender_change_without_roles() {
    let mut store = MemoryStore::new();
    let id = store.insert_person(woman("Sam")).unwrap();

    let mut record = store.get_person(id).unwrap().unwrap();
    record.gender = Gender::Male;
    store.update_person(record).unwrap();
    assert_eq!(store.get_gender(id).unwrap(), Gender::Male);
}

#[test]
fn test_own_parent_rejected() {
    let mut store = MemoryStore::new();
    let id = store.insert_person(woman("Loop")).unwrap();

    let mut record = store.get_person(id).unwrap().unwrap();
    record.mother = Some(id);
    assert!(matches!(store.update_person(record), Err(StoreError::InvalidData(_))));
}

#[test]
fn test_marriages() {
    let mut store = MemoryStore::new();
    let h = store.insert_person(man("Husband")).unwrap();
    let w1 = store.insert_person(woman("First Wife")).unwrap();
    let w2 = store.insert_person(woman("Second Wife")).unwrap();

    let mut first = Marriage::new(h, w1);
    first.wedding_date = Some(date(1970, 6, 1));
    first.divorce_date = Some(date(1975, 6, 1));
    store.add_marriage(first).unwrap();
    store.add_marriage(Marriage::new(h, w2)).unwrap();

    assert_eq!(store.marriages_as_husband(h).unwrap().len(), 2);
    assert_eq!(store.marriages_as_wife(w1).unwrap().len(), 1);
    assert!(store.marriages_as_husband(w1).unwrap().is_empty());

    // Roles are checked
    assert!(store.add_marriage(Marriage::new(w1, h)).is_err());
}

#[test]
fn test_find_by_name() {
    let mut store = MemoryStore::new();
    let mut mary = Person::new(PersonId::new(), "Mary", "Smith", Gender::Female);
    mary.middle_names = "Anne".to_string();
    mary.maiden_name = "Jones".to_string();
    let id = store.insert_person(mary).unwrap();

    assert_eq!(store.find_by_name("Mary Smith"), vec![id]);
    assert_eq!(store.find_by_name("mary anne smith"), vec![id]);
    assert_eq!(store.find_by_name("Mary Jones"), vec![id]);
    assert!(store.find_by_name("Mary Brown").is_empty());
}

#[test]
fn test_snapshot_roundtrip_through_file() {
    let mut store = MemoryStore::new();
    let mum = store.insert_person(woman("Mum").born(date(1960, 1, 1))).unwrap();
    let dad = store.insert_person(man("Dad")).unwrap();
    store.insert_person(woman("Kid").with_parents(Some(mum), Some(dad))).unwrap();
    store.add_marriage(Marriage::new(dad, mum)).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("family.json");
    store.save(&path).unwrap();

    let loaded = MemoryStore::load(&path).unwrap();
    assert_eq!(loaded.snapshot(), store.snapshot());
    assert_eq!(loaded.children_of_father(dad).unwrap().len(), 1);
}

#[test]
fn test_snapshot_accepts_any_person_order() {
    let json = r#"{
        "people": [
            { "id": "0190a0b2-7c3d-7000-8000-000000000003", "forename": "Kid", "surname": "Doe",
              "gender": "M", "mother": "0190a0b2-7c3d-7000-8000-000000000001" },
            { "id": "0190a0b2-7c3d-7000-8000-000000000001", "forename": "Jane", "surname": "Doe",
              "gender": "F" }
        ]
    }"#;
    let store = MemoryStore::from_json_str(json).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn test_snapshot_rejects_bad_links() {
    let json = r#"{
        "people": [
            { "id": "0190a0b2-7c3d-7000-8000-000000000003", "forename": "Kid", "surname": "Doe",
              "gender": "M", "father": "0190a0b2-7c3d-7000-8000-000000000001" },
            { "id": "0190a0b2-7c3d-7000-8000-000000000001", "forename": "Jane", "surname": "Doe",
              "gender": "F" }
        ]
    }"#;
    assert!(matches!(MemoryStore::from_json_str(json), Err(StoreError::InvalidData(_))));

    assert!(matches!(MemoryStore::from_json_str("{ not json"), Err(StoreError::Json(_))));
    assert!(MemoryStore::from_snapshot(FamilySnapshot::default()).unwrap().is_empty());
}
