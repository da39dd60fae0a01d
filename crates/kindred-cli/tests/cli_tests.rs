//! Command tests against a family snapshot on disk

use clap::Parser;
use kindred_cli::commands::{self, resolve_person};
use kindred_cli::config::OutputFormat;
use kindred_cli::{Cli, CliError, Formatter};
use kindred_engine::KinshipConfig;
use kindred_store::MemoryStore;
use std::io::Write;

const FAMILY: &str = r#"{
  "people": [
    { "id": "0190a0b2-7c3d-7000-8000-000000000001", "forename": "Walter", "surname": "Reid",
      "gender": "M", "date_of_birth": "1901-03-02", "deceased": true, "date_of_death": "1970-03-01" },
    { "id": "0190a0b2-7c3d-7000-8000-000000000002", "forename": "Agnes", "surname": "Reid",
      "maiden_name": "Lowe", "gender": "F", "date_of_birth": "1905-07-19" },
    { "id": "0190a0b2-7c3d-7000-8000-000000000003", "forename": "Isla", "surname": "Reid",
      "gender": "F", "date_of_birth": "1930-01-01",
      "mother": "0190a0b2-7c3d-7000-8000-000000000002", "father": "0190a0b2-7c3d-7000-8000-000000000001" },
    { "id": "0190a0b2-7c3d-7000-8000-000000000004", "forename": "Ewan", "surname": "Reid",
      "gender": "M", "date_of_birth": "1933-05-05",
      "mother": "0190a0b2-7c3d-7000-8000-000000000002", "father": "0190a0b2-7c3d-7000-8000-000000000001" },
    { "id": "0190a0b2-7c3d-7000-8000-000000000005", "forename": "Fiona", "surname": "Reid",
      "gender": "F", "date_of_birth": "1960-11-11",
      "father": "0190a0b2-7c3d-7000-8000-000000000004" },
    { "id": "0190a0b2-7c3d-7000-8000-000000000006", "forename": "Moira", "surname": "Reid",
      "gender": "F" },
    { "id": "0190a0b2-7c3d-7000-8000-000000000007", "forename": "Moira", "surname": "Reid",
      "gender": "F" }
  ],
  "marriages": [
    { "husband": "0190a0b2-7c3d-7000-8000-000000000001", "wife": "0190a0b2-7c3d-7000-8000-000000000002",
      "wedding_date": "1928-06-01" }
  ]
}"#;

fn load_family() -> MemoryStore {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FAMILY.as_bytes()).unwrap();
    MemoryStore::load(file.path()).unwrap()
}

fn run(args: &[&str], format: OutputFormat) -> kindred_cli::Result<String> {
    let store = load_family();
    let cli = Cli::parse_from(std::iter::once("kindred").chain(args.iter().copied()));
    let formatter = Formatter::new(format, false);
    commands::execute(cli.command, &store, &KinshipConfig::default(), &formatter)
}

#[test]
fn test_resolve_by_id_and_name() {
    let store = load_family();
    let by_id = resolve_person(&store, "0190a0b2-7c3d-7000-8000-000000000003").unwrap();
    let by_name = resolve_person(&store, "isla reid").unwrap();
    assert_eq!(by_id, by_name);

    // Maiden names match too
    assert_eq!(
        resolve_person(&store, "Agnes Lowe").unwrap(),
        resolve_person(&store, "Agnes Reid").unwrap()
    );
}

#[test]
fn test_resolve_failures() {
    let store = load_family();
    assert!(matches!(
        resolve_person(&store, "Nobody Here"),
        Err(CliError::PersonNotFound(_))
    ));
    assert!(matches!(
        resolve_person(&store, "Moira Reid"),
        Err(CliError::Ambiguous(_, 2))
    ));
}

#[test]
fn test_people_listing() {
    let output = run(&["people"], OutputFormat::Table).unwrap();
    assert!(output.contains("Walter Reid"));
    assert!(output.contains("1970-03-01"));
}

#[test]
fn test_describe() {
    let output = run(&["describe", "Fiona Reid", "Isla Reid"], OutputFormat::Table).unwrap();
    assert_eq!(output, "Isla Reid is Fiona Reid's aunt");

    let output = run(&["describe", "Isla Reid", "Fiona Reid"], OutputFormat::Quiet).unwrap();
    assert_eq!(output, "niece");

    let output = run(&["describe", "Walter Reid", "Agnes Reid"], OutputFormat::Quiet).unwrap();
    assert_eq!(output, "wife");
}

#[test]
fn test_relatives_json() {
    let output = run(&["relatives", "Fiona Reid"], OutputFormat::Json).unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();

    let labels: Vec<&str> = rows
        .iter()
        .map(|r| r["relationship"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["grandfather", "grandmother", "aunt", "father"]);
}

#[test]
fn test_siblings_and_spouses() {
    let output = run(&["siblings", "Isla Reid"], OutputFormat::Table).unwrap();
    assert!(output.contains("Ewan Reid"));
    assert!(output.contains("brother"));

    let output = run(&["spouses", "Agnes Reid"], OutputFormat::Quiet).unwrap();
    assert_eq!(output, "0190a0b2-7c3d-7000-8000-000000000001");
}

#[test]
fn test_marriages_listing() {
    let output = run(&["marriages"], OutputFormat::Quiet).unwrap();
    assert_eq!(output, "Walter Reid & Agnes Lowe");

    let output = run(&["marriages"], OutputFormat::Table).unwrap();
    assert!(output.contains("1928-06-01"));
    assert!(output.contains("current"));
}

#[test]
fn test_empty_listing() {
    let output = run(&["children", "Fiona Reid"], OutputFormat::Table).unwrap();
    assert!(output.contains("No relatives found"));
}

#[test]
fn test_age() {
    let output = run(&["age", "Isla Reid", "--on", "1960-01-01"], OutputFormat::Quiet).unwrap();
    assert_eq!(output, "30");

    // Age stops at death
    let output = run(&["age", "Walter Reid", "--on", "2000-01-01"], OutputFormat::Table).unwrap();
    assert_eq!(output, "Walter Reid died aged 68");
}

#[test]
fn test_unknown_person_is_reported() {
    let result = run(&["ancestors", "Nobody Here"], OutputFormat::Table);
    assert!(matches!(result, Err(CliError::PersonNotFound(_))));
}
