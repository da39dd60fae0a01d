//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kindred_domain::{Marriage, Person, RelationshipLabel};
use kindred_engine::Relative;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of people.
    pub fn format_people(&self, people: &[Person]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(people)?),
            OutputFormat::Quiet => Ok(join_ids(people.iter())),
            OutputFormat::Table => {
                if people.is_empty() {
                    return Ok(self.colorize("No people found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "Gender", "Born", "Died"]);
                for person in people {
                    builder.push_record(person_row(person));
                }
                Ok(render(builder))
            }
        }
    }

    /// Format people together with their relationship to a subject.
    pub fn format_relatives(&self, relatives: &[Relative]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = relatives
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "id": r.person.id.to_string(),
                            "name": r.person.to_string(),
                            "relationship": r.relationship.to_string(),
                            "label": r.relationship,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Quiet => Ok(join_ids(relatives.iter().map(|r| &r.person))),
            OutputFormat::Table => {
                if relatives.is_empty() {
                    return Ok(self.colorize("No relatives found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "Gender", "Born", "Died", "Relationship"]);
                for relative in relatives {
                    let mut row = person_row(&relative.person).to_vec();
                    row.push(relative.relationship.to_string());
                    builder.push_record(row);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format marriages, each given with its husband and wife.
    pub fn format_marriages(&self, marriages: &[(Marriage, Person, Person)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = marriages
                    .iter()
                    .map(|(m, husband, wife)| {
                        serde_json::json!({
                            "husband": m.husband.to_string(),
                            "wife": m.wife.to_string(),
                            "title": Marriage::title(husband, wife),
                            "wedding_date": m.wedding_date,
                            "divorce_date": m.divorce_date,
                            "dissolved": m.is_dissolved(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Quiet => Ok(marriages
                .iter()
                .map(|(_, husband, wife)| Marriage::title(husband, wife))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if marriages.is_empty() {
                    return Ok(self.colorize("No marriages found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Couple", "Married", "Divorced", "Status"]);
                for (m, husband, wife) in marriages {
                    let status = if m.is_dissolved() { "dissolved" } else { "current" };
                    builder.push_record([
                        Marriage::title(husband, wife),
                        m.wedding_date.map(|d| d.to_string()).unwrap_or_default(),
                        m.divorce_date.map(|d| d.to_string()).unwrap_or_default(),
                        status.to_string(),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format the answer to "how is `other` related to `subject`".
    pub fn format_label(&self, subject: &Person, other: &Person, label: &RelationshipLabel) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "subject": subject.id.to_string(),
                "other": other.id.to_string(),
                "relationship": label.to_string(),
                "label": label,
            }))?),
            OutputFormat::Quiet => Ok(label.to_string()),
            OutputFormat::Table => {
                let phrase = label.to_string();
                let phrase = if label.is_related() {
                    self.colorize(&phrase, "green")
                } else {
                    self.colorize(&phrase, "yellow")
                };
                Ok(format!("{} is {}'s {}", other, subject, phrase))
            }
        }
    }

    /// Format a person's age.
    pub fn format_age(&self, person: &Person, age: Option<u32>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "id": person.id.to_string(),
                "name": person.to_string(),
                "age": age,
                "deceased": person.deceased || person.date_of_death.is_some(),
            }))?),
            OutputFormat::Quiet => Ok(age.map(|a| a.to_string()).unwrap_or_default()),
            OutputFormat::Table => Ok(match age {
                Some(years) if person.deceased || person.date_of_death.is_some() => {
                    format!("{} died aged {}", person, years)
                }
                Some(years) => format!("{} is {}", person, years),
                None => self.warning(&format!("Age of {} is unknown", person)),
            }),
        }
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn person_row(person: &Person) -> [String; 5] {
    let id = person.id.to_string();
    let died = match (person.date_of_death, person.deceased) {
        (Some(date), _) => date.to_string(),
        (None, true) => "yes".to_string(),
        (None, false) => String::new(),
    };
    [
        id[..8].to_string(), // Truncate ID for readability
        person.to_string(),
        person.gender.as_str().to_string(),
        person.date_of_birth.map(|d| d.to_string()).unwrap_or_default(),
        died,
    ]
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn join_ids<'a>(people: impl Iterator<Item = &'a Person>) -> String {
    people.map(|p| p.id.to_string()).collect::<Vec<_>>().join("\n")
}
