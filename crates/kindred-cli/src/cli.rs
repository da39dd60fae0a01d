//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kindred CLI - Explore how the people in a family tree are related.
#[derive(Debug, Parser)]
#[command(name = "kindred")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Family snapshot (JSON)
    #[arg(short = 'i', long, global = true, env = "KINDRED_FAMILY")]
    pub family: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log walk details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Prune cyclic parent links instead of failing
    #[arg(long, global = true)]
    pub prune_cycles: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List everyone in the family
    People,

    /// List every marriage, past and present
    Marriages,

    /// Ancestors of a person, nearest first
    Ancestors(PersonArgs),

    /// Descendants of a person
    Descendants(PersonArgs),

    /// Every blood relative of a person
    Relatives(PersonArgs),

    /// Brothers and sisters, half-siblings included
    Siblings(PersonArgs),

    /// Children of a person
    Children(PersonArgs),

    /// Current and former spouses
    Spouses(PersonArgs),

    /// How one person is related to another
    Describe(DescribeArgs),

    /// Age of a person
    Age(AgeArgs),
}

/// A single person, by id or full name.
#[derive(Debug, Parser)]
pub struct PersonArgs {
    /// Person id or full name
    pub person: String,
}

/// Arguments for the describe command.
#[derive(Debug, Parser)]
pub struct DescribeArgs {
    /// The person whose point of view is taken
    pub subject: String,

    /// The person being described
    pub other: String,
}

/// Arguments for the age command.
#[derive(Debug, Parser)]
pub struct AgeArgs {
    /// Person id or full name
    pub person: String,

    /// Compute the age as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub on: Option<chrono::NaiveDate>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
