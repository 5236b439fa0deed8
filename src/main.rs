#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # gradesleuth
//!
//! Shows a student's class list and assignment breakdown in the terminal.
//! Without a gradebook file it uses built-in placeholder data.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use gradesleuth::{
    Gradebook, config,
    grade::{DEFAULT_ASSIGNMENT_NAME, ScoredItem},
    report::{self, ReportOptions},
};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Where to read grades from and how to print them.
#[derive(Debug, Clone)]
struct Source {
    /// Gradebook JSON file; falls back to config, then the sample data.
    gradebook: Option<PathBuf>,
    /// Print JSON instead of a table.
    json:      bool,
}

/// Form fields for a new assignment, kept as text until validated.
#[derive(Debug, Clone)]
struct NewAssignment {
    /// Assignment name
    name:      String,
    /// Category label
    category:  String,
    /// Points earned, as typed
    score:     String,
    /// Points possible, as typed
    max_score: String,
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Show the class list
    Classes(Source),
    /// Show the assignments breakdown
    Assignments(Source),
    /// Add an assignment and show the updated breakdown
    Add {
        /// Gradebook to add to
        source: Source,
        /// The assignment to add
        entry:  NewAssignment,
    },
    /// Show where a percentage lands on the grading scale
    Band(f64),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the gradebook source flags
    fn source() -> impl Parser<Source> {
        let gradebook = long("gradebook")
            .short('g')
            .help("Path to a gradebook JSON file")
            .argument::<PathBuf>("PATH")
            .optional();
        let json = long("json").help("Print JSON instead of a table").switch();
        construct!(Source { gradebook, json })
    }

    /// parses the new assignment form fields
    fn entry() -> impl Parser<NewAssignment> {
        let name = long("name")
            .short('n')
            .help("Name of the assignment")
            .argument::<String>("NAME")
            .fallback(DEFAULT_ASSIGNMENT_NAME.to_string());
        let category = long("category")
            .short('c')
            .help("\"All Tasks / Assessments\" or \"Practice / Preparation\"")
            .argument::<String>("CATEGORY")
            .fallback("All Tasks / Assessments".to_string());
        let score = long("score")
            .short('s')
            .help("Points earned")
            .argument::<String>("SCORE");
        let max_score = long("max-score")
            .short('m')
            .help("Points possible")
            .argument::<String>("MAX");
        construct!(NewAssignment {
            name,
            category,
            score,
            max_score
        })
    }

    let classes = construct!(Cmd::Classes(source()))
        .to_options()
        .command("classes")
        .help("Show the class list");

    let assignments = construct!(Cmd::Assignments(source()))
        .to_options()
        .command("assignments")
        .help("Show assignments with category and overall grades");

    let add = {
        let source = source();
        let entry = entry();
        construct!(Cmd::Add { source, entry })
            .to_options()
            .command("add")
            .help("Add an assignment to the top of the list (not saved)")
    };

    let percent = positional::<f64>("PERCENT").help("Percentage to classify");
    let band = construct!(Cmd::Band(percent))
        .to_options()
        .command("band")
        .help("Print the letter and colors for a percentage");

    let cmd = construct!([classes, assignments, add, band]);

    cmd.to_options()
        .descr("Student grade viewer")
        .run()
}

/// Opens the requested gradebook, the configured one, or the sample data.
fn open_gradebook(path: Option<PathBuf>) -> Result<Gradebook> {
    match path.or_else(|| config::get().gradebook_path().cloned()) {
        Some(path) => Gradebook::load(&path),
        None => {
            tracing::debug!("No gradebook configured, using sample data");
            Ok(Gradebook::sample())
        }
    }
}

/// Prints either the JSON value or the rendered table.
fn emit(
    json: bool,
    value: impl FnOnce() -> serde_json::Value,
    table: impl FnOnce() -> String,
) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(&value()).context("Failed to serialize report")?;
        println!("{out}");
    } else {
        println!("{}", table());
    }
    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(config::get().log_level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let report_options = ReportOptions::from_config();

    match options() {
        Cmd::Classes(source) => {
            let gradebook = open_gradebook(source.gradebook)?;
            emit(
                source.json,
                || report::classes_json(&gradebook),
                || report::classes_table(&gradebook, &report_options),
            )?;
        }
        Cmd::Assignments(source) => {
            let gradebook = open_gradebook(source.gradebook)?;
            emit(
                source.json,
                || report::assignments_json(&gradebook),
                || report::assignments_table(&gradebook, &report_options),
            )?;
        }
        Cmd::Add { source, entry } => {
            let mut gradebook = open_gradebook(source.gradebook)?;
            let item = ScoredItem::from_input(
                &entry.name,
                &entry.category,
                &entry.score,
                &entry.max_score,
            )
            .with_context(|| format!("Could not add assignment `{}`", entry.name))?;

            tracing::info!(
                "Adding `{}` ({}); the gradebook file is not modified",
                item.name(),
                item
            );
            gradebook.add_assignment(item);
            emit(
                source.json,
                || report::assignments_json(&gradebook),
                || report::assignments_table(&gradebook, &report_options),
            )?;
        }
        Cmd::Band(pct) => println!("{}", report::describe_band(pct, &report_options)),
    };

    Ok(())
}
