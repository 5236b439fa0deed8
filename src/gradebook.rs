#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    error::GradeError,
    grade::{
        Band, GradeSummary, Letter, ScoredItem, band_for_percentage, grade_point_average,
        summarize,
    },
};

/// A class on the student's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct ClassRecord {
    /// Class period, starting at 1.
    pub period:           u8,
    /// Course name.
    pub class_name:       String,
    /// Teacher's name.
    pub teacher:          String,
    /// Current percentage in the class.
    pub grade_percentage: f64,
}

impl ClassRecord {
    /// Letter and color for the class percentage.
    pub fn band(&self) -> Band {
        band_for_percentage(self.grade_percentage)
    }

    /// Letter grade for the class percentage.
    pub fn letter(&self) -> Letter {
        self.band().letter
    }
}

/// The data behind the class list and assignments views.
///
/// The grade engine never keeps a reference to this; callers pass the
/// assignment list in each time they want a fresh summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradebook {
    /// Name shown above the class list.
    pub student_name:   String,
    /// Marking period label, eg. `MP4 Interim`.
    pub marking_period: String,
    /// The student's classes.
    #[serde(default)]
    pub classes:        Vec<ClassRecord>,
    /// Assignments for the selected class, newest first.
    #[serde(default)]
    pub assignments:    Vec<ScoredItem>,
}

impl Gradebook {
    /// The placeholder gradebook shown when no file is configured.
    pub fn sample() -> Self {
        let classes = [
            (1u8, "Class Uno", "Teacher Uno", 100.0),
            (2, "Class Dos", "Teacher Dos", 95.0),
            (3, "Class Tres", "Teacher Tres", 87.0),
            (4, "Class Cuatro", "Teacher Cuatro", 81.0),
            (5, "Class Cinco", "Teacher Cinco", 75.0),
            (6, "Class Seis", "Teacher Seis", 72.0),
            (7, "Class Siete", "Teacher Siete", 65.0),
            (8, "Class Ocho", "Teacher Ocho", 30.0),
        ]
        .into_iter()
        .map(|(period, class_name, teacher, grade_percentage)| {
            ClassRecord::builder()
                .period(period)
                .class_name(class_name)
                .teacher(teacher)
                .grade_percentage(grade_percentage)
                .build()
        })
        .collect();

        let assignments = sample_assignments().unwrap_or_else(|err| {
            tracing::warn!("Sample assignments failed validation: {err}");
            Vec::new()
        });

        Self {
            student_name: "Student Name".to_string(),
            marking_period: "MP4 Interim".to_string(),
            classes,
            assignments,
        }
    }

    /// Parses a gradebook from JSON. Every assignment is validated on the way
    /// in, so a zero max score or negative score rejects the whole file.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse gradebook JSON")
    }

    /// Reads and parses a gradebook file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read gradebook {}", path.display()))?;
        let gradebook = Self::from_json(&contents)
            .with_context(|| format!("Invalid gradebook {}", path.display()))?;

        tracing::debug!(
            "Loaded {} classes and {} assignments from {}",
            gradebook.classes.len(),
            gradebook.assignments.len(),
            path.display()
        );
        Ok(gradebook)
    }

    /// Adds an assignment to the top of the list.
    pub fn add_assignment(&mut self, item: ScoredItem) {
        tracing::debug!("Adding assignment `{}` to {}", item.name(), item.category());
        self.assignments.insert(0, item);
    }

    /// Grade breakdown for the current assignment list.
    pub fn summary(&self) -> GradeSummary {
        summarize(&self.assignments)
    }

    /// Grade point average across classes, `None` with no classes.
    pub fn gpa(&self) -> Option<f64> {
        grade_point_average(self.classes.iter().map(|c| c.grade_percentage))
    }
}

/// The placeholder assignment list, run through the same validation as
/// user input.
fn sample_assignments() -> Result<Vec<ScoredItem>, GradeError> {
    use crate::grade::CategoryTag::{AllTasksAssessments as Tasks, PracticePreparation as Prep};

    [
        ("Assignment Uno", Tasks, 17.0, 19.0),
        ("Assignment Dos", Tasks, 2.0, 5.0),
        ("Assignment Tres", Prep, 10.0, 10.0),
        ("Assignment Cuatro", Tasks, 18.0, 20.0),
        ("Assignment Cinco", Tasks, 31.0, 32.0),
        ("Assignment Seis", Prep, 9.0, 15.0),
        ("Assignment Siete", Tasks, 30.0, 40.0),
        ("Assignment Ocho", Prep, 20.0, 25.0),
    ]
    .into_iter()
    .map(|(name, category, score, max)| ScoredItem::new(name, category, score, max))
    .collect()
}

impl Default for Gradebook {
    fn default() -> Self {
        Self::sample()
    }
}
