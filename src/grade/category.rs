#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::GradeError;

/// The weighted bucket an assignment counts towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CategoryTag {
    /// Tests, quizzes, and graded tasks. Counts for 90% of the overall grade.
    #[serde(rename = "All Tasks / Assessments", alias = "AllTasksAssessments")]
    AllTasksAssessments,
    /// Homework and classwork. Counts for 10% of the overall grade.
    #[serde(rename = "Practice / Preparation", alias = "PracticePreparation")]
    PracticePreparation,
}

impl CategoryTag {
    /// Every category, in display order.
    pub const ALL: [CategoryTag; 2] =
        [CategoryTag::AllTasksAssessments, CategoryTag::PracticePreparation];

    /// Weight of this category in the overall percentage.
    pub fn weight(self) -> f64 {
        match self {
            CategoryTag::AllTasksAssessments => 0.9,
            CategoryTag::PracticePreparation => 0.1,
        }
    }

    /// Label shown to students.
    pub fn label(self) -> &'static str {
        match self {
            CategoryTag::AllTasksAssessments => "All Tasks / Assessments",
            CategoryTag::PracticePreparation => "Practice / Preparation",
        }
    }

    /// Hex color used when rendering the category name.
    pub fn hex(self) -> &'static str {
        match self {
            CategoryTag::AllTasksAssessments => "#878AFF",
            CategoryTag::PracticePreparation => "#FF9359",
        }
    }

    /// Style class used when rendering the category name.
    pub fn style_class(self) -> &'static str {
        match self {
            CategoryTag::AllTasksAssessments => "allTasksColor",
            CategoryTag::PracticePreparation => "practicePrepColor",
        }
    }

    /// Same color as [`CategoryTag::hex`], as RGB components.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            CategoryTag::AllTasksAssessments => (0x87, 0x8A, 0xFF),
            CategoryTag::PracticePreparation => (0xFF, 0x93, 0x59),
        }
    }
}

impl Display for CategoryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CategoryTag {
    type Err = GradeError;

    /// Accepts either the display label or the variant name, ignoring case
    /// and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        CategoryTag::ALL
            .into_iter()
            .find(|tag| {
                tag.label().eq_ignore_ascii_case(needle)
                    || format!("{tag:?}").eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| GradeError::UnknownCategory(needle.to_string()))
    }
}
