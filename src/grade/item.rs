#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::category::CategoryTag;
use crate::error::GradeError;

/// Name given to an assignment entered without one.
pub const DEFAULT_ASSIGNMENT_NAME: &str = "New Assignment";

/// A single gradable assignment: a score out of a maximum.
///
/// Scores above the maximum are kept as-is, so extra credit can push a
/// category past 100%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScoredItem")]
pub struct ScoredItem {
    /// Assignment name.
    name:      String,
    /// Category the assignment counts towards.
    category:  CategoryTag,
    /// Points earned.
    score:     f64,
    /// Points possible.
    max_score: f64,
}

/// Unvalidated shape of a [`ScoredItem`] as it appears on disk.
#[derive(Deserialize)]
struct RawScoredItem {
    /// Assignment name.
    name:      String,
    /// Category the assignment counts towards.
    category:  CategoryTag,
    /// Points earned.
    score:     f64,
    /// Points possible.
    max_score: f64,
}

impl TryFrom<RawScoredItem> for ScoredItem {
    type Error = GradeError;

    fn try_from(raw: RawScoredItem) -> Result<Self, Self::Error> {
        ScoredItem::new(raw.name, raw.category, raw.score, raw.max_score)
    }
}

impl ScoredItem {
    /// Creates a new scored item -
    /// * `name` - the assignment name
    /// * `category` - which weighted bucket it counts towards
    /// * `score` - points earned, must be finite and not negative
    /// * `max_score` - points possible, must be finite and greater than 0
    pub fn new(
        name: impl Into<String>,
        category: CategoryTag,
        score: f64,
        max_score: f64,
    ) -> Result<Self, GradeError> {
        let name = name.into();

        if !score.is_finite() || score < 0.0 {
            return Err(GradeError::InvalidNumericInput {
                field: "score",
                value: score.to_string(),
            });
        }
        if !max_score.is_finite() {
            return Err(GradeError::InvalidNumericInput {
                field: "max score",
                value: max_score.to_string(),
            });
        }
        if max_score <= 0.0 {
            return Err(GradeError::InvalidDenominator { context: name });
        }

        Ok(Self {
            name,
            category,
            score,
            max_score,
        })
    }

    /// Creates a scored item from text typed into the add-assignment form.
    ///
    /// Rejects the entry when either number does not parse, rather than
    /// letting a bogus value into the averages. A blank name becomes
    /// [`DEFAULT_ASSIGNMENT_NAME`].
    pub fn from_input(
        name: &str,
        category: &str,
        score: &str,
        max_score: &str,
    ) -> Result<Self, GradeError> {
        let name = match name.trim() {
            "" => DEFAULT_ASSIGNMENT_NAME,
            trimmed => trimmed,
        };
        let category = category.parse::<CategoryTag>()?;
        let score = parse_number("score", score)?;
        let max_score = parse_number("max score", max_score)?;

        ScoredItem::new(name, category, score, max_score)
    }

    /// Returns the assignment name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category.
    pub fn category(&self) -> CategoryTag {
        self.category
    }

    /// Returns the points earned.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns the points possible.
    pub fn max_score(&self) -> f64 {
        self.max_score
    }
}

impl Display for ScoredItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}  /  {}", self.score, self.max_score)
    }
}

/// Parses a form field into a finite number.
fn parse_number(field: &'static str, text: &str) -> Result<f64, GradeError> {
    let invalid = || GradeError::InvalidNumericInput {
        field,
        value: text.to_string(),
    };

    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_max_score() {
        let err = ScoredItem::new("Quiz", CategoryTag::AllTasksAssessments, 0.0, 0.0).unwrap_err();
        assert_eq!(err, GradeError::InvalidDenominator {
            context: "Quiz".into(),
        });
    }

    #[test]
    fn rejects_negative_and_non_finite_scores() {
        assert!(ScoredItem::new("Quiz", CategoryTag::AllTasksAssessments, -1.0, 10.0).is_err());
        assert!(ScoredItem::new("Quiz", CategoryTag::AllTasksAssessments, f64::NAN, 10.0).is_err());
        assert!(
            ScoredItem::new("Quiz", CategoryTag::AllTasksAssessments, 1.0, f64::INFINITY).is_err()
        );
    }

    #[test]
    fn keeps_extra_credit() {
        let item = ScoredItem::new("Bonus", CategoryTag::PracticePreparation, 12.0, 10.0).unwrap();
        assert_eq!(item.score(), 12.0);
    }

    #[test]
    fn parses_form_input() {
        let item = ScoredItem::from_input("", "Practice / Preparation", " 7 ", "10.5").unwrap();
        assert_eq!(item.name(), DEFAULT_ASSIGNMENT_NAME);
        assert_eq!(item.category(), CategoryTag::PracticePreparation);
        assert_eq!(item.score(), 7.0);
        assert_eq!(item.max_score(), 10.5);
    }

    #[test]
    fn form_input_fails_closed() {
        assert_eq!(
            ScoredItem::from_input("HW", "Practice / Preparation", "abc", "10"),
            Err(GradeError::InvalidNumericInput {
                field: "score",
                value: "abc".into(),
            })
        );
        assert_eq!(
            ScoredItem::from_input("HW", "Practice / Preparation", "5", ""),
            Err(GradeError::InvalidNumericInput {
                field: "max score",
                value: "".into(),
            })
        );
        assert!(ScoredItem::from_input("HW", "Practice / Preparation", "NaN", "10").is_err());
        assert!(matches!(
            ScoredItem::from_input("HW", "Practice / Preparation", "5", "0"),
            Err(GradeError::InvalidDenominator { .. })
        ));
    }

    #[test]
    fn form_input_rejects_unknown_category() {
        assert_eq!(
            ScoredItem::from_input("HW", "Extra Credit", "1", "2"),
            Err(GradeError::UnknownCategory("Extra Credit".into()))
        );
    }

    #[test]
    fn deserializing_validates() {
        let ok: ScoredItem = serde_json::from_str(
            r#"{"name":"A","category":"All Tasks / Assessments","score":3,"max_score":4}"#,
        )
        .unwrap();
        assert_eq!(ok.max_score(), 4.0);

        let bad = serde_json::from_str::<ScoredItem>(
            r#"{"name":"A","category":"AllTasksAssessments","score":3,"max_score":0}"#,
        );
        assert!(bad.is_err());
    }
}
