#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use thiserror::Error;

/// Errors produced while building or classifying scored items.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// A maximum score (or a sum of maximum scores) was zero or negative.
    #[error("Cannot compute a percentage for {context}: the maximum score must be greater than 0.")]
    InvalidDenominator {
        /// What the denominator belonged to, eg. an assignment name.
        context: String,
    },
    /// A score or maximum score was not a usable number.
    #[error("`{value}` is not a valid {field}.")]
    InvalidNumericInput {
        /// Which input field was rejected.
        field: &'static str,
        /// The text (or value) that was rejected.
        value: String,
    },
    /// The category text did not match any known category.
    #[error("Unknown category `{0}`; expected \"All Tasks / Assessments\" or \"Practice / Preparation\".")]
    UnknownCategory(String),
}
