//! # gradesleuth
//!
//! A student grade viewer: a class list and an assignments breakdown, with
//! weighted category averages, letter grades, and display colors computed by
//! a small stateless grade engine.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Settings read from the environment
pub mod config;
/// Error types for grade computations
pub mod error;
/// The grade engine: aggregation, weighting, and letter/color classification
pub mod grade;
/// The class and assignment data the views are built from
pub mod gradebook;
/// Table and JSON rendering of grades
pub mod report;

pub use error::GradeError;
pub use gradebook::{ClassRecord, Gradebook};
