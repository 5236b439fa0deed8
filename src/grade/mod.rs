#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Letter grades, display colors, and the grading scale.
pub mod band;
/// Weighted assignment categories.
pub mod category;
/// Per-category aggregation and the weighted overall grade.
pub mod engine;
/// Scored assignments and form-input parsing.
pub mod item;

pub use band::{
    Band, BandColor, GRADE_BANDS, GradeBand, Letter, band_for_percentage, letter_for_percentage,
};
pub use category::CategoryTag;
pub use engine::{
    CategorySummary, CategoryTotals, GradeSummary, aggregate_by_category, checked_percentage,
    grade_point_average, item_percentage, overall_percentage, percentage, summarize,
};
pub use item::{DEFAULT_ASSIGNMENT_NAME, ScoredItem};
