#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Aggregation and weighting over a list of scored items.
//!
//! Nothing here holds state: every function recomputes from its arguments,
//! so the same items always produce the same summary.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{
    band::{Band, band_for_percentage, letter_for_percentage},
    category::CategoryTag,
    item::ScoredItem,
};
use crate::error::GradeError;

/// Summed points for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryTotals {
    /// Sum of points earned.
    pub score_sum:     f64,
    /// Sum of points possible.
    pub max_score_sum: f64,
}

impl CategoryTotals {
    /// True when there is no denominator to divide by.
    pub fn is_empty(&self) -> bool {
        self.max_score_sum == 0.0
    }

    /// Percentage for these totals, `0` when empty.
    pub fn percentage(&self) -> f64 {
        percentage(self.score_sum, self.max_score_sum)
    }
}

/// Per-category breakdown inside a [`GradeSummary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    /// Which category this is.
    pub category:   CategoryTag,
    /// Number of items counted.
    pub item_count: usize,
    /// Summed points.
    pub totals:     CategoryTotals,
    /// Rounded percentage, `0` when the category has no items.
    pub percentage: f64,
    /// Letter and color for `percentage`.
    pub band:       Band,
}

impl CategorySummary {
    /// True when the category had nothing to grade.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Everything the assignments view displays about a set of items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeSummary {
    /// One entry per category, in [`CategoryTag::ALL`] order.
    pub categories:         Vec<CategorySummary>,
    /// The 90/10 weighted blend of the category percentages.
    pub overall_percentage: f64,
    /// Letter and color for `overall_percentage`.
    pub overall_band:       Band,
}

impl GradeSummary {
    /// Returns the breakdown for a single category.
    pub fn category(&self, tag: CategoryTag) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| c.category == tag)
    }

    /// Rounded percentage for a category, `0` if it is missing.
    pub fn percentage_for(&self, tag: CategoryTag) -> f64 {
        self.category(tag).map_or(0.0, |c| c.percentage)
    }
}

/// Rounds half-way values up towards positive infinity, whatever the sign.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Sums score and max score per category. Every category is present in the
/// result, with zero totals when it has no items.
pub fn aggregate_by_category(items: &[ScoredItem]) -> BTreeMap<CategoryTag, CategoryTotals> {
    let mut totals: BTreeMap<CategoryTag, CategoryTotals> = CategoryTag::ALL
        .into_iter()
        .map(|tag| (tag, CategoryTotals::default()))
        .collect();

    for item in items {
        let entry = totals.entry(item.category()).or_default();
        entry.score_sum += item.score();
        entry.max_score_sum += item.max_score();
    }

    totals
}

/// `score_sum / max_score_sum` as a percentage rounded to two decimals.
///
/// Returns `0` when there is no positive, finite denominator. Use
/// [`checked_percentage`] to get an error instead.
pub fn percentage(score_sum: f64, max_score_sum: f64) -> f64 {
    checked_percentage(score_sum, max_score_sum).unwrap_or(0.0)
}

/// Like [`percentage`], but reports a missing denominator as
/// [`GradeError::InvalidDenominator`].
pub fn checked_percentage(score_sum: f64, max_score_sum: f64) -> Result<f64, GradeError> {
    if !(max_score_sum.is_finite() && max_score_sum > 0.0) {
        return Err(GradeError::InvalidDenominator {
            context: format!("a total of {max_score_sum} points"),
        });
    }
    if !score_sum.is_finite() {
        return Err(GradeError::InvalidNumericInput {
            field: "score total",
            value: score_sum.to_string(),
        });
    }

    Ok(round_half_up(score_sum / max_score_sum * 10000.0) / 100.0)
}

/// Blends the two category percentages with their fixed weights, rounded
/// to two decimals. Categories count as wholes, however many items each
/// holds.
pub fn overall_percentage(all_tasks_pct: f64, practice_prep_pct: f64) -> f64 {
    let weighted = all_tasks_pct * CategoryTag::AllTasksAssessments.weight()
        + practice_prep_pct * CategoryTag::PracticePreparation.weight();
    round_half_up(weighted * 100.0) / 100.0
}

/// Whole-number percentage for a single assignment row.
pub fn item_percentage(item: &ScoredItem) -> f64 {
    round_half_up(item.score() / item.max_score() * 100.0)
}

/// Runs the whole pipeline: totals, percentages, and bands per category,
/// then the weighted overall grade.
pub fn summarize(items: &[ScoredItem]) -> GradeSummary {
    let mut counts: BTreeMap<CategoryTag, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(item.category()).or_default() += 1;
    }

    let categories: Vec<CategorySummary> = aggregate_by_category(items)
        .into_iter()
        .map(|(category, totals)| {
            let percentage = totals.percentage();
            CategorySummary {
                category,
                item_count: counts.get(&category).copied().unwrap_or(0),
                totals,
                percentage,
                band: band_for_percentage(percentage),
            }
        })
        .collect();

    let pct_of = |tag: CategoryTag| {
        categories
            .iter()
            .find(|c| c.category == tag)
            .map_or(0.0, |c| c.percentage)
    };
    let overall = overall_percentage(
        pct_of(CategoryTag::AllTasksAssessments),
        pct_of(CategoryTag::PracticePreparation),
    );

    GradeSummary {
        categories,
        overall_percentage: overall,
        overall_band: band_for_percentage(overall),
    }
}

/// Unweighted mean of letter points across classes, or `None` when there
/// are no classes.
pub fn grade_point_average<I>(percentages: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (points, count) = percentages
        .into_iter()
        .map(|pct| letter_for_percentage(pct).points())
        .fold((0.0, 0usize), |(sum, n), p| (sum + p, n + 1));

    (count > 0).then(|| points / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::Letter;

    fn item(category: CategoryTag, score: f64, max: f64) -> ScoredItem {
        ScoredItem::new("item", category, score, max).unwrap()
    }

    #[test]
    fn rounds_halves_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.4999), 2.0);
    }

    #[test]
    fn zero_denominator_is_zero_percent() {
        assert_eq!(percentage(0.0, 0.0), 0.0);
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert!(matches!(
            checked_percentage(5.0, 0.0),
            Err(GradeError::InvalidDenominator { .. })
        ));
    }

    #[test]
    fn percentage_rounds_to_two_places() {
        assert_eq!(percentage(98.0, 116.0), 84.48);
        assert_eq!(percentage(1.0, 3.0), 33.33);
        assert_eq!(percentage(2.0, 3.0), 66.67);
    }

    #[test]
    fn item_percentage_is_whole_number() {
        assert_eq!(item_percentage(&item(CategoryTag::AllTasksAssessments, 17.0, 19.0)), 89.0);
        assert_eq!(item_percentage(&item(CategoryTag::PracticePreparation, 9.0, 15.0)), 60.0);
    }

    #[test]
    fn empty_categories_are_flagged() {
        let summary = summarize(&[item(CategoryTag::AllTasksAssessments, 9.0, 10.0)]);
        let prep = summary.category(CategoryTag::PracticePreparation).unwrap();
        assert!(prep.is_empty());
        assert_eq!(prep.item_count, 0);
        assert_eq!(prep.percentage, 0.0);
        assert_eq!(summary.overall_percentage, 81.0);
        assert_eq!(summary.overall_band.letter, Letter::B);
    }

    #[test]
    fn gpa_of_no_classes_is_none() {
        assert_eq!(grade_point_average(Vec::<f64>::new()), None);
        assert_eq!(grade_point_average([95.0, 85.0]), Some(3.5));
    }
}
