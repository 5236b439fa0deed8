#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use colored::Colorize;
use itertools::Itertools;
use serde_json::{Value, json};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};
use typed_builder::TypedBuilder;

use crate::{
    config::{self, DEFAULT_TABLE_WIDTH},
    grade::{Band, GradeSummary, band_for_percentage, item_percentage},
    gradebook::Gradebook,
};

/// How reports are rendered.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct ReportOptions {
    /// Apply terminal colors to letters and percentages.
    #[builder(default = true)]
    pub color:       bool,
    /// Wrap width for cells below the header.
    #[builder(default = DEFAULT_TABLE_WIDTH)]
    pub table_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ReportOptions {
    /// Options taken from the global configuration.
    pub fn from_config() -> Self {
        let config = config::get();
        Self::builder()
            .color(config.color())
            .table_width(config.table_width())
            .build()
    }

    /// Paints `text` with an RGB color when colors are enabled.
    fn paint(&self, text: &str, (r, g, b): (u8, u8, u8)) -> String {
        if self.color {
            text.truecolor(r, g, b).to_string()
        } else {
            text.to_string()
        }
    }

    /// Paints `text` with the color of `band`.
    fn paint_band(&self, text: &str, band: Band) -> String {
        self.paint(text, band.color.rgb())
    }
}

/// Formats a percentage without trailing zeros, eg. `78%` or `84.48%`.
pub fn format_percentage(pct: f64) -> String {
    format!("{pct}%")
}

/// A row of the class list.
#[derive(Tabled)]
struct ClassRow {
    #[tabled(rename = "Period")]
    /// * `period`: class period
    period:     u8,
    #[tabled(rename = "Class")]
    /// * `class_name`: course name
    class_name: String,
    #[tabled(rename = "Teacher")]
    /// * `teacher`: teacher's name
    teacher:    String,
    #[tabled(rename = "Letter")]
    /// * `letter`: letter grade, possibly colored
    letter:     String,
    #[tabled(rename = "Percentage")]
    /// * `percentage`: class percentage, possibly colored
    percentage: String,
}

/// A row of the assignments list.
#[derive(Tabled)]
struct AssignmentRow {
    #[tabled(rename = "Assignment")]
    /// * `name`: assignment name
    name:       String,
    #[tabled(rename = "Category")]
    /// * `category`: category label, possibly colored
    category:   String,
    #[tabled(rename = "Points")]
    /// * `points`: `score  /  max`, possibly colored
    points:     String,
    #[tabled(rename = "Percent")]
    /// * `percentage`: whole-number percentage, possibly colored
    percentage: String,
}

/// Applies the shared look used by every report table.
fn styled(mut table: Table, header: String, footer: Option<String>, width: usize) -> String {
    table.with(Panel::header(header));
    if let Some(footer) = footer {
        table.with(Panel::footer(footer));
    }
    table
        .with(Modify::new(Rows::new(1..)).with(Width::wrap(width).keep_words(true)))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}

/// Renders the class list with the student's name, GPA, and marking period.
pub fn classes_table(gradebook: &Gradebook, options: &ReportOptions) -> String {
    let rows: Vec<ClassRow> = gradebook
        .classes
        .iter()
        .map(|class| {
            let band = class.band();
            ClassRow {
                period:     class.period,
                class_name: class.class_name.clone(),
                teacher:    class.teacher.clone(),
                letter:     options.paint_band(band.letter.as_str(), band),
                percentage: options.paint_band(&format_percentage(class.grade_percentage), band),
            }
        })
        .collect();

    let gpa = gradebook
        .gpa()
        .map_or_else(|| "-".to_string(), |gpa| format!("{gpa:.2}"));
    let header = format!(
        "{}\nGPA: {gpa}\n{}",
        gradebook.student_name, gradebook.marking_period
    );

    styled(Table::new(&rows), header, None, options.table_width)
}

/// Renders the assignments list with category percentages in the header and
/// the overall grade in the footer.
pub fn assignments_table(gradebook: &Gradebook, options: &ReportOptions) -> String {
    let summary = gradebook.summary();

    let rows: Vec<AssignmentRow> = gradebook
        .assignments
        .iter()
        .map(|item| {
            let pct = item_percentage(item);
            let band = band_for_percentage(pct);
            AssignmentRow {
                name:       item.name().to_string(),
                category:   options.paint(item.category().label(), item.category().rgb()),
                points:     options.paint_band(&item.to_string(), band),
                percentage: options.paint_band(&format_percentage(pct), band),
            }
        })
        .collect();

    let header = summary
        .categories
        .iter()
        .map(|c| {
            if c.is_empty() {
                return format!("{}: -", c.category.label());
            }
            format!(
                "{}: {} ({} / {})",
                c.category.label(),
                options.paint_band(&format_percentage(c.percentage), c.band),
                c.totals.score_sum,
                c.totals.max_score_sum
            )
        })
        .join("\n");

    let overall = &summary.overall_band;
    let footer = format!(
        "Overall: {} ({})",
        options.paint_band(&format_percentage(summary.overall_percentage), *overall),
        options.paint_band(overall.letter.as_str(), *overall),
    );

    styled(Table::new(&rows), header, Some(footer), options.table_width)
}

/// JSON form of a [`Band`], with both color tokens spelled out.
fn band_json(band: Band) -> Value {
    json!({
        "letter": band.letter.as_str(),
        "color": band.color.hex(),
        "style_class": band.color.style_class(),
    })
}

/// JSON form of a grade summary.
pub fn summary_json(summary: &GradeSummary) -> Value {
    let categories: Vec<Value> = summary
        .categories
        .iter()
        .map(|c| {
            json!({
                "category": c.category.label(),
                "items": c.item_count,
                "score_sum": c.totals.score_sum,
                "max_score_sum": c.totals.max_score_sum,
                "percentage": c.percentage,
                "empty": c.is_empty(),
                "band": band_json(c.band),
            })
        })
        .collect();

    json!({
        "categories": categories,
        "overall_percentage": summary.overall_percentage,
        "overall_band": band_json(summary.overall_band),
    })
}

/// JSON form of the assignments view: the grade summary plus every
/// assignment row, newest first.
pub fn assignments_json(gradebook: &Gradebook) -> Value {
    let assignments: Vec<Value> = gradebook
        .assignments
        .iter()
        .map(|item| {
            let pct = item_percentage(item);
            json!({
                "name": item.name(),
                "category": item.category().label(),
                "score": item.score(),
                "max_score": item.max_score(),
                "percentage": pct,
                "band": band_json(band_for_percentage(pct)),
            })
        })
        .collect();

    let mut value = summary_json(&gradebook.summary());
    value["assignments"] = Value::Array(assignments);
    value
}

/// JSON form of the class list.
pub fn classes_json(gradebook: &Gradebook) -> Value {
    let classes: Vec<Value> = gradebook
        .classes
        .iter()
        .map(|class| {
            json!({
                "period": class.period,
                "class_name": class.class_name,
                "teacher": class.teacher,
                "percentage": class.grade_percentage,
                "band": band_json(class.band()),
            })
        })
        .collect();

    json!({
        "student_name": gradebook.student_name,
        "marking_period": gradebook.marking_period,
        "gpa": gradebook.gpa(),
        "classes": classes,
    })
}

/// One-line description of where a percentage lands on the grading scale.
pub fn describe_band(pct: f64, options: &ReportOptions) -> String {
    let band = band_for_percentage(pct);
    format!(
        "{} {} {} {}",
        options.paint_band(&format_percentage(pct), band),
        options.paint_band(band.letter.as_str(), band),
        band.color.hex(),
        band.color.style_class()
    )
}
