use std::{fs, path::PathBuf};

use gradesleuth::{
    Gradebook,
    grade::{CategoryTag, Letter, ScoredItem},
};
use uuid::Uuid;

fn temp_file(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("gradesleuth-{}.json", Uuid::new_v4()));
    fs::write(&path, contents).expect("write gradebook");
    path
}

#[test]
fn sample_gradebook_matches_placeholder_data() {
    let gradebook = Gradebook::sample();

    assert_eq!(gradebook.classes.len(), 8);
    assert_eq!(gradebook.assignments.len(), 8);
    assert_eq!(gradebook.marking_period, "MP4 Interim");

    let letters: Vec<Letter> = gradebook.classes.iter().map(|c| c.letter()).collect();
    assert_eq!(letters, [
        Letter::A,
        Letter::A,
        Letter::B,
        Letter::B,
        Letter::C,
        Letter::C,
        Letter::D,
        Letter::E
    ]);

    let summary = gradebook.summary();
    assert_eq!(summary.overall_percentage, 83.83);
    assert_eq!(summary.overall_band.letter, Letter::B);
}

#[test]
fn gpa_averages_letter_points() {
    let gradebook = Gradebook::sample();
    assert_eq!(gradebook.gpa(), Some(19.0 / 8.0));

    let empty = Gradebook {
        classes: Vec::new(),
        ..Gradebook::sample()
    };
    assert_eq!(empty.gpa(), None);
}

#[test]
fn new_assignments_go_first_and_change_the_grade() {
    let mut gradebook = Gradebook::sample();
    let before = gradebook.summary();

    let item = ScoredItem::from_input("Pop Quiz", "Practice / Preparation", "0", "50")
        .expect("valid form input");
    gradebook.add_assignment(item);

    assert_eq!(gradebook.assignments[0].name(), "Pop Quiz");
    assert_eq!(gradebook.assignments.len(), 9);

    let after = gradebook.summary();
    assert_eq!(after.percentage_for(CategoryTag::PracticePreparation), 39.0);
    assert_eq!(
        after.percentage_for(CategoryTag::AllTasksAssessments),
        before.percentage_for(CategoryTag::AllTasksAssessments)
    );
    assert!(after.overall_percentage < before.overall_percentage);
}

#[test]
fn loads_gradebook_from_file() {
    let path = temp_file(
        r#"{
            "student_name": "Ada",
            "marking_period": "MP1",
            "classes": [
                { "period": 1, "class_name": "Algebra", "teacher": "Ms. Noether", "grade_percentage": 91.5 }
            ],
            "assignments": [
                { "name": "Quiz 1", "category": "All Tasks / Assessments", "score": 9, "max_score": 10 },
                { "name": "HW 1", "category": "PracticePreparation", "score": 4, "max_score": 5 }
            ]
        }"#,
    );

    let gradebook = Gradebook::load(&path).expect("load gradebook");
    assert_eq!(gradebook.student_name, "Ada");
    assert_eq!(gradebook.classes[0].letter(), Letter::A);

    let summary = gradebook.summary();
    assert_eq!(summary.percentage_for(CategoryTag::AllTasksAssessments), 90.0);
    assert_eq!(summary.percentage_for(CategoryTag::PracticePreparation), 80.0);
    assert_eq!(summary.overall_percentage, 89.0);

    let _ = fs::remove_file(path);
}

#[test]
fn rejects_files_with_invalid_assignments() {
    let path = temp_file(
        r#"{
            "student_name": "Ada",
            "marking_period": "MP1",
            "assignments": [
                { "name": "Broken", "category": "All Tasks / Assessments", "score": 3, "max_score": 0 }
            ]
        }"#,
    );

    let err = Gradebook::load(&path).expect_err("zero max score must be rejected");
    assert!(format!("{err:#}").contains("maximum score must be greater than 0"));

    let _ = fs::remove_file(path);
}

#[test]
fn missing_file_reports_path() {
    let path = std::env::temp_dir().join(format!("gradesleuth-missing-{}.json", Uuid::new_v4()));
    let err = Gradebook::load(&path).expect_err("file does not exist");
    assert!(err.to_string().contains("Could not read gradebook"));
}
