use roster_core::enrollment::{EnrollError, EnrollOutcome};

use crate::utils::Workspace;

/// Walks the whole life of a store directory: empty start, registration,
/// seeded courses, a repeated enrollment and the final listing.
#[test]
fn register_enroll_and_list() {
    let ws = Workspace::new();

    let mut roster = ws.open().unwrap();
    roster.register_student("S1", "Alice").unwrap();
    assert_eq!(ws.read("students.txt"), "S1,Alice\n");

    ws.seed("courses.txt", "C1,Math\nC2,Art\n");
    let mut roster = ws.open().unwrap();

    let first = roster.enroll("S1", "C1").unwrap();
    assert!(matches!(first, EnrollOutcome::Enrolled { .. }));
    assert_eq!(ws.read("enrollments.txt"), "S1,C1\n");

    let second = roster.enroll("S1", "C1").unwrap();
    match second {
        EnrollOutcome::AlreadyEnrolled { student, course } => {
            assert_eq!(student.name, "Alice");
            assert_eq!(course.name, "Math");
        }
        other => panic!("expected already enrolled, got {other:?}"),
    }
    assert_eq!(ws.read("enrollments.txt"), "S1,C1\n");

    let listing = roster.courses_for("S1").unwrap();
    let names: Vec<&str> = listing.courses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Math"]);
}

#[test]
fn enrollment_order_survives_restart() {
    let ws = Workspace::new();
    ws.seed("courses.txt", "C1,Math\nC2,Art\n");

    let mut roster = ws.open().unwrap();
    roster.register_student("S1", "Alice").unwrap();
    roster.enroll("S1", "C1").unwrap();
    roster.enroll("S1", "C2").unwrap();

    let reopened = ws.open().unwrap();
    let ids: Vec<String> = reopened
        .courses_for("S1")
        .unwrap()
        .courses
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, ["C1", "C2"]);
}

#[test]
fn duplicate_pair_survives_restart() {
    let ws = Workspace::new();
    ws.seed("courses.txt", "C1,Math\n");
    ws.seed("students.txt", "S1,Alice\n");

    ws.open().unwrap().enroll("S1", "C1").unwrap();

    let mut reopened = ws.open().unwrap();
    let again = reopened.enroll("S1", "C1").unwrap();

    assert!(matches!(again, EnrollOutcome::AlreadyEnrolled { .. }));
    assert_eq!(reopened.enrollments.len(), 1);
}

#[test]
fn unknown_student_leaves_store_untouched() {
    let ws = Workspace::new();
    ws.seed("courses.txt", "C1,Math\n");
    ws.seed("enrollments.txt", "S1,C1\n");
    ws.seed("students.txt", "S1,Alice\n");

    let mut roster = ws.open().unwrap();
    let err = roster.enroll("S2", "C1").unwrap_err();

    assert!(matches!(err, EnrollError::StudentNotFound(_)));
    assert_eq!(roster.enrollments.len(), 1);
    assert_eq!(ws.read("enrollments.txt"), "S1,C1\n");
}

#[test]
fn removed_course_renders_nothing() {
    let ws = Workspace::new();
    ws.seed("students.txt", "S1,Alice\n");
    ws.seed("courses.txt", "C2,Art\n");
    ws.seed("enrollments.txt", "S1,C1\nS1,C2\n");

    let roster = ws.open().unwrap();
    let listing = roster.courses_for("S1").unwrap();

    assert_eq!(listing.courses.len(), 1);
    assert_eq!(listing.courses[0].name, "Art");
    assert_eq!(listing.dangling, ["C1"]);
}
