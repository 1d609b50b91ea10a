use roster_common::error::StoreError;
use roster_common::models::enrollment::Enrollment;
use roster_common::models::student::Student;
use roster_common::repository::Repository;
use roster_core::store::flat_file::FlatFileRepository;

use crate::utils::Workspace;

#[test]
fn student_registry_reloads_equivalent() {
    let ws = Workspace::new();

    let mut roster = ws.open().unwrap();
    roster.register_student("S2", "Bob").unwrap();
    roster.register_student("S1", "Alice").unwrap();

    let reopened = ws.open().unwrap();
    assert_eq!(reopened.students.len(), 2);
    assert_eq!(reopened.students.lookup("S1"), Some(&Student::new("S1", "Alice")));
    assert_eq!(reopened.students.lookup("S2"), Some(&Student::new("S2", "Bob")));
}

#[test]
fn enrollment_list_keeps_order() {
    let ws = Workspace::new();
    let repo: FlatFileRepository<Enrollment> = FlatFileRepository::new(ws.config.enrollments_path());
    let pairs = vec![
        Enrollment::new("S2", "C1"),
        Enrollment::new("S1", "C3"),
        Enrollment::new("S1", "C1"),
    ];

    repo.save_all(&pairs).unwrap();

    assert_eq!(repo.load_all().unwrap(), pairs);
}

#[test]
fn malformed_store_stops_the_load() {
    let ws = Workspace::new();
    ws.seed("students.txt", "S1,Alice\nS2;Bob\n");

    let Err(err) = ws.open() else {
        panic!("a malformed line must fail the load");
    };
    let store_err = err.downcast_ref::<StoreError>().expect("store error");

    assert!(matches!(store_err, StoreError::Malformed { line: 2, .. }));
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn absent_stores_are_empty() {
    let ws = Workspace::new();
    let roster = ws.open().unwrap();

    assert!(roster.students.is_empty());
    assert!(roster.courses.is_empty());
    assert!(roster.enrollments.is_empty());
    assert_eq!(ws.read("students.txt"), "");
}

#[test]
fn rejected_line_break_keeps_store_loadable() {
    let ws = Workspace::default();

    let mut roster = ws.open().unwrap();
    assert!(roster.register_student("S1", "Ali\nce").is_err());
    roster.register_student("S2", "Bob").unwrap();

    let reopened = ws.open().unwrap();
    assert_eq!(reopened.students.len(), 1);
    assert_eq!(ws.read("students.txt"), "S2,Bob\n");
}
