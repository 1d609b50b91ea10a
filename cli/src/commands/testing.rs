use std::io;

use roster_common::error::StoreError;
use roster_common::models::course::Course;
use roster_common::models::enrollment::Enrollment;
use roster_common::models::student::Student;
use roster_common::repository::Repository;
use roster_core::roster::Roster;

use crate::terminal::print::Console;

/// Loads empty and refuses every save.
pub struct ReadOnly;

impl<T> Repository<T> for ReadOnly {
    fn load_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(Vec::new())
    }

    fn save_all(&self, _records: &[T]) -> Result<(), StoreError> {
        Err(StoreError::io(
            "read-only",
            io::Error::new(io::ErrorKind::PermissionDenied, "read-only store"),
        ))
    }
}

pub fn read_only_roster() -> Roster {
    Roster::with_repositories(
        Box::new(ReadOnly) as Box<dyn Repository<Student>>,
        &ReadOnly as &dyn Repository<Course>,
        Box::new(ReadOnly) as Box<dyn Repository<Enrollment>>,
    )
    .unwrap()
}

pub fn plain_console() -> Console<Vec<u8>> {
    colored::control::set_override(false);
    Console::new(Vec::new(), 0)
}
