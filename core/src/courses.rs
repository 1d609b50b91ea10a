use tracing::warn;

use roster_common::error::StoreError;
use roster_common::models::course::Course;
use roster_common::repository::Repository;

use crate::registry::Registry;

/// Read-only view of the courses on offer.
///
/// Courses only ever arrive through the course store, there is no
/// runtime path that adds one.
pub struct CourseRegistry {
    courses: Registry<Course>,
}

impl CourseRegistry {
    pub fn load(repo: &dyn Repository<Course>) -> Result<Self, StoreError> {
        let (courses, duplicates) = Registry::from_records(repo.load_all()?);
        for id in duplicates {
            warn!("course id {id} is stored more than once, keeping the last entry");
        }

        Ok(Self { courses })
    }

    pub fn lookup(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.courses.contains(id)
    }

    /// Every course in load order.
    pub fn list_all(&self) -> &[Course] {
        self.courses.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
