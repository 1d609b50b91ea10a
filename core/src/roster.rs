//! # Roster Context
//!
//! Owns the two registries and the enrollment manager for one session.
//!
//! Every collection is loaded once when the roster is opened and each
//! mutation is written back to its store before the call returns.

use roster_common::config::Config;
use roster_common::error::StoreError;
use roster_common::models::course::Course;
use roster_common::models::enrollment::Enrollment;
use roster_common::models::student::Student;
use roster_common::repository::Repository;
use tracing::debug;

use crate::courses::CourseRegistry;
use crate::enrollment::{EnrollError, EnrollOutcome, EnrollmentManager, StudentCourses};
use crate::store::flat_file::FlatFileRepository;
use crate::students::{RegistrationError, StudentRegistry};

pub struct Roster {
    pub students: StudentRegistry,
    pub courses: CourseRegistry,
    pub enrollments: EnrollmentManager,
}

impl Roster {
    /// Opens the flat file stores found in `cfg.data_dir`.
    pub fn open(cfg: &Config) -> Result<Self, StoreError> {
        debug!("opening roster in {}", cfg.data_dir().display());

        Self::with_repositories(
            Box::new(FlatFileRepository::<Student>::new(cfg.students_path())),
            &FlatFileRepository::<Course>::new(cfg.courses_path()),
            Box::new(FlatFileRepository::<Enrollment>::new(cfg.enrollments_path())),
        )
    }

    pub fn with_repositories(
        students: Box<dyn Repository<Student>>,
        courses: &dyn Repository<Course>,
        enrollments: Box<dyn Repository<Enrollment>>,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            students: StudentRegistry::load(students)?,
            courses: CourseRegistry::load(courses)?,
            enrollments: EnrollmentManager::load(enrollments)?,
        })
    }

    pub fn register_student(&mut self, id: &str, name: &str) -> Result<&Student, RegistrationError> {
        self.students.register(id, name)
    }

    pub fn enroll(&mut self, student_id: &str, course_id: &str) -> Result<EnrollOutcome, EnrollError> {
        self.enrollments
            .enroll(&self.students, &self.courses, student_id, course_id)
    }

    pub fn courses_for(&self, student_id: &str) -> Result<StudentCourses, EnrollError> {
        self.enrollments
            .courses_for(&self.students, &self.courses, student_id)
    }
}
