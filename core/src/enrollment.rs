//! # Enrollment Manager
//!
//! Cross-entity bookkeeping between the student and course registries.
//!
//! Enrollment pairs are kept in insertion order and are unique over the whole
//! pair. References are only checked when a pair is added, so pairs loaded
//! from storage may point at students or courses that no longer exist.

use std::collections::HashSet;

use tracing::{info, warn};

use roster_common::error::StoreError;
use roster_common::models::course::Course;
use roster_common::models::enrollment::Enrollment;
use roster_common::models::student::Student;
use roster_common::repository::Repository;

use crate::courses::CourseRegistry;
use crate::students::StudentRegistry;

#[derive(Debug, thiserror::Error)]
pub enum EnrollError {
    #[error("Student with ID {0} not found.")]
    StudentNotFound(String),

    #[error("Course with ID {0} not found.")]
    CourseNotFound(String),

    #[error("An unexpected error occurred: {0}")]
    Store(#[from] StoreError),
}

/// Result of a valid enrollment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollOutcome {
    Enrolled { student: Student, course: Course },
    /// The pair was already present. Nothing was written.
    AlreadyEnrolled { student: Student, course: Course },
}

/// Courses a student is enrolled in, first enrolled first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentCourses {
    pub student: Student,
    pub courses: Vec<Course>,
    /// Enrolled course ids with no matching course.
    pub dangling: Vec<String>,
}

impl StudentCourses {
    /// `true` when no enrolled course could be resolved.
    ///
    /// A student whose every pair dangles counts as not enrolled.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

pub struct EnrollmentManager {
    enrollments: Vec<Enrollment>,
    pairs: HashSet<Enrollment>,
    repo: Box<dyn Repository<Enrollment>>,
}

impl EnrollmentManager {
    /// Loads every stored pair. Repeated pairs collapse to their first occurrence.
    pub fn load(repo: Box<dyn Repository<Enrollment>>) -> Result<Self, StoreError> {
        let mut enrollments = Vec::new();
        let mut pairs = HashSet::new();

        for enrollment in repo.load_all()? {
            if pairs.insert(enrollment.clone()) {
                enrollments.push(enrollment);
            } else {
                warn!(
                    "enrollment {},{} is stored more than once, keeping one",
                    enrollment.student_id, enrollment.course_id
                );
            }
        }

        Ok(Self {
            enrollments,
            pairs,
            repo,
        })
    }

    /// Enrolls `student_id` in `course_id`, rewriting the enrollment store on success.
    ///
    /// Checks run in order: student exists, course exists, pair is new.
    pub fn enroll(
        &mut self,
        students: &StudentRegistry,
        courses: &CourseRegistry,
        student_id: &str,
        course_id: &str,
    ) -> Result<EnrollOutcome, EnrollError> {
        let student = students
            .lookup(student_id)
            .ok_or_else(|| EnrollError::StudentNotFound(student_id.to_string()))?;
        let course = courses
            .lookup(course_id)
            .ok_or_else(|| EnrollError::CourseNotFound(course_id.to_string()))?;

        let enrollment = Enrollment::new(student_id, course_id);
        if self.pairs.contains(&enrollment) {
            return Ok(EnrollOutcome::AlreadyEnrolled {
                student: student.clone(),
                course: course.clone(),
            });
        }

        self.enrollments.push(enrollment);
        if let Err(e) = self.repo.save_all(&self.enrollments) {
            self.enrollments.pop();
            return Err(e.into());
        }
        self.pairs.insert(Enrollment::new(student_id, course_id));

        info!("enrolled {student_id} in {course_id}");
        Ok(EnrollOutcome::Enrolled {
            student: student.clone(),
            course: course.clone(),
        })
    }

    /// Resolves the courses `student_id` is enrolled in.
    ///
    /// Pairs naming an unknown course are skipped and reported in
    /// [`StudentCourses::dangling`].
    pub fn courses_for(
        &self,
        students: &StudentRegistry,
        courses: &CourseRegistry,
        student_id: &str,
    ) -> Result<StudentCourses, EnrollError> {
        let student = students
            .lookup(student_id)
            .ok_or_else(|| EnrollError::StudentNotFound(student_id.to_string()))?;

        let mut resolved = Vec::new();
        let mut dangling = Vec::new();

        for enrollment in self.enrollments.iter().filter(|e| e.is_for_student(student_id)) {
            match courses.lookup(&enrollment.course_id) {
                Some(course) => resolved.push(course.clone()),
                None => dangling.push(enrollment.course_id.clone()),
            }
        }

        if !dangling.is_empty() {
            warn!(
                "student {student_id} is enrolled in {} unknown course(s): {}",
                dangling.len(),
                dangling.join(", ")
            );
        }

        Ok(StudentCourses {
            student: student.clone(),
            courses: resolved,
            dangling,
        })
    }

    pub fn contains(&self, student_id: &str, course_id: &str) -> bool {
        self.pairs.contains(&Enrollment::new(student_id, course_id))
    }

    pub fn list_all(&self) -> &[Enrollment] {
        &self.enrollments
    }

    pub fn len(&self) -> usize {
        self.enrollments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enrollments.is_empty()
    }
}
