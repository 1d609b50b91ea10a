use crate::models::FlatRecord;

/// States that `student_id` is enrolled in `course_id`.
///
/// Uniqueness is enforced over the whole pair. Either side may dangle once
/// loaded from storage, nothing checks references at load time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Enrollment {
    pub student_id: String,
    pub course_id: String,
}

impl Enrollment {
    pub fn new(student_id: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
        }
    }

    pub fn is_for_student(&self, student_id: &str) -> bool {
        self.student_id == student_id
    }
}

impl FlatRecord for Enrollment {
    fn fields(&self) -> (&str, &str) {
        (self.student_id.as_str(), self.course_id.as_str())
    }

    fn from_fields(student_id: &str, course_id: &str) -> Self {
        Self::new(student_id, course_id)
    }
}
