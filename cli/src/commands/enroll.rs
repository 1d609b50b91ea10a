use std::io::Write;

use anyhow::Context;

use roster_core::enrollment::{EnrollError, EnrollOutcome};
use roster_core::roster::Roster;

use crate::terminal::print::Console;

pub fn enroll<W: Write>(
    roster: &mut Roster,
    console: &mut Console<W>,
    student_id: &str,
    course_id: &str,
) -> anyhow::Result<()> {
    match roster.enroll(student_id.trim(), course_id.trim()) {
        Ok(EnrollOutcome::Enrolled { student, course }) => {
            console.success(format!("Student {} enrolled in {}.", student.name, course.name))?;
        }
        Ok(EnrollOutcome::AlreadyEnrolled { student, course }) => {
            console.notice(format!(
                "Student {} is already enrolled in {}.",
                student.name, course.name
            ))?;
        }
        Err(EnrollError::Store(e)) => {
            return Err(e).context("failed to save enrollments");
        }
        Err(e) => console.error(e)?,
    }
    Ok(())
}
