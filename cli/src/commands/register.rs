use std::io::Write;

use anyhow::Context;

use roster_core::roster::Roster;
use roster_core::students::RegistrationError;

use crate::terminal::print::Console;

/// Registers a student and reports the outcome.
///
/// Rejected input is reported and is not an error. A storage failure is
/// returned to the caller, which decides whether the session survives it.
pub fn register<W: Write>(
    roster: &mut Roster,
    console: &mut Console<W>,
    id: &str,
    name: &str,
) -> anyhow::Result<()> {
    match roster.register_student(id.trim(), name.trim()) {
        Ok(student) => {
            console.success(format!(
                "Student '{}' registered with ID {}.",
                student.name, student.id
            ))?;
        }
        Err(RegistrationError::Unexpected(e)) => {
            return Err(e).context("failed to save students");
        }
        Err(e) => console.error(e)?,
    }
    Ok(())
}
