use std::io::Write;

use roster_core::enrollment::EnrollError;
use roster_core::roster::Roster;

use crate::terminal::print::Console;

pub fn show<W: Write>(roster: &Roster, console: &mut Console<W>, student_id: &str) -> anyhow::Result<()> {
    let listing = match roster.courses_for(student_id.trim()) {
        Ok(listing) => listing,
        Err(EnrollError::Store(e)) => return Err(e.into()),
        Err(e) => {
            console.error(e)?;
            return Ok(());
        }
    };

    console.header(&format!(
        "courses for {} (id: {})",
        listing.student.name, listing.student.id
    ))?;

    if listing.is_empty() {
        console.print_status("This student is not enrolled in any courses.")?;
    } else {
        let rows: Vec<(&str, &str)> = listing
            .courses
            .iter()
            .map(|course| (course.id.as_str(), course.name.as_str()))
            .collect();
        console.aligned_rows(&rows)?;
    }

    console.separator()?;
    Ok(())
}
