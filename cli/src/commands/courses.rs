use std::io::Write;

use roster_core::roster::Roster;

use crate::terminal::print::Console;

pub fn courses<W: Write>(roster: &Roster, console: &mut Console<W>) -> anyhow::Result<()> {
    console.header("available courses")?;

    let all = roster.courses.list_all();
    if all.is_empty() {
        console.print_status("No courses available.")?;
    } else {
        let rows: Vec<(&str, &str)> = all
            .iter()
            .map(|course| (course.id.as_str(), course.name.as_str()))
            .collect();
        console.aligned_rows(&rows)?;
    }

    console.separator()?;
    Ok(())
}
