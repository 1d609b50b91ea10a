mod commands;
mod terminal;

use std::io;

use anyhow::Context;

use commands::{CommandLine, Commands, courses, enroll, menu, register, show};
use roster_common::config::Config;
use roster_core::roster::Roster;
use terminal::{logging, print::Console};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        data_dir: commands.data_dir,
        quiet: commands.quiet,
    };

    let mut roster = Roster::open(&cfg)
        .with_context(|| format!("failed to load records from {}", cfg.data_dir().display()))?;

    let mut console = Console::new(io::stdout().lock(), cfg.quiet);

    match commands.command.unwrap_or(Commands::Menu) {
        Commands::Menu => menu::Session::new(&mut roster, io::stdin().lock(), console).run(),
        Commands::Courses => courses::courses(&roster, &mut console),
        Commands::Register { id, name } => register::register(&mut roster, &mut console, &id, &name),
        Commands::Enroll {
            student_id,
            course_id,
        } => enroll::enroll(&mut roster, &mut console, &student_id, &course_id),
        Commands::Show { student_id } => show::show(&roster, &mut console, &student_id),
    }
}
