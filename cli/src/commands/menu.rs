//! # Interactive Menu
//!
//! The numbered 1-5 loop. Each choice prompts for its inputs, calls into the
//! roster and prints the outcome. The loop ends on `5` or at end of input.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::str::FromStr;

use roster_core::roster::Roster;
use tracing::error;

use crate::commands::{courses, enroll, register, show};
use crate::terminal::print::Console;

const TITLE: &str = "student course registration system";

const ENTRIES: &[&str] = &[
    "Register New Student",
    "Show All Courses",
    "Enroll Student in Course",
    "Show Student Enrollments",
    "Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Courses,
    Enroll,
    Show,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Register),
            "2" => Ok(Self::Courses),
            "3" => Ok(Self::Enroll),
            "4" => Ok(Self::Show),
            "5" => Ok(Self::Exit),
            _ => Err("Invalid choice. Please enter a number between 1 and 5.".to_string()),
        }
    }
}

type Flow = ControlFlow<()>;

pub struct Session<'a, R, W: Write> {
    roster: &'a mut Roster,
    input: R,
    console: Console<W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(roster: &'a mut Roster, input: R, console: Console<W>) -> Self {
        Self {
            roster,
            input,
            console,
        }
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        self.summary()?;

        loop {
            self.show_menu()?;

            let Some(choice) = self.read_line("Enter your choice (1-5)")? else {
                break;
            };

            let flow = match choice.parse::<MenuChoice>() {
                Ok(MenuChoice::Register) => self.register()?,
                Ok(MenuChoice::Courses) => {
                    courses::courses(self.roster, &mut self.console)?;
                    Flow::Continue(())
                }
                Ok(MenuChoice::Enroll) => self.enroll()?,
                Ok(MenuChoice::Show) => self.show()?,
                Ok(MenuChoice::Exit) => Flow::Break(()),
                Err(msg) => {
                    self.console.error(msg)?;
                    Flow::Continue(())
                }
            };

            if flow.is_break() {
                break;
            }
        }

        self.console.print("Exiting the system. Goodbye!")?;
        self.console.fat_separator()?;
        Ok(())
    }

    fn summary(&mut self) -> anyhow::Result<()> {
        let line = format!(
            "{} students · {} courses · {} enrollments",
            self.roster.students.len(),
            self.roster.courses.list_all().len(),
            self.roster.enrollments.len()
        );
        self.console.fat_separator()?;
        self.console.centerln(&line)?;
        Ok(())
    }

    fn show_menu(&mut self) -> anyhow::Result<()> {
        self.console.print("")?;
        self.console.header(TITLE)?;
        for (idx, label) in ENTRIES.iter().enumerate() {
            self.console.menu_entry(idx + 1, label)?;
        }
        self.console.separator()?;
        Ok(())
    }

    /// Any unexpected failure while registering, from reading the prompts to
    /// writing the store, is reported and the session carries on.
    fn register(&mut self) -> anyhow::Result<Flow> {
        self.console.header("register new student")?;

        match self.prompt_registration() {
            Ok(flow) => Ok(flow),
            Err(e) => {
                error!("registration failed: {e:#}");
                self.console
                    .error(format!("An unexpected error occurred: {e:#}"))?;
                Ok(Flow::Continue(()))
            }
        }
    }

    fn prompt_registration(&mut self) -> anyhow::Result<Flow> {
        let Some(id) = self.read_line("Enter new Student ID")? else {
            return Ok(Flow::Break(()));
        };
        if let Err(e) = self.roster.students.validate_id(&id) {
            self.console.error(e)?;
            return Ok(Flow::Continue(()));
        }

        let Some(name) = self.read_line("Enter Student Name")? else {
            return Ok(Flow::Break(()));
        };
        register::register(self.roster, &mut self.console, &id, &name)?;
        Ok(Flow::Continue(()))
    }

    fn enroll(&mut self) -> anyhow::Result<Flow> {
        self.console.header("enroll in a course")?;

        let Some(student_id) = self.read_line("Enter Student ID to enroll")? else {
            return Ok(Flow::Break(()));
        };
        let Some(course_id) = self.read_line("Enter Course ID to enroll in")? else {
            return Ok(Flow::Break(()));
        };
        enroll::enroll(self.roster, &mut self.console, &student_id, &course_id)?;
        Ok(Flow::Continue(()))
    }

    fn show(&mut self) -> anyhow::Result<Flow> {
        self.console.header("view student enrollments")?;

        let Some(student_id) = self.read_line("Enter Student ID")? else {
            return Ok(Flow::Break(()));
        };
        show::show(self.roster, &mut self.console, &student_id)?;
        Ok(Flow::Continue(()))
    }

    /// Prompts and reads one trimmed line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.console.prompt(prompt)?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            self.console.print("")?;
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}
