pub mod courses;
pub mod enroll;
pub mod menu;
pub mod register;
pub mod show;

#[cfg(test)]
mod testing;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Keeps track of students, courses and who is enrolled where.")]
#[command(version)]
pub struct CommandLine {
    /// Directory holding the student, course and enrollment stores
    #[arg(short, long, default_value = ".")]
    pub data_dir: PathBuf,
    /// Hide headers and separators
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Log more details to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive menu (default)
    #[command(alias = "m")]
    Menu,
    /// Show all courses
    #[command(alias = "c")]
    Courses,
    /// Register a new student
    #[command(alias = "r")]
    Register { id: String, name: String },
    /// Enroll a student in a course
    #[command(alias = "e")]
    Enroll { student_id: String, course_id: String },
    /// Show the courses a student is enrolled in
    #[command(alias = "s")]
    Show { student_id: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
