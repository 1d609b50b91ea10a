use std::path::{Path, PathBuf};

pub const STUDENT_FILE: &str = "students.txt";
pub const COURSE_FILE: &str = "courses.txt";
pub const ENROLLMENT_FILE: &str = "enrollments.txt";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the three record stores.
    ///
    /// Created on the first save if it does not exist yet.
    pub data_dir: PathBuf,
    /// Suppresses decorative output. `0` prints everything.
    pub quiet: u8,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            quiet: 0,
        }
    }

    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(STUDENT_FILE)
    }

    pub fn courses_path(&self) -> PathBuf {
        self.data_dir.join(COURSE_FILE)
    }

    pub fn enrollments_path(&self) -> PathBuf {
        self.data_dir.join(ENROLLMENT_FILE)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".")
    }
}
