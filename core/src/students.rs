use tracing::{info, warn};

use roster_common::error::StoreError;
use roster_common::models::DELIMITER;
use roster_common::models::student::Student;
use roster_common::repository::Repository;

use crate::registry::Registry;

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Student ID cannot be empty.")]
    EmptyId,

    #[error("Student with ID {0} already exists.")]
    DuplicateId(String),

    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Student ID and name cannot contain ',' or line breaks.")]
    ForbiddenCharacter,

    #[error("An unexpected error occurred: {0}")]
    Unexpected(#[from] StoreError),
}

impl RegistrationError {
    /// `true` when the input was rejected, `false` when storage failed.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Unexpected(_))
    }
}

/// Owns every registered student and keeps the student store in sync.
pub struct StudentRegistry {
    students: Registry<Student>,
    repo: Box<dyn Repository<Student>>,
}

impl StudentRegistry {
    pub fn load(repo: Box<dyn Repository<Student>>) -> Result<Self, StoreError> {
        let (students, duplicates) = Registry::from_records(repo.load_all()?);
        for id in duplicates {
            warn!("student id {id} is stored more than once, keeping the last entry");
        }

        Ok(Self { students, repo })
    }

    /// Validates and inserts a new student, then rewrites the whole store.
    ///
    /// Nothing changes in memory unless the store was written.
    pub fn register(&mut self, id: &str, name: &str) -> Result<&Student, RegistrationError> {
        self.validate(id, name)?;

        let pos = match self.students.insert(Student::new(id, name)) {
            Ok(pos) => pos,
            Err(rejected) => return Err(RegistrationError::DuplicateId(rejected.id)),
        };

        if let Err(e) = self.repo.save_all(self.students.as_slice()) {
            self.students.pop();
            return Err(e.into());
        }

        info!("registered student {id}");
        Ok(&self.students.as_slice()[pos])
    }

    /// Runs the input checks of [`Self::register`] without mutating anything.
    pub fn validate(&self, id: &str, name: &str) -> Result<(), RegistrationError> {
        self.validate_id(id)?;
        if name.is_empty() {
            return Err(RegistrationError::EmptyName);
        }
        if has_forbidden_char(name) {
            return Err(RegistrationError::ForbiddenCharacter);
        }
        Ok(())
    }

    /// The id half of [`Self::validate`], usable before a name is known.
    pub fn validate_id(&self, id: &str) -> Result<(), RegistrationError> {
        if id.is_empty() {
            return Err(RegistrationError::EmptyId);
        }
        if has_forbidden_char(id) {
            return Err(RegistrationError::ForbiddenCharacter);
        }
        if self.students.contains(id) {
            return Err(RegistrationError::DuplicateId(id.to_string()));
        }
        Ok(())
    }

    pub fn lookup(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.students.contains(id)
    }

    pub fn list_all(&self) -> &[Student] {
        self.students.as_slice()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// Characters the flat store cannot hold inside a field.
fn has_forbidden_char(field: &str) -> bool {
    field.contains([DELIMITER, '\n', '\r'])
}
