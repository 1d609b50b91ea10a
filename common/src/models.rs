//! # Domain Models
//!
//! ## Core Entities
//! * [`student::Student`]: a registered student, keyed by an externally assigned id.
//! * [`course::Course`]: a course offered, keyed by its id.
//! * [`enrollment::Enrollment`]: the pair stating that a student takes a course.
//!
//! Every entity is stored as one line of exactly two fields, see [`FlatRecord`].

pub mod course;
pub mod enrollment;
pub mod student;

/// Field separator used by every record store.
pub const DELIMITER: char = ',';

/// A record that owns a unique identifier inside its registry.
pub trait Keyed {
    fn id(&self) -> &str;
}

/// A record persisted as a two-field line.
pub trait FlatRecord: Sized {
    fn fields(&self) -> (&str, &str);
    fn from_fields(first: &str, second: &str) -> Self;
}
