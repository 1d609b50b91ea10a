//! # Roster Common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`models`]**: the entities of the system (students, courses, enrollments).
//! * **[`repository`]**: the outbound port through which the services persist records.
//! * **[`error`]**: failures raised by storage adapters.
//! * **[`config`]**: runtime configuration assembled by the binary.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
