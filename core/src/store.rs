//! # Storage Adapters
//!
//! Implementations of [`roster_common::repository::Repository`].
//!
//! * [`flat_file::FlatFileRepository`]: one comma separated record per line.

pub mod flat_file;

#[cfg(test)]
pub(crate) mod memory;
