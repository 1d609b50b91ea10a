//! Cross-crate tests that drive a [`roster_core::roster::Roster`] against real
//! store files in a throw-away directory.

#[cfg(test)]
mod utils;

#[cfg(test)]
mod enrollment;

#[cfg(test)]
mod persistence;
