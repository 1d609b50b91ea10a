//! # Roster Core
//!
//! Application services of the enrollment keeper.
//!
//! * **[`registry`]**: insertion ordered id to record mapping shared by the registries.
//! * **[`students`]** / **[`courses`]**: the two registries.
//! * **[`enrollment`]**: the enrollment manager, the only cross-entity logic.
//! * **[`roster`]**: the context that owns all of the above for one session.
//! * **[`store`]**: concrete implementations of the repository port.

pub mod courses;
pub mod enrollment;
pub mod registry;
pub mod roster;
pub mod store;
pub mod students;
