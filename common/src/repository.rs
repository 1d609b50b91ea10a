//! # Outbound Port
//!
//! The contract the registries use to persist their records.
//!
//! ## Rules
//! 1. Only the trait lives here, implementations belong in `roster-core::store`.
//! 2. `save_all` always receives the complete collection and replaces whatever
//!    was stored before. There is no partial update.

use crate::error::StoreError;

pub trait Repository<T> {
    /// Reads every stored record in file order.
    ///
    /// A store that does not exist yet yields an empty list.
    fn load_all(&self) -> Result<Vec<T>, StoreError>;

    /// Overwrites the store with `records`, keeping their order.
    fn save_all(&self, records: &[T]) -> Result<(), StoreError>;
}
