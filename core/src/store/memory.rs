use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

use roster_common::error::StoreError;
use roster_common::repository::Repository;

/// In-memory repository for service tests.
///
/// Clones share storage, so a test can keep a handle after boxing one.
#[derive(Clone)]
pub(crate) struct MemoryRepository<T> {
    records: Rc<RefCell<Vec<T>>>,
    saves: Rc<Cell<usize>>,
    fail_saves: Rc<Cell<bool>>,
}

impl<T: Clone> MemoryRepository<T> {
    pub(crate) fn new(records: Vec<T>) -> Self {
        Self {
            records: Rc::new(RefCell::new(records)),
            saves: Rc::new(Cell::new(0)),
            fail_saves: Rc::new(Cell::new(false)),
        }
    }

    pub(crate) fn stored(&self) -> Vec<T> {
        self.records.borrow().clone()
    }

    pub(crate) fn saves(&self) -> usize {
        self.saves.get()
    }

    pub(crate) fn fail_saves(&self) {
        self.fail_saves.set(true);
    }
}

impl<T: Clone> Repository<T> for MemoryRepository<T> {
    fn load_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.stored())
    }

    fn save_all(&self, records: &[T]) -> Result<(), StoreError> {
        if self.fail_saves.get() {
            return Err(StoreError::io(
                "memory",
                io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        *self.records.borrow_mut() = records.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
