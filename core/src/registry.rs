use std::collections::HashMap;

use roster_common::models::Keyed;

/// Id to record mapping that remembers insertion order.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Keyed> Registry<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builds a registry from loaded records.
    ///
    /// A repeated id replaces the earlier record but keeps its position.
    /// Returns the ids that were seen more than once.
    pub fn from_records(records: Vec<T>) -> (Self, Vec<String>) {
        let mut registry = Self::new();
        let mut duplicates = Vec::new();

        for record in records {
            match registry.index.get(record.id()) {
                Some(&pos) => {
                    duplicates.push(record.id().to_string());
                    registry.records[pos] = record;
                }
                None => registry.push(record),
            }
        }

        (registry, duplicates)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Appends `record` and returns its position, handing it back if its id is taken.
    pub fn insert(&mut self, record: T) -> Result<usize, T> {
        if self.contains(record.id()) {
            return Err(record);
        }
        self.push(record);
        Ok(self.records.len() - 1)
    }

    /// Drops the most recently inserted record.
    pub fn pop(&mut self) -> Option<T> {
        let record = self.records.pop()?;
        self.index.remove(record.id());
        Some(record)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn push(&mut self, record: T) {
        self.index.insert(record.id().to_string(), self.records.len());
        self.records.push(record);
    }
}

impl<T: Keyed> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
