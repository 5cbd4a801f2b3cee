//! Insertion-ordered record list keyed by id.

use crate::error::{GradebookError, Result};
use crate::model::Record;

/// Insertion-ordered list of records with unique ids.
///
/// Lookups are linear scans; collections are small and order matters more
/// than lookup speed.
#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> RecordStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a list, rejecting duplicate ids.
    pub fn from_records(records: Vec<T>) -> Result<Self> {
        let mut store = Self::new();
        store.replace_all(records)?;
        Ok(store)
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    /// Returns the record with the given id.
    pub fn get_by_id(&self, id: i64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn get_by_id_mut(&mut self, id: i64) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get_by_id(id).is_some()
    }

    /// Appends a record.
    ///
    /// # Errors
    /// `DuplicateKey` when a record with the same id is already stored.
    pub fn add(&mut self, record: T) -> Result<&T> {
        if self.contains(record.id()) {
            return Err(GradebookError::duplicate(T::COLLECTION, record.id()));
        }
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Removes and returns the record with the given id.
    ///
    /// # Errors
    /// `NotFound` when no record has that id.
    pub fn delete_by_id(&mut self, id: i64) -> Result<T> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| GradebookError::not_found(T::COLLECTION, id))?;
        Ok(self.records.remove(index))
    }

    /// Returns the records matching `predicate` in insertion order.
    pub fn search<P>(&self, predicate: P) -> Vec<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Replaces the whole collection.
    ///
    /// The store is left untouched when `records` holds duplicate ids.
    pub fn replace_all(&mut self, records: Vec<T>) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(GradebookError::duplicate(T::COLLECTION, record.id()));
            }
        }
        self.records = records;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<'a, T: Record> IntoIterator for &'a RecordStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
