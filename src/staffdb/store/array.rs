use super::RecordStore;
use crate::error::{Result, StaffError};
use crate::model::Record;

/// Fixed-capacity records in arrival order, sorted on demand.
///
/// `sorted` tracks whether the storage is already in name order so repeated
/// listings without changes skip the sort.
#[derive(Debug)]
pub struct ArrayStore {
    records: Vec<Record>,
    capacity: usize,
    sorted: bool,
}

impl ArrayStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
            sorted: true,
        }
    }
}

impl RecordStore for ArrayStore {
    fn insert(&mut self, record: Record) -> Result<()> {
        if self.records.len() == self.capacity {
            return Err(StaffError::StoreFull(self.capacity));
        }
        self.records.push(record);
        self.sorted = self.records.len() < 2;
        Ok(())
    }

    fn find_by_name(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }

    fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    fn delete_by_name(&mut self, name: &str) -> Result<Record> {
        let pos = self
            .find_by_name(name)
            .ok_or_else(|| StaffError::NotFound(name.to_string()))?;
        // Shifts [pos + 1, len) down by one; never touches index len.
        Ok(self.records.remove(pos))
    }

    fn enumerate(&mut self) -> std::slice::Iter<'_, Record> {
        if !self.sorted {
            self.records.sort_by(|a, b| a.name.cmp(&b.name));
            self.sorted = true;
        }
        self.records.iter()
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.capacity)
    }
}
