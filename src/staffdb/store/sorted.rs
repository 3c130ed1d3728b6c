use super::RecordStore;
use crate::error::{Result, StaffError};
use crate::model::Record;

/// Records kept in name order on every insert.
#[derive(Debug, Default)]
pub struct SortedStore {
    records: Vec<Record>,
}

impl SortedStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for SortedStore {
    fn insert(&mut self, record: Record) -> Result<()> {
        // Before the first strictly greater name; equal names keep arrival order.
        let pos = self
            .records
            .partition_point(|r| r.name.as_str() <= record.name.as_str());
        self.records.insert(pos, record);
        Ok(())
    }

    fn find_by_name(&self, name: &str) -> Option<usize> {
        let pos = self.records.partition_point(|r| r.name.as_str() < name);
        match self.records.get(pos) {
            Some(r) if r.name == name => Some(pos),
            _ => None,
        }
    }

    fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    fn delete_by_name(&mut self, name: &str) -> Result<Record> {
        let pos = self
            .find_by_name(name)
            .ok_or_else(|| StaffError::NotFound(name.to_string()))?;
        Ok(self.records.remove(pos))
    }

    fn enumerate(&mut self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
