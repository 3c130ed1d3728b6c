//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! owner of the record store. The menu (or any other front end) talks to the
//! database only through [`StaffApi`].
//!
//! ## Generic Over RecordStore
//!
//! `StaffApi<S: RecordStore>` works with either backend:
//! - `StaffApi<SortedStore>`: the default, ordered on insert
//! - `StaffApi<ArrayStore>`: fixed capacity, sorted when listed
//!
//! Like the commands it forwards to, the API never prints. It returns
//! `Result<CmdResult>` and leaves rendering to the caller.

use crate::commands;
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;
use crate::validate::ValidationRules;
use std::path::Path;

/// The main API facade for staffdb operations.
pub struct StaffApi<S: RecordStore> {
    store: S,
    rules: ValidationRules,
}

impl<S: RecordStore> StaffApi<S> {
    pub fn new(store: S, rules: ValidationRules) -> Self {
        Self { store, rules }
    }

    /// Field limits callers should validate input against before `add_employee`
    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    pub fn add_employee(&mut self, record: Record) -> Result<commands::CmdResult> {
        crate::validate::validate_record(&record, &self.rules)?;
        commands::add::run(&mut self.store, record)
    }

    pub fn delete_employee(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, name)
    }

    pub fn list_employees(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store)
    }

    pub fn load_database(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.store, path, &self.rules)
    }

    pub fn save_database(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, path)
    }

    /// True when the store cannot take another record
    pub fn is_full(&self) -> bool {
        self.store
            .capacity()
            .is_some_and(|capacity| self.store.len() >= capacity)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StaffError;
    use crate::model::Sex;
    use crate::store::array::ArrayStore;
    use crate::store::fixtures::{employee, names};
    use crate::store::sorted::SortedStore;

    #[test]
    fn add_then_list() {
        let mut api = StaffApi::new(SortedStore::new(), ValidationRules::default());
        for name in ["Baker", "Adams", "Carter"] {
            api.add_employee(employee(name)).unwrap();
        }

        let result = api.list_employees().unwrap();
        assert_eq!(
            names(result.listed_records.iter()),
            vec!["Adams", "Baker", "Carter"]
        );
    }

    #[test]
    fn add_rejects_invalid_record() {
        let mut api = StaffApi::new(SortedStore::new(), ValidationRules::default());
        let err = api
            .add_employee(Record::new("Adams", Sex::Male, 0, "Clerk"))
            .unwrap_err();
        assert!(matches!(err, StaffError::Validation { field: "age", .. }));
        assert!(api.is_empty());
    }

    #[test]
    fn delete_dispatches() {
        let mut api = StaffApi::new(SortedStore::new(), ValidationRules::default());
        api.add_employee(employee("Adams")).unwrap();
        api.delete_employee("Adams").unwrap();
        assert!(api.is_empty());
        assert!(matches!(
            api.delete_employee("Adams"),
            Err(StaffError::NotFound(_))
        ));
    }

    #[test]
    fn reports_full() {
        let mut api = StaffApi::new(ArrayStore::with_capacity(1), ValidationRules::default());
        assert!(!api.is_full());
        api.add_employee(employee("Adams")).unwrap();
        assert!(api.is_full());
        assert_eq!(api.len(), 1);
    }
}
