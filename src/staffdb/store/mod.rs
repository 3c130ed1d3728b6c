//! # Storage Layer
//!
//! The [`RecordStore`] trait is the in-memory collection of employee records.
//! Two backends implement it and produce the same listing order for the same
//! inserts:
//!
//! - [`sorted::SortedStore`]: records are kept in name order at all times.
//!   Insertion splices the new record before the first record whose name is
//!   greater, so records with equal names stay in arrival order. No size limit.
//!
//! - [`array::ArrayStore`]: records are appended in arrival order into a
//!   fixed-capacity array and sorted (stably, by name) right before each
//!   enumeration. The sort leaves the storage ordered.
//!
//! Names compare byte-wise and case-sensitively. Duplicate names are allowed;
//! lookups and deletes act on the first match in name order.
//!
//! The store is an explicit value owned by [`crate::api::StaffApi`]; there is
//! no process-wide list.

use crate::error::Result;
use crate::model::Record;

pub mod array;
pub mod sorted;

/// Abstract interface for record storage.
pub trait RecordStore {
    /// Add a record, keeping the store's ordering policy
    fn insert(&mut self, record: Record) -> Result<()>;

    /// Position of the first record whose name equals `name` exactly
    fn find_by_name(&self, name: &str) -> Option<usize>;

    /// Record at a position returned by `find_by_name`
    fn get(&self, position: usize) -> Option<&Record>;

    /// Remove and return the first record named `name`
    fn delete_by_name(&mut self, name: &str) -> Result<Record>;

    /// All records in name order. Each call starts a fresh traversal.
    fn enumerate(&mut self) -> std::slice::Iter<'_, Record>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of records, if bounded
    fn capacity(&self) -> Option<usize> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{Record, Sex};

    pub fn employee(name: &str) -> Record {
        Record::new(name, Sex::Female, 30, "Clerk")
    }

    pub fn names<'a>(records: impl Iterator<Item = &'a Record>) -> Vec<String> {
        records.map(|r| r.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::array::ArrayStore;
    use super::fixtures::{employee, names};
    use super::sorted::SortedStore;
    use super::*;
    use crate::model::Sex;

    fn fill<S: RecordStore>(store: &mut S, inserts: &[Record]) {
        for record in inserts {
            store.insert(record.clone()).unwrap();
        }
    }

    #[test]
    fn both_backends_list_identically() {
        let inserts = vec![
            employee("Carter"),
            employee("adams"),
            Record::new("Baker", Sex::Male, 50, "First"),
            employee("Adams"),
            Record::new("Baker", Sex::Female, 22, "Second"),
        ];

        let mut sorted = SortedStore::new();
        let mut array = ArrayStore::with_capacity(10);
        fill(&mut sorted, &inserts);
        fill(&mut array, &inserts);

        let a: Vec<Record> = sorted.enumerate().cloned().collect();
        let b: Vec<Record> = array.enumerate().cloned().collect();
        assert_eq!(a, b);
        assert_eq!(
            names(a.iter()),
            vec!["Adams", "Baker", "Baker", "Carter", "adams"]
        );
        assert_eq!(a[1].job, "First");
        assert_eq!(a[2].job, "Second");
    }

    #[test]
    fn both_backends_agree_after_deletes() {
        let inserts: Vec<Record> = ["Dent", "Baker", "Adams", "Carter", "Evans"]
            .iter()
            .map(|n| employee(n))
            .collect();

        let mut sorted = SortedStore::new();
        let mut array = ArrayStore::with_capacity(10);
        fill(&mut sorted, &inserts);
        fill(&mut array, &inserts);

        for name in ["Evans", "Adams"] {
            sorted.delete_by_name(name).unwrap();
            array.delete_by_name(name).unwrap();
        }
        sorted.insert(employee("Able")).unwrap();
        array.insert(employee("Able")).unwrap();

        assert_eq!(names(sorted.enumerate()), names(array.enumerate()));
        assert_eq!(
            names(sorted.enumerate()),
            vec!["Able", "Baker", "Carter", "Dent"]
        );
    }
}
