use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StaffError};
use crate::store::RecordStore;
use crate::validate::ValidationRules;
use std::path::Path;
use tracing::info;

/// Bulk-load a database file.
///
/// The whole file is parsed before anything is inserted, so a bad record (or
/// a file too big for a bounded store) leaves `store` exactly as it was.
pub fn run<S: RecordStore>(
    store: &mut S,
    path: &Path,
    rules: &ValidationRules,
) -> Result<CmdResult> {
    let records = codec::read_file(path, rules)?;

    if let Some(capacity) = store.capacity() {
        if store.len() + records.len() > capacity {
            return Err(StaffError::StoreFull(capacity));
        }
    }

    let count = records.len();
    for record in records {
        store.insert(record)?;
    }
    info!(path = %path.display(), count, "database loaded");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Loaded {} employees from {}",
        count,
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::array::ArrayStore;
    use crate::store::fixtures::names;
    use crate::store::sorted::SortedStore;
    use std::fs;

    const GOOD: &str = "Name: Carter\nSex: M\nAge: 33\nJob: Chef\n\nName: Adams\nSex: f\nAge: 41\nJob: Engineer\n\n";

    #[test]
    fn loads_and_orders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.txt");
        fs::write(&path, GOOD).unwrap();

        let mut store = SortedStore::new();
        let result = run(&mut store, &path, &ValidationRules::default()).unwrap();
        assert_eq!(names(store.enumerate()), vec!["Adams", "Carter"]);
        assert!(result.messages[0].content.starts_with("Loaded 2 employees"));
    }

    #[test]
    fn bad_second_record_keeps_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.txt");
        fs::write(
            &path,
            "Name: Adams\nSex: F\nAge: 41\nJob: Engineer\n\nName: Baker\nAge: 30\nJob: Clerk\n",
        )
        .unwrap();

        let mut store = SortedStore::new();
        let err = run(&mut store, &path, &ValidationRules::default()).unwrap_err();
        assert!(matches!(err, StaffError::MalformedRecord { ordinal: 2, .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn too_many_records_for_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.txt");
        fs::write(&path, GOOD).unwrap();

        let mut store = ArrayStore::with_capacity(1);
        let err = run(&mut store, &path, &ValidationRules::default()).unwrap_err();
        assert!(matches!(err, StaffError::StoreFull(1)));
        assert!(store.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SortedStore::new();
        let err = run(
            &mut store,
            &dir.path().join("missing.txt"),
            &ValidationRules::default(),
        )
        .unwrap_err();
        assert!(matches!(err, StaffError::Io(_)));
    }
}
