use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;
use tracing::debug;

pub fn run<S: RecordStore>(store: &mut S, record: Record) -> Result<CmdResult> {
    store.insert(record.clone())?;
    debug!(name = %record.name, count = store.len(), "employee added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("{} added", record.name)));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StaffError;
    use crate::store::array::ArrayStore;
    use crate::store::fixtures::employee;
    use crate::store::sorted::SortedStore;

    #[test]
    fn adds_to_store() {
        let mut store = SortedStore::new();
        let result = run(&mut store, employee("Adams")).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(result.affected_records[0].name, "Adams");
        assert_eq!(result.messages[0].content, "Adams added");
    }

    #[test]
    fn reports_full_store() {
        let mut store = ArrayStore::with_capacity(1);
        run(&mut store, employee("Adams")).unwrap();
        let err = run(&mut store, employee("Baker")).unwrap_err();
        assert!(matches!(err, StaffError::StoreFull(1)));
        assert_eq!(store.len(), 1);
    }
}
