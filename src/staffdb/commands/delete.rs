use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;
use tracing::debug;

pub fn run<S: RecordStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let removed = store.delete_by_name(name)?;
    debug!(name, count = store.len(), "employee deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("{} deleted", removed.name)));
    Ok(result.with_affected_records(vec![removed]))
}
