use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &mut S) -> Result<CmdResult> {
    let listed: Vec<_> = store.enumerate().cloned().collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No entries"));
    }
    Ok(result.with_listed_records(listed))
}
