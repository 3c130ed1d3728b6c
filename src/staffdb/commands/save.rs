use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// Write the store to `path` in the database file format.
pub fn run<S: RecordStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let file = File::create(path)?;
    codec::write_records(BufWriter::new(file), store.enumerate())?;
    info!(path = %path.display(), count = store.len(), "database saved");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved {} employees to {}",
        store.len(),
        path.display()
    )));
    Ok(result)
}
