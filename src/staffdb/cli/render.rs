use super::setup::OutputFormat;
use colored::Colorize;
use staffdb::api::{CmdMessage, MessageLevel};
use staffdb::codec;
use staffdb::error::Result;
use staffdb::model::Record;
use std::io::Write;

pub(super) const MENU: &str = "\nOptions:\n\
0: Add new employee to database\n\
1: Delete employee from database\n\
2: Print database to screen\n\
3: Exit database program\n\
\nEnter option: ";

pub(super) fn print_messages<W: Write>(err: &mut W, messages: &[CmdMessage]) -> Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(err, "{}", line)?;
    }
    Ok(())
}

pub(super) fn print_records<W: Write>(
    out: &mut W,
    records: &[Record],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => codec::write_records(&mut *out, records)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
