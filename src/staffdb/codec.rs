//! # Database File Format
//!
//! A database file is a sequence of four-line records:
//!
//! ```text
//! Name: Adams, Jo
//! Sex: F
//! Age: 41
//! Job: Engineer
//!
//! Name: Baker, Sam
//! ...
//! ```
//!
//! Each line starts with its exact label (`"Name: "`, `"Sex: "`, `"Age: "`,
//! `"Job: "`) and ends with a newline. A single blank line may follow each
//! record, which is how [`render_record`] writes them, so a listing can be
//! fed straight back in.
//!
//! Parsing is all or nothing: the first bad line or bad field fails the whole
//! file with [`StaffError::MalformedRecord`], naming the 1-based record number.
//! Name and job values longer than the configured limit are truncated, as they
//! are at the menu.

use crate::error::{Result, StaffError};
use crate::input::{Line, LineReader};
use crate::model::Record;
use crate::validate::{validate_age, validate_sex, validate_text, ValidationRules};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, warn};

pub const NAME_PREFIX: &str = "Name: ";
pub const SEX_PREFIX: &str = "Sex: ";
pub const AGE_PREFIX: &str = "Age: ";
pub const JOB_PREFIX: &str = "Job: ";

/// Parse every record from `reader`, or fail on the first malformed one.
pub fn parse_records<R: BufRead>(reader: R, rules: &ValidationRules) -> Result<Vec<Record>> {
    let mut parser = Parser {
        lines: LineReader::new(reader),
        rules,
        limit: NAME_PREFIX.len().saturating_add(rules.max_field_len),
    };
    let mut records = Vec::new();
    let mut after_record = false;

    while let Some(line) = parser.lines.read_line(parser.limit)? {
        let ordinal = records.len() + 1;
        if after_record && line.text.is_empty() && line.terminated {
            after_record = false;
            continue;
        }

        let name = parser.text_field(line, NAME_PREFIX, "name", ordinal)?;
        let sex = {
            let line = parser.next_line(ordinal, SEX_PREFIX)?;
            let raw = parser.strip(&line, SEX_PREFIX, ordinal)?;
            validate_sex(raw).map_err(|e| StaffError::malformed(ordinal, e.to_string()))?
        };
        let age = {
            let line = parser.next_line(ordinal, AGE_PREFIX)?;
            let raw = parser.strip(&line, AGE_PREFIX, ordinal)?;
            validate_age(raw, rules.max_age)
                .map_err(|e| StaffError::malformed(ordinal, e.to_string()))?
        };
        let job = {
            let line = parser.next_line(ordinal, JOB_PREFIX)?;
            parser.text_field(line, JOB_PREFIX, "job", ordinal)?
        };

        records.push(Record::new(name, sex, age, job));
        after_record = true;
    }

    debug!(count = records.len(), "parsed database records");
    Ok(records)
}

/// Open `path` and parse it. The file is closed before returning.
pub fn read_file<P: AsRef<Path>>(path: P, rules: &ValidationRules) -> Result<Vec<Record>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading database file");
    let file = File::open(path).map_err(StaffError::Io)?;
    parse_records(BufReader::new(file), rules)
}

pub fn render_record(record: &Record) -> String {
    format!(
        "{}{}\n{}{}\n{}{}\n{}{}\n\n",
        NAME_PREFIX,
        record.name,
        SEX_PREFIX,
        record.sex,
        AGE_PREFIX,
        record.age,
        JOB_PREFIX,
        record.job
    )
}

pub fn write_records<'a, W, I>(mut writer: W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    for record in records {
        writer.write_all(render_record(record).as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

struct Parser<'r, R> {
    lines: LineReader<R>,
    rules: &'r ValidationRules,
    /// Longest label plus the field limit
    limit: usize,
}

impl<R: BufRead> Parser<'_, R> {
    fn next_line(&mut self, ordinal: usize, prefix: &str) -> Result<Line> {
        self.lines.read_line(self.limit)?.ok_or_else(|| {
            StaffError::malformed(
                ordinal,
                format!("file ended before the '{}' line", prefix.trim_end()),
            )
        })
    }

    fn strip<'l>(&self, line: &'l Line, prefix: &str, ordinal: usize) -> Result<&'l str> {
        if line.invalid_utf8 {
            return Err(StaffError::malformed(
                ordinal,
                format!("line {} is not valid UTF-8", self.lines.lines_read()),
            ));
        }
        if !line.terminated {
            return Err(StaffError::malformed(
                ordinal,
                format!("missing newline at end of line {}", self.lines.lines_read()),
            ));
        }
        line.text.strip_prefix(prefix).ok_or_else(|| {
            StaffError::malformed(
                ordinal,
                format!(
                    "line {} does not start with '{}'",
                    self.lines.lines_read(),
                    prefix.trim_end()
                ),
            )
        })
    }

    fn text_field(
        &self,
        line: Line,
        prefix: &str,
        field: &'static str,
        ordinal: usize,
    ) -> Result<String> {
        let raw = self.strip(&line, prefix, ordinal)?;
        let value = if raw.len() > self.rules.max_field_len {
            let mut cut = self.rules.max_field_len;
            while !raw.is_char_boundary(cut) {
                cut -= 1;
            }
            &raw[..cut]
        } else {
            raw
        };
        if line.truncated || value.len() < raw.len() {
            warn!(record = ordinal, field, "value truncated to {} bytes", value.len());
        }
        validate_text(field, value).map_err(|e| StaffError::malformed(ordinal, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sex;
    use crate::store::sorted::SortedStore;
    use crate::store::RecordStore;
    use std::io::Cursor;

    const TWO: &str = "Name: Baker, Sam\nSex: m\nAge: 52\nJob: Driver\n\nName: Adams, Jo\nSex: F\nAge: 41\nJob: Engineer\n\n";

    fn parse(s: &str) -> Result<Vec<Record>> {
        parse_records(Cursor::new(s.as_bytes()), &ValidationRules::default())
    }

    fn ordinal_of(err: StaffError) -> usize {
        match err {
            StaffError::MalformedRecord { ordinal, .. } => ordinal,
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn parses_records_in_file_order() {
        let records = parse(TWO).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], Record::new("Baker, Sam", Sex::Male, 52, "Driver"));
        assert_eq!(records[1].name, "Adams, Jo");
    }

    #[test]
    fn blank_separator_is_optional() {
        let records = parse(
            "Name: A\nSex: F\nAge: 1\nJob: x\nName: B\nSex: M\nAge: 2\nJob: y\n",
        )
        .unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn empty_file_has_no_records() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn missing_sex_prefix_fails_whole_load() {
        let text = "Name: A\nSex: F\nAge: 1\nJob: x\n\nName: B\nGender: M\nAge: 2\nJob: y\n";
        let err = parse(text).unwrap_err();
        assert_eq!(ordinal_of(err), 2);
    }

    #[test]
    fn bad_fields_are_fatal() {
        assert_eq!(
            ordinal_of(parse("Name: \nSex: F\nAge: 1\nJob: x\n").unwrap_err()),
            1
        );
        assert_eq!(
            ordinal_of(parse("Name: A\nSex: X\nAge: 1\nJob: x\n").unwrap_err()),
            1
        );
        assert_eq!(
            ordinal_of(parse("Name: A\nSex: F\nAge: 0\nJob: x\n").unwrap_err()),
            1
        );
        assert_eq!(
            ordinal_of(parse("Name: A\nSex: F\nAge: 1\nJob: \n").unwrap_err()),
            1
        );
    }

    #[test]
    fn truncated_record_is_fatal() {
        assert_eq!(ordinal_of(parse("Name: A\nSex: F\n").unwrap_err()), 1);
    }

    #[test]
    fn missing_final_newline_is_fatal() {
        assert_eq!(
            ordinal_of(parse("Name: A\nSex: F\nAge: 1\nJob: x").unwrap_err()),
            1
        );
    }

    #[test]
    fn double_blank_line_is_fatal() {
        let text = "Name: A\nSex: F\nAge: 1\nJob: x\n\n\nName: B\nSex: M\nAge: 2\nJob: y\n";
        assert_eq!(ordinal_of(parse(text).unwrap_err()), 2);
    }

    #[test]
    fn accepts_crlf_line_endings() {
        let records = parse("Name: A\r\nSex: F\r\nAge: 1\r\nJob: x\r\n\r\n").unwrap();
        assert_eq!(records[0].job, "x");
    }

    #[test]
    fn long_names_are_truncated() {
        let rules = ValidationRules {
            max_age: Some(120),
            max_field_len: 5,
        };
        let text = "Name: Abcdefghij\nSex: F\nAge: 1\nJob: Clerk\n";
        let records = parse_records(Cursor::new(text.as_bytes()), &rules).unwrap();
        assert_eq!(records[0].name, "Abcde");
    }

    #[test]
    fn invalid_utf8_is_fatal() {
        let bytes: &[u8] = b"Name: Adams\nSex: F\nAge: 41\nJob: Clerk\n\nName: B\xffker\nSex: M\nAge: 2\nJob: y\n";
        let err = parse_records(Cursor::new(bytes), &ValidationRules::default()).unwrap_err();
        assert_eq!(ordinal_of(err), 2);
    }

    #[test]
    fn huge_field_limit_does_not_overflow() {
        let rules = ValidationRules {
            max_age: None,
            max_field_len: usize::MAX,
        };
        let records = parse_records(Cursor::new(TWO.as_bytes()), &rules).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn render_matches_listing_format() {
        let record = Record::new("Adams, Jo", Sex::Female, 41, "Engineer");
        assert_eq!(
            render_record(&record),
            "Name: Adams, Jo\nSex: F\nAge: 41\nJob: Engineer\n\n"
        );
    }

    #[test]
    fn store_round_trip() {
        let mut store = SortedStore::new();
        for record in parse(TWO).unwrap() {
            store.insert(record).unwrap();
        }

        let mut out = Vec::new();
        write_records(&mut out, store.enumerate()).unwrap();

        let reparsed = parse(std::str::from_utf8(&out).unwrap()).unwrap();
        let original: Vec<Record> = store.enumerate().cloned().collect();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn read_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(dir.path().join("nope.txt"), &ValidationRules::default()).unwrap_err();
        assert!(matches!(err, StaffError::Io(_)));
    }
}
