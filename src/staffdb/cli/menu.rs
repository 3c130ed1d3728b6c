use super::render::{print_messages, print_records, MENU};
use super::setup::OutputFormat;
use staffdb::api::{CmdMessage, StaffApi};
use staffdb::error::{Result, StaffError};
use staffdb::input::LineReader;
use staffdb::model::Record;
use staffdb::store::RecordStore;
use staffdb::validate::{validate_age, validate_sex, validate_text};
use std::io::{BufRead, Write};
use tracing::trace;

const MENU_LINE_LEN: usize = 300;
const SEX_LINE_LEN: usize = 8;
const AGE_LINE_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Delete,
    Print,
    Exit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    fn try_from(code: i64) -> std::result::Result<Self, i64> {
        match code {
            0 => Ok(MenuChoice::Add),
            1 => Ok(MenuChoice::Delete),
            2 => Ok(MenuChoice::Print),
            3 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

/// Leading integer of a menu line, ignoring anything after it.
fn parse_choice(line: &str) -> Option<i64> {
    let trimmed = line.trim_start();
    let sign_len = usize::from(trimmed.starts_with(&['+', '-'][..]));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..sign_len + digits_len].parse().ok()
}

/// One interactive session: prompts on `err`, listing on `out`.
pub(super) struct Session<S: RecordStore, R, E, O> {
    api: StaffApi<S>,
    input: LineReader<R>,
    err: E,
    out: O,
    format: OutputFormat,
}

impl<S, R, E, O> Session<S, R, E, O>
where
    S: RecordStore,
    R: BufRead,
    E: Write,
    O: Write,
{
    pub(super) fn new(api: StaffApi<S>, input: R, err: E, out: O, format: OutputFormat) -> Self {
        Self {
            api,
            input: LineReader::new(input),
            err,
            out,
            format,
        }
    }

    pub(super) fn api_mut(&mut self) -> &mut StaffApi<S> {
        &mut self.api
    }

    /// Run the menu until exit is chosen or input ends.
    pub(super) fn run(&mut self) -> Result<()> {
        loop {
            write!(self.err, "{}", MENU)?;
            self.err.flush()?;

            let Some(line) = self.input.read_line(MENU_LINE_LEN)? else {
                writeln!(self.err)?;
                return Ok(());
            };

            let Some(code) = parse_choice(&line.text) else {
                writeln!(self.err, "corrupted menu choice")?;
                continue;
            };

            match MenuChoice::try_from(code) {
                Ok(MenuChoice::Add) => self.add()?,
                Ok(MenuChoice::Delete) => self.delete()?,
                Ok(MenuChoice::Print) => self.print()?,
                Ok(MenuChoice::Exit) => return Ok(()),
                Err(other) => writeln!(self.err, "illegal choice {}", other)?,
            }
        }
    }

    fn add(&mut self) -> Result<()> {
        if self.api.is_full() {
            return self.report(StaffError::StoreFull(self.api.len()));
        }

        let rules = *self.api.rules();
        let Some(name) = self.prompt(
            "Employee name [Surname, other names]: ",
            rules.max_field_len,
            |s| validate_text("name", s),
        )?
        else {
            return Ok(());
        };
        let Some(sex) = self.prompt("Employee sex [F or M]: ", SEX_LINE_LEN, validate_sex)? else {
            return Ok(());
        };
        let Some(age) = self.prompt("Employee age: ", AGE_LINE_LEN, |s| {
            validate_age(s, rules.max_age)
        })?
        else {
            return Ok(());
        };
        let Some(job) = self.prompt("Employee job: ", rules.max_field_len, |s| {
            validate_text("job", s)
        })?
        else {
            return Ok(());
        };

        match self.api.add_employee(Record::new(name, sex, age, job)) {
            Ok(result) => print_messages(&mut self.err, &result.messages),
            Err(e) => self.report(e),
        }
    }

    fn delete(&mut self) -> Result<()> {
        write!(self.err, "Enter employee name: ")?;
        self.err.flush()?;
        let Some(line) = self.input.read_line(self.api.rules().max_field_len)? else {
            return Ok(());
        };

        match self.api.delete_employee(&line.text) {
            Ok(result) => print_messages(&mut self.err, &result.messages),
            Err(e) => self.report(e),
        }
    }

    fn print(&mut self) -> Result<()> {
        let result = self.api.list_employees()?;
        print_records(&mut self.out, &result.listed_records, self.format)?;
        print_messages(&mut self.err, &result.messages)
    }

    /// Ask until `check` accepts the input. `None` means input ended.
    fn prompt<T>(
        &mut self,
        label: &str,
        max_len: usize,
        check: impl Fn(&str) -> Result<T>,
    ) -> Result<Option<T>> {
        loop {
            write!(self.err, "{}", label)?;
            self.err.flush()?;

            let Some(line) = self.input.read_line(max_len)? else {
                return Ok(None);
            };
            if line.truncated {
                print_messages(
                    &mut self.err,
                    &[CmdMessage::warning(format!(
                        "Input truncated to {} bytes",
                        line.text.len()
                    ))],
                )?;
            }

            match check(&line.text) {
                Ok(value) => return Ok(Some(value)),
                Err(e @ StaffError::Validation { .. }) => {
                    trace!(input = %line.text, "rejected");
                    print_messages(
                        &mut self.err,
                        &[CmdMessage::warning(format!("{}, please try again", e))],
                    )?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Store errors the menu survives; anything else ends the session.
    fn report(&mut self, error: StaffError) -> Result<()> {
        match error {
            StaffError::NotFound(_) | StaffError::StoreFull(_) | StaffError::Validation { .. } => {
                print_messages(&mut self.err, &[CmdMessage::error(error.to_string())])
            }
            other => Err(other),
        }
    }
}
