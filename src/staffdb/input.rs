//! Bounded line reading.
//!
//! Both the menu and the file codec read input one `\n`-delimited line at a
//! time, keeping at most a fixed number of bytes. The rest of an over-long
//! line is consumed from the underlying buffer and dropped as it arrives, so
//! memory stays bounded by the limit no matter how long the line is. Whether
//! anything was discarded, whether the line actually ended in a newline, and
//! whether it was valid UTF-8 are reported so callers can decide how strict
//! to be.

use crate::error::Result;
use std::io::{BufRead, ErrorKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    /// Bytes past the limit were dropped
    pub truncated: bool,
    /// The line ended with `\n` rather than end of input
    pub terminated: bool,
    /// The kept bytes were not UTF-8; `text` holds a lossy decoding
    pub invalid_utf8: bool,
}

pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    lines_read: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            lines_read: 0,
        }
    }

    /// Number of lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Read the next line, keeping at most `max_len` bytes of it.
    ///
    /// Returns `Ok(None)` at end of input. A trailing `\r` is stripped along
    /// with the newline. Truncation never splits a UTF-8 character.
    pub fn read_line(&mut self, max_len: usize) -> Result<Option<Line>> {
        self.buf.clear();
        // One spare byte so a `\r` before the newline is not mistaken for overflow.
        let keep = max_len.saturating_add(1);
        let mut seen_any = false;
        let mut overflow = false;
        let mut terminated = false;

        loop {
            let available = match self.inner.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if available.is_empty() {
                break;
            }
            seen_any = true;

            let (chunk, used) = match available.iter().position(|&b| b == b'\n') {
                Some(i) => {
                    terminated = true;
                    (&available[..i], i + 1)
                }
                None => (available, available.len()),
            };
            let room = keep.saturating_sub(self.buf.len());
            if chunk.len() > room {
                overflow = true;
            }
            self.buf.extend_from_slice(&chunk[..chunk.len().min(room)]);
            self.inner.consume(used);

            if terminated {
                break;
            }
        }

        if !seen_any {
            return Ok(None);
        }
        self.lines_read += 1;

        if terminated && self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        let truncated = overflow || self.buf.len() > max_len;
        if truncated {
            self.buf.truncate(max_len);
            // Drop a multi-byte character the cut left incomplete.
            if let Err(e) = std::str::from_utf8(&self.buf) {
                if e.error_len().is_none() {
                    self.buf.truncate(e.valid_up_to());
                }
            }
        }

        let (text, invalid_utf8) = match std::str::from_utf8(&self.buf) {
            Ok(text) => (text.to_owned(), false),
            Err(_) => (String::from_utf8_lossy(&self.buf).into_owned(), true),
        };

        Ok(Some(Line {
            text,
            truncated,
            terminated,
            invalid_utf8,
        }))
    }
}
