//! Read the input one physical line at a time.
//!
//! Folded lines are *not* unfolded here: continuation handling is part of the event
//! state machine, which only cares about `DESCRIPTION` continuations.
//!
//! Trailing `\r\n` / `\n` are removed. Bytes which are not valid UTF-8 are replaced
//! rather than aborting the whole conversion.

use std::io::BufRead;

use super::ParserError;

/// A single input line together with its 1-based line number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub inner: String,
    number: usize,
}

impl Line {
    pub fn new(inner: impl Into<String>, number: usize) -> Self {
        Line {
            inner: inner.into(),
            number,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }
}

/// Iterator over the lines of a `BufRead`.
pub struct LineReader<R: BufRead> {
    reader: R,
    number: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        LineReader {
            reader,
            number: 0,
            buf: Vec::new(),
        }
    }
}

impl<'a> LineReader<&'a [u8]> {
    pub fn from_slice(slice: &'a [u8]) -> Self {
        LineReader::new(slice)
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<Line, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        let read = match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(read) => read,
            Err(err) => return Some(Err(ParserError::Io(self.number + 1, err))),
        };
        if read == 0 {
            return None;
        }
        self.number += 1;

        let mut bytes = self.buf.as_slice();
        if let Some(stripped) = bytes.strip_suffix(b"\n") {
            bytes = stripped;
        }
        if let Some(stripped) = bytes.strip_suffix(b"\r") {
            bytes = stripped;
        }
        let inner = match std::str::from_utf8(bytes) {
            Ok(text) => text.to_owned(),
            Err(_) => {
                tracing::warn!(line = self.number, "invalid UTF-8, replacing offending bytes");
                String::from_utf8_lossy(bytes).into_owned()
            }
        };
        Some(Ok(Line::new(inner, self.number)))
    }
}
