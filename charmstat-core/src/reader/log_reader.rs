use crate::matcher::LinePattern;
use crate::reader::ReadError;
use crate::record::{Record, RecordError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Lazily turns the lines of a log source into records.
///
/// Lines that are not valid UTF-8, that do not fit the pattern, that belong
/// to a charm other than the selected one, or that cannot form a record are
/// skipped. Only IO failures surface as errors.
pub struct LogReader<'p, R> {
    source: R,
    buf: Vec<u8>,
    pattern: &'p LinePattern,
    selected_charm: Option<String>,
    line_no: u64,
    skipped: u64,
}

impl<'p> LogReader<'p, BufReader<File>> {
    pub fn open(
        path: impl AsRef<Path>,
        pattern: &'p LinePattern,
        selected_charm: Option<String>,
    ) -> Result<Self, ReadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ReadError::open(path, e))?;

        debug!(path = %path.display(), "opened log file");

        Ok(Self::new(BufReader::new(file), pattern, selected_charm))
    }
}

impl<'p, R: BufRead> LogReader<'p, R> {
    pub fn new(source: R, pattern: &'p LinePattern, selected_charm: Option<String>) -> Self {
        Self {
            source,
            buf: Vec::new(),
            pattern,
            selected_charm,
            line_no: 0,
            skipped: 0,
        }
    }

    /// Lines dropped so far.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Lines read so far, including skipped ones.
    pub fn lines_read(&self) -> u64 {
        self.line_no
    }

    fn parse_line(&self, raw: &[u8]) -> Option<Record> {
        let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

        let Ok(line) = std::str::from_utf8(raw) else {
            debug!(line = self.line_no, "line is not valid UTF-8");
            return None;
        };

        let Some(fields) = self.pattern.match_line(line) else {
            debug!(line = self.line_no, "line does not match pattern");
            return None;
        };

        let record = match Record::from_fields(&fields) {
            Ok(record) => record,
            Err(RecordError::UnknownSeverity { value }) => {
                debug!(line = self.line_no, severity = %value, "unsupported severity level");
                return None;
            }
            Err(err) => {
                warn!(line = self.line_no, error = %err, "line pattern does not yield a record");
                return None;
            }
        };

        match &self.selected_charm {
            Some(selected) if *selected != record.charm => None,
            _ => Some(record),
        }
    }
}

impl<R: BufRead> Iterator for LogReader<'_, R> {
    type Item = Result<Record, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();

            match self.source.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line_no += 1,
                Err(source) => {
                    self.line_no += 1;
                    return Some(Err(ReadError::Read {
                        line: self.line_no,
                        source,
                    }));
                }
            }

            match self.parse_line(&self.buf) {
                Some(record) => return Some(Ok(record)),
                None => self.skipped += 1,
            }
        }
    }
}
