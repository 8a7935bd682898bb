use crate::record::{Record, Severity};
use std::fmt;

/// Identity used for duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId {
    pub severity: Severity,
    pub charm: String,
    pub message: String,
}

impl MessageId {
    pub fn of(record: &Record) -> Self {
        Self {
            severity: record.severity,
            charm: record.charm.clone(),
            message: record.message.clone(),
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.severity, self.charm, self.message)
    }
}
