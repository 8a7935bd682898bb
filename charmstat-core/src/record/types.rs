use crate::matcher::Fields;
use crate::record::{RecordError, Severity};

/// One parsed log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub unit: String,
    pub hour: String,
    pub minutes: String,
    pub seconds: String,
    pub severity: Severity,
    /// Component that emitted the line. Juju calls these charms.
    pub charm: String,
    pub message: String,
}

impl Record {
    pub const UNIT: &'static str = "unit";
    pub const HOUR: &'static str = "hour";
    pub const MINUTES: &'static str = "minutes";
    pub const SECONDS: &'static str = "seconds";
    pub const SEVERITY: &'static str = "severity_level";
    pub const CHARM: &'static str = "charm_name";
    pub const MESSAGE: &'static str = "message";

    /// Fields a line pattern has to capture.
    pub const FIELDS: [&'static str; 7] = [
        Self::UNIT,
        Self::HOUR,
        Self::MINUTES,
        Self::SECONDS,
        Self::SEVERITY,
        Self::CHARM,
        Self::MESSAGE,
    ];

    /// Builds a record from matcher output.
    ///
    /// Every field of the default line pattern has to be present; extra
    /// fields are ignored.
    pub fn from_fields(fields: &Fields) -> Result<Self, RecordError> {
        let get = |field: &'static str| {
            fields
                .get(field)
                .cloned()
                .ok_or(RecordError::MissingField { field })
        };

        Ok(Self {
            unit: get(Self::UNIT)?,
            hour: get(Self::HOUR)?,
            minutes: get(Self::MINUTES)?,
            seconds: get(Self::SECONDS)?,
            severity: get(Self::SEVERITY)?.parse()?,
            charm: get(Self::CHARM)?,
            message: get(Self::MESSAGE)?,
        })
    }

    pub fn timestamp(&self) -> String {
        format!("{}:{}:{}", self.hour, self.minutes, self.seconds)
    }
}
