//! Line matching
//!
//! Turns a raw log line into named fields by inverting a format-style
//! template. A line either fits the template completely or it does not match
//! at all; a malformed template is reported as an error instead.

mod error;
mod pattern;

pub use error::PatternError;
pub use pattern::{Fields, LinePattern, unformat};

/// The juju debug-log shape, without the trailing newline the reader strips.
pub const DEFAULT_LINE_PATTERN: &str =
    "{unit}: {hour}:{minutes}:{seconds} {severity_level} {charm_name} {message}";
