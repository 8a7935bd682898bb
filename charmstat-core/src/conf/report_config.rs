use crate::conf::ConfigError;
use crate::matcher::{DEFAULT_LINE_PATTERN, LinePattern};
use crate::record::Record;
use crate::stats::{DEFAULT_INDENT_WIDTH, RenderOptions};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Settings for the `report` command, read from an optional TOML file.
///
/// ```toml
/// line_pattern = "{unit}: {hour}:{minutes}:{seconds} {severity_level} {charm_name} {message}"
/// indent_width = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Template each log line is matched against. A trailing line break is
    /// ignored since lines are matched without their terminator.
    pub line_pattern: String,

    /// Spaces per nesting level in the rendered report.
    pub indent_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            line_pattern: DEFAULT_LINE_PATTERN.to_string(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl ReportConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let cfg: Self = toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width == 0 {
            return Err(ConfigError::ZeroIndentWidth);
        }
        self.compile_pattern()?;
        Ok(())
    }

    /// Compiles the line pattern and checks it captures every record field.
    pub fn compile_pattern(&self) -> Result<LinePattern, ConfigError> {
        let template = self.line_pattern.trim_end_matches(['\n', '\r']);

        let pattern =
            LinePattern::compile(template).map_err(|source| ConfigError::InvalidPattern {
                pattern: self.line_pattern.clone(),
                source,
            })?;

        let names = pattern.field_names();
        if let Some(field) = Record::FIELDS
            .into_iter()
            .find(|field| !names.iter().any(|name| name.as_str() == *field))
        {
            return Err(ConfigError::MissingField {
                pattern: pattern.template().to_string(),
                field,
            });
        }

        Ok(pattern)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            indent_width: self.indent_width,
        }
    }
}

impl FromStr for ReportConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cfg: Self =
            toml::from_str(s).map_err(|e| ConfigError::parse(PathBuf::from("<string>"), e))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
