mod error;
mod report_config;

pub use error::ConfigError;
pub use report_config::ReportConfig;
