mod error;
mod severity;
mod types;

pub use error::RecordError;
pub use severity::Severity;
pub use types::Record;
