mod error;
mod log_reader;

pub use error::ReadError;
pub use log_reader::LogReader;
