pub mod cli;
pub mod conf;
pub mod logging;
pub mod matcher;
pub mod reader;
pub mod record;
pub mod stats;
