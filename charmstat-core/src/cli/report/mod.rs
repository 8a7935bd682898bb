//! Report command
//!
//! log file
//! LogReader (LinePattern + charm filter)
//! Record
//! StatsAggregator
//! render
//!

mod args;
mod run;

pub use args::ReportArgs;
pub use run::run_report;
