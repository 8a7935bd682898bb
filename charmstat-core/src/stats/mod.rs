//! Severity statistics
//!
//! Records flow in one at a time and are counted twice: once globally and
//! once under the charm that emitted them. A record whose severity, charm and
//! message were already seen earlier in the run is also counted as a
//! duplicate. The first occurrence never is.
//!
//! Record
//! StatsAggregator::observe
//! CounterPair (global + per charm)
//! render
//!

mod aggregation;
mod counters;
mod message_id;
mod render;
#[cfg(test)]
mod tests;

pub use aggregation::StatsAggregator;
pub use counters::{CounterPair, SeverityCounts};
pub use message_id::MessageId;
pub use render::{DEFAULT_INDENT_WIDTH, RenderOptions};
