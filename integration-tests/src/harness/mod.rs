pub mod fixtures;
pub mod tracing;

pub use self::fixtures::LogFixture;
pub use self::tracing::{CapturedEvent, init_test_tracing};
