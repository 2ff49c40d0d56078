//! Clock port interface

use chrono::{DateTime, FixedOffset};

/// Port for reading the current time.
///
/// Stamp formatting is pure, so pulling "now" through a port is all it
/// takes to pin every copy action to a fixed instant in tests.
pub trait Clock: Send + Sync {
    /// The current local time with its UTC offset
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Blanket implementation for boxed clock types
impl Clock for Box<dyn Clock> {
    fn now(&self) -> DateTime<FixedOffset> {
        self.as_ref().now()
    }
}
