use std::fmt::Debug;

/// Source of the tick count fed to the time encoder.
///
/// One tick is 100 ns; the count is measured from 0001-01-01T00:00:00
/// local time.
pub trait TickSource: Send + Sync + Debug {
    fn now_ticks(&self) -> i64;
}
