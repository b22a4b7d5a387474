//! Monotonic clock abstraction.

use core::time::Duration;

use super::{ClockKind, TimerInstant};

/// Monotonic clock abstraction shared across runtimes.
///
/// Schedulers never read wall-clock time directly; they ask the injected clock.
pub trait MonotonicClock: Send + Sync + 'static {
  /// Returns the latest monotonic instant.
  fn now(&self) -> TimerInstant;

  /// Returns the length of one clock tick.
  fn resolution(&self) -> Duration;

  /// Identifies the clock flavor.
  fn kind(&self) -> ClockKind;

  /// Returns the earliest instant at which `delay` is guaranteed to have elapsed from now.
  ///
  /// Clocks whose [`now`](Self::now) truncates partial ticks must add one tick for non-zero delays.
  fn deadline_after(&self, delay: Duration) -> TimerInstant {
    self.now().saturating_add(delay)
  }
}
