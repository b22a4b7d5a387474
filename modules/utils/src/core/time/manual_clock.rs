//! Deterministic clock advanced by the caller.

use core::time::Duration;

use portable_atomic::{AtomicU64, Ordering};

use super::{ClockKind, MonotonicClock, TimerInstant};

#[cfg(test)]
mod tests;

/// Clock whose time only moves when the caller advances it.
///
/// Used to drive timer services deterministically in tests.
#[derive(Debug)]
pub struct ManualClock {
  ticks:      AtomicU64,
  resolution: Duration,
}

impl ManualClock {
  /// Creates a clock at tick zero with the given resolution.
  #[must_use]
  pub const fn new(resolution: Duration) -> Self {
    Self { ticks: AtomicU64::new(0), resolution }
  }

  /// Advances the clock by `delta`, rounding partial ticks up.
  pub fn advance(&self, delta: Duration) {
    self.advance_ticks(TimerInstant::ticks_for(delta, self.resolution));
  }

  /// Advances the clock by a raw number of ticks.
  pub fn advance_ticks(&self, ticks: u64) {
    let _ = self.ticks.fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| Some(current.saturating_add(ticks)));
  }

  /// Moves the clock to an absolute tick count. Moving backwards is ignored.
  pub fn set_ticks(&self, ticks: u64) {
    self.ticks.fetch_max(ticks, Ordering::AcqRel);
  }
}

impl Default for ManualClock {
  fn default() -> Self {
    Self::new(Duration::from_millis(1))
  }
}

impl MonotonicClock for ManualClock {
  fn now(&self) -> TimerInstant {
    TimerInstant::from_ticks(self.ticks.load(Ordering::Acquire), self.resolution)
  }

  fn resolution(&self) -> Duration {
    self.resolution
  }

  fn kind(&self) -> ClockKind {
    ClockKind::Manual
  }
}
