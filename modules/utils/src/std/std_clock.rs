extern crate std;

use core::time::Duration;
use std::time::Instant;

use crate::core::time::{ClockKind, MonotonicClock, TimerInstant};


/// [`MonotonicClock`] backed by [`std::time::Instant`].
///
/// Ticks count whole `resolution` periods elapsed since the clock was created, so a reading may
/// lag real time by up to one tick. Deadlines compensate by adding that tick back.
#[derive(Clone, Copy, Debug)]
pub struct StdClock {
  origin:     Instant,
  resolution: Duration,
}

impl StdClock {
  /// Creates a clock anchored at the current instant.
  #[must_use]
  pub fn new(resolution: Duration) -> Self {
    Self { origin: Instant::now(), resolution }
  }
}

impl Default for StdClock {
  fn default() -> Self {
    Self::new(Duration::from_millis(1))
  }
}

impl MonotonicClock for StdClock {
  fn now(&self) -> TimerInstant {
    let elapsed = self.origin.elapsed().as_nanos();
    let ticks = elapsed / self.resolution.as_nanos().max(1);
    TimerInstant::from_ticks(u64::try_from(ticks).unwrap_or(u64::MAX), self.resolution)
  }

  fn resolution(&self) -> Duration {
    self.resolution
  }

  fn kind(&self) -> ClockKind {
    ClockKind::Host
  }

  fn deadline_after(&self, delay: Duration) -> TimerInstant {
    let now = self.now();
    if delay.is_zero() {
      return now;
    }
    now.saturating_add(delay).saturating_add(self.resolution)
  }
}
