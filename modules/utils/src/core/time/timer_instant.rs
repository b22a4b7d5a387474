//! Instants measured in clock ticks.

use core::time::Duration;


/// Point in time expressed as a tick count of a fixed resolution.
///
/// Instants compare by tick count; mixing instants of different resolutions is a logic error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerInstant {
  ticks:      u64,
  resolution: Duration,
}

impl TimerInstant {
  /// Creates an instant from a raw tick count.
  #[must_use]
  pub const fn from_ticks(ticks: u64, resolution: Duration) -> Self {
    Self { ticks, resolution }
  }

  /// Returns the origin instant (tick zero) for the given resolution.
  #[must_use]
  pub const fn zero(resolution: Duration) -> Self {
    Self::from_ticks(0, resolution)
  }

  /// Returns the tick count.
  #[must_use]
  pub const fn ticks(&self) -> u64 {
    self.ticks
  }

  /// Returns the tick resolution.
  #[must_use]
  pub const fn resolution(&self) -> Duration {
    self.resolution
  }

  /// Converts `duration` into whole ticks, rounding partial ticks up.
  #[must_use]
  pub fn ticks_for(duration: Duration, resolution: Duration) -> u64 {
    let resolution_ns = resolution.as_nanos().max(1);
    let ticks = duration.as_nanos().div_ceil(resolution_ns);
    u64::try_from(ticks).unwrap_or(u64::MAX)
  }

  /// Returns the instant `delay` after `self`, saturating at the largest representable tick.
  #[must_use]
  pub fn saturating_add(self, delay: Duration) -> Self {
    let ticks = self.ticks.saturating_add(Self::ticks_for(delay, self.resolution));
    Self::from_ticks(ticks, self.resolution)
  }

  /// Returns the time elapsed from `earlier` to `self`, or zero when `earlier` is later.
  #[must_use]
  pub fn saturating_duration_since(self, earlier: Self) -> Duration {
    let ticks = self.ticks.saturating_sub(earlier.ticks);
    let nanos = u128::from(ticks).saturating_mul(self.resolution.as_nanos().max(1));
    let clamped = nanos.min(u128::from(u64::MAX));
    Duration::from_nanos(clamped as u64)
  }
}
