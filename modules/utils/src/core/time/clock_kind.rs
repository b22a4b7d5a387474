//! Clock flavors.

/// Identifies where a [`MonotonicClock`](super::MonotonicClock) gets its time from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClockKind {
  /// Host monotonic clock (`std::time::Instant` or a platform timer).
  Host,
  /// Clock advanced explicitly by the caller, used for deterministic tests.
  Manual,
}
