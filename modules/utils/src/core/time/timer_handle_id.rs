//! Identifier assigned to timer entries.

use core::fmt;

/// Identifier assigned to scheduled timer entries.
///
/// Identifiers are handed out in strictly increasing order, so they double as creation order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TimerHandleId(u64);

impl TimerHandleId {
  /// Creates a new identifier.
  #[must_use]
  pub const fn new(raw: u64) -> Self {
    Self(raw)
  }

  /// Returns the raw value.
  #[must_use]
  pub const fn raw(&self) -> u64 {
    self.0
  }
}

impl fmt::Display for TimerHandleId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "timer#{}", self.0)
  }
}
