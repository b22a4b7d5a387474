//! Deduplication key for keyed timers.

use std::{borrow::Cow, fmt};

/// Identifies a logical timer whose pending instance is replaced on every reschedule.
///
/// At most one pending timer exists per key within a service.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerKey(Cow<'static, str>);

impl TimerKey {
  /// Creates a key.
  #[must_use]
  pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
    Self(name.into())
  }

  /// Returns the key's name.
  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&'static str> for TimerKey {
  fn from(name: &'static str) -> Self {
    Self::new(name)
  }
}

impl From<String> for TimerKey {
  fn from(name: String) -> Self {
    Self::new(name)
  }
}

impl fmt::Display for TimerKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
