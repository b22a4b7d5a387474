//! Errors returned by the looper registry.

use core::fmt;

/// Error raised when a looper cannot be started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LooperError {
  /// A looper with this name is already registered.
  NameTaken(String),
  /// The operating system refused to spawn the looper thread.
  SpawnFailed(String),
}

impl LooperError {
  /// Creates a duplicate-name error.
  #[must_use]
  pub fn name_taken(name: impl Into<String>) -> Self {
    Self::NameTaken(name.into())
  }

  /// Creates a spawn failure error.
  #[must_use]
  pub fn spawn_failed(reason: impl Into<String>) -> Self {
    Self::SpawnFailed(reason.into())
  }
}

impl fmt::Display for LooperError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::NameTaken(name) => write!(f, "looper name '{}' already registered", name),
      | Self::SpawnFailed(reason) => write!(f, "failed to spawn looper thread: {}", reason),
    }
  }
}

impl std::error::Error for LooperError {}
