//! Errors returned by the dispatcher.

use core::fmt;

/// Error raised when work cannot be handed to its destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchError {
  /// The operating system refused to spawn a one-shot thread.
  SpawnFailed(String),
}

impl fmt::Display for DispatchError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::SpawnFailed(reason) => write!(f, "failed to spawn dispatch thread: {}", reason),
    }
  }
}

impl std::error::Error for DispatchError {}
