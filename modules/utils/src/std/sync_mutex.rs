extern crate std;

use std::sync::Mutex;

use super::StdSyncMutexGuard;

#[cfg(test)]
mod tests;

/// Mutex wrapper backed by [`std::sync::Mutex`].
///
/// Poisoning is ignored: a panic while the lock was held leaves the data as the panicking thread
/// left it, and the next `lock` hands it out again.
#[derive(Debug, Default)]
pub struct StdSyncMutex<T>(Mutex<T>);

impl<T> StdSyncMutex<T> {
  /// Creates a new mutex-protected value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(Mutex::new(value))
  }

  /// Locks the mutex and returns a guard to the protected value.
  pub fn lock(&self) -> StdSyncMutexGuard<'_, T> {
    match self.0.lock() {
      | Ok(guard) => StdSyncMutexGuard::new(guard),
      | Err(poisoned) => StdSyncMutexGuard::new(poisoned.into_inner()),
    }
  }

  /// Consumes the mutex and returns the inner value.
  pub fn into_inner(self) -> T {
    match self.0.into_inner() {
      | Ok(value) => value,
      | Err(poisoned) => poisoned.into_inner(),
    }
  }
}
