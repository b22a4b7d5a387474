extern crate std;

use core::time::Duration;
use std::sync::Condvar;

use super::StdSyncMutexGuard;


/// Condition variable waiting on guards of [`StdSyncMutex`](super::StdSyncMutex).
///
/// The predicate being waited on must live inside the mutex so that checking it and going to
/// sleep happen atomically with respect to `notify_*`.
#[derive(Debug, Default)]
pub struct StdSyncCondvar(Condvar);

impl StdSyncCondvar {
  /// Creates a new condition variable.
  #[must_use]
  pub const fn new() -> Self {
    Self(Condvar::new())
  }

  /// Releases the guard, blocks until notified and reacquires the lock.
  ///
  /// Spurious wakeups are possible; callers re-check their predicate.
  pub fn wait<'a, T>(&self, guard: StdSyncMutexGuard<'a, T>) -> StdSyncMutexGuard<'a, T> {
    match self.0.wait(guard.into_inner()) {
      | Ok(guard) => StdSyncMutexGuard::new(guard),
      | Err(poisoned) => StdSyncMutexGuard::new(poisoned.into_inner()),
    }
  }

  /// Like [`wait`](Self::wait) but gives up after `timeout`.
  ///
  /// Returns the reacquired guard and `true` when the wait timed out.
  pub fn wait_timeout<'a, T>(
    &self,
    guard: StdSyncMutexGuard<'a, T>,
    timeout: Duration,
  ) -> (StdSyncMutexGuard<'a, T>, bool) {
    match self.0.wait_timeout(guard.into_inner(), timeout) {
      | Ok((guard, result)) => (StdSyncMutexGuard::new(guard), result.timed_out()),
      | Err(poisoned) => {
        let (guard, result) = poisoned.into_inner();
        (StdSyncMutexGuard::new(guard), result.timed_out())
      },
    }
  }

  /// Wakes one waiting thread.
  pub fn notify_one(&self) {
    self.0.notify_one();
  }

  /// Wakes all waiting threads.
  pub fn notify_all(&self) {
    self.0.notify_all();
  }
}
