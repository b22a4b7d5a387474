//! Level-triggered wake-up flag for sleeping run loops.


use core::time::Duration;

use cadenza_utils_rs::std::{StdSyncCondvar, StdSyncMutex};

/// Wake-up flag a run loop sleeps on.
///
/// A notification raised while nobody waits is remembered, so the next wait returns at once.
#[derive(Debug, Default)]
pub struct WakeSignal {
  pending: StdSyncMutex<bool>,
  condvar: StdSyncCondvar,
}

impl WakeSignal {
  /// Creates a signal with no pending notification.
  #[must_use]
  pub const fn new() -> Self {
    Self { pending: StdSyncMutex::new(false), condvar: StdSyncCondvar::new() }
  }

  /// Raises the flag and wakes every waiter.
  pub fn notify(&self) {
    *self.pending.lock() = true;
    self.condvar.notify_all();
  }

  /// Blocks until notified or until `timeout` elapses; `None` waits indefinitely.
  ///
  /// Consumes the pending notification and returns `true` when one was observed. A spurious
  /// wake-up returns `false` early.
  pub fn wait(&self, timeout: Option<Duration>) -> bool {
    let mut pending = self.pending.lock();
    if !*pending {
      pending = match timeout {
        | Some(timeout) => self.condvar.wait_timeout(pending, timeout).0,
        | None => self.condvar.wait(pending),
      };
    }
    let woken = *pending;
    *pending = false;
    woken
  }

  /// Clears a pending notification without waiting.
  pub fn reset(&self) {
    *self.pending.lock() = false;
  }

  /// Returns `true` when a notification is pending.
  #[must_use]
  pub fn is_pending(&self) -> bool {
    *self.pending.lock()
  }
}
