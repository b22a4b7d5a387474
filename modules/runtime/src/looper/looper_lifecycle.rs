/// Lifecycle of a looper.
///
/// `Registered -> Running -> Stopping -> Stopped`. A looper stopped before its thread begins
/// skips `Running`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LooperLifecycle {
  /// Registered; the thread has not started serving yet.
  Registered,
  /// The thread is serving its queue.
  Running,
  /// Unregistered; the thread is draining what was queued before the stop.
  Stopping,
  /// The thread has exited.
  Stopped,
}

impl LooperLifecycle {
  /// Returns `true` while new tasks are accepted.
  #[must_use]
  pub const fn accepts_tasks(self) -> bool {
    matches!(self, Self::Registered | Self::Running)
  }
}
