//! Configuration for the main loop.


use core::time::Duration;

/// Tunables for [`MainSchedulerGeneric`](super::MainSchedulerGeneric).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MainSchedulerConfig {
  inline_on_loop_thread: bool,
  max_idle_wait:         Option<Duration>,
}

impl MainSchedulerConfig {
  /// Creates the default configuration: always queue, sleep without an upper bound.
  #[must_use]
  pub const fn new() -> Self {
    Self { inline_on_loop_thread: false, max_idle_wait: None }
  }

  /// Returns `true` when tasks submitted from the loop thread run immediately.
  #[must_use]
  pub const fn inline_on_loop_thread(&self) -> bool {
    self.inline_on_loop_thread
  }

  /// Upper bound on a single idle sleep.
  #[must_use]
  pub const fn max_idle_wait(&self) -> Option<Duration> {
    self.max_idle_wait
  }

  /// Runs tasks submitted from the loop thread synchronously instead of queueing them.
  ///
  /// Inline tasks run ahead of anything already queued, and their panics reach the submitter.
  #[must_use]
  pub const fn with_inline_on_loop_thread(mut self, enabled: bool) -> Self {
    self.inline_on_loop_thread = enabled;
    self
  }

  /// Caps every idle sleep at `wait`.
  #[must_use]
  pub const fn with_max_idle_wait(mut self, wait: Duration) -> Self {
    self.max_idle_wait = Some(wait);
    self
  }

  pub(crate) fn idle_timeout(&self, next_timer: Option<Duration>) -> Option<Duration> {
    match (next_timer, self.max_idle_wait) {
      | (Some(delay), Some(cap)) => Some(delay.min(cap)),
      | (Some(delay), None) => Some(delay),
      | (None, cap) => cap,
    }
  }
}

impl Default for MainSchedulerConfig {
  fn default() -> Self {
    Self::new()
  }
}
