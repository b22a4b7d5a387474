//! Configuration shared by loopers of one registry.


use std::borrow::Cow;

use super::LooperId;

const DEFAULT_THREAD_NAME_PREFIX: &str = "cadenza-looper";

/// Settings applied to every looper a [`LooperRegistry`](super::LooperRegistry) starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LooperConfig {
  thread_name_prefix:      Cow<'static, str>,
  stack_size:              Option<usize>,
  inline_on_looper_thread: bool,
}

impl LooperConfig {
  /// Creates the default configuration.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      thread_name_prefix:      Cow::Borrowed(DEFAULT_THREAD_NAME_PREFIX),
      stack_size:              None,
      inline_on_looper_thread: false,
    }
  }

  /// Prefix of looper thread names; threads are named `<prefix>-<id>`.
  #[must_use]
  pub fn thread_name_prefix(&self) -> &str {
    &self.thread_name_prefix
  }

  /// Stack size requested for looper threads.
  #[must_use]
  pub const fn stack_size(&self) -> Option<usize> {
    self.stack_size
  }

  /// Returns `true` when tasks posted from a looper's own thread run immediately.
  #[must_use]
  pub const fn inline_on_looper_thread(&self) -> bool {
    self.inline_on_looper_thread
  }

  /// Sets the thread name prefix.
  #[must_use]
  pub fn with_thread_name_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
    self.thread_name_prefix = prefix.into();
    self
  }

  /// Sets the thread stack size.
  #[must_use]
  pub const fn with_stack_size(mut self, bytes: usize) -> Self {
    self.stack_size = Some(bytes);
    self
  }

  /// Runs tasks posted from a looper's own thread synchronously instead of queueing them.
  #[must_use]
  pub const fn with_inline_on_looper_thread(mut self, enabled: bool) -> Self {
    self.inline_on_looper_thread = enabled;
    self
  }

  pub(crate) fn thread_name(&self, id: LooperId) -> String {
    format!("{}-{}", self.thread_name_prefix, id.raw())
  }
}

impl Default for LooperConfig {
  fn default() -> Self {
    Self::new()
  }
}
