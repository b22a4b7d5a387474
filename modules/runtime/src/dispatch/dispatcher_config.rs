/// Settings for one-shot threads.
///
/// Read by [`DispatcherGeneric::run_on_thread`](super::DispatcherGeneric::run_on_thread).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatcherConfig {
  thread_name: Option<String>,
  stack_size:  Option<usize>,
}

impl DispatcherConfig {
  /// Creates a configuration spawning anonymous threads with the platform stack size.
  #[must_use]
  pub const fn new() -> Self {
    Self { thread_name: None, stack_size: None }
  }

  /// Name given to spawned threads.
  #[must_use]
  pub fn thread_name(&self) -> Option<&str> {
    self.thread_name.as_deref()
  }

  /// Stack size requested for spawned threads.
  #[must_use]
  pub const fn stack_size(&self) -> Option<usize> {
    self.stack_size
  }

  /// Names spawned threads.
  #[must_use]
  pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
    self.thread_name = Some(name.into());
    self
  }

  /// Sets the stack size of spawned threads.
  #[must_use]
  pub fn with_stack_size(mut self, bytes: usize) -> Self {
    self.stack_size = Some(bytes);
    self
  }
}
