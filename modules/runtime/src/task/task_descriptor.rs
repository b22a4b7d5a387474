//! Unit of work queued on a run loop.

#[cfg(test)]
mod tests;

use core::fmt;

use tracing::trace_span;

use crate::{
  dispatch::ContextTag,
  logging::{FaultOrigin, TaskFault},
};

type TaskFn = Box<dyn FnOnce() + Send + 'static>;

/// A handler bound to its parameter, together with the context tag captured at creation.
///
/// Descriptors snapshot the creating thread's [`ContextTag`]; the tag is re-established while
/// the descriptor runs, on whichever thread that happens.
pub struct TaskDescriptor {
  task:    TaskFn,
  context: Option<ContextTag>,
}

impl TaskDescriptor {
  /// Wraps a closure, capturing the calling thread's context tag.
  #[must_use]
  pub fn new<F>(task: F) -> Self
  where
    F: FnOnce() + Send + 'static, {
    Self { task: Box::new(task), context: ContextTag::current() }
  }

  /// Binds `handler` to `param`, capturing the calling thread's context tag.
  #[must_use]
  pub fn from_handler<F, A>(handler: F, param: A) -> Self
  where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static, {
    Self::new(move || handler(param))
  }

  /// Replaces the captured context tag.
  #[must_use]
  pub fn with_context(mut self, context: Option<ContextTag>) -> Self {
    self.context = context;
    self
  }

  /// Returns the captured context tag.
  #[must_use]
  pub const fn context(&self) -> Option<&ContextTag> {
    self.context.as_ref()
  }

  /// Runs the task on the calling thread with its context tag established.
  ///
  /// # Panics
  ///
  /// Propagates any panic raised by the task.
  pub fn run(self) {
    let Self { task, context } = self;
    let span = trace_span!("cadenza.task", context = context.as_ref().map(ContextTag::as_str));
    let _entered = span.enter();
    let _guard = ContextTag::establish(context);
    task();
  }

  /// Runs the task, converting a panic into a [`TaskFault`] attributed to `origin`.
  pub(crate) fn run_guarded(self, origin: FaultOrigin) -> Result<(), TaskFault> {
    let context = self.context.clone();
    TaskFault::capture(origin, context, || self.run())
  }
}

impl fmt::Debug for TaskDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TaskDescriptor").field("context", &self.context).finish_non_exhaustive()
  }
}
