//! FIFO of tasks awaiting the main loop.


use std::collections::VecDeque;

use cadenza_utils_rs::std::StdSyncMutex;

use crate::task::TaskDescriptor;

/// Unbounded FIFO queue of [`TaskDescriptor`]s shared between producers and one consumer.
#[derive(Debug, Default)]
pub struct RunQueue {
  tasks: StdSyncMutex<VecDeque<TaskDescriptor>>,
}

impl RunQueue {
  /// Creates an empty queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { tasks: StdSyncMutex::new(VecDeque::new()) }
  }

  /// Appends a task.
  pub fn push(&self, task: TaskDescriptor) {
    self.tasks.lock().push_back(task);
  }

  /// Detaches every queued task in submission order, leaving the queue empty.
  ///
  /// Tasks pushed after the call land in the next batch.
  pub fn take_batch(&self) -> VecDeque<TaskDescriptor> {
    core::mem::take(&mut *self.tasks.lock())
  }

  /// Number of queued tasks.
  #[must_use]
  pub fn len(&self) -> usize {
    self.tasks.lock().len()
  }

  /// Returns `true` when no task is queued.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.tasks.lock().is_empty()
  }
}
