//! State shared between a looper's thread and its handles.

use std::{
  collections::VecDeque,
  thread::{self, JoinHandle, ThreadId},
};

use cadenza_utils_rs::std::{StdSyncCondvar, StdSyncMutex};

use super::{LooperId, LooperLifecycle};
use crate::{
  logging::{FaultOrigin, FaultSinkShared},
  task::TaskDescriptor,
};

struct LooperState {
  queue:     VecDeque<TaskDescriptor>,
  lifecycle: LooperLifecycle,
}

/// Queue, lifecycle and thread bookkeeping of one looper.
///
/// The queue and the lifecycle share one mutex, and the thread waits on a condition variable
/// paired with it, so checking for work and going to sleep cannot miss a concurrent post.
pub(crate) struct LooperCell {
  id:        LooperId,
  state:     StdSyncMutex<LooperState>,
  signal:    StdSyncCondvar,
  thread_id: StdSyncMutex<Option<ThreadId>>,
  join:      StdSyncMutex<Option<JoinHandle<()>>>,
}

impl LooperCell {
  pub(crate) const fn new(id: LooperId) -> Self {
    Self {
      id,
      state: StdSyncMutex::new(LooperState { queue: VecDeque::new(), lifecycle: LooperLifecycle::Registered }),
      signal: StdSyncCondvar::new(),
      thread_id: StdSyncMutex::new(None),
      join: StdSyncMutex::new(None),
    }
  }

  pub(crate) const fn id(&self) -> LooperId {
    self.id
  }

  pub(crate) fn lifecycle(&self) -> LooperLifecycle {
    self.state.lock().lifecycle
  }

  pub(crate) fn pending_tasks(&self) -> usize {
    self.state.lock().queue.len()
  }

  pub(crate) fn accepts_tasks(&self) -> bool {
    self.lifecycle().accepts_tasks()
  }

  pub(crate) fn is_current(&self) -> bool {
    *self.thread_id.lock() == Some(thread::current().id())
  }

  /// Queues a task, handing it back when the looper no longer accepts work.
  pub(crate) fn enqueue(&self, task: TaskDescriptor) -> Result<(), TaskDescriptor> {
    let mut state = self.state.lock();
    if !state.lifecycle.accepts_tasks() {
      return Err(task);
    }
    state.queue.push_back(task);
    drop(state);
    self.signal.notify_one();
    Ok(())
  }

  /// Stops accepting tasks. Returns `false` when already retired.
  pub(crate) fn retire(&self) -> bool {
    let mut state = self.state.lock();
    if !state.lifecycle.accepts_tasks() {
      return false;
    }
    state.lifecycle = LooperLifecycle::Stopping;
    drop(state);
    self.signal.notify_one();
    true
  }

  pub(crate) fn attach(&self, join: JoinHandle<()>) {
    *self.join.lock() = Some(join);
  }

  pub(crate) fn take_join_handle(&self) -> Option<JoinHandle<()>> {
    self.join.lock().take()
  }

  /// Thread body: serve the queue until retired, then drain it and exit.
  pub(crate) fn run(&self, sink: &FaultSinkShared) {
    *self.thread_id.lock() = Some(thread::current().id());
    let mut state = self.state.lock();
    if state.lifecycle == LooperLifecycle::Registered {
      state.lifecycle = LooperLifecycle::Running;
    }
    loop {
      if let Some(task) = state.queue.pop_front() {
        drop(state);
        if let Err(fault) = task.run_guarded(FaultOrigin::Looper(self.id)) {
          sink.report(&fault);
        }
        state = self.state.lock();
        continue;
      }
      if !state.lifecycle.accepts_tasks() {
        break;
      }
      state = self.signal.wait(state);
    }
    state.lifecycle = LooperLifecycle::Stopped;
  }
}
