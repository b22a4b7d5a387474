//! Registry starting, addressing and stopping loopers.

#[cfg(test)]
mod tests;

use std::thread;

use ahash::RandomState;
use cadenza_utils_rs::{core::sync::ArcShared, std::StdSyncMutex};
use hashbrown::HashMap;
use portable_atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

use super::{LooperConfig, LooperError, LooperHandle, LooperId, looper_cell::LooperCell};
use crate::{
  logging::{FaultSink, FaultSinkShared, TracingFaultSink},
  task::TaskDescriptor,
};

struct RegistryTable {
  by_id:   HashMap<LooperId, LooperHandle, RandomState>,
  by_name: HashMap<String, LooperId, RandomState>,
}

struct RegistryInner {
  table:   StdSyncMutex<RegistryTable>,
  next_id: AtomicU64,
  config:  LooperConfig,
  sink:    FaultSinkShared,
}

impl Drop for RegistryInner {
  fn drop(&mut self) {
    let mut table = self.table.lock();
    table.by_name.clear();
    for (_, handle) in table.by_id.drain() {
      handle.cell().retire();
    }
  }
}

/// Owns the set of live loopers.
///
/// Each looper is a dedicated thread serving a FIFO queue. Tasks posted by one thread to one
/// looper run in posting order; a panicking task is reported and the looper keeps serving.
/// Dropping the last clone of the registry stops every looper still registered.
#[derive(Clone)]
pub struct LooperRegistry {
  inner: ArcShared<RegistryInner>,
}

impl LooperRegistry {
  /// Creates a registry whose loopers report faults to `tracing`.
  #[must_use]
  pub fn new(config: LooperConfig) -> Self {
    let sink = ArcShared::new(TracingFaultSink::new()).into_dyn(|sink| sink as &dyn FaultSink);
    Self::with_fault_sink(config, sink)
  }

  /// Creates a registry whose loopers report faults to `sink`.
  #[must_use]
  pub fn with_fault_sink(config: LooperConfig, sink: FaultSinkShared) -> Self {
    let table = RegistryTable {
      by_id:   HashMap::with_hasher(RandomState::new()),
      by_name: HashMap::with_hasher(RandomState::new()),
    };
    let inner = RegistryInner { table: StdSyncMutex::new(table), next_id: AtomicU64::new(1), config, sink };
    Self { inner: ArcShared::new(inner) }
  }

  /// Returns the configuration applied to new loopers.
  #[must_use]
  pub fn config(&self) -> &LooperConfig {
    &self.inner.config
  }

  /// Starts an anonymous looper.
  ///
  /// # Errors
  ///
  /// Returns [`LooperError::SpawnFailed`] when the thread cannot be spawned.
  pub fn start_looper(&self) -> Result<LooperHandle, LooperError> {
    self.start(None)
  }

  /// Starts a looper addressable by `name`.
  ///
  /// # Errors
  ///
  /// Returns [`LooperError::NameTaken`] when a live looper already uses the name, or
  /// [`LooperError::SpawnFailed`] when the thread cannot be spawned.
  pub fn start_named_looper(&self, name: impl Into<String>) -> Result<LooperHandle, LooperError> {
    self.start(Some(name.into()))
  }

  /// Unregisters the looper. It drains what was already queued, then its thread exits.
  ///
  /// Returns `false` when the looper was not registered here or was already stopped.
  pub fn stop_looper(&self, handle: &LooperHandle) -> bool {
    let removed = {
      let mut table = self.inner.table.lock();
      if table.by_id.get(&handle.id()) != Some(handle) {
        return false;
      }
      if let Some(name) = handle.name() {
        table.by_name.remove(name);
      }
      table.by_id.remove(&handle.id())
    };
    match removed {
      | Some(registered) => {
        let retired = registered.cell().retire();
        debug!(looper = %handle.id(), "looper stopped");
        retired
      },
      | None => false,
    }
  }

  /// Runs `handler(param)` on the looper.
  ///
  /// Returns `false`, dropping the task, when the looper is stopped or belongs to another
  /// registry.
  ///
  /// # Panics
  ///
  /// With [`LooperConfig::with_inline_on_looper_thread`] enabled and the caller on the looper's
  /// own thread, the task runs inline and its panic propagates to the caller.
  pub fn run_on_looper<F, A>(&self, handle: &LooperHandle, handler: F, param: A) -> bool
  where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static, {
    self.post(handle, TaskDescriptor::from_handler(handler, param))
  }

  /// Posts a prepared task to the looper.
  ///
  /// Returns `false`, dropping the task, when the looper is stopped or belongs to another
  /// registry.
  ///
  /// # Panics
  ///
  /// See [`run_on_looper`](Self::run_on_looper).
  pub fn post(&self, handle: &LooperHandle, task: TaskDescriptor) -> bool {
    if !self.owns(handle) {
      trace!(looper = %handle.id(), "task dropped for looper not registered here");
      return false;
    }
    let cell = handle.cell();
    if self.inner.config.inline_on_looper_thread() && cell.is_current() && cell.accepts_tasks() {
      task.run();
      return true;
    }
    match cell.enqueue(task) {
      | Ok(()) => true,
      | Err(_rejected) => {
        trace!(looper = %handle.id(), "task dropped for stopped looper");
        false
      },
    }
  }

  /// Finds a live looper by name.
  #[must_use]
  pub fn lookup(&self, name: &str) -> Option<LooperHandle> {
    let table = self.inner.table.lock();
    let id = table.by_name.get(name)?;
    table.by_id.get(id).cloned()
  }

  /// Finds a live looper by identifier.
  #[must_use]
  pub fn get(&self, id: LooperId) -> Option<LooperHandle> {
    self.inner.table.lock().by_id.get(&id).cloned()
  }

  /// Returns `true` when `handle` names a looper currently registered here.
  #[must_use]
  pub fn owns(&self, handle: &LooperHandle) -> bool {
    self.inner.table.lock().by_id.get(&handle.id()) == Some(handle)
  }

  /// Number of registered loopers.
  #[must_use]
  pub fn len(&self) -> usize {
    self.inner.table.lock().by_id.len()
  }

  /// Returns `true` when no looper is registered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Blocks until the looper's thread exits.
  ///
  /// Only meaningful after [`stop_looper`](Self::stop_looper); joining a live looper blocks until
  /// someone stops it. Returns `false` when called from the looper itself or when the thread was
  /// already joined.
  pub fn join(&self, handle: &LooperHandle) -> bool {
    let cell = handle.cell();
    if cell.is_current() {
      return false;
    }
    match cell.take_join_handle() {
      | Some(join) => join.join().is_ok(),
      | None => false,
    }
  }

  /// Stops every registered looper and waits for their threads to exit.
  ///
  /// Returns how many loopers were stopped.
  pub fn shutdown_all(&self) -> usize {
    let handles: Vec<LooperHandle> = {
      let mut table = self.inner.table.lock();
      table.by_name.clear();
      table.by_id.drain().map(|(_, handle)| handle).collect()
    };
    for handle in &handles {
      handle.cell().retire();
    }
    for handle in &handles {
      self.join(handle);
    }
    debug!(count = handles.len(), "loopers shut down");
    handles.len()
  }

  fn start(&self, name: Option<String>) -> Result<LooperHandle, LooperError> {
    let id = LooperId::new(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
    let cell = ArcShared::new(LooperCell::new(id));
    let handle = LooperHandle::new(cell.clone(), name.clone());
    {
      let mut table = self.inner.table.lock();
      if let Some(name) = &name {
        if table.by_name.contains_key(name) {
          return Err(LooperError::name_taken(name.clone()));
        }
        table.by_name.insert(name.clone(), id);
      }
      table.by_id.insert(id, handle.clone());
    }

    let mut builder = thread::Builder::new().name(self.inner.config.thread_name(id));
    if let Some(bytes) = self.inner.config.stack_size() {
      builder = builder.stack_size(bytes);
    }
    let body = cell.clone();
    let sink = self.inner.sink.clone();
    match builder.spawn(move || body.run(&sink)) {
      | Ok(join) => {
        cell.attach(join);
        debug!(looper = %id, name = name.as_deref(), "looper started");
        Ok(handle)
      },
      | Err(error) => {
        self.stop_looper(&handle);
        Err(LooperError::spawn_failed(error.to_string()))
      },
    }
  }
}
