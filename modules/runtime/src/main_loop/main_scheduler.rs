//! Primary run loop interleaving timers and queued tasks.


use core::time::Duration;
use std::thread::{self, ThreadId};

use cadenza_utils_rs::{
  core::{
    sync::ArcShared,
    time::{MonotonicClock, TimerHandleId},
  },
  std::StdSyncMutex,
};
use portable_atomic::{AtomicBool, Ordering};
use tracing::{debug, trace};

use super::{LoopTurn, MainSchedulerConfig, RunQueue, WakeSignal};
use crate::{
  logging::{FaultOrigin, FaultSink, FaultSinkShared, TracingFaultSink},
  task::TaskDescriptor,
  timer::{TimerHandler, TimerKey, TimerPayload, TimerServiceGeneric},
};

/// Main scheduler carrying type-erased timer parameters.
pub type MainScheduler = MainSchedulerGeneric<TimerPayload>;

/// The primary run loop.
///
/// Each pass fires due timers, then drains the tasks queued before the pass began, then sleeps
/// until the next timer is due or new work arrives. The loop never sleeps while work is queued,
/// a timer is due, or a continuation was requested.
pub struct MainSchedulerGeneric<P: Send + 'static> {
  timers:             ArcShared<TimerServiceGeneric<P>>,
  queue:              RunQueue,
  wake:               ArcShared<WakeSignal>,
  sink:               FaultSinkShared,
  config:             MainSchedulerConfig,
  loop_thread:        StdSyncMutex<Option<ThreadId>>,
  continue_requested: AtomicBool,
  stop_requested:     AtomicBool,
}

impl<P: Send + 'static> MainSchedulerGeneric<P> {
  /// Creates a scheduler whose timers read `clock` and whose faults go to `tracing`.
  #[must_use]
  pub fn new(clock: ArcShared<dyn MonotonicClock>, config: MainSchedulerConfig) -> Self {
    let sink = ArcShared::new(TracingFaultSink::new()).into_dyn(|sink| sink as &dyn FaultSink);
    Self::with_fault_sink(clock, config, sink)
  }

  /// Creates a scheduler reporting faults to `sink`.
  #[must_use]
  pub fn with_fault_sink(
    clock: ArcShared<dyn MonotonicClock>,
    config: MainSchedulerConfig,
    sink: FaultSinkShared,
  ) -> Self {
    let wake = ArcShared::new(WakeSignal::new());
    let timers = ArcShared::new(TimerServiceGeneric::new(clock).with_wake_signal(wake.clone()));
    Self {
      timers,
      queue: RunQueue::new(),
      wake,
      sink,
      config,
      loop_thread: StdSyncMutex::new(None),
      continue_requested: AtomicBool::new(false),
      stop_requested: AtomicBool::new(false),
    }
  }

  /// Returns the timer service fired by this loop.
  #[must_use]
  pub const fn timers(&self) -> &ArcShared<TimerServiceGeneric<P>> {
    &self.timers
  }

  /// Returns the configuration.
  #[must_use]
  pub const fn config(&self) -> &MainSchedulerConfig {
    &self.config
  }

  /// Returns the sink receiving captured faults.
  #[must_use]
  pub const fn fault_sink(&self) -> &FaultSinkShared {
    &self.sink
  }

  /// Queues a task and wakes the loop.
  ///
  /// With [`MainSchedulerConfig::with_inline_on_loop_thread`] enabled, a task submitted from the
  /// loop thread runs immediately instead.
  ///
  /// # Panics
  ///
  /// An inline task's panic propagates to the caller.
  pub fn submit(&self, task: TaskDescriptor) {
    if self.config.inline_on_loop_thread() && self.is_loop_thread() {
      task.run();
      return;
    }
    self.queue.push(task);
    self.wake.notify();
  }

  /// Queues `handler(param)` on the loop.
  ///
  /// # Panics
  ///
  /// See [`submit`](Self::submit).
  pub fn submit_fn<F, A>(&self, handler: F, param: A)
  where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static, {
    self.submit(TaskDescriptor::from_handler(handler, param));
  }

  /// Schedules a one-shot timer fired by this loop.
  pub fn schedule<H>(&self, delay: Duration, handler: H, param: P) -> TimerHandleId
  where
    H: TimerHandler<P>, {
    self.timers.create(delay, handler, param)
  }

  /// Schedules a keyed timer fired by this loop, replacing any pending timer under `key`.
  pub fn schedule_keyed<H>(&self, key: TimerKey, delay: Duration, handler: H, param: P) -> TimerHandleId
  where
    H: TimerHandler<P>, {
    self.timers.schedule_keyed(key, delay, handler, param)
  }

  /// Runs the loop on the calling thread until [`stop`](Self::stop) is called.
  ///
  /// The calling thread becomes the loop thread. A stop requested before the loop starts makes
  /// it return immediately.
  pub fn run_loop(&self) {
    self.bind_current_thread();
    debug!("main loop started");
    while !self.stop_requested.load(Ordering::Acquire) {
      let turn = self.run_once();
      if !turn.is_idle() {
        trace!(timers = turn.timers_fired(), tasks = turn.tasks_run(), faults = turn.faults(), "main loop pass");
      }
      if self.stop_requested.load(Ordering::Acquire) {
        break;
      }
      self.idle_wait();
    }
    self.stop_requested.store(false, Ordering::Release);
    debug!("main loop stopped");
  }

  /// Performs a single pass: fire due timers, then drain the tasks queued before the pass.
  ///
  /// Faults are handed to the fault sink after the step that raised them completes.
  pub fn run_once(&self) -> LoopTurn {
    let outcome = self.timers.tick_now();
    let timers_fired = outcome.fired();
    let mut faults = 0;
    for fault in outcome.into_faults() {
      self.sink.report(&fault);
      faults += 1;
    }

    let batch = self.queue.take_batch();
    let tasks_run = batch.len();
    for task in batch {
      if let Err(fault) = task.run_guarded(FaultOrigin::MainLoop) {
        self.sink.report(&fault);
        faults += 1;
      }
    }
    LoopTurn::new(timers_fired, tasks_run, faults)
  }

  /// Requests another pass without sleeping, even if nothing is queued.
  pub fn continue_loop(&self) {
    self.continue_requested.store(true, Ordering::Release);
    self.wake.notify();
  }

  /// Asks a running loop to return after its current pass.
  pub fn stop(&self) {
    self.stop_requested.store(true, Ordering::Release);
    self.wake.notify();
  }

  /// Marks the calling thread as the loop thread.
  ///
  /// [`run_loop`](Self::run_loop) does this itself; embedders driving [`run_once`](Self::run_once)
  /// manually call it once from their driving thread.
  pub fn bind_current_thread(&self) {
    *self.loop_thread.lock() = Some(thread::current().id());
  }

  /// Returns `true` when called from the loop thread.
  #[must_use]
  pub fn is_loop_thread(&self) -> bool {
    *self.loop_thread.lock() == Some(thread::current().id())
  }

  /// Number of queued tasks.
  #[must_use]
  pub fn pending_tasks(&self) -> usize {
    self.queue.len()
  }

  fn idle_wait(&self) {
    if self.continue_requested.swap(false, Ordering::AcqRel) {
      return;
    }
    if !self.queue.is_empty() {
      return;
    }
    let timeout = self.config.idle_timeout(self.timers.next_delay());
    if timeout == Some(Duration::ZERO) {
      return;
    }
    let timeout_ms = timeout.map(|timeout| u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
    trace!(timeout_ms = ?timeout_ms, "main loop idle");
    self.wake.wait(timeout);
  }
}
