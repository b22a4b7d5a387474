//! Single submission surface over the main loop, loopers, one-shot threads and timers.


use core::time::Duration;
use std::thread::{self, JoinHandle};

use cadenza_utils_rs::core::{
  sync::ArcShared,
  time::{MonotonicClock, TimerHandleId},
};
use tracing::warn;

use super::{DispatchError, DispatcherConfig};
use crate::{
  logging::{FaultOrigin, FaultSinkShared},
  looper::{LooperConfig, LooperHandle, LooperRegistry},
  main_loop::{MainSchedulerConfig, MainSchedulerGeneric},
  task::TaskDescriptor,
  timer::{TimerHandler, TimerKey, TimerPayload},
};

/// Dispatcher carrying type-erased timer parameters.
pub type Dispatcher = DispatcherGeneric<TimerPayload>;

/// Routes work to the main loop, a looper, a fresh thread or the timer service.
///
/// Every submission snapshots the caller's [`ContextTag`](super::ContextTag), and the
/// destination re-establishes it around the work, so the tag follows a request across hops.
/// The dispatcher is the explicit scheduling context handed to collaborators; nothing about it
/// is process-global.
pub struct DispatcherGeneric<P: Send + 'static> {
  main:    ArcShared<MainSchedulerGeneric<P>>,
  loopers: LooperRegistry,
  config:  DispatcherConfig,
}

impl<P: Send + 'static> DispatcherGeneric<P> {
  /// Assembles a dispatcher from existing schedulers.
  #[must_use]
  pub const fn new(
    main: ArcShared<MainSchedulerGeneric<P>>,
    loopers: LooperRegistry,
    config: DispatcherConfig,
  ) -> Self {
    Self { main, loopers, config }
  }

  /// Builds a dispatcher with default schedulers reading `clock`.
  #[must_use]
  pub fn with_clock(clock: ArcShared<dyn MonotonicClock>) -> Self {
    let main = ArcShared::new(MainSchedulerGeneric::new(clock, MainSchedulerConfig::default()));
    let loopers = LooperRegistry::with_fault_sink(LooperConfig::default(), main.fault_sink().clone());
    Self::new(main, loopers, DispatcherConfig::default())
  }

  /// Returns the main scheduler.
  #[must_use]
  pub const fn main(&self) -> &ArcShared<MainSchedulerGeneric<P>> {
    &self.main
  }

  /// Returns the looper registry.
  #[must_use]
  pub const fn loopers(&self) -> &LooperRegistry {
    &self.loopers
  }

  /// Returns the configuration.
  #[must_use]
  pub const fn config(&self) -> &DispatcherConfig {
    &self.config
  }

  /// Runs `handler(param)` on the main loop.
  ///
  /// # Panics
  ///
  /// See [`MainSchedulerGeneric::submit`].
  pub fn submit_main<F, A>(&self, handler: F, param: A)
  where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static, {
    self.main.submit(TaskDescriptor::from_handler(handler, param));
  }

  /// Runs `handler(param)` on the given looper. Returns `false` when the looper is gone.
  ///
  /// # Panics
  ///
  /// See [`LooperRegistry::run_on_looper`].
  pub fn submit_looper<F, A>(&self, looper: &LooperHandle, handler: F, param: A) -> bool
  where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static, {
    self.loopers.run_on_looper(looper, handler, param)
  }

  /// Runs `handler(param)` on the looper registered under `name`.
  ///
  /// Returns `false` when no such looper is registered.
  ///
  /// # Panics
  ///
  /// See [`LooperRegistry::run_on_looper`].
  pub fn submit_named<F, A>(&self, name: &str, handler: F, param: A) -> bool
  where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static, {
    match self.loopers.lookup(name) {
      | Some(looper) => self.loopers.run_on_looper(&looper, handler, param),
      | None => false,
    }
  }

  /// Runs `handler(param)` on a newly spawned thread.
  ///
  /// A panic in the handler is reported to the main scheduler's fault sink.
  ///
  /// # Errors
  ///
  /// Returns [`DispatchError::SpawnFailed`] when the thread cannot be spawned.
  pub fn run_on_thread<F, A>(&self, handler: F, param: A) -> Result<JoinHandle<()>, DispatchError>
  where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static, {
    let task = TaskDescriptor::from_handler(handler, param);
    let sink: FaultSinkShared = self.main.fault_sink().clone();
    let mut builder = thread::Builder::new();
    if let Some(name) = self.config.thread_name() {
      builder = builder.name(name.to_owned());
    }
    if let Some(bytes) = self.config.stack_size() {
      builder = builder.stack_size(bytes);
    }
    builder
      .spawn(move || {
        if let Err(fault) = task.run_guarded(FaultOrigin::Thread) {
          sink.report(&fault);
        }
      })
      .map_err(|error| {
        warn!(error = %error, "dispatch thread spawn failed");
        DispatchError::SpawnFailed(error.to_string())
      })
  }

  /// Schedules a one-shot timer fired on the main loop.
  pub fn schedule<H>(&self, delay: Duration, handler: H, param: P) -> TimerHandleId
  where
    H: TimerHandler<P>, {
    self.main.schedule(delay, handler, param)
  }

  /// Schedules a keyed timer fired on the main loop, replacing any pending timer under `key`.
  pub fn schedule_keyed<H>(&self, key: TimerKey, delay: Duration, handler: H, param: P) -> TimerHandleId
  where
    H: TimerHandler<P>, {
    self.main.schedule_keyed(key, delay, handler, param)
  }

  /// Cancels a pending timer, returning its parameter.
  pub fn cancel(&self, id: TimerHandleId) -> Option<P> {
    self.main.timers().cancel(id)
  }

  /// Cancels the timer pending under `key`, returning its parameter.
  pub fn cancel_keyed(&self, key: &TimerKey) -> Option<P> {
    self.main.timers().cancel_keyed(key)
  }
}
