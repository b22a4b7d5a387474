//! One-shot timer service driven by an external clock.


use core::time::Duration;
use std::any::Any;

use ahash::RandomState;
use cadenza_utils_rs::{
  core::{
    sync::ArcShared,
    time::{MonotonicClock, TimerEntry, TimerHandleId, TimerInstant, TimerWheel},
  },
  std::StdSyncMutex,
};
use hashbrown::HashMap;
use tracing::trace;

use super::{TickOutcome, TimerHandler, TimerKey, scheduled_timer::ScheduledTimer};
use crate::{
  dispatch::ContextTag,
  logging::{FaultOrigin, TaskFault},
  main_loop::WakeSignal,
};

/// Default timer parameter type.
pub type TimerPayload = Box<dyn Any + Send>;

/// Timer service carrying type-erased parameters.
pub type TimerService = TimerServiceGeneric<TimerPayload>;

struct TimerState<P: 'static> {
  wheel: TimerWheel<ScheduledTimer<P>>,
  keyed: HashMap<TimerKey, TimerHandleId, RandomState>,
}

/// Pending one-shot timers ordered by due time.
///
/// The service never reads the wall clock and never sleeps: the owner calls
/// [`tick`](Self::tick) and consults [`next_delay`](Self::next_delay) to decide how long to wait.
/// Handlers run outside the internal lock, so they may create or cancel timers on the same
/// service.
pub struct TimerServiceGeneric<P: Send + 'static> {
  clock: ArcShared<dyn MonotonicClock>,
  state: StdSyncMutex<TimerState<P>>,
  wake:  Option<ArcShared<WakeSignal>>,
}

impl<P: Send + 'static> TimerServiceGeneric<P> {
  /// Creates an empty service reading time from `clock`.
  #[must_use]
  pub fn new(clock: ArcShared<dyn MonotonicClock>) -> Self {
    let state = TimerState { wheel: TimerWheel::new(), keyed: HashMap::with_hasher(RandomState::new()) };
    Self { clock, state: StdSyncMutex::new(state), wake: None }
  }

  /// Notifies `wake` whenever the pending set changes.
  #[must_use]
  pub fn with_wake_signal(mut self, wake: ArcShared<WakeSignal>) -> Self {
    self.wake = Some(wake);
    self
  }

  /// Returns the clock timers are measured against.
  #[must_use]
  pub const fn clock(&self) -> &ArcShared<dyn MonotonicClock> {
    &self.clock
  }

  /// Schedules `handler` to receive `param` once `delay` has elapsed.
  ///
  /// The calling thread's [`ContextTag`] is captured and re-established when the timer fires.
  pub fn create<H>(&self, delay: Duration, handler: H, param: P) -> TimerHandleId
  where
    H: TimerHandler<P>, {
    let timer = ScheduledTimer { handler: handler.into_shared(), param, key: None, context: ContextTag::current() };
    let deadline = self.deadline_after(delay);
    let id = self.state.lock().wheel.schedule(TimerEntry::oneshot(deadline, timer));
    trace!(timer = %id, deadline = deadline.ticks(), "timer created");
    self.notify();
    id
  }

  /// Cancels a pending timer, returning its parameter.
  ///
  /// Returns `None` when the timer already fired or was cancelled.
  pub fn cancel(&self, id: TimerHandleId) -> Option<P> {
    let timer = {
      let mut state = self.state.lock();
      let timer = state.wheel.cancel(id)?.into_payload();
      if let Some(key) = &timer.key {
        if state.keyed.get(key) == Some(&id) {
          state.keyed.remove(key);
        }
      }
      timer
    };
    trace!(timer = %id, "timer cancelled");
    self.notify();
    Some(timer.param)
  }

  /// Schedules a timer under `key`, cancelling any timer still pending under the same key.
  ///
  /// Cancellation of the previous instance and insertion of the new one happen atomically, so
  /// no interleaving leaves two timers pending for one key.
  pub fn schedule_keyed<H>(&self, key: TimerKey, delay: Duration, handler: H, param: P) -> TimerHandleId
  where
    H: TimerHandler<P>, {
    let timer =
      ScheduledTimer { handler: handler.into_shared(), param, key: Some(key.clone()), context: ContextTag::current() };
    let deadline = self.deadline_after(delay);
    let (id, superseded) = {
      let mut state = self.state.lock();
      let superseded = state.keyed.remove(&key).and_then(|previous| state.wheel.cancel(previous));
      let id = state.wheel.schedule(TimerEntry::oneshot(deadline, timer));
      state.keyed.insert(key.clone(), id);
      (id, superseded)
    };
    if superseded.is_some() {
      trace!(timer = %id, key = key.as_str(), "keyed timer replaced");
    } else {
      trace!(timer = %id, key = key.as_str(), "keyed timer created");
    }
    drop(superseded);
    self.notify();
    id
  }

  /// Cancels the timer pending under `key`, returning its parameter.
  pub fn cancel_keyed(&self, key: &TimerKey) -> Option<P> {
    let timer = {
      let mut state = self.state.lock();
      let id = state.keyed.remove(key)?;
      state.wheel.cancel(id)?.into_payload()
    };
    trace!(key = key.as_str(), "keyed timer cancelled");
    self.notify();
    Some(timer.param)
  }

  /// Fires every timer due at or before `now`, in due-time order.
  ///
  /// Timers sharing a due time fire in creation order. The batch is detached under the lock and
  /// handlers then run without it; a timer created by a handler is not part of the running
  /// batch. A panicking handler does not stop the batch; its fault is returned in the outcome.
  pub fn tick(&self, now: TimerInstant) -> TickOutcome {
    let expired = {
      let mut state = self.state.lock();
      let expired = state.wheel.collect_expired(now);
      for (id, entry) in &expired {
        if let Some(key) = &entry.payload().key {
          if state.keyed.get(key) == Some(id) {
            state.keyed.remove(key);
          }
        }
      }
      expired
    };
    if expired.is_empty() {
      return TickOutcome::default();
    }

    let fired = expired.len();
    let mut faults = Vec::new();
    for (id, entry) in expired {
      let ScheduledTimer { handler, param, context, .. } = entry.into_payload();
      let result = TaskFault::capture(FaultOrigin::Timer(id), context.clone(), || {
        let _guard = ContextTag::establish(context);
        handler.on_timer(id, param);
      });
      if let Err(fault) = result {
        faults.push(fault);
      }
    }
    trace!(fired, faults = faults.len(), now = now.ticks(), "timer batch fired");
    TickOutcome::new(fired, faults)
  }

  /// Fires every timer due at the clock's current time.
  pub fn tick_now(&self) -> TickOutcome {
    self.tick(self.clock.now())
  }

  /// Time until the earliest pending timer is due, measured from the clock's current time.
  ///
  /// Returns `None` when nothing is pending and [`Duration::ZERO`] when a timer is already due.
  #[must_use]
  pub fn next_delay(&self) -> Option<Duration> {
    self.next_delay_at(self.clock.now())
  }

  /// Time until the earliest pending timer is due, measured from `now`.
  #[must_use]
  pub fn next_delay_at(&self, now: TimerInstant) -> Option<Duration> {
    let next = self.state.lock().wheel.next_deadline()?;
    Some(next.saturating_duration_since(now))
  }

  /// Number of pending timers.
  #[must_use]
  pub fn pending_count(&self) -> usize {
    self.state.lock().wheel.len()
  }

  /// Returns `true` while `id` is pending.
  #[must_use]
  pub fn is_pending(&self, id: TimerHandleId) -> bool {
    self.state.lock().wheel.contains(id)
  }

  /// Returns `true` while a timer is pending under `key`.
  #[must_use]
  pub fn is_key_active(&self, key: &TimerKey) -> bool {
    self.state.lock().keyed.contains_key(key)
  }

  /// Cancels every pending timer and returns how many were dropped.
  pub fn clear(&self) -> usize {
    let drained = {
      let mut state = self.state.lock();
      state.keyed.clear();
      state.wheel.drain()
    };
    let count = drained.len();
    drop(drained);
    if count > 0 {
      self.notify();
    }
    count
  }

  fn deadline_after(&self, delay: Duration) -> TimerInstant {
    self.clock.deadline_after(delay)
  }

  fn notify(&self) {
    if let Some(wake) = &self.wake {
      wake.notify();
    }
  }
}
