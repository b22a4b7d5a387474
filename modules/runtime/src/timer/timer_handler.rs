//! Callbacks invoked when timers fire.

use cadenza_utils_rs::core::{sync::ArcShared, time::TimerHandleId};

/// Callback invoked with the firing timer's handle and its parameter.
///
/// Implemented for every `Fn(TimerHandleId, P) + Send + Sync` closure.
pub trait TimerHandler<P>: Send + Sync + 'static {
  /// Called once when the timer fires.
  fn on_timer(&self, id: TimerHandleId, param: P);

  /// Converts the handler into a shareable form.
  fn into_shared(self) -> TimerHandlerShared<P>
  where
    Self: Sized, {
    TimerHandlerShared::new(self)
  }
}

impl<P, F> TimerHandler<P> for F
where
  F: Fn(TimerHandleId, P) + Send + Sync + 'static,
{
  fn on_timer(&self, id: TimerHandleId, param: P) {
    self(id, param);
  }
}

/// Reference-counted [`TimerHandler`], reusable across reschedules.
pub struct TimerHandlerShared<P: 'static> {
  inner: ArcShared<dyn TimerHandler<P>>,
}

impl<P: 'static> TimerHandlerShared<P> {
  /// Wraps a handler.
  #[must_use]
  pub fn new<H>(handler: H) -> Self
  where
    H: TimerHandler<P>, {
    Self { inner: ArcShared::new(handler).into_dyn(|handler| handler as &dyn TimerHandler<P>) }
  }
}

impl<P: 'static> Clone for TimerHandlerShared<P> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<P: 'static> TimerHandler<P> for TimerHandlerShared<P> {
  fn on_timer(&self, id: TimerHandleId, param: P) {
    self.inner.on_timer(id, param);
  }

  fn into_shared(self) -> TimerHandlerShared<P> {
    self
  }
}
