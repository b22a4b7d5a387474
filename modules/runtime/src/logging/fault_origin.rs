//! Where a captured fault was raised.

use core::fmt;

use cadenza_utils_rs::core::time::TimerHandleId;

use crate::looper::LooperId;

/// Execution context a [`TaskFault`](super::TaskFault) was raised in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaultOrigin {
  /// A timer handler fired by a tick.
  Timer(TimerHandleId),
  /// A task drained by the main loop.
  MainLoop,
  /// A task running on a looper thread.
  Looper(LooperId),
  /// A task running on a one-shot dispatcher thread.
  Thread,
}

impl fmt::Display for FaultOrigin {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Timer(id) => write!(f, "{id}"),
      | Self::MainLoop => write!(f, "main-loop"),
      | Self::Looper(id) => write!(f, "{id}"),
      | Self::Thread => write!(f, "thread"),
    }
  }
}
