use crate::{
  dispatch::ContextTag,
  timer::{TimerHandlerShared, TimerKey},
};

/// Pending timer payload stored in the wheel.
pub(crate) struct ScheduledTimer<P: 'static> {
  pub(crate) handler: TimerHandlerShared<P>,
  pub(crate) param:   P,
  pub(crate) key:     Option<TimerKey>,
  pub(crate) context: Option<ContextTag>,
}
