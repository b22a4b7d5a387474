use crate::logging::TaskFault;

/// Result of one timer tick.
#[derive(Debug, Default)]
pub struct TickOutcome {
  fired:  usize,
  faults: Vec<TaskFault>,
}

impl TickOutcome {
  pub(crate) const fn new(fired: usize, faults: Vec<TaskFault>) -> Self {
    Self { fired, faults }
  }

  /// Number of handlers invoked, including those that panicked.
  #[must_use]
  pub const fn fired(&self) -> usize {
    self.fired
  }

  /// Faults raised by handlers in this batch, in firing order.
  #[must_use]
  pub fn faults(&self) -> &[TaskFault] {
    &self.faults
  }

  /// Consumes the outcome, returning its faults.
  #[must_use]
  pub fn into_faults(self) -> Vec<TaskFault> {
    self.faults
  }
}
