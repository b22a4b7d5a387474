/// Work performed by one pass of the main loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopTurn {
  timers_fired: usize,
  tasks_run:    usize,
  faults:       usize,
}

impl LoopTurn {
  pub(crate) const fn new(timers_fired: usize, tasks_run: usize, faults: usize) -> Self {
    Self { timers_fired, tasks_run, faults }
  }

  /// Timer handlers invoked.
  #[must_use]
  pub const fn timers_fired(&self) -> usize {
    self.timers_fired
  }

  /// Queued tasks drained.
  #[must_use]
  pub const fn tasks_run(&self) -> usize {
    self.tasks_run
  }

  /// Faults captured from timers and tasks.
  #[must_use]
  pub const fn faults(&self) -> usize {
    self.faults
  }

  /// Returns `true` when the pass found nothing to do.
  #[must_use]
  pub const fn is_idle(&self) -> bool {
    self.timers_fired == 0 && self.tasks_run == 0
  }
}
