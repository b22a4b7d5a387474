use core::fmt;

use cadenza_utils_rs::core::sync::ArcShared;

use super::{LooperId, LooperLifecycle, looper_cell::LooperCell};

/// Reference to a looper started by a [`LooperRegistry`](super::LooperRegistry).
///
/// Handles stay valid after the looper stops; posting through a stale handle is rejected.
#[derive(Clone)]
pub struct LooperHandle {
  cell: ArcShared<LooperCell>,
  name: Option<ArcShared<String>>,
}

impl LooperHandle {
  pub(crate) fn new(cell: ArcShared<LooperCell>, name: Option<String>) -> Self {
    Self { cell, name: name.map(ArcShared::new) }
  }

  /// Returns the looper's identifier.
  #[must_use]
  pub fn id(&self) -> LooperId {
    self.cell.id()
  }

  /// Returns the name the looper was registered under.
  #[must_use]
  pub fn name(&self) -> Option<&str> {
    self.name.as_ref().map(|name| name.as_str())
  }

  /// Returns the current lifecycle state.
  #[must_use]
  pub fn lifecycle(&self) -> LooperLifecycle {
    self.cell.lifecycle()
  }

  /// Returns `true` when called from the looper's own thread.
  #[must_use]
  pub fn is_current(&self) -> bool {
    self.cell.is_current()
  }

  /// Number of tasks waiting in the looper's queue.
  #[must_use]
  pub fn pending_tasks(&self) -> usize {
    self.cell.pending_tasks()
  }

  pub(crate) const fn cell(&self) -> &ArcShared<LooperCell> {
    &self.cell
  }
}

impl PartialEq for LooperHandle {
  fn eq(&self, other: &Self) -> bool {
    self.cell.ptr_eq(&other.cell)
  }
}

impl Eq for LooperHandle {}

impl fmt::Debug for LooperHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LooperHandle").field("id", &self.id()).field("name", &self.name()).finish()
  }
}
