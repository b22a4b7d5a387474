//! Trait implemented by sinks consuming captured faults.

use cadenza_utils_rs::core::sync::ArcShared;

use super::TaskFault;

/// Receives faults captured by run loops and timer batches.
///
/// Sinks are called from whichever thread caught the fault and must not block for long.
pub trait FaultSink: Send + Sync + 'static {
  /// Reports one captured fault.
  fn report(&self, fault: &TaskFault);
}

/// Shared handle to a [`FaultSink`].
pub type FaultSinkShared = ArcShared<dyn FaultSink>;
