//! `tracing`-backed fault sink.

#[cfg(test)]
mod tests;

use tracing::error;

use super::{FaultSink, TaskFault};

/// Fault sink that forwards every captured fault to the `tracing` crate at error level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingFaultSink;

impl TracingFaultSink {
  /// Target name used in emitted events.
  pub const DEFAULT_TARGET: &'static str = "cadenza::runtime::fault";

  /// Creates the sink.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl FaultSink for TracingFaultSink {
  fn report(&self, fault: &TaskFault) {
    let origin = fault.origin().to_string();
    let context = fault.context().map_or("n/a", |tag| tag.as_str());
    error!(
      target: TracingFaultSink::DEFAULT_TARGET,
      origin = origin.as_str(),
      context = context,
      "{}",
      fault.message()
    );
  }
}
