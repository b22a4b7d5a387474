mod fault_origin;
mod fault_sink;
mod task_fault;
mod tracing_fault_sink;

pub use fault_origin::FaultOrigin;
pub use fault_sink::{FaultSink, FaultSinkShared};
pub use task_fault::TaskFault;
pub use tracing_fault_sink::TracingFaultSink;
