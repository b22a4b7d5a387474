mod task_descriptor;

pub use task_descriptor::TaskDescriptor;
