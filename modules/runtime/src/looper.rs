mod looper_cell;
mod looper_config;
mod looper_error;
mod looper_handle;
mod looper_id;
mod looper_lifecycle;
mod looper_registry;

pub use looper_config::LooperConfig;
pub use looper_error::LooperError;
pub use looper_handle::LooperHandle;
pub use looper_id::LooperId;
pub use looper_lifecycle::LooperLifecycle;
pub use looper_registry::LooperRegistry;
