mod context_guard;
mod context_tag;
mod dispatch_error;
mod dispatcher;
mod dispatcher_config;

pub use context_guard::ContextGuard;
pub use context_tag::ContextTag;
pub use dispatch_error::DispatchError;
pub use dispatcher::{Dispatcher, DispatcherGeneric};
pub use dispatcher_config::DispatcherConfig;
