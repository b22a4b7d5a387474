mod scheduled_timer;
mod tick_outcome;
mod timer_handler;
mod timer_key;
mod timer_service;

pub use cadenza_utils_rs::core::time::TimerHandleId;
pub use tick_outcome::TickOutcome;
pub use timer_handler::{TimerHandler, TimerHandlerShared};
pub use timer_key::TimerKey;
pub use timer_service::{TimerPayload, TimerService, TimerServiceGeneric};
