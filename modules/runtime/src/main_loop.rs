mod loop_turn;
mod main_scheduler;
mod main_scheduler_config;
mod run_queue;
mod wake_signal;

pub use loop_turn::LoopTurn;
pub use main_scheduler::{MainScheduler, MainSchedulerGeneric};
pub use main_scheduler_config::MainSchedulerConfig;
pub use run_queue::RunQueue;
pub use wake_signal::WakeSignal;
