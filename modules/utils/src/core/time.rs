//! Time domain primitives shared across runtimes.

mod clock_kind;
mod manual_clock;
mod monotonic_clock;
mod timer_entry;
mod timer_handle_id;
mod timer_instant;
mod timer_wheel;

pub use clock_kind::ClockKind;
pub use manual_clock::ManualClock;
pub use monotonic_clock::MonotonicClock;
pub use timer_entry::TimerEntry;
pub use timer_handle_id::TimerHandleId;
pub use timer_instant::TimerInstant;
pub use timer_wheel::TimerWheel;
