/// Synchronization primitives and shared ownership abstractions.
pub mod sync;
/// Clock and timer primitives.
pub mod time;
