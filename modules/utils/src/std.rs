mod std_clock;
/// Condition variable paired with [`StdSyncMutex`].
mod sync_condvar;
/// Synchronization primitives built on top of `std::sync::Mutex`.
mod sync_mutex;
/// Guard returned by [`StdSyncMutex`].
mod sync_mutex_guard;

pub use std_clock::StdClock;
pub use sync_condvar::StdSyncCondvar;
pub use sync_mutex::StdSyncMutex;
pub use sync_mutex_guard::StdSyncMutexGuard;
