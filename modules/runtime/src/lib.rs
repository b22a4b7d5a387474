#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::print_stdout, clippy::dbg_macro)]
#![deny(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![deny(unreachable_pub)]

//! Cooperative scheduling runtime.
//!
//! - [`timer`]: one-shot timers ordered by due time, with cancellation and keyed rescheduling.
//! - [`main_loop`]: the primary run loop interleaving timer firing with queued tasks.
//! - [`looper`]: independent run loops, each owning a thread and a FIFO queue.
//! - [`dispatch`]: a single submission surface that carries a [`ContextTag`](dispatch::ContextTag)
//!   across every hop.
//!
//! Nothing here is global: every scheduler is an explicit value, so several isolated instances
//! can coexist in one process.
//!
//! Run queues and the pending timer set are unbounded. Producers that outpace the consumer grow
//! memory without limit; there is no backpressure.

/// Context propagation and the combined dispatch surface.
pub mod dispatch;
/// Fault reporting.
pub mod logging;
/// Independent run loops backed by dedicated threads.
pub mod looper;
/// The primary run loop.
pub mod main_loop;
/// Units of work consumed by run loops.
pub mod task;
/// Timer service.
pub mod timer;
