#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::print_stdout, clippy::dbg_macro)]
#![deny(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![deny(unreachable_pub)]

//! Clock, timer and synchronization primitives shared by the cadenza runtime.
//!
//! The [`core`](crate::core) tree only depends on `alloc`; the [`std`](crate::std) tree binds the
//! primitives to the standard library and is gated behind the `std` feature.

extern crate alloc;

/// Runtime-agnostic primitives.
pub mod core;
/// Bindings for std environments.
#[cfg(feature = "std")]
pub mod std;
