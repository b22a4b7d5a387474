//! Opaque per-task context value.

#[cfg(test)]
mod tests;

use core::{
  fmt,
  hash::{Hash, Hasher},
};
use std::cell::RefCell;

use cadenza_utils_rs::core::sync::ArcShared;

use super::ContextGuard;

thread_local! {
  static CURRENT: RefCell<Option<ContextTag>> = const { RefCell::new(None) };
}

/// Opaque tag carried alongside queued work and restored on the thread that runs it.
///
/// Each thread has at most one current tag. Work created on a thread snapshots that tag; the
/// run loop re-establishes it around the handler and restores the previous one afterwards.
#[derive(Clone)]
pub struct ContextTag {
  value: ArcShared<String>,
}

impl ContextTag {
  /// Creates a tag from its textual value.
  #[must_use]
  pub fn new(value: impl Into<String>) -> Self {
    Self { value: ArcShared::new(value.into()) }
  }

  /// Returns the textual value.
  #[must_use]
  pub fn as_str(&self) -> &str {
    self.value.as_str()
  }

  /// Returns the tag established on the calling thread.
  #[must_use]
  pub fn current() -> Option<Self> {
    CURRENT.with(|slot| slot.borrow().clone())
  }

  /// Makes `tag` current until the returned guard drops.
  #[must_use]
  pub fn enter(tag: Self) -> ContextGuard {
    ContextGuard::install(Some(tag))
  }

  /// Makes `tag` current until the returned guard drops; `None` clears the thread's tag.
  ///
  /// Run loops restore captured tags with this, so untagged work runs with no current tag.
  #[must_use]
  pub fn establish(tag: Option<Self>) -> ContextGuard {
    ContextGuard::install(tag)
  }

  /// Runs `body` with `tag` current.
  pub fn scope<R>(tag: Self, body: impl FnOnce() -> R) -> R {
    let _guard = Self::enter(tag);
    body()
  }

  pub(crate) fn replace_current(tag: Option<Self>) -> Option<Self> {
    CURRENT.with(|slot| slot.replace(tag))
  }
}

impl PartialEq for ContextTag {
  fn eq(&self, other: &Self) -> bool {
    self.as_str() == other.as_str()
  }
}

impl Eq for ContextTag {}

impl Hash for ContextTag {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.as_str().hash(state);
  }
}

impl fmt::Debug for ContextTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("ContextTag").field(&self.as_str()).finish()
  }
}

impl fmt::Display for ContextTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
