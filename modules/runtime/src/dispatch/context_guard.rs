//! Scope guard restoring the previous context tag.

use core::marker::PhantomData;

use super::ContextTag;

/// Restores the thread's previous [`ContextTag`] when dropped.
///
/// Guards are bound to the thread that created them.
#[must_use = "the tag is restored as soon as the guard drops"]
pub struct ContextGuard {
  previous: Option<ContextTag>,
  _local:   PhantomData<*const ()>,
}

impl ContextGuard {
  pub(crate) fn install(tag: Option<ContextTag>) -> Self {
    let previous = ContextTag::replace_current(tag);
    Self { previous, _local: PhantomData }
  }
}

impl Drop for ContextGuard {
  fn drop(&mut self) {
    ContextTag::replace_current(self.previous.take());
  }
}
