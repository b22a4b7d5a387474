use alloc::sync::Arc;
use core::{fmt, mem, ops::Deref, ptr};

#[cfg(test)]
mod tests;

/// Shared ownership handle backed by [`alloc::sync::Arc`].
///
/// Equality is pointer identity: two handles are equal when they point at the same allocation.
#[repr(transparent)]
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T: ?Sized> ArcShared<T> {
  /// Creates a new `ArcShared` by wrapping the provided value.
  pub fn new(value: T) -> Self
  where
    T: Sized, {
    Self(Arc::new(value))
  }

  /// Consumes the shared handle and returns the raw pointer.
  #[must_use]
  pub fn into_raw(self) -> *const T {
    Arc::into_raw(self.0)
  }

  /// Reconstructs the shared handle from a raw pointer.
  ///
  /// # Safety
  ///
  /// The pointer must originate from `ArcShared::into_raw`.
  pub unsafe fn from_raw(ptr: *const T) -> Self {
    Self(unsafe { Arc::from_raw(ptr) })
  }

  /// Converts the shared handle into another dynamically sized representation.
  ///
  /// `cast` must be an unsizing coercion of the value it receives, such as
  /// `|value| value as &dyn Trait`. The result is rebuilt as an [`Arc`] over the same allocation,
  /// so a reference to anything else (another allocation, or a field of the value) would make the
  /// new handle free memory it does not own.
  ///
  /// # Panics
  ///
  /// Panics when `cast` returns a reference whose address, size or alignment differs from the
  /// value it was given. The original handle is released before panicking.
  pub fn into_dyn<U: ?Sized, F>(self, cast: F) -> ArcShared<U>
  where
    F: FnOnce(&T) -> &U, {
    let raw = self.into_raw();
    // SAFETY: `raw` came from `into_raw` above and the allocation stays alive until it is either
    // rebuilt as `ArcShared<U>` or released through `from_raw`.
    let reference = unsafe { &*raw };
    let trait_reference = cast(reference);
    let same_value = ptr::addr_eq(trait_reference, raw)
      && mem::size_of_val(trait_reference) == mem::size_of_val(reference)
      && mem::align_of_val(trait_reference) == mem::align_of_val(reference);
    if !same_value {
      // SAFETY: `raw` is still the sole owner of the strong count taken by `into_raw`.
      drop(unsafe { Self::from_raw(raw) });
      panic!("ArcShared::into_dyn requires an unsizing cast of the same value");
    }
    let trait_ptr = ptr::from_ref(trait_reference);
    // SAFETY: `trait_ptr` addresses the value behind `raw` with the same layout, so it carries the
    // strong count released by `into_raw`.
    unsafe { ArcShared::from_raw(trait_ptr) }
  }

  /// Returns `true` when both handles point at the same allocation.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }

  /// Returns the number of strong references to the allocation.
  #[must_use]
  pub fn strong_count(&self) -> usize {
    Arc::strong_count(&self.0)
  }
}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized> Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized> fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ArcShared").finish_non_exhaustive()
  }
}

impl<T: ?Sized> PartialEq for ArcShared<T> {
  fn eq(&self, other: &Self) -> bool {
    self.ptr_eq(other)
  }
}

impl<T: ?Sized> Eq for ArcShared<T> {}
