use core::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use super::ArcShared;

#[test]
fn clone_shares_allocation() {
  let first = ArcShared::new(7_u32);
  let second = first.clone();
  assert!(first.ptr_eq(&second));
  assert_eq!(first.strong_count(), 2);
  assert_eq!(*second, 7);
}

#[test]
fn equality_is_pointer_identity() {
  let first = ArcShared::new(1_u8);
  let second = ArcShared::new(1_u8);
  assert_ne!(first, second);
  assert_eq!(first, first.clone());
}

#[test]
fn into_dyn_keeps_value_reachable() {
  let shared = ArcShared::new(42_i64);
  let dynamic: ArcShared<dyn Display> = shared.into_dyn(|value| value as &dyn Display);
  assert_eq!(dynamic.to_string(), "42");
}

static ELSEWHERE: i64 = 9;

#[test]
fn into_dyn_rejects_casts_to_another_value() {
  let shared = ArcShared::new(42_i64);
  let keep = shared.clone();
  let result = panic::catch_unwind(AssertUnwindSafe(move || {
    let _dynamic: ArcShared<dyn Display> = shared.into_dyn(|_value| &ELSEWHERE as &dyn Display);
  }));

  assert!(result.is_err());
  assert_eq!(keep.strong_count(), 1);
  assert_eq!(*keep, 42);
}

#[test]
fn raw_round_trip_preserves_count() {
  let shared = ArcShared::new(5_u16);
  let keep = shared.clone();
  let raw = shared.into_raw();
  let restored = unsafe { ArcShared::from_raw(raw) };
  assert!(restored.ptr_eq(&keep));
  assert_eq!(keep.strong_count(), 2);
}
