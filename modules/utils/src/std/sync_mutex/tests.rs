use std::{sync::Arc, thread};

use super::StdSyncMutex;

#[test]
fn lock_allows_read_write() {
  let mutex = StdSyncMutex::new(0);
  {
    let mut guard = mutex.lock();
    *guard = 123;
  }
  assert_eq!(*mutex.lock(), 123);
}

#[test]
fn into_inner_unwraps_value() {
  let mutex = StdSyncMutex::new(999);
  assert_eq!(mutex.into_inner(), 999);
}

#[test]
fn lock_recovers_from_poisoning() {
  let mutex = Arc::new(StdSyncMutex::new(vec![1]));
  let poisoner = mutex.clone();
  let result = thread::spawn(move || {
    let mut guard = poisoner.lock();
    guard.push(2);
    panic!("poison the lock");
  })
  .join();
  assert!(result.is_err());

  assert_eq!(*mutex.lock(), vec![1, 2]);
}
