use alloc::vec::Vec;
use core::time::Duration;

use super::TimerWheel;
use crate::core::time::{TimerEntry, TimerInstant};

const MILLIS: Duration = Duration::from_millis(1);

fn at(ticks: u64) -> TimerInstant {
  TimerInstant::from_ticks(ticks, MILLIS)
}

fn labels(expired: Vec<(crate::core::time::TimerHandleId, TimerEntry<&'static str>)>) -> Vec<&'static str> {
  expired.into_iter().map(|(_, entry)| entry.into_payload()).collect()
}

#[test]
fn handles_are_strictly_increasing() {
  let mut wheel = TimerWheel::new();
  let first = wheel.schedule(TimerEntry::oneshot(at(5), ()));
  let second = wheel.schedule(TimerEntry::oneshot(at(1), ()));
  assert!(second > first);
  assert_eq!(wheel.len(), 2);
}

#[test]
fn expires_in_deadline_order_with_creation_tie_break() {
  let mut wheel = TimerWheel::new();
  wheel.schedule(TimerEntry::oneshot(at(100), "a"));
  wheel.schedule(TimerEntry::oneshot(at(50), "b"));
  wheel.schedule(TimerEntry::oneshot(at(100), "c"));

  assert_eq!(labels(wheel.collect_expired(at(150))), ["b", "a", "c"]);
  assert!(wheel.is_empty());
}

#[test]
fn leaves_future_entries_in_place() {
  let mut wheel = TimerWheel::new();
  wheel.schedule(TimerEntry::oneshot(at(10), "due"));
  wheel.schedule(TimerEntry::oneshot(at(11), "later"));

  assert_eq!(labels(wheel.collect_expired(at(10))), ["due"]);
  assert_eq!(wheel.next_deadline(), Some(at(11)));
}

#[test]
fn cancel_returns_entry_once() {
  let mut wheel = TimerWheel::new();
  let handle = wheel.schedule(TimerEntry::oneshot(at(10), "payload"));

  let cancelled = wheel.cancel(handle).map(TimerEntry::into_payload);
  assert_eq!(cancelled, Some("payload"));
  assert!(wheel.cancel(handle).is_none());
  assert!(wheel.collect_expired(at(20)).is_empty());
}

#[test]
fn next_deadline_skips_cancelled_heads() {
  let mut wheel = TimerWheel::new();
  let head = wheel.schedule(TimerEntry::oneshot(at(1), ()));
  wheel.schedule(TimerEntry::oneshot(at(7), ()));
  let _ = wheel.cancel(head);

  assert_eq!(wheel.next_deadline(), Some(at(7)));
  assert!(!wheel.contains(head));
}

#[test]
fn next_deadline_is_none_when_empty() {
  let mut wheel: TimerWheel<()> = TimerWheel::new();
  assert_eq!(wheel.next_deadline(), None);
}

#[test]
fn cancelling_many_entries_compacts_the_heap() {
  let mut wheel = TimerWheel::new();
  let handles: Vec<_> = (0..200).map(|tick| wheel.schedule(TimerEntry::oneshot(at(tick), tick))).collect();
  for handle in &handles[..190] {
    let _ = wheel.cancel(*handle);
  }

  assert_eq!(wheel.len(), 10);
  assert!(wheel.heap_len_for_test() <= 10 * 2 + super::COMPACTION_SLACK);
  let fired: Vec<u64> = wheel.collect_expired(at(1_000)).into_iter().map(|(_, entry)| entry.into_payload()).collect();
  assert_eq!(fired, (190..200).collect::<Vec<_>>());
}

#[test]
fn drain_returns_remaining_entries_in_order() {
  let mut wheel = TimerWheel::new();
  wheel.schedule(TimerEntry::oneshot(at(3), "late"));
  wheel.schedule(TimerEntry::oneshot(at(1), "early"));

  assert_eq!(labels(wheel.drain()), ["early", "late"]);
  assert!(wheel.is_empty());
}
