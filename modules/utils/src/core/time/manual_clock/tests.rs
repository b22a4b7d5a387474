use core::time::Duration;

use super::ManualClock;
use crate::core::time::{ClockKind, MonotonicClock};

#[test]
fn starts_at_zero() {
  let clock = ManualClock::default();
  assert_eq!(clock.now().ticks(), 0);
  assert_eq!(clock.resolution(), Duration::from_millis(1));
  assert_eq!(clock.kind(), ClockKind::Manual);
}

#[test]
fn advance_moves_forward_in_ticks() {
  let clock = ManualClock::new(Duration::from_millis(10));
  clock.advance(Duration::from_millis(25));
  assert_eq!(clock.now().ticks(), 3);
  clock.advance_ticks(2);
  assert_eq!(clock.now().ticks(), 5);
}

#[test]
fn set_ticks_never_moves_backwards() {
  let clock = ManualClock::default();
  clock.set_ticks(150);
  clock.set_ticks(60);
  assert_eq!(clock.now().ticks(), 150);
}
