//! Timer wheel storing scheduled entries.

use alloc::{
  collections::{BTreeMap, BinaryHeap},
  vec::Vec,
};
use core::cmp::{Ordering, Reverse};

use super::{TimerEntry, TimerHandleId, TimerInstant};

#[cfg(test)]
mod tests;

/// Minimum number of stale heap keys tolerated before the heap gets compacted.
const COMPACTION_SLACK: usize = 64;

/// Ordered set of one-shot timers with deterministic, creation-ordered expiration.
///
/// Entries live in an arena keyed by [`TimerHandleId`]; a min-heap of
/// `(deadline, sequence, handle)` keys orders them. Cancelling removes the arena slot and leaves
/// the heap key behind, which is skipped when it reaches the head.
pub struct TimerWheel<P> {
  queue:       BinaryHeap<Reverse<ScheduledKey>>,
  entries:     BTreeMap<TimerHandleId, TimerEntry<P>>,
  next_handle: u64,
  sequence:    u64,
}

impl<P> TimerWheel<P> {
  /// Creates an empty wheel.
  #[must_use]
  pub const fn new() -> Self {
    Self { queue: BinaryHeap::new(), entries: BTreeMap::new(), next_handle: 1, sequence: 0 }
  }

  /// Returns the number of live (scheduled and not cancelled) timers.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when no timers are scheduled.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Returns `true` when the handle refers to a live timer.
  #[must_use]
  pub fn contains(&self, handle: TimerHandleId) -> bool {
    self.entries.contains_key(&handle)
  }

  /// Schedules a timer entry and returns its handle.
  pub fn schedule(&mut self, entry: TimerEntry<P>) -> TimerHandleId {
    let handle = TimerHandleId::new(self.next_handle);
    self.next_handle = self.next_handle.wrapping_add(1).max(1);
    let key = ScheduledKey { deadline_tick: entry.deadline().ticks(), sequence: self.sequence, handle };
    self.sequence = self.sequence.wrapping_add(1);
    self.queue.push(Reverse(key));
    self.entries.insert(handle, entry);
    handle
  }

  /// Cancels a scheduled entry, returning it when it was still live.
  pub fn cancel(&mut self, handle: TimerHandleId) -> Option<TimerEntry<P>> {
    let removed = self.entries.remove(&handle)?;
    if self.queue.len() > self.entries.len().saturating_mul(2) + COMPACTION_SLACK {
      self.compact();
    }
    Some(removed)
  }

  /// Drains all entries whose deadline is at or before `now`, in firing order.
  pub fn collect_expired(&mut self, now: TimerInstant) -> Vec<(TimerHandleId, TimerEntry<P>)> {
    let mut expired = Vec::new();
    while let Some(Reverse(key)) = self.queue.peek() {
      if key.deadline_tick > now.ticks() {
        break;
      }
      let Some(Reverse(key)) = self.queue.pop() else {
        break;
      };
      if let Some(entry) = self.entries.remove(&key.handle) {
        expired.push((key.handle, entry));
      }
    }
    expired
  }

  /// Returns the earliest deadline among live entries, discarding stale heap keys on the way.
  pub fn next_deadline(&mut self) -> Option<TimerInstant> {
    while let Some(Reverse(key)) = self.queue.peek() {
      if let Some(entry) = self.entries.get(&key.handle) {
        return Some(entry.deadline());
      }
      let _ = self.queue.pop();
    }
    None
  }

  /// Removes every entry, returning them in firing order.
  pub fn drain(&mut self) -> Vec<(TimerHandleId, TimerEntry<P>)> {
    let mut drained = Vec::with_capacity(self.entries.len());
    while let Some(Reverse(key)) = self.queue.pop() {
      if let Some(entry) = self.entries.remove(&key.handle) {
        drained.push((key.handle, entry));
      }
    }
    drained
  }

  fn compact(&mut self) {
    let entries = &self.entries;
    self.queue.retain(|Reverse(key)| entries.contains_key(&key.handle));
  }

  #[cfg(test)]
  pub(crate) fn heap_len_for_test(&self) -> usize {
    self.queue.len()
  }
}

impl<P> Default for TimerWheel<P> {
  fn default() -> Self {
    Self::new()
  }
}

#[derive(Clone, Copy, Debug)]
struct ScheduledKey {
  deadline_tick: u64,
  sequence:      u64,
  handle:        TimerHandleId,
}

impl PartialEq for ScheduledKey {
  fn eq(&self, other: &Self) -> bool {
    self.deadline_tick == other.deadline_tick && self.sequence == other.sequence
  }
}

impl Eq for ScheduledKey {}

impl PartialOrd for ScheduledKey {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for ScheduledKey {
  fn cmp(&self, other: &Self) -> Ordering {
    self.deadline_tick.cmp(&other.deadline_tick).then_with(|| self.sequence.cmp(&other.sequence))
  }
}
