use core::time::Duration;
use std::{
  sync::{Mutex, mpsc},
  thread,
};

use cadenza_utils_rs::core::sync::ArcShared;

use super::LooperRegistry;
use crate::{
  dispatch::ContextTag,
  logging::{FaultOrigin, FaultSink, TaskFault},
  looper::{LooperConfig, LooperError, LooperLifecycle},
  task::TaskDescriptor,
};

const WAIT: Duration = Duration::from_secs(5);

#[derive(Default)]
struct RecordingSink {
  faults: Mutex<Vec<TaskFault>>,
}

impl FaultSink for RecordingSink {
  fn report(&self, fault: &TaskFault) {
    self.faults.lock().unwrap().push(fault.clone());
  }
}

fn registry_with_sink(config: LooperConfig) -> (LooperRegistry, ArcShared<RecordingSink>) {
  let sink = ArcShared::new(RecordingSink::default());
  let registry = LooperRegistry::with_fault_sink(config, sink.clone().into_dyn(|sink| sink as &dyn FaultSink));
  (registry, sink)
}

#[test]
fn tasks_run_in_order_on_the_looper_thread() {
  let registry = LooperRegistry::new(LooperConfig::default());
  let looper = registry.start_looper().unwrap();
  let (tx, rx) = mpsc::channel();
  for value in 0..5_u32 {
    let tx = tx.clone();
    let posted = registry.run_on_looper(
      &looper,
      move |value: u32| tx.send((value, thread::current().name().map(str::to_owned))).unwrap(),
      value,
    );
    assert!(posted);
  }

  let received: Vec<_> = (0..5).map(|_| rx.recv_timeout(WAIT).unwrap()).collect();
  assert_eq!(received.iter().map(|(value, _)| *value).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
  let expected_name = format!("cadenza-looper-{}", looper.id().raw());
  assert!(received.iter().all(|(_, name)| name.as_deref() == Some(expected_name.as_str())));

  registry.shutdown_all();
}

#[test]
fn stop_drains_queued_tasks_and_rejects_new_ones() {
  let registry = LooperRegistry::new(LooperConfig::default());
  let looper = registry.start_looper().unwrap();
  let (gate_tx, gate_rx) = mpsc::channel::<()>();
  let (done_tx, done_rx) = mpsc::channel();

  registry.run_on_looper(&looper, move |_: ()| gate_rx.recv_timeout(WAIT).unwrap(), ());
  let tx = done_tx.clone();
  registry.run_on_looper(&looper, move |label: &'static str| tx.send(label).unwrap(), "queued before stop");

  assert!(registry.stop_looper(&looper));
  assert!(!registry.stop_looper(&looper));
  assert!(!registry.run_on_looper(&looper, move |label: &'static str| done_tx.send(label).unwrap(), "late"));
  gate_tx.send(()).unwrap();

  assert_eq!(done_rx.recv_timeout(WAIT).unwrap(), "queued before stop");
  assert!(registry.join(&looper));
  assert_eq!(looper.lifecycle(), LooperLifecycle::Stopped);
  assert!(done_rx.try_recv().is_err());
  assert!(registry.is_empty());
}

#[test]
fn named_loopers_are_unique_and_reusable_after_stop() {
  let registry = LooperRegistry::new(LooperConfig::default());
  let io = registry.start_named_looper("io").unwrap();
  assert_eq!(io.name(), Some("io"));
  assert_eq!(registry.lookup("io"), Some(io.clone()));
  assert_eq!(registry.get(io.id()), Some(io.clone()));
  assert_eq!(registry.start_named_looper("io").unwrap_err(), LooperError::name_taken("io"));
  assert_eq!(registry.len(), 1);

  registry.stop_looper(&io);
  assert!(registry.lookup("io").is_none());
  let again = registry.start_named_looper("io").unwrap();
  assert_ne!(again.id(), io.id());

  registry.join(&io);
  registry.shutdown_all();
}

#[test]
fn panicking_task_is_reported_and_the_looper_keeps_serving() {
  let (registry, sink) = registry_with_sink(LooperConfig::default());
  let looper = registry.start_looper().unwrap();
  let (tx, rx) = mpsc::channel();

  registry.run_on_looper(&looper, |message: &'static str| panic!("{message}"), "looper task failed");
  registry.run_on_looper(&looper, move |label: &'static str| tx.send(label).unwrap(), "survivor");

  assert_eq!(rx.recv_timeout(WAIT).unwrap(), "survivor");
  let faults = sink.faults.lock().unwrap().clone();
  assert_eq!(faults.len(), 1);
  assert_eq!(faults[0].origin(), FaultOrigin::Looper(looper.id()));
  assert_eq!(faults[0].message(), "looper task failed");

  registry.shutdown_all();
}

#[test]
fn posting_from_the_looper_thread_queues_by_default() {
  let registry = LooperRegistry::new(LooperConfig::default());
  let looper = registry.start_looper().unwrap();
  let (tx, rx) = mpsc::channel();

  let inner_registry = registry.clone();
  let inner_looper = looper.clone();
  registry.run_on_looper(
    &looper,
    move |tx: mpsc::Sender<&'static str>| {
      assert!(inner_looper.is_current());
      let nested = tx.clone();
      inner_registry.run_on_looper(&inner_looper, move |_: ()| nested.send("nested").unwrap(), ());
      tx.send("outer").unwrap();
    },
    tx,
  );

  assert_eq!(rx.recv_timeout(WAIT).unwrap(), "outer");
  assert_eq!(rx.recv_timeout(WAIT).unwrap(), "nested");
  registry.shutdown_all();
}

#[test]
fn posting_from_the_looper_thread_runs_inline_when_enabled() {
  let registry = LooperRegistry::new(LooperConfig::new().with_inline_on_looper_thread(true));
  let looper = registry.start_looper().unwrap();
  let (tx, rx) = mpsc::channel();

  let inner_registry = registry.clone();
  let inner_looper = looper.clone();
  registry.run_on_looper(
    &looper,
    move |tx: mpsc::Sender<&'static str>| {
      let nested = tx.clone();
      inner_registry.run_on_looper(&inner_looper, move |_: ()| nested.send("nested").unwrap(), ());
      tx.send("outer").unwrap();
    },
    tx,
  );

  assert_eq!(rx.recv_timeout(WAIT).unwrap(), "nested");
  assert_eq!(rx.recv_timeout(WAIT).unwrap(), "outer");
  registry.shutdown_all();
}

#[test]
fn looper_tasks_run_under_the_posters_context() {
  let registry = LooperRegistry::new(LooperConfig::default());
  let looper = registry.start_looper().unwrap();
  let (tx, rx) = mpsc::channel();

  ContextTag::scope(ContextTag::new("poster"), || {
    registry.post(&looper, TaskDescriptor::new(move || tx.send(ContextTag::current()).unwrap()));
  });

  assert_eq!(rx.recv_timeout(WAIT).unwrap(), Some(ContextTag::new("poster")));
  registry.shutdown_all();
}

#[test]
fn shutdown_all_stops_every_looper() {
  let registry = LooperRegistry::new(LooperConfig::new().with_thread_name_prefix("worker"));
  let first = registry.start_looper().unwrap();
  let second = registry.start_named_looper("second").unwrap();

  assert_eq!(registry.shutdown_all(), 2);
  assert!(registry.is_empty());
  assert_eq!(first.lifecycle(), LooperLifecycle::Stopped);
  assert_eq!(second.lifecycle(), LooperLifecycle::Stopped);
  assert!(!registry.run_on_looper(&first, |_: ()| {}, ()));
}

#[test]
fn handles_from_another_registry_are_rejected() {
  let first = LooperRegistry::new(LooperConfig::default());
  let second = LooperRegistry::new(LooperConfig::default());
  let foreign = first.start_looper().unwrap();
  let local = second.start_looper().unwrap();
  assert_eq!(foreign.id(), local.id());
  assert!(!second.owns(&foreign));

  assert!(!second.stop_looper(&foreign));
  assert_eq!(second.len(), 1);
  assert!(local.lifecycle().accepts_tasks());
  assert!(foreign.lifecycle().accepts_tasks());

  let (tx, rx) = mpsc::channel();
  assert!(!second.run_on_looper(&foreign, move |_: ()| tx.send(()).unwrap(), ()));
  assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());

  assert!(first.owns(&foreign));
  assert!(first.stop_looper(&foreign));
  assert!(second.stop_looper(&local));
  first.join(&foreign);
  second.join(&local);
}
