use std::sync::{Arc, Mutex};

use super::TaskDescriptor;
use crate::{dispatch::ContextTag, logging::FaultOrigin};

#[test]
fn from_handler_passes_param() {
  let seen = Arc::new(Mutex::new(Vec::new()));
  let sink = seen.clone();
  TaskDescriptor::from_handler(move |value: u32| sink.lock().unwrap().push(value), 7).run();
  assert_eq!(*seen.lock().unwrap(), vec![7]);
}

#[test]
fn captures_context_at_creation_and_restores_it_while_running() {
  let task = ContextTag::scope(ContextTag::new("captured"), || {
    TaskDescriptor::new(|| assert_eq!(ContextTag::current().unwrap().as_str(), "captured"))
  });
  assert_eq!(task.context().map(ContextTag::as_str), Some("captured"));
  assert!(ContextTag::current().is_none());
  task.run();
  assert!(ContextTag::current().is_none());
}

#[test]
fn with_context_overrides_snapshot() {
  let task = TaskDescriptor::new(|| {}).with_context(Some(ContextTag::new("explicit")));
  assert_eq!(task.context(), Some(&ContextTag::new("explicit")));
}

#[test]
fn run_guarded_reports_panic_with_context() {
  let task = TaskDescriptor::new(|| panic!("task failed")).with_context(Some(ContextTag::new("ctx")));
  let fault = task.run_guarded(FaultOrigin::MainLoop).unwrap_err();
  assert_eq!(fault.message(), "task failed");
  assert_eq!(fault.origin(), FaultOrigin::MainLoop);
  assert_eq!(fault.context(), Some(&ContextTag::new("ctx")));
  assert!(ContextTag::current().is_none());
}
