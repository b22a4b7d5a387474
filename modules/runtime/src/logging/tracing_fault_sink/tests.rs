use std::{
  fmt,
  sync::{Arc, Mutex},
};

use tracing::{
  Event, Level, Metadata, Subscriber,
  field::{Field, Visit},
  span::{Attributes, Id, Record},
  subscriber::with_default,
};

use super::TracingFaultSink;
use crate::{
  dispatch::ContextTag,
  logging::{FaultOrigin, FaultSink, TaskFault},
};

#[test]
fn forwards_faults_to_tracing_at_error_level() {
  let collector = RecordingSubscriber::default();
  let shared = collector.clone();
  with_default(shared, || {
    let fault = TaskFault::new(FaultOrigin::MainLoop, "handler exploded", Some(ContextTag::new("req-1")));
    TracingFaultSink::new().report(&fault);
  });

  let events = collector.events();
  assert_eq!(events.len(), 1);
  let event = &events[0];
  assert_eq!(event.level, Level::ERROR);
  assert_eq!(event.target, TracingFaultSink::DEFAULT_TARGET);
  assert_eq!(event.message, "handler exploded");
  assert_eq!(event.origin.as_deref(), Some("main-loop"));
  assert_eq!(event.context.as_deref(), Some("req-1"));
}

#[test]
fn untagged_fault_reports_placeholder_context() {
  let collector = RecordingSubscriber::default();
  let shared = collector.clone();
  with_default(shared, || {
    TracingFaultSink::new().report(&TaskFault::new(FaultOrigin::Thread, "oops", None));
  });

  let events = collector.events();
  assert_eq!(events.len(), 1);
  assert_eq!(events[0].origin.as_deref(), Some("thread"));
  assert_eq!(events[0].context.as_deref(), Some("n/a"));
}

#[derive(Clone, Default)]
struct RecordingSubscriber {
  events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl RecordingSubscriber {
  fn events(&self) -> Vec<CapturedEvent> {
    self.events.lock().expect("lock").clone()
  }
}

impl Subscriber for RecordingSubscriber {
  fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
    true
  }

  fn new_span(&self, _: &Attributes<'_>) -> Id {
    Id::from_u64(1)
  }

  fn record(&self, _: &Id, _: &Record<'_>) {}

  fn record_follows_from(&self, _: &Id, _: &Id) {}

  fn event(&self, event: &Event<'_>) {
    let metadata = event.metadata();
    let mut visitor = EventVisitor::default();
    event.record(&mut visitor);
    let captured = CapturedEvent {
      level:   *metadata.level(),
      target:  metadata.target().to_owned(),
      message: visitor.message.unwrap_or_default(),
      origin:  visitor.origin,
      context: visitor.context,
    };
    self.events.lock().expect("lock").push(captured);
  }

  fn enter(&self, _: &Id) {}

  fn exit(&self, _: &Id) {}
}

#[derive(Clone, Debug)]
struct CapturedEvent {
  level:   Level,
  target:  String,
  message: String,
  origin:  Option<String>,
  context: Option<String>,
}

#[derive(Default)]
struct EventVisitor {
  message: Option<String>,
  origin:  Option<String>,
  context: Option<String>,
}

impl Visit for EventVisitor {
  fn record_str(&mut self, field: &Field, value: &str) {
    match field.name() {
      | "message" => self.message = Some(value.to_owned()),
      | "origin" => self.origin = Some(value.to_owned()),
      | "context" => self.context = Some(value.to_owned()),
      | _ => {},
    }
  }

  fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
    let rendered = format!("{value:?}");
    match field.name() {
      | "message" if self.message.is_none() => self.message = Some(rendered),
      | "origin" if self.origin.is_none() => self.origin = Some(rendered),
      | "context" if self.context.is_none() => self.context = Some(rendered),
      | _ => {},
    }
  }
}
