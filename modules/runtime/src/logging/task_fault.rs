//! Faults captured from panicking tasks and handlers.

use std::{
  any::Any,
  fmt,
  panic::{self, AssertUnwindSafe},
};

use super::FaultOrigin;
use crate::dispatch::ContextTag;


const NON_STRING_PAYLOAD: &str = "non-string panic payload";

/// A panic caught while running a task or timer handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskFault {
  origin:  FaultOrigin,
  message: String,
  context: Option<ContextTag>,
}

impl TaskFault {
  /// Creates a fault record.
  #[must_use]
  pub fn new(origin: FaultOrigin, message: impl Into<String>, context: Option<ContextTag>) -> Self {
    Self { origin, message: message.into(), context }
  }

  /// Builds a fault from a panic payload returned by [`std::panic::catch_unwind`].
  #[must_use]
  pub fn from_panic(origin: FaultOrigin, context: Option<ContextTag>, payload: &(dyn Any + Send)) -> Self {
    let message = if let Some(text) = payload.downcast_ref::<&str>() {
      (*text).to_owned()
    } else if let Some(text) = payload.downcast_ref::<String>() {
      text.clone()
    } else {
      NON_STRING_PAYLOAD.to_owned()
    };
    Self::new(origin, message, context)
  }

  /// Runs `body`, converting a panic into a fault.
  pub(crate) fn capture<F>(origin: FaultOrigin, context: Option<ContextTag>, body: F) -> Result<(), Self>
  where
    F: FnOnce(), {
    panic::catch_unwind(AssertUnwindSafe(body)).map_err(|payload| Self::from_panic(origin, context, payload.as_ref()))
  }

  /// Returns where the fault was raised.
  #[must_use]
  pub const fn origin(&self) -> FaultOrigin {
    self.origin
  }

  /// Returns the panic message.
  #[must_use]
  pub fn message(&self) -> &str {
    &self.message
  }

  /// Returns the context tag the failing work carried, if any.
  #[must_use]
  pub const fn context(&self) -> Option<&ContextTag> {
    self.context.as_ref()
  }
}

impl fmt::Display for TaskFault {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.context {
      | Some(tag) => write!(f, "{} panicked in context {}: {}", self.origin, tag, self.message),
      | None => write!(f, "{} panicked: {}", self.origin, self.message),
    }
  }
}
