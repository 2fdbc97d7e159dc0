//! Warning sink used by every processor.

use std::cell::RefCell;

/// Receives warnings about references that were left untouched or partially handled.
///
/// Implementations must not fail; warnings are fire-and-forget.
pub trait Log {
  /// Record a warning message.
  fn warn(&self, message: &str);
}

/// Forwards warnings to `tracing` at `WARN` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl Log for TracingLog {
  fn warn(&self, message: &str) {
    tracing::warn!(target: "css_asset_urls", "{message}");
  }
}

/// Keeps every warning in memory so callers can report them later.
#[derive(Debug, Default)]
pub struct CollectingLog {
  messages: RefCell<Vec<String>>,
}

impl CollectingLog {
  /// Create an empty log.
  pub fn new() -> Self {
    Self::default()
  }

  /// Snapshot of the warnings recorded so far.
  pub fn messages(&self) -> Vec<String> {
    self.messages.borrow().clone()
  }

  /// Number of warnings recorded so far.
  pub fn len(&self) -> usize {
    self.messages.borrow().len()
  }

  /// Returns `true` when nothing has been recorded.
  pub fn is_empty(&self) -> bool {
    self.messages.borrow().is_empty()
  }
}

impl Log for CollectingLog {
  fn warn(&self, message: &str) {
    self.messages.borrow_mut().push(message.to_string());
  }
}
