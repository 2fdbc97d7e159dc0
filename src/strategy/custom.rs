//! Delegate a reference to a user supplied callback.

use crate::error::ProcessResult;
use crate::log::Log;
use crate::models::DirContext;
use crate::options::{UrlOptions, UrlProcessor};

/// Run `callback` with the untouched processor arguments and return its answer as is.
///
/// Errors raised by the callback are not caught.
pub fn process_custom(
  callback: &UrlProcessor,
  url: &str,
  dir: &DirContext,
  options: &UrlOptions,
  log: &dyn Log,
) -> ProcessResult {
  callback(url, dir, options, log)
}
