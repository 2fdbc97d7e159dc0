//! Entry point used by stylesheet drivers: pick an option set and run its strategy.

use tracing::debug;

use crate::asset_paths::should_ignore_reference;
use crate::error::ProcessResult;
use crate::log::Log;
use crate::models::{DirContext, ReferenceLink};
use crate::options::{UrlOptions, UrlStrategy};
use crate::strategy::{process_copy, process_custom, process_inline, process_rebase};

/// Run the strategy configured in `options` for a single reference.
///
/// This is the shared processor signature; it performs no filtering of its own.
pub fn process_url(url: &str, dir: &DirContext, options: &UrlOptions, log: &dyn Log) -> ProcessResult {
  match &options.strategy {
    UrlStrategy::Rebase => process_rebase(url, dir, options, log),
    UrlStrategy::Inline => process_inline(url, dir, options, log),
    UrlStrategy::Copy => process_copy(url, dir, options, log),
    UrlStrategy::Passthrough => Ok(None),
    UrlStrategy::Custom(callback) => process_custom(callback, url, dir, options, log),
  }
}

/// Ordered list of option sets applied to stylesheet references.
#[derive(Debug, Clone, Default)]
pub struct UrlRewriter {
  option_sets: Vec<UrlOptions>,
}

impl UrlRewriter {
  /// Create a rewriter; the first option set whose filter matches a reference wins.
  pub fn new(option_sets: Vec<UrlOptions>) -> Self {
    Self { option_sets }
  }

  /// Configured option sets in priority order.
  pub fn option_sets(&self) -> &[UrlOptions] {
    &self.option_sets
  }

  /// Rewrite one reference, returning `None` when it should stay as written.
  ///
  /// Remote URLs, data URIs and fragment-only references are skipped, as are references
  /// no option set's filter accepts.
  pub fn rewrite(&self, url: &str, dir: &DirContext, log: &dyn Log) -> ProcessResult {
    let link = ReferenceLink::parse(url);

    let Some(options) = self
      .option_sets
      .iter()
      .find(|options| options.matches(&link.pathname))
    else {
      debug!(url, "no option set matches reference");
      return Ok(None);
    };

    let has_base_path = options.base_path.is_some();
    if should_ignore_reference(url, has_base_path) {
      debug!(url, "skipping non-local reference");
      return Ok(None);
    }

    debug!(url, strategy = options.strategy.name(), "processing reference");
    process_url(url, dir, options, log)
  }
}
