//! Embed referenced assets as `data:` URIs.

use tracing::debug;

use crate::encoding::{encode_file, mime};
use crate::error::ProcessResult;
use crate::log::Log;
use crate::models::{DirContext, ReferenceLink};
use crate::options::{Fallback, UrlOptions};
use crate::resolve::find_file;
use crate::strategy::copy::process_copy;

/// Inline the referenced file, or hand it to the fallback when it is too large.
///
/// Files whose extension has no known mime type are left untouched. SVG files referenced
/// with a fragment are embedded whole (with a warning), and the fragment is appended to
/// the encoded data so `#id` addressing still reaches the consumer.
pub fn process_inline(url: &str, dir: &DirContext, options: &UrlOptions, log: &dyn Log) -> ProcessResult {
  let link = ReferenceLink::parse(url);
  let Some(file) = find_file(dir, &link, options.base_path.as_ref(), log)? else {
    return Ok(None);
  };

  if let Some(max_size) = options.max_size_bytes() {
    if file.size() >= max_size {
      debug!(
        path = %file.path.display(),
        size = file.size(),
        max_size,
        "asset too large to inline, using fallback"
      );
      return process_fallback(url, dir, options, log);
    }
  }

  let Some(mime_type) = mime::lookup(&file.path) else {
    log.warn(&format!(
      "Unable to find asset mime-type for {}",
      file.path.display()
    ));
    return Ok(None);
  };

  if link.fragment.is_some() && mime_type == mime::types::SVG && !options.ignore_fragment_warning {
    log.warn(&format!(
      "Image type is svg and link contains #. SVG fragments are not supported, the whole file is inlined: {}",
      file.path.display()
    ));
  }

  let encoded = encode_file(&file.contents, mime_type, options.encode_type);
  debug!(path = %file.path.display(), mime_type, "inlined asset");

  Ok(Some(match &link.fragment {
    Some(fragment) => format!("{encoded}{fragment}"),
    None => encoded,
  }))
}

fn process_fallback(url: &str, dir: &DirContext, options: &UrlOptions, log: &dyn Log) -> ProcessResult {
  match &options.fallback {
    Fallback::None => Ok(None),
    Fallback::Copy => process_copy(url, dir, options, log),
    Fallback::Custom(callback) => callback(url, dir, options, log),
  }
}
