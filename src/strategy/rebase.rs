//! Rewrite references so they stay valid from the destination directory.

use crate::asset_paths::{lexical, to_url_path};
use crate::error::{Error, ProcessResult};
use crate::log::Log;
use crate::models::{DirContext, ReferenceLink};
use crate::options::UrlOptions;

/// Point the reference at the same file, seen from `to` instead of the stylesheet's own
/// directory. Nothing is read or written.
pub fn process_rebase(url: &str, dir: &DirContext, _options: &UrlOptions, _log: &dyn Log) -> ProcessResult {
  let link = ReferenceLink::parse(url);

  let document_dir =
    lexical::absolutize(dir.file_dir()).map_err(|err| Error::io(dir.file_dir(), err))?;
  let destination = lexical::absolutize(&dir.to).map_err(|err| Error::io(&dir.to, err))?;

  let target = lexical::join(&document_dir.to_string_lossy(), &link.raw_pathname);
  let relative = lexical::relative(&destination, &target);

  Ok(Some(format!("{}{}", to_url_path(&relative), link.suffix())))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::log::CollectingLog;

  #[test]
  fn rebases_from_document_to_destination() {
    let dir = DirContext::new("/site/src/css", "/site/dist");
    let result = process_rebase("../img/a.png?v=1#x", &dir, &UrlOptions::default(), &CollectingLog::new())
      .unwrap();

    assert_eq!(result.as_deref(), Some("../src/img/a.png?v=1#x"));
  }

  #[test]
  fn uses_imported_document_location() {
    let dir = DirContext::new("/site/src", "/site/src").with_file("/site/src/parts/button.css");
    let result = process_rebase("icon.svg", &dir, &UrlOptions::default(), &CollectingLog::new())
      .unwrap();

    assert_eq!(result.as_deref(), Some("parts/icon.svg"));
  }

  #[test]
  fn escaped_reference_keeps_its_escaping() {
    let dir = DirContext::new("/site/src/css", "/site/dist");
    let result = process_rebase("../my%20img/a%20b.png#x", &dir, &UrlOptions::default(), &CollectingLog::new())
      .unwrap();

    assert_eq!(result.as_deref(), Some("../src/my%20img/a%20b.png#x"));
  }
}
