//! Locate the file a reference points at.

use std::fs;

use tracing::debug;

use crate::asset_paths::{generate_file_candidates, lexical};
use crate::error::Error;
use crate::log::Log;
use crate::models::{DirContext, ReferenceLink, ResolvedFile};
use crate::options::BasePath;

/// Find the first existing file for `link` and read it.
///
/// Candidates are tried in base-path order and the search stops at the first hit. When
/// nothing exists a single warning naming the last attempted path is logged and `Ok(None)`
/// is returned so the caller leaves the reference alone. Any other filesystem failure is
/// returned as an error.
pub fn find_file(
  dir: &DirContext,
  link: &ReferenceLink,
  base_path: Option<&BasePath>,
  log: &dyn Log,
) -> Result<Option<ResolvedFile>, Error> {
  let root = lexical::absolutize(&dir.from).map_err(|err| Error::io(&dir.from, err))?;
  let document_dir =
    lexical::absolutize(dir.file_dir()).map_err(|err| Error::io(dir.file_dir(), err))?;

  let candidates = generate_file_candidates(&root, &document_dir, base_path, &link.pathname);

  for candidate in &candidates {
    let exists = candidate
      .try_exists()
      .map_err(|err| Error::io(candidate, err))?;
    debug!(candidate = %candidate.display(), exists, "checked asset candidate");

    if exists && candidate.is_file() {
      let contents = fs::read(candidate).map_err(|err| Error::io(candidate, err))?;
      return Ok(Some(ResolvedFile {
        path: candidate.clone(),
        contents,
      }));
    }
  }

  let attempted = candidates
    .last()
    .map(|path| path.display().to_string())
    .unwrap_or_else(|| link.pathname.clone());
  log.warn(&format!("Can't read file '{attempted}', ignoring"));

  Ok(None)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::log::CollectingLog;
  use tempfile::tempdir;

  #[test]
  fn finds_file_relative_to_root() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("img")).unwrap();
    fs::write(temp.path().join("img/a.png"), b"png").unwrap();

    let dir = DirContext::new(temp.path(), temp.path().join("dist"));
    let log = CollectingLog::new();
    let file = find_file(&dir, &ReferenceLink::parse("img/a.png?x#y"), None, &log)
      .unwrap()
      .expect("file should resolve");

    assert_eq!(file.path, temp.path().join("img/a.png"));
    assert_eq!(file.contents, b"png");
    assert!(log.is_empty());
  }

  #[test]
  fn later_base_path_wins_when_earlier_misses() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("p1")).unwrap();
    fs::create_dir_all(temp.path().join("p2")).unwrap();
    fs::write(temp.path().join("p2/x.png"), b"second").unwrap();

    let dir = DirContext::new(temp.path(), temp.path());
    let base = BasePath::new(["p1", "p2"]);
    let log = CollectingLog::new();
    let file = find_file(&dir, &ReferenceLink::parse("x.png"), Some(&base), &log)
      .unwrap()
      .expect("second base path should match");

    assert_eq!(file.path, temp.path().join("p2/x.png"));
    assert!(log.is_empty());
  }

  #[test]
  fn first_base_path_wins_when_both_exist() {
    let temp = tempdir().unwrap();
    for sub in ["p1", "p2"] {
      fs::create_dir_all(temp.path().join(sub)).unwrap();
      fs::write(temp.path().join(sub).join("x.png"), sub).unwrap();
    }

    let dir = DirContext::new(temp.path(), temp.path());
    let base = BasePath::new(["p1", "p2"]);
    let file = find_file(&dir, &ReferenceLink::parse("x.png"), Some(&base), &CollectingLog::new())
      .unwrap()
      .unwrap();

    assert_eq!(file.contents, b"p1");
  }

  #[test]
  fn searches_document_directory_by_default() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("parts")).unwrap();
    fs::write(temp.path().join("parts/icon.svg"), b"<svg/>").unwrap();

    let dir = DirContext::new(temp.path(), temp.path()).with_file(temp.path().join("parts/a.css"));
    let file = find_file(&dir, &ReferenceLink::parse("icon.svg"), None, &CollectingLog::new())
      .unwrap()
      .unwrap();

    assert_eq!(file.path, temp.path().join("parts/icon.svg"));
  }

  #[test]
  fn missing_file_warns_once_and_returns_none() {
    let temp = tempdir().unwrap();
    let dir = DirContext::new(temp.path(), temp.path());
    let base = BasePath::new(["p1", "p2"]);
    let log = CollectingLog::new();

    let file = find_file(&dir, &ReferenceLink::parse("nope.png"), Some(&base), &log).unwrap();

    assert!(file.is_none());
    assert_eq!(log.len(), 1);
    assert!(log.messages()[0].contains("p2"));
    assert!(log.messages()[0].contains("nope.png"));
  }

  #[test]
  fn directories_are_not_treated_as_files() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("img")).unwrap();

    let dir = DirContext::new(temp.path(), temp.path());
    let log = CollectingLog::new();
    let file = find_file(&dir, &ReferenceLink::parse("img"), None, &log).unwrap();

    assert!(file.is_none());
    assert_eq!(log.len(), 1);
  }

  #[test]
  fn empty_base_path_list_warns_without_searching() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("a.png"), b"png").unwrap();

    let dir = DirContext::new(temp.path(), temp.path());
    let base = BasePath::new(Vec::<String>::new());
    let log = CollectingLog::new();
    let file = find_file(&dir, &ReferenceLink::parse("a.png"), Some(&base), &log).unwrap();

    assert!(file.is_none());
    assert_eq!(log.len(), 1);
  }
}
