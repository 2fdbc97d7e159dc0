//! Copy referenced assets into the destination tree.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::asset_paths::{encode_url_segment, lexical, make_public_reference};
use crate::encoding::hashed_file_name;
use crate::error::{Error, ProcessResult};
use crate::log::Log;
use crate::models::{DirContext, ReferenceLink, ResolvedFile};
use crate::options::UrlOptions;
use crate::resolve::find_file;

/// Copy the referenced file below `assets_path` and return the rewritten reference.
///
/// With `use_hash` the copy is named after a digest of its contents. Otherwise the
/// original file name is kept and the directory layout of the source stylesheet relative
/// to `from`, plus the directory part of the reference, is mirrored below `assets_path`
/// so equally named assets from different folders do not collide.
///
/// Existing destination files are never overwritten. For hashed names this is always
/// correct; for path-derived names a changed source keeps the stale copy until the
/// destination is cleaned.
pub fn process_copy(url: &str, dir: &DirContext, options: &UrlOptions, log: &dyn Log) -> ProcessResult {
  if options.assets_path().is_none() && dir.from == dir.to {
    log.warn("Option `to` is required when no `assetsPath` is set, ignoring");
    return Ok(None);
  }

  let link = ReferenceLink::parse(url);
  let Some(file) = find_file(dir, &link, options.base_path.as_ref(), log)? else {
    return Ok(None);
  };

  let name = if options.use_hash {
    hashed_file_name(&file.path, &file.contents, &options.hash_options)
  } else {
    file
      .path
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_default()
  };

  let relative_dir = relative_assets_dir(dir, &link.pathname, options)?;
  let target_dir = lexical::resolve(&dir.to, &relative_dir);
  let target = target_dir.join(&name);

  install_asset(&file, &target_dir, &target)?;

  // The written reference keeps the escaping of the original.
  let public_dir = relative_assets_dir(dir, &link.raw_pathname, options)?;
  let public_name = match link.raw_pathname.rsplit(['/', '\\']).next() {
    Some(raw_name) if !options.use_hash && !raw_name.is_empty() => raw_name.to_string(),
    _ => encode_url_segment(&name),
  };

  Ok(Some(make_public_reference(&public_dir, &public_name, &link.suffix())))
}

/// Directory, relative to `to`, that receives the copied file.
fn relative_assets_dir(dir: &DirContext, pathname: &str, options: &UrlOptions) -> Result<PathBuf, Error> {
  let mut relative = PathBuf::from(options.assets_path().unwrap_or_default());
  if options.use_hash {
    return Ok(relative);
  }

  let root = lexical::absolutize(&dir.from).map_err(|err| Error::io(&dir.from, err))?;
  let document_dir =
    lexical::absolutize(dir.file_dir()).map_err(|err| Error::io(dir.file_dir(), err))?;
  relative.push(lexical::relative(&root, &document_dir));

  if let Some(parent) = Path::new(pathname).parent() {
    relative.push(parent.to_string_lossy().trim_start_matches(['/', '\\']));
  }

  Ok(lexical::normalize(&relative))
}

/// Write `file` to `target` unless something already lives there.
fn install_asset(file: &ResolvedFile, target_dir: &Path, target: &Path) -> Result<(), Error> {
  fs::create_dir_all(target_dir).map_err(|err| Error::io(target_dir, err))?;

  let mut handle = match OpenOptions::new().write(true).create_new(true).open(target) {
    Ok(handle) => handle,
    Err(err) if err.kind() == ErrorKind::AlreadyExists => {
      debug!(destination = %target.display(), "asset already present, keeping existing copy");
      return Ok(());
    }
    Err(err) => return Err(Error::io(target, err)),
  };

  handle
    .write_all(&file.contents)
    .map_err(|err| Error::io(target, err))?;
  debug!(
    source = %file.path.display(),
    destination = %target.display(),
    size = file.contents.len(),
    "copied asset"
  );

  Ok(())
}
