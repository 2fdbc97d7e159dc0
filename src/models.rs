//! Data structures shared by the resolver and the processor strategies.

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

/// A reference string split into the parts the processors care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLink {
  /// Path component used for filesystem lookup, percent-decoded.
  pub pathname: String,
  /// Path component exactly as written in the reference.
  pub raw_pathname: String,
  /// Query suffix including the leading `?`, preserved verbatim.
  pub search: Option<String>,
  /// Fragment suffix including the leading `#`, preserved verbatim.
  pub fragment: Option<String>,
}

impl ReferenceLink {
  /// Split a raw reference into pathname, query and fragment.
  pub fn parse(reference: &str) -> Self {
    let (rest, fragment) = match reference.find('#') {
      Some(index) => (&reference[..index], Some(reference[index..].to_string())),
      None => (reference, None),
    };
    let (raw_path, search) = match rest.find('?') {
      Some(index) => (&rest[..index], Some(rest[index..].to_string())),
      None => (rest, None),
    };

    let pathname = percent_decode_str(raw_path)
      .decode_utf8()
      .map(|decoded| decoded.into_owned())
      .unwrap_or_else(|_| raw_path.to_string());

    Self {
      pathname,
      raw_pathname: raw_path.to_string(),
      search,
      fragment,
    }
  }

  /// Query and fragment joined back together, as they appeared in the reference.
  pub fn suffix(&self) -> String {
    format!(
      "{}{}",
      self.search.as_deref().unwrap_or_default(),
      self.fragment.as_deref().unwrap_or_default()
    )
  }
}

/// Directories a reference is resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirContext {
  /// Resolution root, usually the directory of the stylesheet being processed.
  pub from: PathBuf,
  /// Stylesheet currently being processed, when known.
  pub file: Option<PathBuf>,
  /// Destination root for written assets.
  pub to: PathBuf,
}

impl DirContext {
  /// Context without a known source document.
  pub fn new(from: impl Into<PathBuf>, to: impl Into<PathBuf>) -> Self {
    Self {
      from: from.into(),
      file: None,
      to: to.into(),
    }
  }

  /// Attach the path of the stylesheet being processed.
  pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
    self.file = Some(file.into());
    self
  }

  /// Directory containing the processed stylesheet, or the resolution root.
  pub fn file_dir(&self) -> &Path {
    self
      .file
      .as_deref()
      .and_then(Path::parent)
      .unwrap_or(&self.from)
  }
}

/// A located asset and its raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
  /// Absolute path of the located file.
  pub path: PathBuf,
  /// File contents.
  pub contents: Vec<u8>,
}

impl ResolvedFile {
  /// Size of the file in bytes.
  pub fn size(&self) -> u64 {
    self.contents.len() as u64
  }
}
