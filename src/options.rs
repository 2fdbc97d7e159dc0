//! Processor configuration.
//!
//! Every strategy receives the same [`UrlOptions`]. String valued settings from the
//! configuration file (`url`, `fallback`, `hashOptions.method`) are turned into tagged
//! variants once, when the options are built, so processors never re-inspect them.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::ProcessResult;
use crate::log::Log;
use crate::models::DirContext;

/// Signature shared by every processor strategy and by user callbacks.
pub type UrlProcessor =
  Arc<dyn Fn(&str, &DirContext, &UrlOptions, &dyn Log) -> ProcessResult + Send + Sync>;

/// User supplied digest function.
pub type HashFn = Arc<dyn Fn(&[u8]) -> String + Send + Sync>;

/// How a reference is rewritten.
#[derive(Clone, Default)]
pub enum UrlStrategy {
  /// Rewrite the path relative to the destination root.
  #[default]
  Rebase,
  /// Embed the file as a `data:` URI.
  Inline,
  /// Copy the file below `assets_path` and point at the copy.
  Copy,
  /// Leave every reference untouched.
  Passthrough,
  /// Delegate to a user callback.
  Custom(UrlProcessor),
}

impl UrlStrategy {
  /// Parse a strategy name as used in configuration files.
  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "rebase" => Some(Self::Rebase),
      "inline" => Some(Self::Inline),
      "copy" => Some(Self::Copy),
      "passthrough" => Some(Self::Passthrough),
      _ => None,
    }
  }

  /// Short name used in diagnostics.
  pub fn name(&self) -> &'static str {
    match self {
      Self::Rebase => "rebase",
      Self::Inline => "inline",
      Self::Copy => "copy",
      Self::Passthrough => "passthrough",
      Self::Custom(_) => "custom",
    }
  }
}

impl fmt::Debug for UrlStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Strategy used when the inline strategy rejects a file for its size.
#[derive(Clone, Default)]
pub enum Fallback {
  /// Leave the reference untouched.
  #[default]
  None,
  /// Hand the reference to the copy strategy.
  Copy,
  /// Hand the reference to a user callback.
  Custom(UrlProcessor),
}

impl fmt::Debug for Fallback {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::None => f.write_str("None"),
      Self::Copy => f.write_str("Copy"),
      Self::Custom(_) => f.write_str("Custom(..)"),
    }
  }
}

/// Textual encoding used for inlined files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodeType {
  /// `data:<mime>;base64,<payload>`
  #[default]
  Base64,
  /// `data:<mime>,<payload>` with `encodeURI` escaping.
  EncodeUri,
  /// `data:<mime>,<payload>` with `encodeURIComponent` escaping.
  EncodeUriComponent,
}

impl EncodeType {
  /// Parse the configuration spelling of an encode type.
  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "base64" => Some(Self::Base64),
      "encodeURI" => Some(Self::EncodeUri),
      "encodeURIComponent" => Some(Self::EncodeUriComponent),
      _ => None,
    }
  }
}

/// Digest algorithm used for hashed asset names.
#[derive(Clone, Default)]
pub enum HashMethod {
  /// 32-bit xxHash, lower-case hex.
  #[default]
  XxHash32,
  /// 64-bit xxHash, lower-case hex.
  XxHash64,
  /// SHA-256, URL-safe base64 without padding.
  Sha256,
  /// User supplied digest.
  Custom(HashFn),
}

impl HashMethod {
  /// Parse the configuration spelling of a hash method.
  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "xxhash32" => Some(Self::XxHash32),
      "xxhash64" => Some(Self::XxHash64),
      "sha256" => Some(Self::Sha256),
      _ => None,
    }
  }
}

impl fmt::Debug for HashMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::XxHash32 => f.write_str("XxHash32"),
      Self::XxHash64 => f.write_str("XxHash64"),
      Self::Sha256 => f.write_str("Sha256"),
      Self::Custom(_) => f.write_str("Custom(..)"),
    }
  }
}

/// Digest configuration for hashed asset names.
#[derive(Debug, Clone)]
pub struct HashOptions {
  /// Digest algorithm.
  pub method: HashMethod,
  /// Keep only the first `shrink` characters of the digest; `0` keeps all of it.
  pub shrink: usize,
  /// Prefix the digest with the original file stem (`logo_1a2b3c4d.png`).
  pub append: bool,
}

impl Default for HashOptions {
  fn default() -> Self {
    Self {
      method: HashMethod::XxHash32,
      shrink: 8,
      append: false,
    }
  }
}

/// One or more directories searched for referenced files, relative to `from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(Vec<String>);

impl BasePath {
  /// Candidate directories in search order.
  pub fn new(paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self(paths.into_iter().map(Into::into).collect())
  }

  /// Directories in the order they are searched.
  pub fn as_slice(&self) -> &[String] {
    &self.0
  }

  /// Returns `true` when no directory was configured.
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl From<&str> for BasePath {
  fn from(value: &str) -> Self {
    Self(vec![value.to_string()])
  }
}

impl From<Vec<String>> for BasePath {
  fn from(value: Vec<String>) -> Self {
    Self(value)
  }
}

/// Full option set for a processor invocation.
#[derive(Debug, Clone, Default)]
pub struct UrlOptions {
  /// Strategy applied to matching references.
  pub strategy: UrlStrategy,
  /// Only references whose pathname matches are handled by this option set.
  pub filter: Option<Regex>,
  /// Directories searched for referenced files.
  pub base_path: Option<BasePath>,
  /// Destination directory for copied assets, relative to `to`.
  pub assets_path: Option<String>,
  /// Name copied files after a digest of their contents.
  pub use_hash: bool,
  /// Digest configuration used when `use_hash` is set.
  pub hash_options: HashOptions,
  /// Inline size limit in kilobytes; `0` disables the limit.
  pub max_size: u64,
  /// Encoding for inlined files.
  pub encode_type: EncodeType,
  /// Strategy used when a file is too large to inline.
  pub fallback: Fallback,
  /// Do not warn when an SVG with a fragment is inlined whole.
  pub ignore_fragment_warning: bool,
}

impl UrlOptions {
  /// Options using the given strategy and defaults for everything else.
  pub fn with_strategy(strategy: UrlStrategy) -> Self {
    Self {
      strategy,
      ..Self::default()
    }
  }

  /// Inline size limit in bytes, if one is configured.
  pub fn max_size_bytes(&self) -> Option<u64> {
    (self.max_size > 0).then(|| self.max_size.saturating_mul(1024))
  }

  /// Destination directory, treating an empty string as unset.
  pub fn assets_path(&self) -> Option<&str> {
    self.assets_path.as_deref().filter(|path| !path.is_empty())
  }

  /// Whether this option set applies to the given pathname.
  pub fn matches(&self, pathname: &str) -> bool {
    self
      .filter
      .as_ref()
      .is_none_or(|pattern| pattern.is_match(pathname))
  }
}
