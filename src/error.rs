//! Fatal error conditions surfaced to the caller.
//!
//! Missing files, unknown mime types and missing destinations are not errors: those are
//! reported through [`crate::Log`] and the processor yields `Ok(None)`.

use std::path::PathBuf;

/// Errors that abort processing of the current reference.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// Filesystem operation failed for a reason other than the file being absent.
  #[error("io error at {}: {source}", path.display())]
  Io {
    /// Path the operation was acting on.
    path: PathBuf,
    /// Underlying I/O error.
    source: std::io::Error,
  },

  /// Configuration file exists but could not be read.
  #[error("failed to read {}: {source}", path.display())]
  ConfigRead {
    /// Path to the configuration file.
    path: PathBuf,
    /// Underlying I/O error.
    source: std::io::Error,
  },

  /// Configuration file is not valid JSON for the option schema.
  #[error("failed to parse {}: {source}", path.display())]
  ConfigParse {
    /// Path to the configuration file.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },

  /// A `filter` option is not a valid regular expression.
  #[error("invalid filter pattern `{pattern}`: {source}")]
  InvalidFilter {
    /// Pattern as written in the configuration.
    pattern: String,
    /// Source regex error.
    source: regex::Error,
  },

  /// A `url` strategy value that is not one of the built-in strategies.
  #[error("unknown url strategy `{0}`")]
  UnknownStrategy(String),

  /// A string option holds a value outside its fixed set of names.
  #[error("unknown {key} `{value}`")]
  UnknownOption {
    /// Configuration key, as written in the file.
    key: &'static str,
    /// Rejected value.
    value: String,
  },

  /// A user supplied callback failed.
  #[error("custom url processor failed: {0}")]
  Processor(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }
}

/// Result of running a processor strategy against a single reference.
///
/// `Ok(None)` leaves the original reference untouched.
pub type ProcessResult = Result<Option<String>, Error>;
