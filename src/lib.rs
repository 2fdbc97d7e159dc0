#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod encoding;
pub mod error;
pub mod log;
pub mod models;
pub mod options;
pub mod processor;
pub mod resolve;
pub mod strategy;

pub use error::{Error, ProcessResult};
pub use log::{CollectingLog, Log, TracingLog};
pub use models::{DirContext, ReferenceLink, ResolvedFile};
pub use options::{
  BasePath, EncodeType, Fallback, HashMethod, HashOptions, UrlOptions, UrlProcessor, UrlStrategy,
};
pub use processor::{UrlRewriter, process_url};
