//! Helpers for resolving and normalising asset paths.
//!
//! This module splits the responsibilities into focused submodules so that the logic for
//! filtering references, expanding candidate file locations, lexical path arithmetic and
//! building the public reference can be tested independently.

mod bundle;
mod candidates;
mod filters;
pub mod lexical;

pub use bundle::{encode_url_segment, make_public_reference, to_url_path};
pub use candidates::generate_file_candidates;
pub use filters::should_ignore_reference;
