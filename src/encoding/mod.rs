//! Pure byte-to-text helpers used when naming and embedding assets.
//!
//! Nothing in here touches the filesystem; the strategies read the bytes and hand them
//! over together with the relevant options.

mod file;
mod hash;
pub mod mime;

pub use file::encode_file;
pub use hash::{calc_hash, hashed_file_name};
