//! Processor strategies.
//!
//! Every strategy shares the processor signature `(url, dir, options, log)` and returns
//! `Ok(None)` when the reference must stay as written.

mod copy;
mod custom;
mod inline;
mod rebase;

pub use copy::process_copy;
pub use custom::process_custom;
pub use inline::process_inline;
pub use rebase::process_rebase;
