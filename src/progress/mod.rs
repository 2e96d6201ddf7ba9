//! Progress reporting module
//!
//! Numbered `[i/total]` step lines for sequential generation and build
//! drives.

mod reporter;

pub use reporter::*;
