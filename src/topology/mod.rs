//! Hardware topology modeling
//!
//! Describes the compute domains a benchmark run may use: groups of
//! processing units together with the non-volatile memory devices
//! attached to each group.

mod model;

pub use model::*;
