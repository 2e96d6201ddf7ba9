//! Configuration rendering
//!
//! Turns a [`Workload`](crate::workload::Workload) into its directory name
//! and its `parameters.h` definition text, and writes the result to disk.

mod definition;
mod literal;
mod writer;

pub use definition::*;
pub use literal::*;
pub use writer::*;
