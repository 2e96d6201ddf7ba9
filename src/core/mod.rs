//! Core generation engine module
//!
//! Expands the matrix into configuration directories, one definition
//! file per workload, strictly in enumeration order.

mod generator;

pub use generator::*;
