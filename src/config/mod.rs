//! Configuration module for membench-matrix
//!
//! Provides the CLI surface and the matrix definition that drives
//! generation.

mod matrix;
mod settings;

pub use matrix::*;
pub use settings::*;
