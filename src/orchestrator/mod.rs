//! Build orchestration module
//!
//! Finds generated configuration directories, orders them naturally, and
//! drives the external build tool over them one at a time.

mod discovery;
mod driver;
mod natsort;
mod runner;

pub use discovery::*;
pub use driver::*;
pub use natsort::*;
pub use runner::*;
