//! Workload configuration space
//!
//! Dimension value types, the [`Workload`] point type, and the lazy
//! cross-product enumerator over all dimensions.

mod dimensions;
mod space;

pub use dimensions::*;
pub(crate) use dimensions::ensure_unique;
pub use space::*;
