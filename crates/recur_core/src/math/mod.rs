//! Mathematical building blocks.
//!
//! - `interval`: Closed intervals with overlap, union and containment relations

pub mod interval;

pub use interval::Interval;
