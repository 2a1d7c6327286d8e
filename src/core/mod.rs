//! Fundamental types: grid coordinates and tolerant float predicates.

pub mod coord;
pub mod numeric;

pub use coord::GridCoord;
pub use numeric::{approx_eq, approx_greater, approx_less, EPSILON};
