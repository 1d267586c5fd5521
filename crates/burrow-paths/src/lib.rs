//! Neighbor enumeration and the distance metric used by the burrow
//! generators.
//!
//! - [`Neighbors`] lists the orthogonal and diagonal candidates around a
//!   coordinate and drops the ones a predicate rejects (usually "outside the
//!   grid").
//! - [`manhattan`] is the L1 distance between two coordinates.

mod distance;
mod neighbors;

pub use distance::manhattan;
pub use neighbors::Neighbors;
