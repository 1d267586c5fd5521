//! **burrow-core** — coordinates and map storage shared by the burrow crates.
//!
//! A level is a fixed-size [`Grid`] of integer [`Cell`] markers addressed by
//! row/column [`Coord`]s. What each marker value means is decided by the
//! caller; the hallway carver in `burrow-gen` reads them through its marker
//! configuration.

pub mod geom;
pub mod grid;

pub use geom::{Coord, Rect};
pub use grid::{Cell, Grid};
