//! Hallway generation for burrow levels.
//!
//! Rooms are placed on a [`Grid`](burrow_core::Grid) by the caller. This
//! crate links them:
//!
//! - [`RoomConnectionPlanner`] orders the room centers into a single chain by
//!   repeatedly picking the nearest unconnected room.
//! - [`Carver`] walks greedily from one center toward the next, stamping
//!   corridor and door markers into the grid as it goes.
//! - [`Layout`] reads and writes the small ASCII format used for hand-drawn
//!   maps and test fixtures.

pub mod config;
pub mod hallway;
pub mod layout;
pub mod planner;

pub use config::{HallwayConfig, MarkerError, Markers};
pub use hallway::{CarveOutcome, Carver, HallwayState, LoopGuard};
pub use layout::{Layout, LayoutError, render};
pub use planner::{Connection, RoomConnectionPlanner, nearest_room};
