//! Marker constants and carving options.

use burrow_core::Cell;
use std::fmt;

/// The integer markers the carver reads and writes.
///
/// Cells below `room_threshold` are unclaimed, cells above it are room
/// interior. Plain corridor cells carry `hallway`; doors carry
/// `hallway + 1`, which must equal `room_threshold` so that a door reads as
/// neither unclaimed nor room interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Markers {
    pub hallway: i32,
    pub room_threshold: i32,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            hallway: 1,
            room_threshold: 2,
        }
    }
}

impl Markers {
    /// Create a validated marker set.
    pub fn new(hallway: i32, room_threshold: i32) -> Result<Self, MarkerError> {
        let m = Self {
            hallway,
            room_threshold,
        };
        m.validate()?;
        Ok(m)
    }

    /// Check the door/threshold relationship. Useful after deserializing.
    pub fn validate(&self) -> Result<(), MarkerError> {
        match self.hallway.checked_add(1) {
            Some(door) if door == self.room_threshold => Ok(()),
            _ => Err(MarkerError::DoorOffThreshold {
                hallway: self.hallway,
                room_threshold: self.room_threshold,
            }),
        }
    }

    /// Plain corridor cell.
    pub const fn hallway_cell(&self) -> Cell {
        Cell(self.hallway)
    }

    /// Door cell.
    pub const fn door_cell(&self) -> Cell {
        Cell(self.hallway + 1)
    }

    /// Smallest value that reads as room interior.
    pub const fn room_cell(&self) -> Cell {
        Cell(self.room_threshold + 1)
    }

    #[inline]
    pub fn is_unclaimed(&self, c: Cell) -> bool {
        c.0 < self.room_threshold
    }

    #[inline]
    pub fn is_room(&self, c: Cell) -> bool {
        c.0 > self.room_threshold
    }

    #[inline]
    pub fn is_hallway(&self, c: Cell) -> bool {
        c == self.hallway_cell()
    }

    #[inline]
    pub fn is_door(&self, c: Cell) -> bool {
        c == self.door_cell()
    }
}

/// Errors from constructing a [`Markers`] set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    /// `hallway + 1` does not land on the room threshold.
    DoorOffThreshold { hallway: i32, room_threshold: i32 },
}

impl fmt::Display for MarkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DoorOffThreshold {
                hallway,
                room_threshold,
            } => write!(
                f,
                "markers: door marker {hallway}+1 must equal the room threshold {room_threshold}"
            ),
        }
    }
}

impl std::error::Error for MarkerError {}

/// Options for one hallway generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HallwayConfig {
    pub markers: Markers,
    /// Stop a hallway as soon as it touches an existing corridor cell.
    pub allow_merge: bool,
    /// Number of no-progress steps tolerated before a hallway is abandoned.
    pub stall_limit: u32,
}

impl Default for HallwayConfig {
    fn default() -> Self {
        Self {
            markers: Markers::default(),
            allow_merge: false,
            stall_limit: 3,
        }
    }
}

impl HallwayConfig {
    pub fn validate(&self) -> Result<(), MarkerError> {
        self.markers.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_markers_classify() {
        let m = Markers::default();
        assert!(m.is_unclaimed(Cell(0)));
        assert!(m.is_unclaimed(m.hallway_cell()));
        assert!(!m.is_unclaimed(m.door_cell()));
        assert!(!m.is_room(m.door_cell()));
        assert!(m.is_room(Cell(3)));
        assert_eq!(m.room_cell(), Cell(3));
    }

    #[test]
    fn door_must_sit_on_threshold() {
        assert!(Markers::new(4, 5).is_ok());
        assert_eq!(
            Markers::new(1, 4),
            Err(MarkerError::DoorOffThreshold {
                hallway: 1,
                room_threshold: 4
            })
        );
        assert!(Markers::new(i32::MAX, 0).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_from_partial_json() {
        let cfg: HallwayConfig = serde_json::from_str(r#"{"allow_merge": true}"#).unwrap();
        assert!(cfg.allow_merge);
        assert_eq!(cfg.stall_limit, 3);
        assert_eq!(cfg.markers, Markers::default());
    }
}
