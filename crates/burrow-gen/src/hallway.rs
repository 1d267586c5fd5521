//! Greedy hallway carving between two room centers.
//!
//! The [`Carver`] walks one cell at a time from the start toward the target,
//! always taking the orthogonal neighbor that strictly shortens the Manhattan
//! distance. Each step stamps the grid: the first unclaimed cell after
//! leaving a room becomes a door, later unclaimed cells become plain
//! corridor, and the last corridor cell before entering a room is turned
//! into a door.

use burrow_core::{Coord, Grid};
use burrow_paths::{Neighbors, manhattan};

use crate::config::{HallwayConfig, Markers};

/// How a single hallway build ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarveOutcome {
    /// The target was orthogonally adjacent to the walker.
    Reached,
    /// The walker touched an existing corridor cell (merge mode only).
    Merged,
    /// No in-range neighbor existed.
    DeadEnd,
    /// The loop guard tripped and the build was abandoned.
    Stalled,
}

impl CarveOutcome {
    /// Whether the hallway ended attached to its target or a corridor.
    pub fn is_connected(self) -> bool {
        matches!(self, Self::Reached | Self::Merged)
    }
}

/// Walker state for one hallway build.
///
/// `entrance_open` and `exit_open` record which end of the hallway is still
/// waiting for its door. Both are `true` only before the first stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HallwayState {
    pub current: Coord,
    pub target: Coord,
    pub entrance_open: bool,
    pub exit_open: bool,
}

impl HallwayState {
    pub fn new(start: Coord, target: Coord) -> Self {
        Self {
            current: start,
            target,
            entrance_open: true,
            exit_open: true,
        }
    }
}

/// Counts no-progress steps and aborts a build once they exceed a limit.
///
/// One guard lives for a whole planning run and is shared by every hallway
/// built in it. The count is cleared only when the guard trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopGuard {
    stalls: u32,
    limit: u32,
}

impl Default for LoopGuard {
    fn default() -> Self {
        Self::new(3)
    }
}

impl LoopGuard {
    pub fn new(limit: u32) -> Self {
        Self { stalls: 0, limit }
    }

    /// Stalls recorded since the last trip.
    pub fn stalls(&self) -> u32 {
        self.stalls
    }

    /// Record one step. Returns `true` (and resets) when the stall count
    /// exceeds the limit.
    pub fn record(&mut self, progressed: bool) -> bool {
        if !progressed {
            self.stalls += 1;
        }
        if self.stalls > self.limit {
            self.stalls = 0;
            return true;
        }
        false
    }
}

/// Carves single hallways into a grid.
pub struct Carver {
    markers: Markers,
    allow_merge: bool,
    nbuf: Neighbors,
}

impl Carver {
    pub fn new(markers: Markers, allow_merge: bool) -> Self {
        Self {
            markers,
            allow_merge,
            nbuf: Neighbors::new(),
        }
    }

    pub fn from_config(cfg: &HallwayConfig) -> Self {
        Self::new(cfg.markers, cfg.allow_merge)
    }

    /// Build one hallway from `start` to `end`, mutating `grid` in place.
    ///
    /// Always terminates: either the target is reached, the walker merges
    /// into an existing corridor, it has nowhere to go, or `guard` trips.
    pub fn carve(
        &mut self,
        grid: &mut Grid,
        start: Coord,
        end: Coord,
        guard: &mut LoopGuard,
    ) -> CarveOutcome {
        let mut state = HallwayState::new(start, end);
        loop {
            if let Some(outcome) = self.step(grid, &mut state, guard) {
                if outcome == CarveOutcome::Stalled {
                    log::warn!(
                        "hallway {start} -> {end} stuck at {}, giving up",
                        state.current
                    );
                }
                return outcome;
            }
        }
    }

    /// Advance the walker by one cell. Returns `Some` once the build is over.
    pub fn step(
        &mut self,
        grid: &mut Grid,
        state: &mut HallwayState,
        guard: &mut LoopGuard,
    ) -> Option<CarveOutcome> {
        let m = self.markers;
        let current = state.current;
        let end = state.target;
        let candidates = self.nbuf.orthogonal(current, 1, |c| grid.contains(c));

        if candidates.contains(&end) {
            let end_is_room = grid.at(end).is_some_and(|c| m.is_room(c));
            let current_unclaimed = grid.at(current).is_some_and(|c| m.is_unclaimed(c));
            if end_is_room && current_unclaimed {
                grid.set(current, m.door_cell());
            }
            return Some(CarveOutcome::Reached);
        }

        if self.allow_merge
            && candidates
                .iter()
                .any(|&c| c != current && grid.at(c).is_some_and(|cell| m.is_hallway(cell)))
        {
            return Some(CarveOutcome::Merged);
        }

        if candidates.is_empty() {
            return Some(CarveOutcome::DeadEnd);
        }

        // Only a strict improvement moves the walker; otherwise it stays put.
        let mut next = current;
        let mut best = manhattan(current, end);
        for &c in candidates {
            let d = manhattan(c, end);
            if d < best {
                next = c;
                best = d;
            }
        }

        if grid.at(next).is_some_and(|c| m.is_unclaimed(c)) {
            if state.entrance_open {
                grid.set(next, m.door_cell());
                state.entrance_open = false;
                state.exit_open = true;
            } else {
                grid.set(next, m.hallway_cell());
            }
        }
        if grid.at(next).is_some_and(|c| m.is_room(c)) && !state.entrance_open && state.exit_open {
            grid.set(current, m.door_cell());
            state.exit_open = false;
            state.entrance_open = true;
        }

        state.current = next;

        if guard.record(next != current) {
            return Some(CarveOutcome::Stalled);
        }
        None
    }
}
