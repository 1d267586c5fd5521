//! Room connection ordering.
//!
//! The planner links every room center into one chain. Starting from the
//! first center it repeatedly picks the nearest center not yet connected
//! (Manhattan distance, earliest in the list on ties), carves a hallway to
//! it, and continues from there. Later hallways see the markers left by
//! earlier ones, so the chain may cross or merge into itself.

use burrow_core::{Coord, Grid};
use burrow_paths::manhattan;

use crate::config::HallwayConfig;
use crate::hallway::{CarveOutcome, Carver, LoopGuard};

/// One carved link of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub from: Coord,
    pub to: Coord,
    pub outcome: CarveOutcome,
}

/// Remove and return the center in `remaining` closest to `anchor`.
///
/// Only a strictly smaller distance replaces the current pick, so the
/// earliest of several equally close centers wins.
pub fn nearest_room(anchor: Coord, remaining: &mut Vec<Coord>) -> Option<Coord> {
    let mut best: Option<(usize, i32)> = None;
    for (i, &c) in remaining.iter().enumerate() {
        let d = manhattan(anchor, c);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| remaining.remove(i))
}

/// Chains room centers together with greedy hallways.
pub struct RoomConnectionPlanner {
    carver: Carver,
    stall_limit: u32,
}

impl Default for RoomConnectionPlanner {
    fn default() -> Self {
        Self::new(&HallwayConfig::default())
    }
}

impl RoomConnectionPlanner {
    pub fn new(cfg: &HallwayConfig) -> Self {
        Self {
            carver: Carver::from_config(cfg),
            stall_limit: cfg.stall_limit,
        }
    }

    /// Carve hallways linking every center in `rooms` into `grid`.
    ///
    /// The caller's list is left untouched. Fewer than two centers carve
    /// nothing. Every pair counts as done whatever its outcome; the returned
    /// connections are in carving order.
    pub fn connect(&mut self, grid: &mut Grid, rooms: &[Coord]) -> Vec<Connection> {
        let mut connections = Vec::with_capacity(rooms.len().saturating_sub(1));
        let Some((&first, rest)) = rooms.split_first() else {
            log::info!("finished all hallways: no rooms given");
            return connections;
        };

        let mut remaining = rest.to_vec();
        let mut guard = LoopGuard::new(self.stall_limit);
        let mut anchor = first;

        while let Some(target) = nearest_room(anchor, &mut remaining) {
            let outcome = self.carver.carve(grid, anchor, target, &mut guard);
            log::debug!("hallway {anchor} -> {target}: {outcome:?}");
            connections.push(Connection {
                from: anchor,
                to: target,
                outcome,
            });
            anchor = target;
        }

        log::info!(
            "finished all hallways: {} carved between {} rooms",
            connections.len(),
            rooms.len()
        );
        connections
    }
}
