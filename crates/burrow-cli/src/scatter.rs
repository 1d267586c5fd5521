//! Random rectangular rooms for the demo.

use burrow_core::{Coord, Grid, Rect};
use burrow_gen::Markers;
use rand::Rng;

const MIN_SIDE: i32 = 2;
const MAX_SIDE: i32 = 6;

/// Stamp `count` random rooms into `grid` and return their centers in
/// placement order. Rooms may overlap.
pub fn scatter_rooms(
    grid: &mut Grid,
    count: usize,
    markers: &Markers,
    rng: &mut impl Rng,
) -> Vec<Coord> {
    let mut centers = Vec::with_capacity(count);
    if grid.bounds().is_empty() {
        return centers;
    }
    for _ in 0..count {
        let h = rng.random_range(MIN_SIDE..=MAX_SIDE).min(grid.rows());
        let w = rng.random_range(MIN_SIDE..=MAX_SIDE).min(grid.cols());
        let row = rng.random_range(0..=grid.rows() - h);
        let col = rng.random_range(0..=grid.cols() - w);
        let rect = Rect::new(row, col, row + h, col + w);
        grid.fill_rect(rect, markers.room_cell());
        centers.push(rect.center());
    }
    centers
}
