use burrow_core::Coord;

/// Cached neighbor computation helper.
///
/// Provides methods for enumerating orthogonal (4-way) or all (8-way)
/// neighbors of a coordinate, filtered by a predicate. Candidates come back
/// in a fixed order: N, S, W, E, then NW, NE, SW, SE.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the orthogonal neighbors of `c` at distance `step`, keeping only
    /// those for which `keep` returns `true`.
    pub fn orthogonal(&mut self, c: Coord, step: i32, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.collect(&c.orthogonal(step), keep)
    }

    /// Return all eight neighbors of `c` at distance `step`, keeping only
    /// those for which `keep` returns `true`.
    pub fn all(&mut self, c: Coord, step: i32, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.collect(&c.neighbors(step), keep)
    }

    fn collect(&mut self, candidates: &[Coord], keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        self.buf.extend(candidates.iter().copied().filter(|&n| keep(n)));
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burrow_core::Rect;

    #[test]
    fn corner_drops_out_of_range() {
        let bounds = Rect::sized(5, 5);
        let mut nb = Neighbors::new();
        let got = nb.orthogonal(Coord::new(0, 0), 1, |c| bounds.contains(c));
        assert_eq!(got, &[Coord::new(1, 0), Coord::new(0, 1)]);
    }

    #[test]
    fn interior_keeps_order() {
        let bounds = Rect::sized(5, 5);
        let mut nb = Neighbors::new();
        let got = nb.all(Coord::new(2, 2), 1, |c| bounds.contains(c)).to_vec();
        assert_eq!(got.len(), 8);
        assert_eq!(got[0], Coord::new(1, 2));
        assert_eq!(got[3], Coord::new(2, 3));
        assert_eq!(got[4], Coord::new(1, 1));
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let bounds = Rect::sized(1, 1);
        let mut nb = Neighbors::new();
        assert!(nb.all(Coord::new(0, 0), 1, |c| bounds.contains(c)).is_empty());
    }

    #[test]
    fn step_size_reaches_further() {
        let bounds = Rect::sized(5, 5);
        let mut nb = Neighbors::new();
        let got = nb.orthogonal(Coord::new(2, 2), 2, |c| bounds.contains(c));
        assert_eq!(
            got,
            &[Coord::new(0, 2), Coord::new(4, 2), Coord::new(2, 0), Coord::new(2, 4)]
        );
    }
}
