//! An integer-cell grid for map representation.
//!
//! [`Cell`] is a newtype over `i32`. [`Grid`] owns a fixed `rows × cols`
//! buffer of cells stored row-major. Reads and writes outside the grid are
//! rejected instead of panicking, so every write that lands is in-bounds.

use crate::geom::{Coord, Rect};

/// A map cell value, wrapping an `i32`.
///
/// Different integer values represent different markers (empty, corridor,
/// door, room interior) as determined by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub i32);

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl From<Cell> for i32 {
    fn from(c: Cell) -> Self {
        c.0
    }
}

/// A fixed-size 2D grid of [`Cell`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Create a new grid filled with `Cell(0)`.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            cells: vec![Cell::default(); rows as usize * cols as usize],
            rows,
            cols,
        }
    }

    /// Build a grid from row-major cells. Returns `None` if `cells` does not
    /// hold exactly `rows * cols` values.
    pub fn from_cells(rows: i32, cols: i32, cells: Vec<Cell>) -> Option<Self> {
        if rows < 0 || cols < 0 || cells.len() != rows as usize * cols as usize {
            return None;
        }
        Some(Self { cells, rows, cols })
    }

    /// Returns the bounding rectangle `[0, rows) × [0, cols)`.
    pub fn bounds(&self) -> Rect {
        Rect::sized(self.rows, self.cols)
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether the grid contains the given coordinate.
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds().contains(c)
    }

    fn index(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Get the cell at a coordinate, or `None` if out of bounds.
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Set the cell at a coordinate. Does nothing and returns `false` if out
    /// of bounds.
    pub fn set(&mut self, c: Coord, cell: Cell) -> bool {
        match self.index(c) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Fill the entire grid with the given cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Fill the part of `rect` that lies inside the grid.
    pub fn fill_rect(&mut self, rect: Rect, cell: Cell) {
        for c in rect.intersect(self.bounds()) {
            self.set(c, cell);
        }
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Coord, Cell) -> bool) -> usize {
        self.iter().filter(|&(c, cell)| f(c, cell)).count()
    }

    /// Iterate over `(Coord, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Coord, Cell)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// The row-major cell buffer.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let g = Grid::new(5, 10);
        assert_eq!(g.rows(), 5);
        assert_eq!(g.cols(), 10);
        assert_eq!(g.bounds(), Rect::sized(5, 10));
        assert_eq!(g.cells().len(), 50);
    }

    #[test]
    fn test_set_and_at() {
        let mut g = Grid::new(4, 4);
        let c = Coord::new(3, 2);
        assert!(g.set(c, Cell(42)));
        assert_eq!(g.at(c), Some(Cell(42)));
        assert_eq!(g.at(Coord::new(0, 0)), Some(Cell(0)));
        assert_eq!(g.at(Coord::new(10, 10)), None);
    }

    #[test]
    fn test_out_of_bounds_write_is_rejected() {
        let mut g = Grid::new(3, 3);
        assert!(!g.set(Coord::new(-1, 0), Cell(7)));
        assert!(!g.set(Coord::new(0, 3), Cell(7)));
        assert_eq!(g.count(Cell(7)), 0);
    }

    #[test]
    fn test_row_major_layout() {
        let mut g = Grid::new(2, 3);
        g.set(Coord::new(1, 0), Cell(5));
        assert_eq!(g.cells()[3], Cell(5));
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[3], (Coord::new(1, 0), Cell(5)));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut g = Grid::new(5, 5);
        g.fill_rect(Rect::new(3, 3, 8, 8), Cell(3));
        assert_eq!(g.count(Cell(3)), 4);
        assert_eq!(g.count_fn(|c, cell| cell == Cell(3) && c.row >= 3), 4);
    }

    #[test]
    fn test_from_cells_checks_len() {
        assert!(Grid::from_cells(2, 2, vec![Cell(0); 3]).is_none());
        let g = Grid::from_cells(1, 2, vec![Cell(1), Cell(2)]).unwrap();
        assert_eq!(g.at(Coord::new(0, 1)), Some(Cell(2)));
    }

    #[test]
    fn test_from_cells_large_dims_do_not_overflow() {
        assert!(Grid::from_cells(70_000, 70_000, Vec::new()).is_none());
        assert!(Grid::from_cells(i32::MAX, 2, vec![Cell(0); 2]).is_none());
    }
}
