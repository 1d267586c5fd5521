//! Hand-drawn maps as text.
//!
//! A [`Layout`] parses an ASCII picture into a [`Grid`] plus the list of room
//! centers marked in it. Lines are separated by `'\n'`, must all have the
//! same width, and use this alphabet:
//!
//! | Char | Cell |
//! |---|---|
//! | `.` | unclaimed (0) |
//! | `#` | room interior |
//! | `@` | room interior, recorded as a room center |
//! | `=` | plain corridor |
//! | `+` | door |
//!
//! [`render`] prints a grid back in the same alphabet.

use burrow_core::{Cell, Coord, Grid};
use std::fmt;

use crate::config::Markers;

/// A parsed map and its room centers in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: Grid,
    pub centers: Vec<Coord>,
}

impl Layout {
    /// Parse a layout drawn with the module's alphabet.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines.
    pub fn parse(s: &str, markers: &Markers) -> Result<Self, LayoutError> {
        let s = s.trim();
        let mut cells = Vec::with_capacity(s.len());
        let mut centers = Vec::new();
        let mut cols: Option<i32> = None;
        let mut rows = 0;

        for (row, line) in s.lines().enumerate() {
            let row = row as i32;
            let mut width = 0;
            for (col, ch) in line.chars().enumerate() {
                let pos = Coord::new(row, col as i32);
                let cell = match ch {
                    '.' => Cell(0),
                    '#' => markers.room_cell(),
                    '@' => {
                        centers.push(pos);
                        markers.room_cell()
                    }
                    '=' => markers.hallway_cell(),
                    '+' => markers.door_cell(),
                    _ => return Err(LayoutError::InvalidChar { ch, pos }),
                };
                cells.push(cell);
                width += 1;
            }
            match cols {
                Some(w) if w != width => {
                    return Err(LayoutError::InconsistentWidth {
                        row,
                        expected: w,
                        found: width,
                    });
                }
                Some(_) => {}
                None => cols = Some(width),
            }
            rows += 1;
        }

        let cols = cols.unwrap_or(0);
        let grid = Grid::from_cells(rows, cols, cells).ok_or(LayoutError::InconsistentWidth {
            row: 0,
            expected: cols,
            found: 0,
        })?;
        Ok(Self { grid, centers })
    }
}

/// Print `grid` in the layout alphabet, one line per row.
///
/// Room interior prints as `#`; centers are not distinguished. Values that
/// are neither corridor, door nor room print as `.`.
pub fn render(grid: &Grid, markers: &Markers) -> String {
    let mut out = String::with_capacity(grid.cells().len() + grid.rows() as usize);
    for (c, cell) in grid.iter() {
        if c.col == 0 && c.row > 0 {
            out.push('\n');
        }
        let ch = if markers.is_door(cell) {
            '+'
        } else if markers.is_hallway(cell) {
            '='
        } else if markers.is_room(cell) {
            '#'
        } else {
            '.'
        };
        out.push(ch);
    }
    out
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A line's width differs from the first line.
    InconsistentWidth { row: i32, expected: i32, found: i32 },
    /// A character outside the layout alphabet was found.
    InvalidChar { ch: char, pos: Coord },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout: line {row} is {found} wide, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "layout contains invalid char \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "\
##..
#@.+
..==";

    #[test]
    fn parse_size_and_centers() {
        let m = Markers::default();
        let l = Layout::parse(MAP, &m).unwrap();
        assert_eq!(l.grid.rows(), 3);
        assert_eq!(l.grid.cols(), 4);
        assert_eq!(l.centers, vec![Coord::new(1, 1)]);
        assert_eq!(l.grid.at(Coord::new(1, 3)), Some(m.door_cell()));
        assert_eq!(l.grid.at(Coord::new(2, 2)), Some(m.hallway_cell()));
        assert_eq!(l.grid.at(Coord::new(0, 0)), Some(m.room_cell()));
    }

    #[test]
    fn centers_in_reading_order() {
        let l = Layout::parse("..@\n@..\n.@.", &Markers::default()).unwrap();
        assert_eq!(
            l.centers,
            vec![Coord::new(0, 2), Coord::new(1, 0), Coord::new(2, 1)]
        );
    }

    #[test]
    fn render_matches_source_except_centers() {
        let m = Markers::default();
        let l = Layout::parse(MAP, &m).unwrap();
        assert_eq!(render(&l.grid, &m), MAP.replace('@', "#"));
    }

    #[test]
    fn render_uses_custom_markers() {
        let m = Markers::new(6, 7).unwrap();
        let l = Layout::parse("#+=.", &m).unwrap();
        assert_eq!(l.grid.cells(), &[Cell(8), Cell(7), Cell(6), Cell(0)]);
        assert_eq!(render(&l.grid, &m), "#+=.");
    }

    #[test]
    fn inconsistent_width_error() {
        let err = Layout::parse("...\n....", &Markers::default()).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn invalid_char_error() {
        let err = Layout::parse("..\n.x", &Markers::default()).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidChar {
                ch: 'x',
                pos: Coord::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn empty_text_is_empty_grid() {
        let l = Layout::parse("", &Markers::default()).unwrap();
        assert_eq!(l.grid.rows(), 0);
        assert!(l.centers.is_empty());
        assert_eq!(render(&l.grid, &Markers::default()), "");
    }
}
