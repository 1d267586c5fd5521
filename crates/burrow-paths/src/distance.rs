use burrow_core::Coord;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Coord::new(0, 0);
        let b = Coord::new(4, -3);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }
}
