#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An integer grid coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const ORIGIN: GridPos = GridPos { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Manhattan (sum-of-absolute-differences) distance between grid positions.
pub fn manhattan(a: GridPos, b: GridPos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = GridPos::new(2, -3);
        let b = GridPos::new(-1, 4);
        assert_eq!(manhattan(a, b), 10);
        assert_eq!(manhattan(b, a), 10);
    }

    #[test]
    fn manhattan_of_equal_points_is_zero() {
        let p = GridPos::new(7, 7);
        assert_eq!(manhattan(p, p), 0);
    }
}
