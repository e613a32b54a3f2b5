use std::convert::From;
use std::fmt;
use std::ops::Add;

use crate::units::{Depth, Width};

/// A grid position. `x` runs along the width, `z` along the depth.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Coordinates {
    pub x: i32,
    pub z: i32,
}

impl Coordinates {
    pub fn new(x: i32, z: i32) -> Coordinates {
        Coordinates { x, z }
    }

    /// Is this coordinate inside a `width` by `depth` grid: 0 <= x < width, 0 <= z < depth.
    #[inline]
    pub fn is_within(self, width: Width, depth: Depth) -> bool {
        self.x >= 0 && self.z >= 0 && (self.x as usize) < width.0 && (self.z as usize) < depth.0
    }

    /// Row-major index, rows running along x. None if outside the grid.
    #[inline]
    pub fn to_row_major_index(self, width: Width, depth: Depth) -> Option<usize> {
        if self.is_within(width, depth) {
            Some(self.z as usize * width.0 + self.x as usize)
        } else {
            None
        }
    }

    /// Inverse of `to_row_major_index`. The caller guarantees `index < width * depth`.
    #[inline]
    pub fn from_row_major_index(index: usize, width: Width) -> Coordinates {
        let x = index % width.0;
        let z = index / width.0;
        Coordinates::new(x as i32, z as i32)
    }
}

impl Add for Coordinates {
    type Output = Coordinates;

    fn add(self, other: Coordinates) -> Coordinates {
        Coordinates::new(self.x + other.x, self.z + other.z)
    }
}

impl From<(i32, i32)> for Coordinates {
    fn from(x_z_pair: (i32, i32)) -> Coordinates {
        Coordinates::new(x_z_pair.0, x_z_pair.1)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        let (w, d) = (Width(3), Depth(2));
        assert!(Coordinates::new(0, 0).is_within(w, d));
        assert!(Coordinates::new(2, 1).is_within(w, d));
        assert!(!Coordinates::new(3, 1).is_within(w, d));
        assert!(!Coordinates::new(2, 2).is_within(w, d));
        assert!(!Coordinates::new(-1, 0).is_within(w, d));
        assert!(!Coordinates::new(0, -1).is_within(w, d));
    }

    #[test]
    fn row_major_indices() {
        let (w, d) = (Width(3), Depth(3));
        let indices = (0..3)
            .flat_map(|z| (0..3).map(move |x| Coordinates::new(x, z)))
            .map(|c| c.to_row_major_index(w, d))
            .collect::<Vec<_>>();
        let expected = (0..9).map(Some).collect::<Vec<_>>();
        assert_eq!(indices, expected);

        assert_eq!(Coordinates::new(3, 0).to_row_major_index(w, d), None);
        assert_eq!(Coordinates::new(i32::MAX, i32::MAX).to_row_major_index(w, d), None);

        for i in 0..9 {
            assert_eq!(Coordinates::from_row_major_index(i, w).to_row_major_index(w, d),
                       Some(i));
        }
    }

    #[test]
    fn equality_needs_both_components() {
        assert_eq!(Coordinates::from((1, 2)), Coordinates::new(1, 2));
        assert_ne!(Coordinates::new(1, 2), Coordinates::new(2, 1));
        assert_eq!(Coordinates::new(1, 2) + Coordinates::new(-1, 1), Coordinates::new(0, 3));
    }
}
