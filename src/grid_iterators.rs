use std::fmt;

use crate::coordinates::Coordinates;
use crate::units::{Depth, Width};

/// Row-major walk over every coordinate of a maze, starting at (0, 0).
#[derive(Clone)]
pub struct CellIter {
    width: Width,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub(crate) fn new(width: Width, depth: Depth) -> CellIter {
        CellIter {
            width,
            current_cell_number: 0,
            cells_count: width.0 * depth.0,
        }
    }
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = Coordinates;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = Coordinates::from_row_major_index(self.current_cell_number, self.width);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// One `Vec` of coordinates per row of constant z, from the southern row (z = 0) northwards.
#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    width: Width,
    depth: Depth,
    front: usize,
    back: usize,
}

impl RowIter {
    pub(crate) fn new(width: Width, depth: Depth) -> RowIter {
        RowIter {
            width,
            depth,
            front: 0,
            back: depth.0,
        }
    }

    fn row(&self, z: usize) -> Vec<Coordinates> {
        (0..self.width.0).map(|x| Coordinates::new(x as i32, z as i32)).collect()
    }
}

impl ExactSizeIterator for RowIter {} // default impl using size_hint()
impl Iterator for RowIter {
    type Item = Vec<Coordinates>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let coords = self.row(self.front);
            self.front += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for RowIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.row(self.back))
        } else {
            None
        }
    }
}
