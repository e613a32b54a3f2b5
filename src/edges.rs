use crate::coordinates::Coordinates;
use crate::directions::MazeDirection;

/// Whether two adjacent cells are connected.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum EdgeKind {
    Passage,
    Wall,
}

/// Handle of an edge in the maze's edge arena.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    /// The id of the edge registered on the other side of the same cell pair.
    /// Pairs are allocated together so they occupy an even slot and the odd slot after it.
    #[inline]
    pub fn reciprocal(self) -> EdgeId {
        EdgeId(self.0 ^ 1)
    }
}

/// A directed relation from `cell` towards `other_cell`, which lies one step in `direction`.
///
/// Edges are immutable. They are only ever created in reciprocal pairs by the maze,
/// see `Maze::create_edge_pair`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct MazeCellEdge {
    cell: Coordinates,
    other_cell: Coordinates,
    direction: MazeDirection,
    kind: EdgeKind,
}

impl MazeCellEdge {
    pub(crate) fn pair(cell: Coordinates,
                       other_cell: Coordinates,
                       direction: MazeDirection,
                       kind: EdgeKind)
                       -> (MazeCellEdge, MazeCellEdge) {
        debug_assert_eq!(cell + direction.to_vector(), other_cell);

        let forward = MazeCellEdge {
            cell,
            other_cell,
            direction,
            kind,
        };
        let backward = MazeCellEdge {
            cell: other_cell,
            other_cell: cell,
            direction: direction.opposite(),
            kind,
        };
        (forward, backward)
    }

    #[inline]
    pub fn cell(&self) -> Coordinates {
        self.cell
    }

    #[inline]
    pub fn other_cell(&self) -> Coordinates {
        self.other_cell
    }

    #[inline]
    pub fn direction(&self) -> MazeDirection {
        self.direction
    }

    #[inline]
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    #[inline]
    pub fn is_passage(&self) -> bool {
        self.kind == EdgeKind::Passage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_reciprocal() {
        let a = Coordinates::new(1, 1);
        let b = Coordinates::new(2, 1);
        let (forward, backward) = MazeCellEdge::pair(a, b, MazeDirection::East, EdgeKind::Wall);

        assert_eq!(forward.cell(), a);
        assert_eq!(forward.other_cell(), b);
        assert_eq!(forward.direction(), MazeDirection::East);
        assert_eq!(backward.cell(), b);
        assert_eq!(backward.other_cell(), a);
        assert_eq!(backward.direction(), MazeDirection::West);
        assert_eq!(forward.kind(), backward.kind());
        assert!(!forward.is_passage());
    }

    #[test]
    fn reciprocal_ids_pair_up() {
        assert_eq!(EdgeId(0).reciprocal(), EdgeId(1));
        assert_eq!(EdgeId(1).reciprocal(), EdgeId(0));
        assert_eq!(EdgeId(6).reciprocal().reciprocal(), EdgeId(6));
    }
}
