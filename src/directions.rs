use std::fmt;

use crate::coordinates::Coordinates;

/// One of the four sides of a square maze cell.
///
/// The discriminant order is the catalog order used when scanning a cell's sides.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub enum MazeDirection {
    North,
    East,
    South,
    West,
}

impl MazeDirection {
    pub const COUNT: usize = 4;
    pub const ALL: [MazeDirection; MazeDirection::COUNT] = [MazeDirection::North,
                                                            MazeDirection::East,
                                                            MazeDirection::South,
                                                            MazeDirection::West];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<MazeDirection> {
        MazeDirection::ALL.get(index).cloned()
    }

    #[inline]
    pub fn opposite(self) -> MazeDirection {
        match self {
            MazeDirection::North => MazeDirection::South,
            MazeDirection::East => MazeDirection::West,
            MazeDirection::South => MazeDirection::North,
            MazeDirection::West => MazeDirection::East,
        }
    }

    /// The coordinate step taken when moving one cell in this direction.
    /// North is +z, East is +x.
    #[inline]
    pub fn to_vector(self) -> Coordinates {
        match self {
            MazeDirection::North => Coordinates::new(0, 1),
            MazeDirection::East => Coordinates::new(1, 0),
            MazeDirection::South => Coordinates::new(0, -1),
            MazeDirection::West => Coordinates::new(-1, 0),
        }
    }
}

impl fmt::Display for MazeDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            MazeDirection::North => "north",
            MazeDirection::East => "east",
            MazeDirection::South => "south",
            MazeDirection::West => "west",
        };
        f.write_str(name)
    }
}
