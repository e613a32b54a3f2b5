use rand::Rng;

use crate::coordinates::Coordinates;
use crate::directions::MazeDirection;
use crate::edges::EdgeId;
use crate::rooms::{MazeRoom, RoomId, RoomSettings};

/// How one side of a cell has been resolved.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CellSide {
    /// An edge, passage or wall, towards the neighbour on this side.
    Edge(EdgeId),
    /// The side faces the outside of the grid.
    Boundary,
}

#[derive(Debug, Clone)]
pub struct MazeCell {
    coordinates: Coordinates,
    sides: [Option<CellSide>; MazeDirection::COUNT],
    initialized_count: usize,
    room: Option<RoomId>,
    settings: Option<RoomSettings>,
}

impl MazeCell {
    pub fn new(coordinates: Coordinates) -> MazeCell {
        MazeCell {
            coordinates,
            sides: [None; MazeDirection::COUNT],
            initialized_count: 0,
            room: None,
            settings: None,
        }
    }

    #[inline]
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    #[inline]
    pub fn room(&self) -> Option<RoomId> {
        self.room
    }

    /// The settings of the room this cell was last assigned to.
    #[inline]
    pub fn settings(&self) -> Option<RoomSettings> {
        self.settings
    }

    /// Join `room` as the member with row-major index `cell_index` and take on its settings.
    ///
    /// Initializing again into the same room does nothing.
    /// Panics if the cell already belongs to a different room.
    pub fn initialize(&mut self, room: &mut MazeRoom, cell_index: usize) {
        match self.room {
            Some(current) if current == room.id() => return,
            Some(current) => {
                panic!("Cell {} already belongs to room {:?}, cannot initialize into {:?}",
                       self.coordinates,
                       current,
                       room.id())
            }
            None => {}
        }
        room.add(cell_index);
        self.room = Some(room.id());
        self.settings = Some(room.settings());
    }

    pub(crate) fn reassign_room(&mut self, room: RoomId, settings: RoomSettings) {
        self.room = Some(room);
        self.settings = Some(settings);
    }

    #[inline]
    pub fn side(&self, direction: MazeDirection) -> Option<CellSide> {
        self.sides[direction.index()]
    }

    /// The edge registered on the given side, if any. Boundary sides have no edge.
    #[inline]
    pub fn get_edge(&self, direction: MazeDirection) -> Option<EdgeId> {
        match self.side(direction) {
            Some(CellSide::Edge(edge)) => Some(edge),
            _ => None,
        }
    }

    #[inline]
    pub fn is_boundary(&self, direction: MazeDirection) -> bool {
        self.side(direction) == Some(CellSide::Boundary)
    }

    /// Panics if the side is already set.
    pub fn set_edge(&mut self, direction: MazeDirection, edge: EdgeId) {
        self.set_side(direction, CellSide::Edge(edge));
    }

    /// Panics if the side is already set.
    pub fn set_boundary(&mut self, direction: MazeDirection) {
        self.set_side(direction, CellSide::Boundary);
    }

    fn set_side(&mut self, direction: MazeDirection, side: CellSide) {
        let slot = &mut self.sides[direction.index()];
        assert!(slot.is_none(),
                "Cell {} already has its {} side set to {:?}",
                self.coordinates,
                direction,
                slot);
        *slot = Some(side);
        self.initialized_count += 1;
    }

    #[inline]
    pub fn is_fully_initialized(&self) -> bool {
        self.initialized_count == MazeDirection::COUNT
    }

    #[inline]
    pub fn uninitialized_count(&self) -> usize {
        MazeDirection::COUNT - self.initialized_count
    }

    /// Uniformly pick one of the sides that are still unset.
    ///
    /// Panics if the cell is fully initialized.
    pub fn random_uninitialized_direction<R: Rng>(&self, rng: &mut R) -> MazeDirection {
        assert!(!self.is_fully_initialized(),
                "Cell {} has no uninitialized directions left",
                self.coordinates);
        let skips = rng.gen_range(0..self.uninitialized_count());
        self.nth_uninitialized_direction(skips)
    }

    /// Scan the sides in catalog order and return the unset one after skipping `skips` others.
    fn nth_uninitialized_direction(&self, mut skips: usize) -> MazeDirection {
        for (i, side) in self.sides.iter().enumerate() {
            if side.is_none() {
                if skips == 0 {
                    return MazeDirection::ALL[i];
                }
                skips -= 1;
            }
        }
        panic!("Cell {} has no uninitialized directions left", self.coordinates);
    }
}
