//! Rooms group cells that share settings. During generation a room is the set of cells already
//! joined by passages, so two cells in one room must never get another passage between them.

use rand::Rng;

use crate::cells::MazeCell;

/// Handle of a room in the `Rooms` arena.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct RoomId(pub(crate) usize);

impl RoomId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Appearance shared by every cell of a room. The values index into whatever material
/// tables the consumer of the maze keeps.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct RoomSettings {
    pub floor_material: usize,
    pub wall_material: usize,
}

impl RoomSettings {
    pub fn new(floor_material: usize, wall_material: usize) -> RoomSettings {
        RoomSettings {
            floor_material,
            wall_material,
        }
    }

    pub fn default_palette() -> Vec<RoomSettings> {
        (0..4).map(|i| RoomSettings::new(i, i)).collect()
    }
}

#[derive(Debug, Clone)]
pub struct MazeRoom {
    id: RoomId,
    settings: RoomSettings,
    cells: Vec<usize>,
    defunct: bool,
}

impl MazeRoom {
    #[inline]
    pub fn id(&self) -> RoomId {
        self.id
    }

    #[inline]
    pub fn settings(&self) -> RoomSettings {
        self.settings
    }

    /// Row-major indices of the member cells.
    #[inline]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// A defunct room was merged into another and has no members left.
    #[inline]
    pub fn is_defunct(&self) -> bool {
        self.defunct
    }

    pub(crate) fn add(&mut self, cell_index: usize) {
        assert!(!self.defunct, "Cannot add a cell to defunct room {:?}", self.id);
        self.cells.push(cell_index);
    }
}

/// Arena of every room created for one maze.
#[derive(Debug, Clone, Default)]
pub struct Rooms {
    rooms: Vec<MazeRoom>,
}

impl Rooms {
    pub fn with_capacity(capacity: usize) -> Rooms {
        Rooms { rooms: Vec::with_capacity(capacity) }
    }

    pub fn create(&mut self, settings: RoomSettings) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(MazeRoom {
            id,
            settings,
            cells: Vec::new(),
            defunct: false,
        });
        id
    }

    /// Create a room with settings picked uniformly from a non-empty palette.
    pub fn create_random<R: Rng>(&mut self, palette: &[RoomSettings], rng: &mut R) -> RoomId {
        assert!(!palette.is_empty(), "Room settings palette is empty");
        let settings = palette[rng.gen_range(0..palette.len())];
        self.create(settings)
    }

    #[inline]
    pub fn get(&self, id: RoomId) -> Option<&MazeRoom> {
        self.rooms.get(id.0)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: RoomId) -> &mut MazeRoom {
        &mut self.rooms[id.0]
    }

    /// Every room ever created, including defunct ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter_live(&self) -> impl Iterator<Item = &MazeRoom> {
        self.rooms.iter().filter(|room| !room.defunct)
    }

    pub fn live_count(&self) -> usize {
        self.iter_live().count()
    }

    /// Move every cell of `absorbed` into `survivor` and retire `absorbed`.
    ///
    /// The absorbed cells take on the survivor's settings. Merging a room with itself does nothing.
    ///
    /// Panics if either room is defunct.
    pub fn merge(&mut self, survivor: RoomId, absorbed: RoomId, cells: &mut [MazeCell]) {
        if survivor == absorbed {
            return;
        }
        assert!(!self.rooms[survivor.0].defunct,
                "Cannot merge into defunct room {:?}",
                survivor);
        assert!(!self.rooms[absorbed.0].defunct,
                "Cannot merge defunct room {:?}",
                absorbed);

        let moved = {
            let absorbed_room = &mut self.rooms[absorbed.0];
            absorbed_room.defunct = true;
            std::mem::replace(&mut absorbed_room.cells, Vec::new())
        };

        let survivor_room = &mut self.rooms[survivor.0];
        for &cell_index in &moved {
            cells[cell_index].reassign_room(survivor, survivor_room.settings);
        }
        survivor_room.cells.extend(moved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Coordinates;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn three_cells_in_own_rooms() -> (Rooms, Vec<MazeCell>, Vec<RoomId>) {
        let mut rooms = Rooms::with_capacity(3);
        let mut cells = (0..3).map(|x| MazeCell::new(Coordinates::new(x, 0))).collect::<Vec<_>>();
        let ids = (0..3)
            .map(|i| {
                let id = rooms.create(RoomSettings::new(i, 10 + i));
                cells[i].initialize(rooms.get_mut(id), i);
                id
            })
            .collect();
        (rooms, cells, ids)
    }

    #[test]
    fn initialize_registers_membership_and_settings() {
        let (rooms, cells, ids) = three_cells_in_own_rooms();
        for i in 0..3 {
            assert_eq!(cells[i].room(), Some(ids[i]));
            assert_eq!(cells[i].settings(), Some(RoomSettings::new(i, 10 + i)));
            assert_eq!(rooms.get(ids[i]).unwrap().cells(), &[i]);
        }
        assert_eq!(rooms.live_count(), 3);
    }

    #[test]
    fn merge_moves_members_and_survivor_settings_win() {
        let (mut rooms, mut cells, ids) = three_cells_in_own_rooms();

        rooms.merge(ids[0], ids[1], &mut cells);
        rooms.merge(ids[2], ids[0], &mut cells);

        let survivor = rooms.get(ids[2]).unwrap();
        let mut members = survivor.cells().to_vec();
        members.sort();
        assert_eq!(members, vec![0, 1, 2]);
        for cell in &cells {
            assert_eq!(cell.room(), Some(ids[2]));
            assert_eq!(cell.settings(), Some(RoomSettings::new(2, 12)));
        }
        assert!(rooms.get(ids[0]).unwrap().is_defunct());
        assert!(rooms.get(ids[1]).unwrap().is_defunct());
        assert!(rooms.get(ids[0]).unwrap().is_empty());
        assert_eq!(rooms.live_count(), 1);
        assert_eq!(rooms.len(), 3);
    }

    #[test]
    fn merge_with_self_is_a_no_op() {
        let (mut rooms, mut cells, ids) = three_cells_in_own_rooms();
        rooms.merge(ids[1], ids[1], &mut cells);
        assert!(!rooms.get(ids[1]).unwrap().is_defunct());
        assert_eq!(rooms.get(ids[1]).unwrap().cells(), &[1]);
        assert_eq!(cells[1].room(), Some(ids[1]));
    }

    #[test]
    #[should_panic(expected = "defunct")]
    fn merging_a_defunct_room_panics() {
        let (mut rooms, mut cells, ids) = three_cells_in_own_rooms();
        rooms.merge(ids[0], ids[1], &mut cells);
        rooms.merge(ids[2], ids[1], &mut cells);
    }

    #[test]
    fn random_rooms_draw_from_palette() {
        let palette = RoomSettings::default_palette();
        let mut rng = XorShiftRng::seed_from_u64(7);
        let mut rooms = Rooms::default();
        for _ in 0..100 {
            let id = rooms.create_random(&palette, &mut rng);
            assert!(palette.contains(&rooms.get(id).unwrap().settings()));
        }
    }
}
