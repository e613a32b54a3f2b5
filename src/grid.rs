use std::fmt;
use std::iter::StepBy;
use std::slice;

use petgraph::graph::{NodeIndex, UnGraph};
use rand::Rng;
use smallvec::SmallVec;

use crate::cells::MazeCell;
use crate::coordinates::Coordinates;
use crate::directions::MazeDirection;
use crate::edges::{EdgeId, EdgeKind, MazeCellEdge};
use crate::grid_iterators::{CellIter, RowIter};
use crate::rooms::{MazeRoom, RoomId, RoomSettings, Rooms};
use crate::units::{Depth, EdgesCount, NodesCount, Width};

pub type CoordinatesSmallVec = SmallVec<[Coordinates; 4]>;

/// A rectangular grid of cells together with the edges and rooms created for it.
///
/// Cells, edges and rooms live in arenas owned by the maze and refer to each other through
/// `EdgeId`, `RoomId` and row-major cell indices.
#[derive(Clone)]
pub struct Maze {
    width: Width,
    depth: Depth,
    cells: Vec<MazeCell>,
    edges: Vec<MazeCellEdge>,
    rooms: Rooms,
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Maze :: width: {:?}, depth: {:?}, edges: {:?}, live rooms: {:?}",
               self.width,
               self.depth,
               self.edges.len(),
               self.rooms.live_count())
    }
}

impl Maze {
    /// An ungenerated maze: every cell exists, none has a room or any side resolved.
    /// Dimensions are validated by `MazeConfigBuilder` before this is called.
    pub(crate) fn new(width: Width, depth: Depth) -> Maze {
        let (NodesCount(nodes), EdgesCount(edges)) = graph_size(width, depth);

        let cells = (0..nodes)
            .map(|index| MazeCell::new(Coordinates::from_row_major_index(index, width)))
            .collect();
        Maze {
            width,
            depth,
            cells,
            edges: Vec::with_capacity(edges),
            rooms: Rooms::with_capacity(nodes),
        }
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn depth(&self) -> Depth {
        self.depth
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn cells(&self) -> &[MazeCell] {
        &self.cells
    }

    #[inline]
    pub fn edges(&self) -> &[MazeCellEdge] {
        &self.edges
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &MazeCellEdge {
        &self.edges[id.index()]
    }

    #[inline]
    pub fn rooms(&self) -> &Rooms {
        &self.rooms
    }

    /// Is the coordinate within this maze's dimensions.
    #[inline]
    pub fn is_valid_coordinates(&self, coordinates: Coordinates) -> bool {
        coordinates.is_within(self.width, self.depth)
    }

    /// Convert coordinates to the index of the cell in the range 0..size().
    /// Returns None if the coordinates are outside the maze.
    #[inline]
    pub fn coordinates_to_index(&self, coordinates: Coordinates) -> Option<usize> {
        coordinates.to_row_major_index(self.width, self.depth)
    }

    #[inline]
    pub fn cell(&self, coordinates: Coordinates) -> Option<&MazeCell> {
        self.coordinates_to_index(coordinates).map(|index| &self.cells[index])
    }

    /// Panics if the coordinates are outside the maze.
    pub fn get_cell(&self, coordinates: Coordinates) -> &MazeCell {
        match self.cell(coordinates) {
            Some(cell) => cell,
            None => {
                panic!("Coordinates {} are outside the {} x {} maze",
                       coordinates,
                       self.width.0,
                       self.depth.0)
            }
        }
    }

    pub fn room_of(&self, coordinates: Coordinates) -> Option<&MazeRoom> {
        self.cell(coordinates)
            .and_then(MazeCell::room)
            .and_then(|room| self.rooms.get(room))
    }

    /// Uniformly sample a coordinate inside the maze.
    pub fn random_coordinates<R: Rng>(&self, rng: &mut R) -> Coordinates {
        let index = rng.gen_range(0..self.size());
        Coordinates::from_row_major_index(index, self.width)
    }

    pub fn neighbour_at_direction(&self,
                                  coordinates: Coordinates,
                                  direction: MazeDirection)
                                  -> Option<Coordinates> {
        let neighbour = coordinates + direction.to_vector();
        if self.is_valid_coordinates(neighbour) {
            Some(neighbour)
        } else {
            None
        }
    }

    /// Cells adjacent to `coordinates` inside the maze, whether or not a passage joins them.
    pub fn neighbours(&self, coordinates: Coordinates) -> CoordinatesSmallVec {
        MazeDirection::ALL
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coordinates, *dir))
            .collect()
    }

    /// Are two cells joined by a passage.
    pub fn is_linked(&self, a: Coordinates, b: Coordinates) -> bool {
        self.cell(a).map_or(false, |cell| {
            MazeDirection::ALL.iter().any(|dir| {
                cell.get_edge(*dir)
                    .map(|edge| self.edge(edge))
                    .map_or(false, |edge| edge.is_passage() && edge.other_cell() == b)
            })
        })
    }

    #[inline]
    pub fn is_passage_at(&self, coordinates: Coordinates, direction: MazeDirection) -> bool {
        self.cell(coordinates)
            .and_then(|cell| cell.get_edge(direction))
            .map_or(false, |edge| self.edge(edge).is_passage())
    }

    /// Every cell has all of its sides resolved.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(MazeCell::is_fully_initialized)
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.width, self.depth)
    }

    #[inline]
    pub fn iter_row(&self) -> RowIter {
        RowIter::new(self.width, self.depth)
    }

    /// One item per reciprocal edge pair, seen from the cell that created it.
    pub fn iter_links(&self) -> LinksIter {
        LinksIter { edge_iter: self.edges.iter().step_by(2) }
    }

    pub fn passage_count(&self) -> usize {
        self.iter_links().filter(|&(_, _, kind)| kind == EdgeKind::Passage).count()
    }

    pub fn wall_count(&self) -> usize {
        self.iter_links().filter(|&(_, _, kind)| kind == EdgeKind::Wall).count()
    }

    pub fn boundary_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| MazeDirection::ALL.iter().filter(|dir| cell.is_boundary(**dir)).count())
            .sum()
    }

    #[inline]
    pub fn live_room_count(&self) -> usize {
        self.rooms.live_count()
    }

    /// The passages as an undirected graph. Node `i` is the cell with row-major index `i`.
    pub fn passage_graph(&self) -> UnGraph<Coordinates, ()> {
        let mut graph = UnGraph::with_capacity(self.size(), self.size().saturating_sub(1));
        for cell in &self.cells {
            let _ = graph.add_node(cell.coordinates());
        }
        for (a, b, kind) in self.iter_links() {
            if kind == EdgeKind::Passage {
                let a_index = self.coordinates_to_index(a).expect("Links give valid coordinates");
                let b_index = self.coordinates_to_index(b).expect("Links give valid coordinates");
                let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
            }
        }
        graph
    }

    pub(crate) fn initialize_cell(&mut self, cell_index: usize, room: RoomId) {
        self.cells[cell_index].initialize(self.rooms.get_mut(room), cell_index);
    }

    pub(crate) fn set_boundary(&mut self, cell_index: usize, direction: MazeDirection) {
        self.cells[cell_index].set_boundary(direction);
    }

    /// Register a `kind` edge on the `direction` side of the cell and the reciprocal edge on its
    /// neighbour. Returns the id of the edge on the originating cell.
    ///
    /// Panics if the neighbour is outside the maze or either side is already set.
    pub(crate) fn create_edge_pair(&mut self,
                                   cell_index: usize,
                                   direction: MazeDirection,
                                   kind: EdgeKind)
                                   -> EdgeId {
        let cell = self.cells[cell_index].coordinates();
        let other_cell = cell + direction.to_vector();
        let other_index = match self.coordinates_to_index(other_cell) {
            Some(index) => index,
            None => panic!("No neighbour {} of cell {} to create an edge to", direction, cell),
        };

        let (forward, backward) = MazeCellEdge::pair(cell, other_cell, direction, kind);
        let forward_id = EdgeId(self.edges.len());
        let backward_id = forward_id.reciprocal();

        self.cells[cell_index].set_edge(direction, forward_id);
        self.cells[other_index].set_edge(direction.opposite(), backward_id);
        self.edges.push(forward);
        self.edges.push(backward);
        forward_id
    }

    pub(crate) fn merge_rooms(&mut self, survivor: RoomId, absorbed: RoomId) {
        self.rooms.merge(survivor, absorbed, &mut self.cells);
    }

    pub(crate) fn create_room<R: Rng>(&mut self, palette: &[RoomSettings], rng: &mut R) -> RoomId {
        self.rooms.create_random(palette, rng)
    }
}

/// Capacity hints: one node per cell, and every interior side shared by two cells.
fn graph_size(width: Width, depth: Depth) -> (NodesCount, EdgesCount) {
    let cells_count = width.0 * depth.0;
    let interior_sides = (width.0 - 1) * depth.0 + width.0 * (depth.0 - 1);
    (NodesCount(cells_count), EdgesCount(2 * interior_sides))
}

pub struct LinksIter<'a> {
    edge_iter: StepBy<slice::Iter<'a, MazeCellEdge>>,
}

impl<'a> Iterator for LinksIter<'a> {
    type Item = (Coordinates, Coordinates, EdgeKind);

    fn next(&mut self) -> Option<Self::Item> {
        self.edge_iter.next().map(|edge| (edge.cell(), edge.other_cell(), edge.kind()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edge_iter.size_hint()
    }
}
impl<'a> ExactSizeIterator for LinksIter<'a> {} // default impl using size_hint()

impl<'a> fmt::Debug for LinksIter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LinksIter :: remaining: {:?}", self.edge_iter.size_hint().0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn maze_with_rooms(w: usize, d: usize) -> Maze {
        let mut maze = Maze::new(Width(w), Depth(d));
        let mut rng = XorShiftRng::seed_from_u64(3);
        let palette = RoomSettings::default_palette();
        for index in 0..maze.size() {
            let room = maze.create_room(&palette, &mut rng);
            maze.initialize_cell(index, room);
        }
        maze
    }

    fn gc(x: i32, z: i32) -> Coordinates {
        Coordinates::new(x, z)
    }

    #[test]
    fn cells_match_their_positions() {
        let maze = Maze::new(Width(4), Depth(3));
        assert_eq!(maze.size(), 12);
        for coord in maze.iter() {
            assert_eq!(maze.get_cell(coord).coordinates(), coord);
        }
        assert!(!maze.is_complete());
    }

    #[test]
    fn lookup_outside_the_maze() {
        let maze = Maze::new(Width(2), Depth(2));
        assert!(maze.cell(gc(2, 0)).is_none());
        assert!(maze.cell(gc(0, -1)).is_none());
        assert_eq!(maze.coordinates_to_index(gc(1, 1)), Some(3));
    }

    #[test]
    #[should_panic(expected = "outside the 2 x 2 maze")]
    fn get_cell_outside_the_maze_panics() {
        let maze = Maze::new(Width(2), Depth(2));
        maze.get_cell(gc(5, 5));
    }

    #[test]
    fn neighbour_cells() {
        let maze = Maze::new(Width(10), Depth(10));
        let check_expected_neighbours = |coord, expected: &[Coordinates]| {
            let neighbours = maze.neighbours(coord).iter().cloned().sorted().collect::<Vec<_>>();
            let expected = expected.iter().cloned().sorted().collect::<Vec<_>>();
            assert_eq!(neighbours, expected);
        };

        // corners
        check_expected_neighbours(gc(0, 0), &[gc(1, 0), gc(0, 1)]);
        check_expected_neighbours(gc(9, 0), &[gc(8, 0), gc(9, 1)]);
        check_expected_neighbours(gc(0, 9), &[gc(0, 8), gc(1, 9)]);
        check_expected_neighbours(gc(9, 9), &[gc(9, 8), gc(8, 9)]);

        // sides
        check_expected_neighbours(gc(1, 0), &[gc(0, 0), gc(1, 1), gc(2, 0)]);
        check_expected_neighbours(gc(9, 8), &[gc(9, 7), gc(9, 9), gc(8, 8)]);

        check_expected_neighbours(gc(1, 1), &[gc(0, 1), gc(1, 0), gc(2, 1), gc(1, 2)]);
    }

    #[test]
    fn neighbour_at_dir() {
        let maze = Maze::new(Width(2), Depth(2));
        assert_eq!(maze.neighbour_at_direction(gc(0, 0), MazeDirection::South), None);
        assert_eq!(maze.neighbour_at_direction(gc(0, 0), MazeDirection::West), None);
        assert_eq!(maze.neighbour_at_direction(gc(0, 0), MazeDirection::North), Some(gc(0, 1)));
        assert_eq!(maze.neighbour_at_direction(gc(0, 0), MazeDirection::East), Some(gc(1, 0)));
        assert_eq!(maze.neighbour_at_direction(gc(1, 1), MazeDirection::North), None);
        assert_eq!(maze.neighbour_at_direction(gc(1, 1), MazeDirection::West), Some(gc(0, 1)));
    }

    #[test]
    fn random_coordinates_stay_inside() {
        let maze = Maze::new(Width(4), Depth(3));
        let mut rng = XorShiftRng::seed_from_u64(11);
        let mut seen = crate::utils::fnv_hashset(maze.size());
        for _ in 0..1000 {
            let coord = maze.random_coordinates(&mut rng);
            assert!(maze.is_valid_coordinates(coord));
            let _ = seen.insert(coord);
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn edge_pairs_register_both_sides() {
        let mut maze = maze_with_rooms(3, 3);
        let a = gc(1, 1);
        let b = gc(1, 2);
        let a_index = maze.coordinates_to_index(a).unwrap();

        let id = maze.create_edge_pair(a_index, MazeDirection::North, EdgeKind::Passage);

        let forward = *maze.edge(id);
        let backward = *maze.edge(id.reciprocal());
        assert_eq!(maze.get_cell(a).get_edge(MazeDirection::North), Some(id));
        assert_eq!(maze.get_cell(b).get_edge(MazeDirection::South), Some(id.reciprocal()));
        assert_eq!((forward.cell(), forward.other_cell()), (a, b));
        assert_eq!((backward.cell(), backward.other_cell()), (b, a));
        assert_eq!(backward.kind(), EdgeKind::Passage);
        assert!(maze.is_linked(a, b));
        assert!(maze.is_linked(b, a));
        assert!(maze.is_passage_at(b, MazeDirection::South));
        assert!(!maze.is_linked(a, gc(0, 1)));

        let c_index = maze.coordinates_to_index(gc(0, 1)).unwrap();
        maze.create_edge_pair(c_index, MazeDirection::East, EdgeKind::Wall);
        assert!(!maze.is_linked(gc(0, 1), a));
        assert_eq!(maze.passage_count(), 1);
        assert_eq!(maze.wall_count(), 1);
        assert_eq!(maze.iter_links().len(), 2);
        assert_eq!(maze.iter_links().collect::<Vec<_>>(),
                   vec![(a, b, EdgeKind::Passage), (gc(0, 1), a, EdgeKind::Wall)]);
    }

    #[test]
    #[should_panic(expected = "No neighbour")]
    fn edge_pairs_need_a_neighbour() {
        let mut maze = maze_with_rooms(2, 2);
        maze.create_edge_pair(0, MazeDirection::West, EdgeKind::Wall);
    }

    #[test]
    #[should_panic(expected = "already has its")]
    fn edge_pairs_cannot_overwrite_a_side() {
        let mut maze = maze_with_rooms(2, 2);
        maze.create_edge_pair(0, MazeDirection::East, EdgeKind::Wall);
        maze.create_edge_pair(1, MazeDirection::West, EdgeKind::Passage);
    }

    #[test]
    fn boundaries_are_counted() {
        let mut maze = maze_with_rooms(1, 1);
        for dir in &MazeDirection::ALL {
            maze.set_boundary(0, *dir);
        }
        assert_eq!(maze.boundary_count(), 4);
        assert!(maze.is_complete());
        assert_eq!(maze.iter_links().len(), 0);
    }

    #[test]
    fn merging_rooms_through_the_maze() {
        let mut maze = maze_with_rooms(2, 1);
        let left = maze.get_cell(gc(0, 0)).room().unwrap();
        let right = maze.get_cell(gc(1, 0)).room().unwrap();
        assert_ne!(left, right);
        assert_eq!(maze.live_room_count(), 2);

        maze.merge_rooms(left, right);
        assert_eq!(maze.get_cell(gc(1, 0)).room(), Some(left));
        assert_eq!(maze.room_of(gc(1, 0)).unwrap().len(), 2);
        assert_eq!(maze.get_cell(gc(1, 0)).settings(),
                   Some(maze.rooms().get(left).unwrap().settings()));
        assert_eq!(maze.live_room_count(), 1);
    }

    #[test]
    fn passage_graph_nodes_follow_cell_order() {
        let mut maze = maze_with_rooms(2, 2);
        maze.create_edge_pair(0, MazeDirection::East, EdgeKind::Passage);
        maze.create_edge_pair(1, MazeDirection::North, EdgeKind::Wall);
        let graph = maze.passage_graph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph[NodeIndex::new(3)], gc(1, 1));
        assert!(graph.find_edge(NodeIndex::new(0), NodeIndex::new(1)).is_some());
    }
}
