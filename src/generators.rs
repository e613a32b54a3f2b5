//! Growing tree maze generation.
//!
//! Every cell starts in a room of its own. Starting from one random cell the generator keeps a
//! worklist of active cells and repeatedly resolves one unset side of an active cell:
//!
//! - a side facing out of the grid becomes a boundary,
//! - a side facing a cell of the same room becomes a wall, as a passage there would close a loop,
//! - otherwise it becomes a passage, the neighbour's room is merged into the current cell's room
//!   and the neighbour joins the worklist.
//!
//! Fully resolved cells leave the worklist. When it is empty the passages form a spanning tree.

use bit_set::BitSet;
use error_chain::bail;
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::config::{MazeConfig, MazeConfigBuilder};
use crate::coordinates::Coordinates;
use crate::directions::MazeDirection;
use crate::edges::EdgeKind;
use crate::errors::*;
use crate::grid::Maze;

/// Which active cell is grown next.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum ActiveCellPolicy {
    /// The most recently added cell: a recursive backtracker with long winding corridors.
    Newest,
    /// A uniformly random active cell, giving many short branches.
    Random,
}

/// What a single `Generator::step` did.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GrowthStep {
    /// The cell had no unset sides left and was dropped from the worklist.
    Backtracked(Coordinates),
    Boundary(Coordinates, MazeDirection),
    Wall(Coordinates, MazeDirection),
    Passage(Coordinates, MazeDirection),
    /// The worklist is empty, nothing was done.
    Complete,
}

/// One generation run. Create a new generator to restart; a partially grown maze is never reused.
#[derive(Debug)]
pub struct Generator {
    maze: Maze,
    active: Vec<usize>,
    visited: BitSet,
    policy: ActiveCellPolicy,
    rng: XorShiftRng,
    steps: usize,
}

impl Generator {
    /// Allocate the grid, put every cell in a fresh room and seed the worklist with a random cell.
    pub fn new(config: &MazeConfig) -> Generator {
        let mut rng = match config.seed() {
            Some(seed) => XorShiftRng::seed_from_u64(seed),
            None => XorShiftRng::from_entropy(),
        };

        let mut maze = Maze::new(config.width(), config.depth());
        for cell_index in 0..maze.size() {
            let room = maze.create_room(config.room_settings(), &mut rng);
            maze.initialize_cell(cell_index, room);
        }

        let start = maze.random_coordinates(&mut rng);
        let start_index = maze.coordinates_to_index(start)
            .expect("Random coordinates are inside the maze");
        let mut visited = BitSet::with_capacity(maze.size());
        let _ = visited.insert(start_index);

        debug!("Generating {} x {} maze from {} (seed: {:?}, policy: {:?})",
               config.width().0,
               config.depth().0,
               start,
               config.seed(),
               config.policy());

        Generator {
            maze,
            active: vec![start_index],
            visited,
            policy: config.policy(),
            rng,
            steps: 0,
        }
    }

    /// The maze as grown so far. It is only a spanning tree once `is_complete` is true.
    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.active.is_empty()
    }

    /// Cells still on the worklist.
    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Perform exactly one iteration of the growth loop.
    pub fn step(&mut self) -> GrowthStep {
        if self.active.is_empty() {
            return GrowthStep::Complete;
        }

        let position = match self.policy {
            ActiveCellPolicy::Newest => self.active.len() - 1,
            ActiveCellPolicy::Random => self.rng.gen_range(0..self.active.len()),
        };
        let current_index = self.active[position];
        let current = &self.maze.cells()[current_index];
        let coordinates = current.coordinates();
        self.steps += 1;

        if current.is_fully_initialized() {
            let _ = self.active.swap_remove(position);
            trace!("Backtracked from {}", coordinates);
            if self.active.is_empty() {
                self.log_completion();
            }
            return GrowthStep::Backtracked(coordinates);
        }

        let direction = current.random_uninitialized_direction(&mut self.rng);
        let current_room = current.room().expect("Every cell is initialized into a room");

        let neighbour_index = match self.maze.coordinates_to_index(coordinates + direction.to_vector()) {
            Some(index) => index,
            None => {
                self.maze.set_boundary(current_index, direction);
                trace!("Boundary on the {} side of {}", direction, coordinates);
                return GrowthStep::Boundary(coordinates, direction);
            }
        };

        let neighbour_room = self.maze.cells()[neighbour_index]
            .room()
            .expect("Every cell is initialized into a room");

        if neighbour_room == current_room {
            let _ = self.maze.create_edge_pair(current_index, direction, EdgeKind::Wall);
            trace!("Wall on the {} side of {}", direction, coordinates);
            GrowthStep::Wall(coordinates, direction)
        } else {
            let _ = self.maze.create_edge_pair(current_index, direction, EdgeKind::Passage);
            self.maze.merge_rooms(current_room, neighbour_room);
            if self.visited.insert(neighbour_index) {
                self.active.push(neighbour_index);
            }
            trace!("Passage on the {} side of {}", direction, coordinates);
            GrowthStep::Passage(coordinates, direction)
        }
    }

    /// Step until the worklist is empty.
    pub fn run(&mut self) {
        while self.step() != GrowthStep::Complete {}
    }

    /// The finished maze. Fails if the worklist is not yet empty.
    pub fn into_maze(self) -> Result<Maze> {
        if !self.active.is_empty() {
            bail!(ErrorKind::GenerationIncomplete(self.active.len()));
        }
        Ok(self.maze)
    }

    fn log_completion(&self) {
        debug!("Maze complete after {} steps: {} passages, {} walls, {} boundary sides",
               self.steps,
               self.maze.passage_count(),
               self.maze.wall_count(),
               self.maze.boundary_count());
    }
}

/// Generate a complete maze in one go.
pub fn generate_with_config(config: &MazeConfig) -> Maze {
    let mut generator = Generator::new(config);
    generator.run();
    generator.into_maze().expect("A generator that has run to completion has a maze")
}

/// Generate a complete `width` by `depth` maze. A seed makes the result reproducible.
pub fn generate(width: usize, depth: usize, seed: Option<u64>) -> Result<Maze> {
    let config = MazeConfigBuilder::new()
        .width(width)
        .depth(depth)
        .seed(seed)
        .build()?;
    Ok(generate_with_config(&config))
}
