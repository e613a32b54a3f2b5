//! **eyemaze** grows perfect mazes: every cell of a rectangular grid is joined to every other by
//! exactly one path of passages, while rooms track which cells are already connected.

pub mod cells;
pub mod config;
pub mod coordinates;
pub mod directions;
pub mod edges;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_iterators;
pub mod rooms;
pub mod units;
pub mod utils;

pub use crate::config::{MazeConfig, MazeConfigBuilder};
pub use crate::coordinates::Coordinates;
pub use crate::directions::MazeDirection;
pub use crate::edges::EdgeKind;
pub use crate::generators::{generate, generate_with_config, ActiveCellPolicy, Generator};
pub use crate::grid::Maze;
