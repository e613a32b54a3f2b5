use std::fmt;

use crate::coordinates::Coordinates;
use crate::directions::MazeDirection;
use crate::grid::Maze;

// North (+z) is drawn at the top. Any side that is not a passage is drawn as a wall, so a
// partially generated maze shows its unresolved sides closed.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const CORNER: &str = "+";
        const WALL_H: &str = "---";
        const OPEN_H: &str = "   ";
        const WALL_V: &str = "|";
        const OPEN_V: &str = " ";
        const BODY: &str = "   ";

        let open = |coord: Coordinates, dir: MazeDirection| self.is_passage_at(coord, dir);

        for row in self.iter_row().rev() {
            let mut top = String::with_capacity(row.len() * 4 + 1);
            let mut body = String::with_capacity(row.len() * 4 + 1);

            for &coord in &row {
                top.push_str(CORNER);
                top.push_str(if open(coord, MazeDirection::North) { OPEN_H } else { WALL_H });
                body.push_str(if open(coord, MazeDirection::West) { OPEN_V } else { WALL_V });
                body.push_str(BODY);
            }
            top.push_str(CORNER);
            let east_open = row.last().map_or(false, |&coord| open(coord, MazeDirection::East));
            body.push_str(if east_open { OPEN_V } else { WALL_V });

            writeln!(f, "{}", top)?;
            writeln!(f, "{}", body)?;
        }

        let mut bottom = String::new();
        for coord in self.iter_row().next().unwrap_or_else(Vec::new) {
            bottom.push_str(CORNER);
            bottom.push_str(if open(coord, MazeDirection::South) { OPEN_H } else { WALL_H });
        }
        bottom.push_str(CORNER);
        write!(f, "{}", bottom)
    }
}
