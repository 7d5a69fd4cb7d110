use rand::Rng;

use super::Unvisited;
use crate::maze::{Coord, Maze};

/// The four cells of the 2x2 room straddling the grid centre.
pub fn centre_cells(maze: &Maze) -> [Coord; 4] {
    let cx = maze.columns() / 2;
    let cy = maze.rows() / 2;
    [(cx, cy + 1), (cx + 1, cy + 1), (cx, cy), (cx + 1, cy)]
}

/// Opens the centre room and picks one of its cells as the carving start.
///
/// The three other room cells are marked visited: they are already connected
/// to the start through the open room.
pub fn carve_centre<R: Rng + ?Sized>(
    maze: &mut Maze,
    unvisited: &mut Unvisited,
    rng: &mut R,
) -> Coord {
    let [top_left, top_right, bottom_left, bottom_right] = centre_cells(maze);
    maze.remove_wall(top_left, top_right);
    maze.remove_wall(bottom_left, bottom_right);
    maze.remove_wall(bottom_left, top_left);
    maze.remove_wall(bottom_right, top_right);

    let cells = [top_left, top_right, bottom_left, bottom_right];
    let start = cells[rng.random_range(0..cells.len())];
    for cell in cells {
        if cell != start {
            unvisited.visit(maze.ravel_index(cell));
        }
    }
    tracing::debug!("[centre] opened room at {:?}, start {:?}", cells, start);
    start
}
