use rand::Rng;

use super::Unvisited;
use crate::maze::{Coord, Maze, get_neighbors};

/// Iterative randomized backtracker.
///
/// Starting from `start`, repeatedly carves into a random unvisited neighbor,
/// backtracking along the path stack when the current cell is boxed in. Every
/// cell leaves `unvisited` through exactly one wall removal, so the carved
/// passages form a spanning tree over the cells reachable from `start`.
pub fn carve_passages<R: Rng + ?Sized>(
    maze: &mut Maze,
    start: Coord,
    unvisited: &mut Unvisited,
    rng: &mut R,
) {
    unvisited.visit(maze.ravel_index(start));

    let mut current = start;
    let mut stack: Vec<Coord> = Vec::new();
    let mut carved = 0usize;

    loop {
        let neighbors = get_neighbors(current, maze)
            .filter(|&c| unvisited.contains(maze.ravel_index(c)))
            .collect::<Vec<_>>();

        if !neighbors.is_empty() {
            let next = neighbors[rng.random_range(0..neighbors.len())];
            stack.push(current);
            maze.remove_wall(current, next);
            unvisited.visit(maze.ravel_index(next));
            tracing::trace!("[backtrack] carved {:?} -> {:?}", current, next);
            carved += 1;
            current = next;
        } else if let Some(previous) = stack.pop() {
            current = previous;
        } else {
            break;
        }
    }

    debug_assert_eq!(unvisited.remaining(), 0, "Unreachable cells left unvisited");
    tracing::debug!("[backtrack] carved {} passages from {:?}", carved, start);
}
