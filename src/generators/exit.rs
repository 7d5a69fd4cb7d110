use rand::Rng;

use crate::maze::{Coord, Direction, Maze};

/// The single exterior opening of a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit {
    pub cell: Coord,
    pub direction: Direction,
}

/// Cells eligible for the exit: those on the `x == columns` or `y == rows` edge.
///
/// The `x == 1` and `y == 1` edges are never candidates.
pub fn exit_candidates(maze: &Maze) -> Vec<Coord> {
    let (columns, rows) = (maze.columns(), maze.rows());
    maze.coords()
        .filter(|&(x, y)| x == columns || y == rows)
        .collect()
}

/// Picks a random far-edge cell and removes one of its exterior walls.
///
/// A cell on both far edges always loses its East wall.
pub fn carve_exit<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) -> Exit {
    let candidates = exit_candidates(maze);
    let cell = candidates[rng.random_range(0..candidates.len())];
    let direction = if cell.0 == maze.columns() {
        Direction::East
    } else {
        Direction::North
    };
    maze.open_exterior(cell, direction);
    tracing::debug!("[exit] opened {:?} wall of {:?}", direction, cell);
    Exit { cell, direction }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_exit_candidates() {
        let maze = Maze::new(4, 4);
        let candidates = exit_candidates(&maze);
        assert_eq!(candidates.len(), 7);
        assert!(candidates.iter().all(|&(x, y)| x == 4 || y == 4));
        assert!(!candidates.contains(&(1, 1)));
    }

    #[test]
    fn test_carve_exit_opens_one_far_wall() {
        for seed in 0..32 {
            let mut maze = Maze::new(6, 4);
            let mut rng = StdRng::seed_from_u64(seed);
            let exit = carve_exit(&mut maze, &mut rng);

            let openings = maze.exterior_openings().collect::<Vec<_>>();
            assert_eq!(openings, vec![(exit.cell, exit.direction)]);
            match exit.direction {
                Direction::East => assert_eq!(exit.cell.0, 6),
                Direction::North => {
                    assert_eq!(exit.cell.1, 4);
                    assert_ne!(exit.cell.0, 6);
                }
                other => panic!("Unexpected exit direction {:?}", other),
            }
        }
    }
}
