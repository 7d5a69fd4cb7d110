use rand::{Rng, SeedableRng, rngs::StdRng};

mod backtrack;
mod centre;
mod exit;
mod layout;

pub use backtrack::carve_passages;
pub use centre::{carve_centre, centre_cells};
pub use exit::{Exit, carve_exit, exit_candidates};
pub use layout::{MAX_DIMENSION, MIN_DIMENSION, build, normalize_dimensions};

use crate::maze::{Cell, Coord, Maze};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    /// Added to both dimensions each time the player leaves the maze
    pub difficulty: i32,
    /// Pre-carve the open 2x2 room at the grid centre
    pub centre_room: bool,
    /// Fixed seed for reproducible mazes, `None` to seed from the OS
    pub seed: Option<u64>,
    /// World-space edge length of one cell
    pub cell_size: f32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            difficulty: 2,
            centre_room: true,
            seed: None,
            cell_size: 1.0,
        }
    }
}

impl MazeConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Cells not yet incorporated into the spanning tree, scoped to one generation.
pub struct Unvisited {
    mask: Box<[bool]>,
    remaining: usize,
}

impl Unvisited {
    pub fn new(len: usize) -> Self {
        Unvisited {
            mask: vec![true; len].into_boxed_slice(),
            remaining: len,
        }
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.mask[idx]
    }

    /// Marks a cell visited. Returns `false` if it already was.
    pub fn visit(&mut self, idx: usize) -> bool {
        let was_unvisited = std::mem::replace(&mut self.mask[idx], false);
        if was_unvisited {
            self.remaining -= 1;
        }
        was_unvisited
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

/// A finished maze: per-cell wall state plus where carving started and the exit.
pub struct MazeResult {
    maze: Maze,
    start: Coord,
    exit: Exit,
    cell_size: f32,
}

impl MazeResult {
    pub fn rows(&self) -> u16 {
        self.maze.rows()
    }

    pub fn columns(&self) -> u16 {
        self.maze.columns()
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// The cell the backtracker started from.
    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn exit(&self) -> Exit {
        self.exit
    }

    pub fn cell(&self, coord: Coord) -> &Cell {
        &self.maze[coord]
    }

    /// Every cell with its West, East, North, South wall flags.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, [bool; 4])> + '_ {
        self.maze.coords().map(|c| (c, self.maze[c].walls()))
    }

    /// World-space edge length of one cell, taken from the generating config.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// World-space centre of a cell, with the maze centred on the origin.
    pub fn world_position(&self, coord: Coord) -> (f32, f32) {
        let cell_size = self.cell_size;
        let axis = |index: u16, extent: u16| {
            let origin = -(cell_size * (extent / 2) as f32) + cell_size / 2.0;
            origin + (index - 1) as f32 * cell_size
        };
        (axis(coord.0, self.columns()), axis(coord.1, self.rows()))
    }
}

/// Generates a maze from `config`, seeding a fresh generator from `config.seed`.
pub fn generate(rows: i32, columns: i32, config: &MazeConfig) -> MazeResult {
    let mut rng = get_rng(config.seed);
    generate_with_rng(rows, columns, config, &mut rng)
}

/// Runs the full pipeline: layout, centre room, backtracker, exit.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rows: i32,
    columns: i32,
    config: &MazeConfig,
    rng: &mut R,
) -> MazeResult {
    let mut maze = build(rows, columns);
    let mut unvisited = Unvisited::new(maze.len());

    let start = if config.centre_room {
        carve_centre(&mut maze, &mut unvisited, rng)
    } else {
        (
            rng.random_range(1..=maze.columns()),
            rng.random_range(1..=maze.rows()),
        )
    };
    carve_passages(&mut maze, start, &mut unvisited, rng);
    let exit = carve_exit(&mut maze, rng);

    tracing::info!(
        "Maze generation finished: {}x{}, start {:?}, exit {:?}",
        maze.columns(),
        maze.rows(),
        start,
        exit
    );
    MazeResult {
        maze,
        start,
        exit,
        cell_size: config.cell_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Direction, get_neighbors};
    use std::collections::VecDeque;

    /// Number of cells reachable from `from` through open passages.
    fn reachable(maze: &Maze, from: Coord) -> usize {
        let mut seen = vec![false; maze.len()];
        let mut queue = VecDeque::from([from]);
        seen[maze.ravel_index(from)] = true;
        let mut count = 0;
        while let Some(cell) = queue.pop_front() {
            count += 1;
            for next in get_neighbors(cell, maze) {
                let dir = maze.direction_between(cell, next).unwrap();
                let idx = maze.ravel_index(next);
                if !maze[cell].has_wall(dir) && !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(next);
                }
            }
        }
        count
    }

    fn assert_valid(result: &MazeResult, centre_room: bool) {
        let maze = result.maze();
        let n = maze.len();
        assert_eq!(reachable(maze, (1, 1)), n);
        // Spanning tree, plus one extra edge closing the centre room cycle
        let expected = if centre_room { n } else { n - 1 };
        assert_eq!(maze.passages().count(), expected);

        let openings = maze.exterior_openings().collect::<Vec<_>>();
        assert_eq!(openings, vec![(result.exit().cell, result.exit().direction)]);
    }

    #[test]
    fn test_generate_4x4() {
        let config = MazeConfig::default().with_seed(1);
        let result = generate(4, 4, &config);
        assert_eq!(result.cells().count(), 16);
        assert_valid(&result, true);

        let exit = result.exit();
        assert!(exit.cell.0 == 4 || exit.cell.1 == 4);
        assert!(centre_cells(result.maze()).contains(&result.start()));
    }

    #[test]
    fn test_generate_normalizes_dimensions() {
        let result = generate(5, 7, &MazeConfig::default().with_seed(9));
        assert_eq!((result.rows(), result.columns()), (4, 6));
        assert_valid(&result, true);
    }

    #[test]
    fn test_generate_keeps_large_dimensions() {
        let result = generate(1000, 7, &MazeConfig::default().with_seed(8));
        assert_eq!((result.rows(), result.columns()), (1000, 6));
        assert_valid(&result, true);
    }

    #[test]
    fn test_centre_room_is_open_for_any_seed() {
        for seed in 0..20 {
            let result = generate(12, 8, &MazeConfig::default().with_seed(seed));
            let [tl, tr, bl, br] = centre_cells(result.maze());
            assert!(!result.cell(tl).has_wall(Direction::East));
            assert!(!result.cell(tl).has_wall(Direction::South));
            assert!(!result.cell(br).has_wall(Direction::West));
            assert!(!result.cell(br).has_wall(Direction::North));
            assert!(!result.cell(tr).has_wall(Direction::South));
            assert!(!result.cell(bl).has_wall(Direction::North));
            assert_valid(&result, true);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let config = MazeConfig::default().with_seed(42);
        let a = generate(20, 30, &config).cells().collect::<Vec<_>>();
        let b = generate(20, 30, &config).cells().collect::<Vec<_>>();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate(20, 20, &MazeConfig::default().with_seed(1));
        let b = generate(20, 20, &MazeConfig::default().with_seed(2));
        assert_valid(&a, true);
        assert_valid(&b, true);
        assert_ne!(a.cells().collect::<Vec<_>>(), b.cells().collect::<Vec<_>>());
    }

    #[test]
    fn test_without_centre_room() {
        let config = MazeConfig {
            centre_room: false,
            ..MazeConfig::default().with_seed(4)
        };
        let result = generate(10, 10, &config);
        assert_valid(&result, false);
    }

    #[test]
    fn test_unseeded_generation_is_valid() {
        let result = generate(16, 16, &MazeConfig::default());
        assert_valid(&result, true);
    }

    #[test]
    fn test_world_position() {
        let result = generate(4, 6, &MazeConfig::default().with_seed(0));
        assert_eq!(result.world_position((1, 1)), (-2.5, -1.5));
        assert_eq!(result.world_position((6, 4)), (2.5, 1.5));

        let config = MazeConfig {
            cell_size: 2.0,
            ..MazeConfig::default().with_seed(0)
        };
        let result = generate(4, 6, &config);
        assert_eq!(result.cell_size(), 2.0);
        assert_eq!(result.world_position((3, 2)), (-1.0, -1.0));
    }

    #[test]
    fn test_unvisited() {
        let mut unvisited = Unvisited::new(3);
        assert!(unvisited.visit(1));
        assert!(!unvisited.visit(1));
        assert!(!unvisited.contains(1));
        assert!(unvisited.contains(0));
        assert_eq!(unvisited.remaining(), 2);
    }
}
