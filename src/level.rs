use rand::rngs::StdRng;

use crate::generators::{MazeConfig, MazeResult, generate_with_rng, get_rng};

/// World-space extents of the current maze, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub half_width: f32,
    pub half_height: f32,
}

impl Bounds {
    /// `true` if the position lies strictly outside the maze.
    pub fn is_outside(&self, position: (f32, f32)) -> bool {
        let (x, y) = position;
        x > self.half_width
            || x < -self.half_width
            || y > self.half_height
            || y < -self.half_height
    }
}

/// The playable level: the current maze plus the growth rule that replaces it
/// with a larger one each time the player escapes.
pub struct Level {
    config: MazeConfig,
    rng: StdRng,
    maze: MazeResult,
    completed: u32,
}

impl Level {
    pub fn new(rows: i32, columns: i32, config: MazeConfig) -> Self {
        let mut rng = get_rng(config.seed);
        let maze = generate_with_rng(rows, columns, &config, &mut rng);
        Level {
            config,
            rng,
            maze,
            completed: 0,
        }
    }

    pub fn maze(&self) -> &MazeResult {
        &self.maze
    }

    pub fn rows(&self) -> u16 {
        self.maze.rows()
    }

    pub fn columns(&self) -> u16 {
        self.maze.columns()
    }

    /// Number of mazes the player has escaped so far.
    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn bounds(&self) -> Bounds {
        let cell_size = self.maze.cell_size();
        Bounds {
            half_width: (self.columns() / 2) as f32 * cell_size,
            half_height: (self.rows() / 2) as f32 * cell_size,
        }
    }

    /// Checks the player position against the maze bounds.
    ///
    /// When the player is outside, the maze is discarded and regenerated with
    /// both dimensions grown by the difficulty increment. Returns `true` in that
    /// case; the caller moves the player back to the origin.
    pub fn update(&mut self, player_position: (f32, f32)) -> bool {
        if !self.bounds().is_outside(player_position) {
            return false;
        }
        let rows = grow(self.rows(), self.config.difficulty);
        let columns = grow(self.columns(), self.config.difficulty);
        self.maze = generate_with_rng(rows, columns, &self.config, &mut self.rng);
        self.completed += 1;
        tracing::info!(
            "[level] escaped maze {}, regenerated at {}x{}",
            self.completed,
            self.columns(),
            self.rows()
        );
        true
    }
}

/// Requested size of the next maze; normalization clamps the result.
fn grow(dimension: u16, difficulty: i32) -> i32 {
    (dimension as i32).saturating_add(difficulty)
}
