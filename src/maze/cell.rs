/// One of the four sides of a cell. North is increasing `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    West,
    East,
    North,
    South,
}

impl Direction {
    /// Order in which neighbors are evaluated.
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    /// Grid offset `(dx, dy)` of the neighbor on this side.
    pub fn offset(self) -> (i16, i16) {
        match self {
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::North => (0, 1),
            Direction::South => (0, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A unit grid location with four independently toggleable walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: [bool; 4],
}

impl Cell {
    /// A cell with all four walls intact.
    pub const CLOSED: Cell = Cell { walls: [true; 4] };

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    /// Removes the wall on the given side. Returns `false` if it was already open.
    pub fn open(&mut self, direction: Direction) -> bool {
        std::mem::replace(&mut self.walls[direction.index()], false)
    }

    /// Wall flags in West, East, North, South order.
    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    pub fn is_closed(&self) -> bool {
        self.walls.iter().all(|&w| w)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::CLOSED
    }
}
