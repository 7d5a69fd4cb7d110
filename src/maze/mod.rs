pub mod cell;
mod grid;

pub use cell::{Cell, Direction};
use grid::Grid;

/// 1-based `(x, y)` cell coordinate.
pub type Coord = (u16, u16);

/// A rectangular grid of cells with per-cell wall flags.
pub struct Maze {
    grid: Grid,
}

impl Maze {
    /// Creates a maze of `columns x rows` cells, every wall intact.
    pub fn new(columns: u16, rows: u16) -> Self {
        Maze {
            grid: Grid::new(columns, rows, Cell::CLOSED),
        }
    }

    /// Returns the number of rows (extent along `y`).
    pub fn rows(&self) -> u16 {
        self.grid.rows()
    }

    /// Returns the number of columns (extent along `x`).
    pub fn columns(&self) -> u16 {
        self.grid.columns()
    }

    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.grid.is_in_bounds(coord.0, coord.1)
    }

    /// Flat row-major index of a coordinate, `(x-1) + (y-1)*columns`.
    pub fn ravel_index(&self, coord: Coord) -> usize {
        self.grid.ravel_index(coord.0, coord.1)
    }

    /// All coordinates, `x` outer and `y` inner.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let (columns, rows) = (self.columns(), self.rows());
        (1..=columns).flat_map(move |x| (1..=rows).map(move |y| (x, y)))
    }

    /// The in-bounds cell next to `coord` on the given side, if any.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (dx, dy) = direction.offset();
        let x = coord.0.checked_add_signed(dx)?;
        let y = coord.1.checked_add_signed(dy)?;
        self.is_in_bounds((x, y)).then_some((x, y))
    }

    /// Which side of `from` the adjacent cell `to` lies on.
    pub fn direction_between(&self, from: Coord, to: Coord) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.neighbor(from, d) == Some(to))
    }

    /// Removes the wall shared by two adjacent cells, updating both sides together.
    ///
    /// # Returns
    /// `true` if a wall was removed, `false` if the passage was already open
    ///
    /// # Panics
    /// * If either coordinate is out of bounds
    /// * If the cells are not 4-adjacent
    pub fn remove_wall(&mut self, from: Coord, to: Coord) -> bool {
        let direction = self.direction_between(from, to).unwrap_or_else(|| {
            panic!(
                "Cannot remove wall between non-adjacent cells {:?} and {:?}",
                from, to
            )
        });
        let removed = self.grid[from].open(direction);
        let removed_other = self.grid[to].open(direction.opposite());
        debug_assert_eq!(removed, removed_other, "Wall flags out of sync");
        removed
    }

    /// Removes an outward-facing wall of a boundary cell.
    ///
    /// # Panics
    /// * If the wall on that side faces another cell rather than the outside
    pub fn open_exterior(&mut self, coord: Coord, direction: Direction) -> bool {
        if self.neighbor(coord, direction).is_some() {
            panic!(
                "The {:?} wall of {:?} is not an exterior wall",
                direction, coord
            );
        }
        self.grid[coord].open(direction)
    }

    /// Open passages between adjacent cells, each reported once from its west/south end.
    pub fn passages(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.coords().flat_map(move |coord| {
            [Direction::East, Direction::North]
                .into_iter()
                .filter_map(move |d| {
                    let other = self.neighbor(coord, d)?;
                    (!self[coord].has_wall(d)).then_some((coord, other))
                })
        })
    }

    /// Outward-facing walls that have been removed.
    pub fn exterior_openings(&self) -> impl Iterator<Item = (Coord, Direction)> + '_ {
        self.coords().flat_map(move |coord| {
            Direction::ALL.into_iter().filter_map(move |d| {
                (self.neighbor(coord, d).is_none() && !self[coord].has_wall(d))
                    .then_some((coord, d))
            })
        })
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

/// Get neighbors of a cell, in `Direction::ALL` order.
pub fn get_neighbors(coord: Coord, maze: &Maze) -> impl Iterator<Item = Coord> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |d| maze.neighbor(coord, d))
}
