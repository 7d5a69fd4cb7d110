use super::cell::Cell;

/// Row-major cell storage addressed by 1-based `(x, y)` coordinates.
pub struct Grid {
    data: Box<[Cell]>,
    columns: u16,
    rows: u16,
}

impl Grid {
    pub fn new(columns: u16, rows: u16, cell: Cell) -> Self {
        let data = vec![cell; columns as usize * rows as usize].into_boxed_slice();
        Grid {
            data,
            columns,
            rows,
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_in_bounds(&self, x: u16, y: u16) -> bool {
        (1..=self.columns).contains(&x) && (1..=self.rows).contains(&y)
    }

    /// Flat index of a coordinate. Panics if the coordinate is out of bounds.
    pub fn ravel_index(&self, x: u16, y: u16) -> usize {
        if !self.is_in_bounds(x, y) {
            panic!(
                "Coordinate ({}, {}) is outside the {}x{} grid",
                x, y, self.columns, self.rows
            );
        }
        (x as usize - 1) + (y as usize - 1) * self.columns as usize
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Grid {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}
