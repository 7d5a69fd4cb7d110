use crate::maze::Maze;

/// Largest even dimension that still fits a `u16` coordinate.
pub const MAX_DIMENSION: u16 = u16::MAX - 1;
/// Smallest dimension that leaves room for the 2x2 centre room.
pub const MIN_DIMENSION: u16 = 4;

fn normalize(value: i32) -> u16 {
    let mut value = value;
    if value % 2 != 0 {
        value -= 1;
    }
    if value <= 3 {
        value = MIN_DIMENSION as i32;
    }
    value.min(MAX_DIMENSION as i32) as u16
}

/// Clamps requested dimensions to even values of at least 4.
///
/// Odd values are decremented, anything below 4 becomes 4. Inputs are never rejected;
/// values past the `u16` coordinate range saturate at [`MAX_DIMENSION`].
pub fn normalize_dimensions(rows: i32, columns: i32) -> (u16, u16) {
    (normalize(rows), normalize(columns))
}

/// Allocates a fully walled maze for the normalized dimensions.
pub fn build(rows: i32, columns: i32) -> Maze {
    let (rows, columns) = normalize_dimensions(rows, columns);
    tracing::debug!("[layout] building {}x{} grid", columns, rows);
    Maze::new(columns, rows)
}
