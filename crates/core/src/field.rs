//! Field module - manages the settled-tile grid
//!
//! The field is a `cols x rows` grid where each cell is either empty or holds
//! a settled tile. Uses a flat boolean array for cache locality.
//! Coordinates: (x, y) where x ranges 0..cols (left to right), y ranges
//! 0..rows (top to bottom).

use blockfall_types::Pos;

/// The settled-tile grid - runtime-sized, flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    cols: i32,
    rows: i32,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<bool>,
}

impl Field {
    /// Create a new empty field.
    /// Dimensions are validated by `BoardEngine::new`; this constructor
    /// clamps to at least 1x1 so a raw `Field` is always well-formed.
    pub fn new(cols: i32, rows: i32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cells: vec![false; (cols * rows) as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.cols || y < 0 || y >= self.rows {
            return None;
        }
        Some((y * self.cols + x) as usize)
    }

    /// Get width of the field
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Get height of the field
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || x >= self.cols || y < 0 || y >= self.rows
    }

    /// Check if position is occupied (within bounds and settled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.index(x, y), Some(idx) if self.cells[idx])
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        matches!(self.index(x, y), Some(idx) if !self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, occupied: bool) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Settle a group of tiles at their absolute positions
    /// Returns true if successful, false if any cell is out of bounds or occupied
    pub fn settle(&mut self, positions: &[Pos]) -> bool {
        // First check if all positions are valid
        for &(x, y) in positions {
            if !self.is_valid(x, y) {
                return false;
            }
        }

        // Then settle all cells
        for &(x, y) in positions {
            self.set(x, y, true);
        }

        true
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i32) -> bool {
        if y < 0 || y >= self.rows {
            return false;
        }
        let start = (y * self.cols) as usize;
        let end = start + self.cols as usize;
        self.cells[start..end].iter().all(|&cell| cell)
    }

    /// Clear all full rows, shifting surviving rows above each cleared row
    /// down by one. Returns the cleared row indices in ascending order.
    /// Uses a two-pointer pass over the flat array with a single write cursor.
    pub fn clear_full_rows(&mut self) -> Vec<i32> {
        let mut cleared_rows = Vec::new();
        let width = self.cols as usize;
        let mut write_y = self.rows;

        // Scan from bottom to top
        for read_y in (0..self.rows).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                // This row survives, move it down to the write position
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y as usize * width;
                    let dst_start = write_y as usize * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Blank the vacated rows at the top
        for cell in &mut self.cells[..write_y as usize * width] {
            *cell = false;
        }

        // Scan collected rows bottom-to-top; report ascending
        cleared_rows.reverse();
        cleared_rows
    }

    /// Iterate over all settled positions, row-major order
    pub fn occupied_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell)
            .map(move |(idx, _)| ((idx as i32) % cols, (idx as i32) / cols))
    }

    /// Count of settled tiles
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}
