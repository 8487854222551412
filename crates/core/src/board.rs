//! Board module - the settled-cell grid.
//!
//! The board is a 10x18 grid stored as a flat array for cache locality and
//! zero-allocation row operations. Coordinates: (x, y) with x in 0..9 (left
//! to right) and y in 0..17 (top to bottom).
//!
//! The board holds only settled cells (plus, during the line-clear pause,
//! flash markers on full rows). The falling piece is never written here
//! before it locks; collision checks take the piece as a separate candidate.

use arrayvec::ArrayVec;

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board.
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Maximum rows a single lock can complete (a piece spans at most 4 rows).
/// This bounds the game's lock path, not the board: `clear_full_rows`
/// removes every full row regardless of how the board was filled.
pub const MAX_CLEARED_ROWS: usize = 4;

/// Row indices cleared by one compaction, bounded and allocation-free.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The settled-cell grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Row-major cells (index = y * WIDTH + x).
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    pub fn is_in_bounds(&self, x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8
    }

    /// Cell at (x, y), or `None` when out of bounds.
    ///
    /// Out-of-bounds access is not an error at this level; callers either
    /// treat it as a collision or skip the cell.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Bounds-checked write. Returns false (and writes nothing) out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True when (x, y) holds a settled cell. Out of bounds is not occupied.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(cell) if cell.is_settled())
    }

    /// True when (x, y) is in bounds and empty.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// A row is full iff every cell holds a settled value; flash markers and
    /// empties both disqualify it.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_settled())
    }

    /// Indices of all currently full rows, top to bottom.
    pub fn full_rows(&self) -> ClearedRows {
        let mut rows = ClearedRows::new();
        for y in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(y) {
                rows.push(y);
            }
        }
        rows
    }

    /// Paint the given rows with the clear-flash marker.
    pub fn mark_rows(&mut self, rows: &[usize]) {
        let width = BOARD_WIDTH as usize;
        for &y in rows {
            if y >= BOARD_HEIGHT as usize {
                continue;
            }
            let start = y * width;
            self.cells[start..start + width].fill(Cell::ClearFlash);
        }
    }

    /// Remove the given rows simultaneously, inserting that many empty rows
    /// at the top and preserving the relative order of all surviving rows.
    ///
    /// Total row count is invariant across this operation.
    pub fn compact_rows(&mut self, rows: &[usize]) {
        if rows.is_empty() {
            return;
        }

        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Two-pointer pass from the bottom: surviving rows slide down into
        // the write cursor, removed rows are skipped.
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                let dst = write_y * width;
                self.cells.copy_within(src..src + width, dst);
            }
        }

        // Empty rows enter at the top.
        self.cells[..write_y * width].fill(Cell::Empty);
    }

    /// Scan for full rows and compact them in one step.
    ///
    /// Returns the number of rows removed and their former indices (top to
    /// bottom). All full rows are removed at once so multi-line clears stay
    /// atomic and correctly scored.
    pub fn clear_full_rows(&mut self) -> (usize, ClearedRows) {
        let rows = self.full_rows();
        self.compact_rows(&rows);
        (rows.len(), rows)
    }

    /// Settle a piece's cells onto the board.
    ///
    /// Cells above the top edge (negative y) are silently dropped; out-of-
    /// bounds writes never panic. The caller has already validated the
    /// placement via the collision check.
    pub fn merge(&mut self, cells: &[(i8, i8)], cell: Cell) {
        for &(x, y) in cells {
            self.set(x, y, cell);
        }
    }

    /// Fill every cell with empty.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Flat view of all cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the board as small-integer tags into a 2D grid.
    pub fn write_tag_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                out[y][x] = self.cells[y * BOARD_WIDTH as usize + x].tag();
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
