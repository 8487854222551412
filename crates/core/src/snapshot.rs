//! Renderable views of the game state.
//!
//! A snapshot is the logical union of the settled board and the falling
//! piece, resolved to cell values; building one never mutates the board.
//! Hosts keep one `RenderSnapshot` and refill it every tick.

use crate::catalog;
use crate::types::{Cell, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Full-board grid of cell values: settled cells, clear-flash rows, the
/// falling piece overlay, and the spawn-clash overlay on the final frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub cells: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
}

impl RenderSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    }

    /// Cell value at (x, y); out of range resolves to empty.
    pub fn cell(&self, x: u8, y: u8) -> Cell {
        if x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return Cell::Empty;
        }
        self.cells[y as usize][x as usize]
    }

    /// Display color at (x, y), resolved through the catalog.
    pub fn color_at(&self, x: u8, y: u8) -> Rgb {
        catalog::color_of(self.cell(x, y))
    }
}

impl Default for RenderSnapshot {
    fn default() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
        }
    }
}

/// Score and lifecycle values for status displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusSnapshot {
    pub score: u32,
    pub lines_cleared: u32,
    pub is_game_over: bool,
    pub is_paused: bool,
}
