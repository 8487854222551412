//! Piece catalog - the immutable table of the seven piece definitions.
//!
//! Each definition carries the kind, its display color, and one canonical
//! orientation as a 4x4 mask (values are 0 or the kind's id). Rotations are
//! derived from the canonical mask by the permutation in [`crate::piece`].

use crate::piece::FallingPiece;
use crate::rng::SimpleRng;
use crate::types::{Cell, PieceKind, Rgb, BOARD_WIDTH};

/// Flattened 4x4 shape mask, row-major.
pub type ShapeMask = [u8; 16];

/// One immutable piece definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    pub kind: PieceKind,
    pub color: Rgb,
    pub mask: ShapeMask,
}

/// Background color for empty and undefined cell tags.
pub const BACKGROUND: Rgb = Rgb::new(255, 255, 255);

/// Flash color for rows being cleared (tag 8).
pub const CLEAR_FLASH_COLOR: Rgb = Rgb::new(255, 215, 0);

/// Color for the blocked spawn overlay on game over (tag 9).
pub const SPAWN_CLASH_COLOR: Rgb = Rgb::new(105, 105, 105);

#[rustfmt::skip]
pub const CATALOG: [PieceDef; 7] = [
    PieceDef {
        kind: PieceKind::S,
        color: Rgb::new(0x32, 0xCD, 0x32),
        mask: [
            0, 1, 1, 0,
            1, 1, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ],
    },
    PieceDef {
        kind: PieceKind::Z,
        color: Rgb::new(0xFF, 0x00, 0x00),
        mask: [
            2, 2, 0, 0,
            0, 2, 2, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ],
    },
    PieceDef {
        kind: PieceKind::I,
        color: Rgb::new(0x00, 0x8B, 0x8B),
        mask: [
            0, 0, 0, 0,
            3, 3, 3, 3,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ],
    },
    PieceDef {
        kind: PieceKind::T,
        color: Rgb::new(0xFF, 0x00, 0xFF),
        mask: [
            0, 4, 0, 0,
            4, 4, 4, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ],
    },
    PieceDef {
        kind: PieceKind::O,
        color: Rgb::new(0x2F, 0x4F, 0x4F),
        mask: [
            0, 5, 5, 0,
            0, 5, 5, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ],
    },
    PieceDef {
        kind: PieceKind::J,
        color: Rgb::new(0x00, 0x00, 0x8B),
        mask: [
            6, 0, 0, 0,
            6, 6, 6, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ],
    },
    PieceDef {
        kind: PieceKind::L,
        color: Rgb::new(0xFF, 0xA5, 0x00),
        mask: [
            0, 0, 7, 0,
            7, 7, 7, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ],
    },
];

/// Definition for a kind (ids are index + 1 in the catalog).
pub fn definition(kind: PieceKind) -> &'static PieceDef {
    &CATALOG[(kind.id() - 1) as usize]
}

/// Anchor for freshly spawned pieces: horizontally centered, with the mask's
/// first occupied row on row 0 (negative y for masks with empty top rows, so
/// tall pieces enter the visible area progressively).
pub fn spawn_anchor(kind: PieceKind) -> (i8, i8) {
    let x = (BOARD_WIDTH as i8 - 4) / 2;
    let mask = definition(kind).mask;
    let leading_empty_rows = (0..4)
        .take_while(|&row| mask[row * 4..row * 4 + 4].iter().all(|&v| v == 0))
        .count();
    (x, -(leading_empty_rows as i8))
}

/// Draw a uniform-random kind and return a fresh piece at the spawn anchor.
pub fn spawn(rng: &mut SimpleRng) -> FallingPiece {
    FallingPiece::spawn(rng.next_kind())
}

/// Display color for any cell value.
///
/// Covers all settled kinds plus the clear-flash and spawn-clash markers;
/// empty (and anything undefined, via `Cell::from_tag`) resolves to the
/// background color, never to a failure.
pub fn color_of(cell: Cell) -> Rgb {
    match cell {
        Cell::Empty => BACKGROUND,
        Cell::Piece(kind) => definition(kind).color,
        Cell::ClearFlash => CLEAR_FLASH_COLOR,
        Cell::SpawnClash => SPAWN_CLASH_COLOR,
    }
}

/// Tag-indexed color lookup for hosts that work with raw tag grids.
pub fn color_for_tag(tag: u8) -> Rgb {
    color_of(Cell::from_tag(tag))
}
