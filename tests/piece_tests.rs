//! Rotation and collision behavior through the public facade.

use blockfall::core::piece::{collides, try_rotate};
use blockfall::core::{definition, rotate_mask, Board, FallingPiece};
use blockfall::types::{Cell, PieceKind, BOARD_HEIGHT};

#[test]
fn four_rotations_return_to_the_original_mask() {
    for kind in PieceKind::ALL {
        let mask = definition(kind).mask;
        let mut rotated = mask;
        for _ in 0..4 {
            rotated = rotate_mask(&rotated, 1);
        }
        assert_eq!(rotated, mask, "{kind:?} must have a 4-cycle");
    }
}

#[test]
fn every_mask_keeps_exactly_four_cells_through_rotation() {
    for kind in PieceKind::ALL {
        let mut mask = definition(kind).mask;
        for _ in 0..4 {
            let filled = mask.iter().filter(|&&v| v != 0).count();
            assert_eq!(filled, 4, "{kind:?}");
            mask = rotate_mask(&mask, 1);
        }
    }
}

#[test]
fn spawned_pieces_fit_an_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let piece = FallingPiece::spawn(kind);
        assert!(
            !collides(&board, &piece.mask, piece.x, piece.y),
            "{kind:?} must spawn clear of collisions"
        );
    }
}

#[test]
fn floor_and_settled_cells_both_collide() {
    let mut board = Board::new();
    let piece = FallingPiece::spawn(PieceKind::O);

    // Way past the bottom edge.
    assert!(collides(&board, &piece.mask, piece.x, BOARD_HEIGHT as i8));

    // A settled cell under the piece footprint.
    board.set(piece.x + 1, 5, Cell::Piece(PieceKind::I));
    assert!(collides(&board, &piece.mask, piece.x, 5));
}

#[test]
fn wall_rotation_succeeds_via_a_one_cell_nudge() {
    let board = Board::new();
    // Vertical I hugging the left wall; the horizontal form would poke out
    // one column, which a single nudge right recovers.
    let vertical = rotate_mask(&definition(PieceKind::I).mask, 1);
    let piece = FallingPiece {
        kind: PieceKind::I,
        x: -1,
        y: 5,
        mask: vertical,
    };
    let (_, new_x) = try_rotate(&board, &piece).expect("kick must recover this rotation");
    assert_eq!(new_x, 0);
}

#[test]
fn surrounded_piece_cannot_rotate() {
    let mut board = Board::new();
    let piece = FallingPiece::spawn(PieceKind::I);
    // Box in every cell around the horizontal bar so both the in-place
    // rotation and the single nudge fail.
    for y in 0..6i8 {
        for x in 0..10i8 {
            board.set(x, y, Cell::Piece(PieceKind::Z));
        }
    }
    for (x, y) in piece.cells() {
        board.set(x, y, Cell::Empty);
    }
    assert!(try_rotate(&board, &piece).is_none());
}
