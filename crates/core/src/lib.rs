//! Core game logic: board, piece catalog, rotation, collision, scoring,
//! and the game loop.
//!
//! This crate is free of I/O and timing sources. The host owns the clock
//! and feeds elapsed time into [`Game::tick`]; rendering reads immutable
//! snapshots. Everything here is deterministic given a seed, which is what
//! makes the scenario tests possible.

pub use blockfall_types as types;

pub mod board;
pub mod catalog;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use board::{Board, ClearedRows, MAX_CLEARED_ROWS};
pub use catalog::{definition, spawn_anchor, PieceDef, ShapeMask, CATALOG};
pub use game::{Game, Phase};
pub use piece::{rotate_mask, FallingPiece, PieceCells};
pub use rng::SimpleRng;
pub use scoring::{line_clear_score, next_fall_interval, DOWN_MOVE_SCORE};
pub use snapshot::{RenderSnapshot, StatusSnapshot};
