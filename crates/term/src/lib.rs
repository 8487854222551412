//! Terminal front end for the game engine.
//!
//! Renders into a simple framebuffer that is flushed to a terminal backend,
//! keeping `core` deterministic and I/O-free. The view layer consumes the
//! core's immutable snapshots only; it never reaches into game state.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
