//! Facade crate re-exporting the workspace members.
//!
//! Library consumers embed [`core::Game`] directly; the root binary wires
//! it to the terminal front end.

pub use blockfall_core as core;
pub use blockfall_term as term;
pub use blockfall_types as types;
