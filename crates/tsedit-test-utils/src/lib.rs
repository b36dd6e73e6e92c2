//! Shared test utilities for the tsedit workspace.
//!
//! Provides a temporary game installation with an editor config directory,
//! plus canned configuration excerpts. Dev-dependency only.

pub mod fixtures;
pub mod game;

pub use game::TestGame;
