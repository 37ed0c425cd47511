//! Board and turn engine for a narde-style backgammon game.
//!
//! Fifteen checkers per side start stacked on opposite ends of a 24-cell
//! track. [`backgammon::Game`] ties the board, dice and rules together for an
//! input layer; [`engine`] drives random self-play on top of it.

pub mod backgammon;
pub mod config;
pub mod engine;
pub mod error;
pub mod misc;

pub use error::{Error, IllegalMove, Result};
