//! A heuristic agent for playing the board game 'Connect 4'
//!
//! This agent searches the game tree to a fixed depth with minimax,
//! pruned with alpha-beta, and scores the leaves by counting and
//! weighting each player's lines.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{position::Position, search};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let position = Position::from_moves("112233")?;
//! let column = search::choose_move(&position)?;
//!
//! assert_eq!(column, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod position;

pub mod heuristic;

pub mod search;

mod test;

pub use position::{Player, Position};
pub use search::Searcher;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The line length that wins the game
pub const WIN_LENGTH: usize = 4;

/// Lookahead used when no explicit search depth is configured
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;

// a winning line must fit on the board in every direction
const_assert!(WIN_LENGTH <= WIDTH);
const_assert!(WIN_LENGTH <= HEIGHT);
