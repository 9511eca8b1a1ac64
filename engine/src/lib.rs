//! Minesweeper board engine
//!
//! A single-player board: mines are placed at random on construction, every
//! reveal uncovers exactly one cell, and the game ends on the first mine or
//! once every safe cell is uncovered.
//!
//! ```rust
//! use minesweeper_engine::{Board, Pos, Reveal};
//!
//! let mut board = Board::new(9, 9, 10)?;
//!
//! match board.reveal_cell(Pos { row: 4, col: 4 })? {
//!     Reveal::Mine => println!("Boom"),
//!     Reveal::Won { .. } => println!("Cleared"),
//!     _ => {}
//! }
//!
//! let state = board.game_state();
//! println!("Game over: {}, Won: {}", state.is_over(), state.is_won());
//!
//! board.restart();
//! # Ok::<(), minesweeper_engine::BoardError>(())
//! ```
//!
//! Mine placement draws from any [`MineRng`]; pass a seeded generator to
//! [`Board::with_rng`] for reproducible layouts.

pub mod config;
mod data;
mod error;
mod logic;
mod rng;

pub use data::MINE;
pub use error::BoardError;
pub use logic::{Board, Reveal};
pub use rng::MineRng;

// Re-export common types for convenience
pub use minesweeper_common::{models::*, snapshot::*};
