//! An agent for playing the board game 'Game of the Amazons'
//!
//! Each side owns four queens. A turn moves one queen like a chess queen and then
//! throws a spear from its new square along another unblocked queen line, blocking
//! that square for the rest of the game. A side that cannot move loses.
//!
//! # Basic Usage
//!
//! ```
//! use amazons_ai::{board::Board, piece::Piece, search::Searcher};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new();
//! board.play_checked("d1-d4(d1)".parse()?)?;
//!
//! let mut searcher = Searcher::new(&board);
//! let reply = searcher.find_move(Piece::Black).ok_or("no legal move")?;
//!
//! assert!(board.is_legal_move(&reply));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod piece;

pub mod square;

pub mod moves;

pub mod board;

pub mod search;

pub mod perft;


pub use board::Board;
pub use error::AmazonsError;
pub use moves::Move;
pub use piece::Piece;
pub use square::Square;

/// The width and height of the game board in squares
pub const SIZE: usize = 10;

/// The number of queens each side owns
pub const QUEENS: usize = 4;

// square indices are stored in a u8
const_assert!(SIZE * SIZE <= u8::MAX as usize);
// both armies must fit on the board with room to move
const_assert!(2 * QUEENS < SIZE * SIZE);
