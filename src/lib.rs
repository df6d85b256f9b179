//! Two-player chess state machine with simplified movement rules.
//!
//! A move is legal when the piece belongs to the side to move, does not land
//! on its own side, matches its kind's movement shape and, for rooks, bishops
//! and queens, has a clear path. Nothing else is checked: there is no check,
//! checkmate, stalemate or draw detection, no castling, en passant or
//! promotion, and kings can be captured like any other piece.

pub mod board;
pub mod error;
pub mod game;
pub mod moves;
pub mod notation;
pub mod path;
pub mod piece_rules;
pub mod snapshot;

pub use board::{Board, Color, Piece, PieceType, Square};
pub use error::MoveError;
pub use game::{new_game, ClickOutcome, Game, MoveRecord};
pub use snapshot::Snapshot;
