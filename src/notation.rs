use crate::board::{Piece, Square};

/// Display token for a move, e.g. `♙e2e4` or `♙e4xd5`.
pub fn notation_for(piece: Piece, from: Square, to: Square, captured: Option<Piece>) -> String {
    let capture = if captured.is_some() { "x" } else { "" };
    format!("{}{}{}{}", piece.symbol(), from, capture, to)
}
