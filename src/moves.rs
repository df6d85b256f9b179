use std::collections::HashSet;
use crate::board::{Board, Color, Square};
use crate::error::{MoveError, MoveResult};
use crate::path::path_clear;
use crate::piece_rules::{geometry_legal, slides};

/// Reason-coded legality check for moving the piece on `from` to `to` with
/// `color` to play. Does not look at king safety.
pub fn check_move(board: &Board, color: Color, from: Square, to: Square) -> MoveResult<()> {
    for sq in [to, from] {
        if !sq.in_bounds() {
            return Err(MoveError::OutOfBounds { row: sq.row, col: sq.col });
        }
    }
    let piece = board.get(from).ok_or(MoveError::EmptySquare(from))?;
    if piece.color != color {
        return Err(MoveError::WrongTurn(color));
    }
    let target = board.get(to);
    if target.is_some_and(|t| t.color == piece.color) {
        return Err(MoveError::SelfCapture(to));
    }

    let row_delta = to.row as i8 - from.row as i8;
    let col_delta = to.col as i8 - from.col as i8;
    if !geometry_legal(piece, from.row, row_delta, col_delta, target.is_some()) {
        return Err(MoveError::ShapeInvalid { from, to });
    }
    if slides(piece.kind) && !path_clear(board, from, to) {
        return Err(MoveError::Blocked { from, to });
    }
    Ok(())
}

pub fn is_legal(board: &Board, color: Color, from: Square, to: Square) -> bool {
    check_move(board, color, from, to).is_ok()
}

/// All squares the piece on `from` may move to. Empty for empty squares and
/// for pieces of the side not to move.
pub fn legal_destinations(board: &Board, color: Color, from: Square) -> HashSet<Square> {
    Square::all()
        .filter(|&to| is_legal(board, color, from, to))
        .collect()
}
