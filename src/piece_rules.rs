//! Movement shapes of each piece kind, independent of what stands in between.

use crate::board::{Color, Piece, PieceType};

const START_RANK_WHITE: usize = 6;
const START_RANK_BLACK: usize = 1;

/// Row step a pawn of `color` takes when advancing.
pub fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

pub fn pawn_start_rank(color: Color) -> usize {
    match color {
        Color::White => START_RANK_WHITE,
        Color::Black => START_RANK_BLACK,
    }
}

/// True for kinds whose path must be checked square by square.
pub fn slides(kind: PieceType) -> bool {
    matches!(kind, PieceType::Rook | PieceType::Bishop | PieceType::Queen)
}

fn straight(row_delta: i8, col_delta: i8) -> bool {
    (row_delta == 0) ^ (col_delta == 0)
}

fn diagonal(row_delta: i8, col_delta: i8) -> bool {
    row_delta != 0 && row_delta.abs() == col_delta.abs()
}

/// Whether the displacement matches the piece's movement pattern.
///
/// `origin_row` is only consulted for the pawn's double step. The double step
/// does not look at the square it jumps over.
pub fn geometry_legal(piece: Piece, origin_row: usize, row_delta: i8, col_delta: i8, destination_occupied: bool) -> bool {
    match piece.kind {
        PieceType::Pawn => {
            let dir = pawn_direction(piece.color);
            if col_delta == 0 {
                !destination_occupied && (row_delta == dir
                    || (row_delta == 2 * dir && origin_row == pawn_start_rank(piece.color)))
            } else {
                col_delta.abs() == 1 && row_delta == dir && destination_occupied
            }
        }
        PieceType::Knight => {
            let (r, c) = (row_delta.abs(), col_delta.abs());
            (r, c) == (2, 1) || (r, c) == (1, 2)
        }
        PieceType::King => {
            (row_delta, col_delta) != (0, 0) && row_delta.abs() <= 1 && col_delta.abs() <= 1
        }
        PieceType::Rook => straight(row_delta, col_delta),
        PieceType::Bishop => diagonal(row_delta, col_delta),
        PieceType::Queen => straight(row_delta, col_delta) || diagonal(row_delta, col_delta),
    }
}
