use crate::board::{Board, Square};

/// Checks that every square strictly between `from` and `to` is empty.
///
/// Only meaningful for straight or diagonal displacements; callers filter by
/// shape first. Knights never come through here.
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let step = [
        (to.row as i8 - from.row as i8).signum(),
        (to.col as i8 - from.col as i8).signum(),
    ];
    let mut n_row = from.row as i8 + step[0];
    let mut n_col = from.col as i8 + step[1];
    while (n_row, n_col) != (to.row as i8, to.col as i8) {
        match Square::try_new(n_row, n_col) {
            Some(sq) if board.get(sq).is_none() => {}
            _ => return false,
        }
        n_row += step[0];
        n_col += step[1];
    }
    true
}
