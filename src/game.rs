use std::collections::HashSet;
use crate::board::{new_board, Board, Color, Piece, Square};
use crate::error::{MoveError, MoveResult};
use crate::moves::{check_move, is_legal, legal_destinations};
use crate::notation::notation_for;

/// How many moves a history panel shows by default.
pub const RECENT_HISTORY_LEN: usize = 10;

/// One applied move, enough to take it back.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub notation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(Square),
    Moved(MoveRecord),
    Cleared,
    Ignored,
}

/// A single game session: board, side to move, history and captures.
///
/// Kings can be captured and nothing ends the game; see the crate docs for
/// the rules that are deliberately left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<MoveRecord>,
    captured: Vec<Piece>,
    selected: Option<Square>,
    hints_enabled: bool,
}

pub fn new_game() -> Game {
    Game::from_board(new_board(), Color::White)
}

impl Default for Game {
    fn default() -> Self {
        new_game()
    }
}

impl Game {
    /// Starts a session from an arbitrary position with empty history.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
            history: Vec::new(),
            captured: Vec::new(),
            selected: None,
            hints_enabled: true,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn move_history(&self) -> Vec<&str> {
        self.history.iter().map(|m| m.notation.as_str()).collect()
    }

    /// The last `n` notations with their 1-based move numbers.
    pub fn recent_history(&self, n: usize) -> Vec<(usize, &str)> {
        let skip = self.history.len().saturating_sub(n);
        self.history.iter()
            .enumerate()
            .skip(skip)
            .map(|(i, m)| (i + 1, m.notation.as_str()))
            .collect()
    }

    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn captured_count(&self) -> usize {
        self.captured.len()
    }

    pub fn status_line(&self) -> String {
        format!("{}'s Turn - Select a piece to move", self.side_to_move)
    }

    pub fn check_move(&self, from: Square, to: Square) -> MoveResult<()> {
        check_move(&self.board, self.side_to_move, from, to)
    }

    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        is_legal(&self.board, self.side_to_move, from, to)
    }

    pub fn legal_destinations(&self, from: Square) -> HashSet<Square> {
        legal_destinations(&self.board, self.side_to_move, from)
    }

    /// Plays `from` -> `to` if legal. On error nothing changes.
    pub fn apply_move(&mut self, from: Square, to: Square) -> MoveResult<&MoveRecord> {
        if let Err(e) = self.check_move(from, to) {
            log::trace!("Rejected {:?} -> {:?}: {}", from, to, e);
            return Err(e);
        }
        let piece = self.board.get(from).ok_or(MoveError::EmptySquare(from))?;
        let captured = self.board.get(to);
        if let Some(c) = captured {
            self.captured.push(c);
        }
        self.board.set(to, Some(piece));
        self.board.set(from, None);

        let notation = notation_for(piece, from, to, captured);
        log::debug!("{} plays {}", self.side_to_move, notation);
        self.history.push(MoveRecord { from, to, piece, captured, notation });
        self.side_to_move = self.side_to_move.opposite();
        self.selected = None;
        Ok(&self.history[self.history.len() - 1])
    }

    /// Takes back the last move. Returns `None` when there is nothing to undo.
    ///
    /// The captured piece is removed from the captured list by its last
    /// matching occurrence, not by position.
    pub fn undo_last(&mut self) -> Option<MoveRecord> {
        let last = self.history.pop()?;
        self.board.set(last.from, Some(last.piece));
        self.board.set(last.to, last.captured);
        if let Some(c) = last.captured {
            if let Some(i) = self.captured.iter().rposition(|&p| p == c) {
                self.captured.remove(i);
            }
        }
        self.side_to_move = self.side_to_move.opposite();
        self.selected = None;
        log::debug!("Undid {}", last.notation);
        Some(last)
    }

    pub fn reset(&mut self) {
        log::info!("New game");
        *self = new_game();
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Selects `square` if it holds a piece of the side to move.
    pub fn select(&mut self, square: Square) -> bool {
        let own = square.in_bounds()
            && self.board.get(square).is_some_and(|p| p.color == self.side_to_move);
        if own {
            self.selected = Some(square);
        }
        own
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn hints_enabled(&self) -> bool {
        self.hints_enabled
    }

    pub fn toggle_hints(&mut self) -> bool {
        self.hints_enabled = !self.hints_enabled;
        self.hints_enabled
    }

    /// Destinations to highlight for the current selection.
    pub fn highlights(&self) -> HashSet<Square> {
        match self.selected {
            Some(from) if self.hints_enabled => self.legal_destinations(from),
            _ => HashSet::new(),
        }
    }

    /// Click flow of a board UI: select, reselect, move or clear.
    pub fn handle_click(&mut self, square: Square) -> ClickOutcome {
        match self.selected {
            Some(from) => {
                if self.is_legal(from, square) {
                    match self.apply_move(from, square) {
                        Ok(record) => ClickOutcome::Moved(record.clone()),
                        Err(_) => ClickOutcome::Ignored,
                    }
                } else if self.select(square) {
                    ClickOutcome::Selected(square)
                } else {
                    self.clear_selection();
                    ClickOutcome::Cleared
                }
            }
            None => {
                if self.select(square) {
                    ClickOutcome::Selected(square)
                } else {
                    ClickOutcome::Ignored
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::board::{new_board, Board, Piece, PieceType, Square};
    use crate::board::Color::{Black, White};
    use crate::error::MoveError;
    use super::{new_game, ClickOutcome, Game, RECENT_HISTORY_LEN};

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn test_new_game() {
        let game = new_game();
        assert_eq!(game.side_to_move(), White);
        assert_eq!(game.board(), &new_board());
        assert!(game.history().is_empty());
        assert!(game.captured_pieces().is_empty());
        assert_eq!(game.selected(), None);
        assert!(game.hints_enabled());
    }

    #[test]
    fn test_turn_alternation() {
        let mut game = new_game();
        let plies: [((usize, usize), (usize, usize)); 6] = [
            ((6, 4), (4, 4)), ((1, 4), (3, 4)),
            ((7, 6), (5, 5)), ((0, 1), (2, 2)),
            ((7, 5), (4, 2)), ((0, 6), (2, 5)),
        ];
        for (i, &(from, to)) in plies.iter().enumerate() {
            let expected = if i % 2 == 0 { White } else { Black };
            assert_eq!(game.side_to_move(), expected);
            assert!(game.apply_move(from.into(), to.into()).is_ok());
        }
        assert_eq!(game.side_to_move(), White);
        assert_eq!(game.move_count(), plies.len());
    }

    #[test]
    fn test_illegal_move_is_noop() {
        let mut game = new_game();
        let before = game.clone();
        assert_eq!(game.apply_move(sq(1, 4), sq(3, 4)), Err(MoveError::WrongTurn(White)));
        assert!(game.apply_move(sq(7, 0), sq(5, 0)).is_err());
        assert!(game.apply_move(sq(6, 4), sq(3, 4)).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_is_legal_does_not_mutate() {
        let mut game = new_game();
        game.select(sq(6, 4));
        let before = game.clone();
        game.is_legal(sq(6, 4), sq(4, 4));
        game.is_legal(sq(7, 0), sq(7, 7));
        game.legal_destinations(sq(7, 1));
        let _ = game.check_move(sq(1, 1), sq(2, 1));
        assert_eq!(game, before);
    }

    #[test]
    fn test_end_to_end_capture() {
        let mut game = new_game();
        assert_eq!(game.apply_move(sq(6, 4), sq(4, 4)).map(|m| m.notation.clone()), Ok("♙e2e4".to_string()));
        assert_eq!(game.apply_move(sq(1, 3), sq(3, 3)).map(|m| m.notation.clone()), Ok("♟d7d5".to_string()));
        let record = game.apply_move(sq(4, 4), sq(3, 3)).cloned();
        assert_eq!(record.map(|m| m.notation), Ok("♙e4xd5".to_string()));

        assert_eq!(game.captured_pieces().len(), 1);
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.side_to_move(), Black);
        assert_eq!(game.captured_pieces()[0].symbol(), '♟');
        assert_eq!(game.move_history(), vec!["♙e2e4", "♟d7d5", "♙e4xd5"]);
        assert_eq!(game.board().get(sq(3, 3)), Some(Piece::new(White, PieceType::Pawn)));
        assert_eq!(game.board().get(sq(4, 4)), None);
    }

    #[test]
    fn test_capture_undo_round_trip() {
        let mut game = new_game();
        game.apply_move(sq(6, 4), sq(4, 4)).unwrap();
        game.apply_move(sq(1, 3), sq(3, 3)).unwrap();
        let before = game.clone();
        let n = game.history().len();

        game.apply_move(sq(4, 4), sq(3, 3)).unwrap();
        assert_eq!(game.captured_pieces(), &[Piece::new(Black, PieceType::Pawn)]);
        assert_eq!(game.history().len(), n + 1);

        let undone = game.undo_last().unwrap();
        assert_eq!(undone.captured, Some(Piece::new(Black, PieceType::Pawn)));
        assert_eq!(game.board(), before.board());
        assert_eq!(game.captured_pieces(), before.captured_pieces());
        assert_eq!(game.side_to_move(), before.side_to_move());
        assert_eq!(game.history().len(), n);
        assert_eq!(game, before);
    }

    #[test]
    fn test_undo_empty_history_is_noop() {
        let mut game = new_game();
        assert_eq!(game.undo_last(), None);
        assert_eq!(game, new_game());
    }

    #[test]
    fn test_undo_clears_selection() {
        let mut game = new_game();
        game.apply_move(sq(6, 4), sq(4, 4)).unwrap();
        assert!(game.select(sq(1, 4)));
        game.undo_last();
        assert_eq!(game.selected(), None);
        assert_eq!(game.side_to_move(), White);
        assert_eq!(game.board(), &new_board());
    }

    #[test]
    fn test_undo_removes_last_matching_capture() {
        let mut board = Board::empty();
        board.set(sq(4, 0), Some(Piece::new(White, PieceType::Rook)));
        board.set(sq(4, 3), Some(Piece::new(Black, PieceType::Pawn)));
        board.set(sq(2, 3), Some(Piece::new(Black, PieceType::Pawn)));
        board.set(sq(0, 7), Some(Piece::new(Black, PieceType::Rook)));
        board.set(sq(6, 7), Some(Piece::new(White, PieceType::Pawn)));
        let mut game = Game::from_board(board, White);

        game.apply_move(sq(4, 0), sq(4, 3)).unwrap();
        game.apply_move(sq(0, 7), sq(6, 7)).unwrap();
        game.apply_move(sq(4, 3), sq(2, 3)).unwrap();
        let black_pawn = Piece::new(Black, PieceType::Pawn);
        let white_pawn = Piece::new(White, PieceType::Pawn);
        assert_eq!(game.captured_pieces(), &[black_pawn, white_pawn, black_pawn]);

        game.undo_last();
        assert_eq!(game.captured_pieces(), &[black_pawn, white_pawn]);
        assert_eq!(game.board().get(sq(2, 3)), Some(black_pawn));
        assert_eq!(game.board().get(sq(4, 3)), Some(Piece::new(White, PieceType::Rook)));

        game.undo_last();
        assert_eq!(game.captured_pieces(), &[black_pawn]);
        assert_eq!(game.board().get(sq(6, 7)), Some(white_pawn));
        assert_eq!(game.board().get(sq(0, 7)), Some(Piece::new(Black, PieceType::Rook)));
        assert_eq!(game.side_to_move(), Black);
    }

    #[test]
    fn test_king_can_be_captured() {
        let mut board = Board::empty();
        board.set(sq(7, 4), Some(Piece::new(White, PieceType::King)));
        board.set(sq(0, 4), Some(Piece::new(Black, PieceType::King)));
        board.set(sq(5, 4), Some(Piece::new(White, PieceType::Rook)));
        let mut game = Game::from_board(board, White);
        game.apply_move(sq(5, 4), sq(0, 4)).unwrap();
        assert_eq!(game.captured_pieces(), &[Piece::new(Black, PieceType::King)]);
        assert_eq!(game.side_to_move(), Black);
        assert!(game.board().occupied().all(|(_, p)| p.color == White));
    }

    #[test]
    fn test_reset() {
        let mut game = new_game();
        game.apply_move(sq(6, 4), sq(4, 4)).unwrap();
        game.toggle_hints();
        game.reset();
        assert_eq!(game, new_game());
    }

    #[test]
    fn test_recent_history() {
        let mut game = new_game();
        for _ in 0..6 {
            game.apply_move(sq(7, 1), sq(5, 2)).unwrap();
            game.apply_move(sq(0, 1), sq(2, 2)).unwrap();
            game.apply_move(sq(5, 2), sq(7, 1)).unwrap();
            game.apply_move(sq(2, 2), sq(0, 1)).unwrap();
        }
        assert_eq!(game.move_count(), 24);
        let recent = game.recent_history(RECENT_HISTORY_LEN);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0], (15, "♘c3b1"));
        assert_eq!(recent[9], (24, "♞c6b8"));
        assert!(new_game().recent_history(RECENT_HISTORY_LEN).is_empty());
    }

    #[test]
    fn test_status_line() {
        let mut game = new_game();
        assert_eq!(game.status_line(), "White's Turn - Select a piece to move");
        game.apply_move(sq(6, 0), sq(5, 0)).unwrap();
        assert_eq!(game.status_line(), "Black's Turn - Select a piece to move");
    }

    #[test]
    fn test_click_flow() {
        let mut game = new_game();
        assert_eq!(game.handle_click(sq(1, 4)), ClickOutcome::Ignored);
        assert_eq!(game.handle_click(sq(4, 4)), ClickOutcome::Ignored);
        assert_eq!(game.handle_click(sq(6, 4)), ClickOutcome::Selected(sq(6, 4)));
        assert_eq!(game.highlights().len(), 2);
        assert_eq!(game.handle_click(sq(7, 6)), ClickOutcome::Selected(sq(7, 6)));
        assert_eq!(game.handle_click(sq(3, 3)), ClickOutcome::Cleared);
        assert_eq!(game.selected(), None);

        game.handle_click(sq(6, 4));
        match game.handle_click(sq(4, 4)) {
            ClickOutcome::Moved(record) => assert_eq!(record.notation, "♙e2e4"),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(game.selected(), None);
        assert_eq!(game.side_to_move(), Black);
    }

    #[test]
    fn test_hints_toggle() {
        let mut game = new_game();
        game.select(sq(7, 1));
        assert_eq!(game.highlights().len(), 2);
        assert!(!game.toggle_hints());
        assert!(game.highlights().is_empty());
        assert!(game.toggle_hints());
        game.clear_selection();
        assert!(game.highlights().is_empty());
    }
}
