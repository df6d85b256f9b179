use crate::board::{to_string, Color};
use crate::game::Game;

/// Read-only view of a game for display layers.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Snapshot {
    pub board: String,
    pub side_to_move: Color,
    pub status: String,
    pub move_count: usize,
    pub captured_count: usize,
    pub captured: Vec<char>,
    pub history: Vec<String>,
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        Snapshot {
            board: to_string(game.board()),
            side_to_move: game.side_to_move(),
            status: game.status_line(),
            move_count: game.move_count(),
            captured_count: game.captured_count(),
            captured: game.captured_pieces().iter().map(|p| p.symbol()).collect(),
            history: game.move_history().into_iter().map(String::from).collect(),
        }
    }
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
