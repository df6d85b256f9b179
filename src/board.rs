use std::fmt;
use serde::Serializer;

pub const WIDTH: usize = 8;
pub const HEIGHT: usize = 8;

const FILES: &[u8; WIDTH] = b"abcdefgh";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Color {
    White, Black
}

impl Color {
    pub fn opposite(&self) -> Color {
        if self == &Color::White {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType
}

impl Piece {
    pub fn new(color: Color, kind: PieceType) -> Self {
        Piece { color, kind }
    }

    /// Unicode glyph used for notation and the captured-pieces list.
    pub fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceType::King) => '♔',
            (Color::White, PieceType::Queen) => '♕',
            (Color::White, PieceType::Rook) => '♖',
            (Color::White, PieceType::Bishop) => '♗',
            (Color::White, PieceType::Knight) => '♘',
            (Color::White, PieceType::Pawn) => '♙',
            (Color::Black, PieceType::King) => '♚',
            (Color::Black, PieceType::Queen) => '♛',
            (Color::Black, PieceType::Rook) => '♜',
            (Color::Black, PieceType::Bishop) => '♝',
            (Color::Black, PieceType::Knight) => '♞',
            (Color::Black, PieceType::Pawn) => '♟',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Piece> {
        let (color, kind) = match symbol {
            '♔' => (Color::White, PieceType::King),
            '♕' => (Color::White, PieceType::Queen),
            '♖' => (Color::White, PieceType::Rook),
            '♗' => (Color::White, PieceType::Bishop),
            '♘' => (Color::White, PieceType::Knight),
            '♙' => (Color::White, PieceType::Pawn),
            '♚' => (Color::Black, PieceType::King),
            '♛' => (Color::Black, PieceType::Queen),
            '♜' => (Color::Black, PieceType::Rook),
            '♝' => (Color::Black, PieceType::Bishop),
            '♞' => (Color::Black, PieceType::Knight),
            '♟' => (Color::Black, PieceType::Pawn),
            _ => return None,
        };
        Some(Piece::new(color, kind))
    }

    fn icon(&self) -> char {
        let c = match self.kind {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Pawn => 'P',
        };
        if self.color == Color::White { c } else { c.to_ascii_lowercase() }
    }
}

/// Board coordinate. Row 0 is Black's back rank, row 7 is White's.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self {
        Square { row, col }
    }

    pub fn try_new(row: i8, col: i8) -> Option<Square> {
        (row >= 0 && col >= 0 && row < HEIGHT as i8 && col < WIDTH as i8)
            .then(|| Square::new(row as usize, col as usize))
    }

    pub fn in_bounds(&self) -> bool {
        self.row < HEIGHT && self.col < WIDTH
    }

    pub fn file(&self) -> char {
        FILES[self.col] as char
    }

    pub fn rank(&self) -> usize {
        HEIGHT - self.row
    }

    pub fn to_algebraic(&self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?.to_digit(10)? as usize;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !(1..=HEIGHT).contains(&rank) {
            return None;
        }
        Some(Square::new(HEIGHT - rank, file as usize - 'a' as usize))
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..HEIGHT).flat_map(|r| (0..WIDTH).map(move |c| Square::new(r, c)))
    }
}

impl From<(usize, usize)> for Square {
    fn from((row, col): (usize, usize)) -> Self {
        Square::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub squares: [[Option<Piece>; WIDTH]; HEIGHT],
}

impl Board {
    pub fn empty() -> Self {
        Board { squares: [new_empty(); HEIGHT] }
    }

    /// Panics when `square` is off the board.
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row][square.col]
    }

    /// Panics when `square` is off the board.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row][square.col] = piece;
    }

    pub fn reset(&mut self) {
        self.squares = starting_squares();
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }
}

impl Default for Board {
    fn default() -> Self {
        new_board()
    }
}

pub fn to_string(board: &Board) -> String {
    let mut result: String = String::new();
    for row in 0 .. HEIGHT {
        for col in 0 .. WIDTH {
            let icon = match &board.squares[row][col] {
                None => ' ',
                Some(p) => p.icon(),
            };
            result.push(icon);
        }
        result.push('\n');
    }
    let r = &result[0..result.len()-1];
    r.to_string()
}

impl serde::Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_str(to_string(self).as_str())
    }
}

fn new_pieces(color: Color) -> [Option<Piece>; WIDTH] {
    [
        Some(Piece::new(color, PieceType::Rook)),
        Some(Piece::new(color, PieceType::Knight)),
        Some(Piece::new(color, PieceType::Bishop)),
        Some(Piece::new(color, PieceType::Queen)),
        Some(Piece::new(color, PieceType::King)),
        Some(Piece::new(color, PieceType::Bishop)),
        Some(Piece::new(color, PieceType::Knight)),
        Some(Piece::new(color, PieceType::Rook))
    ]
}

fn new_pawns(color: Color) -> [Option<Piece>; WIDTH] {
    [Some(Piece::new(color, PieceType::Pawn)); WIDTH]
}

fn new_empty() -> [Option<Piece>; WIDTH] {
    [None; WIDTH]
}

fn starting_squares() -> [[Option<Piece>; WIDTH]; HEIGHT] {
    [
        new_pieces(Color::Black),
        new_pawns(Color::Black),
        new_empty(),
        new_empty(),
        new_empty(),
        new_empty(),
        new_pawns(Color::White),
        new_pieces(Color::White)
    ]
}

pub fn new_board() -> Board {
    Board { squares: starting_squares() }
}
