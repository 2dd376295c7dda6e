//! Colors, pieces, moves and 0..64 square arithmetic (a1 = 0, h8 = 63).

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Rank step of a pawn push.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank pawns start on and may double-push from.
    pub fn pawn_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Last rank, where pawns promote.
    pub fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Letters in [`PieceKind`] declaration order.
const SYMBOLS: [char; 6] = ['p', 'n', 'b', 'r', 'q', 'k'];

impl PieceKind {
    /// Lowercase letter used by FEN, UCI promotions and board cells.
    pub fn symbol(self) -> char {
        SYMBOLS[self as usize]
    }

    /// Case-insensitive inverse of [`PieceKind::symbol`].
    pub fn from_symbol(ch: char) -> Option<PieceKind> {
        use PieceKind::*;
        let at = SYMBOLS.iter().position(|&s| s == ch.to_ascii_lowercase())?;
        Some([Pawn, Knight, Bishop, Rook, Queen, King][at])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn fen_char(self) -> char {
        let ch = self.kind.symbol();
        if self.color == Color::White {
            ch.to_ascii_uppercase()
        } else {
            ch
        }
    }
}

/// A move between two squares, with the flags needed to replay it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: u8,
    pub to: u8,
    pub promo: Option<PieceKind>,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl Move {
    pub fn new(from: u8, to: u8) -> Self {
        Self {
            from,
            to,
            promo: None,
            is_en_passant: false,
            is_castle: false,
        }
    }

    pub fn promotion(from: u8, to: u8, kind: PieceKind) -> Self {
        Self {
            promo: Some(kind),
            ..Self::new(from, to)
        }
    }

    pub fn en_passant(from: u8, to: u8) -> Self {
        Self {
            is_en_passant: true,
            ..Self::new(from, to)
        }
    }

    /// King part of a castle; the rook hop is implied.
    pub fn castle(from: u8, to: u8) -> Self {
        Self {
            is_castle: true,
            ..Self::new(from, to)
        }
    }
}

pub fn file_of(sq: u8) -> i8 {
    (sq % 8) as i8
}

pub fn rank_of(sq: u8) -> i8 {
    (sq / 8) as i8
}

/// Square at `file`/`rank`, or `None` off the board.
pub fn sq(file: i8, rank: i8) -> Option<u8> {
    let on_board = |x: i8| (0..8).contains(&x);
    (on_board(file) && on_board(rank)).then(|| (rank * 8 + file) as u8)
}

/// Square index for a display row/column, where row 0 is rank 8.
pub fn sq_from_row_col(row: usize, col: usize) -> Option<u8> {
    if row >= 8 || col >= 8 {
        return None;
    }
    sq(col as i8, 7 - row as i8)
}

/// Algebraic name such as `e4`.
pub fn sq_to_coord(sq: u8) -> String {
    let file = char::from(b'a' + sq % 8);
    let rank = char::from(b'1' + sq / 8);
    [file, rank].iter().collect()
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let mut chars = c.chars();
    let (file, rank) = (chars.next()?, chars.next()?);
    if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    sq(file as i8 - 'a' as i8, rank as i8 - '1' as i8)
}
