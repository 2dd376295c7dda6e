use thiserror::Error;

use crate::types::*;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }

    /// Drops every right tied to `sq`: a king or rook leaving its home
    /// square, or a rook being captured on it.
    fn revoke_for_square(&mut self, sq: u8) {
        match sq {
            0 => self.wq = false,
            7 => self.wk = false,
            4 => {
                self.wk = false;
                self.wq = false;
            }
            56 => self.bq = false,
            63 => self.bk = false,
            60 => {
                self.bk = false;
                self.bq = false;
            }
            _ => {}
        }
    }
}

/// Errors raised while parsing Forsyth-Edwards Notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, found {0}")]
    FieldCount(usize),
    #[error("expected 8 ranks in FEN board, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },
    #[error("invalid piece letter '{0}' in FEN")]
    PieceLetter(char),
    #[error("invalid side to move '{0}'")]
    SideToMove(String),
    #[error("invalid castling letter '{0}'")]
    Castling(char),
    #[error("invalid en passant square '{0}'")]
    EnPassant(String),
    #[error("invalid move counter '{0}'")]
    Counter(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    /// Moves applied through `push_move`, newest last.
    played: Vec<(Move, Undo)>,
    /// Position keys since setup, one more entry than `played`.
    keys: Vec<u64>,
}

/// What `make_move` overwrites and `unmake_move` needs back.
#[derive(Clone, Debug, PartialEq)]
pub struct Undo {
    moved: Piece,
    /// Captured piece and its square, which is not `to` for en passant.
    captured: Option<(u8, Piece)>,
    /// Rook squares (from, to) when the move castled.
    rook_hop: Option<(u8, u8)>,
    castling: CastlingRights,
    en_passant: Option<u8>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Position {
    fn with_state(
        board: [Option<Piece>; 64],
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<u8>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        let mut p = Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            played: Vec::new(),
            keys: Vec::new(),
        };
        p.keys.push(p.position_key());
        p
    }

    pub fn startpos() -> Self {
        use PieceKind::*;
        const BACK_RANK: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = [None; 64];
        for (color, back, pawns) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
            for (file, kind) in (0..8i8).zip(BACK_RANK) {
                let at = |rank: i8| (rank * 8 + file) as usize;
                board[at(back)] = Some(Piece { color, kind });
                board[at(pawns)] = Some(Piece { color, kind: Pawn });
            }
        }
        let castling = CastlingRights {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        };
        Self::with_state(board, Color::White, castling, None, 0, 1)
    }

    /// Parses a FEN string. The half-move and full-move counters are optional.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::FieldCount(parts.len()));
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut board = [None; 64];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let kind = PieceKind::from_symbol(ch).ok_or(FenError::PieceLetter(ch))?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let target = sq(file, rank).ok_or(FenError::RankWidth { rank: rank_idx })?;
                    board[target as usize] = Some(Piece { color, kind });
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankWidth { rank: rank_idx });
                }
            }
            if file != 8 {
                return Err(FenError::RankWidth { rank: rank_idx });
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::Castling(c)),
                }
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            coord => Some(coord_to_sq(coord).ok_or_else(|| FenError::EnPassant(coord.to_string()))?),
        };

        let counter = |idx: usize, default: u32| -> Result<u32, FenError> {
            match parts.get(idx) {
                Some(txt) => txt.parse().map_err(|_| FenError::Counter(txt.to_string())),
                None => Ok(default),
            }
        };
        let halfmove_clock = counter(4, 0)?;
        let fullmove_number = counter(5, 1)?;

        Ok(Self::with_state(
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        ))
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for rank in (0..8i8).rev() {
            let mut empty = 0;
            for file in 0..8i8 {
                let piece = sq(file, rank).and_then(|s| self.piece_at(s));
                match piece {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let rights = [
            (self.castling.wk, 'K'),
            (self.castling.wq, 'Q'),
            (self.castling.bk, 'k'),
            (self.castling.bq, 'q'),
        ];
        let before = out.len();
        for (held, ch) in rights {
            if held {
                out.push(ch);
            }
        }
        if out.len() == before {
            out.push('-');
        }

        let ep = self.en_passant.map(sq_to_coord).unwrap_or_else(|| "-".to_string());
        format!(
            "{out} {ep} {} {}",
            self.halfmove_clock, self.fullmove_number
        )
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        (0..64u8).find(|&i| {
            self.piece_at(i)
                .is_some_and(|pc| pc.color == c && pc.kind == PieceKind::King)
        })
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    /// Whether `c`'s king is attacked. A side without a king is never in check.
    pub fn in_check(&self, c: Color) -> bool {
        self.king_sq(c)
            .is_some_and(|ksq| self.is_square_attacked(ksq, c.other()))
    }

    /// Whether any piece of `by` attacks `target`, looking outward from the
    /// target along each piece's movement pattern.
    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        use PieceKind::*;
        // A pawn attacks forward, so it stands one rank behind its target.
        let pawn_dirs = [(-1, -by.forward()), (1, -by.forward())];
        let patterns: [(&[(i8, i8)], i8, &[PieceKind]); 5] = [
            (&pawn_dirs, 1, &[Pawn]),
            (&KNIGHT_DELTAS, 1, &[Knight]),
            (&KING_DELTAS, 1, &[King]),
            (&DIAGONALS, 7, &[Bishop, Queen]),
            (&ORTHOGONALS, 7, &[Rook, Queen]),
        ];

        let (tf, tr) = (file_of(target), rank_of(target));
        patterns.iter().any(|&(dirs, reach, kinds)| {
            dirs.iter().any(|&(df, dr)| {
                (1..=reach)
                    .map_while(|step| sq(tf + df * step, tr + dr * step))
                    .find_map(|s| self.piece_at(s))
                    .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
            })
        })
    }

    /// Plays `mv` without recording it on the move stack.
    ///
    /// # Panics
    /// If `mv.from` is empty. Moves must come from this position's legal
    /// move list.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let Move { from, to, .. } = mv;
        let moved = self.piece_at(from).expect("make_move from an empty square");
        let mut undo = Undo {
            moved,
            captured: self.piece_at(to).map(|pc| (to, pc)),
            rook_hop: None,
            castling: self.castling.clone(),
            en_passant: self.en_passant.take(),
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };

        if mv.is_en_passant {
            // The captured pawn sits beside `from`, on the file of `to`.
            let victim_sq = sq(file_of(to), rank_of(from));
            undo.captured = victim_sq.and_then(|vs| Some((vs, self.board[vs as usize].take()?)));
        }

        let is_pawn = moved.kind == PieceKind::Pawn;
        let landed = match mv.promo {
            Some(kind) if is_pawn => Piece { kind, ..moved },
            _ => moved,
        };
        self.set_piece(from, None);
        self.set_piece(to, Some(landed));

        if mv.is_castle {
            undo.rook_hop = match (from, to) {
                (4, 6) => Some((7, 5)),
                (4, 2) => Some((0, 3)),
                (60, 62) => Some((63, 61)),
                (60, 58) => Some((56, 59)),
                _ => None,
            };
            if let Some((rook_from, rook_to)) = undo.rook_hop {
                let rook = self.board[rook_from as usize].take();
                self.set_piece(rook_to, rook);
            }
        }

        self.castling.revoke_for_square(from);
        self.castling.revoke_for_square(to);

        if is_pawn && (rank_of(to) - rank_of(from)).abs() == 2 {
            self.en_passant = sq(file_of(from), (rank_of(from) + rank_of(to)) / 2);
        }

        if is_pawn || undo.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();
        undo
    }

    /// Reverts a move previously played with `make_move`.
    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rook_from, rook_to)) = undo.rook_hop {
            let rook = self.board[rook_to as usize].take();
            self.set_piece(rook_from, rook);
        }

        // Restoring the original piece also reverts a promotion.
        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(undo.moved));
        if let Some((at, pc)) = undo.captured {
            self.set_piece(at, Some(pc));
        }
    }

    /// Plays `mv` and records it so that `pop_move` can take it back.
    pub fn push_move(&mut self, mv: Move) {
        let undo = self.make_move(mv);
        self.played.push((mv, undo));
        self.keys.push(self.position_key());
    }

    /// Takes back the most recent `push_move`, returning the move.
    /// Does nothing on an empty stack.
    pub fn pop_move(&mut self) -> Option<Move> {
        let (mv, undo) = self.played.pop()?;
        self.keys.pop();
        self.unmake_move(mv, undo);
        Some(mv)
    }

    /// Moves recorded on the stack, oldest first.
    pub fn played_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.played.iter().map(|(mv, _)| *mv)
    }

    /// How many times the current position has occurred since setup.
    pub fn repetition_count(&self) -> usize {
        let current = self.position_key();
        self.keys.iter().filter(|&&k| k == current).count()
    }

    /// FNV-style hash over board, side, castling and en passant.
    pub fn position_key(&self) -> u64 {
        fn mix(mut h: u64, x: u64) -> u64 {
            h ^= x;
            h = h.wrapping_mul(0x100000001b3);
            h
        }

        let mut h = 0xcbf29ce484222325u64;
        h = mix(h, 1 + self.side_to_move.idx() as u64);
        h = mix(h, if self.castling.wk { 3 } else { 5 });
        h = mix(h, if self.castling.wq { 7 } else { 11 });
        h = mix(h, if self.castling.bk { 13 } else { 17 });
        h = mix(h, if self.castling.bq { 19 } else { 23 });
        if let Some(ep) = self.en_passant {
            h = mix(h, 29 + ep as u64);
        }
        for (i, cell) in self.board.iter().enumerate() {
            // 0 is empty; pieces take 1..=12, one code per color and kind.
            let code = cell.map_or(0, |pc| 1 + pc.color.idx() * 6 + pc.kind as usize);
            h = mix(h, ((i as u64) << 4) | code as u64);
        }
        h
    }
}

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
