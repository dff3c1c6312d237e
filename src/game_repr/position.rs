use super::bitboards::{castling_path, occupancy, square_mask};
use super::hash::{castle_index, compute_hash, PositionHash, HASH_KEYS};
use super::moves::{file_char, parse_square, rank_char};
use super::*;
use crate::error::FenError;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND MOVE APPLICATION
 */

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

/// A value snapshot of the game. Both sides keep 16 permanent slots; "own"
/// and "opponent" are views chosen by the side to move. Branching copies the
/// whole value, so searches never share mutable state with the game line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pieces: [[Piece; N_SLOTS]; 2],
    /// Indexed by `castle_index`: white queen, white king, black queen, black king
    castling: [bool; 4],
    /// Move that produced this position, needed for en passant
    prev_move: Move,
    side: Color,
    own_bb: u64,
    opponent_bb: u64,
    all_bb: u64,
    hash: PositionHash,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard starting position, white to move, all castling rights held.
    pub fn new() -> Self {
        let mut pieces = [[Piece::none(); N_SLOTS]; 2];
        for color in [Color::White, Color::Black] {
            let slots = &mut pieces[color.index()];
            for (x, piece_type) in BACK_RANK.iter().enumerate() {
                slots[x] = Piece::new(*piece_type, x as u8, color.home_rank());
                slots[FIRST_PAWN_SLOT + x] = Piece::new(Type::Pawn, x as u8, color.pawn_rank());
            }
        }
        Self::from_parts(pieces, [true; 4], Move::NULL, Color::White)
    }

    fn from_parts(pieces: [[Piece; N_SLOTS]; 2], castling: [bool; 4], prev_move: Move, side: Color) -> Self {
        let own_bb = occupancy(&pieces[side.index()]);
        let opponent_bb = occupancy(&pieces[side.opposite().index()]);
        let mut position = Self {
            pieces,
            castling,
            prev_move,
            side,
            own_bb,
            opponent_bb,
            all_bb: own_bb | opponent_bb,
            hash: PositionHash::ZERO,
        };
        position.hash = compute_hash(&position);
        position
    }

    /// A board holding nothing but `piece`, owned by the side to move.
    /// Used to precompute attack tables; not a playable position.
    pub(crate) fn isolated(piece: Piece, color: Color) -> Self {
        let mut pieces = [[Piece::none(); N_SLOTS]; 2];
        let slot = if piece.piece_type == Type::King { KING_SLOT } else { 0 };
        pieces[color.index()][slot] = piece;
        Self::from_parts(pieces, [false; 4], Move::NULL, color)
    }

    pub(crate) fn isolated_slot(&self) -> usize {
        self.own_pieces()
            .iter()
            .position(|piece| !piece.is_none())
            .unwrap_or(KING_SLOT)
    }

    #[inline]
    pub fn side(&self) -> Color {
        self.side
    }

    #[inline]
    pub fn pieces(&self, color: Color) -> &[Piece; N_SLOTS] {
        &self.pieces[color.index()]
    }

    #[inline]
    pub fn own_pieces(&self) -> &[Piece; N_SLOTS] {
        self.pieces(self.side)
    }

    #[inline]
    pub fn opponent_pieces(&self) -> &[Piece; N_SLOTS] {
        self.pieces(self.side.opposite())
    }

    #[inline]
    pub fn own_bb(&self) -> u64 {
        self.own_bb
    }

    #[inline]
    pub fn opponent_bb(&self) -> u64 {
        self.opponent_bb
    }

    #[inline]
    pub fn all_bb(&self) -> u64 {
        self.all_bb
    }

    #[inline]
    pub fn hash(&self) -> PositionHash {
        self.hash
    }

    #[inline]
    pub fn prev_move(&self) -> Move {
        self.prev_move
    }

    #[inline]
    pub fn king(&self, color: Color) -> Piece {
        self.pieces(color)[KING_SLOT]
    }

    #[inline]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        self.castling[castle_index(color, side)]
    }

    /// Slot of `color`'s piece standing on `(x, y)`, if any.
    pub fn slot_at(&self, color: Color, x: u8, y: u8) -> Option<usize> {
        if self.all_bb & square_mask(x, y) == 0 {
            return None;
        }
        self.pieces(color).iter().position(|piece| piece.is_at(x, y))
    }

    /// The position after `mv`, leaving `self` untouched.
    #[inline]
    pub fn branch(&self, mv: Move) -> Position {
        let mut branch = *self;
        branch.apply_move(mv);
        branch
    }

    /// Same board with the other side to move.
    #[inline]
    pub fn flipped(&self) -> Position {
        self.branch(Move::NULL)
    }

    fn revoke_castling(&mut self, color: Color, side: CastleSide) {
        let idx = castle_index(color, side);
        if self.castling[idx] {
            self.castling[idx] = false;
            self.hash ^= HASH_KEYS.castling[idx];
        }
    }

    /// Plays `mv` in place and updates bitboards and hash incrementally.
    /// `mv` must come from this position's move generator.
    pub fn apply_move(&mut self, mv: Move) {
        let keys = &*HASH_KEYS;
        let us = self.side;
        let them = us.opposite();

        self.hash ^= keys.white_to_move;
        if self.prev_move.move_type == MoveType::PawnDoubleStep {
            self.hash ^= keys.en_passant[self.prev_move.to_x as usize];
        }

        if !mv.is_null() {
            let slot = mv.slot as usize;
            let piece = self.pieces[us.index()][slot];
            debug_assert!(!piece.is_none(), "move from empty slot {slot}");

            // en passant takes the pawn beside the mover, not on the target square
            let capture_y = if mv.move_type == MoveType::EnPassant { piece.y } else { mv.to_y };
            if let Some(captured_slot) = self.slot_at(them, mv.to_x, capture_y) {
                let captured = self.pieces[them.index()][captured_slot];
                self.hash ^= keys.piece(captured.piece_type, them, captured.square());
                self.opponent_bb ^= captured.mask();
                self.pieces[them.index()][captured_slot] = Piece::none();
                match captured_slot {
                    QUEEN_ROOK_SLOT => self.revoke_castling(them, CastleSide::Queen),
                    KING_ROOK_SLOT => self.revoke_castling(them, CastleSide::King),
                    _ => {}
                }
            }

            match mv.move_type {
                MoveType::CastleKingSide | MoveType::CastleQueenSide => {
                    let side = if mv.move_type == MoveType::CastleKingSide {
                        CastleSide::King
                    } else {
                        CastleSide::Queen
                    };
                    let path = castling_path(us, side);
                    let own = &mut self.pieces[us.index()];
                    own[KING_SLOT].x = path.king_to_x;
                    own[path.rook_slot].x = path.rook_to_x;
                    self.own_bb ^= path.toggle;
                    self.hash ^= keys.castle_moves[us.index()][side.index()];
                }
                _ => {
                    let new_type = mv.move_type.promotion_type().unwrap_or(piece.piece_type);
                    self.hash ^= keys.piece(piece.piece_type, us, piece.square());
                    self.hash ^= keys.piece(new_type, us, mv.square());
                    self.own_bb ^= piece.mask() | mv.mask();
                    self.pieces[us.index()][slot] = Piece::new(new_type, mv.to_x, mv.to_y);
                }
            }

            match slot {
                KING_SLOT => {
                    self.revoke_castling(us, CastleSide::Queen);
                    self.revoke_castling(us, CastleSide::King);
                }
                QUEEN_ROOK_SLOT => self.revoke_castling(us, CastleSide::Queen),
                KING_ROOK_SLOT => self.revoke_castling(us, CastleSide::King),
                _ => {}
            }

            if mv.move_type == MoveType::PawnDoubleStep {
                self.hash ^= keys.en_passant[mv.to_x as usize];
            }
        }

        self.prev_move = mv;
        self.side = them;
        std::mem::swap(&mut self.own_bb, &mut self.opponent_bb);
        self.all_bb = self.own_bb | self.opponent_bb;

        debug_assert_eq!(self.own_bb & self.opponent_bb, 0);
    }

    /// Parses a FEN string. Halfmove and fullmove counters are accepted but ignored.
    ///
    /// Slots are assigned the way a game from the start position would have
    /// them: the king in slot 4, corner rooks in 0/7, other pieces in their
    /// back-rank slots, pawns in 8 + file, leftovers in any free slot.
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 2 {
            return Err(FenError::MissingFields(fields.len()));
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount(ranks.len()));
        }

        let mut found: [Vec<Piece>; 2] = [Vec::new(), Vec::new()];
        for (i, rank) in ranks.iter().enumerate() {
            let y = 7 - i as u8;
            let mut x = 0u8;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(FenError::InvalidRank { rank: y as usize + 1 });
                    }
                    x += skip as u8;
                } else {
                    if x >= 8 {
                        return Err(FenError::InvalidRank { rank: y as usize + 1 });
                    }
                    let (piece_type, color) = Type::from_char(c)?;
                    found[color.index()].push(Piece::new(piece_type, x, y));
                    x += 1;
                }
                if x > 8 {
                    return Err(FenError::InvalidRank { rank: y as usize + 1 });
                }
            }
            if x != 8 {
                return Err(FenError::InvalidRank { rank: y as usize + 1 });
            }
        }

        let side = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSide(other.to_string())),
        };

        let mut pieces = [[Piece::none(); N_SLOTS]; 2];
        for color in [Color::White, Color::Black] {
            pieces[color.index()] = assign_slots(&found[color.index()], color)?;
        }

        let castling_field = fields.get(2).copied().unwrap_or("-");
        let mut castling = [false; 4];
        if castling_field != "-" {
            for c in castling_field.chars() {
                let (color, castle_side) = match c {
                    'K' => (Color::White, CastleSide::King),
                    'Q' => (Color::White, CastleSide::Queen),
                    'k' => (Color::Black, CastleSide::King),
                    'q' => (Color::Black, CastleSide::Queen),
                    _ => return Err(FenError::InvalidCastling(castling_field.to_string())),
                };
                let path = castling_path(color, castle_side);
                let own = &pieces[color.index()];
                let rank = color.home_rank();
                let king_home = own[KING_SLOT].is_at(4, rank);
                let rook_home = own[path.rook_slot].piece_type == Type::Rook
                    && own[path.rook_slot].is_at(path.rook_from_x, rank);
                if !king_home || !rook_home {
                    return Err(FenError::InvalidCastling(castling_field.to_string()));
                }
                castling[castle_index(color, castle_side)] = true;
            }
        }

        let ep_field = fields.get(3).copied().unwrap_or("-");
        let mut prev_move = Move::NULL;
        if ep_field != "-" {
            let invalid = || FenError::InvalidEnPassant(ep_field.to_string());
            let (x, y) = parse_square(ep_field).ok_or_else(invalid)?;
            let mover = side.opposite();
            // the square skipped over lies between the mover's pawn rank and the pawn
            let pawn_y = (mover.pawn_rank() as i8 + 2 * mover.forward()) as u8;
            if y as i8 != mover.pawn_rank() as i8 + mover.forward() {
                return Err(invalid());
            }
            let occupied = occupancy(&pieces[0]) | occupancy(&pieces[1]);
            if occupied & (square_mask(x, y) | square_mask(x, mover.pawn_rank())) != 0 {
                return Err(invalid());
            }
            let slot = pieces[mover.index()]
                .iter()
                .position(|piece| piece.piece_type == Type::Pawn && piece.is_at(x, pawn_y))
                .ok_or_else(invalid)?;
            prev_move = Move::new(slot as u8, x, pawn_y, MoveType::PawnDoubleStep);
        }

        let position = Self::from_parts(pieces, castling, prev_move, side);
        if position.opponent_king_attacked() {
            return Err(FenError::OpponentInCheck);
        }
        Ok(position)
    }

    /// Converts the position to FEN. Move counters are always `0 1`.
    pub fn to_fen(&self) -> String {
        let mut board = [None; 64];
        for color in [Color::White, Color::Black] {
            for piece in self.pieces(color).iter().filter(|piece| !piece.is_none()) {
                board[piece.square()] = Some(piece.piece_type.to_char(color));
            }
        }

        let mut fen = String::with_capacity(90);
        for y in (0..8).rev() {
            let mut empty = 0;
            for x in 0..8 {
                match board[y * 8 + x] {
                    Some(c) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(c);
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if y > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(if self.side == Color::White { 'w' } else { 'b' });

        fen.push(' ');
        let mut any_right = false;
        for (color, castle_side, c) in [
            (Color::White, CastleSide::King, 'K'),
            (Color::White, CastleSide::Queen, 'Q'),
            (Color::Black, CastleSide::King, 'k'),
            (Color::Black, CastleSide::Queen, 'q'),
        ] {
            if self.can_castle(color, castle_side) {
                fen.push(c);
                any_right = true;
            }
        }
        if !any_right {
            fen.push('-');
        }

        fen.push(' ');
        if self.prev_move.move_type == MoveType::PawnDoubleStep {
            let mover = self.side.opposite();
            let skipped_y = (mover.pawn_rank() as i8 + mover.forward()) as u8;
            fen.push(file_char(self.prev_move.to_x));
            fen.push(rank_char(skipped_y));
        } else {
            fen.push('-');
        }

        fen.push_str(" 0 1");
        fen
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

fn assign_slots(found: &[Piece], color: Color) -> Result<[Piece; N_SLOTS], FenError> {
    let kings = found.iter().filter(|piece| piece.piece_type == Type::King).count();
    if kings != 1 {
        return Err(FenError::KingCount { color: color_name(color), count: kings });
    }
    if found.len() > N_SLOTS {
        return Err(FenError::TooManyPieces { color: color_name(color) });
    }

    let mut slots = [Piece::none(); N_SLOTS];
    let mut placed = vec![false; found.len()];
    let home = color.home_rank();

    // king first, then corner rooks so castling rights can find them
    for (i, piece) in found.iter().enumerate() {
        let slot = match piece.piece_type {
            Type::King => Some(KING_SLOT),
            Type::Rook if piece.y == home && piece.x == 0 => Some(QUEEN_ROOK_SLOT),
            Type::Rook if piece.y == home && piece.x == 7 => Some(KING_ROOK_SLOT),
            _ => None,
        };
        if let Some(slot) = slot {
            slots[slot] = *piece;
            placed[i] = true;
        }
    }

    // conventional slots, preferring the one whose starting file matches
    for (i, piece) in found.iter().enumerate() {
        if placed[i] {
            continue;
        }
        let candidates: Vec<usize> = match piece.piece_type {
            Type::Pawn => vec![FIRST_PAWN_SLOT + piece.x as usize],
            piece_type => (0..8).filter(|&slot| BACK_RANK[slot] == piece_type).collect(),
        };
        let preferred = candidates
            .iter()
            .copied()
            .filter(|&slot| slots[slot].is_none())
            .min_by_key(|&slot| (slot % 8).abs_diff(piece.x as usize));
        if let Some(slot) = preferred {
            slots[slot] = *piece;
            placed[i] = true;
        }
    }

    // whatever is left goes anywhere free
    for (i, piece) in found.iter().enumerate() {
        if placed[i] {
            continue;
        }
        let slot = slots
            .iter()
            .position(|slot| slot.is_none())
            .ok_or(FenError::TooManyPieces { color: color_name(color) })?;
        slots[slot] = *piece;
    }

    Ok(slots)
}
