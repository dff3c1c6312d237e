use log::info;

use super::bitboards::{castling_path, tables::ATTACK_TABLES};
use super::*;

impl Position {
    /// Squares attacked by the side to move. Pawns contribute their diagonals
    /// whether or not anything stands there; every other piece contributes its
    /// pseudo-legal targets.
    pub fn our_attack_bb(&self) -> u64 {
        let forward = self.side().forward();
        let mut attacks = 0u64;
        let mut moves = PieceMoves::new();

        for (slot, piece) in self.own_pieces().iter().enumerate() {
            match piece.piece_type {
                Type::None => {}
                Type::Pawn => attacks |= pawn_diagonals(piece, forward),
                _ => {
                    moves.clear();
                    self.pseudo_legal_moves_into(slot, &mut moves);
                    attacks = moves.iter().fold(attacks, |bb, mv| bb | mv.mask());
                }
            }
        }

        attacks
    }

    /// Squares attacked by the side not to move.
    pub fn opponent_attack_bb(&self) -> u64 {
        self.flipped().our_attack_bb()
    }

    /// Whether the side to move could capture the opponent's king. A position
    /// reached by a legal move never allows this.
    pub fn opponent_king_attacked(&self) -> bool {
        let king = self.opponent_pieces()[KING_SLOT].mask();
        let color = self.side();
        let mut moves = PieceMoves::new();

        for (slot, piece) in self.own_pieces().iter().enumerate() {
            if ATTACK_TABLES.attack_mask(piece, color) & king == 0 {
                continue;
            }
            match piece.piece_type {
                // the tables are exact for pieces that cannot be blocked
                Type::Pawn | Type::Knight | Type::King => return true,
                _ => {
                    moves.clear();
                    self.pseudo_legal_moves_into(slot, &mut moves);
                    if moves.iter().any(|mv| mv.mask() == king) {
                        return true;
                    }
                }
            }
        }

        false
    }

    #[inline]
    pub fn is_legal_state(&self) -> bool {
        !self.opponent_king_attacked()
    }

    /// Checks if the side to move is in check
    pub fn is_in_check(&self) -> bool {
        self.flipped().opponent_king_attacked()
    }

    /// Legal moves of the piece in own slot `slot`: each pseudo-legal move is
    /// played on a branch and dropped if it leaves the mover's king attacked.
    pub fn legal_moves_for(&self, slot: usize, moves: &mut PieceMoves) {
        moves.clear();
        self.pseudo_legal_moves_into(slot, moves);
        moves.retain(|mv| self.branch(*mv).is_legal_state());
    }

    /// Appends the castling moves available to the side to move, queen side first.
    pub fn castling_moves_into(&self, moves: &mut MoveList) {
        let color = self.side();
        let mut opponent_attacks = None;

        for side in CastleSide::ALL {
            if !self.can_castle(color, side) {
                continue;
            }
            let path = castling_path(color, side);
            if self.all_bb() & path.empty != 0 {
                continue;
            }
            let attacked = *opponent_attacks.get_or_insert_with(|| self.opponent_attack_bb());
            if attacked & path.safe != 0 {
                continue;
            }
            moves.push(Move::new(KING_SLOT as u8, path.king_to_x, color.home_rank(), path.move_type));
        }
    }

    /// Generate all legal moves for the current side into a provided buffer
    /// The buffer is cleared before adding moves
    pub fn all_legal_moves_into(&self, moves: &mut MoveList) {
        moves.clear();
        let mut piece_moves = PieceMoves::new();
        for slot in 0..N_SLOTS {
            self.legal_moves_for(slot, &mut piece_moves);
            moves.extend_from_slice(&piece_moves);
        }
        self.castling_moves_into(moves);
    }

    /// Returns all legal moves for the current side to move
    pub fn all_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.all_legal_moves_into(&mut moves);
        moves
    }

    /// Whether the side to move has any legal move. Stops at the first one found.
    pub fn has_legal_move(&self) -> bool {
        let mut piece_moves = PieceMoves::new();
        for slot in 0..N_SLOTS {
            piece_moves.clear();
            self.pseudo_legal_moves_into(slot, &mut piece_moves);
            if piece_moves.iter().any(|mv| self.branch(*mv).is_legal_state()) {
                return true;
            }
        }

        // castling needs the king to have a legal step anyway, so this is rarely reached
        let mut castles = MoveList::new();
        self.castling_moves_into(&mut castles);
        !castles.is_empty()
    }

    /// Side to move is in check and has no legal move.
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_legal_move()
    }

    /// Side to move is not in check but has no legal move.
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_legal_move()
    }

    /// Counts leaf nodes of the legal move tree `depth` plies deep.
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves.iter().map(|mv| self.branch(*mv).perft(depth - 1)).sum()
    }

    /// Perft split by root move, for tracking down move generator bugs.
    pub fn divide(&self, depth: u32) -> Vec<(String, u64)> {
        if depth == 0 {
            return Vec::new();
        }

        let results: Vec<(String, u64)> = self
            .all_legal_moves()
            .iter()
            .map(|mv| (mv.code(self), self.branch(*mv).perft(depth - 1)))
            .collect();

        for (code, nodes) in &results {
            info!("{code}: {nodes}");
        }
        info!("divide({depth}): {} nodes", results.iter().map(|(_, nodes)| nodes).sum::<u64>());

        results
    }

    /// Legal move with text code `code` (e.g. `e2e4`, `e7e8q`).
    pub fn find_move(&self, code: &str) -> Option<Move> {
        let code = code.trim().to_ascii_lowercase();
        self.all_legal_moves().into_iter().find(|mv| mv.code(self) == code)
    }
}

fn pawn_diagonals(pawn: &Piece, forward: i8) -> u64 {
    let y = pawn.y as i8 + forward;
    if !(0..8).contains(&y) {
        return 0;
    }
    let mut attacks = 0u64;
    if pawn.x > 0 {
        attacks |= bitboards::square_mask(pawn.x - 1, y as u8);
    }
    if pawn.x < 7 {
        attacks |= bitboards::square_mask(pawn.x + 1, y as u8);
    }
    attacks
}
