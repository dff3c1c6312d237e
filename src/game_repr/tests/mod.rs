use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Parse a FEN that the test knows to be valid
pub fn fen(fen: &str) -> Position {
    Position::from_fen(fen).unwrap_or_else(|err| panic!("bad test FEN {fen}: {err}"))
}

/// Play a sequence of move codes on `pos`, panicking on the first illegal one
pub fn play(pos: &mut Position, codes: &[&str]) {
    for code in codes {
        let mv = pos
            .find_move(code)
            .unwrap_or_else(|| panic!("{code} is not legal in {}", pos.to_fen()));
        pos.apply_move(mv);
    }
}

/// Codes of every legal move, in generation order
pub fn move_codes(pos: &Position) -> Vec<String> {
    pos.all_legal_moves().iter().map(|mv| mv.code(pos)).collect()
}

/// Codes of the legal moves of the own piece standing on `square`
pub fn piece_codes(pos: &Position, square: &str) -> Vec<String> {
    let (x, y) = parse_square(square).expect("valid square");
    let slot = pos
        .slot_at(pos.side(), x, y)
        .unwrap_or_else(|| panic!("no own piece on {square}"));
    let mut moves = PieceMoves::new();
    pos.legal_moves_for(slot, &mut moves);
    moves.iter().map(|mv| mv.code(pos)).collect()
}

/// Check if a move code exists among the legal moves
pub fn has_move(pos: &Position, code: &str) -> bool {
    move_codes(pos).iter().any(|c| c == code)
}

/// Count legal moves carrying `move_type`
pub fn count_move_type(pos: &Position, move_type: MoveType) -> usize {
    pos.all_legal_moves()
        .iter()
        .filter(|mv| mv.move_type == move_type)
        .count()
}

/// Bitboards and hash agree with the piece arrays
pub fn assert_consistent(pos: &Position) {
    let own = bitboards::occupancy(pos.own_pieces());
    let opponent = bitboards::occupancy(pos.opponent_pieces());
    assert_eq!(pos.own_bb(), own, "own bitboard out of sync");
    assert_eq!(pos.opponent_bb(), opponent, "opponent bitboard out of sync");
    assert_eq!(pos.own_bb() & pos.opponent_bb(), 0);
    assert_eq!(pos.own_bb() | pos.opponent_bb(), pos.all_bb());
    assert_eq!(pos.hash(), compute_hash(pos), "incremental hash drifted");
}

// ==================== TEST MODULES ====================

mod perft;
