// Tests for the static evaluation

use super::*;

#[test]
fn test_starting_position_balanced() {
    assert_eq!(evaluate(&Position::new()), 0);
}

#[test]
fn test_material_queen_advantage() {
    let white = fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let black = fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");

    assert!(evaluate(&white) > 0, "extra queen should be an advantage");
    assert!(evaluate(&black) < 0, "missing queen should be a disadvantage");
}

#[test]
fn test_score_is_ratio_of_side_totals() {
    // white: king e1 (5 moves) + pawn e2 (2 moves, one rank advanced)
    // black: king e8 (5 moves)
    let white = fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
    assert_eq!(side_total(&white, Color::White), 100 + 1000 + 40 + 30);
    assert_eq!(side_total(&white, Color::Black), 100);
    assert_eq!(evaluate(&white), 10_000 * 1070 / 1170);

    let black = fen("4k3/8/8/8/8/8/4P3/4K3 b - - 0 1");
    assert_eq!(evaluate(&black), -107_000);
}

#[test]
fn test_pawn_advance_counts_from_own_side() {
    let white = fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1");
    let black = fen("4k3/8/4p3/8/8/8/8/4K3 b - - 0 1");
    // mirrored positions score identically for the side to move
    assert_eq!(evaluate(&white), evaluate(&black));
}

#[test]
fn test_piece_values() {
    assert_eq!(piece_value(Type::Pawn), 1000);
    assert_eq!(piece_value(Type::Knight), 3000);
    assert_eq!(piece_value(Type::Bishop), 3300);
    assert_eq!(piece_value(Type::Rook), 5000);
    assert_eq!(piece_value(Type::Queen), 9000);
    assert_eq!(piece_value(Type::King), 0);
}

#[test]
fn test_checkmate_is_loss() {
    let (pos, _) = line(&["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(evaluate(&pos), LOSS_VALUE);
    assert_eq!(evaluate_with(&pos, false), LOSS_VALUE);
}

#[test]
fn test_stalemate_is_draw() {
    let pos = fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(evaluate(&pos), DRAW_VALUE);
}

#[test]
fn test_evaluate_with_known_moves_skips_terminal_check() {
    let pos = Position::new();
    assert_eq!(evaluate_with(&pos, true), evaluate_material(&pos));
}
