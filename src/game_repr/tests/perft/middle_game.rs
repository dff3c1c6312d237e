use super::*;

// ==================== MIDDLE GAME PERFT TESTS ====================
// Position 5: promotion with capture on d8/c8, discovered checks

const MIDDLE_GAME: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

#[test]
fn test_perft_middle_game_depth_1() {
    assert_eq!(fen(MIDDLE_GAME).perft(1), 44);
}

#[test]
fn test_perft_middle_game_depth_2() {
    assert_eq!(fen(MIDDLE_GAME).perft(2), 1486);
}

#[test]
fn test_perft_middle_game_depth_3() {
    assert_eq!(fen(MIDDLE_GAME).perft(3), 62379);
}
