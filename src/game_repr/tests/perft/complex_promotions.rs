use super::*;

// ==================== PROMOTION-HEAVY PERFT TESTS ====================
// Position 4: white king already castled by hand, pawns on both seventh ranks

const PROMOTIONS: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";

#[test]
fn test_perft_promotions_depth_1() {
    assert_eq!(fen(PROMOTIONS).perft(1), 6);
}

#[test]
fn test_perft_promotions_depth_2() {
    assert_eq!(fen(PROMOTIONS).perft(2), 264);
}

#[test]
fn test_perft_promotions_depth_3() {
    assert_eq!(fen(PROMOTIONS).perft(3), 9467);
}

#[test]
#[ignore]
fn test_perft_promotions_depth_4() {
    assert_eq!(fen(PROMOTIONS).perft(4), 422333);
}
