use super::*;

// ==================== STARTING POSITION PERFT TESTS ====================

#[test]
fn test_perft_starting_depth_1() {
    assert_eq!(Position::new().perft(1), 20);
}

#[test]
fn test_perft_starting_depth_2() {
    assert_eq!(Position::new().perft(2), 400);
}

#[test]
fn test_perft_starting_depth_3() {
    assert_eq!(Position::new().perft(3), 8902);
}

#[test]
fn test_perft_starting_depth_4() {
    assert_eq!(Position::new().perft(4), 197281);
}

#[test]
#[ignore]
fn test_perft_starting_depth_5() {
    assert_eq!(Position::new().perft(5), 4865609);
}
