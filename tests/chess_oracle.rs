//! Legal move counts and check detection compared with the `chess` crate on
//! positions from random games.

mod common;

use std::str::FromStr;

use chess::{Board, MoveGen};
use rayon::prelude::*;

use ply_chess::game_repr::Position;

fn compare(pos: &Position) -> Result<(), String> {
    let fen = pos.to_fen();
    let board = Board::from_str(&fen).map_err(|err| format!("oracle rejected {fen}: {err}"))?;

    let ours = pos.all_legal_moves().len();
    let theirs = MoveGen::new_legal(&board).len();
    if ours != theirs {
        return Err(format!("{fen}: {ours} legal moves, oracle has {theirs}"));
    }

    let in_check = board.checkers().popcnt() > 0;
    if pos.is_in_check() != in_check {
        return Err(format!("{fen}: in check {}, oracle says {in_check}", pos.is_in_check()));
    }
    Ok(())
}

#[test]
fn test_legal_move_counts_match_oracle() {
    common::init_logger();

    let failures: Vec<String> = (0..300u64)
        .into_par_iter()
        .filter_map(|seed| {
            let mut failure = None;
            common::random_game(seed, 80, |pos, _| {
                if failure.is_none() {
                    failure = compare(pos).err();
                }
            });
            failure
        })
        .collect();

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn test_reference_positions_match_oracle() {
    for fen in [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 0 1",
    ] {
        let pos = Position::from_fen(fen).unwrap();
        compare(&pos).unwrap();
        for mv in pos.all_legal_moves() {
            compare(&pos.branch(mv)).unwrap();
        }
    }
}
