use super::*;

// Reference node counts from the standard perft suite positions.

mod starting_position;
mod kiwipete;
mod endgame;
mod complex_promotions;
mod middle_game;
mod symmetrical;
