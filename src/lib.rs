pub mod ai;
pub mod error;
pub mod game;
pub mod game_repr;

pub use error::{FenError, GameError};
pub use game::{Game, Outcome};
