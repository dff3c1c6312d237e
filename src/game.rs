//! The live line of play: one position mutated move by move, the repetition
//! history of that line and an undo stack.

use log::{info, trace};

use crate::ai::{self, SearchConfig, SearchResult};
use crate::error::GameError;
use crate::game_repr::{Color, Move, MoveList, Position, RepetitionTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    /// The current position has occurred three times.
    Repetition,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::Ongoing
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    tracker: RepetitionTracker,
    /// Position before each move played, with the move's code
    history: Vec<(Position, String)>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Game from the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::new())
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            tracker: RepetitionTracker::starting_at(position.hash()),
            position,
            history: Vec::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn tracker(&self) -> &RepetitionTracker {
        &self.tracker
    }

    pub fn legal_moves(&self) -> MoveList {
        self.position.all_legal_moves()
    }

    /// Plays `mv`, which must come from [`Game::legal_moves`].
    pub fn play(&mut self, mv: Move) {
        debug_assert!(self.legal_moves().contains(&mv), "illegal move played");

        let code = mv.code(&self.position);
        trace!("{:?} plays {code}", self.position.side());

        self.history.push((self.position, code));
        self.position.apply_move(mv);
        self.tracker.append(self.position.hash());

        let outcome = self.outcome();
        if outcome.is_over() {
            info!("game over after {} moves: {outcome:?}", self.history.len());
        }
    }

    /// Plays the legal move written as `code` (e.g. `e2e4`, `e7e8q`).
    pub fn play_code(&mut self, code: &str) -> Result<(), GameError> {
        let mv = self
            .position
            .find_move(code)
            .ok_or_else(|| GameError::UnknownMove(code.to_string()))?;
        self.play(mv);
        Ok(())
    }

    /// Takes back the last move.
    pub fn undo(&mut self) -> Result<(), GameError> {
        let (previous, code) = self.history.pop().ok_or(GameError::EmptyHistory)?;
        self.tracker.remove(self.position.hash());
        self.position = previous;
        trace!("took back {code}");
        Ok(())
    }

    /// Codes of the moves played so far.
    pub fn history(&self) -> Vec<&str> {
        self.history.iter().map(|(_, code)| code.as_str()).collect()
    }

    pub fn outcome(&self) -> Outcome {
        if !self.position.has_legal_move() {
            return if self.position.is_in_check() {
                Outcome::Checkmate { winner: self.position.side().opposite() }
            } else {
                Outcome::Stalemate
            };
        }
        if self.tracker.is_draw(self.position.hash()) {
            return Outcome::Repetition;
        }
        Outcome::Ongoing
    }

    /// Searches the current position with a fresh cache.
    pub fn best_move(&self, config: &SearchConfig) -> SearchResult {
        ai::best_move(&self.tracker, &self.position, config)
    }
}
