use thiserror::Error;

/// Errors raised while reading a FEN string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN needs at least piece placement and side to move, got {0} field(s)")]
    MissingFields(usize),

    #[error("Invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("Rank {rank} does not describe exactly 8 files")]
    InvalidRank { rank: usize },

    #[error("Expected 8 ranks, found {0}")]
    WrongRankCount(usize),

    #[error("Invalid side to move '{0}'")]
    InvalidSide(String),

    #[error("Invalid castling field '{0}'")]
    InvalidCastling(String),

    #[error("Invalid en passant field '{0}'")]
    InvalidEnPassant(String),

    #[error("Expected exactly one {color} king, found {count}")]
    KingCount { color: &'static str, count: usize },

    #[error("Too many {color} pieces to fit the piece slots")]
    TooManyPieces { color: &'static str },

    #[error("The side not to move is in check")]
    OpponentInCheck,
}

/// Errors raised by the live game line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("'{0}' is not a legal move in this position")]
    UnknownMove(String),

    #[error("No move to undo")]
    EmptyHistory,
}
