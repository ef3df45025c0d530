use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RollError {
    #[error("A roll needs exactly 5 dice, got {len}")]
    InvalidRollLength { len: usize },
    #[error("Invalid face value {value} at position {position} (expected 1..=6)")]
    InvalidFaceValue { position: usize, value: i64 },
    #[error("Cannot read {token:?} as a die face")]
    InvalidToken { token: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown scoring category: {0:?}")]
pub struct CategoryParseError(pub String);
