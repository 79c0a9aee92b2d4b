//! Domain errors for gameplay operations.
//!
//! Storage functions below this layer return `sqlx::Error` directly; the
//! gameplay layer folds those in via `#[from]` and adds the rule
//! violations a caller can present inline (out of lives, cannot afford).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("unknown lesson `{0}`")]
    UnknownLesson(String),

    #[error("no lives left")]
    OutOfLives,

    #[error("lives are already full")]
    LivesFull,

    #[error("not enough coins: need {needed}, have {have}")]
    InsufficientCoins { needed: i64, have: i64 },

    #[error("no challenge tickets left")]
    NoTickets,
}
