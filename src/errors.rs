use thiserror::Error;

/// Every condition the engine reports is local and recoverable; a stale
/// expiry timer firing against a removed giveaway is absorbed silently and
/// never surfaces here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GiveawayError {
    #[error("Giveaway not found or already ended")]
    NotFound,

    #[error("A giveaway with this id already exists")]
    AlreadyExists,

    #[error("You already joined this giveaway")]
    AlreadyJoined,

    #[error("You don't have the required role")]
    Ineligible,

    #[error("Invalid giveaway parameters: {0}")]
    InvalidParameters(String),

    #[error("You are not allowed to host giveaways")]
    Unauthorized,
}
