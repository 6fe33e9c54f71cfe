use thiserror::Error;

/// Every way a deck request can fail. The `Display` text is what the client sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("No UUID found in request")]
    MissingDeckId,

    #[error("Unable to parse Malformed Deck ID")]
    MalformedDeckId,

    #[error("No deck found.")]
    DeckNotFound,

    #[error("Invalid 'count' parameter, must be an integer")]
    InvalidCount,

    #[error("You must draw at least 1 card")]
    NonPositiveCount,

    #[error("Deck has {remaining} cards but you are requesting {requested}")]
    NotEnoughCards { remaining: usize, requested: i64 },

    #[error("Unable to create deck")]
    CreateFailed,

    #[error("Deck manager unavailable")]
    ManagerUnavailable,
}

pub type DeckResult<T> = Result<T, DeckError>;
