pub mod cards;
pub mod deck;
pub mod deck_store;
pub mod error;

pub use cards::*;
pub use deck::Deck;
pub use deck_store::DeckStore;
pub use error::{DeckError, DeckResult};
