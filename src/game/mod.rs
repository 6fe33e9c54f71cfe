pub mod deck_manager;

pub use deck_manager::{DeckHandle, DeckManager};
