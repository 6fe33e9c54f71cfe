pub mod deck;

pub use deck::create_deck;
