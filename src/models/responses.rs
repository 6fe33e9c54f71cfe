use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::domain::{Card, Deck};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckResponse {
    pub deck_id: Uuid,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<Card>,
}

impl From<Deck> for DeckResponse {
    fn from(deck: Deck) -> Self {
        Self {
            deck_id: deck.id,
            shuffled: deck.shuffled,
            remaining: deck.remaining(),
            cards: deck.cards,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawResponse {
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
