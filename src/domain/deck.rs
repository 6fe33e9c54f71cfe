use uuid::Uuid;

use crate::domain::Card;

/// A deck of cards. The last card in `cards` is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub id: Uuid,
    pub shuffled: bool,
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(shuffled: bool, cards: Vec<Card>) -> Self {
        Self { id: Uuid::new_v4(), shuffled, cards }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Removes the top `count` cards and returns them in stored order.
    /// Callers validate `count` first; an oversized count takes the whole deck.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        let at = self.cards.len().saturating_sub(count);
        self.cards.split_off(at)
    }
}
