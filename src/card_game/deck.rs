use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::{Card, Deck, Rank, Suit};
use crate::shared::FULL_DECK_SIZE;

/// The full 52 card deck in canonical order: suits outer, ranks inner.
pub fn init_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(FULL_DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// One card per comma separated code, in the order given.
/// Duplicates and unknown codes are kept as they are.
pub fn wanted_cards(codes: &str) -> Vec<Card> {
    codes.split(',').map(Card::from_code).collect()
}

pub fn create_deck<R: Rng + ?Sized>(shuffle: bool, wanted: Option<&str>, rng: &mut R) -> Deck {
    let mut cards = match wanted {
        Some(codes) if !codes.is_empty() => wanted_cards(codes),
        _ => init_deck(),
    };

    if shuffle {
        cards.shuffle(rng);
    }

    Deck::new(shuffle, cards)
}
