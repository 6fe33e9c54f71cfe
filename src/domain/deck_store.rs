use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::Deck;

/// Every deck created during the process lifetime, keyed by id.
#[derive(Debug, Default)]
pub struct DeckStore {
    decks: HashMap<Uuid, Deck>,
}

impl DeckStore {
    pub fn new() -> Self {
        Self { decks: HashMap::new() }
    }

    /// Inserts the deck, replacing any deck already stored under its id.
    pub fn put(&mut self, deck: Deck) {
        self.decks.insert(deck.id, deck);
    }

    pub fn get(&self, id: &Uuid) -> Option<&Deck> {
        self.decks.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut Deck> {
        self.decks.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Card;

    #[test]
    fn put_then_get() {
        let mut store = DeckStore::new();
        assert_eq!(store.len(), 0);

        let deck = Deck::new(false, vec![Card::from_code("AS")]);
        let id = deck.id;
        store.put(deck.clone());

        assert_eq!(store.get(&id), Some(&deck));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = DeckStore::new();
        assert!(store.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn put_replaces_existing_deck() {
        let mut store = DeckStore::new();
        let mut deck = Deck::new(false, vec![Card::from_code("AS"), Card::from_code("KD")]);
        let id = deck.id;
        store.put(deck.clone());

        deck.draw(1);
        store.put(deck);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).map(Deck::remaining), Some(1));
    }

    #[test]
    fn get_mut_changes_are_visible() {
        let mut store = DeckStore::new();
        let deck = Deck::new(false, vec![Card::from_code("AS"), Card::from_code("KD")]);
        let id = deck.id;
        store.put(deck);

        if let Some(d) = store.get_mut(&id) {
            d.draw(2);
        }

        assert_eq!(store.get(&id).map(Deck::remaining), Some(0));
    }
}
