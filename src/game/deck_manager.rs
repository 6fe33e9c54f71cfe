use tokio::sync::{mpsc, oneshot};
use uuid::Uuid;
use rand::{rngs::StdRng, SeedableRng};

use crate::card_game;
use crate::domain::{Card, Deck, DeckError, DeckResult, DeckStore};
use crate::shared::COMMAND_CHANNEL_CAPACITY;

pub enum DeckCommand {
    Create { shuffle: bool, cards: Option<String>, reply: oneshot::Sender<Deck> },
    Open { id: Uuid, reply: oneshot::Sender<DeckResult<Deck>> },
    Draw { id: Uuid, count: Option<String>, reply: oneshot::Sender<DeckResult<Vec<Card>>> },
}

/// Owns the deck store. Commands are handled one at a time, so a draw's
/// validate-then-mutate sequence never interleaves with another request.
pub struct DeckManager {
    store: DeckStore,
    rng: StdRng,
}

impl DeckManager {
    pub fn new(store: DeckStore) -> Self {
        Self { store, rng: StdRng::from_entropy() }
    }

    #[cfg(test)]
    pub fn with_rng(store: DeckStore, rng: StdRng) -> Self {
        Self { store, rng }
    }

    /// Spawns the manager on the current runtime and returns a handle to it.
    pub fn start(self) -> DeckHandle {
        let (tx_cmd, rx_cmd) = mpsc::channel::<DeckCommand>(COMMAND_CHANNEL_CAPACITY);
        let mut manager = self;
        tokio::spawn(async move { manager.run(rx_cmd).await; });
        DeckHandle { tx: tx_cmd }
    }

    async fn run(&mut self, mut rx: mpsc::Receiver<DeckCommand>) {
        while let Some(cmd) = rx.recv().await {
            match cmd {
                DeckCommand::Create { shuffle, cards, reply } => {
                    let deck = self.create_deck(shuffle, cards.as_deref());
                    let _ = reply.send(deck);
                }
                DeckCommand::Open { id, reply } => {
                    let res = self.open_deck(&id);
                    let _ = reply.send(res);
                }
                DeckCommand::Draw { id, count, reply } => {
                    let res = self.draw_cards(&id, count.as_deref());
                    let _ = reply.send(res);
                }
            }
        }
        tracing::info!(decks = self.store.len(), "DeckManager actor exiting (command channel closed)");
    }

    fn create_deck(&mut self, shuffle: bool, cards: Option<&str>) -> Deck {
        let deck = card_game::create_deck(shuffle, cards, &mut self.rng);
        tracing::info!(deck_id = %deck.id, remaining = deck.remaining(), shuffled = deck.shuffled, "deck created");
        self.store.put(deck.clone());
        deck
    }

    fn open_deck(&self, id: &Uuid) -> DeckResult<Deck> {
        self.store.get(id).cloned().ok_or_else(|| not_found(id))
    }

    fn draw_cards(&mut self, id: &Uuid, count: Option<&str>) -> DeckResult<Vec<Card>> {
        let deck = self.store.get_mut(id).ok_or_else(|| not_found(id))?;

        let count = parse_count(count)?;
        if count <= 0 {
            return Err(DeckError::NonPositiveCount);
        }

        let remaining = deck.remaining();
        let take = usize::try_from(count).unwrap_or(usize::MAX);
        if take > remaining {
            return Err(DeckError::NotEnoughCards { remaining, requested: count });
        }

        let drawn = deck.draw(take);
        tracing::info!(deck_id = %id, count = take, remaining = deck.remaining(), "cards drawn");
        Ok(drawn)
    }
}

fn not_found(id: &Uuid) -> DeckError {
    tracing::warn!("No deck found for UUID {}", id);
    DeckError::DeckNotFound
}

fn parse_count(raw: Option<&str>) -> DeckResult<i64> {
    raw.and_then(|s| s.parse::<i64>().ok()).ok_or(DeckError::InvalidCount)
}

/// Cheap cloneable sender side of the manager, shared by request handlers.
#[derive(Clone)]
pub struct DeckHandle {
    tx: mpsc::Sender<DeckCommand>,
}

impl DeckHandle {
    pub async fn create(&self, shuffle: bool, cards: Option<String>) -> DeckResult<Deck> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(DeckCommand::Create { shuffle, cards, reply })
            .await
            .map_err(|_| DeckError::CreateFailed)?;
        rx.await.map_err(|_| DeckError::CreateFailed)
    }

    pub async fn open(&self, id: Uuid) -> DeckResult<Deck> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(DeckCommand::Open { id, reply })
            .await
            .map_err(|_| DeckError::ManagerUnavailable)?;
        rx.await.map_err(|_| DeckError::ManagerUnavailable)?
    }

    pub async fn draw(&self, id: Uuid, count: Option<String>) -> DeckResult<Vec<Card>> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(DeckCommand::Draw { id, count, reply })
            .await
            .map_err(|_| DeckError::ManagerUnavailable)?;
        rx.await.map_err(|_| DeckError::ManagerUnavailable)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::FULL_DECK_SIZE;

    fn manager() -> DeckHandle {
        DeckManager::with_rng(DeckStore::new(), StdRng::seed_from_u64(11)).start()
    }

    #[tokio::test]
    async fn created_deck_can_be_opened() {
        let decks = manager();
        let created = decks.create(true, None).await.unwrap();
        let opened = decks.open(created.id).await.unwrap();
        assert_eq!(created, opened);
        assert_eq!(opened.remaining(), FULL_DECK_SIZE);
    }

    #[tokio::test]
    async fn unknown_deck_is_not_found() {
        let decks = manager();
        assert_eq!(decks.open(Uuid::new_v4()).await, Err(DeckError::DeckNotFound));
        assert_eq!(
            decks.draw(Uuid::new_v4(), Some("1".into())).await,
            Err(DeckError::DeckNotFound)
        );
    }

    #[tokio::test]
    async fn missing_deck_wins_over_bad_count() {
        let decks = manager();
        assert_eq!(
            decks.draw(Uuid::new_v4(), Some("abc".into())).await,
            Err(DeckError::DeckNotFound)
        );
    }

    #[tokio::test]
    async fn draw_removes_cards_from_the_stored_deck() {
        let decks = manager();
        let created = decks.create(false, None).await.unwrap();

        let drawn = decks.draw(created.id, Some("3".into())).await.unwrap();
        assert_eq!(drawn, created.cards[FULL_DECK_SIZE - 3..].to_vec());

        let opened = decks.open(created.id).await.unwrap();
        assert_eq!(opened.remaining(), FULL_DECK_SIZE - 3);
        assert_eq!(opened.cards, created.cards[..FULL_DECK_SIZE - 3].to_vec());
    }

    #[tokio::test]
    async fn invalid_counts_are_rejected_without_mutation() {
        let decks = manager();
        let created = decks.create(false, Some("AS,KD".into())).await.unwrap();
        let id = created.id;

        assert_eq!(decks.draw(id, None).await, Err(DeckError::InvalidCount));
        assert_eq!(decks.draw(id, Some("two".into())).await, Err(DeckError::InvalidCount));
        assert_eq!(decks.draw(id, Some("1.5".into())).await, Err(DeckError::InvalidCount));
        assert_eq!(decks.draw(id, Some("0".into())).await, Err(DeckError::NonPositiveCount));
        assert_eq!(decks.draw(id, Some("-4".into())).await, Err(DeckError::NonPositiveCount));
        assert_eq!(
            decks.draw(id, Some("3".into())).await,
            Err(DeckError::NotEnoughCards { remaining: 2, requested: 3 })
        );

        assert_eq!(decks.open(id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn concurrent_draws_never_hand_out_a_card_twice() {
        let decks = manager();
        let created = decks.create(true, None).await.unwrap();

        let mut tasks = Vec::new();
        for _ in 0..FULL_DECK_SIZE {
            let decks = decks.clone();
            tasks.push(tokio::spawn(async move { decks.draw(created.id, Some("1".into())).await }));
        }

        let mut drawn = Vec::new();
        for task in tasks {
            drawn.extend(task.await.unwrap().unwrap());
        }

        drawn.sort_by(|a, b| a.code.cmp(&b.code));
        drawn.dedup();
        assert_eq!(drawn.len(), FULL_DECK_SIZE);
        assert_eq!(decks.open(created.id).await.unwrap().remaining(), 0);
    }
}
