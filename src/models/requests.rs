/// Decoded query string pairs, in the order they appeared.
pub type QueryPairs = Vec<(String, String)>;

/// A repeated key resolves to its first value.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

/// Query string of `POST /decks`.
#[derive(Debug, Default)]
pub struct CreateDeckQuery {
    pub shuffle: Option<String>,
    pub cards: Option<String>,
}

impl CreateDeckQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            shuffle: first_value(pairs, "shuffle"),
            cards: first_value(pairs, "cards"),
        }
    }

    /// Only the exact string `true` turns shuffling on.
    pub fn shuffle(&self) -> bool {
        self.shuffle.as_deref() == Some("true")
    }
}

/// Query string of `POST /decks/:id/draw`. The count stays raw so the
/// manager can report a bad value after it has checked the deck exists.
#[derive(Debug, Default)]
pub struct DrawQuery {
    pub count: Option<String>,
}

impl DrawQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self { count: first_value(pairs, "count") }
    }
}
