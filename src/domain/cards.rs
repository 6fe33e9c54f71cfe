use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Copy)]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

impl Suit {
    /// Canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "SPADES",
            Suit::Diamonds => "DIAMONDS",
            Suit::Clubs => "CLUBS",
            Suit::Hearts => "HEARTS",
        }
    }

    pub fn from_code(c: char) -> Option<Suit> {
        match c {
            'S' => Some(Suit::Spades),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            'H' => Some(Suit::Hearts),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Copy)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// Canonical deck order, ace low.
    pub const ALL: [Rank; 13] = [
        Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five,
        Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten,
        Rank::Jack, Rank::Queen, Rank::King,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "ACE",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "TEN",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
        }
    }

    pub fn from_code(c: char) -> Option<Rank> {
        match c {
            'A' => Some(Rank::Ace),
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            _ => None,
        }
    }
}

/// A card as it travels over the wire.
///
/// `value` and `suit` are plain strings rather than [`Rank`] / [`Suit`]
/// because client supplied codes are accepted leniently: a character that
/// has no mapping is carried through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub suit: String,
    pub value: String,
    pub code: String,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self::from_value_suit(rank.name(), suit.name())
    }

    /// Builds the code from the first character of each name.
    pub fn from_value_suit(value: &str, suit: &str) -> Self {
        let code: String = value.chars().take(1).chain(suit.chars().take(1)).collect();
        Self {
            suit: suit.to_string(),
            value: value.to_string(),
            code,
        }
    }

    /// Resolves value and suit from a two character code such as `"AS"`.
    ///
    /// Unmapped characters fall back to themselves and a missing character
    /// yields an empty string. The code itself is kept exactly as given.
    pub fn from_code(code: &str) -> Self {
        let mut chars = code.chars();
        let value = chars.next().map(value_name).unwrap_or_default();
        let suit = chars.next().map(suit_name).unwrap_or_default();
        Self {
            suit,
            value,
            code: code.to_string(),
        }
    }
}

fn value_name(c: char) -> String {
    Rank::from_code(c).map(|r| r.name().to_string()).unwrap_or_else(|| c.to_string())
}

fn suit_name(c: char) -> String {
    Suit::from_code(c).map(|s| s.name().to_string()).unwrap_or_else(|| c.to_string())
}
