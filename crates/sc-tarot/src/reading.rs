//! Spreads and card drawing.
//!
//! A reading draws distinct cards from the deck without replacement and
//! flips an independent fair coin for the orientation of each one.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::deck::{Card, Orientation};

/// The spreads offered by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spread {
    /// One card.
    Single,
    /// Past, present and future.
    ThreeCard,
    /// Five-card situation spread.
    FiveCard,
}

impl Spread {
    /// Map a menu choice ("1", "2", "3") to a spread.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Single),
            "2" => Some(Self::ThreeCard),
            "3" => Some(Self::FiveCard),
            _ => None,
        }
    }

    /// Number of cards dealt for this spread.
    pub fn card_count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::ThreeCard => 3,
            Self::FiveCard => 5,
        }
    }

    /// Menu label for this spread.
    pub fn label(self) -> &'static str {
        match self {
            Self::Single => "Single Card Reading",
            Self::ThreeCard => "Three Card Reading (Past, Present, Future)",
            Self::FiveCard => "Five Card Reading (Situation)",
        }
    }

    /// Heading printed before the cards, if the spread has one.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            Self::Single => None,
            Self::ThreeCard => Some("📜 Past - Present - Future Spread"),
            Self::FiveCard => Some("📜 Five Card Situation Spread"),
        }
    }

    /// Name of the position at `index` within the spread.
    pub fn position(self, index: usize) -> Option<&'static str> {
        match self {
            Self::ThreeCard => ["Past", "Present", "Future"].get(index).copied(),
            _ => None,
        }
    }

    /// All spreads in menu order.
    pub fn all() -> &'static [Self] {
        &[Self::Single, Self::ThreeCard, Self::FiveCard]
    }
}

/// A card as it landed on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawnCard {
    /// The card drawn.
    pub card: &'static Card,
    /// Its orientation.
    pub orientation: Orientation,
}

impl DrawnCard {
    /// Title shown on the card face.
    pub fn title(&self) -> String {
        match self.orientation {
            Orientation::Upright => self.card.name.to_string(),
            Orientation::Reversed => format!("{} (Reversed)", self.card.name),
        }
    }

    /// Meaning for the drawn orientation.
    pub fn meaning(&self) -> &'static str {
        self.card.meaning(self.orientation)
    }
}

/// A complete reading: the spread and the cards dealt for it.
#[derive(Debug, Clone)]
pub struct Reading {
    /// The spread that was requested.
    pub spread: Spread,
    /// Cards in the order they were dealt.
    pub cards: Vec<DrawnCard>,
}

impl Reading {
    /// Deal a reading for `spread` from `deck`.
    pub fn deal(spread: Spread, deck: &'static [Card], rng: &mut StdRng) -> Self {
        Self {
            spread,
            cards: draw_cards(rng, deck, spread.card_count()),
        }
    }
}

/// Draw `count` distinct cards, each with an independent 50/50 orientation.
///
/// `count` is capped at the deck size.
pub fn draw_cards(rng: &mut StdRng, deck: &'static [Card], count: usize) -> Vec<DrawnCard> {
    let picked: Vec<&'static Card> = deck.choose_multiple(rng, count.min(deck.len())).collect();
    picked
        .into_iter()
        .map(|card| {
            let orientation = if rng.random_bool(0.5) {
                Orientation::Reversed
            } else {
                Orientation::Upright
            };
            tracing::debug!(card = card.name, %orientation, "drew card");
            DrawnCard { card, orientation }
        })
        .collect()
}
