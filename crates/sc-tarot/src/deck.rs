//! The Major Arcana deck and card orientation.

use std::fmt;

/// A tarot card with its two divinatory meanings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    /// Card name as printed on the card face.
    pub name: &'static str,
    /// Meaning when the card is drawn upright.
    pub upright: &'static str,
    /// Meaning when the card is drawn reversed.
    pub reversed: &'static str,
}

impl Card {
    /// Meaning of this card for the given orientation.
    pub fn meaning(&self, orientation: Orientation) -> &'static str {
        match orientation {
            Orientation::Upright => self.upright,
            Orientation::Reversed => self.reversed,
        }
    }
}

/// Which way up a drawn card landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Card faces the reader.
    Upright,
    /// Card is upside down.
    Reversed,
}

impl Orientation {
    /// Returns true for [`Orientation::Reversed`].
    pub fn is_reversed(self) -> bool {
        self == Self::Reversed
    }

    /// Glyph printed in the middle of the card.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Upright => "⌃",
            Self::Reversed => "⌄",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upright => write!(f, "upright"),
            Self::Reversed => write!(f, "reversed"),
        }
    }
}

/// The 22 cards of the Major Arcana, in traditional order.
pub const MAJOR_ARCANA: [Card; 22] = [
    Card {
        name: "The Fool",
        upright: "New beginnings, innocence, spontaneity, free spirit",
        reversed: "Recklessness, taken advantage of, inconsideration",
    },
    Card {
        name: "The Magician",
        upright: "Manifestation, resourcefulness, power, inspired action",
        reversed: "Manipulation, poor planning, untapped talents",
    },
    Card {
        name: "The High Priestess",
        upright: "Intuition, sacred knowledge, divine feminine, subconscious",
        reversed: "Secrets, disconnected from intuition, withdrawal",
    },
    Card {
        name: "The Empress",
        upright: "Femininity, beauty, nature, nurturing, abundance",
        reversed: "Creative block, dependence on others, emptiness",
    },
    Card {
        name: "The Emperor",
        upright: "Authority, structure, control, fatherhood, discipline",
        reversed: "Domination, excessive control, lack of discipline",
    },
    Card {
        name: "The Hierophant",
        upright: "Spiritual wisdom, tradition, conformity, institutions",
        reversed: "Rebellion, subversiveness, new approaches",
    },
    Card {
        name: "The Lovers",
        upright: "Love, harmony, relationships, values alignment, choices",
        reversed: "Self-love, disharmony, imbalance, misalignment",
    },
    Card {
        name: "The Chariot",
        upright: "Control, willpower, success, determination, direction",
        reversed: "Self-discipline, opposition, lack of direction",
    },
    Card {
        name: "Strength",
        upright: "Courage, persuasion, influence, compassion, inner strength",
        reversed: "Self-doubt, weakness, insecurity, low energy",
    },
    Card {
        name: "The Hermit",
        upright: "Soul-searching, introspection, inner guidance, solitude",
        reversed: "Isolation, loneliness, withdrawal from others",
    },
    Card {
        name: "Wheel of Fortune",
        upright: "Good luck, karma, life cycles, destiny, turning point",
        reversed: "Bad luck, resistance to change, breaking cycles",
    },
    Card {
        name: "Justice",
        upright: "Justice, fairness, truth, cause and effect, law",
        reversed: "Unfairness, lack of accountability, dishonesty",
    },
    Card {
        name: "The Hanged Man",
        upright: "Pause, surrender, letting go, new perspectives",
        reversed: "Delays, resistance, stalling, indecision",
    },
    Card {
        name: "Death",
        upright: "Endings, change, transformation, transition",
        reversed: "Resistance to change, personal transformation, inner purging",
    },
    Card {
        name: "Temperance",
        upright: "Balance, moderation, patience, purpose, meaning",
        reversed: "Imbalance, excess, self-healing, re-alignment",
    },
    Card {
        name: "The Devil",
        upright: "Shadow self, attachment, addiction, restriction, sexuality",
        reversed: "Releasing limiting beliefs, exploring dark thoughts, detachment",
    },
    Card {
        name: "The Tower",
        upright: "Sudden change, upheaval, chaos, revelation, awakening",
        reversed: "Personal transformation, fear of change, averting disaster",
    },
    Card {
        name: "The Star",
        upright: "Hope, faith, purpose, renewal, spirituality",
        reversed: "Lack of faith, despair, self-trust, disconnection",
    },
    Card {
        name: "The Moon",
        upright: "Illusion, fear, anxiety, subconscious, intuition",
        reversed: "Release of fear, repressed emotion, inner confusion",
    },
    Card {
        name: "The Sun",
        upright: "Positivity, fun, warmth, success, vitality",
        reversed: "Inner child, feeling down, overly optimistic",
    },
    Card {
        name: "Judgement",
        upright: "Judgement, rebirth, inner calling, absolution",
        reversed: "Self-doubt, inner critic, ignoring the call",
    },
    Card {
        name: "The World",
        upright: "Completion, accomplishment, travel, fulfillment",
        reversed: "Seeking closure, short-cuts, delays",
    },
];

/// Look up a Major Arcana card by name (case-insensitive).
pub fn find_card(name: &str) -> Option<&'static Card> {
    MAJOR_ARCANA
        .iter()
        .find(|card| card.name.eq_ignore_ascii_case(name.trim()))
}
