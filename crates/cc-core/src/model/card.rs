use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};

/// The five point-bearing cards: the four queens and the king of hearts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialCard {
    Queen(Suit),
    KingOfHearts,
}

impl SpecialCard {
    pub const ALL: [SpecialCard; 5] = [
        SpecialCard::Queen(Suit::Spade),
        SpecialCard::Queen(Suit::Heart),
        SpecialCard::Queen(Suit::Diamond),
        SpecialCard::Queen(Suit::Club),
        SpecialCard::KingOfHearts,
    ];

    pub const fn base_value(self) -> i32 {
        match self {
            SpecialCard::Queen(_) => 25,
            SpecialCard::KingOfHearts => 75,
        }
    }

    pub const fn is_queen(self) -> bool {
        matches!(self, SpecialCard::Queen(_))
    }
}

impl fmt::Display for SpecialCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialCard::Queen(suit) => write!(f, "Q{suit}"),
            SpecialCard::KingOfHearts => f.write_str("KH"),
        }
    }
}
