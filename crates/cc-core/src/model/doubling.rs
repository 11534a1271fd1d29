use crate::model::card::SpecialCard;
use serde::{Deserialize, Serialize};

/// Doubling flags for the five special cards: one per queen suit plus one
/// for the king of hearts. A flag only means something for a card the
/// relevant side actually captured; that partition is the caller's to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoubleFlags {
    queens: [bool; 4],
    king_of_hearts: bool,
}

impl DoubleFlags {
    pub const fn new() -> Self {
        Self {
            queens: [false; 4],
            king_of_hearts: false,
        }
    }

    pub fn set(&mut self, card: SpecialCard, doubled: bool) {
        match card {
            SpecialCard::Queen(suit) => self.queens[suit.index()] = doubled,
            SpecialCard::KingOfHearts => self.king_of_hearts = doubled,
        }
    }

    pub fn toggle(&mut self, card: SpecialCard) -> bool {
        let next = !self.is_doubled(card);
        self.set(card, next);
        next
    }

    pub const fn is_doubled(&self, card: SpecialCard) -> bool {
        match card {
            SpecialCard::Queen(suit) => self.queens[suit.index()],
            SpecialCard::KingOfHearts => self.king_of_hearts,
        }
    }

    pub fn any(&self) -> bool {
        self.king_of_hearts || self.queens.iter().any(|&q| q)
    }

    pub fn clear(&mut self) {
        self.queens = [false; 4];
        self.king_of_hearts = false;
    }

    pub fn iter_set(&self) -> impl Iterator<Item = SpecialCard> + '_ {
        SpecialCard::ALL
            .iter()
            .copied()
            .filter(|card| self.is_doubled(*card))
    }
}
