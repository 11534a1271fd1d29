use crate::model::card::SpecialCard;
use crate::model::doubling::DoubleFlags;
use crate::model::scoring::MAX_COUNT;
use crate::model::suit::{Suit, SuitSet};
use serde::{Deserialize, Serialize};

/// Raw facts counted for one round, from the acting team's perspective:
/// tricks and diamonds it conceded, the special cards it captured, and the
/// doubling declarations on both sides.
///
/// Count mutators clamp to 0..=13 so out-of-range values never reach the
/// scoring engine. Capture and doubling flags are deliberately permissive:
/// nothing here checks that a card flagged in `doubled_by` was actually
/// captured by the opponent. That partition belongs to whoever fills the
/// observation in, matching the behavior users already rely on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundObservation {
    tricks: u8,
    diamonds: u8,
    pub queens: SuitSet,
    pub king_of_hearts: bool,
    /// Cards the acting team captured that the opponent doubled.
    pub doubled_against: DoubleFlags,
    /// Cards the opponent captured that the acting team doubled.
    pub doubled_by: DoubleFlags,
}

impl RoundObservation {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn tricks(&self) -> u8 {
        self.tricks
    }

    pub const fn diamonds(&self) -> u8 {
        self.diamonds
    }

    pub fn set_tricks(&mut self, count: u8) {
        self.tricks = count.min(MAX_COUNT);
    }

    pub fn set_diamonds(&mut self, count: u8) {
        self.diamonds = count.min(MAX_COUNT);
    }

    pub fn add_tricks(&mut self, delta: i8) {
        self.tricks = clamp_count(self.tricks, delta);
    }

    pub fn add_diamonds(&mut self, delta: i8) {
        self.diamonds = clamp_count(self.diamonds, delta);
    }

    pub fn toggle_queen(&mut self, suit: Suit) -> bool {
        self.queens.toggle(suit)
    }

    pub fn toggle_king(&mut self) -> bool {
        self.king_of_hearts = !self.king_of_hearts;
        self.king_of_hearts
    }

    /// Cards the acting team captured, i.e. the ones the opponent may have
    /// doubled against it.
    pub fn eligible_for_doubling_against(&self) -> Vec<SpecialCard> {
        let mut cards: Vec<SpecialCard> = self.queens.iter().map(SpecialCard::Queen).collect();
        if self.king_of_hearts {
            cards.push(SpecialCard::KingOfHearts);
        }
        cards
    }

    /// Complement of the capture partition: cards the opponent holds, the
    /// ones the acting team may have doubled.
    pub fn eligible_for_doubling_by(&self) -> Vec<SpecialCard> {
        let mut cards: Vec<SpecialCard> = Suit::ALL
            .iter()
            .copied()
            .filter(|suit| !self.queens.contains(*suit))
            .map(SpecialCard::Queen)
            .collect();
        if !self.king_of_hearts {
            cards.push(SpecialCard::KingOfHearts);
        }
        cards
    }
}

fn clamp_count(current: u8, delta: i8) -> u8 {
    let next = current as i16 + delta as i16;
    next.clamp(0, MAX_COUNT as i16) as u8
}
