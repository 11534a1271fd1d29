use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Spade = 0,
    Heart = 1,
    Diamond = 2,
    Club = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Spade),
            1 => Some(Suit::Heart),
            2 => Some(Suit::Diamond),
            3 => Some(Suit::Club),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_heart(self) -> bool {
        matches!(self, Suit::Heart)
    }

    pub const fn is_diamond(self) -> bool {
        matches!(self, Suit::Diamond)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Spade => "S",
            Suit::Heart => "H",
            Suit::Diamond => "D",
            Suit::Club => "C",
        };
        f.write_str(symbol)
    }
}

/// Fixed-size set of suits. Stands in for the dynamic suit lists the
/// counting screen toggles: one membership bit per suit, nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuitSet {
    members: [bool; 4],
}

impl SuitSet {
    pub const fn new() -> Self {
        Self { members: [false; 4] }
    }

    pub fn insert(&mut self, suit: Suit) {
        self.members[suit.index()] = true;
    }

    pub fn remove(&mut self, suit: Suit) {
        self.members[suit.index()] = false;
    }

    pub fn toggle(&mut self, suit: Suit) -> bool {
        let next = !self.members[suit.index()];
        self.members[suit.index()] = next;
        next
    }

    pub const fn contains(&self, suit: Suit) -> bool {
        self.members[suit.index()]
    }

    pub fn len(&self) -> usize {
        self.members.iter().filter(|&&m| m).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.members.iter().any(|&m| m)
    }

    pub fn clear(&mut self) {
        self.members = [false; 4];
    }

    pub fn iter(&self) -> impl Iterator<Item = Suit> + '_ {
        Suit::ALL.iter().copied().filter(|suit| self.contains(*suit))
    }
}
