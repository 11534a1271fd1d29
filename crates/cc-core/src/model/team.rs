use core::fmt;
use serde::{Deserialize, Serialize};

/// Which of the two partnerships a value refers to. The team that counted
/// its cards for a round is the "acting" side; the other side's score is
/// derived as the fixed-sum complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TeamSide {
    One = 0,
    Two = 1,
}

impl TeamSide {
    pub const BOTH: [TeamSide; 2] = [TeamSide::One, TeamSide::Two];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn other(self) -> TeamSide {
        match self {
            TeamSide::One => TeamSide::Two,
            TeamSide::Two => TeamSide::One,
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TeamSide::One => "team 1",
            TeamSide::Two => "team 2",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::TeamSide;

    #[test]
    fn other_swaps_sides() {
        assert_eq!(TeamSide::One.other(), TeamSide::Two);
        assert_eq!(TeamSide::Two.other(), TeamSide::One);
    }

    #[test]
    fn index_is_stable() {
        assert_eq!(TeamSide::One.index(), 0);
        assert_eq!(TeamSide::Two.index(), 1);
    }
}
