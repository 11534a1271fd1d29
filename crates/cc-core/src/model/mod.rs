pub mod card;
pub mod doubling;
pub mod history;
pub mod observation;
pub mod scoring;
pub mod suit;
pub mod team;

pub use card::SpecialCard;
pub use doubling::DoubleFlags;
pub use history::{GameHistory, RoundRecord};
pub use observation::RoundObservation;
pub use scoring::{ROUND_TOTAL, RoundScore, ScoreBreakdown, score_round};
pub use suit::{Suit, SuitSet};
pub use team::TeamSide;
