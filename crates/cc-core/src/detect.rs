//! Consumption contract for the external card-detection service.
//!
//! The service returns a flat list of predictions; this module reduces
//! them to a counting suggestion. The suggestion is merged into a round
//! observation for the user to confirm or fix, never scored directly.

use crate::model::observation::RoundObservation;
use crate::model::scoring::CARDS_PER_TRICK;
use crate::model::suit::{Suit, SuitSet};
use serde::{Deserialize, Serialize};

/// Predictions below this confidence are dropped before any counting.
pub const MIN_CONFIDENCE: f32 = 0.5;

/// One detected card as the service reports it: a class code such as
/// `"QS"` or `"10D"` plus a confidence in 0..1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardPrediction {
    pub class: String,
    pub confidence: f32,
}

/// What the detector saw, reduced to the quantities a round observation
/// needs. Trick count is the rough `cards / 4` heuristic and nothing more.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectedCards {
    pub tricks: u8,
    pub diamonds: u8,
    pub queens: SuitSet,
    pub king_of_hearts: bool,
    /// Class codes that survived the confidence filter, for display.
    pub cards: Vec<String>,
}

impl DetectedCards {
    pub fn from_predictions(predictions: &[CardPrediction]) -> Self {
        let mut detected = DetectedCards::default();
        let mut kept = 0u32;

        for pred in predictions {
            if pred.confidence < MIN_CONFIDENCE {
                continue;
            }
            kept += 1;
            let code = pred.class.to_uppercase();

            // A diamond-suited queen counts in both buckets, exactly as
            // the counting screen treats it.
            if code.ends_with('D') || code.contains("DIAMOND") {
                detected.diamonds = detected.diamonds.saturating_add(1).min(13);
            }

            if code.starts_with('Q') {
                if let Some(suit) = queen_suit(&code) {
                    detected.queens.insert(suit);
                }
            }

            if code.starts_with('K') && (code.contains('H') || code.contains("HEART")) {
                detected.king_of_hearts = true;
            }

            detected.cards.push(code);
        }

        detected.tricks = (kept / CARDS_PER_TRICK).min(13) as u8;
        detected
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Overwrites the observation's counts and captures with this
    /// suggestion. Doubling flags are left alone; those are declarations,
    /// not something a photo can see.
    pub fn apply_to(&self, obs: &mut RoundObservation) {
        obs.set_tricks(self.tricks);
        obs.set_diamonds(self.diamonds);
        obs.queens = self.queens;
        obs.king_of_hearts = self.king_of_hearts;
    }
}

fn queen_suit(code: &str) -> Option<Suit> {
    let tail = &code[1..];
    if tail.contains('S') || tail.contains("SPADE") {
        Some(Suit::Spade)
    } else if tail.contains('H') || tail.contains("HEART") {
        Some(Suit::Heart)
    } else if tail.contains('D') || tail.contains("DIAMOND") {
        Some(Suit::Diamond)
    } else if tail.contains('C') || tail.contains("CLUB") {
        Some(Suit::Club)
    } else {
        None
    }
}
