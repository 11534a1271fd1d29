use crate::model::scoring::ROUND_TOTAL;
use serde::{Deserialize, Serialize};

/// One finished round: the round number and both teams' signed deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_number: u32,
    pub team1: i32,
    pub team2: i32,
}

/// Append-only record of finished rounds, ordered by round number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameHistory {
    records: Vec<RoundRecord>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: RoundRecord) {
        self.records.push(record);
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoundRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&RoundRecord> {
        self.records.last()
    }

    /// Sum of every delta ever recorded. For a consistent history this is
    /// `rounds * ROUND_TOTAL`.
    pub fn actual_total(&self) -> i64 {
        self.records
            .iter()
            .map(|r| r.team1 as i64 + r.team2 as i64)
            .sum()
    }

    pub fn is_consistent(&self, round_number: u32) -> bool {
        self.actual_total() == round_number as i64 * ROUND_TOTAL as i64
    }
}
