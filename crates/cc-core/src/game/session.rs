use crate::model::history::{GameHistory, RoundRecord};
use crate::model::observation::RoundObservation;
use crate::model::scoring::{ROUND_TOTAL, ScoreBreakdown, score_round};
use crate::model::team::TeamSide;

pub const DEFAULT_TEAM1_NAME: &str = "Us";
pub const DEFAULT_TEAM2_NAME: &str = "Them";

/// The round currently being counted: which side is acting plus the
/// observation filled in so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveRound {
    pub acting_team: TeamSide,
    pub observation: RoundObservation,
}

/// Everything a running game owns: names, running totals, round counter,
/// history, and at most one round in progress. One instance per game,
/// passed explicitly; there is no process-wide session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    team1_name: String,
    team2_name: String,
    team1_total: i64,
    team2_total: i64,
    round_number: u32,
    history: GameHistory,
    current_round: Option<ActiveRound>,
}

/// What `finalize_round` hands back: the appended record, the itemized
/// tally, and the session totals alongside the audit figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub record: RoundRecord,
    pub acting_team: TeamSide,
    pub breakdown: ScoreBreakdown,
    pub team1_total: i64,
    pub team2_total: i64,
    pub expected_total: i64,
    pub actual_total: i64,
    pub is_consistent: bool,
}

impl GameSession {
    pub fn new(team1_name: impl Into<String>, team2_name: impl Into<String>) -> Self {
        Self {
            team1_name: non_empty_or(team1_name.into(), DEFAULT_TEAM1_NAME),
            team2_name: non_empty_or(team2_name.into(), DEFAULT_TEAM2_NAME),
            team1_total: 0,
            team2_total: 0,
            round_number: 0,
            history: GameHistory::new(),
            current_round: None,
        }
    }

    pub fn team_name(&self, side: TeamSide) -> &str {
        match side {
            TeamSide::One => &self.team1_name,
            TeamSide::Two => &self.team2_name,
        }
    }

    pub fn total(&self, side: TeamSide) -> i64 {
        match side {
            TeamSide::One => self.team1_total,
            TeamSide::Two => self.team2_total,
        }
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Starts counting a new round with a fresh observation. Any round
    /// already in progress is superseded and its partial counts dropped.
    pub fn begin_round(&mut self, acting_team: TeamSide) -> &mut ActiveRound {
        self.current_round.insert(ActiveRound {
            acting_team,
            observation: RoundObservation::new(),
        })
    }

    pub fn active_round(&self) -> Option<&ActiveRound> {
        self.current_round.as_ref()
    }

    pub fn active_round_mut(&mut self) -> Option<&mut ActiveRound> {
        self.current_round.as_mut()
    }

    pub fn abandon_round(&mut self) {
        self.current_round = None;
    }

    /// Scores the in-progress observation without consuming it.
    pub fn preview(&self) -> Option<ScoreBreakdown> {
        self.current_round
            .as_ref()
            .map(|round| ScoreBreakdown::of(&round.observation))
    }

    /// Consumes the active round: scores it, applies both deltas to the
    /// running totals, bumps the round counter, and appends the record.
    /// Counting the round number here keeps an abandoned round from ever
    /// skewing the expected-total audit.
    pub fn finalize_round(&mut self) -> Option<RoundOutcome> {
        let round = self.current_round.take()?;
        let breakdown = ScoreBreakdown::of(&round.observation);
        let score = score_round(&round.observation);
        let (team1, team2) = score.for_teams(round.acting_team);

        self.team1_total += team1 as i64;
        self.team2_total += team2 as i64;
        self.round_number += 1;

        let record = RoundRecord {
            round_number: self.round_number,
            team1,
            team2,
        };
        self.history.push(record);

        Some(RoundOutcome {
            record,
            acting_team: round.acting_team,
            breakdown,
            team1_total: self.team1_total,
            team2_total: self.team2_total,
            expected_total: self.expected_total(),
            actual_total: self.actual_total(),
            is_consistent: self.audit(),
        })
    }

    /// `rounds played * -500`; what the running totals must sum to.
    pub fn expected_total(&self) -> i64 {
        self.round_number as i64 * ROUND_TOTAL as i64
    }

    pub fn actual_total(&self) -> i64 {
        self.team1_total + self.team2_total
    }

    pub fn audit(&self) -> bool {
        self.actual_total() == self.expected_total() && self.history.is_consistent(self.round_number)
    }

    /// Zeroes totals, round counter, and history. Names are kept.
    pub fn reset(&mut self) {
        self.team1_total = 0;
        self.team2_total = 0;
        self.round_number = 0;
        self.history = GameHistory::new();
        self.current_round = None;
    }

    pub(crate) fn restore_parts(
        team1_name: String,
        team2_name: String,
        team1_total: i64,
        team2_total: i64,
        round_number: u32,
        history: GameHistory,
    ) -> Self {
        Self {
            team1_name: non_empty_or(team1_name, DEFAULT_TEAM1_NAME),
            team2_name: non_empty_or(team2_name, DEFAULT_TEAM2_NAME),
            team1_total,
            team2_total,
            round_number,
            history,
            current_round: None,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(DEFAULT_TEAM1_NAME, DEFAULT_TEAM2_NAME)
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
