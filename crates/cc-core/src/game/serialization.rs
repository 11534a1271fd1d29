use super::session::GameSession;
use crate::model::history::GameHistory;
use crate::model::team::TeamSide;
use serde::{Deserialize, Serialize};

/// The persisted shape of a game: names, totals, round counter, history.
/// A round in progress is deliberately not part of it; an interrupted
/// count starts over on the next launch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub team1_name: String,
    pub team2_name: String,
    pub team1_total: i64,
    pub team2_total: i64,
    pub round_number: u32,
    #[serde(default)]
    pub history: GameHistory,
}

impl SessionSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        SessionSnapshot {
            team1_name: session.team_name(TeamSide::One).to_string(),
            team2_name: session.team_name(TeamSide::Two).to_string(),
            team1_total: session.total(TeamSide::One),
            team2_total: session.total(TeamSide::Two),
            round_number: session.round_number(),
            history: session.history().clone(),
        }
    }

    pub fn restore(self) -> GameSession {
        GameSession::restore_parts(
            self.team1_name,
            self.team2_name,
            self.team1_total,
            self.team2_total,
            self.round_number,
            self.history,
        )
    }

    pub fn to_json(session: &GameSession) -> serde_json::Result<String> {
        let snapshot = Self::capture(session);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
