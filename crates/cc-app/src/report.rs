use std::fmt::Write;

use cc_core::game::session::{GameSession, RoundOutcome};
use cc_core::model::team::TeamSide;

const RULE: &str = "========================================";
const THIN_RULE: &str = "----------------------------------------";

pub fn scoreboard_line(session: &GameSession) -> String {
    format!(
        "{} {} | {} {} | round {}",
        session.team_name(TeamSide::One),
        session.total(TeamSide::One),
        session.team_name(TeamSide::Two),
        session.total(TeamSide::Two),
        session.round_number(),
    )
}

/// Itemized round report: each scoring line, both deltas, running totals,
/// and the expected-vs-actual audit figures.
pub fn round_report(session: &GameSession, outcome: &RoundOutcome) -> String {
    let acting = session.team_name(outcome.acting_team);
    let opponent = session.team_name(outcome.acting_team.other());
    let (acting_delta, opponent_delta) = match outcome.acting_team {
        TeamSide::One => (outcome.record.team1, outcome.record.team2),
        TeamSide::Two => (outcome.record.team2, outcome.record.team1),
    };
    let b = &outcome.breakdown;

    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Round {} counted by {acting}", outcome.record.round_number);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  tricks:     {:>5}", b.trick_points);
    let _ = writeln!(out, "  diamonds:   {:>5}", b.diamond_points);
    let _ = writeln!(out, "  queens:     {:>5}", b.queen_points);
    let _ = writeln!(out, "  king:       {:>5}", b.king_points);
    if b.recovery_points != 0 {
        let _ = writeln!(out, "  doubling:   {:>5}", b.recovery_points);
    }
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(out, "  {acting}: {acting_delta}");
    let _ = writeln!(out, "  {opponent}: {opponent_delta}  (pair sums to -500)");
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(
        out,
        "  totals: {} {} | {} {}",
        session.team_name(TeamSide::One),
        outcome.team1_total,
        session.team_name(TeamSide::Two),
        outcome.team2_total,
    );
    let _ = writeln!(
        out,
        "  expected {} / actual {}{}",
        outcome.expected_total,
        outcome.actual_total,
        if outcome.is_consistent { "" } else { "  !! MISMATCH" },
    );
    let _ = write!(out, "{RULE}");
    out
}

/// Round-by-round table plus the running/expected audit line.
pub fn history_table(session: &GameSession) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:>8}  {:>8}",
        "#",
        session.team_name(TeamSide::One),
        session.team_name(TeamSide::Two),
    );
    if session.history().is_empty() {
        let _ = writeln!(out, "  (no rounds played)");
    }
    for record in session.history().iter() {
        let _ = writeln!(
            out,
            "{:>3}  {:>8}  {:>8}",
            record.round_number, record.team1, record.team2
        );
    }
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = write!(
        out,
        "total {} + {} = {}  (expected {})",
        session.total(TeamSide::One),
        session.total(TeamSide::Two),
        session.actual_total(),
        session.expected_total(),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::{history_table, round_report, scoreboard_line};
    use cc_core::game::session::GameSession;
    use cc_core::model::suit::Suit;
    use cc_core::model::team::TeamSide;

    fn session_after_one_round() -> (GameSession, cc_core::game::session::RoundOutcome) {
        let mut session = GameSession::new("Us", "Them");
        {
            let round = session.begin_round(TeamSide::One);
            round.observation.set_tricks(5);
            round.observation.set_diamonds(3);
            round.observation.toggle_queen(Suit::Heart);
        }
        let outcome = session.finalize_round().unwrap();
        (session, outcome)
    }

    #[test]
    fn round_report_shows_deltas_and_audit() {
        let (session, outcome) = session_after_one_round();
        let report = round_report(&session, &outcome);
        assert!(report.contains("Round 1 counted by Us"));
        assert!(report.contains("Us: -130"));
        assert!(report.contains("Them: -370"));
        assert!(report.contains("expected -500 / actual -500"));
        assert!(!report.contains("MISMATCH"));
    }

    #[test]
    fn history_table_lists_rounds_and_totals() {
        let (session, _) = session_after_one_round();
        let table = history_table(&session);
        assert!(table.contains("-130"));
        assert!(table.contains("-370"));
        assert!(table.contains("(expected -500)"));
    }

    #[test]
    fn empty_history_is_called_out() {
        let session = GameSession::default();
        assert!(history_table(&session).contains("no rounds played"));
        assert!(scoreboard_line(&session).contains("round 0"));
    }
}
