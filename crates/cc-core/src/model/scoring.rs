use crate::model::card::SpecialCard;
use crate::model::observation::RoundObservation;
use crate::model::team::TeamSide;
use serde::{Deserialize, Serialize};

pub const TRICK_PENALTY: i32 = 15;
pub const DIAMOND_PENALTY: i32 = 10;
pub const QUEEN_PENALTY: i32 = 25;
pub const KING_OF_HEARTS_PENALTY: i32 = 75;
/// The two teams' round scores always sum to this.
pub const ROUND_TOTAL: i32 = -500;
pub const CARDS_PER_TRICK: u32 = 4;
pub const MAX_COUNT: u8 = 13;

/// Itemized round tally from the acting team's perspective. Every field is
/// already signed: penalties negative, doubling recoveries positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub trick_points: i32,
    pub diamond_points: i32,
    pub queen_points: i32,
    pub king_points: i32,
    pub recovery_points: i32,
}

impl ScoreBreakdown {
    pub fn of(obs: &RoundObservation) -> Self {
        let trick_points = -(obs.tricks() as i32) * TRICK_PENALTY;
        let diamond_points = -(obs.diamonds() as i32) * DIAMOND_PENALTY;

        let mut queen_points = 0;
        for suit in obs.queens.iter() {
            let card = SpecialCard::Queen(suit);
            let doubled = obs.doubled_against.is_doubled(card);
            queen_points -= QUEEN_PENALTY * if doubled { 2 } else { 1 };
        }

        let king_points = if obs.king_of_hearts {
            let doubled = obs.doubled_against.is_doubled(SpecialCard::KingOfHearts);
            -KING_OF_HEARTS_PENALTY * if doubled { 2 } else { 1 }
        } else {
            0
        };

        // A successful double on an opponent capture recovers the card's
        // base value, not the doubled value.
        let recovery_points: i32 = obs.doubled_by.iter_set().map(SpecialCard::base_value).sum();

        Self {
            trick_points,
            diamond_points,
            queen_points,
            king_points,
            recovery_points,
        }
    }

    pub const fn total(&self) -> i32 {
        self.trick_points
            + self.diamond_points
            + self.queen_points
            + self.king_points
            + self.recovery_points
    }
}

/// A scored round: the acting team's signed points and the opponent's
/// fixed-sum complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    pub acting: i32,
    pub opponent: i32,
}

impl RoundScore {
    pub const fn from_acting(acting: i32) -> Self {
        Self {
            acting,
            opponent: ROUND_TOTAL - acting,
        }
    }

    /// Maps the acting/opponent pair onto (team 1 delta, team 2 delta).
    pub const fn for_teams(&self, acting_side: TeamSide) -> (i32, i32) {
        match acting_side {
            TeamSide::One => (self.acting, self.opponent),
            TeamSide::Two => (self.opponent, self.acting),
        }
    }
}

/// Scores one round. Pure and total: no side effects, no error conditions,
/// and the returned pair always sums to [`ROUND_TOTAL`].
pub fn score_round(obs: &RoundObservation) -> RoundScore {
    RoundScore::from_acting(ScoreBreakdown::of(obs).total())
}

#[cfg(test)]
mod tests {
    use super::{ROUND_TOTAL, RoundScore, ScoreBreakdown, score_round};
    use crate::model::card::SpecialCard;
    use crate::model::observation::RoundObservation;
    use crate::model::suit::Suit;
    use crate::model::team::TeamSide;

    #[test]
    fn empty_round_scores_zero_against_the_full_total() {
        let obs = RoundObservation::new();
        let score = score_round(&obs);
        assert_eq!(score.acting, 0);
        assert_eq!(score.opponent, -500);
    }

    #[test]
    fn tricks_diamonds_and_a_queen_add_up() {
        let mut obs = RoundObservation::new();
        obs.set_tricks(5);
        obs.set_diamonds(3);
        obs.toggle_queen(Suit::Heart);
        let score = score_round(&obs);
        assert_eq!(score.acting, -130);
        assert_eq!(score.opponent, -370);
    }

    #[test]
    fn doubling_against_doubles_the_queen_penalty() {
        let mut obs = RoundObservation::new();
        obs.set_tricks(5);
        obs.set_diamonds(3);
        obs.toggle_queen(Suit::Heart);
        obs.doubled_against.set(SpecialCard::Queen(Suit::Heart), true);
        let score = score_round(&obs);
        assert_eq!(score.acting, -155);
        assert_eq!(score.opponent, -345);
    }

    #[test]
    fn doubled_king_of_hearts_costs_one_fifty() {
        let mut obs = RoundObservation::new();
        obs.toggle_king();
        obs.doubled_against.set(SpecialCard::KingOfHearts, true);
        let score = score_round(&obs);
        assert_eq!(score.acting, -150);
        assert_eq!(score.opponent, -350);
    }

    #[test]
    fn successful_double_on_opponent_capture_recovers_points() {
        let mut obs = RoundObservation::new();
        obs.doubled_by.set(SpecialCard::Queen(Suit::Spade), true);
        let score = score_round(&obs);
        assert_eq!(score.acting, 25);
        assert_eq!(score.opponent, -525);
    }

    #[test]
    fn king_recovery_is_seventy_five() {
        let mut obs = RoundObservation::new();
        obs.doubled_by.set(SpecialCard::KingOfHearts, true);
        assert_eq!(score_round(&obs).acting, 75);
    }

    #[test]
    fn pair_always_sums_to_round_total() {
        // Sweep a grid of observations, including inconsistent doubling
        // combinations the engine does not police.
        for tricks in [0u8, 1, 7, 13] {
            for diamonds in [0u8, 4, 13] {
                for queen_mask in 0..16u8 {
                    let mut obs = RoundObservation::new();
                    obs.set_tricks(tricks);
                    obs.set_diamonds(diamonds);
                    for suit in Suit::ALL {
                        if queen_mask & (1 << suit.index()) != 0 {
                            obs.toggle_queen(suit);
                        }
                    }
                    obs.toggle_king();
                    obs.doubled_against.set(SpecialCard::Queen(Suit::Spade), true);
                    obs.doubled_by.set(SpecialCard::KingOfHearts, true);
                    let score = score_round(&obs);
                    assert_eq!(score.acting + score.opponent, ROUND_TOTAL);
                }
            }
        }
    }

    #[test]
    fn capture_versus_doubling_consistency_is_not_checked() {
        // The heart queen is both captured by the acting team and flagged
        // as doubled by it. Contradictory bookkeeping, but the engine takes
        // the observation at face value: -25 for the capture, +25 back.
        let mut obs = RoundObservation::new();
        obs.toggle_queen(Suit::Heart);
        obs.doubled_by.set(SpecialCard::Queen(Suit::Heart), true);
        let score = score_round(&obs);
        assert_eq!(score.acting, 0);
        assert_eq!(score.acting + score.opponent, ROUND_TOTAL);
    }

    #[test]
    fn breakdown_totals_match_the_score() {
        let mut obs = RoundObservation::new();
        obs.set_tricks(2);
        obs.set_diamonds(6);
        obs.toggle_queen(Suit::Diamond);
        obs.toggle_king();
        let breakdown = ScoreBreakdown::of(&obs);
        assert_eq!(breakdown.trick_points, -30);
        assert_eq!(breakdown.diamond_points, -60);
        assert_eq!(breakdown.queen_points, -25);
        assert_eq!(breakdown.king_points, -75);
        assert_eq!(breakdown.recovery_points, 0);
        assert_eq!(breakdown.total(), score_round(&obs).acting);
    }

    #[test]
    fn for_teams_maps_acting_side_onto_deltas() {
        let score = RoundScore::from_acting(-130);
        assert_eq!(score.for_teams(TeamSide::One), (-130, -370));
        assert_eq!(score.for_teams(TeamSide::Two), (-370, -130));
    }
}
