use cc_core::game::serialization::SessionSnapshot;
use cc_core::game::session::GameSession;
use cc_core::model::card::SpecialCard;
use cc_core::model::scoring::ROUND_TOTAL;
use cc_core::model::suit::Suit;
use cc_core::model::team::TeamSide;

fn fill_observation(session: &mut GameSession, seed: u32) {
    let round = session.active_round_mut().expect("round in progress");
    let obs = &mut round.observation;
    obs.set_tricks((seed % 14) as u8);
    obs.set_diamonds((seed / 2 % 14) as u8);
    for suit in Suit::ALL {
        if seed >> suit.index() & 1 == 1 {
            obs.toggle_queen(suit);
        }
    }
    if seed % 3 == 0 {
        obs.toggle_king();
        obs.doubled_against.set(SpecialCard::KingOfHearts, seed % 6 == 0);
    }
    if seed % 5 == 0 {
        obs.doubled_by.set(SpecialCard::Queen(Suit::Club), true);
    }
}

#[test]
fn history_sums_to_rounds_times_total_for_any_sequence() {
    let mut session = GameSession::new("Alpha", "Beta");
    for seed in 0..40u32 {
        let acting = if seed % 2 == 0 { TeamSide::One } else { TeamSide::Two };
        session.begin_round(acting);
        fill_observation(&mut session, seed.wrapping_mul(2654435761));
        let outcome = session.finalize_round().expect("round finalized");
        assert!(outcome.is_consistent, "audit broke at round {}", outcome.record.round_number);
    }

    assert_eq!(session.round_number(), 40);
    assert_eq!(session.actual_total(), 40 * ROUND_TOTAL as i64);
    assert_eq!(session.history().actual_total(), session.actual_total());
    assert!(session.audit());
}

#[test]
fn abandoned_rounds_never_enter_the_books() {
    let mut session = GameSession::default();
    session.begin_round(TeamSide::One);
    fill_observation(&mut session, 7);
    session.abandon_round();

    session.begin_round(TeamSide::Two);
    fill_observation(&mut session, 11);
    session.finalize_round().unwrap();

    assert_eq!(session.round_number(), 1);
    assert_eq!(session.history().len(), 1);
    assert!(session.audit());
}

#[test]
fn snapshot_roundtrip_preserves_a_played_game() {
    let mut session = GameSession::new("Night Shift", "Day Shift");
    for seed in 0..5u32 {
        session.begin_round(TeamSide::One);
        fill_observation(&mut session, seed * 13 + 1);
        session.finalize_round().unwrap();
    }

    let json = SessionSnapshot::to_json(&session).unwrap();
    let restored = SessionSnapshot::from_json(&json).unwrap().restore();

    assert_eq!(restored, session);
    assert_eq!(restored.team_name(TeamSide::One), "Night Shift");
    assert_eq!(restored.history().len(), 5);
    assert!(restored.audit());

    // Reserializing the restored session yields the same document.
    assert_eq!(SessionSnapshot::to_json(&restored).unwrap(), json);
}

#[test]
fn corrupt_snapshot_fails_parse_cleanly() {
    assert!(SessionSnapshot::from_json("{not json").is_err());
    assert!(SessionSnapshot::from_json("{\"team1_name\": 3}").is_err());
}
