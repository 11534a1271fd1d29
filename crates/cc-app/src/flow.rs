//! The screen sequence: welcome, game, counting, doubling, round result,
//! history. Line-oriented; every screen prints a short status and reads
//! one command at a time. The session is the only state, the screens are
//! a view over it.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use cc_core::game::session::GameSession;
use cc_core::model::card::SpecialCard;
use cc_core::model::suit::Suit;
use cc_core::model::team::TeamSide;
use tracing::{info, warn};

use crate::detector::{CardDetector, DEFAULT_DETECT_URL};
use crate::report;
use crate::storage::Storage;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Screen {
    Welcome,
    Game,
    ConfirmNewGame,
    Counting,
    Doubling,
    RoundResult,
    History,
}

#[derive(Debug, Clone)]
pub struct DetectorConfig {
    pub url: String,
    pub api_key: Option<String>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DETECT_URL.to_string(),
            api_key: None,
        }
    }
}

pub struct Flow {
    screen: Screen,
    session: GameSession,
    storage: Storage,
    detector: DetectorConfig,
}

impl Flow {
    pub fn new(storage: Storage, detector: DetectorConfig) -> Self {
        Self {
            screen: Screen::Welcome,
            session: GameSession::default(),
            storage,
            detector,
        }
    }

    /// Drives the whole screen sequence until `quit` or end of input.
    /// The running game is saved on every finalized round and on exit.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        writeln!(out, "CC Counter - Complex Partnership score keeper")?;
        loop {
            self.render(&mut out)?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                self.save(&mut out)?;
                return Ok(());
            }
            if !self.handle(line.trim(), &mut input, &mut out)? {
                return Ok(());
            }
        }
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.screen {
            Screen::Welcome => {
                writeln!(out, "[welcome] new | continue | quit")?;
            }
            Screen::Game => {
                writeln!(out, "{}", report::scoreboard_line(&self.session))?;
                writeln!(out, "[game] round | history | new | quit")?;
            }
            Screen::ConfirmNewGame => {
                writeln!(out, "Discard the game in progress and start over? (y/n)")?;
            }
            Screen::Counting => {
                self.render_counting(out)?;
            }
            Screen::Doubling => {
                self.render_doubling(out)?;
            }
            Screen::RoundResult => {
                writeln!(out, "[result] ok")?;
            }
            Screen::History => {
                writeln!(out, "{}", report::history_table(&self.session))?;
                writeln!(out, "[history] back")?;
            }
        }
        out.flush()?;
        Ok(())
    }

    fn render_counting<W: Write>(&self, out: &mut W) -> Result<()> {
        let Some(round) = self.session.active_round() else {
            return Ok(());
        };
        let obs = &round.observation;
        let queens: Vec<String> = obs.queens.iter().map(|s| s.to_string()).collect();
        writeln!(
            out,
            "counting for {}: tricks {} | diamonds {} | queens [{}] | king {}",
            self.session.team_name(round.acting_team),
            obs.tricks(),
            obs.diamonds(),
            queens.join(" "),
            if obs.king_of_hearts { "yes" } else { "no" },
        )?;
        writeln!(
            out,
            "[counting] t+ t- d+ d- | t <n> | d <n> | q <s|h|d|c> | k | photo <file> | next | cancel"
        )?;
        Ok(())
    }

    fn render_doubling<W: Write>(&self, out: &mut W) -> Result<()> {
        let Some(round) = self.session.active_round() else {
            return Ok(());
        };
        let obs = &round.observation;
        let ours = card_list(&obs.eligible_for_doubling_against(), |card| {
            obs.doubled_against.is_doubled(card)
        });
        let theirs = card_list(&obs.eligible_for_doubling_by(), |card| {
            obs.doubled_by.is_doubled(card)
        });
        writeln!(out, "doubled against us: {ours}")?;
        writeln!(out, "doubled by us:      {theirs}")?;
        writeln!(out, "[doubling] opp <card> | mine <card> | done | back")?;
        Ok(())
    }

    /// Returns false when the flow should exit.
    fn handle<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        out: &mut W,
    ) -> Result<bool> {
        match self.screen.clone() {
            Screen::Welcome => self.handle_welcome(line, input, out),
            Screen::Game => self.handle_game(line, out),
            Screen::ConfirmNewGame => {
                self.screen = if line.eq_ignore_ascii_case("y") {
                    Screen::Welcome
                } else {
                    Screen::Game
                };
                Ok(true)
            }
            Screen::Counting => self.handle_counting(line, out),
            Screen::Doubling => self.handle_doubling(line, out),
            Screen::RoundResult => {
                // Any input dismisses the report.
                self.screen = Screen::Game;
                Ok(true)
            }
            Screen::History => {
                self.screen = Screen::Game;
                Ok(true)
            }
        }
    }

    fn handle_welcome<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        out: &mut W,
    ) -> Result<bool> {
        match line {
            "new" => {
                let team1 = prompt_line(input, out, "Team 1 name (blank for default): ")?;
                let team2 = prompt_line(input, out, "Team 2 name (blank for default): ")?;
                self.session = GameSession::new(team1, team2);
                self.save(out)?;
                info!("new game started");
                self.screen = Screen::Game;
            }
            "continue" => {
                self.session = self.storage.load_or_default();
                self.screen = Screen::Game;
            }
            "quit" => return Ok(false),
            other => notice(out, &format!("unknown command: {other}"))?,
        }
        Ok(true)
    }

    fn handle_game<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        match line {
            "round" | "round 1" | "round 2" => {
                let acting = if line.ends_with('2') {
                    TeamSide::Two
                } else {
                    TeamSide::One
                };
                self.session.begin_round(acting);
                self.screen = Screen::Counting;
            }
            "history" => self.screen = Screen::History,
            "new" => self.screen = Screen::ConfirmNewGame,
            "quit" => {
                self.save(out)?;
                return Ok(false);
            }
            other => notice(out, &format!("unknown command: {other}"))?,
        }
        Ok(true)
    }

    fn handle_counting<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        match line {
            "next" => {
                self.screen = Screen::Doubling;
                return Ok(true);
            }
            "cancel" => {
                self.session.abandon_round();
                self.screen = Screen::Game;
                return Ok(true);
            }
            _ => {}
        }

        if let Some(path) = line.strip_prefix("photo ") {
            self.run_detection(Path::new(path.trim()), out)?;
            return Ok(true);
        }

        let Some(round) = self.session.active_round_mut() else {
            self.screen = Screen::Game;
            return Ok(true);
        };
        let obs = &mut round.observation;

        match line {
            "t+" => obs.add_tricks(1),
            "t-" => obs.add_tricks(-1),
            "d+" => obs.add_diamonds(1),
            "d-" => obs.add_diamonds(-1),
            "k" => {
                obs.toggle_king();
            }
            other => {
                if let Some(value) = parse_count(other, 't') {
                    obs.set_tricks(value);
                } else if let Some(value) = parse_count(other, 'd') {
                    obs.set_diamonds(value);
                } else if let Some(suit) = parse_suit_command(other) {
                    obs.toggle_queen(suit);
                } else {
                    notice(out, &format!("unknown command: {other}"))?;
                }
            }
        }
        Ok(true)
    }

    fn handle_doubling<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        match line {
            "back" => {
                self.screen = Screen::Counting;
                return Ok(true);
            }
            "done" => {
                if let Some(outcome) = self.session.finalize_round() {
                    writeln!(out, "{}", report::round_report(&self.session, &outcome))?;
                    self.save(out)?;
                    self.screen = Screen::RoundResult;
                } else {
                    self.screen = Screen::Game;
                }
                return Ok(true);
            }
            _ => {}
        }

        let Some(round) = self.session.active_round_mut() else {
            self.screen = Screen::Game;
            return Ok(true);
        };
        let obs = &mut round.observation;

        if let Some(card) = line.strip_prefix("opp ").and_then(parse_card) {
            if obs.eligible_for_doubling_against().contains(&card) {
                obs.doubled_against.toggle(card);
            } else {
                notice(out, "that card was not captured by the counting team")?;
            }
        } else if let Some(card) = line.strip_prefix("mine ").and_then(parse_card) {
            if obs.eligible_for_doubling_by().contains(&card) {
                obs.doubled_by.toggle(card);
            } else {
                notice(out, "that card is held by the counting team")?;
            }
        } else {
            notice(out, &format!("unknown command: {line}"))?;
        }
        Ok(true)
    }

    fn run_detection<W: Write>(&mut self, path: &Path, out: &mut W) -> Result<()> {
        let detector = match CardDetector::new(&self.detector.url, self.detector.api_key.clone()) {
            Ok(detector) => detector,
            Err(err) => return notice(out, &err.to_string()),
        };
        match detector.detect_file(path) {
            Ok(detected) => {
                // Suggestion only: the counting screen stays editable.
                if let Some(round) = self.session.active_round_mut() {
                    detected.apply_to(&mut round.observation);
                }
                writeln!(
                    out,
                    "detected {} cards: {}",
                    detected.cards.len(),
                    detected.cards.join(" ")
                )?;
                notice(out, "counts updated from photo; adjust before scoring")?;
            }
            Err(err) => {
                warn!(%err, "card detection failed");
                notice(out, &err.to_string())?;
            }
        }
        Ok(())
    }

    fn save<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Err(err) = self.storage.save(&self.session) {
            warn!(%err, "could not save game");
            notice(out, "could not save the game; it lives in memory only")?;
        }
        Ok(())
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }
}

fn notice<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "! {message}")?;
    Ok(())
}

fn prompt_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn parse_count(line: &str, prefix: char) -> Option<u8> {
    let rest = line.strip_prefix(prefix)?.trim();
    rest.parse::<u8>().ok()
}

fn parse_suit(code: &str) -> Option<Suit> {
    match code {
        "s" | "S" => Some(Suit::Spade),
        "h" | "H" => Some(Suit::Heart),
        "d" | "D" => Some(Suit::Diamond),
        "c" | "C" => Some(Suit::Club),
        _ => None,
    }
}

fn parse_suit_command(line: &str) -> Option<Suit> {
    parse_suit(line.strip_prefix("q ")?.trim())
}

/// `qs`/`qh`/`qd`/`qc` for queens, `kh` for the king of hearts.
fn parse_card(code: &str) -> Option<SpecialCard> {
    let code = code.trim().to_lowercase();
    if code == "kh" {
        return Some(SpecialCard::KingOfHearts);
    }
    parse_suit(code.strip_prefix('q')?).map(SpecialCard::Queen)
}

fn card_list(cards: &[SpecialCard], is_doubled: impl Fn(SpecialCard) -> bool) -> String {
    if cards.is_empty() {
        return "(none)".to_string();
    }
    cards
        .iter()
        .map(|&card| {
            if is_doubled(card) {
                format!("[{card}]")
            } else {
                card.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
