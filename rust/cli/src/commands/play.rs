//! Play command handler: interactive hot-seat hold'em.
//!
//! Every seat is prompted in turn on the same terminal. Input comes
//! through `&mut dyn BufRead` so tests can script whole sessions;
//! illegal actions (undersized raises, raises over the stack) re-prompt
//! the same seat rather than ending the hand, and `q` or EOF ends the
//! session gracefully.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use holdem_engine::betting::Street;
use holdem_engine::engine::{Engine, HandOutcome};
use holdem_engine::errors::GameError;
use holdem_engine::game::Blinds;
use holdem_engine::logger::{ActionRecord, HandLogger, HandRecord, ShowdownInfo};

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_card, format_category};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_player_action, ParseResult};

/// Handle the play command.
///
/// Flags override the resolved configuration (file and environment);
/// anything left unset falls back to the config defaults.
///
/// # Arguments
///
/// * `players` - Seats at the table (2-9)
/// * `hands` - Number of hands to play (must be >= 1, default 1)
/// * `seed` - RNG seed for a reproducible session (default: random)
/// * `stack` - Starting stack per seat in chips
/// * `log` - Optional JSONL hand-history file
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for player actions
pub fn handle_play_command(
    players: Option<usize>,
    hands: Option<u32>,
    seed: Option<u64>,
    stack: Option<u32>,
    log: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let players = players.unwrap_or(cfg.players);
    let hands = hands.unwrap_or(1);
    let stack = stack.unwrap_or(cfg.starting_stack);
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let blinds = Blinds::new(cfg.small_blind, cfg.big_blind)?;
    let mut engine = Engine::new(players, stack, blinds, seed)?;
    let mut logger = match log {
        Some(path) => Some(HandLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "play: players={} hands={} stack={} seed={}",
        players, hands, stack, seed
    )?;
    writeln!(out, "Blinds: SB={} BB={}", blinds.small, blinds.big)?;

    let mut played = 0u32;
    let mut quit_requested = false;

    for i in 1..=hands {
        if quit_requested {
            break;
        }
        match engine.begin_hand() {
            Ok(()) => {}
            Err(GameError::NotEnoughPlayers) => {
                writeln!(out, "Not enough funded seats to continue.")?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
        writeln!(out, "Hand {} (button seat {})", i, engine.button_index())?;

        let mut actions: Vec<ActionRecord> = Vec::new();
        loop {
            while let Some(seat) = engine.current_seat() {
                let street = engine.street().unwrap_or(Street::Preflop);
                prompt_seat(&engine, seat, out)?;

                let Some(input) = read_stdin_line(stdin) else {
                    quit_requested = true;
                    break;
                };
                match parse_player_action(&input) {
                    ParseResult::Action(action) => match engine.apply_action(seat, action) {
                        Ok(outcome) => {
                            writeln!(
                                out,
                                "Seat {} {} (pot {})",
                                seat,
                                format_action(&outcome.action),
                                outcome.pot
                            )?;
                            actions.push(ActionRecord {
                                seat,
                                street,
                                action: outcome.action,
                            });
                        }
                        Err(e) => {
                            // recoverable: same seat stays to act
                            ui::write_error(err, &e.to_string())?;
                        }
                    },
                    ParseResult::Quit => {
                        quit_requested = true;
                        break;
                    }
                    ParseResult::Invalid(msg) => {
                        ui::write_error(err, &msg)?;
                    }
                }
                if engine.hand_resolved() {
                    break;
                }
            }
            if quit_requested || engine.hand_resolved() {
                break;
            }
            let street = engine.advance_street()?;
            writeln!(out, "{}: {}", street_name(street), format_board(engine.board()))?;
        }
        if quit_requested {
            writeln!(out, "Session ended.")?;
            break;
        }

        let outcome = engine.finish_hand()?;
        display_outcome(&engine, &outcome, out)?;
        if let Some(logger) = &mut logger {
            let record = build_record(logger.next_id(), seed, actions, &outcome);
            logger.write(&record)?;
        }
        played += 1;
    }

    writeln!(out, "Hands played: {} (completed)", played)?;
    Ok(())
}

fn street_name(street: Street) -> &'static str {
    match street {
        Street::Preflop => "Preflop",
        Street::Flop => "Flop",
        Street::Turn => "Turn",
        Street::River => "River",
    }
}

/// Show the acting seat its private state: hole cards, stack, what a
/// call costs, and the raise floor.
fn prompt_seat(engine: &Engine, seat: usize, out: &mut dyn Write) -> Result<(), CliError> {
    let player = &engine.players()[seat];
    let hole: Vec<String> = player
        .hole_cards()
        .iter()
        .flatten()
        .map(format_card)
        .collect();
    write!(
        out,
        "Seat {} [{}] stack {} | pot {} to call {} min raise {} > ",
        seat,
        hole.join(" "),
        player.stack(),
        engine.pot(),
        engine.amount_to_call(seat),
        engine.minimum_raise()
    )?;
    out.flush()?;
    Ok(())
}

fn display_outcome(
    engine: &Engine,
    outcome: &HandOutcome,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if !outcome.board.is_empty() {
        writeln!(out, "Board: {}", format_board(&outcome.board))?;
    }
    match &outcome.showdown {
        Some(showdown) => {
            for ranking in &showdown.rankings {
                writeln!(
                    out,
                    "Seat {}: {} {}",
                    ranking.seat,
                    format_category(&ranking.rank.category),
                    format_board(&ranking.rank.best_cards)
                )?;
            }
            for &(seat, amount) in &outcome.payouts {
                writeln!(out, "Seat {} wins {}", seat, amount)?;
            }
        }
        None => {
            for &(seat, amount) in &outcome.payouts {
                writeln!(out, "Seat {} wins {} uncontested", seat, amount)?;
            }
        }
    }
    let stacks: Vec<String> = engine
        .players()
        .iter()
        .map(|p| format!("{}:{}", p.id(), p.stack()))
        .collect();
    writeln!(out, "Stacks: {}", stacks.join(" "))?;
    Ok(())
}

fn build_record(
    hand_id: String,
    seed: u64,
    actions: Vec<ActionRecord>,
    outcome: &HandOutcome,
) -> HandRecord {
    let result = outcome
        .payouts
        .iter()
        .map(|(seat, amount)| format!("seat {} wins {}", seat, amount))
        .collect::<Vec<_>>()
        .join(", ");
    HandRecord {
        hand_id,
        seed: Some(seed),
        actions,
        board: outcome.board.clone(),
        pot: outcome.pot,
        winners: outcome.winners.clone(),
        result: Some(result),
        ts: None,
        showdown: outcome.showdown.as_ref().map(|s| ShowdownInfo {
            winners: s.winners.clone(),
            notes: (s.winners.len() > 1).then(|| "split pot".to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Cursor;

    fn run_session(players: usize, hands: u32, input: &str) -> (Result<(), CliError>, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(
            Some(players),
            Some(hands),
            Some(42),
            Some(100),
            None,
            &mut out,
            &mut err,
            &mut stdin,
        );
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    #[serial]
    fn zero_hands_is_invalid_input() {
        let (result, _) = run_session(2, 0, "");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    #[serial]
    fn eof_quits_gracefully() {
        let (result, output) = run_session(2, 1, "");
        assert!(result.is_ok());
        assert!(output.contains("Session ended."));
        assert!(output.contains("Hands played: 0"));
    }

    #[test]
    #[serial]
    fn folds_complete_a_hand() {
        // heads-up: button folds preflop, big blind wins uncontested
        let (result, output) = run_session(2, 1, "f\n");
        assert!(result.is_ok());
        assert!(output.contains("Seat 0 folds"));
        assert!(output.contains("wins 15 uncontested"));
        assert!(output.contains("Hands played: 1"));
    }

    #[test]
    #[serial]
    fn checked_down_hand_reaches_showdown() {
        // heads-up, both call every street: 2 preflop + 2 per postflop street
        let input = "c\n".repeat(8);
        let (result, output) = run_session(2, 1, &input);
        assert!(result.is_ok());
        assert!(output.contains("Flop:"));
        assert!(output.contains("River:"));
        assert!(output.contains("Seat 0:"));
        assert!(output.contains("Seat 1:"));
        assert!(output.contains("Hands played: 1"));
    }

    #[test]
    #[serial]
    fn completed_hands_are_logged_as_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hands.jsonl");
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(b"f\n".to_vec());
        handle_play_command(
            Some(2),
            Some(1),
            Some(42),
            Some(100),
            Some(path.clone()),
            &mut out,
            &mut err,
            &mut stdin,
        )
        .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1);
        let record: holdem_engine::logger::HandRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(record.seed, Some(42));
        assert_eq!(record.winners, vec![1]);
        assert_eq!(record.pot, 15);
        assert!(record.showdown.is_none());
        assert!(record.ts.is_some());
    }

    #[test]
    #[serial]
    fn illegal_raise_reprompts_the_same_seat() {
        // raise below 2xBB is rejected; the follow-up fold still works
        let (result, output) = run_session(2, 1, "raise 15\nf\n");
        assert!(result.is_ok());
        assert!(output.contains("Seat 0 folds"));
        assert!(output.contains("Hands played: 1"));
    }
}
