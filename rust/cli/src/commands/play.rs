//! # Play Command
//!
//! Interactive table: the human holds seat 0 and three baseline-policy AI
//! seats fill the rest. Each prompt accepts `fold`, `check`, `call`,
//! `raise <amount>`, `allin`, or `q` to leave the table; invalid input and
//! rejected actions are reported and the prompt repeats. AI turns run with
//! a cosmetic pacing delay and are echoed to the transcript.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use felt_ai::{DecisionPolicy, create_policy};
use felt_engine::game::{Game, GameOptions, SEAT_COUNT};

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_hole_cards};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};

/// Handle the play command: interactive hands against the AI seats.
///
/// # Arguments
///
/// * `hands` - Stop after this many hands (`None`: play until quit or bust)
/// * `seed` - RNG seed for reproducibility (default: config, then random)
/// * `delay_ms` - AI pacing delay override in milliseconds
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and rejected actions
/// * `stdin` - Input stream for player actions
pub fn handle_play_command(
    hands: Option<u32>,
    seed: Option<u64>,
    delay_ms: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed);
    let delay = Duration::from_millis(delay_ms.unwrap_or(cfg.delay_ms));

    let mut game = Game::new(GameOptions {
        seed,
        starting_chips: cfg.starting_chips,
        dealer: None,
    });
    let mut policies = ai_policies(seed);

    match seed {
        Some(s) => writeln!(out, "play: seed={}", s)?,
        None => writeln!(out, "play")?,
    }

    let mut played = 0u32;
    'session: loop {
        game.start_new_round()?;
        writeln!(out)?;
        writeln!(
            out,
            "=== Hand {} (dealer: {}) ===",
            played + 1,
            game.players()[game.dealer_seat()].name
        )?;

        pump_ai(&mut game, &mut policies, delay, out)?;
        while game.phase().is_betting() {
            render_table(out, &game)?;
            write!(out, "your action (fold/check/call/raise <n>/allin, q quits): ")?;
            out.flush()?;

            let Some(line) = read_stdin_line(stdin) else {
                break 'session;
            };
            match parse_player_action(&line) {
                ParseResult::Quit => break 'session,
                ParseResult::Invalid(msg) => {
                    ui::write_error(err, &msg)?;
                    continue;
                }
                ParseResult::Action(action) => {
                    if let Err(e) = game.handle_player_action(action) {
                        ui::write_error(err, &e.to_string())?;
                        continue;
                    }
                }
            }
            pump_ai(&mut game, &mut policies, delay, out)?;
        }

        report_round_end(out, &game)?;
        played += 1;

        if game.check_game_over() {
            writeln!(out, "You are out of chips. Session over.")?;
            break;
        }
        if let Some(limit) = hands
            && played >= limit
        {
            break;
        }
        if hands.is_none() {
            write!(out, "press enter for the next hand, q to quit: ")?;
            out.flush()?;
            match read_stdin_line(stdin) {
                None => break,
                Some(line) if matches!(parse_player_action(&line), ParseResult::Quit) => break,
                Some(_) => {}
            }
        }
    }

    writeln!(out, "session profit: {}", game.total_profit())?;
    Ok(())
}

/// One seeded policy per AI seat; seat index keys the slice at `seat - 1`.
fn ai_policies(seed: Option<u64>) -> Vec<Box<dyn DecisionPolicy>> {
    (1..SEAT_COUNT)
        .map(|seat| create_policy("baseline", seed.map(|s| s.wrapping_add(seat as u64))))
        .collect()
}

/// Drive AI seats until the action reaches the human or the hand ends.
/// The pacing pause sits here, outside the engine, and the turn ticket
/// keeps a slow decision from landing on a table that moved on.
fn pump_ai(
    game: &mut Game,
    policies: &mut [Box<dyn DecisionPolicy>],
    delay: Duration,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    while let Some(turn) = game.pending_ai_turn() {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        let action = policies[turn.seat - 1].decide(&game.decision_context());
        let name = game.players()[turn.seat].name.clone();
        game.apply_ai_turn(turn, action.clone())?;
        writeln!(out, "{} {}", name, format_action(&action))?;
    }
    Ok(())
}

fn render_table(out: &mut dyn Write, game: &Game) -> Result<(), CliError> {
    let snap = game.snapshot();
    writeln!(out)?;
    writeln!(
        out,
        "{:?}  pot {}  to match {}",
        snap.phase, snap.pot, snap.current_bet
    )?;
    writeln!(out, "board {}", format_board(&snap.community))?;
    for p in &snap.players {
        let marker = if p.is_current { ">" } else { " " };
        let dealer = if p.is_dealer { " (D)" } else { "" };
        writeln!(
            out,
            "{} {}{}: {} chips, bet {}, {:?}  {}",
            marker,
            p.name,
            dealer,
            p.chips,
            p.current_bet,
            p.status,
            format_hole_cards(&p.cards)
        )?;
    }
    Ok(())
}

fn report_round_end(out: &mut dyn Write, game: &Game) -> Result<(), CliError> {
    let snap = game.snapshot();
    if snap.winners.is_empty() {
        // the session was quit mid-hand
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "board {}", format_board(&snap.community))?;
    for &w in &snap.winners {
        let p = &snap.players[w];
        writeln!(out, "{} wins ({})", p.name, format_hole_cards(&p.cards))?;
    }
    if let Some(ev) = game.last_round_end() {
        writeln!(
            out,
            "round profit {}, session profit {}, your chips {}",
            ev.round_profit, ev.total_profit, ev.remaining_chips
        )?;
    }
    Ok(())
}
