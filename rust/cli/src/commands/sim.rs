//! # Sim Command
//!
//! Batch self-play: every seat, the human one included, runs the baseline
//! policy, and each finished hand is written as one JSONL record. Useful
//! for sanity-checking the table at volume and for producing hand
//! histories to inspect.

use std::io::Write;

use felt_ai::{DecisionPolicy, create_policy};
use felt_engine::game::{Game, GameOptions, SEAT_COUNT};
use felt_engine::logger::{HandLogger, HandRecord};

use crate::config;
use crate::error::CliError;
use crate::ui;

/// Handle the sim command: self-play `hands` hands, optionally logging
/// JSONL hand records to `output`.
pub fn handle_sim_command(
    hands: u32,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed);

    let mut game = Game::new(GameOptions {
        seed,
        starting_chips: cfg.starting_chips,
        dealer: None,
    });
    let mut policies: Vec<Box<dyn DecisionPolicy>> = (0..SEAT_COUNT)
        .map(|seat| create_policy("baseline", seed.map(|s| s.wrapping_add(seat as u64 + 1))))
        .collect();

    let mut logger = match &output {
        Some(path) => HandLogger::create(path)?,
        None => {
            ui::display_warning(err, "no --output file; hand records are discarded")?;
            HandLogger::sink("sim")
        }
    };

    match seed {
        Some(s) => writeln!(out, "sim: hands={} seed={}", hands, s)?,
        None => writeln!(out, "sim: hands={}", hands)?,
    }

    let mut wins = vec![0u32; SEAT_COUNT];
    let mut played = 0u32;
    for _ in 0..hands {
        game.start_new_round()?;
        while game.phase().is_betting() {
            if let Some(turn) = game.pending_ai_turn() {
                let action = policies[turn.seat].decide(&game.decision_context());
                game.apply_ai_turn(turn, action)?;
            } else {
                // the human seat plays itself in a simulation
                let seat = game.current_seat();
                let action = policies[seat].decide(&game.decision_context());
                game.handle_player_action(action)?;
            }
        }

        // the pot has been settled; reconstruct its size from the totals
        let pot_awarded: u32 = game.players().iter().map(|p| p.total_bet).sum();
        let record = HandRecord {
            hand_id: logger.next_id(),
            // the resolved seed, so even unseeded runs can be replayed
            seed: Some(game.seed()),
            actions: game.action_log().to_vec(),
            community: game.community().to_vec(),
            winners: game.winners().to_vec(),
            pot: pot_awarded,
            round_profit: game.round_profit(),
            total_profit: game.total_profit(),
            ts: None,
            meta: None,
        };
        logger.write(&record)?;

        for &w in game.winners() {
            wins[w] += 1;
        }
        played += 1;

        if game.check_game_over() {
            writeln!(out, "human seat busted after {} hands", played)?;
            break;
        }
    }

    writeln!(out, "hands played: {}", played)?;
    for (i, p) in game.players().iter().enumerate() {
        writeln!(out, "  {}: {} chips, {} wins", p.name, p.chips, wins[i])?;
    }
    writeln!(out, "human profit: {}", game.total_profit())?;
    Ok(())
}
