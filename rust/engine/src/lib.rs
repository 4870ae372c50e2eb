//! # felt-engine: four-seat hold'em table core
//!
//! The betting round state machine behind a single-table hold'em game
//! played against three computer opponents. The engine owns the deck, the
//! seats, the community cards and the pot; callers drive it one action at
//! a time and observe it through owned snapshots.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`game`] - The table: phases, blinds, turn order, showdown, pot award
//! - [`player`] - Seat state, actions, and chip operations
//! - [`rules`] - Betting-rule normalization (check legality, raise floors)
//! - [`hand`] - Showdown evaluation (highest-card placeholder)
//! - [`state`] - Read-only snapshots handed to callers
//! - [`logger`] - Hand records and JSONL hand-history output
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_engine::game::{Game, GameOptions, Phase};
//! use felt_engine::player::PlayerAction;
//!
//! let mut game = Game::new(GameOptions {
//!     seed: Some(42),
//!     dealer: Some(0),
//!     ..Default::default()
//! });
//!
//! game.start_new_round()?;
//! assert_eq!(game.phase(), Phase::PreFlop);
//!
//! // The seat after the big blind opens; calling keeps the hand going.
//! game.handle_player_action(PlayerAction::Call)?;
//! # Ok::<(), felt_engine::errors::GameError>(())
//! ```
//!
//! ## Deterministic gameplay
//!
//! All shuffling and dealer selection flows from the session seed, so the
//! same seed and action sequence replays the same hands.
//!
//! ## AI turns
//!
//! When the acting seat is an AI, [`game::Game::pending_ai_turn`] issues a
//! ticket; the driver asks a decision policy for an action against
//! [`game::Game::decision_context`] and submits it with
//! [`game::Game::apply_ai_turn`]. Tickets from superseded turns are
//! rejected, so pacing delays can never mutate a stale table.

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod state;
