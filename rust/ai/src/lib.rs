//! # felt-ai: opponent decision policies
//!
//! Decision policies for the AI seats at a felt table. A policy consumes
//! the read-only [`DecisionContext`] the engine issues for the acting seat
//! and returns a [`PlayerAction`]; it never touches the table itself, so a
//! seat is just a policy attached to an AI seat kind.
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_ai::create_policy;
//! use felt_engine::game::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions {
//!     seed: Some(42),
//!     dealer: Some(0),
//!     ..Default::default()
//! });
//! game.start_new_round().unwrap();
//!
//! let mut policy = create_policy("baseline", Some(7));
//! if let Some(turn) = game.pending_ai_turn() {
//!     let action = policy.decide(&game.decision_context());
//!     game.apply_ai_turn(turn, action).unwrap();
//! }
//! ```

use felt_engine::player::PlayerAction;
use felt_engine::state::DecisionContext;

pub mod baseline;

/// A decision-making strategy for an AI seat.
///
/// Policies may keep internal state (an RNG, counters), hence `&mut self`;
/// the table state they see is the owned context, nothing more.
pub trait DecisionPolicy: Send {
    /// Choose an action for the acting seat given the table context.
    fn decide(&mut self, ctx: &DecisionContext) -> PlayerAction;

    /// Identifier of this policy.
    fn name(&self) -> &str;
}

/// Create a decision policy by name.
///
/// `seed` pins the policy's RNG for reproducible games; pass `None` for
/// fresh randomness.
///
/// # Panics
///
/// Panics on an unknown policy name. Currently only `"baseline"` exists.
///
/// # Example
///
/// ```rust
/// use felt_ai::create_policy;
///
/// let policy = create_policy("baseline", None);
/// assert_eq!(policy.name(), "baseline");
/// ```
pub fn create_policy(policy_type: &str, seed: Option<u64>) -> Box<dyn DecisionPolicy> {
    match policy_type {
        "baseline" => Box::new(match seed {
            Some(s) => baseline::BaselinePolicy::with_seed(s),
            None => baseline::BaselinePolicy::new(),
        }),
        _ => panic!("Unknown policy type: {}", policy_type),
    }
}
