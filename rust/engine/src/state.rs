//! Read-only views of the table handed to callers.
//!
//! The engine owns its aggregate state exclusively; presentation layers and
//! decision policies see owned copies, never live references.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Phase;
use crate::player::{PlayerStatus, SeatKind};

/// Snapshot of one seat for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: usize,
    pub name: String,
    pub kind: SeatKind,
    pub chips: u32,
    /// Hole cards with their orientation; renderers draw backs for
    /// face-down cards.
    pub cards: Vec<Card>,
    pub status: PlayerStatus,
    pub current_bet: u32,
    pub total_bet: u32,
    pub is_dealer: bool,
    pub is_current: bool,
}

/// Snapshot of the whole table for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vec<PlayerSnapshot>,
    pub community: Vec<Card>,
    pub pot: u32,
    pub current_bet: u32,
    pub min_raise: u32,
    pub current_seat: usize,
    pub dealer_seat: usize,
    pub phase: Phase,
    /// Seats that won the last resolved hand (empty mid-hand)
    pub winners: Vec<usize>,
}

/// What a decision policy is allowed to see when choosing an action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionContext {
    pub table_bet: u32,
    pub pot: u32,
    pub community: Vec<Card>,
    pub phase: Phase,
}

/// Published once per hand when the pot is awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEnd {
    /// Human seat's net for the hand (chips won minus chips invested;
    /// zero when the human did not win)
    pub round_profit: i64,
    /// Human seat's accumulated net across the session
    pub total_profit: i64,
    /// Human seat's stack after the award
    pub remaining_chips: u32,
}
