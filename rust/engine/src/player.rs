use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// Kind of seat occupant. The only behavioral difference is that AI seats
/// are driven by a decision policy instead of user input; the engine treats
/// both identically once an action arrives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum SeatKind {
    Human,
    Ai,
}

/// Per-hand status of a seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// In the hand and able to act
    Active,
    /// Surrendered this hand
    Folded,
    /// Entire stack committed; still in the hand but done acting
    AllIn,
    /// Busted: no chips, not dealt into the hand
    Out,
}

/// An action a seat can take during a betting round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when the seat already matches the table bet)
    Check,
    /// Match the table bet
    Call,
    /// Raise the table bet by the given increment
    Raise(u32),
    /// Commit the entire remaining stack
    AllIn,
}

/// Default starting stack for each seat in chips
pub const STARTING_CHIPS: u32 = 1_000;

/// A seat at the table: chip stack, hole cards, betting state.
///
/// `current_bet` is the seat's contribution to the street in progress and
/// resets at every phase boundary; `total_bet` accumulates across the whole
/// hand and only resets when a new hand starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: usize,
    pub name: String,
    pub kind: SeatKind,
    pub chips: u32,
    /// Fixed seat index for the session
    pub position: usize,
    /// Hole cards (0..=2)
    pub cards: Vec<Card>,
    pub status: PlayerStatus,
    pub current_bet: u32,
    pub total_bet: u32,
    pub is_dealer: bool,
    pub is_current: bool,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>, kind: SeatKind, chips: u32, position: usize) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            chips,
            position,
            cards: Vec::with_capacity(2),
            status: PlayerStatus::Active,
            current_bet: 0,
            total_bet: 0,
            is_dealer: false,
            is_current: false,
        }
    }

    /// New-hand reset: clears cards and bet totals; the seat comes back
    /// `Active` if it still has chips, otherwise it is `Out`.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.status = if self.chips > 0 {
            PlayerStatus::Active
        } else {
            PlayerStatus::Out
        };
        self.current_bet = 0;
        self.total_bet = 0;
        self.is_current = false;
    }

    pub fn receive_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Move up to `amount` chips from the stack into the current bet.
    ///
    /// The amount is clamped to the remaining stack; a clamped bet puts the
    /// seat all-in. Returns the chips actually moved. An `Out` seat moves
    /// nothing (blind posting may land on a busted seat).
    pub fn bet(&mut self, amount: u32) -> u32 {
        if self.status == PlayerStatus::Out {
            return 0;
        }
        let mut amount = amount;
        if amount > self.chips {
            amount = self.chips;
            self.status = PlayerStatus::AllIn;
        }
        self.chips -= amount;
        self.current_bet += amount;
        self.total_bet += amount;
        amount
    }

    /// Match the table bet; returns the chips moved (0 if already matched).
    pub fn call(&mut self, table_bet: u32) -> u32 {
        let to_call = table_bet.saturating_sub(self.current_bet);
        self.bet(to_call)
    }

    /// Raise the table bet by `raise_amount` on top of calling it.
    /// Minimum-raise sizing is the table's job, not the seat's.
    pub fn raise(&mut self, table_bet: u32, raise_amount: u32) -> u32 {
        let total = table_bet.saturating_sub(self.current_bet) + raise_amount;
        self.bet(total)
    }

    /// Commit the entire remaining stack. Unlike `bet` this always marks
    /// the seat all-in, even when the stack covers the table bet.
    pub fn all_in(&mut self) -> u32 {
        let amount = self.chips;
        self.status = PlayerStatus::AllIn;
        self.chips = 0;
        self.current_bet += amount;
        self.total_bet += amount;
        amount
    }

    pub fn fold(&mut self) {
        self.status = PlayerStatus::Folded;
    }

    pub fn win_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    pub fn can_act(&self) -> bool {
        self.status == PlayerStatus::Active && self.chips > 0
    }

    /// Still contesting the pot (not folded, not busted out).
    pub fn in_hand(&self) -> bool {
        !matches!(self.status, PlayerStatus::Folded | PlayerStatus::Out)
    }
}
