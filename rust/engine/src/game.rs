use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::evaluate_hand;
use crate::logger::ActionRecord;
use crate::player::{Player, PlayerAction, PlayerStatus, SeatKind, STARTING_CHIPS};
use crate::rules::{apply_table_rules, Ruling};
use crate::state::{DecisionContext, GameSnapshot, PlayerSnapshot, RoundEnd};

/// Seats at the table: one human plus three AI opponents.
pub const SEAT_COUNT: usize = 4;
/// Forced bet posted by the seat after the dealer.
pub const SMALL_BLIND: u32 = 10;
/// Forced bet posted two seats after the dealer.
pub const BIG_BLIND: u32 = 20;

/// Stage of a hand's betting progression.
///
/// Hands run `Waiting → PreFlop → Flop → Turn → River → Showdown` and the
/// table returns to `Waiting` once the pot is awarded, idling there until
/// the caller starts the next hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Waiting,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Phase {
    /// True while seats may act (blinds posted, pot not yet awarded).
    pub fn is_betting(&self) -> bool {
        matches!(self, Phase::PreFlop | Phase::Flop | Phase::Turn | Phase::River)
    }
}

/// Ticket for a pending AI decision, valid only for the hand and seat it
/// was issued for. A ticket from a superseded hand is rejected, so a slow
/// or torn-down driver can never mutate a table it no longer speaks for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AiTurn {
    pub round: u64,
    pub seat: usize,
}

/// Session construction options.
#[derive(Debug, Clone)]
pub struct GameOptions {
    /// RNG seed for shuffling and dealer selection; random when `None`
    pub seed: Option<u64>,
    pub starting_chips: u32,
    /// Pin the dealer seat for the opening hand (random when `None`)
    pub dealer: Option<usize>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seed: None,
            starting_chips: STARTING_CHIPS,
            dealer: None,
        }
    }
}

type RoundEndHook = Box<dyn FnMut(&RoundEnd) + Send>;

/// A four-seat hold'em table and its betting round state machine.
///
/// The table owns the deck, the seats, the community cards and the pot;
/// callers drive it through [`Game::start_new_round`] and
/// [`Game::handle_player_action`] and observe it through owned snapshots.
///
/// # Examples
///
/// ```
/// use felt_engine::game::{Game, GameOptions, Phase};
///
/// let mut game = Game::new(GameOptions {
///     seed: Some(7),
///     dealer: Some(0),
///     ..Default::default()
/// });
/// game.start_new_round().unwrap();
///
/// // Blinds are in and the seat after the big blind opens the action.
/// assert_eq!(game.phase(), Phase::PreFlop);
/// assert_eq!(game.pot(), 30);
/// assert_eq!(game.current_seat(), 3);
/// ```
pub struct Game {
    deck: Deck,
    players: Vec<Player>,
    community: Vec<Card>,
    pot: u32,
    current_bet: u32,
    min_raise: u32,
    current_seat: usize,
    dealer_seat: usize,
    phase: Phase,
    winners: Vec<usize>,
    small_blind: u32,
    big_blind: u32,
    total_profit: i64,
    round_profit: i64,
    seed: u64,
    round_serial: u64,
    action_log: Vec<ActionRecord>,
    last_round_end: Option<RoundEnd>,
    observers: Vec<RoundEndHook>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("pot", &self.pot)
            .field("current_bet", &self.current_bet)
            .field("current_seat", &self.current_seat)
            .field("dealer_seat", &self.dealer_seat)
            .field("players", &self.players)
            .field("community", &self.community)
            .field("winners", &self.winners)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Create a fresh session: four seats, full stacks, random dealer.
    pub fn new(options: GameOptions) -> Self {
        let seed = options.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let opening_dealer = options
            .dealer
            .unwrap_or_else(|| rng.random_range(0..SEAT_COUNT))
            % SEAT_COUNT;
        // The button rotates as each hand starts, so park it one seat back
        // and the opening hand lands on the requested seat.
        let dealer_seat = (opening_dealer + SEAT_COUNT - 1) % SEAT_COUNT;
        let deck = Deck::new_with_seed(rng.random());

        let chips = options.starting_chips;
        let mut players = vec![Player::new(0, "You", SeatKind::Human, chips, 0)];
        for i in 1..SEAT_COUNT {
            players.push(Player::new(i, format!("AI {}", i), SeatKind::Ai, chips, i));
        }
        players[dealer_seat].is_dealer = true;

        Self {
            deck,
            players,
            community: Vec::with_capacity(5),
            pot: 0,
            current_bet: 0,
            min_raise: BIG_BLIND,
            current_seat: dealer_seat,
            dealer_seat,
            phase: Phase::Waiting,
            winners: Vec::new(),
            small_blind: SMALL_BLIND,
            big_blind: BIG_BLIND,
            total_profit: 0,
            round_profit: 0,
            seed,
            round_serial: 0,
            action_log: Vec::new(),
            last_round_end: None,
            observers: Vec::new(),
        }
    }

    /// Begin a hand: reshuffle, rotate the dealer, deal hole cards, post
    /// blinds and hand the action to the seat after the big blind.
    pub fn start_new_round(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Waiting {
            return Err(GameError::HandInProgress);
        }

        self.round_profit = 0;
        self.reset_table();
        self.round_serial += 1;
        self.deal_hole_cards();
        self.phase = Phase::PreFlop;
        self.collect_blinds();
        Ok(())
    }

    fn reset_table(&mut self) {
        self.deck.shuffle();
        self.community.clear();
        self.pot = 0;
        self.current_bet = 0;
        self.min_raise = self.big_blind;
        for p in &mut self.players {
            p.reset();
        }

        self.dealer_seat = (self.dealer_seat + 1) % self.players.len();
        for (i, p) in self.players.iter_mut().enumerate() {
            p.is_dealer = i == self.dealer_seat;
        }

        self.winners.clear();
        self.action_log.clear();
        self.last_round_end = None;
    }

    /// Two passes over the seats in table order; busted seats are skipped
    /// and the human's cards come out face up.
    fn deal_hole_cards(&mut self) {
        for _ in 0..2 {
            for i in 0..self.players.len() {
                if self.players[i].status == PlayerStatus::Out {
                    continue;
                }
                if let Some(mut card) = self.deck.deal(1).pop() {
                    if self.players[i].kind == SeatKind::Human {
                        card.flip();
                    }
                    self.players[i].receive_card(card);
                }
            }
        }
    }

    fn collect_blinds(&mut self) {
        let n = self.players.len();
        let sb_seat = (self.dealer_seat + 1) % n;
        let posted = self.players[sb_seat].bet(self.small_blind);
        self.pot += posted;

        let bb_seat = (sb_seat + 1) % n;
        let posted = self.players[bb_seat].bet(self.big_blind);
        self.pot += posted;

        self.current_bet = self.big_blind;
        self.set_current_seat((bb_seat + 1) % n);
        // a busted seat cannot open the action
        if !self.players[self.current_seat].can_act() {
            self.move_to_next_player();
        }
    }

    fn set_current_seat(&mut self, seat: usize) {
        for (i, p) in self.players.iter_mut().enumerate() {
            p.is_current = i == seat;
        }
        self.current_seat = seat;
    }

    /// Apply an action for the seat currently entitled to act.
    ///
    /// A rejected action (for now only an illegal check) returns an error
    /// and mutates nothing. On success the moved chips join the pot, the
    /// turn passes on, and the phase advances if the betting round closed.
    pub fn handle_player_action(&mut self, action: PlayerAction) -> Result<(), GameError> {
        if !self.phase.is_betting() {
            return Err(GameError::NoHandInProgress);
        }

        let seat = self.current_seat;
        let ruling = apply_table_rules(
            self.players[seat].current_bet,
            self.current_bet,
            self.min_raise,
            action.clone(),
        )?;

        match ruling {
            Ruling::Fold => self.players[seat].fold(),
            Ruling::Check => {}
            Ruling::Call => {
                let moved = self.players[seat].call(self.current_bet);
                self.pot += moved;
            }
            Ruling::Raise { amount } => {
                let moved = self.players[seat].raise(self.current_bet, amount);
                self.pot += moved;
                // The table bet follows the raiser's street total, and the
                // next raise must top this increment.
                self.current_bet = self.players[seat].current_bet;
                self.min_raise = amount;
            }
            Ruling::AllIn => {
                let moved = self.players[seat].all_in();
                self.pot += moved;
                if self.players[seat].current_bet > self.current_bet {
                    self.current_bet = self.players[seat].current_bet;
                }
            }
        }

        self.action_log.push(ActionRecord {
            seat,
            phase: self.phase,
            action,
        });

        let forced_advance = self.move_to_next_player();
        if !forced_advance && self.is_round_complete() {
            self.advance_phase();
        }
        Ok(())
    }

    /// Pass the turn clockwise to the next seat that can act.
    ///
    /// Returns true when no seat (including the current one) can act, in
    /// which case the betting round is forced to end.
    fn move_to_next_player(&mut self) -> bool {
        let n = self.players.len();
        let start = self.current_seat;
        self.players[start].is_current = false;

        let mut next = (start + 1) % n;
        while next != start && !self.players[next].can_act() {
            next = (next + 1) % n;
        }

        if next == start && !self.players[start].can_act() {
            self.advance_phase();
            return true;
        }

        self.set_current_seat(next);
        false
    }

    /// A betting round is complete when all but one seat folded, or every
    /// seat is folded, out, all-in, or matched up with the table bet.
    fn is_round_complete(&self) -> bool {
        let in_hand = self.players.iter().filter(|p| p.in_hand()).count();
        if in_hand == 1 {
            return true;
        }
        self.players.iter().all(|p| match p.status {
            PlayerStatus::Folded | PlayerStatus::Out | PlayerStatus::AllIn => true,
            // A seat that bet its exact stack stays Active with no chips;
            // it can never match a later raise, so it must not hold the
            // street open.
            PlayerStatus::Active => p.current_bet == self.current_bet || p.chips == 0,
        })
    }

    /// Enter the next phase: deal the street's community cards, reset the
    /// per-street bets and hand the action to the first eligible seat
    /// after the dealer. With nobody left to act the table runs straight
    /// to showdown.
    fn advance_phase(&mut self) {
        match self.phase {
            Phase::PreFlop => {
                self.phase = Phase::Flop;
                self.deal_community(3);
            }
            Phase::Flop => {
                self.phase = Phase::Turn;
                self.deal_community(1);
            }
            Phase::Turn => {
                self.phase = Phase::River;
                self.deal_community(1);
            }
            Phase::River => {
                self.phase = Phase::Showdown;
                self.determine_winner();
            }
            Phase::Showdown | Phase::Waiting => {}
        }

        if self.phase.is_betting() {
            self.reset_bets();

            let n = self.players.len();
            let opener = (1..=n)
                .map(|i| (self.dealer_seat + i) % n)
                .find(|&idx| self.players[idx].can_act());
            match opener {
                Some(idx) => self.set_current_seat(idx),
                None => {
                    self.phase = Phase::Showdown;
                    self.determine_winner();
                }
            }
        }
    }

    fn reset_bets(&mut self) {
        self.current_bet = 0;
        self.min_raise = self.big_blind;
        for p in &mut self.players {
            p.current_bet = 0;
        }
    }

    fn deal_community(&mut self, count: usize) {
        for mut card in self.deck.deal(count) {
            card.flip();
            self.community.push(card);
        }
    }

    /// Resolve the hand. A lone surviving seat wins uncontested without
    /// showing cards; otherwise every contender's cards are revealed,
    /// hands are ranked and all seats tied for the best hand split the pot.
    fn determine_winner(&mut self) {
        let contenders: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.in_hand().then_some(i))
            .collect();

        if contenders.len() == 1 {
            self.winners = contenders;
            self.award_pot();
            return;
        }

        for &i in &contenders {
            for card in &mut self.players[i].cards {
                if !card.face_up {
                    card.flip();
                }
            }
        }

        let ranked: Vec<(usize, u8)> = contenders
            .iter()
            .map(|&i| {
                let hand = evaluate_hand(&self.players[i].cards, &self.community);
                (i, hand.value)
            })
            .collect();
        let best = ranked.iter().map(|&(_, v)| v).max().unwrap_or(0);
        self.winners = ranked
            .into_iter()
            .filter_map(|(i, v)| (v == best).then_some(i))
            .collect();
        self.award_pot();
    }

    /// Split the pot evenly among the winners; the integer remainder goes
    /// to the first winner. The human seat's net for the hand feeds the
    /// session profit counters, and the round-end notification fires.
    fn award_pot(&mut self) {
        if self.winners.is_empty() {
            return;
        }

        let share = self.pot / self.winners.len() as u32;
        for &w in &self.winners {
            self.players[w].win_chips(share);
            if self.players[w].kind == SeatKind::Human {
                self.round_profit = share as i64 - self.players[w].total_bet as i64;
                self.total_profit += self.round_profit;
            }
        }

        let remainder = self.pot - share * self.winners.len() as u32;
        if remainder > 0 {
            let first = self.winners[0];
            self.players[first].win_chips(remainder);
            if self.players[first].kind == SeatKind::Human {
                self.round_profit += remainder as i64;
                self.total_profit += remainder as i64;
            }
        }

        self.pot = 0;
        self.phase = Phase::Waiting;

        let event = RoundEnd {
            round_profit: self.round_profit,
            total_profit: self.total_profit,
            remaining_chips: self.human_player().map(|p| p.chips).unwrap_or(0),
        };
        self.last_round_end = Some(event);
        for hook in &mut self.observers {
            hook(&event);
        }
    }

    /// The session ends once the human seat is out of chips.
    pub fn check_game_over(&self) -> bool {
        self.human_player().map(|p| p.chips == 0).unwrap_or(true)
    }

    fn human_player(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.kind == SeatKind::Human)
    }

    /// Ticket for the AI decision the table is waiting on, if any.
    pub fn pending_ai_turn(&self) -> Option<AiTurn> {
        if !self.phase.is_betting() {
            return None;
        }
        let p = &self.players[self.current_seat];
        (p.kind == SeatKind::Ai && p.can_act()).then_some(AiTurn {
            round: self.round_serial,
            seat: self.current_seat,
        })
    }

    /// Apply a policy decision for a previously issued ticket.
    ///
    /// The ticket must still match the live hand and actor; anything else
    /// is a stale decision from a superseded turn and is rejected without
    /// touching the table.
    pub fn apply_ai_turn(&mut self, turn: AiTurn, action: PlayerAction) -> Result<(), GameError> {
        if turn.round != self.round_serial
            || !self.phase.is_betting()
            || turn.seat != self.current_seat
        {
            tracing::debug!(round = turn.round, seat = turn.seat, "dropping stale AI turn");
            return Err(GameError::StaleAiTurn {
                round: turn.round,
                seat: turn.seat,
            });
        }
        self.handle_player_action(action)
    }

    /// What the acting seat's decision policy is allowed to see.
    pub fn decision_context(&self) -> DecisionContext {
        DecisionContext {
            table_bet: self.current_bet,
            pot: self.pot,
            community: self.community.clone(),
            phase: self.phase,
        }
    }

    /// Owned copy of the table for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self
                .players
                .iter()
                .map(|p| PlayerSnapshot {
                    id: p.id,
                    name: p.name.clone(),
                    kind: p.kind,
                    chips: p.chips,
                    cards: p.cards.clone(),
                    status: p.status,
                    current_bet: p.current_bet,
                    total_bet: p.total_bet,
                    is_dealer: p.is_dealer,
                    is_current: p.is_current,
                })
                .collect(),
            community: self.community.clone(),
            pot: self.pot,
            current_bet: self.current_bet,
            min_raise: self.min_raise,
            current_seat: self.current_seat,
            dealer_seat: self.dealer_seat,
            phase: self.phase,
            winners: self.winners.clone(),
        }
    }

    /// Register a round-end observer, called once per awarded pot.
    pub fn on_round_end(&mut self, hook: impl FnMut(&RoundEnd) + Send + 'static) {
        self.observers.push(Box::new(hook));
    }

    pub fn last_round_end(&self) -> Option<RoundEnd> {
        self.last_round_end
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn min_raise(&self) -> u32 {
        self.min_raise
    }
    pub fn current_seat(&self) -> usize {
        self.current_seat
    }
    pub fn dealer_seat(&self) -> usize {
        self.dealer_seat
    }
    pub fn winners(&self) -> &[usize] {
        &self.winners
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn round_serial(&self) -> u64 {
        self.round_serial
    }
    pub fn total_profit(&self) -> i64 {
        self.total_profit
    }
    pub fn round_profit(&self) -> i64 {
        self.round_profit
    }
    pub fn action_log(&self) -> &[ActionRecord] {
        &self.action_log
    }
}
