//! Card, board, and action formatters for terminal display.
//!
//! Pure functions turning game elements into text. Unicode suit symbols
//! are used where the terminal supports them, with an ASCII fallback.

use felt_engine::cards::{Card, Rank, Suit};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

/// Format a card as rank+suit, e.g. "A♠" (Unicode) or "As" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a card as the table sees it: face-down cards show their back.
pub fn format_card_at_table(card: &Card) -> String {
    if card.face_up {
        format_card(card)
    } else {
        "??".to_string()
    }
}

/// Format a list of cards in bracket notation, e.g. "[A♠ K♥ Q♦]".
pub fn format_board(cards: &[Card]) -> String {
    if cards.is_empty() {
        "[]".to_string()
    } else {
        let formatted: Vec<String> = cards.iter().map(format_card).collect();
        format!("[{}]", formatted.join(" "))
    }
}

/// Format hole cards respecting their orientation.
pub fn format_hole_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card_at_table).collect();
    formatted.join(" ")
}

/// Format a player action as a human-readable string.
pub fn format_action(action: &felt_engine::player::PlayerAction) -> String {
    match action {
        felt_engine::player::PlayerAction::Fold => "folds".to_string(),
        felt_engine::player::PlayerAction::Check => "checks".to_string(),
        felt_engine::player::PlayerAction::Call => "calls".to_string(),
        felt_engine::player::PlayerAction::Raise(amount) => format!("raises {}", amount),
        felt_engine::player::PlayerAction::AllIn => "goes all-in".to_string(),
    }
}
