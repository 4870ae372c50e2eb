use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("check not allowed: seat bet {player_bet} is below the table bet {table_bet}")]
    CheckNotAllowed { player_bet: u32, table_bet: u32 },
    #[error("no hand in progress")]
    NoHandInProgress,
    #[error("a hand is already in progress")]
    HandInProgress,
    #[error("stale AI turn for seat {seat} (round {round})")]
    StaleAiTurn { round: u64, seat: usize },
}
