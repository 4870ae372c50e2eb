//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "felt",
    version,
    about = "Four-seat hold'em table against three AI opponents"
)]
pub struct FeltCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive session against the AI seats
    Play {
        /// Stop after this many hands (default: play until quit or bust)
        #[arg(long)]
        hands: Option<u32>,
        /// RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
        /// AI "thinking" pause in milliseconds (cosmetic)
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,
    },
    /// Simulate hands with every seat on the baseline policy
    Sim {
        /// Number of hands to simulate
        #[arg(long)]
        hands: u32,
        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        /// Write JSONL hand records to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
