//! # Cfg Command
//!
//! Prints the resolved configuration and where each value came from
//! (default, config file, or environment).

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write, _err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let cfg = &resolved.config;
    let src = &resolved.sources;

    writeln!(out, "Configuration:")?;
    writeln!(
        out,
        "  starting_chips = {} ({:?})",
        cfg.starting_chips, src.starting_chips
    )?;
    let seed = cfg
        .seed
        .map(|s| s.to_string())
        .unwrap_or_else(|| "random".to_string());
    writeln!(out, "  seed = {} ({:?})", seed, src.seed)?;
    writeln!(out, "  delay_ms = {} ({:?})", cfg.delay_ms, src.delay_ms)?;
    Ok(())
}
