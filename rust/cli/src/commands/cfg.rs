//! Cfg command handler: display the resolved configuration.

use std::io::Write;

use crate::config::{load_with_sources, ValueSource};
use crate::error::CliError;

fn source_tag(source: ValueSource) -> &'static str {
    match source {
        ValueSource::Default => "default",
        ValueSource::File => "file",
        ValueSource::Env => "env",
    }
}

/// Print each configuration value together with where it came from
/// (default, config file, or environment variable).
pub fn handle_cfg_command(out: &mut dyn Write, _err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let cfg = &resolved.config;
    let src = &resolved.sources;

    writeln!(out, "Configuration:")?;
    writeln!(out, "  players        = {} ({})", cfg.players, source_tag(src.players))?;
    writeln!(
        out,
        "  starting_stack = {} ({})",
        cfg.starting_stack,
        source_tag(src.starting_stack)
    )?;
    writeln!(
        out,
        "  small_blind    = {} ({})",
        cfg.small_blind,
        source_tag(src.small_blind)
    )?;
    writeln!(
        out,
        "  big_blind      = {} ({})",
        cfg.big_blind,
        source_tag(src.big_blind)
    )?;
    match cfg.seed {
        Some(seed) => writeln!(out, "  seed           = {} ({})", seed, source_tag(src.seed))?,
        None => writeln!(out, "  seed           = random ({})", source_tag(src.seed))?,
    }
    Ok(())
}
