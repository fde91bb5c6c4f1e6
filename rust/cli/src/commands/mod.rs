//! Command handler modules for the holdem CLI.
//!
//! One module per subcommand, each following the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and, where
//!   needed, input (`&mut dyn BufRead`) passed as parameters
//! - Error propagation: all errors propagated via the `CliError` enum

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
