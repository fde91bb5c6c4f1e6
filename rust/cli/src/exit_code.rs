//! Exit code constants for the CLI application.
//!
//! Centralized so every command maps outcomes to the same codes.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;
