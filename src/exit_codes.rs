//! Exit code constants for the interview-qa CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown role, invalid config file)
//! - 2: The model reply could not be parsed
//! - 3: Completion service misconfigured, unreachable, or rejecting requests

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid input, or unreadable configuration.
pub const USER_ERROR: i32 = 1;

/// Parse failure: the model reply did not match the declared output schema.
pub const PARSE_FAILURE: i32 = 2;

/// Service failure: missing credential or completion service error.
pub const SERVICE_FAILURE: i32 = 3;
