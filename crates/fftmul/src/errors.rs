//! Error handling and exit codes.

use fftmul_core::constants::exit_codes;
use fftmul_core::multiplier::CoreError;

/// Map a multiplication error to its exit code.
pub fn handle_error(err: &CoreError) -> i32 {
    match err {
        CoreError::Config(_) => exit_codes::ERROR_CONFIG,
        CoreError::Mismatch => exit_codes::ERROR_MISMATCH,
        CoreError::InvalidDigit { .. }
        | CoreError::InvalidChar { .. }
        | CoreError::Empty
        | CoreError::Engine(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for an application error; anything that is not a
/// [`CoreError`] is generic.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CoreError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
