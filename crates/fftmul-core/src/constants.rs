//! Constants for operand sizes, file names and exit codes.

pub use fftmul_bigfft::DEFAULT_MAX_RESIDUAL;

/// Default number of digits per generated operand.
pub const DEFAULT_DIGITS: usize = 1_000_000;

/// File name of the first generated operand.
pub const FIRST_OPERAND_FILE: &str = "num1.txt";

/// File name of the second generated operand.
pub const SECOND_OPERAND_FILE: &str = "num2.txt";

/// File name of the product.
pub const RESULT_FILE: &str = "result.txt";

/// Number of leading and trailing digits shown when a value is abbreviated.
pub const PREVIEW_DIGITS: usize = 50;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Products from different multipliers, or a stored result, did not match.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
