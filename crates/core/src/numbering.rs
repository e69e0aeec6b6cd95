//! Budget number generation.
//!
//! Numbers follow `PRES-{year}-{seq:04}` where `seq` restarts at 1 each
//! calendar year. A number is assigned once, at creation, and only when
//! the caller supplied none; explicit numbers are stored verbatim.

/// Prefix of every generated budget number.
pub const BUDGET_NUMBER_PREFIX: &str = "PRES";

/// Format a budget number from its year and 1-based yearly sequence.
///
/// The sequence is zero-padded to four digits; wider sequences keep all
/// their digits rather than truncating.
pub fn budget_number(year: i32, seq: i64) -> String {
    format!("{BUDGET_NUMBER_PREFIX}-{year}-{seq:04}")
}
