//! Stable exit codes for the `fmtgate` hook.

/// Not a stop event, nothing to check, or the formatter reported clean.
pub const OK: i32 = 0;
/// The hook itself failed: malformed event, bad config, or the formatter could not run.
pub const FATAL: i32 = 1;
/// The formatter reported violations. The caller rejects the stop and relays stderr.
pub const BLOCK: i32 = 2;
