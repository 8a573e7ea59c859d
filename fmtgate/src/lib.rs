//! Stop hook that blocks an agent session while the tree has formatting violations.
//!
//! On a `Stop` lifecycle event the hook walks the working tree for source and
//! markup files and, if any exist, runs an external formatter in check mode.
//! The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (event parsing, extension tables,
//!   report rendering). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (stdin, filesystem walk, process
//!   execution, config).
//!
//! [`hook`] wires the two together; [`exit_codes`] is the caller-facing contract.

pub mod core;
pub mod exit_codes;
pub mod hook;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
