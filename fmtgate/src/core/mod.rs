//! Deterministic, pure logic shared by the hook.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod event;
pub mod extensions;
pub mod report;
pub mod types;
