//! Read the hook event from stdin.

use std::io::Read;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::event::{LifecycleEvent, parse_event};

/// Read `input` to end and parse it as a lifecycle event.
///
/// A malformed payload surfaces as [`crate::core::event::MalformedEventError`]
/// inside the returned error.
pub fn read_event<R: Read>(mut input: R) -> Result<LifecycleEvent> {
    let mut raw = Vec::new();
    input.read_to_end(&mut raw).context("read hook event")?;
    debug!(bytes = raw.len(), "read hook event");
    let event = parse_event(&raw)?;
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::MalformedEventError;

    #[test]
    fn reads_whole_stream() {
        let input = br#"{"hook_event_name": "Stop", "cwd": "/tmp"}"#;
        let event = read_event(&input[..]).expect("read");
        assert!(event.is_stop());
    }

    #[test]
    fn malformed_input_downcasts() {
        let err = read_event(&b"not json"[..]).expect_err("should fail");
        assert!(err.downcast_ref::<MalformedEventError>().is_some());
    }
}
