//! Lifecycle event payload delivered on stdin.
//!
//! Only the event kind is read. Everything else in the payload belongs to the
//! hook transport and is ignored.

use thiserror::Error;

/// Event kind that triggers the formatting check.
pub const STOP_EVENT: &str = "Stop";

/// The one field of the hook payload this crate depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub hook_event_name: Option<String>,
}

impl LifecycleEvent {
    pub fn is_stop(&self) -> bool {
        self.hook_event_name.as_deref() == Some(STOP_EVENT)
    }

    /// Event kind for messages, `<none>` when the payload carried no kind.
    pub fn kind(&self) -> &str {
        self.hook_event_name.as_deref().unwrap_or("<none>")
    }
}

/// Stdin did not hold a JSON document.
#[derive(Debug, Error)]
pub enum MalformedEventError {
    #[error("hook event is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("hook event is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse the raw stdin bytes into an event.
///
/// Any well-formed JSON is accepted. A non-object value, or an object whose
/// kind is missing or not a string, yields an event with no kind.
pub fn parse_event(raw: &[u8]) -> Result<LifecycleEvent, MalformedEventError> {
    let text = std::str::from_utf8(raw)?;
    let value: serde_json::Value = serde_json::from_str(text)?;
    let hook_event_name = value
        .get("hook_event_name")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string);
    Ok(LifecycleEvent { hook_event_name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_event_is_recognized() {
        let event =
            parse_event(br#"{"session_id":"abc","hook_event_name":"Stop","stop_hook_active":false}"#)
                .expect("parse");
        assert!(event.is_stop());
        assert_eq!(event.kind(), "Stop");
    }

    #[test]
    fn other_kinds_are_not_stop() {
        for raw in [
            &br#"{"hook_event_name":"SubagentStop"}"#[..],
            br#"{"hook_event_name":"stop"}"#,
            br#"{"hook_event_name":42}"#,
            br#"{}"#,
            br#"["Stop"]"#,
            b"null",
        ] {
            let event = parse_event(raw).expect("parse");
            assert!(!event.is_stop(), "{}", String::from_utf8_lossy(raw));
        }
    }

    #[test]
    fn missing_kind_reports_none() {
        let event = parse_event(b"{}").expect("parse");
        assert_eq!(event.kind(), "<none>");
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = parse_event(b"not json").expect_err("should fail");
        assert!(matches!(err, MalformedEventError::Json(_)));
    }

    #[test]
    fn empty_input_is_malformed() {
        assert!(parse_event(b"").is_err());
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let err = parse_event(&[0xff, 0xfe]).expect_err("should fail");
        assert!(matches!(err, MalformedEventError::Utf8(_)));
    }
}
