//! Development-time tracing for debugging the hook.
//!
//! Tracing writes to stderr, which is also the stream relayed back to the
//! agent on a blocking exit. The default level is therefore `warn` and output
//! is plain text without ANSI colours. Hook messages themselves are rendered
//! by `core::report` and are unaffected by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DIRECTIVE: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`; a second call is a no-op.
///
/// # Example
/// ```bash
/// echo '{"hook_event_name":"Stop"}' | RUST_LOG=fmtgate=debug fmtgate
/// ```
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .compact(),
        )
        .try_init();
}
