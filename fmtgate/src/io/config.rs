//! Hook configuration stored in `.fmtgate.toml`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::debug;

/// Default config file name, looked up in the scanned root.
pub const CONFIG_FILE_NAME: &str = ".fmtgate.toml";

/// Formatter configuration (TOML).
///
/// Missing fields default to a Prettier check over the working directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormatterConfig {
    /// Check-only formatter invocation, run with the root as cwd
    /// (e.g. `["npx","prettier","--check","."]`).
    pub command: Vec<String>,

    /// Remediation line appended to a violation report.
    pub fix_hint: String,

    /// Kill the formatter after this many seconds. Unset waits indefinitely.
    pub timeout_secs: Option<u64>,

    /// Keep at most this many bytes of each captured output stream.
    pub output_limit_bytes: usize,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            command: ["npx", "prettier", "--check", "."]
                .into_iter()
                .map(String::from)
                .collect(),
            fix_hint: "Run `npx prettier --write .` to fix formatting, then try again."
                .to_string(),
            timeout_secs: None,
            output_limit_bytes: 1_000_000,
        }
    }
}

impl FormatterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.command.is_empty() || self.command[0].trim().is_empty() {
            return Err(anyhow!("command must be a non-empty array"));
        }
        if self.fix_hint.trim().is_empty() {
            return Err(anyhow!("fix_hint must not be blank"));
        }
        if self.timeout_secs == Some(0) {
            return Err(anyhow!("timeout_secs must be > 0 when set"));
        }
        if self.output_limit_bytes == 0 {
            return Err(anyhow!("output_limit_bytes must be > 0"));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `FormatterConfig::default()`.
pub fn load_config(path: &Path) -> Result<FormatterConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(FormatterConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FormatterConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), command = ?cfg.command, "loaded config");
    Ok(cfg)
}
