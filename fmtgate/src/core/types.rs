//! Shared deterministic types for the hook pipeline.

/// Result of running the formatter in check mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Formatter exited 0.
    Clean,
    /// Formatter exited non-zero. Carries its captured output for display.
    Violations { stdout: String, stderr: String },
}

/// How far a single hook invocation got before producing its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookRun {
    /// The event was not a stop event; nothing was touched.
    Skipped { kind: String },
    /// Discovery found no matching files; the formatter was not invoked.
    NoFiles,
    /// The formatter ran over the working directory.
    Checked { files: usize, outcome: Outcome },
}
