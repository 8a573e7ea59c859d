//! Render a finished hook run into the text and exit code the caller sees.
//!
//! Violations go to stderr: a blocking exit relays stderr back to the agent.

use crate::core::types::{HookRun, Outcome};
use crate::exit_codes;

const PREFIX: &str = "fmtgate";

/// Final answer of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl Report {
    fn out(exit_code: i32, message: String) -> Self {
        Self {
            exit_code,
            stdout: message,
            stderr: String::new(),
        }
    }
}

pub fn render(run: &HookRun, fix_hint: &str) -> Report {
    match run {
        HookRun::Skipped { kind } => Report::out(
            exit_codes::OK,
            format!("{PREFIX}: ignoring `{kind}` event, format check runs on Stop only\n"),
        ),
        HookRun::NoFiles => Report::out(
            exit_codes::OK,
            format!("{PREFIX}: no formattable files found, skipping format check\n"),
        ),
        HookRun::Checked {
            files,
            outcome: Outcome::Clean,
        } => Report::out(
            exit_codes::OK,
            format!("{PREFIX}: formatting check passed ({files} matching files)\n"),
        ),
        HookRun::Checked {
            files,
            outcome: Outcome::Violations { stdout, stderr },
        } => Report {
            exit_code: exit_codes::BLOCK,
            stdout: String::new(),
            stderr: render_violations(*files, stdout, stderr, fix_hint),
        },
    }
}

fn render_violations(files: usize, stdout: &str, stderr: &str, fix_hint: &str) -> String {
    let mut buf = format!("{PREFIX}: formatting check failed ({files} matching files)\n");
    for section in [stdout, stderr] {
        let section = section.trim_end();
        if !section.is_empty() {
            buf.push('\n');
            buf.push_str(section);
            buf.push('\n');
        }
    }
    buf.push('\n');
    buf.push_str(fix_hint.trim());
    buf.push('\n');
    buf
}
