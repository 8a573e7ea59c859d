//! Formatter adapter: run the configured check command over the working tree.

use std::path::Path;
use std::process::Command;

use anyhow::{Result, bail};
use tracing::{info, instrument};

use crate::core::types::Outcome;
use crate::io::config::FormatterConfig;
use crate::io::process::run_command;

/// Anything that can check formatting of a directory.
pub trait Formatter {
    fn check(&self, workdir: &Path) -> Result<Outcome>;
}

impl<T: Formatter + ?Sized> Formatter for &T {
    fn check(&self, workdir: &Path) -> Result<Outcome> {
        (**self).check(workdir)
    }
}

/// Runs an external formatter command in check-only mode.
///
/// The whole `workdir` is handed to the formatter; it applies its own
/// include/ignore rules.
pub struct CommandFormatter {
    config: FormatterConfig,
}

impl CommandFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }
}

impl Formatter for CommandFormatter {
    #[instrument(skip_all, fields(workdir = %workdir.display()))]
    fn check(&self, workdir: &Path) -> Result<Outcome> {
        let Some((program, args)) = self.config.command.split_first() else {
            bail!("formatter command is empty");
        };
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(workdir);

        let output = run_command(cmd, self.config.timeout(), self.config.output_limit_bytes)?;
        if output.timed_out {
            bail!(
                "formatter `{}` timed out after {}s",
                self.config.command.join(" "),
                self.config.timeout_secs.unwrap_or_default()
            );
        }
        let Some(code) = output.status.code() else {
            bail!(
                "formatter `{}` terminated abnormally ({})",
                self.config.command.join(" "),
                output.status
            );
        };

        info!(code, "formatter finished");
        if code == 0 {
            return Ok(Outcome::Clean);
        }
        Ok(Outcome::Violations {
            stdout: output.stdout.text("stdout"),
            stderr: output.stderr.text("stderr"),
        })
    }
}
