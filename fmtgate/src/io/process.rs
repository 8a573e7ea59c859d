//! Run a child process to completion and capture bounded output.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, error, instrument, warn};
use wait_timeout::ChildExt;

/// Captured child process output.
///
/// After a timeout both streams are empty: the readers are abandoned rather
/// than joined, since an escaped descendant may still hold the pipes.
#[derive(Debug)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: Captured,
    pub stderr: Captured,
    pub timed_out: bool,
}

/// One output stream, cut at the configured limit.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Captured {
    pub bytes: Vec<u8>,
    /// Bytes read past the limit and dropped.
    pub truncated: usize,
}

impl Captured {
    /// Lossy text with a truncation notice appended when bytes were dropped.
    pub fn text(&self, label: &str) -> String {
        let mut text = String::from_utf8_lossy(&self.bytes).into_owned();
        if self.truncated > 0 {
            text.push_str(&format!("\n[{label} truncated {} bytes]\n", self.truncated));
        }
        text
    }
}

type Reader = thread::JoinHandle<Result<Captured>>;

/// Run `cmd` with stdin closed, draining stdout/stderr on reader threads so a
/// chatty child cannot block on a full pipe.
///
/// On unix the child leads its own process group. With `timeout` unset this
/// waits for as long as the child runs. When it elapses the whole group is
/// killed, so wrappers like `npx` take their descendants with them.
/// `output_limit_bytes` bounds each stream kept in memory.
#[instrument(skip_all, fields(timeout_secs = timeout.map(|t| t.as_secs()), output_limit_bytes))]
pub fn run_command(
    mut cmd: Command,
    timeout: Option<Duration>,
    output_limit_bytes: usize,
) -> Result<CommandOutput> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    debug!(program = ?cmd.get_program(), "spawning child process");
    let mut child = match cmd.spawn() {
        Ok(c) => c,
        Err(e) => {
            error!(err = %e, program = ?cmd.get_program(), "failed to spawn command");
            return Err(e)
                .with_context(|| format!("spawn {}", cmd.get_program().to_string_lossy()));
        }
    };

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("stdout was not piped"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| anyhow!("stderr was not piped"))?;

    let stdout_reader: Reader =
        thread::spawn(move || read_stream_limited(stdout, output_limit_bytes));
    let stderr_reader: Reader =
        thread::spawn(move || read_stream_limited(stderr, output_limit_bytes));

    let Some(timeout) = timeout else {
        let status = child.wait().context("wait for command")?;
        return finish(status, stdout_reader, stderr_reader);
    };

    match child.wait_timeout(timeout).context("wait for command")? {
        Some(status) => finish(status, stdout_reader, stderr_reader),
        None => {
            warn!(
                timeout_secs = timeout.as_secs(),
                pid = child.id(),
                "command timed out, killing process group"
            );
            kill_process_group(&mut child)?;
            let status = child.wait().context("wait command after kill")?;
            debug!(exit_code = ?status.code(), "command killed");
            Ok(CommandOutput {
                status,
                stdout: Captured::default(),
                stderr: Captured::default(),
                timed_out: true,
            })
        }
    }
}

fn finish(status: ExitStatus, stdout: Reader, stderr: Reader) -> Result<CommandOutput> {
    let stdout = join_output(stdout).context("join stdout")?;
    let stderr = join_output(stderr).context("join stderr")?;

    if stdout.truncated > 0 || stderr.truncated > 0 {
        warn!(
            stdout_truncated = stdout.truncated,
            stderr_truncated = stderr.truncated,
            "output truncated"
        );
    }

    debug!(exit_code = ?status.code(), "command finished");
    Ok(CommandOutput {
        status,
        stdout,
        stderr,
        timed_out: false,
    })
}

#[cfg(unix)]
fn kill_process_group(child: &mut Child) -> Result<()> {
    use nix::errno::Errno;
    use nix::sys::signal::{Signal, killpg};
    use nix::unistd::Pid;

    let pgid = i32::try_from(child.id()).context("child pid out of range")?;
    match killpg(Pid::from_raw(pgid), Signal::SIGKILL) {
        // Group already gone.
        Ok(()) | Err(Errno::ESRCH) => Ok(()),
        Err(e) => Err(e).context("kill command process group"),
    }
}

#[cfg(not(unix))]
fn kill_process_group(child: &mut Child) -> Result<()> {
    child.kill().context("kill command")
}

fn join_output(handle: Reader) -> Result<Captured> {
    handle
        .join()
        .unwrap_or_else(|_| Err(anyhow!("output reader thread panicked")))
}

fn read_stream_limited<R: Read>(mut reader: R, limit: usize) -> Result<Captured> {
    let mut captured = Captured::default();
    let mut chunk = [0u8; 8192];

    loop {
        let n = reader.read(&mut chunk).context("read output")?;
        if n == 0 {
            break;
        }
        let keep = n.min(limit.saturating_sub(captured.bytes.len()));
        captured.bytes.extend_from_slice(&chunk[..keep]);
        captured.truncated += n - keep;
    }

    Ok(captured)
}
