//! Stop-hook pipeline: read event, filter, discover, check.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, instrument};

use crate::core::types::HookRun;
use crate::io::discover::discover;
use crate::io::event_reader::read_event;
use crate::io::formatter::Formatter;

/// Run one hook invocation.
///
/// `make_formatter` is only called once the event is a stop event and the
/// tree holds at least one matching file, so other events never touch config
/// or spawn anything.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn run_hook<R, F, M>(input: R, root: &Path, make_formatter: M) -> Result<HookRun>
where
    R: Read,
    F: Formatter,
    M: FnOnce() -> Result<F>,
{
    let event = read_event(input)?;
    if !event.is_stop() {
        debug!(kind = event.kind(), "not a stop event");
        return Ok(HookRun::Skipped {
            kind: event.kind().to_string(),
        });
    }

    // Unreadable subtrees are skipped, but a bad root would pass every session unchecked.
    let meta = fs::metadata(root).with_context(|| format!("read root {}", root.display()))?;
    if !meta.is_dir() {
        bail!("root {} is not a directory", root.display());
    }

    let discovery = discover(root);
    if discovery.is_empty() {
        info!(skipped = discovery.skipped, "no matching files");
        return Ok(HookRun::NoFiles);
    }

    let formatter = make_formatter()?;
    let outcome = formatter.check(root)?;
    Ok(HookRun::Checked {
        files: discovery.files.len(),
        outcome,
    })
}
