//! Format-check stop hook.
//!
//! Reads a lifecycle event on stdin. On `Stop`, checks formatting of the
//! working tree and exits 2 when violations must block the session.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fmtgate::core::report::{Report, render};
use fmtgate::exit_codes;
use fmtgate::hook::run_hook;
use fmtgate::io::config::{CONFIG_FILE_NAME, load_config};
use fmtgate::io::formatter::CommandFormatter;
use fmtgate::logging;

#[derive(Parser, Debug)]
#[command(
    name = "fmtgate",
    version,
    about = "Stop hook that blocks while the working tree has formatting violations"
)]
struct Cli {
    /// Directory to scan and run the formatter in. Defaults to the current directory.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Config file. Defaults to `<root>/.fmtgate.toml`.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                exit_codes::FATAL
            } else {
                exit_codes::OK
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    logging::init();

    let code = match run(cli) {
        Ok(report) => {
            print!("{}", report.stdout);
            eprint!("{}", report.stderr);
            report.exit_code
        }
        Err(err) => {
            eprintln!("fmtgate: {:#}", err);
            exit_codes::FATAL
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<Report> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("resolve current directory")?,
    };
    let config_path = cli.config.unwrap_or_else(|| root.join(CONFIG_FILE_NAME));

    let mut fix_hint = None;
    let run = run_hook(std::io::stdin().lock(), &root, || {
        let config = load_config(&config_path)?;
        fix_hint = Some(config.fix_hint.clone());
        Ok(CommandFormatter::new(config))
    })?;

    Ok(render(&run, fix_hint.as_deref().unwrap_or_default()))
}
