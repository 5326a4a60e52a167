//! wait-for CLI
//!
//! Usage: wait-for [-rwx] [-U <USERNAME>] <FILE>
//!
//! Exit codes: 0 when the file is ready, 1 on a fatal error, 2 on a usage
//! error.

mod cli;
mod trc;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::{Cli, UsageError};
use wait_for::{
    resolve_identity, with_env_overrides, Evaluator, LocalMetadata, NotifyWatchFactory,
    SystemGroups, WaitConfig, WaitLoop,
};

const EXIT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    // clap exits with status 2 on malformed invocations
    let cli = Cli::parse();

    if let Err(err) = trc::Trc::new(cli.verbose).init() {
        eprintln!("warning: could not initialize logging: {err}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            if err.downcast_ref::<UsageError>().is_some() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::from(EXIT_FAILURE)
            }
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    cli.validate()?;

    let identity =
        resolve_identity(cli.username.as_deref()).context("could not resolve identity")?;
    let config = cli.apply(with_env_overrides(WaitConfig::default()));

    let evaluator = Evaluator::new(LocalMetadata::new(), SystemGroups::new(), identity, cli.request())
        .with_policy(config.policy);

    let json = cli.json;
    let report = WaitLoop::new(evaluator, NotifyWatchFactory::new(), config).run(
        &cli.file,
        |event| {
            if json {
                println!("{}", event.to_json());
            }
        },
    )?;

    info!(
        strategy = ?report.strategy,
        evaluations = report.evaluations,
        elapsed_ms = u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX),
        "{} is ready",
        cli.file.display()
    );
    Ok(())
}
