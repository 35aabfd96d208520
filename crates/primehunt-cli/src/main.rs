#![doc = include_str!("../README.md")]

mod config;
mod console;
mod telemetry;

use std::{io, time::Instant};

use anyhow::Context;
use clap::Parser;
use config::{CliArgs, RunConfig, resolve_or_report};
use console::{write_banner, write_trailer};
use primehunt::{Clock, LocalClock, Search};
use telemetry::init_telemetry;

// Using mimalloc for better performance under contention, especially in musl
// environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();

    // Before loading the file, so its warnings are rendered.
    init_telemetry()?;
    // A rejected configuration is logged and the process exits cleanly
    // without spawning any worker.
    let Some(config) = resolve_or_report(args) else {
        return Ok(());
    };
    log_startup_info(&config);

    let mut stdout = io::stdout();
    let started = Instant::now();
    write_banner(&mut stdout, &config.search, LocalClock.now())
        .context("failed to write banner")?;

    let report = Search::new(config.search)
        .run(&mut stdout)
        .context("search aborted")?;

    write_trailer(
        &mut stdout,
        config.search.strategy().1,
        LocalClock.now(),
        started.elapsed(),
    )
    .context("failed to write trailer")?;

    tracing::debug!(
        primes = report.primes_found(),
        idle_workers = report.idle_workers().count(),
        "Run complete"
    );
    Ok(())
}

fn log_startup_info(config: &RunConfig) {
    if cfg!(debug_assertions) {
        tracing::debug!(
            warnings = config.warnings.len(),
            "Starting search with full config: {config:#?}"
        );
    } else {
        tracing::debug!(
            path = %config.config_path.display(),
            workers = config.search.workers().get(),
            max_number = config.search.max_number(),
            warnings = config.warnings.len(),
            "Starting search"
        );
    }
}
