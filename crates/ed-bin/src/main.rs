//! `edcore`: a line-addressable text editor driven by commands on stdin.

use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::Once;

use anyhow::Result;
use clap::Parser;
use ed_state::Engine;
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Parser, Debug)]
#[command(name = "edcore", version, about = "Line-addressable text editor core")]
struct Args {
    /// Path to an edcore.toml config file; defaults to ./edcore.toml if present.
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Overrides the config's snapshot interval (K).
    #[arg(long = "snapshot-interval")]
    snapshot_interval: Option<usize>,

    /// Path to a log file; logging is disabled if omitted.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging(args.log_file.as_deref());
    install_panic_hook();

    let config = ed_config::load_from(args.config.as_deref())?;
    let snapshot_interval = args.snapshot_interval.unwrap_or(config.snapshot_interval);

    tracing::info!(target: "startup", snapshot_interval, "edcore starting");

    let mut engine = Engine::new(snapshot_interval);
    let stdin = io::stdin();
    let stdout = io::stdout();
    ed_bin::run(&mut engine, BufReader::new(stdin.lock()), stdout.lock())?;

    tracing::info!(target: "startup", "edcore exiting");
    Ok(())
}

fn configure_logging(log_file: Option<&std::path::Path>) -> Option<WorkerGuard> {
    let Some(path) = log_file else {
        return None;
    };
    let (dir, file) = match (path.parent(), path.file_name()) {
        (Some(dir), Some(file)) if !dir.as_os_str().is_empty() => (dir, file),
        _ => (std::path::Path::new("."), path.as_os_str()),
    };
    let appender = tracing_appender::rolling::never(dir, file);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(non_blocking)
        .with_ansi(false)
        .try_init();

    Some(guard)
}

fn install_panic_hook() {
    static INSTALLED: Once = Once::new();
    INSTALLED.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "panic", "{info}");
            default_hook(info);
        }));
    });
}
