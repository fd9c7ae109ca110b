//! Pokedex binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use pokedex::{app, args, theme};

struct PokedexTimer;

impl tracing_subscriber::fmt::time::FormatTime for PokedexTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        w.write_str(&pokedex::util::log_timestamp())
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Build the env filter: `RUST_LOG` first, else the level derived from the flags.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// Initialize tracing writing to `~/.config/pokedex/logs/pokedex.log`, stderr as fallback.
fn init_logging(level: &str) {
    let log_path = theme::logs_dir().join("pokedex.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(PokedexTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is never blocked
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(PokedexTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let options = cli.run_options(theme::settings());
    tracing::info!(
        endpoint = %options.settings.endpoint,
        list_types = cli.list_types,
        print = cli.print,
        "Pokedex starting"
    );

    if cli.list_types {
        if let Err(err) = args::run_list_types(&options.settings).await {
            tracing::error!(error = %err, "type listing failed");
            eprintln!("pokedex: {err}");
            std::process::exit(1);
        }
        return;
    }
    if cli.print {
        if let Err(err) = args::run_print(&options).await {
            tracing::error!(error = %err, "print failed");
            eprintln!("pokedex: {err}");
            std::process::exit(1);
        }
        return;
    }

    if let Err(err) = app::run(options).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("pokedex: {err}");
    }
    tracing::info!("Pokedex exited");
}
