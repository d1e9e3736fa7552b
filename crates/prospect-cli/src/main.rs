// Player profile generator entry point.
//
// 1. Initialize tracing (stderr, so stdout carries only command output)
// 2. Parse the command line
// 3. Load config and reference data, open the store
// 4. Run the command

use anyhow::Context;
use clap::Parser;
use tracing::info;

use prospect::app::App;
use prospect::cli::Cli;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    let base_dir = match &cli.base_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    info!(base_dir = %base_dir.display(), "Starting");

    let app = App::open(&base_dir, cli.db.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app.run(&cli.command, &mut out)
}

/// Initialize tracing to log to stderr without ANSI colours.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("prospect=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
