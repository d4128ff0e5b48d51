//! Aloft CLI — stage tracking for Gnome Restaurant deliveries.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "aloft",
    version,
    about = "Stage and ingredient tracker for the Gnome Restaurant delivery minigame"
)]
struct Cli {
    #[command(subcommand)]
    command: aloft::cli::Commands,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = aloft::cli::dispatch(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
