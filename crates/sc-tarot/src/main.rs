//! Interactive tarot reader for the terminal.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sc_tarot::{FAREWELL, TarotConfig, TarotSession};

#[derive(Parser)]
#[command(name = "tarot", about = "Terminal tarot reader", version)]
struct Cli {
    /// RNG seed for reproducible readings
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Ctrl-C leaves the same way 'q' does.
    if let Err(e) = ctrlc::set_handler(|| {
        println!("\n\n{FAREWELL}\n");
        let _ = io::stdout().flush();
        process::exit(0);
    }) {
        tracing::warn!("cannot install interrupt handler: {e}");
    }

    let config = TarotConfig { seed: cli.seed };
    let stdin = io::stdin();
    let mut session = TarotSession::new(stdin.lock(), io::stdout(), &config);

    if let Err(e) = session.run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
