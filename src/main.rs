// Entrypoint for the installer binary.
// - Keeps `main` small: parse flags, resolve defaults, hand off to the
//   install flow.
// - Exits non-zero on any fatal error so callers can detect failure.

use clap::Parser;
use openface_install::{cli::Cli, config::Defaults, installer};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Cli::parse();

    // Log to stderr only; stdout is reserved for the dialogue with the
    // user. Quiet unless RUST_LOG says otherwise.
    let filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "openface_install=warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(args) {
        eprintln!("{} {err:#}", console::style("error:").red().bold());
        std::process::exit(1);
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    let defaults = Defaults::discover()?;
    let args = args.with_silent_defaults(&defaults);
    installer::run(args, &defaults)
}
