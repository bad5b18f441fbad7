mod cmd;
mod logging;
mod prompt;
mod shell;

use anyhow::Result;
use clap::Parser;

/// blob — split an ASCII secret into Shamir shares and recover it.
///
/// Any K-of-N shares reconstruct the secret; fewer reveal nothing.
/// Shares are `x:base64` text tokens, one per participant.
///
/// Run without a subcommand for the interactive shell.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, env = "BLOB_LOG", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<cmd::Command>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);
    cmd::run(cli.command)
}
