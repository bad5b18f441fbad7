use crate::prompt;
use crate::shell::Shell;
use anyhow::{bail, Context, Result};
use blob_sss::{decode_secret, encode_secret, validate, Share, MAX_SHARES, MIN_SHARES};
use clap::{Args, Subcommand};
use std::io::{self, IsTerminal, Write};
use zeroize::Zeroizing;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a secret into N shares, any K of which recover it
    Split(SplitArgs),
    /// Recover a secret from K or more shares
    Recover(RecoverArgs),
    /// Interactive shell (the default when no subcommand is given)
    Shell,
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Total number of shares N to create (2-256)
    #[arg(short = 'n', long)]
    pub num_shares: u16,

    /// Threshold K — minimum shares required to recover the secret
    #[arg(short = 'k', long)]
    pub threshold: u16,

    /// Read the secret as one line from stdin instead of a hidden prompt
    #[arg(long)]
    pub secret_stdin: bool,
}

#[derive(Args, Debug)]
pub struct RecoverArgs {
    /// Share tokens (x:base64). Read one per line from stdin when omitted,
    /// up to an empty line or EOF.
    pub shares: Vec<String>,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn run(command: Option<Command>) -> Result<()> {
    match command {
        Some(Command::Split(args)) => split(args),
        Some(Command::Recover(args)) => recover(args),
        Some(Command::Shell) | None => shell(),
    }
}

// ---------------------------------------------------------------------------
// Command implementations
// ---------------------------------------------------------------------------

fn split(args: SplitArgs) -> Result<()> {
    validate_threshold(args.threshold, args.num_shares)?;

    let secret = read_secret(args.secret_stdin)?;
    let shares = encode_secret(&secret, args.num_shares, args.threshold)
        .context("could not encode secret")?;
    drop(secret);

    let mut out = io::stdout().lock();
    for share in &shares {
        writeln!(out, "{}", share.to_token()).context("write stdout")?;
    }
    out.flush().context("flush stdout")?;
    eprintln!(
        "split: wrote {}-of-{} shares",
        args.threshold, args.num_shares
    );
    Ok(())
}

fn recover(args: RecoverArgs) -> Result<()> {
    let tokens: Vec<Zeroizing<String>> = if args.shares.is_empty() {
        read_token_lines()?
    } else {
        args.shares.into_iter().map(Zeroizing::new).collect()
    };

    let shares = parse_shares(&tokens)?;
    validate(&shares).context("share validation error")?;
    eprintln!("recover: combining {} share(s)", shares.len());

    let secret = decode_secret(&shares).context(
        "could not recover secret (check that you provided at least k valid, matching shares)",
    )?;

    let mut out = io::stdout().lock();
    writeln!(out, "{}", secret.as_str()).context("write stdout")?;
    out.flush().context("flush stdout")?;

    // secret is zeroized on drop.
    Ok(())
}

fn shell() -> Result<()> {
    let stdin = io::stdin();
    let hidden = stdin.is_terminal();
    Shell::new(stdin.lock(), io::stdout().lock(), hidden).run()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_threshold(threshold: u16, shares: u16) -> Result<()> {
    if !(MIN_SHARES..=MAX_SHARES).contains(&shares) {
        bail!("shares ({shares}) must be between {MIN_SHARES} and {MAX_SHARES}");
    }
    if threshold < MIN_SHARES {
        bail!("threshold must be at least {MIN_SHARES}");
    }
    if shares < threshold {
        bail!("shares ({shares}) must be >= threshold ({threshold})");
    }
    Ok(())
}

/// Read the secret from a hidden terminal prompt, or from stdin when asked
/// to or when stdin is not a terminal.
fn read_secret(from_stdin: bool) -> Result<Zeroizing<String>> {
    let stdin = io::stdin();
    let secret = if from_stdin || !stdin.is_terminal() {
        prompt::read_line(&mut stdin.lock())?
    } else {
        eprint!("Secret (hidden): ");
        prompt::read_hidden(&mut io::stderr())?
    };
    match secret {
        Some(s) if !s.is_empty() => Ok(s),
        Some(_) => bail!("secret cannot be empty"),
        None => bail!("no secret entered"),
    }
}

/// Read share tokens from stdin, one per line, until an empty line or EOF.
fn read_token_lines() -> Result<Vec<Zeroizing<String>>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Enter shares (x:base64), empty line to finish:");
    }
    let mut input = stdin.lock();
    let mut tokens = Vec::new();
    while let Some(line) = prompt::read_line(&mut input)? {
        if line.trim().is_empty() {
            break;
        }
        tokens.push(line);
    }
    Ok(tokens)
}

fn parse_shares(tokens: &[Zeroizing<String>]) -> Result<Vec<Share>> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, t)| Share::from_token(t).with_context(|| format!("invalid share #{}", i + 1)))
        .collect()
}
