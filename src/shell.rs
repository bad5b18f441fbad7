//! Interactive shell: `split`, `recover`, `help`, `exit`.
//!
//! All prompts and results go to one writer. The secret is read with echo
//! disabled when attached to a terminal and is wiped as soon as it has been
//! used.

use std::io::{BufRead, Write};

use anyhow::Result;
use blob_sss::{decode_secret, encode_secret, validate, Share, MAX_SHARES, MIN_SHARES};
use tracing::debug;
use zeroize::Zeroizing;

use crate::prompt;

/// Width of the separator rules.
const RULE_WIDTH: usize = 80;

const USAGE: &str = "\
split   : Generate shares from an ASCII secret
recover : Reconstruct a secret from shares
help    : Show this usage message
exit    : Quit the program

(Only ASCII secrets are supported)
";

enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    input: R,
    out: W,
    /// Read the secret from the terminal with echo off instead of `input`.
    hidden: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, hidden: bool) -> Self {
        Self { input, out, hidden }
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", rule('='))?;
        writeln!(self.out, "Blob CLI")?;
        self.print_usage()?;

        loop {
            writeln!(self.out)?;
            let Some(line) = self.prompt_line("Mode (split/recover/help/exit): ")? else {
                return self.exit();
            };
            writeln!(self.out)?;

            let flow = match line.trim().to_lowercase().as_str() {
                "split" => self.handle_split()?,
                "recover" => self.handle_recover()?,
                "help" => {
                    self.print_usage()?;
                    Flow::Continue
                }
                "exit" => Flow::Exit,
                _ => {
                    writeln!(self.out, "  [!] Unknown command. Type 'help'.\n{}", rule('='))?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                return self.exit();
            }
        }
    }

    fn print_usage(&mut self) -> Result<()> {
        writeln!(self.out, "{}\n[ Usage ]\n{}", rule('='), rule('='))?;
        writeln!(self.out, "\n{USAGE}")?;
        writeln!(self.out, "{}", rule('='))?;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        writeln!(self.out, "\nExiting...")?;
        writeln!(self.out, "{}", rule('='))?;
        self.out.flush()?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    fn handle_split(&mut self) -> Result<Flow> {
        writeln!(self.out, "{}\n[ Secret Splitting ]\n{}", rule('='), rule('='))?;

        writeln!(self.out)?;
        let Some(n) = self.input_int_in_range("Total shares (n)", MIN_SHARES, MAX_SHARES)? else {
            return Ok(Flow::Exit);
        };
        let Some(k) = self.input_int_in_range("Threshold (k)", MIN_SHARES, n)? else {
            return Ok(Flow::Exit);
        };
        let Some(secret) = self.input_secret("Secret (hidden): ")? else {
            return Ok(Flow::Exit);
        };

        let shares = match encode_secret(&secret, n, k) {
            Ok(shares) => shares,
            Err(e) => {
                debug!(error = %e, "split failed");
                writeln!(self.out, "\n[!] Error: could not encode secret.")?;
                writeln!(self.out, "{}", rule('='))?;
                return Ok(Flow::Continue);
            }
        };
        drop(secret);

        writeln!(self.out, "\nShares (x:base64):")?;
        writeln!(self.out, "{}", rule('-'))?;
        for share in &shares {
            writeln!(self.out, "{}", share.to_token())?;
        }
        writeln!(self.out, "{}", rule('-'))?;
        writeln!(self.out, "{}", rule('='))?;
        Ok(Flow::Continue)
    }

    fn handle_recover(&mut self) -> Result<Flow> {
        writeln!(self.out, "{}\n[ Secret Recovery ]\n{}", rule('='), rule('='))?;
        writeln!(self.out, "\nEnter shares (x:base64), empty line to finish:")?;
        self.out.flush()?;

        let mut shares: Vec<Share> = Vec::new();
        loop {
            let Some(line) = prompt::read_line(&mut self.input)? else {
                writeln!(self.out, "\n[!] Input terminated (EOF).")?;
                return Ok(Flow::Exit);
            };
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            match Share::from_token(line) {
                Ok(share) => shares.push(share),
                Err(e) => {
                    debug!(error = %e, "rejected share token");
                    writeln!(self.out, "[!] Invalid share format.")?;
                    writeln!(self.out, "{}", rule('='))?;
                    return Ok(Flow::Continue);
                }
            }
        }

        if let Err(reason) = validate(&shares) {
            writeln!(self.out, "[!] Share validation error: {reason}")?;
            writeln!(self.out, "{}", rule('='))?;
            return Ok(Flow::Continue);
        }

        match decode_secret(&shares) {
            Ok(secret) => {
                writeln!(self.out, "Recovered secret:")?;
                writeln!(self.out, "{}", rule('-'))?;
                writeln!(self.out, "{}", secret.as_str())?;
                writeln!(self.out, "{}", rule('-'))?;
                writeln!(self.out, "{}", rule('='))?;
            }
            Err(e) => {
                debug!(error = %e, "recovery failed");
                writeln!(
                    self.out,
                    "[!] Error: could not recover secret. \
                     (Check that you provided at least k valid, matching shares.)"
                )?;
                writeln!(self.out, "{}", rule('='))?;
            }
        }
        Ok(Flow::Continue)
    }

    // -----------------------------------------------------------------------
    // Input helpers
    // -----------------------------------------------------------------------

    fn prompt_line(&mut self, label: &str) -> Result<Option<Zeroizing<String>>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        prompt::read_line(&mut self.input)
    }

    /// Prompt until the user enters an integer in `min..=max`.
    fn input_int_in_range(&mut self, label: &str, min: u16, max: u16) -> Result<Option<u16>> {
        loop {
            let Some(line) = self.prompt_line(&format!("{label} ({min}-{max}): "))? else {
                return Ok(None);
            };
            let v = line.trim();
            if v.is_empty() || !v.bytes().all(|b| b.is_ascii_digit()) {
                writeln!(self.out, "[!] Enter an integer.")?;
                continue;
            }
            match v.parse::<u16>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(Some(n)),
                _ => writeln!(self.out, "[!] Value must be between {min} and {max}.")?,
            }
        }
    }

    /// Prompt until a non-empty secret is entered.
    fn input_secret(&mut self, label: &str) -> Result<Option<Zeroizing<String>>> {
        loop {
            write!(self.out, "{label}")?;
            let secret = if self.hidden {
                prompt::read_hidden(&mut self.out)?
            } else {
                self.out.flush()?;
                prompt::read_line(&mut self.input)?
            };
            match secret {
                None => return Ok(None),
                Some(s) if s.is_empty() => writeln!(self.out, "[!] Input cannot be empty.")?,
                Some(s) => return Ok(Some(s)),
            }
        }
    }
}

fn rule(c: char) -> String {
    std::iter::repeat(c).take(RULE_WIDTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> String {
        let mut out = Vec::new();
        Shell::new(Cursor::new(input.to_string()), &mut out, false)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Share tokens printed between the dashed rules after a split.
    fn tokens(output: &str) -> Vec<String> {
        output
            .lines()
            .skip_while(|l| *l != "Shares (x:base64):")
            .skip(2)
            .take_while(|l| !l.starts_with('-'))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn usage_and_exit() {
        let out = session("help\nexit\n");
        assert!(out.contains("Blob CLI"));
        assert_eq!(out.matches("[ Usage ]").count(), 2);
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn eof_exits() {
        let out = session("");
        assert!(out.ends_with(&format!("Exiting...\n{}\n", rule('='))));
    }

    #[test]
    fn unknown_command() {
        let out = session("frobnicate\nEXIT\n");
        assert!(out.contains("[!] Unknown command. Type 'help'."));
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn split_then_recover() {
        let out = session("split\n5\n3\nHello, shares!\nexit\n");
        let tokens = tokens(&out);
        assert_eq!(tokens.len(), 5);

        let input = format!("recover\n{}\n{}\n{}\n\nexit\n", tokens[4], tokens[0], tokens[2]);
        let out = session(&input);
        assert!(out.contains(&format!(
            "Recovered secret:\n{}\nHello, shares!\n",
            rule('-')
        )));
    }

    #[test]
    fn split_reprompts_for_bad_numbers() {
        let out = session("split\nfive\n1\n300\n3\n4\n2\n\nabc\nexit\n");
        assert!(out.contains("[!] Enter an integer."));
        assert!(out.contains("[!] Value must be between 2 and 256."));
        assert!(out.contains("[!] Value must be between 2 and 3."));
        assert!(out.contains("[!] Input cannot be empty."));
        assert_eq!(tokens(&out).len(), 3);
    }

    #[test]
    fn split_rejects_non_ascii_secret() {
        let out = session("split\n3\n2\nnaïve\nexit\n");
        assert!(out.contains("[!] Error: could not encode secret."));
        assert!(tokens(&out).is_empty());
    }

    #[test]
    fn recover_reports_bad_token() {
        let out = session("recover\n0:AAA=\nexit\n");
        assert!(out.contains("[!] Invalid share format."));
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn recover_reports_duplicate_indices() {
        let out = session("recover\n1:AEg=\n1:AEk=\n\nexit\n");
        assert!(out.contains("[!] Share validation error: Duplicate share indices."));
    }

    #[test]
    fn recover_reports_too_few_shares() {
        let out = session("recover\n1:AEg=\n\nexit\n");
        assert!(out.contains("[!] Share validation error: At least 2 shares needed."));
    }

    #[test]
    fn recover_reports_undecodable_set() {
        // Both shares hold y = 200, which interpolates to 200: not ASCII.
        let out = session("recover\n1:AMg=\n2:AMg=\n\nexit\n");
        assert!(out.contains("[!] Error: could not recover secret."));
    }

    #[test]
    fn recover_eof_exits() {
        let out = session("recover\n1:AEg=\n");
        assert!(out.contains("[!] Input terminated (EOF)."));
        assert!(out.contains("Exiting..."));
    }
}
