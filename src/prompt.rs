//! Line and hidden terminal input.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use zeroize::{Zeroize, Zeroizing};

/// Read one line, without its trailing newline.
///
/// Returns `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<Zeroizing<String>>> {
    let mut buf = Zeroizing::new(String::new());
    if input.read_line(&mut buf).context("read line")? == 0 {
        return Ok(None);
    }
    let keep = buf.trim_end_matches(['\r', '\n']).len();
    buf.truncate(keep);
    Ok(Some(buf))
}

/// Read a line from the terminal with echo disabled.
///
/// Returns `None` if the user presses Ctrl-C or Ctrl-D.
pub fn read_hidden(out: &mut impl Write) -> Result<Option<Zeroizing<String>>> {
    out.flush()?;
    let _raw = RawMode::enable()?;
    let result = read_hidden_keys();
    // Raw mode swallows the newline the user typed.
    write!(out, "\r\n")?;
    out.flush()?;
    result
}

fn read_hidden_keys() -> Result<Option<Zeroizing<String>>> {
    let mut typed = Zeroizing::new(String::new());
    loop {
        let Event::Key(key) = event::read().context("read terminal event")? else {
            continue;
        };
        // Ignore key-release events (crossterm 0.28 sends press + release).
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('d')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                return Ok(None);
            }
            KeyCode::Char(c) => typed.push(c),
            KeyCode::Backspace => {
                typed.pop();
            }
            KeyCode::Esc => typed.zeroize(),
            KeyCode::Enter => return Ok(Some(typed)),
            _ => {}
        }
    }
}

/// Raw mode for as long as the guard lives, restored even on error.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_line_strips_newlines() {
        let mut input = Cursor::new("split\r\nrecover\nlast");
        assert_eq!(read_line(&mut input).unwrap().as_deref().map(String::as_str), Some("split"));
        assert_eq!(read_line(&mut input).unwrap().as_deref().map(String::as_str), Some("recover"));
        assert_eq!(read_line(&mut input).unwrap().as_deref().map(String::as_str), Some("last"));
        assert!(read_line(&mut input).unwrap().is_none());
    }

    #[test]
    fn read_line_keeps_inner_whitespace() {
        let mut input = Cursor::new("  a b  \n\n");
        assert_eq!(read_line(&mut input).unwrap().as_deref().map(String::as_str), Some("  a b  "));
        assert_eq!(read_line(&mut input).unwrap().as_deref().map(String::as_str), Some(""));
    }
}
