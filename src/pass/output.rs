//! Password output to the terminal or the clipboard.

use std::io::{self, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::Generator;
use crate::cli::prompts;
use crate::entropy::BitSource;
use crate::error::Error;

/// Write `count` passwords, one per line.
pub fn write_passwords<W: Write, S: BitSource>(
    out: &mut W,
    generator: &mut Generator<S>,
    count: usize,
) -> Result<(), Error> {
    for _ in 0..count {
        let password = generator.generate()?;
        out.write_all(password.as_str().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

pub fn to_stdout<S: BitSource>(generator: &mut Generator<S>, count: usize) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_passwords(&mut out, generator, count)
}

/// Copy passwords to the clipboard. Any clipboard failure prints a warning
/// and falls back to stdout with the same passwords.
pub fn to_clipboard<S: BitSource>(generator: &mut Generator<S>, count: usize) -> Result<(), Error> {
    let mut passwords = Vec::with_capacity(count);
    write_passwords(&mut passwords, generator, count)?;

    let stdout = io::stdout();
    let result = deliver(&passwords, copy_to_clipboard, &mut stdout.lock());
    passwords.zeroize();
    result
}

/// Hand `passwords` (newline terminated) to `copy`, writing them to
/// `fallback` instead when it fails.
fn deliver<W, F>(passwords: &[u8], copy: F, fallback: &mut W) -> Result<(), Error>
where
    W: Write,
    F: FnOnce(&[u8]) -> Result<(), Error>,
{
    match copy(passwords) {
        Ok(()) => {
            prompts::clipboard_copied();
            Ok(())
        }
        Err(e) => {
            prompts::warn(&format!("{e}, printing instead"));
            fallback.write_all(passwords)?;
            fallback.flush()?;
            Ok(())
        }
    }
}

fn copy_to_clipboard(passwords: &[u8]) -> Result<(), Error> {
    let mut ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;

    // Drop the trailing newline
    let text = passwords.strip_suffix(b"\n").unwrap_or(passwords);
    let mut contents: String = text.iter().map(|&b| b as char).collect();
    let result = ctx.set_contents(contents.clone());
    contents.zeroize();
    result.map_err(|e| Error::Clipboard(e.to_string()))?;

    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}
