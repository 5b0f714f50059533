use std::io::{self, Write};

use log::debug;
use zeroize::Zeroize;

use crate::entropy::BitSource;
use crate::error::Error;

/// Parse byte count with optional K, M, G suffix
pub fn parse_byte_count(s: &str) -> Option<usize> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else {
        (s.as_str(), 1)
    };
    num_str.parse::<usize>().ok()?.checked_mul(multiplier)
}

/// Stream bytes measured from `source` until `limit` is reached (forever when
/// `None`) or the reader goes away.
pub fn write_bytes<W: Write, S: BitSource + ?Sized>(
    out: &mut W,
    source: &mut S,
    limit: Option<usize>,
) -> Result<usize, Error> {
    let mut buf = [0u8; 4096];
    let mut written: usize = 0;

    loop {
        let to_write = match limit {
            Some(limit) => limit.saturating_sub(written).min(buf.len()),
            None => buf.len(),
        };
        if to_write == 0 {
            break;
        }

        for byte in buf[..to_write].iter_mut() {
            *byte = source.next_bits(8)?.value() as u8;
        }

        match out.write_all(&buf[..to_write]) {
            Ok(()) => written += to_write,
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => break,
            Err(e) => {
                buf.zeroize();
                return Err(e.into());
            }
        }
    }

    buf.zeroize();
    out.flush()?;
    debug!("wrote {} random bytes from {}", written, source.name());
    Ok(written)
}

pub fn output<S: BitSource + ?Sized>(source: &mut S, limit: Option<usize>) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_bytes(&mut out, source, limit)?;
    Ok(())
}
