//! Operating system CSPRNG source.

use rand::TryRngCore;
use rand::rngs::OsRng;

use super::{BitSource, Bits, check_width};
use crate::error::SourceError;

/// Bits read straight from the kernel's random device.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl BitSource for OsEntropy {
    fn name(&self) -> &'static str {
        "/dev/urandom"
    }

    fn next_bits(&mut self, n: u32) -> Result<Bits, SourceError> {
        check_width(n, 64)?;
        let word = OsRng
            .try_next_u64()
            .map_err(|e| SourceError::Entropy(e.to_string()))?;
        Ok(Bits::new(word >> (64 - n), n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_are_honoured() {
        let mut source = OsEntropy;
        for n in [1, 7, 32, 64] {
            let bits = source.next_bits(n).expect("os entropy");
            assert_eq!(bits.width(), n);
            if n < 64 {
                assert!(bits.value() < 1u64 << n);
            }
        }
    }

    #[test]
    fn zero_and_oversized_widths_fail() {
        assert!(OsEntropy.next_bits(0).is_err());
        assert!(OsEntropy.next_bits(65).is_err());
    }
}
