//! Random bit sources.

mod bits;
mod os;
mod quantum;

pub use bits::Bits;
pub use os::OsEntropy;
pub use quantum::QuantumSimulator;

use crate::error::SourceError;

/// Supplies independent, uniformly distributed random bits on demand.
///
/// Each of the `2^n` outputs of `next_bits(n)` must be equally likely and
/// independent of every earlier call.
pub trait BitSource {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    fn next_bits(&mut self, n: u32) -> Result<Bits, SourceError>;
}

impl<S: BitSource + ?Sized> BitSource for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn next_bits(&mut self, n: u32) -> Result<Bits, SourceError> {
        (**self).next_bits(n)
    }
}

impl<S: BitSource + ?Sized> BitSource for &mut S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn next_bits(&mut self, n: u32) -> Result<Bits, SourceError> {
        (**self).next_bits(n)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    #[default]
    Quantum,
    Urandom,
}

impl SourceKind {
    /// Build the selected source. `seed` makes the simulator reproducible;
    /// the OS source has no seed and ignores it.
    pub fn open(self, seed: Option<u64>) -> Result<Box<dyn BitSource>, SourceError> {
        let source: Box<dyn BitSource> = match (self, seed) {
            (SourceKind::Quantum, Some(seed)) => Box::new(QuantumSimulator::seeded(seed)),
            (SourceKind::Quantum, None) => Box::new(QuantumSimulator::new()?),
            (SourceKind::Urandom, _) => Box::new(OsEntropy),
        };
        Ok(source)
    }
}

/// Reject widths outside `1..=max` before touching the source.
pub(crate) fn check_width(n: u32, max: u32) -> Result<(), SourceError> {
    if n == 0 || n > max {
        return Err(SourceError::InvalidBitCount { requested: n, max });
    }
    Ok(())
}
