//! State-vector quantum simulator used as a random bit source.
//!
//! Each request allocates a fresh register of `n` qubits in `|0...0>`, puts
//! every qubit into equal superposition with a Hadamard gate and measures the
//! whole register. The measured basis state is the returned bit string.
//! Measurement sampling is driven by a CSPRNG, so the output is only as
//! random as a classical generator.

use std::f64::consts::FRAC_1_SQRT_2;

use num_complex::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zeroize::Zeroize;

use super::{BitSource, Bits, check_width};
use crate::error::SourceError;

/// Largest register the simulator will allocate (2^16 amplitudes).
pub const MAX_QUBITS: u32 = 16;

type Gate = [[Complex<f64>; 2]; 2];

const HADAMARD: Gate = [
    [Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(FRAC_1_SQRT_2, 0.0)],
    [Complex::new(FRAC_1_SQRT_2, 0.0), Complex::new(-FRAC_1_SQRT_2, 0.0)],
];

/// Amplitudes of an `n`-qubit register. Qubit 0 is the most significant bit
/// of the basis-state index.
struct Register {
    amplitudes: Vec<Complex<f64>>,
    qubits: u32,
}

impl Register {
    fn new(qubits: u32) -> Self {
        let mut amplitudes = vec![Complex::new(0.0, 0.0); 1usize << qubits];
        amplitudes[0] = Complex::new(1.0, 0.0);
        Register { amplitudes, qubits }
    }

    fn apply(&mut self, gate: &Gate, target: u32) {
        let k_mask = 1usize << (self.qubits - 1 - target);
        for i0 in 0..self.amplitudes.len() {
            if i0 & k_mask != 0 {
                continue;
            }
            let i1 = i0 | k_mask;
            let (psi_0, psi_1) = (self.amplitudes[i0], self.amplitudes[i1]);
            self.amplitudes[i0] = gate[0][0] * psi_0 + gate[0][1] * psi_1;
            self.amplitudes[i1] = gate[1][0] * psi_0 + gate[1][1] * psi_1;
        }
    }

    /// Collapse the register and return the observed basis state.
    fn measure<R: Rng>(&mut self, rng: &mut R) -> usize {
        let sample: f64 = rng.random::<f64>();
        let mut cumulative = 0.0;
        let mut outcome = None;
        let mut last_nonzero = 0;

        for (index, amplitude) in self.amplitudes.iter().enumerate() {
            let p = amplitude.norm_sqr();
            if p > 0.0 {
                last_nonzero = index;
            }
            cumulative += p;
            if outcome.is_none() && sample < cumulative {
                outcome = Some(index);
            }
        }

        // Rounding can leave the cumulative sum just below 1.0.
        let outcome = outcome.unwrap_or(last_nonzero);
        for (index, amplitude) in self.amplitudes.iter_mut().enumerate() {
            *amplitude = if index == outcome {
                Complex::new(1.0, 0.0)
            } else {
                Complex::new(0.0, 0.0)
            };
        }
        outcome
    }

    #[cfg(test)]
    fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }
}

impl Drop for Register {
    fn drop(&mut self) {
        for amplitude in self.amplitudes.iter_mut() {
            amplitude.re.zeroize();
            amplitude.im.zeroize();
        }
    }
}

pub struct QuantumSimulator {
    rng: StdRng,
}

impl QuantumSimulator {
    /// Simulator whose measurements are seeded from the OS.
    pub fn new() -> Result<Self, SourceError> {
        let rng = StdRng::try_from_os_rng().map_err(|e| SourceError::Entropy(e.to_string()))?;
        Ok(QuantumSimulator { rng })
    }

    /// Reproducible simulator for tests and diagnostics.
    pub fn seeded(seed: u64) -> Self {
        QuantumSimulator {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl BitSource for QuantumSimulator {
    fn name(&self) -> &'static str {
        "quantum simulator"
    }

    fn next_bits(&mut self, n: u32) -> Result<Bits, SourceError> {
        check_width(n, MAX_QUBITS)?;
        let mut register = Register::new(n);
        for qubit in 0..n {
            register.apply(&HADAMARD, qubit);
        }
        let outcome = register.measure(&mut self.rng);
        // Read the qubits out in register order, qubit 0 first.
        Ok(Bits::from_msb_first(
            (0..n).map(|q| (outcome >> (n - 1 - q)) & 1 == 1),
        ))
    }
}
