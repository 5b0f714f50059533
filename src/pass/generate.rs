//! Password generation.

use std::fmt;

use log::{debug, trace};
use zeroize::Zeroize;

use super::charset::{self, ALPHABET};
use super::requirements::{MIN_GROUPS, meets_requirements, represented_groups};
use crate::entropy::BitSource;
use crate::error::{Error, SourceError};
use crate::settings::Settings;

/// A password that passed the composition rule. Wiped on drop.
pub struct Password(String);

impl Password {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.0.len())
    }
}

/// Draws characters from a [`BitSource`] until a candidate meets the
/// composition rule.
pub struct Generator<S> {
    source: S,
    length: usize,
    max_attempts: Option<u64>,
    num_bits: u32,
}

impl<S: BitSource> Generator<S> {
    pub fn new(source: S, settings: &Settings) -> Result<Self, Error> {
        if settings.pass_length < MIN_GROUPS {
            return Err(Error::InvalidLength {
                length: settings.pass_length,
                min: MIN_GROUPS,
            });
        }

        let num_bits = charset::bit_width(ALPHABET.len());
        let entropy = charset::entropy_bits(settings.pass_length);
        debug!(
            "source: {}, {} bits per character, {:.1} bits of entropy ({})",
            source.name(),
            num_bits,
            entropy,
            charset::entropy_strength(entropy)
        );

        Ok(Generator {
            source,
            length: settings.pass_length,
            max_attempts: settings.max_attempts,
            num_bits,
        })
    }

    /// Generate one password, restarting from an empty buffer after every
    /// rejected candidate.
    pub fn generate(&mut self) -> Result<Password, Error> {
        let mut buf = vec![0u8; self.length];
        let mut attempt: u64 = 0;

        loop {
            if self.max_attempts.is_some_and(|max| attempt >= max) {
                buf.zeroize();
                return Err(Error::AttemptsExhausted(attempt));
            }
            attempt += 1;

            if let Err(e) = self.fill(&mut buf) {
                buf.zeroize();
                return Err(e.into());
            }

            match std::str::from_utf8(&buf) {
                Ok(candidate) if meets_requirements(candidate) => {
                    let password = Password(candidate.to_owned());
                    buf.zeroize();
                    debug!("password accepted after {} attempt(s)", attempt);
                    return Ok(password);
                }
                Ok(candidate) => trace!(
                    "attempt {} rejected: {} group(s) represented",
                    attempt,
                    represented_groups(candidate)
                ),
                Err(_) => trace!("attempt {} rejected: not ascii", attempt),
            }

            buf.as_mut_slice().zeroize();
        }
    }

    /// Overwrite every slot with a freshly drawn character.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        for slot in buf.iter_mut() {
            let mut bits = self.source.next_bits(self.num_bits)?;
            *slot = ALPHABET[charset::scale_index(bits.value(), bits.width(), ALPHABET.len())];
            bits.zeroize();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::entropy::{Bits, QuantumSimulator};
    use crate::pass::charset::Group;

    /// Replays fixed values; fails once the script runs dry.
    struct Scripted {
        values: VecDeque<u64>,
        widths: Vec<u32>,
        repeat: Option<u64>,
    }

    impl Scripted {
        fn new(values: &[u64]) -> Self {
            Scripted {
                values: values.iter().copied().collect(),
                widths: Vec::new(),
                repeat: None,
            }
        }

        fn always(value: u64) -> Self {
            Scripted {
                values: VecDeque::new(),
                widths: Vec::new(),
                repeat: Some(value),
            }
        }
    }

    impl BitSource for Scripted {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn next_bits(&mut self, n: u32) -> Result<Bits, SourceError> {
            self.widths.push(n);
            self.values
                .pop_front()
                .or(self.repeat)
                .map(|v| Bits::new(v, n))
                .ok_or_else(|| SourceError::Entropy("script exhausted".into()))
        }
    }

    fn settings(max_attempts: Option<u64>) -> Settings {
        Settings {
            max_attempts,
            ..Settings::default()
        }
    }

    #[test]
    fn all_zero_source_is_rejected_and_retried() {
        let mut source = Scripted::always(0);
        let mut generator = Generator::new(&mut source, &settings(Some(3))).unwrap();
        match generator.generate() {
            Err(Error::AttemptsExhausted(3)) => {}
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(source.widths.len(), 3 * 16);
        assert!(source.widths.iter().all(|&w| w == 7));
    }

    #[test]
    fn second_attempt_is_returned() {
        let mut script = vec![0u64; 16];
        script.extend([49, 98, 117, 2]);
        script.extend([0u64; 12]);
        let mut generator = Generator::new(Scripted::new(&script), &settings(None)).unwrap();

        let password = generator.generate().unwrap();
        assert_eq!(password.as_str(), "A0!baaaaaaaaaaaa");
        assert!(generator.source.values.is_empty());
    }

    #[test]
    fn compliant_first_attempt_needs_no_retry() {
        let script = [127u64, 64, 100, 120, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2];
        let mut generator = Generator::new(Scripted::new(&script), &settings(Some(1))).unwrap();
        assert_eq!(generator.generate().unwrap().as_str(), ")I1$bbbbbbbbbbbb");
    }

    #[test]
    fn source_failure_propagates() {
        let mut generator = Generator::new(Scripted::new(&[1, 2, 3]), &settings(None)).unwrap();
        assert!(matches!(
            generator.generate(),
            Err(Error::Source(SourceError::Entropy(_)))
        ));
    }

    #[test]
    fn too_short_length_is_refused() {
        let settings = Settings {
            pass_length: 2,
            ..Settings::default()
        };
        assert!(matches!(
            Generator::new(Scripted::always(0), &settings),
            Err(Error::InvalidLength { length: 2, min: 3 })
        ));
    }

    #[test]
    fn simulator_passwords_hold_invariants() {
        let mut generator =
            Generator::new(QuantumSimulator::seeded(0x5eed), &settings(None)).unwrap();
        assert_eq!(generator.num_bits, 7);

        for _ in 0..200 {
            let password = generator.generate().unwrap();
            assert_eq!(password.as_str().len(), 16);
            assert!(password.as_str().bytes().all(|c| ALPHABET.contains(&c)));
            assert!(represented_groups(password.as_str()) >= 3);
            assert!(password.as_str().bytes().all(|c| Group::of(c).is_some()));
        }
    }

    #[test]
    fn custom_length_is_honoured() {
        let settings = Settings {
            pass_length: 40,
            ..Settings::default()
        };
        let mut generator = Generator::new(QuantumSimulator::seeded(3), &settings).unwrap();
        assert_eq!(generator.generate().unwrap().as_str().len(), 40);
    }

    #[test]
    fn debug_output_is_redacted() {
        let password = Password("aB3!aaaaaaaaaaaa".to_string());
        assert_eq!(format!("{password:?}"), "Password(<16 chars>)");
    }
}
