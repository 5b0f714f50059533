//! Password generation settings.

use crate::entropy::SourceKind;

#[derive(Debug, Clone)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    /// `None` retries until a password meets the composition rule.
    pub max_attempts: Option<u64>,
    pub source: SourceKind,
    /// Fixed simulator seed for reproducible output.
    pub seed: Option<u64>,
    pub to_clipboard: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            number_of_passwords: 1,
            max_attempts: None,
            source: SourceKind::Quantum,
            seed: None,
            to_clipboard: false,
        }
    }
}
