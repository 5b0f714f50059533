use crate::entropy::SourceKind;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub bytes: bool,
    pub urandom: bool,
    pub clipboard: bool,
    pub quiet: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub number_raw: Option<String>,
    pub max_attempts: Option<u64>,
    pub seed: Option<u64>,
}

impl CliFlags {
    pub fn source(&self) -> SourceKind {
        if self.urandom {
            SourceKind::Urandom
        } else {
            SourceKind::Quantum
        }
    }
}
