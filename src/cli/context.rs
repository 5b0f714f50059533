//! CLI context - bundles settings and flags.

use log::debug;

use super::{CliFlags, output_bytes, parse_byte_count, print_help, prompts, quiet};
use crate::entropy::SourceKind;
use crate::error::Error;
use crate::pass::{self, Generator};
use crate::settings::Settings;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self, Error> {
        let flags = super::parse(args)?;
        let mut context = Self {
            settings: Settings::default(),
            flags,
        };
        context.apply_flags();
        Ok(context)
    }

    /// Run CLI to completion.
    pub fn run(&mut self) -> Result<(), Error> {
        if self.handle_info_flags().is_err() {
            return Ok(());
        }
        quiet::set(self.flags.quiet);
        for warning in self.warnings() {
            prompts::warn(warning);
        }

        if self.flags.bytes {
            return self.output_bytes();
        }
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("qpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Flag combinations that are accepted but partly ignored.
    fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.settings.source == SourceKind::Urandom && self.settings.seed.is_some() {
            warnings.push("Warning: --seed is ignored with --urandom");
        }
        warnings
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        if self.flags.max_attempts.is_some() {
            self.settings.max_attempts = self.flags.max_attempts;
        }
        self.settings.source = self.flags.source();
        self.settings.seed = self.flags.seed;
        self.settings.to_clipboard = self.flags.clipboard;
    }

    fn output_bytes(&self) -> Result<(), Error> {
        let limit = self
            .flags
            .number_raw
            .as_deref()
            .and_then(parse_byte_count);
        let mut source = self.settings.source.open(self.settings.seed)?;
        output_bytes(&mut source, limit)
    }

    /// Generate passwords and handle output.
    fn generate_output(&self) -> Result<(), Error> {
        let source = self.settings.source.open(self.settings.seed)?;
        let mut generator = Generator::new(source, &self.settings)?;
        let count = self.settings.number_of_passwords;
        debug!("generating {} password(s)", count);

        if self.settings.to_clipboard {
            pass::output::to_clipboard(&mut generator, count)
        } else {
            pass::output::to_stdout(&mut generator, count)
        }
    }
}
