mod bytes;
mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;
mod quiet;

pub use bytes::output as output_bytes;
pub use bytes::parse_byte_count;
pub use context::Context;
pub use flags::CliFlags;
pub use help::print_help;
pub use parse::{ParseError, parse};
