//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;
pub mod requirements;

pub use generate::Generator;
