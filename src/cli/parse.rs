use thiserror::Error;

use super::{CliFlags, parse_byte_count};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
}

/// Parse `args` (program name first) into flags.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "--bytes" => flags.bytes = true,
            "-u" | "--urandom" => flags.urandom = true,
            "-b" | "--board" => flags.clipboard = true,
            "-l" | "--length" => {
                let value = value_of(args, &mut i)?;
                flags.length = Some(number(value)?);
            }
            "-n" | "--number" => {
                let value = value_of(args, &mut i)?;
                flags.number_raw = Some(value.to_string());
            }
            "--max-attempts" => {
                let value = value_of(args, &mut i)?;
                match number(value)? {
                    0 => return Err(ParseError::InvalidNumber(value.to_string())),
                    max => flags.max_attempts = Some(max),
                }
            }
            "--seed" => {
                let value = value_of(args, &mut i)?;
                flags.seed = Some(number(value)?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    // -n is a byte count (K/M/G allowed) with --bytes, a password count otherwise
    if let Some(raw) = flags.number_raw.as_deref() {
        if flags.bytes {
            if parse_byte_count(raw).is_none() {
                return Err(ParseError::InvalidNumber(raw.to_string()));
            }
        } else {
            flags.number = Some(number(raw)?);
        }
    }

    Ok(flags)
}

fn value_of<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number<T: std::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("qpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_arguments_gives_defaults() {
        let flags = parse(&args(&[])).unwrap();
        assert!(!flags.help && !flags.bytes && !flags.urandom && !flags.clipboard);
        assert_eq!(flags.length, None);
        assert_eq!(flags.number, None);
        assert_eq!(flags.max_attempts, None);
    }

    #[test]
    fn value_flags() {
        let flags = parse(&args(&[
            "-l", "24", "--number", "3", "--max-attempts", "50", "-u", "--seed", "7",
        ]))
        .unwrap();
        assert_eq!(flags.seed, Some(7));
        assert_eq!(flags.length, Some(24));
        assert_eq!(flags.number, Some(3));
        assert_eq!(flags.max_attempts, Some(50));
        assert!(flags.urandom);
    }

    #[test]
    fn suffixed_number_kept_raw() {
        let flags = parse(&args(&["--bytes", "-n", "4K"])).unwrap();
        assert!(flags.bytes);
        assert_eq!(flags.number, None);
        assert_eq!(flags.number_raw.as_deref(), Some("4K"));
    }

    #[test]
    fn bad_byte_count_is_rejected() {
        assert_eq!(
            parse(&args(&["--bytes", "-n", "foo"])).unwrap_err(),
            ParseError::InvalidNumber("foo".into())
        );
    }

    #[test]
    fn suffixed_password_count_is_rejected() {
        assert_eq!(
            parse(&args(&["-n", "4K"])).unwrap_err(),
            ParseError::InvalidNumber("4K".into())
        );
    }

    #[test]
    fn zero_max_attempts_is_rejected() {
        assert_eq!(
            parse(&args(&["--max-attempts", "0"])).unwrap_err(),
            ParseError::InvalidNumber("0".into())
        );
        assert_eq!(parse(&args(&["--max-attempts", "1"])).unwrap().max_attempts, Some(1));
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&args(&["--frobnicate"])).unwrap_err(),
            ParseError::UnknownArg("--frobnicate".into())
        );
        assert_eq!(
            parse(&args(&["-l", "sixteen"])).unwrap_err(),
            ParseError::InvalidNumber("sixteen".into())
        );
        assert_eq!(
            parse(&args(&["--length"])).unwrap_err(),
            ParseError::MissingValue("--length".into())
        );
    }
}
