//! Argument tokenization
//!
//! Turns a command's argument vector into an immutable `ParsedArgs` keyed
//! by catalog option. Tokenization itself is delegated to the clap builder
//! API; mandatory-option and enumerated-value checks happen afterwards in
//! the command lifecycle, which owns the usage/exit behavior.

use super::options::{OptionKey, RegisteredOption};
use crate::errors::{AppError, AppResult};
use clap::{Arg, ArgAction};
use std::collections::{HashMap, HashSet};

/// The parse result for one invocation. Values are keyed by the catalog
/// long flag; boolean options only record presence.
#[derive(Debug, Default)]
pub struct ParsedArgs {
    values: HashMap<&'static str, String>,
    present: HashSet<&'static str>,
}

impl ParsedArgs {
    pub fn is_set(&self, key: OptionKey) -> bool {
        self.present.contains(key.long())
    }

    pub fn value(&self, key: OptionKey) -> Option<&str> {
        self.values.get(key.long()).map(String::as_str)
    }

    /// Value of an option the lifecycle has already validated as present.
    pub fn require(&self, key: OptionKey) -> AppResult<&str> {
        self.value(key)
            .ok_or_else(|| AppError::internal(format!("option --{} not parsed", key.long())))
    }

    pub fn u64(&self, key: OptionKey) -> AppResult<u64> {
        parse_numeric(key, self.require(key)?)
    }

    pub fn opt_u64(&self, key: OptionKey) -> AppResult<Option<u64>> {
        self.value(key).map(|v| parse_numeric(key, v)).transpose()
    }

    pub fn u32(&self, key: OptionKey) -> AppResult<u32> {
        parse_numeric(key, self.require(key)?)
    }

    pub fn opt_u32(&self, key: OptionKey) -> AppResult<Option<u32>> {
        self.value(key).map(|v| parse_numeric(key, v)).transpose()
    }

    pub fn f64(&self, key: OptionKey) -> AppResult<f64> {
        parse_numeric(key, self.require(key)?)
    }

    pub fn opt_f64(&self, key: OptionKey) -> AppResult<Option<f64>> {
        self.value(key).map(|v| parse_numeric(key, v)).transpose()
    }
}

fn parse_numeric<T: std::str::FromStr>(key: OptionKey, value: &str) -> AppResult<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.parse().map_err(|e| AppError::Parse {
        input: format!("--{} {}", key.long(), value),
        expected: "a numeric value".to_string(),
        source: Some(Box::new(e)),
    })
}

/// Tokenize `tokens` against the command's registered options.
pub(crate) fn parse_tokens(
    command_name: &str,
    options: &[RegisteredOption],
    tokens: &[String],
) -> Result<ParsedArgs, clap::Error> {
    let mut app = clap::Command::new(command_name.to_string())
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true);

    for opt in options {
        let desc = opt.key.descriptor();
        let arg = Arg::new(desc.long).short(desc.short).long(desc.long);
        let arg = if desc.takes_value {
            arg.action(ArgAction::Set).value_name("value")
        } else {
            arg.action(ArgAction::SetTrue)
        };
        app = app.arg(arg);
    }

    let matches = app.try_get_matches_from(tokens)?;

    let mut parsed = ParsedArgs::default();
    for opt in options {
        let desc = opt.key.descriptor();
        if desc.takes_value {
            if let Some(value) = matches.get_one::<String>(desc.long) {
                parsed.present.insert(desc.long);
                parsed.values.insert(desc.long, value.clone());
            }
        } else if matches.get_flag(desc.long) {
            parsed.present.insert(desc.long);
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Vec<RegisteredOption> {
        vec![
            OptionKey::Help.optional(),
            OptionKey::Verbose.optional(),
            OptionKey::Id.required(),
            OptionKey::Name.optional(),
        ]
    }

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parses_short_and_long_forms() {
        let parsed = parse_tokens("cmd", &opts(), &tokens(&["-i", "42", "--name", "web"])).unwrap();
        assert_eq!(parsed.value(OptionKey::Id), Some("42"));
        assert_eq!(parsed.value(OptionKey::Name), Some("web"));
        assert!(!parsed.is_set(OptionKey::Verbose));
    }

    #[test]
    fn test_boolean_options_record_presence() {
        let parsed = parse_tokens("cmd", &opts(), &tokens(&["-v", "-i", "1"])).unwrap();
        assert!(parsed.is_set(OptionKey::Verbose));
        assert!(parsed.value(OptionKey::Verbose).is_none());
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        assert!(parse_tokens("cmd", &opts(), &tokens(&["--bogus"])).is_err());
    }

    #[test]
    fn test_missing_value_is_an_error() {
        assert!(parse_tokens("cmd", &opts(), &tokens(&["--id"])).is_err());
    }

    #[test]
    fn test_absent_mandatory_is_not_a_tokenizer_error() {
        // Mandatory enforcement lives in the lifecycle, not the tokenizer.
        let parsed = parse_tokens("cmd", &opts(), &tokens(&[])).unwrap();
        assert!(!parsed.is_set(OptionKey::Id));
    }

    #[test]
    fn test_numeric_accessors() {
        let parsed = parse_tokens("cmd", &opts(), &tokens(&["-i", "42"])).unwrap();
        assert_eq!(parsed.u64(OptionKey::Id).unwrap(), 42);

        let parsed = parse_tokens("cmd", &opts(), &tokens(&["-i", "forty"])).unwrap();
        assert!(parsed.u64(OptionKey::Id).is_err());
    }
}
