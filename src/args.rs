//! Declarative argument binding
//!
//! A check declares the options it accepts as a table of [`ArgSpec`]
//! entries; the binder assembles a [`clap`] command from the table,
//! parses the invocation's arguments once, and hands back [`Bindings`].
//! An option whose long-flag text mentions `THRESHOLD` (any case) is
//! promoted through the threshold parser instead of binding raw text.
//!
//! `-h`/`--help` is always available. Help requests and every parse
//! failure - unrecognized flag, missing value, malformed threshold -
//! print the rendered message and terminate the process with the
//! unknown exit code, before any measurement runs.

use std::collections::HashMap;
use std::ffi::OsString;
use std::process;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command};
use log::debug;
use thiserror::Error;

use crate::core::models::{Status, Threshold};

/// One named option in a check's argument table.
///
/// The long text carries the flag and an optional value hint, the way
/// usage lines spell it: `"--warn THRESHOLD"`. A hint containing
/// `threshold` case-insensitively selects threshold promotion; a missing
/// hint makes the option a bare switch that binds the text `"true"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSpec {
    field: String,
    short: char,
    flag: String,
    value_name: Option<String>,
    help: String,
    threshold: bool,
}

impl ArgSpec {
    /// Declare an option: field name to bind, short flag, long-flag text
    /// with optional value hint, and help text.
    #[must_use]
    pub fn new(field: &str, short: char, long: &str, help: &str) -> Self {
        let threshold = long.to_ascii_lowercase().contains("threshold");
        let long = long.trim_start_matches('-');
        let (flag, value_name) = match long.split_once(' ') {
            Some((flag, hint)) => (flag, Some(hint.trim().to_owned())),
            None => (long, None),
        };
        Self {
            field: field.to_owned(),
            short,
            flag: flag.to_owned(),
            value_name,
            help: help.to_owned(),
            threshold,
        }
    }

    fn as_arg(&self) -> Arg {
        let arg = Arg::new(self.field.clone())
            .short(self.short)
            .long(self.flag.clone())
            .help(self.help.clone());
        match &self.value_name {
            Some(hint) if self.threshold => arg
                .value_name(hint.clone())
                .action(ArgAction::Set)
                .value_parser(Threshold::parse),
            Some(hint) => arg.value_name(hint.clone()).action(ArgAction::Set),
            None => arg.action(ArgAction::SetTrue),
        }
    }
}

/// A value bound from the command line
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    /// Raw string value
    Text(String),
    /// Value promoted through the threshold parser
    Threshold(Threshold),
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Threshold(threshold) => write!(f, "{threshold}"),
        }
    }
}

/// Field values bound from one invocation's arguments.
///
/// The conventional fields keep their own typed slots; anything else a
/// check declares lands in a generic map, reachable by name.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    warn: Option<Threshold>,
    crit: Option<Threshold>,
    expect: Option<String>,
    extra: HashMap<String, Bound>,
}

impl Bindings {
    /// The bound warning threshold, if one was supplied.
    #[must_use]
    pub const fn warn(&self) -> Option<&Threshold> {
        self.warn.as_ref()
    }

    /// The bound critical threshold, if one was supplied.
    #[must_use]
    pub const fn crit(&self) -> Option<&Threshold> {
        self.crit.as_ref()
    }

    /// The bound expected pattern, if one was supplied.
    #[must_use]
    pub fn expect(&self) -> Option<&str> {
        self.expect.as_deref()
    }

    /// A bound text field by name.
    #[must_use]
    pub fn text(&self, field: &str) -> Option<&str> {
        match field {
            "expect" if self.expect.is_some() => self.expect.as_deref(),
            _ => match self.extra.get(field) {
                Some(Bound::Text(value)) => Some(value),
                _ => None,
            },
        }
    }

    /// A bound threshold field by name.
    #[must_use]
    pub fn threshold(&self, field: &str) -> Option<&Threshold> {
        match field {
            "warn" if self.warn.is_some() => self.warn.as_ref(),
            "crit" if self.crit.is_some() => self.crit.as_ref(),
            _ => match self.extra.get(field) {
                Some(Bound::Threshold(threshold)) => Some(threshold),
                _ => None,
            },
        }
    }

    /// Render a bound field for template interpolation, whatever its kind.
    #[must_use]
    pub fn display(&self, field: &str) -> Option<String> {
        self.text(field)
            .map(str::to_owned)
            .or_else(|| self.threshold(field).map(ToString::to_string))
    }

    fn set(&mut self, field: &str, value: Bound) {
        match (field, value) {
            ("warn", Bound::Threshold(threshold)) => self.warn = Some(threshold),
            ("crit", Bound::Threshold(threshold)) => self.crit = Some(threshold),
            ("expect", Bound::Text(value)) => self.expect = Some(value),
            (_, value) => {
                self.extra.insert(field.to_owned(), value);
            }
        }
    }
}

/// A failed argument binding: bad flag, bad value, or a help request
#[derive(Debug, Error)]
#[error(transparent)]
pub struct BindError(#[from] clap::Error);

impl BindError {
    /// Whether this was a `-h`/`--help` request rather than a mistake.
    #[must_use]
    pub fn is_help(&self) -> bool {
        self.0.kind() == ErrorKind::DisplayHelp
    }

    /// Print the rendered message (help to stdout, errors with usage to
    /// stderr) and terminate with the unknown exit code.
    pub fn exit(self) -> ! {
        let _ = self.0.print();
        process::exit(Status::Unknown.exit_code())
    }
}

/// The conventional argument table a plugin gets when it declares none
/// of its own.
#[must_use]
pub fn default_table() -> Vec<ArgSpec> {
    vec![
        ArgSpec::new(
            "expect",
            'e',
            "--expect STRING",
            "Return critical unless output matches STRING",
        ),
        ArgSpec::new("crit", 'c', "--crit THRESHOLD", "Critical threshold"),
        ArgSpec::new("warn", 'w', "--warn THRESHOLD", "Warning threshold"),
    ]
}

/// Parse `argv` against the table and bind every recognized flag that
/// is present. Binding happens once, before the measurement runs.
pub(crate) fn bind<I, T>(description: &str, table: &[ArgSpec], argv: I) -> Result<Bindings, BindError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = Command::new(description.to_owned());
    for spec in table {
        command = command.arg(spec.as_arg());
    }
    let matches = command.try_get_matches_from(argv)?;

    let mut bindings = Bindings::default();
    for spec in table {
        let field = spec.field.as_str();
        if spec.value_name.is_none() {
            if matches.get_flag(field) {
                bindings.set(field, Bound::Text("true".to_owned()));
            }
        } else if spec.threshold {
            if let Some(threshold) = matches.get_one::<Threshold>(field) {
                bindings.set(field, Bound::Threshold(*threshold));
            }
        } else if let Some(value) = matches.get_one::<String>(field) {
            bindings.set(field, Bound::Text(value.clone()));
        }
    }
    debug!("bound arguments for {description}: {bindings:?}");
    Ok(bindings)
}
