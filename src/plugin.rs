//! Plugin lifecycle
//!
//! One invocation moves strictly forward through four steps: bind
//! arguments, run the measurement, run validation, render the result.
//! [`PluginBuilder::build`] drives all four, so by the time a [`Plugin`]
//! value exists the check has fully executed and every field is
//! read-only. Nothing loops and nothing is recomputed; the caller only
//! prints the output line and exits with the code.
//!
//! A check customizes the lifecycle by supplying a measurement function
//! and, when the default numeric strategy does not fit, a validation
//! function. Both are plain closures handed to the builder.

use std::env;
use std::ffi::OsString;
use std::fmt;

use log::debug;

use crate::args::{self, ArgSpec, BindError, Bindings};
use crate::core::models::{Status, Verdict};
use crate::core::services::{renderer, validator};

/// Rendered when a check supplies no template of its own.
pub const DEFAULT_TEMPLATE: &str = "${STATE}: ${description} ${result}";

/// What the placeholder measurement reports until a check supplies one.
const PLACEHOLDER_RESULT: &str = "override this check definition";

type MeasureFn = Box<dyn FnOnce(&Bindings) -> anyhow::Result<String>>;
type ValidateFn = Box<dyn FnOnce(&str, &Bindings) -> Verdict>;

/// Configures a check before it executes.
///
/// Created by [`Plugin::builder`]. Finish with [`build`](Self::build)
/// (real process arguments, exits on parse failure) or
/// [`try_build_from`](Self::try_build_from) (explicit arguments, returns
/// the binding error instead).
pub struct PluginBuilder {
    description: String,
    template: Option<String>,
    table: Option<Vec<ArgSpec>>,
    measure: Option<MeasureFn>,
    validate: Option<ValidateFn>,
}

impl PluginBuilder {
    const fn new(description: String) -> Self {
        Self {
            description,
            template: None,
            table: None,
            measure: None,
            validate: None,
        }
    }

    /// Use `template` for the output line instead of [`DEFAULT_TEMPLATE`].
    ///
    /// Templates interpolate `${description}`, `${state}` (lower-case),
    /// `${STATE}` (upper-case), `${result}`, and any bound field by name.
    #[must_use]
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Declare the check's argument table, replacing the conventional
    /// `warn`/`crit`/`expect` table.
    #[must_use]
    pub fn args(mut self, table: Vec<ArgSpec>) -> Self {
        self.table = Some(table);
        self
    }

    /// Accept no options beyond `-h`/`--help`.
    #[must_use]
    pub fn no_args(self) -> Self {
        self.args(Vec::new())
    }

    /// Supply the measurement function: observe one fact and return it
    /// as text. An `Err` concludes the check as unknown, carrying the
    /// error, so a failed probe still yields a well-formed status line.
    #[must_use]
    pub fn measure<F>(mut self, measure: F) -> Self
    where
        F: FnOnce(&Bindings) -> anyhow::Result<String> + 'static,
    {
        self.measure = Some(Box::new(measure));
        self
    }

    /// Supply a validation function, replacing the default numeric
    /// strategy. It receives the measurement and the bindings and must
    /// conclude with a [`Verdict`].
    #[must_use]
    pub fn validate<F>(mut self, validate: F) -> Self
    where
        F: FnOnce(&str, &Bindings) -> Verdict + 'static,
    {
        self.validate = Some(Box::new(validate));
        self
    }

    /// Execute the check against the real process arguments.
    ///
    /// Help requests and argument errors print and terminate the process
    /// with exit code 3 before the measurement runs.
    #[must_use]
    pub fn build(self) -> Plugin {
        match self.try_build_from(env::args()) {
            Ok(plugin) => plugin,
            Err(err) => err.exit(),
        }
    }

    /// Execute the check against an explicit argument vector (the first
    /// element is the program name, as in `std::env::args`).
    pub fn try_build_from<I, T>(self, argv: I) -> Result<Plugin, BindError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let table = self.table.unwrap_or_else(args::default_table);
        let bindings = args::bind(&self.description, &table, argv)?;

        let conclusion = match self.measure {
            None => Verdict::new(Status::Warning, PLACEHOLDER_RESULT),
            Some(measure) => match measure(&bindings) {
                Err(err) => Verdict::new(Status::Unknown, format!("{err:#}")),
                Ok(value) => {
                    debug!("{} measured: {value}", self.description);
                    match self.validate {
                        Some(validate) => validate(&value, &bindings),
                        None => validator::numeric(
                            &value,
                            bindings.threshold("warn"),
                            bindings.threshold("crit"),
                        ),
                    }
                }
            },
        };

        Ok(Plugin::conclude(
            self.description,
            self.template
                .unwrap_or_else(|| DEFAULT_TEMPLATE.to_owned()),
            bindings,
            conclusion,
        ))
    }
}

impl fmt::Debug for PluginBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginBuilder")
            .field("description", &self.description)
            .field("template", &self.template)
            .field("table", &self.table)
            .field("measure", &self.measure.is_some())
            .field("validate", &self.validate.is_some())
            .finish()
    }
}

/// A fully-executed check invocation.
///
/// # Example
///
/// ```
/// use vigil::Plugin;
///
/// let plugin = Plugin::builder("check_answer")
///     .template("${STATE}: the answer is ${result}")
///     .measure(|_| Ok("42".to_owned()))
///     .try_build_from(["check_answer"])
///     .unwrap();
///
/// assert_eq!(plugin.output(), "OK: the answer is 42");
/// assert_eq!(plugin.code(), 0);
/// ```
///
/// A custom validator replaces the numeric default:
///
/// ```
/// use vigil::{ArgSpec, Plugin, validator};
///
/// let plugin = Plugin::builder("check_greeting")
///     .args(vec![ArgSpec::new(
///         "expect",
///         'e',
///         "--expect STRING",
///         "Pattern the greeting must match",
///     )])
///     .measure(|_| Ok("hello world".to_owned()))
///     .validate(|value, bindings| {
///         validator::string_match(value, bindings.text("expect").unwrap_or(""))
///     })
///     .try_build_from(["check_greeting", "--expect", "hello"])
///     .unwrap();
///
/// assert_eq!(plugin.code(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Plugin {
    description: String,
    template: String,
    bindings: Bindings,
    result: String,
    state: Status,
    code: i32,
    output: String,
}

impl Plugin {
    /// Start configuring a check.
    #[must_use]
    pub fn builder(description: impl Into<String>) -> PluginBuilder {
        PluginBuilder::new(description.into())
    }

    /// The single status transition: stringifies the verdict's subject
    /// into the result, fixes the state, renders the template, and fixes
    /// the exit code. Runs exactly once per invocation.
    fn conclude(description: String, template: String, bindings: Bindings, verdict: Verdict) -> Self {
        let Verdict { status, subject } = verdict;
        let output = renderer::render(&template, |variable| match variable {
            "description" => Some(description.clone()),
            "state" => Some(status.to_string()),
            "STATE" => Some(status.as_str().to_ascii_uppercase()),
            "result" => Some(subject.clone()),
            field => bindings.display(field),
        });
        debug!("{description} concluded {status} ({})", status.exit_code());
        Self {
            description,
            template,
            bindings,
            result: subject,
            state: status,
            code: status.exit_code(),
            output,
        }
    }

    /// The check's short description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The template the output line was rendered from.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The argument fields bound for this invocation.
    #[must_use]
    pub const fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// The stringified measurement or diagnostic the check concluded with.
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// The concluded severity.
    #[must_use]
    pub const fn state(&self) -> Status {
        self.state
    }

    /// The process exit code a scheduler should receive.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// The fully rendered output line.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}
