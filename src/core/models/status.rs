//! Check status levels
//!
//! The four-valued outcome of a check, totally ordered from healthy to
//! unreportable. Every invocation ends in exactly one of these, and the
//! monitoring scheduler only ever sees the matching exit code.

/// Outcome of a check, in increasing order of badness
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Status {
    /// Measurement is inside every supplied threshold
    Ok,
    /// Measurement violates the warning threshold
    Warning,
    /// Measurement violates the critical threshold
    Critical,
    /// Measurement could not be obtained or understood
    #[default]
    Unknown,
}

impl Status {
    /// The process exit code a scheduler reads for this status.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }

    /// The lower-case status name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Unknown => "unknown",
        }
    }

    /// Look up a status by name, case-insensitively.
    ///
    /// Unrecognized names resolve to [`Status::Unknown`] rather than
    /// failing, so a custom validator working from labels can never
    /// produce an exit code outside 0-3.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "ok" => Self::Ok,
            "warning" => Self::Warning,
            "critical" => Self::Critical,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
