//! Error-handling options for `execute` and `guard`.

use std::str::FromStr;

use crate::error::ExecError;

/// How a failing command is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnError {
    /// Fail fast: the first failing command aborts the sequence with an
    /// error.
    #[default]
    Exception,
    /// Record the failure in the result and stop without erroring.
    Silent,
}

impl FromStr for OnError {
    type Err = ExecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exception" => Ok(Self::Exception),
            "silent" => Ok(Self::Silent),
            other => Err(ExecError::InvalidOption(format!(
                "illegal value for option on_error: {other}"
            ))),
        }
    }
}

/// Options accepted by `execute` and `guard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecOptions {
    /// Error-handling policy; defaults to [`OnError::Exception`].
    pub on_error: OnError,
}

impl ExecOptions {
    /// Options with the silent error policy.
    #[must_use]
    pub fn silent() -> Self {
        Self { on_error: OnError::Silent }
    }

    /// Parses options from string key/value pairs.
    ///
    /// This is the validation path for callers that receive options as
    /// untyped data; well-typed callers construct [`ExecOptions`] directly
    /// and need no validation. The only recognized key is `on_error`, with
    /// values `exception` and `silent`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::InvalidOption`] for an unknown key or an
    /// illegal value.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, ExecError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::default();
        for (key, value) in entries {
            if key != "on_error" {
                return Err(ExecError::InvalidOption(format!("illegal option: {key}")));
            }
            options.on_error = value.parse()?;
        }
        Ok(options)
    }
}

impl From<OnError> for ExecOptions {
    fn from(on_error: OnError) -> Self {
        Self { on_error }
    }
}
