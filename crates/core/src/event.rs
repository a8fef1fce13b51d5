use std::borrow::Cow;
use std::fmt;

use crate::Severity;

/// File and line the host runtime attributed an intercepted error to.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLocation {
    file: Cow<'static, str>,
    line: u32,
}

impl SourceLocation {
    /// Creates a location from a file path and a 1-based line number.
    #[must_use]
    pub fn new<F: Into<Cow<'static, str>>>(file: F, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Returns the file path as reported by the host runtime.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns the line number as reported by the host runtime.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A single intercepted runtime error.
///
/// One event is created per interception and consumed once by the router; the
/// type is deliberately immutable. The raw `code` is kept alongside the
/// derived severity so both rendering paths can show the runtime's own
/// numbering next to the classified bucket.
///
/// # Examples
///
/// ```
/// use webdiag_core::{ErrorEvent, Severity, SourceLocation, codes};
///
/// let event = ErrorEvent::new(
///     codes::ERROR,
///     "div by zero",
///     SourceLocation::new("a.txt", 42),
/// );
///
/// assert_eq!(event.code(), codes::ERROR);
/// assert_eq!(event.message(), "div by zero");
/// assert_eq!(event.severity(), Severity::Fatal);
/// assert_eq!(event.source().to_string(), "a.txt:42");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "events must be handled to reach a diagnostic channel"]
pub struct ErrorEvent {
    code: i32,
    message: Cow<'static, str>,
    source: SourceLocation,
}

impl ErrorEvent {
    /// Creates an event from the raw code, message, and source location the
    /// host runtime reported.
    #[must_use = "constructed events must be handled to reach a diagnostic channel"]
    pub fn new<M: Into<Cow<'static, str>>>(code: i32, message: M, source: SourceLocation) -> Self {
        Self {
            code,
            message: message.into(),
            source,
        }
    }

    /// Returns the raw runtime error code.
    #[inline]
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Returns the error message text.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location the runtime attributed the error to.
    #[inline]
    #[must_use]
    pub const fn source(&self) -> &SourceLocation {
        &self.source
    }

    /// Classifies the event's code into a severity bucket.
    ///
    /// Convenience for [`Severity::from_code`] on [`code`](Self::code).
    #[inline]
    #[must_use]
    pub const fn severity(&self) -> Severity {
        Severity::from_code(self.code)
    }
}
