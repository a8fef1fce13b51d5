use std::fmt;
use std::str::FromStr;

use crate::codes;

/// Severity bucket assigned to an intercepted runtime error.
///
/// Buckets are purely a presentation classification: they select the label
/// and styling of rendered diagnostics and never participate in control flow
/// beyond that. A bucket is derived once from the raw runtime code via
/// [`Severity::from_code`] and never mutated afterwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Fatal error classes: runtime, parse, core, compile, and user errors.
    Fatal,
    /// Warning classes: runtime, core, compile, and user warnings.
    Warning,
    /// Notice classes: runtime and user notices.
    Notice,
    /// Any code outside the three known sets.
    Unknown,
}

impl Severity {
    /// Classifies a raw runtime error code into a severity bucket.
    ///
    /// The mapping is the single source of truth for severity semantics used
    /// by both rendering paths. It is total over all integers: codes outside
    /// the three known sets classify as [`Severity::Unknown`] rather than
    /// failing. The fatal arm is matched first, so a code that could ever
    /// belong to two sets resolves to the more severe bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use webdiag_core::{Severity, codes};
    ///
    /// assert_eq!(Severity::from_code(codes::PARSE), Severity::Fatal);
    /// assert_eq!(Severity::from_code(codes::USER_WARNING), Severity::Warning);
    /// assert_eq!(Severity::from_code(codes::NOTICE), Severity::Notice);
    /// assert_eq!(Severity::from_code(0), Severity::Unknown);
    /// ```
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            codes::ERROR
            | codes::PARSE
            | codes::CORE_ERROR
            | codes::COMPILE_ERROR
            | codes::USER_ERROR => Self::Fatal,
            codes::WARNING
            | codes::CORE_WARNING
            | codes::COMPILE_WARNING
            | codes::USER_WARNING => Self::Warning,
            codes::NOTICE | codes::USER_NOTICE => Self::Notice,
            _ => Self::Unknown,
        }
    }

    /// Returns the lowercase name of the bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use webdiag_core::Severity;
    ///
    /// assert_eq!(Severity::Fatal.as_str(), "fatal");
    /// assert_eq!(Severity::Unknown.as_str(), "unknown");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Unknown => "unknown",
        }
    }

    /// Returns the label line rendered at the start of an inline block.
    ///
    /// The strings match the host runtime's conventional wording, so the
    /// inline renderer can emit them verbatim without re-deriving severity
    /// semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// use webdiag_core::Severity;
    ///
    /// assert_eq!(Severity::Fatal.label(), "Error:");
    /// assert_eq!(Severity::Unknown.label(), "Unknown error type:");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fatal => "Error:",
            Self::Warning => "Warning:",
            Self::Notice => "Notice:",
            Self::Unknown => "Unknown error type:",
        }
    }

    /// Returns the CSS class applied to the inline container for this bucket.
    ///
    /// [`Severity::Unknown`] maps to the empty class: exotic codes render
    /// unstyled rather than borrowing another bucket's presentation. The
    /// class and [`label`](Self::label) always pair through this one table.
    ///
    /// # Examples
    ///
    /// ```
    /// use webdiag_core::Severity;
    ///
    /// assert_eq!(Severity::Fatal.css_class(), "error");
    /// assert_eq!(Severity::Unknown.css_class(), "");
    /// ```
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Fatal => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Unknown => "",
        }
    }

    /// Reports whether this bucket represents a fatal error class.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, Self::Fatal)
    }

    /// Reports whether this bucket represents a warning class.
    #[must_use]
    pub const fn is_warning(self) -> bool {
        matches!(self, Self::Warning)
    }

    /// Reports whether this bucket represents a notice class.
    #[must_use]
    pub const fn is_notice(self) -> bool {
        matches!(self, Self::Notice)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSeverityError {
    _private: (),
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised diagnostic severity")
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "fatal" => Ok(Self::Fatal),
            "warning" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseSeverityError { _private: () }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FATAL_CODES: [i32; 5] = [
        codes::ERROR,
        codes::PARSE,
        codes::CORE_ERROR,
        codes::COMPILE_ERROR,
        codes::USER_ERROR,
    ];
    const WARNING_CODES: [i32; 4] = [
        codes::WARNING,
        codes::CORE_WARNING,
        codes::COMPILE_WARNING,
        codes::USER_WARNING,
    ];
    const NOTICE_CODES: [i32; 2] = [codes::NOTICE, codes::USER_NOTICE];

    #[test]
    fn fatal_codes_classify_as_fatal() {
        for code in FATAL_CODES {
            assert_eq!(Severity::from_code(code), Severity::Fatal, "code {code}");
        }
    }

    #[test]
    fn warning_codes_classify_as_warning() {
        for code in WARNING_CODES {
            assert_eq!(Severity::from_code(code), Severity::Warning, "code {code}");
        }
    }

    #[test]
    fn notice_codes_classify_as_notice() {
        for code in NOTICE_CODES {
            assert_eq!(Severity::from_code(code), Severity::Notice, "code {code}");
        }
    }

    #[test]
    fn other_codes_classify_as_unknown() {
        for code in [0, -1, 3, 5, 6, 7, 2048, 1 << 20, i32::MAX, i32::MIN] {
            assert_eq!(Severity::from_code(code), Severity::Unknown, "code {code}");
        }
    }

    #[test]
    fn classification_is_a_disjoint_partition() {
        let known: Vec<i32> = FATAL_CODES
            .iter()
            .chain(&WARNING_CODES)
            .chain(&NOTICE_CODES)
            .copied()
            .collect();
        let mut sorted = known.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), known.len());
    }

    #[test]
    fn labels_pair_with_classes() {
        assert_eq!(Severity::Fatal.label(), "Error:");
        assert_eq!(Severity::Fatal.css_class(), "error");
        assert_eq!(Severity::Warning.label(), "Warning:");
        assert_eq!(Severity::Warning.css_class(), "warning");
        assert_eq!(Severity::Notice.label(), "Notice:");
        assert_eq!(Severity::Notice.css_class(), "notice");
        assert_eq!(Severity::Unknown.label(), "Unknown error type:");
        assert_eq!(Severity::Unknown.css_class(), "");
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Severity::Fatal.to_string(), "fatal");
        assert_eq!(Severity::Unknown.to_string(), "unknown");
    }

    #[test]
    fn from_str_round_trips() {
        for severity in [
            Severity::Fatal,
            Severity::Warning,
            Severity::Notice,
            Severity::Unknown,
        ] {
            assert_eq!(severity.as_str().parse::<Severity>(), Ok(severity));
        }
        assert!("critical".parse::<Severity>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn severity_serde_round_trip() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        let decoded: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, Severity::Warning);
    }
}
