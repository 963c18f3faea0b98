//! Diagnostic types for structured error reporting.
//!
//! Hosts that surface selector failures to users (test reporters, editors)
//! can convert a [`SelectorError`](crate::SelectorError) into a
//! [`Diagnostic`] carrying a stable [`DiagnosticCode`], the message, the
//! location within the selector and supplementary notes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable error codes for selector diagnostics.
///
/// # Example
///
/// ```
/// use compsel_core::DiagnosticCode;
///
/// let code = DiagnosticCode::ESelectorEmpty;
/// assert_eq!(format!("{code}"), "E_SELECTOR_EMPTY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DiagnosticCode {
    /// Input ended inside a construct.
    ESelectorUnexpectedEnd,
    /// A character that does not fit the grammar.
    ESelectorUnexpectedSymbol,
    /// A regular-expression literal failed to compile.
    ESelectorInvalidRegex,
    /// A regular expression paired with an operator other than `=`.
    ESelectorRegexOperator,
    /// A string operator paired with a number or boolean.
    ESelectorNonStringOperand,
    /// Neither a name nor a predicate.
    ESelectorEmpty,
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ESelectorUnexpectedEnd => f.write_str("E_SELECTOR_UNEXPECTED_END"),
            Self::ESelectorUnexpectedSymbol => f.write_str("E_SELECTOR_UNEXPECTED_SYMBOL"),
            Self::ESelectorInvalidRegex => f.write_str("E_SELECTOR_INVALID_REGEX"),
            Self::ESelectorRegexOperator => f.write_str("E_SELECTOR_REGEX_OPERATOR"),
            Self::ESelectorNonStringOperand => f.write_str("E_SELECTOR_NON_STRING_OPERAND"),
            Self::ESelectorEmpty => f.write_str("E_SELECTOR_EMPTY"),
        }
    }
}

/// A character range within a selector.
///
/// # Example
///
/// ```
/// use compsel_core::SourceSpan;
///
/// let span = SourceSpan::new(4, 5);
/// assert_eq!(span.start(), 4);
/// assert_eq!(span.end(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Start character offset (inclusive).
    start: usize,
    /// End character offset (exclusive).
    end: usize,
}

impl SourceSpan {
    /// Creates a new source span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the inclusive start offset.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the exclusive end offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }
}

/// A single diagnostic describing a rejected selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The stable error code.
    code: DiagnosticCode,
    /// A human-readable description of the problem.
    message: String,
    /// Where in the selector the problem was detected, if known.
    span: Option<SourceSpan>,
    /// Additional context.
    notes: Vec<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub const fn new(
        code: DiagnosticCode,
        message: String,
        span: Option<SourceSpan>,
        notes: Vec<String>,
    ) -> Self {
        Self {
            code,
            message,
            span,
            notes,
        }
    }

    /// Returns the diagnostic code.
    #[must_use]
    pub const fn code(&self) -> DiagnosticCode {
        self.code
    }

    /// Returns the diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source span, if available.
    #[must_use]
    pub const fn span(&self) -> Option<&SourceSpan> {
        self.span.as_ref()
    }

    /// Returns the supplementary notes.
    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}
