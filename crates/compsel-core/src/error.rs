//! Error types for selector parsing.
//!
//! Every failure carries the full selector text. Positions are character
//! offsets into that text, not byte offsets.

use std::fmt;

use thiserror::Error;

use crate::diagnostic::{Diagnostic, DiagnosticCode, SourceSpan};
use crate::predicate::Operator;

/// The parser stage active when an error was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseStage {
    /// Reading a `'…'` or `"…"` string.
    QuotedString,
    /// Reading a `/source/flags` literal.
    RegularExpression,
    /// Reading a segment of an attribute path.
    PropertyPath,
    /// Reading a comparison operator.
    Operator,
    /// Reading an attribute value or its closing bracket.
    AttributeValue,
}

impl fmt::Display for ParseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuotedString => f.write_str("parsing quoted string"),
            Self::RegularExpression => f.write_str("parsing regular expression"),
            Self::PropertyPath => f.write_str("parsing property path"),
            Self::Operator => f.write_str("parsing operator"),
            Self::AttributeValue => f.write_str("parsing attribute value"),
        }
    }
}

/// Whether an error concerns a malformed token or an illegal combination of
/// well-formed tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// A malformed or unexpected token.
    Lexical,
    /// Well-formed tokens that violate a cross-field rule.
    Semantic,
}

fn during(stage: Option<ParseStage>) -> String {
    stage.map_or_else(String::new, |stage| format!(" during {stage}"))
}

/// Errors returned when a selector cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SelectorError {
    /// The selector ended before the construct being read was complete.
    #[error("unexpected end of selector `{selector}`{}", during(*stage))]
    UnexpectedEnd {
        /// The full selector text.
        selector: String,
        /// Character offset of the end of input.
        position: usize,
        /// Stage active when the input ran out.
        stage: Option<ParseStage>,
    },

    /// A character that cannot start or continue the current construct.
    #[error(
        "error while parsing selector `{selector}` - unexpected symbol \"{symbol}\" at position {position}{}",
        during(*stage)
    )]
    UnexpectedSymbol {
        /// The full selector text.
        selector: String,
        /// The offending character.
        symbol: char,
        /// Character offset of the offending character.
        position: usize,
        /// Stage active when the character was read, if any.
        stage: Option<ParseStage>,
    },

    /// A regular-expression literal was well delimited but failed to compile.
    #[error("error while parsing selector `{selector}`: {message}")]
    InvalidRegex {
        /// The full selector text.
        selector: String,
        /// Character offset of the opening `/`.
        position: usize,
        /// The regex engine's complaint.
        message: String,
    },

    /// A regular expression was used with an operator other than `=`.
    #[error(
        "error while parsing selector `{selector}` - cannot use {operator} in attribute with regular expression"
    )]
    RegexOperator {
        /// The full selector text.
        selector: String,
        /// Character offset of the opening `/`.
        position: usize,
        /// The operator that preceded the literal.
        operator: Operator,
    },

    /// A string operator was paired with a number or boolean.
    #[error(
        "error while parsing selector `{selector}` - cannot use {operator} in attribute with non-string matching value - {value}"
    )]
    NonStringOperand {
        /// The full selector text.
        selector: String,
        /// Character offset of the value.
        position: usize,
        /// The operator.
        operator: Operator,
        /// The rejected value as written back.
        value: String,
    },

    /// Neither a component name nor any predicate was given.
    #[error("error while parsing selector `{selector}` - selector cannot be empty")]
    EmptySelector {
        /// The full selector text.
        selector: String,
    },
}

impl SelectorError {
    /// Creates an unexpected-end error.
    #[must_use]
    pub fn unexpected_end(selector: &str, position: usize, stage: Option<ParseStage>) -> Self {
        Self::UnexpectedEnd {
            selector: selector.to_owned(),
            position,
            stage,
        }
    }

    /// Creates an unexpected-symbol error.
    #[must_use]
    pub fn unexpected_symbol(
        selector: &str,
        symbol: char,
        position: usize,
        stage: Option<ParseStage>,
    ) -> Self {
        Self::UnexpectedSymbol {
            selector: selector.to_owned(),
            symbol,
            position,
            stage,
        }
    }

    /// Creates an invalid-regex error.
    #[must_use]
    pub fn invalid_regex(selector: &str, position: usize, message: impl Into<String>) -> Self {
        Self::InvalidRegex {
            selector: selector.to_owned(),
            position,
            message: message.into(),
        }
    }

    /// Creates an error for a regular expression used with `operator`.
    #[must_use]
    pub fn regex_operator(selector: &str, position: usize, operator: Operator) -> Self {
        Self::RegexOperator {
            selector: selector.to_owned(),
            position,
            operator,
        }
    }

    /// Creates an error for a non-string value used with `operator`.
    #[must_use]
    pub fn non_string_operand(
        selector: &str,
        position: usize,
        operator: Operator,
        value: impl Into<String>,
    ) -> Self {
        Self::NonStringOperand {
            selector: selector.to_owned(),
            position,
            operator,
            value: value.into(),
        }
    }

    /// Creates an empty-selector error.
    #[must_use]
    pub fn empty_selector(selector: &str) -> Self {
        Self::EmptySelector {
            selector: selector.to_owned(),
        }
    }

    /// Returns the selector text that failed to parse.
    #[must_use]
    pub fn selector(&self) -> &str {
        match self {
            Self::UnexpectedEnd { selector, .. }
            | Self::UnexpectedSymbol { selector, .. }
            | Self::InvalidRegex { selector, .. }
            | Self::RegexOperator { selector, .. }
            | Self::NonStringOperand { selector, .. }
            | Self::EmptySelector { selector } => selector,
        }
    }

    /// Returns the character offset of the failure, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedEnd { position, .. }
            | Self::UnexpectedSymbol { position, .. }
            | Self::InvalidRegex { position, .. }
            | Self::RegexOperator { position, .. }
            | Self::NonStringOperand { position, .. } => Some(*position),
            Self::EmptySelector { .. } => None,
        }
    }

    /// Returns the offending character, or `None` for end of input and for
    /// errors that are not tied to one character.
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::UnexpectedSymbol { symbol, .. } => Some(*symbol),
            _ => None,
        }
    }

    /// Returns the parser stage label, if one was recorded.
    #[must_use]
    pub const fn stage(&self) -> Option<ParseStage> {
        match self {
            Self::UnexpectedEnd { stage, .. } | Self::UnexpectedSymbol { stage, .. } => *stage,
            Self::InvalidRegex { .. } => Some(ParseStage::RegularExpression),
            Self::RegexOperator { .. } | Self::NonStringOperand { .. } => {
                Some(ParseStage::AttributeValue)
            }
            Self::EmptySelector { .. } => None,
        }
    }

    /// Returns whether this is a lexical or a semantic error.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::RegexOperator { .. } | Self::NonStringOperand { .. } => ErrorClass::Semantic,
            _ => ErrorClass::Lexical,
        }
    }

    /// Returns the stable diagnostic code for this error.
    #[must_use]
    pub const fn code(&self) -> DiagnosticCode {
        match self {
            Self::UnexpectedEnd { .. } => DiagnosticCode::ESelectorUnexpectedEnd,
            Self::UnexpectedSymbol { .. } => DiagnosticCode::ESelectorUnexpectedSymbol,
            Self::InvalidRegex { .. } => DiagnosticCode::ESelectorInvalidRegex,
            Self::RegexOperator { .. } => DiagnosticCode::ESelectorRegexOperator,
            Self::NonStringOperand { .. } => DiagnosticCode::ESelectorNonStringOperand,
            Self::EmptySelector { .. } => DiagnosticCode::ESelectorEmpty,
        }
    }

    /// Converts the error into a structured diagnostic.
    ///
    /// The span covers the offending character; at end of input it is empty.
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let span = self.position().map(|start| {
            let width = usize::from(self.symbol().is_some());
            SourceSpan::new(start, start + width)
        });
        let notes = self
            .stage()
            .map(|stage| vec![format!("while {stage}")])
            .unwrap_or_default();
        Diagnostic::new(self.code(), self.to_string(), span, notes)
    }
}
