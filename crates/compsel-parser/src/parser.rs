//! Recursive-descent parser for component selectors.
//!
//! Grammar:
//!
//! ```text
//! selector      := identifier? predicate*
//! predicate     := '[' path ('.' path)* (']' | operator value modifier? ']')
//! path          := identifier | quoted-string
//! operator      := '=' | '*=' | '^=' | '$=' | '|=' | '~='
//! value         := regex-literal | quoted-string | unquoted-token
//! modifier      := 'i' | 'I' | 's' | 'S'
//! ```
//!
//! Whitespace may precede any token but never appears inside one. The scan
//! is a single left-to-right pass with one character of lookahead and stops
//! at the first error.

use compsel_core::{
    AttributePredicate, Comparison, EngineConfig, Operator, ParseStage, ParsedSelector,
    PredicateValue, SelectorError, SelectorRegex, is_regex_flag,
};

use crate::cursor::{Cursor, is_css_name_char};
use crate::number::parse_numeric_literal;

/// Parses selectors with a fixed unquoted-value mode.
///
/// # Example
///
/// ```
/// use compsel_parser::SelectorParser;
///
/// let parser = SelectorParser::new(false);
/// let selector = parser.parse("app-root[title*=\"ang\"]")?;
/// assert_eq!(selector.name(), "app-root");
/// assert_eq!(selector.attributes().len(), 1);
/// # Ok::<(), compsel_core::SelectorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectorParser {
    allow_unquoted_strings: bool,
}

impl SelectorParser {
    /// Creates a parser.
    ///
    /// When `allow_unquoted_strings` is `false`, unquoted values other than
    /// `true` and `false` must be numeric literals. When it is `true`, they
    /// are kept as strings.
    #[must_use]
    pub const fn new(allow_unquoted_strings: bool) -> Self {
        Self {
            allow_unquoted_strings,
        }
    }

    /// Creates a parser using the mode recorded in `config`.
    #[must_use]
    pub const fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.allow_unquoted_strings())
    }

    /// Returns whether unquoted values are kept as strings.
    #[must_use]
    pub const fn allow_unquoted_strings(&self) -> bool {
        self.allow_unquoted_strings
    }

    /// Parses `selector`.
    ///
    /// # Errors
    ///
    /// Returns a [`SelectorError`] describing the first malformed token or
    /// illegal operator/value pairing. No partial result is produced.
    pub fn parse(&self, selector: &str) -> Result<ParsedSelector, SelectorError> {
        Scan {
            cursor: Cursor::new(selector),
            allow_unquoted_strings: self.allow_unquoted_strings,
        }
        .selector()
    }
}

/// Parses `selector` in the given unquoted-value mode.
///
/// # Errors
///
/// See [`SelectorParser::parse`].
pub fn parse_selector(
    selector: &str,
    allow_unquoted_strings: bool,
) -> Result<ParsedSelector, SelectorError> {
    SelectorParser::new(allow_unquoted_strings).parse(selector)
}

/// State of one parse call.
struct Scan<'a> {
    cursor: Cursor<'a>,
    allow_unquoted_strings: bool,
}

impl Scan<'_> {
    fn selector(mut self) -> Result<ParsedSelector, SelectorError> {
        let name = self.identifier();
        let mut attributes = Vec::new();
        self.cursor.skip_whitespace();
        while self.cursor.peek_is('[') {
            attributes.push(self.attribute()?);
            self.cursor.skip_whitespace();
        }

        if self.cursor.peek().is_some() {
            return Err(self.cursor.unexpected(None));
        }
        if name.is_empty() && attributes.is_empty() {
            return Err(SelectorError::empty_selector(self.cursor.selector()));
        }
        Ok(ParsedSelector::new(name, attributes))
    }

    fn identifier(&mut self) -> String {
        self.cursor.skip_whitespace();
        self.cursor.eat_while(is_css_name_char)
    }

    /// Reads a quoted string and returns its contents with escapes removed.
    ///
    /// A backslash keeps the following character verbatim.
    fn quoted_string(&mut self) -> Result<String, SelectorError> {
        let Some(quote) = self.cursor.bump() else {
            return Err(self.cursor.unexpected(Some(ParseStage::QuotedString)));
        };
        let mut text = String::new();
        loop {
            match self.cursor.bump() {
                Some(c) if c == quote => return Ok(text),
                Some('\\') => match self.cursor.bump() {
                    Some(escaped) => text.push(escaped),
                    None => return Err(self.cursor.unexpected(Some(ParseStage::QuotedString))),
                },
                Some(c) => text.push(c),
                None => return Err(self.cursor.unexpected(Some(ParseStage::QuotedString))),
            }
        }
    }

    /// Reads a `/source/flags` literal.
    ///
    /// An unescaped `/` inside a `[...]` class does not end the literal.
    fn regular_expression(&mut self) -> Result<SelectorRegex, SelectorError> {
        let start = self.cursor.position();
        self.cursor.bump();

        let mut source = String::new();
        let mut in_class = false;
        loop {
            let Some(next) = self.cursor.bump() else {
                return Err(self.cursor.unexpected(Some(ParseStage::RegularExpression)));
            };
            match next {
                '\\' => {
                    source.push(next);
                    let Some(escaped) = self.cursor.bump() else {
                        return Err(self.cursor.unexpected(Some(ParseStage::RegularExpression)));
                    };
                    source.push(escaped);
                    continue;
                }
                '/' if !in_class => break,
                '[' if !in_class => in_class = true,
                ']' if in_class => in_class = false,
                _ => {}
            }
            source.push(next);
        }

        let flags = self.cursor.eat_while(is_regex_flag);
        SelectorRegex::new(&source, &flags)
            .map_err(|message| SelectorError::invalid_regex(self.cursor.selector(), start, message))
    }

    fn path_segment(&mut self) -> Result<String, SelectorError> {
        self.cursor.skip_whitespace();
        let segment = if matches!(self.cursor.peek(), Some('\'' | '"')) {
            self.quoted_string()?
        } else {
            self.identifier()
        };
        if segment.is_empty() {
            return Err(self.cursor.unexpected(Some(ParseStage::PropertyPath)));
        }
        Ok(segment)
    }

    fn operator(&mut self) -> Result<Operator, SelectorError> {
        self.cursor.skip_whitespace();
        let start = self.cursor.position();
        let Some(first) = self.cursor.bump() else {
            return Err(self.cursor.unexpected(Some(ParseStage::Operator)));
        };
        let operator = match first {
            '=' => return Ok(Operator::Equals),
            '*' => Operator::Contains,
            '^' => Operator::StartsWith,
            '$' => Operator::EndsWith,
            '|' => Operator::DashPrefix,
            '~' => Operator::TokenMatch,
            other => {
                return Err(self.cursor.unexpected_at(other, start, ParseStage::Operator));
            }
        };
        if self.cursor.peek_is('=') {
            self.cursor.bump();
            Ok(operator)
        } else {
            Err(self.cursor.unexpected(Some(ParseStage::Operator)))
        }
    }

    /// Reads an unquoted value: identifier characters plus `+` and `.`.
    ///
    /// An empty token is `0` in numeric mode and `""` in string mode.
    fn unquoted_value(&mut self) -> Result<PredicateValue, SelectorError> {
        let start = self.cursor.position();
        let token = self
            .cursor
            .eat_while(|c| is_css_name_char(c) || c == '+' || c == '.');
        let Some(first) = token.chars().next() else {
            return Ok(if self.allow_unquoted_strings {
                PredicateValue::String(token)
            } else {
                PredicateValue::Number(0.0)
            });
        };

        match token.as_str() {
            "true" => return Ok(PredicateValue::Boolean(true)),
            "false" => return Ok(PredicateValue::Boolean(false)),
            _ => {}
        }
        if self.allow_unquoted_strings {
            return Ok(PredicateValue::String(token));
        }
        parse_numeric_literal(&token)
            .map(PredicateValue::Number)
            .ok_or_else(|| {
                self.cursor
                    .unexpected_at(first, start, ParseStage::AttributeValue)
            })
    }

    fn attribute(&mut self) -> Result<AttributePredicate, SelectorError> {
        self.cursor.bump();

        let mut json_path = vec![self.path_segment()?];
        self.cursor.skip_whitespace();
        while self.cursor.peek_is('.') {
            self.cursor.bump();
            json_path.push(self.path_segment()?);
            self.cursor.skip_whitespace();
        }

        if self.cursor.peek_is(']') {
            self.cursor.bump();
            return self.predicate(json_path, Comparison::Truthy, true);
        }

        let operator = self.operator()?;
        self.cursor.skip_whitespace();
        let value_start = self.cursor.position();
        let mut case_sensitive = true;
        let value = match self.cursor.peek() {
            Some('/') if operator != Operator::Equals => {
                return Err(SelectorError::regex_operator(
                    self.cursor.selector(),
                    value_start,
                    operator,
                ));
            }
            Some('/') => PredicateValue::Regex(self.regular_expression()?),
            Some('\'' | '"') => {
                let text = self.quoted_string()?;
                self.cursor.skip_whitespace();
                match self.cursor.peek() {
                    Some('i' | 'I') => {
                        self.cursor.bump();
                        case_sensitive = false;
                    }
                    Some('s' | 'S') => {
                        self.cursor.bump();
                    }
                    _ => {}
                }
                PredicateValue::String(text)
            }
            _ => self.unquoted_value()?,
        };

        self.cursor.skip_whitespace();
        if !self.cursor.peek_is(']') {
            return Err(self.cursor.unexpected(Some(ParseStage::AttributeValue)));
        }
        self.cursor.bump();

        let comparison = Comparison::new(operator, value).map_err(|rejected| {
            SelectorError::non_string_operand(
                self.cursor.selector(),
                value_start,
                operator,
                rejected.to_string(),
            )
        })?;
        self.predicate(json_path, comparison, case_sensitive)
    }

    fn predicate(
        &self,
        json_path: Vec<String>,
        comparison: Comparison,
        case_sensitive: bool,
    ) -> Result<AttributePredicate, SelectorError> {
        AttributePredicate::new(json_path, comparison, case_sensitive)
            .ok_or_else(|| self.cursor.unexpected(Some(ParseStage::PropertyPath)))
    }
}
