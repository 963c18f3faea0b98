//! Character cursor over a selector.
//!
//! Positions are character offsets so error messages line up with what a
//! user sees, regardless of how many bytes a character takes.

use compsel_core::{ParseStage, SelectorError};

/// Returns whether `c` may appear in a CSS identifier.
///
/// Letters, digits, `_`, `-` and every non-ASCII code point qualify.
#[must_use]
pub(crate) const fn is_css_name_char(c: char) -> bool {
    !c.is_ascii() || c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// A single-pass cursor with one character of lookahead.
pub(crate) struct Cursor<'a> {
    selector: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(selector: &'a str) -> Self {
        Self {
            selector,
            chars: selector.chars().collect(),
            pos: 0,
        }
    }

    /// The full text being scanned.
    pub(crate) const fn selector(&self) -> &'a str {
        self.selector
    }

    /// Character offset of the next character.
    pub(crate) const fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub(crate) fn peek_is(&self, expected: char) -> bool {
        self.peek() == Some(expected)
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let next = self.peek()?;
        self.pos += 1;
        Some(next)
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Consumes characters while `accept` holds and returns them.
    pub(crate) fn eat_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut taken = String::new();
        while let Some(next) = self.peek().filter(|c| accept(*c)) {
            taken.push(next);
            self.pos += 1;
        }
        taken
    }

    /// Builds an error for the character under the cursor, or for end of
    /// input when nothing is left.
    pub(crate) fn unexpected(&self, stage: Option<ParseStage>) -> SelectorError {
        match self.peek() {
            Some(symbol) => {
                SelectorError::unexpected_symbol(self.selector, symbol, self.pos, stage)
            }
            None => SelectorError::unexpected_end(self.selector, self.pos, stage),
        }
    }

    /// Builds an error for `symbol` at an earlier `position`.
    pub(crate) fn unexpected_at(
        &self,
        symbol: char,
        position: usize,
        stage: ParseStage,
    ) -> SelectorError {
        SelectorError::unexpected_symbol(self.selector, symbol, position, Some(stage))
    }
}
