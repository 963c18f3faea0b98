//! Tests for selector errors and diagnostics.

use insta::assert_snapshot;
use rstest::rstest;

use crate::{
    Diagnostic, DiagnosticCode, ErrorClass, Operator, ParseStage, SelectorError, SourceSpan,
};

#[rstest]
#[case::unexpected_end(DiagnosticCode::ESelectorUnexpectedEnd, "E_SELECTOR_UNEXPECTED_END")]
#[case::unexpected_symbol(
    DiagnosticCode::ESelectorUnexpectedSymbol,
    "E_SELECTOR_UNEXPECTED_SYMBOL"
)]
#[case::invalid_regex(DiagnosticCode::ESelectorInvalidRegex, "E_SELECTOR_INVALID_REGEX")]
#[case::regex_operator(DiagnosticCode::ESelectorRegexOperator, "E_SELECTOR_REGEX_OPERATOR")]
#[case::non_string(
    DiagnosticCode::ESelectorNonStringOperand,
    "E_SELECTOR_NON_STRING_OPERAND"
)]
#[case::empty(DiagnosticCode::ESelectorEmpty, "E_SELECTOR_EMPTY")]
fn diagnostic_code_display(#[case] code: DiagnosticCode, #[case] expected: &str) {
    assert_eq!(format!("{code}"), expected);
}

#[test]
fn unexpected_symbol_message() {
    let err = SelectorError::unexpected_symbol("x[a!b]", '!', 3, Some(ParseStage::Operator));
    assert_snapshot!(
        err.to_string(),
        @r#"error while parsing selector `x[a!b]` - unexpected symbol "!" at position 3 during parsing operator"#
    );
}

#[test]
fn unexpected_end_message() {
    let err = SelectorError::unexpected_end("x['a", 4, Some(ParseStage::QuotedString));
    assert_snapshot!(
        err.to_string(),
        @"unexpected end of selector `x['a` during parsing quoted string"
    );
}

#[test]
fn trailing_content_message_has_no_stage() {
    let err = SelectorError::unexpected_symbol("x y", 'y', 2, None);
    assert_snapshot!(
        err.to_string(),
        @r#"error while parsing selector `x y` - unexpected symbol "y" at position 2"#
    );
}

#[test]
fn semantic_errors_are_classified() {
    let regex = SelectorError::regex_operator("x[a^=/re/]", 5, Operator::StartsWith);
    let operand = SelectorError::non_string_operand("x[a*=1]", 5, Operator::Contains, "1");
    assert_eq!(regex.class(), ErrorClass::Semantic);
    assert_eq!(operand.class(), ErrorClass::Semantic);
    assert_snapshot!(
        operand.to_string(),
        @"error while parsing selector `x[a*=1]` - cannot use *= in attribute with non-string matching value - 1"
    );
    assert_snapshot!(
        regex.to_string(),
        @"error while parsing selector `x[a^=/re/]` - cannot use ^= in attribute with regular expression"
    );
}

#[test]
fn lexical_errors_are_classified() {
    assert_eq!(SelectorError::empty_selector("").class(), ErrorClass::Lexical);
    assert_eq!(
        SelectorError::invalid_regex("x[a=/(/]", 4, "bad").class(),
        ErrorClass::Lexical
    );
}

#[test]
fn accessors_expose_error_location() {
    let err = SelectorError::unexpected_symbol("x[a!b]", '!', 3, Some(ParseStage::Operator));
    assert_eq!(err.selector(), "x[a!b]");
    assert_eq!(err.position(), Some(3));
    assert_eq!(err.symbol(), Some('!'));
    assert_eq!(err.stage(), Some(ParseStage::Operator));

    let empty = SelectorError::empty_selector("  ");
    assert_eq!(empty.position(), None);
    assert_eq!(empty.symbol(), None);
}

#[test]
fn to_diagnostic_covers_offending_character() {
    let err = SelectorError::unexpected_symbol("x[a!b]", '!', 3, Some(ParseStage::Operator));
    let diagnostic = err.to_diagnostic();
    assert_eq!(diagnostic.code(), DiagnosticCode::ESelectorUnexpectedSymbol);
    assert_eq!(diagnostic.span(), Some(&SourceSpan::new(3, 4)));
    assert_eq!(diagnostic.notes(), ["while parsing operator"]);
    assert_eq!(diagnostic.message(), err.to_string());
}

#[test]
fn to_diagnostic_at_end_of_input_is_empty_span() {
    let err = SelectorError::unexpected_end("x[a", 3, Some(ParseStage::Operator));
    let diagnostic = err.to_diagnostic();
    assert_eq!(diagnostic.span(), Some(&SourceSpan::new(3, 3)));
}

#[test]
fn diagnostic_serde_round_trip() {
    let diagnostic = SelectorError::empty_selector("").to_diagnostic();
    let json = serde_json::to_string(&diagnostic).expect("serialize");
    let restored: Diagnostic = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, diagnostic);
    assert!(restored.span().is_none());
    assert!(restored.to_string().starts_with("E_SELECTOR_EMPTY: "));
}
