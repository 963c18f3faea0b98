//! Behaviour-driven tests for the selector parser.

use std::str::FromStr;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use crate::SelectorParser;
use compsel_core::{AttributePredicate, ParsedSelector, SelectorError};

// ---------------------------------------------------------------------------
// Typed wrappers for Gherkin step parameters
// ---------------------------------------------------------------------------

/// A quoted string value from a Gherkin feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            s.strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
                .unwrap_or(s)
                .to_owned(),
        ))
    }
}

impl QuotedString {
    fn as_str(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TestWorld {
    parser: Option<SelectorParser>,
    result: Option<Result<ParsedSelector, SelectorError>>,
}

impl TestWorld {
    fn parsed(&self) -> &ParsedSelector {
        self.result
            .as_ref()
            .expect("parse result should be set")
            .as_ref()
            .expect("selector should parse")
    }

    fn predicate(&self, index: usize) -> &AttributePredicate {
        self.parsed()
            .attributes()
            .get(index)
            .expect("predicate index in range")
    }
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("numeric unquoted values")]
fn given_numeric_mode(world: &mut TestWorld) {
    world.parser = Some(SelectorParser::new(false));
}

#[given("string unquoted values")]
fn given_string_mode(world: &mut TestWorld) {
    world.parser = Some(SelectorParser::new(true));
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("selector {selector} is parsed")]
fn when_parsed(world: &mut TestWorld, selector: QuotedString) {
    let parser = world.parser.expect("parser should be set");
    world.result = Some(parser.parse(selector.as_str()));
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the component name is {name}")]
fn then_component_name(world: &mut TestWorld, name: QuotedString) {
    assert_eq!(world.parsed().name(), name.as_str());
}

#[then("there are {count} predicates")]
fn then_predicate_count(world: &mut TestWorld, count: usize) {
    assert_eq!(world.parsed().attributes().len(), count);
}

#[then("predicate {index} has path {path} and operator {operator}")]
fn then_predicate_path(
    world: &mut TestWorld,
    index: usize,
    path: QuotedString,
    operator: QuotedString,
) {
    let predicate = world.predicate(index);
    assert_eq!(predicate.name(), path.as_str());
    assert_eq!(predicate.operator().to_string(), operator.as_str());
}

#[then("predicate {index} has value {value}")]
fn then_predicate_value(world: &mut TestWorld, index: usize, value: QuotedString) {
    let rendered = world
        .predicate(index)
        .value()
        .map(|value| value.to_string());
    assert_eq!(rendered.as_deref(), Some(value.as_str()));
}

#[then("predicate {index} is case-insensitive")]
fn then_case_insensitive(world: &mut TestWorld, index: usize) {
    assert!(!world.predicate(index).case_sensitive());
}

#[then("parsing fails with code {code}")]
fn then_parsing_fails(world: &mut TestWorld, code: QuotedString) {
    let result = world.result.as_ref().expect("parse result should be set");
    let err = result.as_ref().expect_err("expected a parse failure");
    assert_eq!(err.code().to_string(), code.as_str());
}

// ---------------------------------------------------------------------------
// Scenario bindings
// ---------------------------------------------------------------------------

#[scenario(
    path = "tests/features/compsel_parser.feature",
    name = "A bare component name has no predicates"
)]
fn bare_component_name(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/compsel_parser.feature",
    name = "A dotted path with a numeric value"
)]
fn dotted_path_numeric_value(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/compsel_parser.feature",
    name = "A case-insensitive quoted value"
)]
fn case_insensitive_quoted_value(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/compsel_parser.feature",
    name = "String mode keeps unquoted words"
)]
fn string_mode_keeps_words(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/compsel_parser.feature",
    name = "Numeric mode rejects unquoted words"
)]
fn numeric_mode_rejects_words(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/compsel_parser.feature",
    name = "Regular expressions require equality"
)]
fn regex_requires_equality(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/compsel_parser.feature",
    name = "An empty selector is rejected"
)]
fn empty_selector_rejected(world: TestWorld) {
    let _ = world;
}
