//! Behaviour-driven tests for the `compsel` engine facade.

use std::str::FromStr;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use crate::{ComponentSnapshot, Engine, EngineConfig, SelectorError, SnapshotCollector};

// ---------------------------------------------------------------------------
// Typed wrappers for Gherkin step parameters
// ---------------------------------------------------------------------------

/// A quoted string value from a Gherkin feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').to_owned()))
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
    tree: Option<ComponentSnapshot>,
    engine: Option<Engine>,
    result: Option<Result<Vec<String>, SelectorError>>,
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

const SHOP_TREE: &str = r#"{
    "tag": "app-root",
    "id": "root",
    "component": {"title": "Shop", "cart": {"items": 2}},
    "children": [
        {"tag": "product-tile", "id": "p1", "component": {"name": "Red Shoe", "tags": "sale new"}},
        {"tag": "product-tile", "id": "p2", "component": {"name": "Blue Hat", "tags": "new"}},
        {"tag": "cart-badge", "id": "badge"}
    ]
}"#;

#[given("a shop component tree")]
fn given_shop_tree(world: &mut TestWorld) {
    world.tree = Some(ComponentSnapshot::from_json(SHOP_TREE).expect("valid snapshot"));
}

#[given("an engine with default configuration")]
fn given_default_engine(world: &mut TestWorld) {
    world.engine = Some(Engine::new(EngineConfig::default()));
}

#[given("an engine that keeps unquoted strings")]
fn given_string_engine(world: &mut TestWorld) {
    world.engine = Some(Engine::new(EngineConfig::new(true)));
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the tree is queried with {selector}")]
fn when_queried(world: &mut TestWorld, selector: QuotedString) {
    let engine = world.engine.as_ref().expect("engine should be set");
    let tree = world.tree.as_ref().expect("tree should be set");
    world.result = Some(engine.query_all(&SnapshotCollector, tree, selector.as_str()));
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the matched elements are {ids}")]
fn then_matched(world: &mut TestWorld, ids: QuotedString) {
    let result = world.result.as_ref().expect("query result should be set");
    let found = result.as_ref().expect("query should succeed");
    let expected: Vec<&str> = ids.as_str().split(',').collect();
    assert_eq!(found, &expected);
}

#[then("the query fails with code {code}")]
fn then_query_fails(world: &mut TestWorld, code: QuotedString) {
    let result = world.result.as_ref().expect("query result should be set");
    let err = result.as_ref().expect_err("query should fail");
    assert_eq!(err.code().to_string(), code.as_str());
}

// ---------------------------------------------------------------------------
// Scenario bindings
// ---------------------------------------------------------------------------

#[scenario(
    path = "tests/features/compsel_engine.feature",
    name = "Querying by component name"
)]
fn query_by_component_name(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/compsel_engine.feature",
    name = "Querying by a space-separated token"
)]
fn query_by_token(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/compsel_engine.feature",
    name = "Elements inherit the enclosing component state"
)]
fn elements_inherit_component_state(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/compsel_engine.feature",
    name = "Unquoted words need string mode"
)]
fn unquoted_words_need_string_mode(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/compsel_engine.feature",
    name = "A malformed selector aborts the query"
)]
fn malformed_selector_aborts_query(world: TestWorld) {
    let _ = world;
}
