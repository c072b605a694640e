//! Scope Cache Tests

use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use scoped_css::{
    Element, Node, Registry, ScopeConfig, ScopeToken, SequentialIdGenerator, StyleSheetList,
    StyleSheetRegistry,
};

const CARD_CSS: &str = ".card { color: red; } .title { font-weight: bold; }";

fn card() -> Node {
    Element::tag("div")
        .with_class("card")
        .with_child(Element::tag("h2").with_class("title"))
        .into()
}

fn registry() -> Registry<SequentialIdGenerator, StyleSheetList> {
    Registry::with_collaborators(
        SequentialIdGenerator::new("s").unwrap(),
        StyleSheetList::new(),
    )
}

/// Records every insertion, including repeated ones.
#[derive(Default)]
struct CountingSheets {
    inserts: Vec<(String, String)>,
}

impl StyleSheetRegistry for CountingSheets {
    fn insert(&mut self, css_text: &str, id: &str) {
        self.inserts.push((id.to_string(), css_text.to_string()));
    }
}

/// Panics on the first insertion, then behaves like a [`StyleSheetList`].
#[derive(Default)]
struct FlakySheets {
    failed: bool,
    sheets: StyleSheetList,
}

impl StyleSheetRegistry for FlakySheets {
    fn insert(&mut self, css_text: &str, id: &str) {
        if !self.failed {
            self.failed = true;
            panic!("document head unavailable");
        }
        self.sheets.insert(css_text, id);
    }
}

fn root_token(tree: &Node) -> String {
    let class_name = tree.class_name().expect("root has a class");
    class_name.rsplit(' ').next().unwrap().to_string()
}

#[test]
fn should_scope_css_and_annotate_the_tree() {
    let registry = registry();

    let scoped = registry.scope(CARD_CSS, &card());

    assert_eq!(scoped.class_name(), Some("card s0"));
    assert_eq!(scoped.children()[0].class_name(), Some("title s0"));

    let sheets = registry.style_sheets();
    let css = sheets.get("s0").unwrap();
    assert!(css.contains(".card.s0, .s0 .card {"), "{}", css);
    assert!(css.contains(".s0 .title {"), "{}", css);
    assert!(!css.contains(".title.s0"), "{}", css);
}

#[test]
fn should_reuse_the_token_for_equal_style_text() {
    let registry = Registry::with_collaborators(
        SequentialIdGenerator::new("s").unwrap(),
        CountingSheets::default(),
    );

    let first = registry.scope(CARD_CSS, &card());
    let second = registry.scope(&CARD_CSS.to_string(), &card());

    assert_eq!(root_token(&first), root_token(&second));
    assert_eq!(registry.style_sheets().inserts.len(), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn should_mint_distinct_tokens_for_distinct_style_text() {
    let registry = registry();

    let a = registry.scope(".a { color: red; }", &card());
    let b = registry.scope(".b { color: red; }", &card());

    assert_ne!(root_token(&a), root_token(&b));
    assert_eq!(registry.style_sheets().len(), 2);
}

#[test]
fn should_take_root_selectors_from_the_first_tree_only() {
    let registry = registry();
    let css = ".card { color: red; }";

    registry.scope(css, &card());
    let other: Node = Element::tag("span").with_class("other").into();
    let scoped = registry.scope(css, &other);

    assert_eq!(scoped.class_name(), Some("other s0"));
    assert_eq!(registry.style_sheets().len(), 1);
    assert!(registry.style_sheets().get("s0").unwrap().contains(".card.s0"));
}

#[test]
fn should_insert_once_across_a_hundred_invocations() {
    let registry = registry();

    let tokens: Vec<String> = (0..100)
        .map(|_| root_token(&registry.scope(CARD_CSS, &card())))
        .collect();

    assert!(tokens.iter().all(|token| token == "s0"));
    assert_eq!(registry.style_sheets().len(), 1);
}

#[test]
fn should_insert_once_under_concurrent_first_requests() {
    let registry = Registry::with_collaborators(
        SequentialIdGenerator::new("s").unwrap(),
        CountingSheets::default(),
    );

    let tokens: Vec<String> = (0..64)
        .into_par_iter()
        .map(|_| root_token(&registry.scope(CARD_CSS, &card())))
        .collect();

    assert!(tokens.iter().all(|token| token == &tokens[0]));
    assert_eq!(registry.style_sheets().inserts.len(), 1);
}

#[test]
fn should_expose_tokens_by_style_text() {
    let registry = registry();
    assert!(registry.is_empty());
    assert_eq!(registry.token_for(CARD_CSS), None);

    registry.scope(CARD_CSS, &card());

    assert_eq!(registry.token_for(CARD_CSS), Some(ScopeToken::new("s0")));
}

#[test]
fn should_bind_style_text_with_css() {
    let registry = registry();
    let styled = registry.css(CARD_CSS);

    let first = styled(&card());
    let second = styled(&Node::fragment([card(), card()]));

    assert_eq!(first.class_name(), Some("card s0"));
    for element in second.elements() {
        assert!(element.props.class_name.as_deref().unwrap().ends_with("s0"));
    }
    assert_eq!(registry.style_sheets().len(), 1);
}

#[test]
fn should_generate_class_safe_tokens_by_default() {
    let registry = Registry::new();

    let scoped = registry.scope(CARD_CSS, &card());
    let token = root_token(&scoped);

    assert!(token.starts_with('s'));
    assert_eq!(token.len(), 7);
    assert!(registry.style_sheets().get(&token).is_some());
}

#[test]
fn should_scope_fragment_roots() {
    let registry = registry();
    let tree = Node::fragment([
        Node::from(Element::tag("dt")),
        Node::from(Element::tag("dd")),
    ]);

    registry.scope("dt { font-weight: bold; } dd { margin: 0; }", &tree);

    let sheets = registry.style_sheets();
    let css = sheets.get("s0").unwrap();
    assert!(css.contains("dt.s0, .s0 dt {"), "{}", css);
    assert!(css.contains("dd.s0, .s0 dd {"), "{}", css);
}

#[test]
fn should_not_cache_a_token_whose_stylesheet_failed_to_insert() {
    let registry = Registry::with_collaborators(
        SequentialIdGenerator::new("s").unwrap(),
        FlakySheets::default(),
    );

    let failed = panic::catch_unwind(AssertUnwindSafe(|| registry.scope(CARD_CSS, &card())));
    assert!(failed.is_err());
    assert_eq!(registry.token_for(CARD_CSS), None);
    assert!(registry.is_empty());

    let scoped = registry.scope(CARD_CSS, &card());
    let token = root_token(&scoped);

    assert_eq!(registry.token_for(CARD_CSS).unwrap().as_str(), token);
    assert!(registry.style_sheets().sheets.get(&token).is_some());
}

#[test]
fn should_reject_an_invalid_config() {
    let config = ScopeConfig {
        token_prefix: String::new(),
        ..ScopeConfig::default()
    };
    assert!(Registry::from_config(&config).is_err());
    assert!(Registry::from_config(&ScopeConfig::default()).is_ok());
}
