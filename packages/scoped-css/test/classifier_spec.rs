//! Statement Classifier Tests

use scoped_css::classifier::{classify, Statement};

#[test]
fn should_classify_declaration_bodies() {
    assert_eq!(
        classify("color: red;", false),
        Statement::Declarations("color: red;")
    );
    assert_eq!(
        classify("color: red; margin: 0", false),
        Statement::Declarations("color: red; margin: 0")
    );
}

#[test]
fn should_allow_a_missing_semicolon_only_on_the_last_statement() {
    assert_eq!(
        classify("color: red", true),
        Statement::Declarations("color: red")
    );
    assert_eq!(classify("color: red", false), Statement::Selectors("color: red"));
}

#[test]
fn should_classify_at_rules() {
    assert_eq!(
        classify("@media (min-width: 100px)", false),
        Statement::AtRule("@media (min-width: 100px)")
    );
    assert_eq!(classify("  @font-face ", false), Statement::AtRule("@font-face"));
}

#[test]
fn should_classify_keyframe_offsets() {
    for offset in ["0%", "100%", "50.5%", "from", "to", "TO", "0%, 100%", "from, 50 %"] {
        assert_eq!(
            classify(offset, false),
            Statement::KeyframeOffset(offset),
            "{} should be a keyframe offset",
            offset
        );
    }
}

#[test]
fn should_not_mistake_selectors_for_keyframe_offsets() {
    for selector in ["150%", "from-top", ".to", "toast"] {
        assert_eq!(classify(selector, false), Statement::Selectors(selector));
    }
}

#[test]
fn should_classify_selector_lists() {
    assert_eq!(classify(".a, .b", false), Statement::Selectors(".a, .b"));
    assert_eq!(classify("a:hover", false), Statement::Selectors("a:hover"));
    assert_eq!(classify("ul > li", false), Statement::Selectors("ul > li"));
}

#[test]
fn should_classify_blank_statements_as_empty() {
    assert_eq!(classify("", true), Statement::Empty);
    assert_eq!(classify("   ", false), Statement::Empty);
}
