//! Scoped CSS Test Utils

#![allow(dead_code)]

use regex::Regex;
use scoped_css::{scope_css_text, RootSelector};

pub fn scope(css: &str, scope: &str, roots: &[&str]) -> String {
    let roots: Vec<RootSelector> = roots.iter().filter_map(|r| RootSelector::parse(r)).collect();
    scope_css_text(css, scope, &roots)
}

pub fn extract_css_content(css: &str) -> String {
    let re1 = Regex::new(r"\s+").unwrap();
    let re2 = Regex::new(r":\s").unwrap();
    let re3 = Regex::new(r" }").unwrap();
    let re4 = Regex::new(r"\{\s+").unwrap();
    let re5 = Regex::new(r"\s+\}").unwrap();

    let mut result = re1.replace_all(css, " ").to_string();
    result = re2.replace_all(&result, ":").to_string();
    result = re3.replace_all(&result, "}").to_string();
    result = re4.replace_all(&result, "{").to_string();
    result = re5.replace_all(&result, "}").to_string();
    result.trim().to_string()
}

pub fn assert_equal_css(actual: &str, expected: &str) {
    let actual_css = extract_css_content(actual);
    let expected_css = extract_css_content(expected);
    assert_eq!(
        actual_css, expected_css,
        "Expected '{}' to equal '{}'",
        actual_css, expected_css
    );
}

pub fn assert_contains(actual: &str, expected: &str) {
    assert!(
        actual.contains(expected),
        "Expected '{}' to contain '{}'",
        actual,
        expected
    );
}

pub fn assert_not_contains(actual: &str, expected: &str) {
    assert!(
        !actual.contains(expected),
        "Expected '{}' to not contain '{}'",
        actual,
        expected
    );
}
