//! Selector scoping
//!
//! Rewrites a comma-separated selector list so that it only matches elements
//! carrying the scope marker. Every selector gets the *contains* form
//! (`<scope> <selector>`). A selector that names the component's own root also
//! gets the *union* form, with the marker merged into the root's compound
//! selector, because the root is not a descendant of itself.

use std::borrow::Cow;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::root_selectors::RootSelector;

const HOST_SELECTOR: &str = ":host";

static TARGET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i):target").unwrap());

/// Scope every selector of `selector_list` with `scope`.
///
/// `scope` is usually a class selector such as `.s1Ab2x`. `roots` may be empty,
/// which disables the union form.
pub fn scope_selectors(scope: &str, selector_list: &str, roots: &[RootSelector]) -> String {
    let mut forms: Vec<String> = Vec::new();

    for selector in split_selector_group(selector_list) {
        let selector = selector.trim();
        if selector.is_empty() {
            continue;
        }

        if selector == HOST_SELECTOR {
            forms.push(scope.to_string());
            continue;
        }

        // The target element is picked by the URL, not by the component.
        if TARGET_RE.is_match(selector) {
            forms.push(selector.to_string());
            continue;
        }

        if let Some(root) = roots.iter().find_map(|root| find_root(selector, root)) {
            forms.push(union_selector(scope, selector, root));
        }
        forms.push(format!("{} {}", scope, selector));
    }

    forms.join(", ")
}

/// Split a selector list on commas that are not inside `[...]`, `(...)` or a
/// quoted string.
pub fn split_selector_group(text: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut prev = 0;

    for (i, ch) in top_level_chars(text) {
        if ch == ',' {
            result.push(&text[prev..i]);
            prev = i + 1;
        }
    }

    result.push(&text[prev..]);
    result
}

/// Characters of `text` outside quotes, brackets and parentheses, with their
/// byte offsets. Escaped characters and the delimiters themselves are skipped.
fn top_level_chars(text: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut parens = 0usize;
    let mut brackets = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    text.char_indices().filter(move |&(_, ch)| {
        if escaped {
            escaped = false;
            return false;
        }
        if ch == '\\' {
            escaped = true;
            return false;
        }
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            return false;
        }

        match ch {
            '"' | '\'' => quote = Some(ch),
            '(' => parens += 1,
            ')' => parens = parens.saturating_sub(1),
            '[' => brackets += 1,
            ']' => brackets = brackets.saturating_sub(1),
            _ => return parens == 0 && brackets == 0,
        }
        false
    })
}

fn union_selector(scope: &str, selector: &str, root: Range<usize>) -> String {
    let marker = union_marker(scope);
    let mut union = String::with_capacity(selector.len() + marker.len());
    union.push_str(&selector[..root.end]);
    union.push_str(&marker);
    union.push_str(&selector[root.end..]);
    union
}

/// A bare identifier appended to a compound would extend its last name, so a
/// bare scope is attached as a class instead.
fn union_marker(scope: &str) -> Cow<'_, str> {
    match scope.chars().next() {
        Some(first) if is_ident_char(first) => Cow::Owned(format!(".{}", scope)),
        _ => Cow::Borrowed(scope),
    }
}

/// Byte range of the first occurrence of `root` in `selector` that stands on
/// its own: not followed by more identifier characters, not nested inside an
/// attribute selector, a functional pseudo-class or a string, and for tags, at
/// the start of a compound.
fn find_root(selector: &str, root: &RootSelector) -> Option<Range<usize>> {
    let needle = root.to_string();
    let is_tag = matches!(root, RootSelector::Tag(_));

    selector
        .match_indices(needle.as_str())
        .map(|(start, matched)| start..start + matched.len())
        .find(|range| {
            let after_ok = !matches!(
                selector[range.end..].chars().next(),
                Some(ch) if is_ident_char(ch)
            );
            let before_ok = !is_tag
                || !matches!(
                    selector[..range.start].chars().next_back(),
                    Some(ch) if !ch.is_whitespace() && !matches!(ch, '>' | '+' | '~')
                );
            after_ok && before_ok && is_top_level(selector, range.start)
        })
}

fn is_top_level(selector: &str, index: usize) -> bool {
    top_level_chars(selector)
        .take_while(|&(i, _)| i <= index)
        .any(|(i, _)| i == index)
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_' || ch == '\\' || !ch.is_ascii()
}
