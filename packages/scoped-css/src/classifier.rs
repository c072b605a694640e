//! Statement classification
//!
//! Decides, for each `{`-separated statement of a fragment, whether it is a
//! declaration body (escaped, never scoped), an at-rule prelude or keyframe
//! offset (passed through), or a selector list (scoped).

use once_cell::sync::Lazy;
use regex::Regex;

/// `property: value;` somewhere in the statement.
static DECLARATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)[^:]*:.*;").unwrap());

/// The last declaration of a body may omit its semicolon.
static LAST_DECLARATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)[^:]*:.*(?:;|$)").unwrap());

static AT_RULE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@").unwrap());

static KEYFRAME_OFFSET_RE: Lazy<Regex> = Lazy::new(|| {
    let offset = r"(?:(?:100|[0-9]{1,2})(?:\.[0-9]+)?\s*%|from|to)";
    Regex::new(&format!(r"(?i)^{offset}(?:\s*,\s*{offset})*$")).unwrap()
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Statement<'a> {
    /// Nothing but whitespace.
    Empty,
    /// A declaration body such as `color: red; margin: 0`.
    Declarations(&'a str),
    /// An at-rule prelude such as `@media (min-width: 100px)`.
    AtRule(&'a str),
    /// A keyframe selector such as `0%`, `from` or `50%, 100%`.
    KeyframeOffset(&'a str),
    /// A selector list to be scoped.
    Selectors(&'a str),
}

/// Classify one trimmed statement. `is_last` marks the final statement of a
/// fragment, the only place a declaration body may lack its trailing `;`.
pub fn classify(statement: &str, is_last: bool) -> Statement<'_> {
    let statement = statement.trim();
    if statement.is_empty() {
        return Statement::Empty;
    }

    if DECLARATION_RE.is_match(statement)
        || (is_last && LAST_DECLARATION_RE.is_match(statement))
    {
        return Statement::Declarations(statement);
    }

    if AT_RULE_RE.is_match(statement) {
        return Statement::AtRule(statement);
    }

    if KEYFRAME_OFFSET_RE.is_match(statement) {
        return Statement::KeyframeOffset(statement);
    }

    Statement::Selectors(statement)
}
