//! CSS Lexer
//!
//! A deliberately approximate stand-in for a CSS tokenizer: comments are
//! stripped, whitespace runs collapse to one space, and the text is cut on
//! brace boundaries.
//!
//! The split is single-level. Text is cut on every `}` into blocks, and each
//! block is cut on its first `{` into a selector part and a declaration part.
//! A declaration part may itself contain further `{` (an at-rule wrapping a
//! rule); [`Fragment::statements`] exposes every `{`-separated piece so that one
//! level of at-rule nesting is scoped. Deeper nesting is not parsed.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// One `}`-terminated block of CSS text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    /// Text before the first `{`, or `None` when the block has no `{` at all
    /// (e.g. the closing brace of an at-rule).
    pub selector_part: Option<String>,
    /// Everything after the first `{`, or the whole block when there is none.
    pub declaration_part: String,
}

impl Fragment {
    fn from_block(block: &str) -> Self {
        match block.split_once('{') {
            Some((selector, declarations)) => Fragment {
                selector_part: Some(selector.trim().to_string()),
                declaration_part: declarations.trim().to_string(),
            },
            None => Fragment {
                selector_part: None,
                declaration_part: block.trim().to_string(),
            },
        }
    }

    /// The `{`-separated statements of this fragment, in order. The last one
    /// is the innermost declaration body.
    pub fn statements(&self) -> Vec<&str> {
        let mut statements = Vec::new();
        if let Some(selector) = &self.selector_part {
            statements.push(selector.as_str());
        }
        statements.extend(self.declaration_part.split('{').map(str::trim));
        statements
    }
}

/// Remove `/* */` block comments and `//` line comments.
///
/// A `//` that reaches a `)` before any `(` sits inside a function such as
/// `url(http://...)` and is kept. Quoted strings are copied untouched.
pub fn strip_comments(css: &str) -> String {
    let mut result = String::with_capacity(css.len());
    let mut quote: Option<char> = None;
    let mut chars = css.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if let Some(q) = quote {
            result.push(ch);
            if ch == '\\' {
                if let Some((_, escaped)) = chars.next() {
                    result.push(escaped);
                }
            } else if ch == q {
                quote = None;
            }
            continue;
        }

        let rest = &css[i..];
        if rest.starts_with("/*") {
            // An unterminated block comment swallows the rest of the input.
            let end = rest[2..].find("*/").map(|e| i + 2 + e + 2).unwrap_or(css.len());
            skip_to(&mut chars, end);
            continue;
        }

        if rest.starts_with("//") && !closes_paren_first(&rest[2..]) {
            // Keep the newline so adjacent lines don't merge.
            let end = rest.find('\n').map(|e| i + e).unwrap_or(css.len());
            skip_to(&mut chars, end);
            continue;
        }

        if ch == '"' || ch == '\'' {
            quote = Some(ch);
        }
        result.push(ch);
    }

    result
}

fn closes_paren_first(text: &str) -> bool {
    text.find(['(', ')'])
        .map(|idx| text.as_bytes()[idx] == b')')
        .unwrap_or(false)
}

fn skip_to(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>, end: usize) {
    while let Some(&(j, _)) = chars.peek() {
        if j >= end {
            break;
        }
        chars.next();
    }
}

/// Strip comments and collapse every whitespace run to a single space.
pub fn normalize(css: &str) -> String {
    let stripped = strip_comments(css);
    WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

/// Split CSS text into fragments.
///
/// The text after the last `}` is kept only when it opens a block with a
/// non-empty body; anything else there (whitespace, stray text) is dropped.
pub fn fragments(css: &str) -> Vec<Fragment> {
    let normalized = normalize(css);
    let mut blocks: Vec<&str> = normalized.split('}').collect();
    let trailing = blocks.pop().unwrap_or_default();

    let mut result: Vec<Fragment> = blocks.into_iter().map(Fragment::from_block).collect();

    let trailing = Fragment::from_block(trailing);
    if trailing.selector_part.is_some() && !trailing.declaration_part.is_empty() {
        result.push(trailing);
    } else if !trailing.declaration_part.is_empty() {
        log::trace!(
            "discarding trailing CSS without a declaration part: {:?}",
            trailing.declaration_part
        );
    }

    result
}
