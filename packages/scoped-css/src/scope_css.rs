//! Scoped CSS assembly
//!
//! Drives lexer, classifier and selector scoper over a whole style text and
//! renders the result: each fragment becomes its statements joined with
//! ` {\n` and closed with `\n}`, fragments are separated by newlines.

use crate::classifier::{classify, Statement};
use crate::escape::escape_declaration_text;
use crate::lexer::{self, Fragment};
use crate::root_selectors::RootSelector;
use crate::selector_scoper::scope_selectors;

/// Rewrite `css_text` so that every selector is scoped with `scope`.
///
/// An empty `scope` leaves selectors as written; declaration bodies are still
/// escaped.
pub fn scope_css_text(css_text: &str, scope: &str, roots: &[RootSelector]) -> String {
    let fragments = lexer::fragments(css_text);
    log::trace!("scoping {} CSS fragments with {:?}", fragments.len(), scope);

    fragments
        .iter()
        .map(|fragment| scope_fragment(fragment, scope, roots))
        .collect::<Vec<_>>()
        .join("\n")
}

fn scope_fragment(fragment: &Fragment, scope: &str, roots: &[RootSelector]) -> String {
    let statements = fragment.statements();
    let last = statements.len().saturating_sub(1);

    let parts: Vec<String> = statements
        .iter()
        .enumerate()
        .map(|(i, statement)| match classify(statement, i == last) {
            Statement::Empty => String::new(),
            Statement::Declarations(body) => escape_declaration_text(body),
            Statement::AtRule(text) | Statement::KeyframeOffset(text) => text.to_string(),
            Statement::Selectors(text) if scope.is_empty() => text.to_string(),
            Statement::Selectors(text) => scope_selectors(scope, text, roots),
        })
        .collect();

    format!("{}\n}}", parts.join(" {\n"))
}
