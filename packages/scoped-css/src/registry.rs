//! Scope cache
//!
//! Maps each distinct style text to its scope token. The first request for a
//! style text resolves the tree's root selectors, scopes the CSS, mints a token
//! and inserts the stylesheet; every later request only annotates the tree.
//!
//! Lookup, computation, publication and insertion all happen under one lock,
//! so concurrent first requests for the same text yield a single token and a
//! single stylesheet.

use std::collections::HashMap;

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};

use crate::annotate::annotate;
use crate::config::ScopeConfig;
use crate::error::Result;
use crate::id_generator::{IdGenerator, NanoIdGenerator, ScopeToken};
use crate::node::Node;
use crate::root_selectors::resolve_root_selectors;
use crate::scope_css::scope_css_text;
use crate::style_sheets::{StyleSheetList, StyleSheetRegistry};

pub struct Registry<G = NanoIdGenerator, S = StyleSheetList> {
    inner: Mutex<Inner<G, S>>,
}

struct Inner<G, S> {
    tokens: HashMap<String, ScopeToken>,
    id_generator: G,
    style_sheets: S,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_collaborators(NanoIdGenerator::default(), StyleSheetList::new())
    }

    pub fn from_config(config: &ScopeConfig) -> Result<Self> {
        Ok(Self::with_collaborators(
            NanoIdGenerator::new(config)?,
            StyleSheetList::new(),
        ))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator, S: StyleSheetRegistry> Registry<G, S> {
    pub fn with_collaborators(id_generator: G, style_sheets: S) -> Self {
        Registry {
            inner: Mutex::new(Inner {
                tokens: HashMap::new(),
                id_generator,
                style_sheets,
            }),
        }
    }

    /// Scope `style_text` to `tree` and return the annotated copy of the tree.
    ///
    /// Root selectors are taken from the tree seen on the first request for a
    /// given style text; later trees only get annotated.
    pub fn scope(&self, style_text: &str, tree: &Node) -> Node {
        let token = self.token_or_insert(style_text, tree);
        annotate(token.as_str(), tree)
    }

    /// Curried form of [`Registry::scope`]: bind the style text once and apply
    /// the result to every render of the component.
    pub fn css<'a>(&'a self, style_text: &'a str) -> impl Fn(&Node) -> Node + 'a {
        move |tree| self.scope(style_text, tree)
    }

    /// The token already assigned to `style_text`, if any.
    pub fn token_for(&self, style_text: &str) -> Option<ScopeToken> {
        self.inner.lock().tokens.get(style_text).cloned()
    }

    /// Number of distinct style texts scoped so far.
    pub fn len(&self) -> usize {
        self.inner.lock().tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Access the stylesheet collaborator. Holds the registry lock while the
    /// guard lives.
    pub fn style_sheets(&self) -> MappedMutexGuard<'_, S> {
        MutexGuard::map(self.inner.lock(), |inner| &mut inner.style_sheets)
    }

    fn token_or_insert(&self, style_text: &str, tree: &Node) -> ScopeToken {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        if let Some(token) = inner.tokens.get(style_text) {
            log::trace!("reusing scope {} for cached style text", token);
            return token.clone();
        }

        let roots = resolve_root_selectors(tree);
        let token = inner.id_generator.next_id();
        let scoped_css = scope_css_text(style_text, &token.class_selector(), &roots);

        // Record only once the sheet is in; an unwinding insert leaves no token.
        inner.style_sheets.insert(&scoped_css, token.as_str());

        let previous = inner.tokens.insert(style_text.to_string(), token.clone());
        assert!(
            previous.is_none(),
            "scope cache corrupted: style text was scoped twice"
        );
        log::debug!(
            "scoped new style text as {} ({} root selectors)",
            token,
            roots.len()
        );

        token
    }
}
