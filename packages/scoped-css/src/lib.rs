//! Scoped CSS
//!
//! Per-instance style isolation: rewrites author CSS so its selectors only match
//! one component instance, and marks that instance's render tree to match.

#![deny(clippy::all)]

// Engine (leaves first)
pub mod classifier;
pub mod escape;
pub mod lexer;
pub mod root_selectors;
pub mod scope_css;
pub mod selector_scoper;

// Render trees
pub mod annotate;
pub mod node;

// Cache and collaborators
pub mod id_generator;
pub mod registry;
pub mod style_sheets;

pub mod config;
mod error;

// Re-exports
pub use annotate::{annotate, inject_props, styleable};
pub use config::ScopeConfig;
pub use error::{Error, Result};
pub use id_generator::{IdGenerator, NanoIdGenerator, ScopeToken, SequentialIdGenerator};
pub use node::{Element, ElementType, Node, Props};
pub use registry::Registry;
pub use root_selectors::{resolve_root_selectors, RootSelector, RootSelectors};
pub use scope_css::scope_css_text;
pub use selector_scoper::scope_selectors;
pub use style_sheets::{StyleSheet, StyleSheetList, StyleSheetRegistry};
