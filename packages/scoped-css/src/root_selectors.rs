//! Root selector inference
//!
//! Works out which selectors name the component's own outermost node(s), so
//! the scoper can also target the root itself rather than only its
//! descendants.

use std::fmt;

use smallvec::SmallVec;

use crate::node::Node;

/// An identity of a root node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RootSelector {
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
    /// Bare tag name, used only when the root has neither id nor class.
    Tag(String),
}

/// Unordered, duplicate-tolerant set of root selectors.
pub type RootSelectors = SmallVec<[RootSelector; 4]>;

impl fmt::Display for RootSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootSelector::Id(id) => write!(f, "#{}", id),
            RootSelector::Class(class) => write!(f, ".{}", class),
            RootSelector::Tag(tag) => f.write_str(tag),
        }
    }
}

impl RootSelector {
    /// Parse the textual form back: `#x` is an id, `.x` a class, anything
    /// else a tag.
    pub fn parse(text: &str) -> Option<RootSelector> {
        let text = text.trim();
        if let Some(id) = text.strip_prefix('#') {
            (!id.is_empty()).then(|| RootSelector::Id(id.to_string()))
        } else if let Some(class) = text.strip_prefix('.') {
            (!class.is_empty()).then(|| RootSelector::Class(class.to_string()))
        } else if text.is_empty() {
            None
        } else {
            Some(RootSelector::Tag(text.to_string()))
        }
    }
}

/// Collect the root selectors of a rendered tree.
///
/// Fragments have no identity of their own, so each of their children is a
/// root. Text contributes nothing. Composite component references fall back
/// to nothing when they carry no id or class.
pub fn resolve_root_selectors(node: &Node) -> RootSelectors {
    let mut selectors = RootSelectors::new();
    collect(node, &mut selectors);
    selectors
}

fn collect(node: &Node, selectors: &mut RootSelectors) {
    let element = match node {
        Node::Fragment { children } => {
            for child in children {
                collect(child, selectors);
            }
            return;
        }
        Node::Text { .. } => return,
        Node::Element(element) => element,
    };

    let before = selectors.len();

    if let Some(id) = element.props.id.as_deref().filter(|id| !id.is_empty()) {
        selectors.push(RootSelector::Id(id.to_string()));
    }

    if let Some(class_name) = &element.props.class_name {
        selectors.extend(
            class_name
                .split_whitespace()
                .map(|class| RootSelector::Class(class.to_string())),
        );
    }

    if selectors.len() == before && element.element_type.is_tag() {
        selectors.push(RootSelector::Tag(element.element_type.name().to_string()));
    }
}
