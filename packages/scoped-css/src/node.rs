//! Render tree
//!
//! The shape handed over by the rendering layer. Nodes are plain data: every
//! transformation in this crate clones into a new tree and leaves its input
//! untouched.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Node {
    Element(Element),
    /// Transparent group: its children render in place of it, with no
    /// wrapper element.
    Fragment {
        #[serde(default)]
        children: Vec<Node>,
    },
    Text { text: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    #[serde(default)]
    pub props: Props,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// What an element renders as.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementType {
    /// A plain tag such as `div`.
    Tag(String),
    /// A reference to another composite component.
    Component(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Props {
    #[serde(rename = "className", default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Every other prop, in source order.
    #[serde(flatten)]
    pub attributes: IndexMap<String, Value>,
}

impl ElementType {
    pub fn is_tag(&self) -> bool {
        matches!(self, ElementType::Tag(_))
    }

    pub fn name(&self) -> &str {
        match self {
            ElementType::Tag(name) | ElementType::Component(name) => name,
        }
    }
}

impl Element {
    pub fn new(element_type: ElementType) -> Self {
        Element {
            element_type,
            props: Props::default(),
            children: Vec::new(),
        }
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Self::new(ElementType::Tag(name.into()))
    }

    pub fn component(name: impl Into<String>) -> Self {
        Self::new(ElementType::Component(name.into()))
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.props.class_name = Some(class_name.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.props.id = Some(id.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn fragment<I, N>(children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        Node::Fragment {
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn class_name(&self) -> Option<&str> {
        self.as_element()?.props.class_name.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Fragment { children } => children,
            Node::Text { .. } => &[],
        }
    }

    /// Every element reachable from this node, depth first, looking through
    /// fragments.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_elements(self, &mut out);
        out
    }

    pub fn from_json(json: &str) -> Result<Node> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Node> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn collect_elements<'a>(node: &'a Node, out: &mut Vec<&'a Element>) {
    if let Node::Element(element) = node {
        out.push(element);
    }
    for child in node.children() {
        collect_elements(child, out);
    }
}
