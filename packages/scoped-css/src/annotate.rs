//! Tree annotation
//!
//! Produces copies of a render tree with the scope marker added to the class
//! list of every element, plus two root-only helpers used when wrapping a
//! component.

use crate::node::{Element, Node, Props};

/// Return a copy of `node` where every element's class list ends with
/// `token`. Fragments stay transparent: their children are annotated in place
/// and no wrapper element is introduced.
pub fn annotate(token: &str, node: &Node) -> Node {
    match node {
        Node::Fragment { children } => Node::Fragment {
            children: children.iter().map(|child| annotate(token, child)).collect(),
        },
        Node::Text { .. } => node.clone(),
        Node::Element(element) => Node::Element(Element {
            element_type: element.element_type.clone(),
            props: Props {
                class_name: join_class_names([element.props.class_name.as_deref(), Some(token)]),
                id: element.props.id.clone(),
                attributes: element.props.attributes.clone(),
            },
            children: element
                .children
                .iter()
                .map(|child| annotate(token, child))
                .collect(),
        }),
    }
}

/// Let a component's rendered root consume the class name its parent passed
/// in. Only the root is touched (each top-level child of a fragment root).
pub fn styleable(outer_class_name: Option<&str>, node: &Node) -> Node {
    match node {
        Node::Element(element) => {
            let mut root = element.clone();
            root.props.class_name =
                join_class_names([element.props.class_name.as_deref(), outer_class_name]);
            Node::Element(root)
        }
        Node::Fragment { children } => Node::Fragment {
            children: children
                .iter()
                .map(|child| styleable(outer_class_name, child))
                .collect(),
        },
        Node::Text { .. } => node.clone(),
    }
}

/// Overlay the props returned by `injection` onto a copy of the root element.
///
/// `injection` sees the root's current props. Set fields of the result win;
/// attributes are merged key by key. Non-element roots are returned as is.
pub fn inject_props<F>(node: &Node, injection: F) -> Node
where
    F: FnOnce(&Props) -> Props,
{
    let Node::Element(element) = node else {
        return node.clone();
    };

    let injected = injection(&element.props);
    let mut root = element.clone();
    if injected.class_name.is_some() {
        root.props.class_name = injected.class_name;
    }
    if injected.id.is_some() {
        root.props.id = injected.id;
    }
    root.props.attributes.extend(injected.attributes);
    Node::Element(root)
}

/// Space-join the non-empty class names, or `None` when nothing is left.
pub fn join_class_names<'a, I>(parts: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let joined = parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    (!joined.is_empty()).then_some(joined)
}
