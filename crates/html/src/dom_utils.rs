use crate::Node;

/// True if `node` is an element with the given tag name (ASCII case-insensitive).
pub fn is_element_named(node: &Node, tag: &str) -> bool {
    node.element_name()
        .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Value of attribute `key` on an element. Keys compare ASCII case-insensitively;
/// valueless attributes read as the empty string.
pub fn attribute<'a>(node: &'a Node, key: &str) -> Option<&'a str> {
    let Node::Element { attributes, .. } = node else {
        return None;
    };
    attributes
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.as_deref().unwrap_or(""))
}

/// Whitespace-separated tokens of the `class` attribute.
pub fn class_list(node: &Node) -> impl Iterator<Item = &str> {
    attribute(node, "class").unwrap_or("").split_ascii_whitespace()
}

/// Class tokens compare case-sensitively, like `Element.classList.contains`.
pub fn has_class(node: &Node, class: &str) -> bool {
    class_list(node).any(|c| c == class)
}
