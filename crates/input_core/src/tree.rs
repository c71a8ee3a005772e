//! Structural queries over the secondary document.
//!
//! Both click handlers delegate from the clicked node to an ancestor. The
//! walk is written once, in [`closest`], and parameterized by a predicate.

use html::{DomTree, Id, Node, dom_utils};

/// The slice of the DOM the forwarder needs: parent links, a root bound,
/// tag/attribute/class inspection, and id lookup.
pub trait DocumentTree {
    /// Cheap, cloneable node handle.
    type Node: Clone + PartialEq + std::fmt::Debug;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// True for the node that bounds every upward walk (the document element).
    fn is_root(&self, node: &Self::Node) -> bool;

    /// Tag comparison is ASCII case-insensitive (`A` and `a` both match `"a"`).
    fn is_element(&self, node: &Self::Node, tag: &str) -> bool;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
}

/// Nearest ancestor-or-self of `start` satisfying `pred`.
///
/// The root is tested like any other node, then the walk stops. A node with
/// no parent also ends the walk, so detached subtrees terminate.
pub fn closest<T, P>(tree: &T, start: &T::Node, mut pred: P) -> Option<T::Node>
where
    T: DocumentTree + ?Sized,
    P: FnMut(&T, &T::Node) -> bool,
{
    let mut current = start.clone();
    loop {
        if pred(tree, &current) {
            return Some(current);
        }
        if tree.is_root(&current) {
            return None;
        }
        current = tree.parent(&current)?;
    }
}

impl DocumentTree for DomTree {
    type Node = Id;

    fn parent(&self, node: &Id) -> Option<Id> {
        DomTree::parent(self, *node)
    }

    fn is_root(&self, node: &Id) -> bool {
        self.document_element() == Some(*node) || self.root().id() == *node
    }

    fn is_element(&self, node: &Id, tag: &str) -> bool {
        self.node(*node)
            .is_some_and(|n| dom_utils::is_element_named(n, tag))
    }

    fn attribute(&self, node: &Id, name: &str) -> Option<String> {
        self.node(*node)
            .and_then(|n| dom_utils::attribute(n, name))
            .map(str::to_string)
    }

    fn has_class(&self, node: &Id, class: &str) -> bool {
        self.node(*node)
            .is_some_and(|n: &Node| dom_utils::has_class(n, class))
    }

    fn element_by_id(&self, id: &str) -> Option<Id> {
        DomTree::element_by_id(self, id)
    }
}
