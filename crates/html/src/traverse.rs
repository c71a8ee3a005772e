use std::collections::HashMap;

use crate::dom_utils::attribute;
use crate::{Id, Node};

pub fn assign_node_ids(root: &mut Node) {
    fn walk(node: &mut Node, next: &mut u32) {
        // only assign if currently unset
        if node.id() == Id::UNSET {
            node.set_id(Id(*next));
            *next = next.wrapping_add(1);
        }

        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next);
            }
        }
    }

    let mut next = 1;
    walk(root, &mut next);
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_node_by_id(c, id))
}

/// An owned document plus the lookup tables the DOM API would give a script:
/// parent links and `getElementById`.
#[derive(Debug)]
pub struct DomTree {
    root: Node,
    parents: HashMap<Id, Id>,
    by_element_id: HashMap<String, Id>,
    document_element: Option<Id>,
}

impl DomTree {
    pub fn new(mut root: Node) -> Self {
        assign_node_ids(&mut root);

        let mut parents = HashMap::new();
        let mut by_element_id = HashMap::new();
        index(&root, &mut parents, &mut by_element_id);

        let document_element = match &root {
            Node::Document { children, .. } => children
                .iter()
                .find(|c| matches!(c, Node::Element { .. }))
                .map(Node::id),
            Node::Element { id, .. } => Some(*id),
            _ => None,
        };

        log::trace!(
            target: "html.dom",
            "indexed {} nodes, {} element ids",
            parents.len() + 1,
            by_element_id.len()
        );

        Self {
            root,
            parents,
            by_element_id,
            document_element,
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The top-level element (`<html>` in a parsed page).
    pub fn document_element(&self) -> Option<Id> {
        self.document_element
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        find_node_by_id(&self.root, id)
    }

    pub fn parent(&self, id: Id) -> Option<Id> {
        self.parents.get(&id).copied()
    }

    /// First element in tree order whose `id` attribute equals `element_id`.
    pub fn element_by_id(&self, element_id: &str) -> Option<Id> {
        self.by_element_id.get(element_id).copied()
    }
}

fn index(node: &Node, parents: &mut HashMap<Id, Id>, by_element_id: &mut HashMap<String, Id>) {
    if let Some(element_id) = attribute(node, "id") {
        if !element_id.is_empty() {
            by_element_id
                .entry(element_id.to_string())
                .or_insert(node.id());
        }
    }
    for c in node.children() {
        parents.insert(c.id(), node.id());
        index(c, parents, by_element_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> DomTree {
        DomTree::new(Node::document(vec![Node::element(
            "html",
            &[],
            vec![Node::element(
                "body",
                &[],
                vec![
                    Node::element("div", &[("id", "intro"), ("class", "step")], vec![
                        Node::text("Hello"),
                    ]),
                    Node::element("div", &[("id", "intro")], vec![]),
                ],
            )],
        )]))
    }

    #[test]
    fn ids_are_assigned_in_tree_order() {
        let dom = deck();
        assert_eq!(dom.root().id(), Id(1));
        assert_eq!(dom.document_element(), Some(Id(2)));
        assert_eq!(dom.node(Id(5)).and_then(Node::element_name), None);
        assert!(matches!(dom.node(Id(5)), Some(Node::Text { .. })));
    }

    #[test]
    fn element_by_id_returns_first_match() {
        let dom = deck();
        assert_eq!(dom.element_by_id("intro"), Some(Id(4)));
        assert_eq!(dom.element_by_id("missing"), None);
        assert_eq!(dom.element_by_id(""), None);
    }

    #[test]
    fn parents_lead_to_the_root() {
        let dom = deck();
        let chain: Vec<Id> = std::iter::successors(Some(Id(5)), |id| dom.parent(*id)).collect();
        assert_eq!(chain, vec![Id(5), Id(4), Id(3), Id(2), Id(1)]);
        assert_eq!(dom.parent(Id(1)), None);
    }

    #[test]
    fn preassigned_ids_are_kept() {
        let mut root = Node::document(vec![Node::text("x")]);
        root.set_id(Id(40));
        assign_node_ids(&mut root);
        assert_eq!(root.id(), Id(40));
        assert_eq!(root.children()[0].id(), Id(1));
    }
}
