use input_core::DocumentTree;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget};

/// The live page DOM, seen through [`DocumentTree`].
#[derive(Clone, Debug)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Element an event originated from. Text node targets resolve to their
    /// parent element.
    pub fn element_for_target(target: EventTarget) -> Option<Element> {
        match target.dyn_into::<Element>() {
            Ok(element) => Some(element),
            Err(target) => target
                .dyn_into::<web_sys::Node>()
                .ok()
                .and_then(|node| node.parent_element()),
        }
    }
}

impl DocumentTree for WebDocument {
    type Node = Element;

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn is_root(&self, node: &Element) -> bool {
        self.document.document_element().as_ref() == Some(node)
    }

    fn is_element(&self, node: &Element, tag: &str) -> bool {
        node.tag_name().eq_ignore_ascii_case(tag)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}
