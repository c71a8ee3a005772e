//! Indented outline notation for test documents.
//!
//! ```text
//! html
//!   body
//!     div#s1.step.active
//!       a[href=#s2]@link
//!         "go"@label
//! ```
//!
//! Two spaces per level. An element line is `tag`, then any of `#id`,
//! `.class`, `[key=value]`, and an optional trailing `@label`. A line in
//! double quotes is a text node and may also carry `@label`. Elements with
//! an `#id` are labelled by it unless an explicit label is given.

use std::collections::BTreeMap;

use html::{DomTree, Id, Node};

pub struct ParsedOutline {
    pub dom: DomTree,
    pub labels: Labels,
}

/// Test-facing names for nodes of a parsed outline.
#[derive(Clone, Debug, Default)]
pub struct Labels(BTreeMap<String, Id>);

impl Labels {
    pub fn id(&self, label: &str) -> Id {
        *self
            .0
            .get(label)
            .unwrap_or_else(|| panic!("unknown node label '{label}'"))
    }

    /// Label for `id`, or `node<N>` when it has none.
    pub fn label_of(&self, id: Id) -> String {
        self.0
            .iter()
            .find(|(_, v)| **v == id)
            .map(|(k, _)| k.clone())
            .unwrap_or_else(|| format!("node{}", id.0))
    }
}

pub fn parse_outline(src: &str) -> Result<ParsedOutline, String> {
    // (depth, node) stack of open elements; index 0 is the document.
    let mut stack: Vec<(usize, Node)> = vec![(0, Node::document(Vec::new()))];
    let mut labels = BTreeMap::new();
    // Ids follow `assign_node_ids`: pre-order from 1, document first, which
    // is exactly line order.
    let mut next_id = 2u32;

    for (line_no, raw) in src.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let indent = raw.len() - raw.trim_start_matches(' ').len();
        if indent % 2 != 0 {
            return Err(format!("line {}: odd indentation", line_no + 1));
        }
        let depth = indent / 2 + 1;
        if depth > stack.len() {
            return Err(format!("line {}: indented past its parent", line_no + 1));
        }
        close_to(&mut stack, depth);

        let (node, label) = parse_line(raw.trim()).map_err(|e| format!("line {}: {e}", line_no + 1))?;
        if let Some(label) = label {
            if labels.insert(label.clone(), Id(next_id)).is_some() {
                return Err(format!("line {}: duplicate label '{label}'", line_no + 1));
            }
        }
        next_id += 1;
        stack.push((depth, node));
    }
    close_to(&mut stack, 1);

    let (_, root) = stack.pop().ok_or("empty stack")?;
    Ok(ParsedOutline {
        dom: DomTree::new(root),
        labels: Labels(labels),
    })
}

/// Pop every open node at `depth` or deeper into its parent.
fn close_to(stack: &mut Vec<(usize, Node)>, depth: usize) {
    while stack.len() > 1 && stack.last().is_some_and(|(d, _)| *d >= depth) {
        let Some((_, node)) = stack.pop() else {
            return;
        };
        if let Some((_, parent)) = stack.last_mut() {
            if let Some(children) = parent.children_mut() {
                children.push(node);
            }
        }
    }
}

fn split_label(line: &str) -> (&str, Option<String>) {
    match line.rfind('@') {
        Some(at) if !line[at..].contains(['"', ']']) => {
            (&line[..at], Some(line[at + 1..].to_string()))
        }
        _ => (line, None),
    }
}

fn parse_line(line: &str) -> Result<(Node, Option<String>), String> {
    let (body, label) = split_label(line);

    if let Some(rest) = body.strip_prefix('"') {
        let text = rest.strip_suffix('"').ok_or("unterminated text")?;
        return Ok((Node::text(text), label));
    }

    let name_end = body
        .find(['#', '.', '['])
        .unwrap_or(body.len());
    let name = &body[..name_end];
    if name.is_empty() {
        return Err("missing tag name".into());
    }

    let mut element_id = None;
    let mut classes = Vec::new();
    let mut attributes: Vec<(String, String)> = Vec::new();
    let mut rest = &body[name_end..];
    while !rest.is_empty() {
        let (marker, tail) = rest.split_at(1);
        match marker {
            "#" | "." => {
                let end = tail.find(['#', '.', '[']).unwrap_or(tail.len());
                let value = &tail[..end];
                if marker == "#" {
                    element_id = Some(value.to_string());
                } else {
                    classes.push(value);
                }
                rest = &tail[end..];
            }
            "[" => {
                let end = tail.find(']').ok_or("unterminated attribute")?;
                let (key, value) = tail[..end].split_once('=').unwrap_or((&tail[..end], ""));
                attributes.push((key.to_string(), value.to_string()));
                rest = &tail[end + 1..];
            }
            other => return Err(format!("unexpected '{other}'")),
        }
    }

    if let Some(id) = &element_id {
        attributes.push(("id".into(), id.clone()));
    }
    if !classes.is_empty() {
        attributes.push(("class".into(), classes.join(" ")));
    }
    let attrs: Vec<(&str, &str)> = attributes
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    Ok((Node::element(name, &attrs, Vec::new()), label.or(element_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use html::dom_utils::{attribute, has_class};

    #[test]
    fn parses_nesting_ids_and_labels() {
        let parsed = parse_outline(
            "html\n  body\n    div#s1.step.active\n      a[href=#s2]@link\n        \"go\"@text\n    div#s2.step\n",
        )
        .unwrap();
        assert_eq!(parsed.labels.id("s1"), Id(4));
        assert_eq!(parsed.labels.id("link"), Id(5));
        assert_eq!(parsed.labels.id("text"), Id(6));
        assert_eq!(parsed.labels.id("s2"), Id(7));
        assert_eq!(parsed.dom.parent(Id(7)), Some(Id(3)));

        let link = parsed.dom.node(parsed.labels.id("link")).unwrap();
        assert_eq!(attribute(link, "href"), Some("#s2"));
        let s1 = parsed.dom.node(parsed.labels.id("s1")).unwrap();
        assert!(has_class(s1, "active"));
        assert_eq!(parsed.labels.label_of(Id(3)), "node3");
    }

    #[test]
    fn rejects_bad_indentation() {
        assert!(parse_outline("html\n   body").is_err());
        assert!(parse_outline("html\n    body").is_err());
    }
}
