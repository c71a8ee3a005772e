use crate::Node;
use crate::dom_utils::attribute;

/// Indented one-line-per-node outline, capped at `cap` nodes. Used in test
/// failure messages and debug logs.
pub fn outline_from_dom(root: &Node, cap: usize) -> Vec<String> {
    fn walk(node: &Node, depth: usize, out: &mut Vec<String>, left: &mut usize) {
        if *left == 0 {
            return;
        }
        *left -= 1;
        let indent = "  ".repeat(depth);
        match node {
            Node::Document { id, .. } => out.push(format!("{indent}#document [{}]", id.0)),
            Node::Element { id, name, .. } => {
                let mut line = format!("{indent}<{name}");
                for key in ["id", "class", "href"] {
                    if let Some(value) = attribute(node, key) {
                        line.push_str(&format!(r#" {key}="{value}""#));
                    }
                }
                line.push_str(&format!("> [{}]", id.0));
                out.push(line);
            }
            Node::Text { id, text } => {
                let t = text.replace('\n', " ").trim().to_string();
                if !t.is_empty() {
                    let show = if t.chars().count() > 40 {
                        format!("{}…", t.chars().take(40).collect::<String>())
                    } else {
                        t
                    };
                    out.push(format!("{indent}\"{show}\" [{}]", id.0));
                }
            }
        }
        for c in node.children() {
            walk(c, depth + 1, out, left);
        }
    }
    let mut out = Vec::new();
    let mut left = cap;
    walk(root, 0, &mut out, &mut left);
    out
}
