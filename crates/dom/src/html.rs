//! HTML serialisation of an [`InMemoryDocument`], for demos and debugging.

use crate::document::{InMemoryDocument, NodeId};

const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// Serialises the document body as indented HTML.
pub fn to_html(doc: &InMemoryDocument) -> String {
    let mut out = String::new();
    write_element(doc, doc.body(), 0, &mut out);
    out
}

fn write_element(doc: &InMemoryDocument, node: NodeId, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let tag = doc.tag(node);

    out.push_str(&indent);
    out.push('<');
    out.push_str(tag);
    for (name, value) in doc.attributes(node) {
        out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
    }
    let style: Vec<String> = doc
        .styles(node)
        .map(|(property, value)| format!("{}: {}", property, value))
        .collect();
    if !style.is_empty() {
        out.push_str(&format!(" style=\"{}\"", escape(&style.join("; "))));
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&tag) {
        out.push('\n');
        return;
    }

    let children = doc.children(node);
    if children.is_empty() {
        out.push_str(&escape(doc.own_text(node)));
    } else {
        out.push('\n');
        if !doc.own_text(node).is_empty() {
            out.push_str(&format!("{}  {}\n", indent, escape(doc.own_text(node))));
        }
        for child in children {
            write_element(doc, *child, depth + 1, out);
        }
        out.push_str(&indent);
    }
    out.push_str(&format!("</{}>\n", tag));
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
