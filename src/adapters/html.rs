use crate::domain::node::Node;
use crate::domain::ports::PageSerializer;
use crate::utils::error::Result;

const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "meta", "link", "input"];

/// Writes the render tree as a standalone HTML document.
#[derive(Debug, Clone)]
pub struct HtmlSerializer {
    title: String,
}

impl HtmlSerializer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl PageSerializer for HtmlSerializer {
    fn serialize(&self, page: Option<&Node>) -> Result<String> {
        let mut out = String::with_capacity(16 * 1024);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        out.push_str("<title>");
        out.push_str(&escape_text(&self.title));
        out.push_str("</title>\n</head>\n<body>\n");
        if let Some(node) = page {
            write_node(node, &mut out);
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");
        Ok(out)
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }
}

/// Serializes a single node without the document wrapper.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => out.push_str(&escape_text(text)),
        Node::Element {
            tag,
            attrs,
            children,
        } => {
            out.push('<');
            out.push_str(tag);
            for (name, value) in attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&tag.as_str()) {
                return;
            }
            for child in children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
