use serde::Serialize;

/// A node of the rendered page.
///
/// Attribute order is preserved so serialized output is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text {
        text: String,
    },
}

impl Node {
    pub fn element(tag: &str) -> Self {
        Node::Element {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    /// Sets an attribute, replacing an earlier value for the same name.
    /// No-op on text nodes.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            let value = value.into();
            match attrs.iter_mut().find(|(k, _)| k == name) {
                Some(slot) => slot.1 = value,
                None => attrs.push((name.to_string(), value)),
            }
        }
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn child(mut self, node: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    /// Shorthand for an element wrapping a single text node.
    pub fn with_text(tag: &str, text: impl Into<String>) -> Self {
        Node::element(tag).child(Node::text(text))
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag),
            Node::Text { .. } => None,
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            Node::Text { .. } => None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn child_nodes(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first, document-order search.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Node) -> bool) -> Vec<&'a Node> {
        let mut found = Vec::new();
        self.walk(pred, &mut found);
        found
    }

    fn walk<'a>(&'a self, pred: &dyn Fn(&Node) -> bool, found: &mut Vec<&'a Node>) {
        if pred(self) {
            found.push(self);
        }
        for child in self.child_nodes() {
            child.walk(pred, found);
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.find_all(&|n| n.get_attr("id") == Some(id))
            .into_iter()
            .next()
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Node> {
        self.find_all(&|n| n.has_class(class))
    }
}
