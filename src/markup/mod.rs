//! Owned HTML fragment tree.
//!
//! Rendered slide markup is parsed with the HTML5 tree-construction rules
//! (through `scraper`) and copied into a [`Fragment`], so that revealable
//! elements can be tagged and toggled by handle instead of by re-querying
//! serialized output. The serializer escapes text and attribute values, so a
//! browser parsing [`Fragment::to_html`] builds the same tree again.

mod parse;

pub use parse::parse;

/// Elements that never have children or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text content is serialized without escaping.
pub const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "plaintext", "script", "style", "xmp",
];

pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<Attr>,
    pub children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(a) => a.value = value.to_string(),
            None => self.attrs.push(Attr {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_ascii_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `node` as the last child of `parent`, or as a new root.
    pub fn append(&mut self, parent: Option<NodeId>, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        match parent.and_then(|p| self.element_mut(p)) {
            Some(el) => el.children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.nodes.get(id.0)? {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match self.nodes.get_mut(id.0)? {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Direct element children of `id` in document order. Text is skipped.
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.element(id)
            .map(|el| {
                el.children
                    .iter()
                    .copied()
                    .filter(|c| self.element(*c).is_some())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every node in document (pre-)order.
    pub fn descendants(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(el) = self.element(id) {
                stack.extend(el.children.iter().rev().copied());
            }
        }
        out
    }

    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants()
            .into_iter()
            .filter(|id| self.has_class(*id, class))
            .collect()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        let Some(el) = self.element_mut(id) else { return };
        if el.has_class(class) {
            return;
        }
        let value = match el.attr("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim()),
            _ => class.to_string(),
        };
        el.set_attr("class", &value);
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        let Some(el) = self.element_mut(id) else { return };
        if !el.has_class(class) {
            return;
        }
        let value = el
            .classes()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        el.set_attr("class", &value);
    }

    /// Move every current root under a new `tag` element carrying `class`.
    pub fn wrap(&mut self, tag: &str, class: &str) -> NodeId {
        let mut el = Element::new(tag);
        el.set_attr("class", class);
        el.children = std::mem::take(&mut self.roots);
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::Element(el));
        self.roots.push(id);
        id
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for id in &self.roots {
            self.write_node(*id, false, &mut out);
        }
        out
    }

    fn write_node(&self, id: NodeId, raw_text: bool, out: &mut String) {
        match self.node(id) {
            Node::Text(text) if raw_text => out.push_str(text),
            Node::Text(text) => escape_into(text, false, out),
            Node::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            Node::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                for attr in &el.attrs {
                    out.push(' ');
                    out.push_str(&attr.name);
                    out.push_str("=\"");
                    escape_into(&attr.value, true, out);
                    out.push('"');
                }
                out.push('>');
                if is_void(&el.tag) {
                    return;
                }
                let raw = RAW_TEXT_ELEMENTS.contains(&el.tag.as_str());
                for child in &el.children {
                    self.write_node(*child, raw, out);
                }
                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }
}

/// HTML serialization escaping: `&` and non-breaking spaces everywhere,
/// `"` in attribute values, `<` and `>` in text.
fn escape_into(text: &str, attr_mode: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' if attr_mode => out.push_str("&quot;"),
            '<' if !attr_mode => out.push_str("&lt;"),
            '>' if !attr_mode => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}
