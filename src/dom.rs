//! Render Tree
//!
//! Declarative description of the markup a view produces. Event handlers
//! are [`Action`] values rather than closures, which keeps trees plain data:
//! the browser app mounts them as real DOM nodes with listeners, the CLI
//! prints them, and tests inspect them.
//!
//! Every render replaces the previous tree wholesale; there is no diffing.

use crate::actions::Action;

/// Attribute prefix that marks an event handler (`onclick` -> `click`)
pub const EVENT_PREFIX: &str = "on";

/// A node in the render tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with attributes, listeners and ordered children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub listeners: Vec<Listener>,
    pub children: Vec<Node>,
}

/// Action triggered by an event on an element
#[derive(Debug, Clone, PartialEq)]
pub struct Listener {
    pub event: String,
    pub action: Action,
}

/// Value side of an attribute entry passed to [`build_element`]
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Handler(Action),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<Action> for AttrValue {
    fn from(action: Action) -> Self {
        AttrValue::Handler(action)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// Build an element.
///
/// - `"class"` sets the class attribute
/// - `on<event>` keys with a handler value register a listener for `<event>`
/// - every other text value becomes a plain attribute
///
/// Children are appended in order.
pub fn build_element(tag: &str, attributes: Vec<(&str, AttrValue)>, children: Vec<Node>) -> Node {
    let mut element = Element {
        tag: tag.to_string(),
        attributes: Vec::new(),
        listeners: Vec::new(),
        children,
    };

    for (key, value) in attributes {
        match value {
            AttrValue::Text(text) => element.attributes.push((key.to_string(), text)),
            AttrValue::Handler(action) => match key.strip_prefix(EVENT_PREFIX) {
                Some(event) if !event.is_empty() => element.listeners.push(Listener {
                    event: event.to_string(),
                    action,
                }),
                _ => tracing::warn!(tag = %tag, key = %key, "Handler on a non-event attribute ignored"),
            },
        }
    }

    Node::Element(element)
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(t) => t.clone(),
            Node::Element(e) => e.text_content(),
        }
    }

    /// All elements in this subtree (self included) matching `pred`, in
    /// document order
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        collect(self, pred, &mut found);
        found
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_html(self, &mut out);
        out
    }
}

fn collect<'a>(node: &'a Node, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
    if let Node::Element(e) = node {
        if pred(e) {
            found.push(e);
        }
        for child in &e.children {
            collect(child, pred, found);
        }
    }
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// The action bound to `event`, if any
    pub fn listener(&self, event: &str) -> Option<&Action> {
        self.listeners
            .iter()
            .find(|l| l.event == event)
            .map(|l| &l.action)
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}

/// Serialize a node list as HTML
pub fn render_html(nodes: &[Node]) -> String {
    nodes.iter().map(Node::to_html).collect()
}

const VOID_TAGS: &[&str] = &["input", "br", "hr", "img"];

fn write_html(node: &Node, out: &mut String) {
    match node {
        Node::Text(t) => out.push_str(&escape(t)),
        Node::Element(e) => {
            out.push('<');
            out.push_str(&e.tag);
            for (k, v) in &e.attributes {
                out.push_str(&format!(" {}=\"{}\"", k, escape(v)));
            }
            out.push('>');
            if VOID_TAGS.contains(&e.tag.as_str()) {
                return;
            }
            for child in &e.children {
                write_html(child, out);
            }
            out.push_str(&format!("</{}>", e.tag));
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INLINE_TAGS: &[&str] = &["a", "strong", "span", "em", "button", "label"];

/// Render a node list as indented plain text for terminals.
///
/// Block elements start a new line, nested blocks are indented, buttons
/// print as `[label]`, links as `label <href>`, and form controls as
/// `<name>`.
pub fn render_text(nodes: &[Node]) -> String {
    let mut writer = TextWriter::default();
    for node in nodes {
        writer.node(node, 0);
    }
    writer.flush(0);
    writer.lines.join("\n")
}

#[derive(Default)]
struct TextWriter {
    lines: Vec<String>,
    current: String,
}

impl TextWriter {
    fn node(&mut self, node: &Node, depth: usize) {
        match node {
            Node::Text(t) => self.current.push_str(t),
            Node::Element(e) => match e.tag.as_str() {
                "button" => {
                    self.current.push_str(&format!("[{}] ", e.text_content()));
                }
                "a" => {
                    let href = e.attr("href").unwrap_or("#");
                    self.current.push_str(&format!("{} <{}> ", e.text_content(), href));
                }
                "input" | "textarea" | "select" => {
                    let name = e.attr("name").unwrap_or("field");
                    self.current.push_str(&format!("<{}> ", name));
                }
                tag if INLINE_TAGS.contains(&tag) => {
                    for child in &e.children {
                        self.node(child, depth);
                    }
                }
                _ => {
                    self.flush(depth);
                    for child in &e.children {
                        self.node(child, depth + 1);
                    }
                    self.flush(depth + 1);
                }
            },
        }
    }

    fn flush(&mut self, depth: usize) {
        let line = self.current.trim_end().to_string();
        self.current.clear();
        if !line.trim().is_empty() {
            let indent = "  ".repeat(depth.saturating_sub(2));
            self.lines.push(format!("{}{}", indent, line.trim_start()));
        }
    }
}
