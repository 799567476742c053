//! HTML node tree and its serialization.

use crate::error::{Error, Result};

/// Ordered `key="value"` attributes of an element.
pub type Attributes = Vec<(String, String)>;

/// A renderable HTML node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Element with a text value and no children. `tag: None` is raw text.
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },
    /// Element wrapping one or more child nodes.
    Container {
        tag: String,
        children: Vec<Node>,
        attributes: Attributes,
    },
}

impl Node {
    /// Raw text, rendered verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: None,
            value: value.into(),
            attributes: Vec::new(),
        }
    }

    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: Some(tag.to_owned()),
            value: value.into(),
            attributes: Vec::new(),
        }
    }

    pub fn container(tag: &str, children: Vec<Node>) -> Self {
        Node::Container {
            tag: tag.to_owned(),
            children,
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, keeping insertion order.
    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        match &mut self {
            Node::Leaf { attributes, .. } | Node::Container { attributes, .. } => {
                attributes.push((key.to_owned(), value.into()));
            }
        }
        self
    }

    /// Serialize the node and its descendants to HTML.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            Node::Leaf {
                tag: None, value, ..
            } => out.push_str(value),
            Node::Leaf {
                tag: Some(tag),
                value,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(Error::MissingValue("leaf element has an empty tag"));
                }
                open_tag(tag, attributes, out);
                out.push_str(value);
                close_tag(tag, out);
            }
            Node::Container {
                tag,
                children,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(Error::MissingValue("container has no tag"));
                }
                if children.is_empty() {
                    return Err(Error::MissingValue("container has no children"));
                }
                open_tag(tag, attributes, out);
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn open_tag(tag: &str, attributes: &[(String, String)], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
