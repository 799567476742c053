/// Inline text span produced by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl Span {
    /// Visible text of the span (alt text for images).
    pub fn content(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
            Span::Link { text, .. } => text,
            Span::Image { alt, .. } => alt,
        }
    }

    /// Target of a link or image.
    pub fn url(&self) -> Option<&str> {
        match self {
            Span::Link { url, .. } | Span::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Span::Plain(_))
    }
}

/// Block-level element kinds recognised by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Heading { level: u8 },
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

impl BlockType {
    /// Describes the marker rule a line of this block type broke.
    pub(crate) fn marker_violation(self) -> &'static str {
        match self {
            BlockType::Quote => "quote line does not start with `>`",
            BlockType::UnorderedList => "unordered list line does not start with `* ` or `- `",
            BlockType::OrderedList => "ordered list line is not numbered sequentially as `N. `",
            BlockType::Heading { .. } | BlockType::Code | BlockType::Paragraph => {
                "line breaks block marker rules"
            }
        }
    }
}
