use crate::block::{BlockType, Span};
use crate::error::{Error, Result};
use crate::inline::tokenize;
use crate::node::Node;
use crate::parser::{
    classify, ordered_prefix_len, quote_prefix_len, split_into_blocks, unordered_prefix_len,
};

const ROOT_TAG: &str = "div";
const FENCE_LEN: usize = 3;

/// Assemble a document into a node tree under a single `div` root
pub fn assemble(document: &str) -> Result<Node> {
    let blocks = split_into_blocks(document);
    if blocks.is_empty() {
        return Err(Error::EmptyTree);
    }

    let mut children = Vec::with_capacity(blocks.len());
    for block in &blocks {
        let block_type = classify(block)?;
        tracing::trace!(?block_type, len = block.len(), "Assembling block");
        children.push(block_to_node(block, block_type)?);
    }

    Ok(Node::container(ROOT_TAG, children))
}

fn block_to_node(block: &str, block_type: BlockType) -> Result<Node> {
    match block_type {
        BlockType::Heading { level } => {
            // `#` x level, then one space
            let text = strip(block, Some(usize::from(level) + 1));
            Ok(Node::container(&format!("h{level}"), inline_nodes(text)?))
        }
        BlockType::Code => {
            let text = &block[FENCE_LEN..block.len() - FENCE_LEN];
            let code = Node::container("code", inline_nodes(text)?);
            Ok(Node::container("pre", vec![code]))
        }
        BlockType::Quote => {
            let quoted: Vec<&str> = block
                .lines()
                .map(|line| strip(line, quote_prefix_len(line)))
                .collect();
            Ok(Node::container("blockquote", inline_nodes(&quoted.join("\n"))?))
        }
        BlockType::UnorderedList => {
            let items = list_items(block, |_, line| unordered_prefix_len(line))?;
            Ok(Node::container("ul", items))
        }
        BlockType::OrderedList => {
            let items = list_items(block, ordered_prefix_len)?;
            Ok(Node::container("ol", items))
        }
        BlockType::Paragraph => Ok(Node::container("p", inline_nodes(block)?)),
    }
}

/// One `li` per line, each tokenized on its own.
fn list_items(block: &str, prefix_len: fn(usize, &str) -> Option<usize>) -> Result<Vec<Node>> {
    block
        .lines()
        .enumerate()
        .map(|(index, line)| -> Result<Node> {
            let text = strip(line, prefix_len(index, line));
            Ok(Node::container("li", inline_nodes(text)?))
        })
        .collect()
}

fn strip(line: &str, prefix_len: Option<usize>) -> &str {
    line.get(prefix_len.unwrap_or(0)..).unwrap_or_default()
}

/// Tokenize text into child nodes; empty text yields one empty raw leaf.
fn inline_nodes(text: &str) -> Result<Vec<Node>> {
    let nodes: Vec<Node> = tokenize(text)?.into_iter().map(span_to_node).collect();
    if nodes.is_empty() {
        return Ok(vec![Node::text("")]);
    }
    Ok(nodes)
}

/// Convert an inline span into its HTML node
pub fn span_to_node(span: Span) -> Node {
    match span {
        Span::Plain(text) => Node::text(text),
        Span::Bold(text) => Node::leaf("b", text),
        Span::Italic(text) => Node::leaf("i", text),
        Span::Code(text) => Node::leaf("code", text),
        Span::Link { text, url } => Node::leaf("a", text).with_attribute("href", url),
        Span::Image { alt, url } => Node::leaf("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", alt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown_to_html;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading() {
        assert_eq!(
            markdown_to_html("# heading 1").unwrap(),
            "<div><h1>heading 1</h1></div>"
        );
    }

    #[test]
    fn heading_levels() {
        assert_eq!(
            markdown_to_html("### three **bold**").unwrap(),
            "<div><h3>three <b>bold</b></h3></div>"
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            markdown_to_html("* item 1\n* item 2").unwrap(),
            "<div><ul><li>item 1</li><li>item 2</li></ul></div>"
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            markdown_to_html("1. one\n2. *two*").unwrap(),
            "<div><ol><li>one</li><li><i>two</i></li></ol></div>"
        );
    }

    #[test]
    fn ordered_list_with_two_digit_numbers() {
        let md: Vec<String> = (1..=10).map(|n| format!("{n}. n{n}")).collect();
        let html = markdown_to_html(&md.join("\n")).unwrap();
        assert!(html.ends_with("<li>n9</li><li>n10</li></ol></div>"));
    }

    #[test]
    fn empty_list_item() {
        assert_eq!(
            markdown_to_html("- a\n- ").unwrap(),
            "<div><ul><li>a</li><li></li></ul></div>"
        );
    }

    #[test]
    fn quote() {
        assert_eq!(
            markdown_to_html("> first\n> second `code`").unwrap(),
            "<div><blockquote>first\nsecond <code>code</code></blockquote></div>"
        );
    }

    #[test]
    fn quote_strips_two_characters_per_line() {
        assert_eq!(
            markdown_to_html(">a\n>b").unwrap(),
            "<div><blockquote>\n</blockquote></div>"
        );
        assert_eq!(
            markdown_to_html(">>x").unwrap(),
            "<div><blockquote>x</blockquote></div>"
        );
    }

    #[test]
    fn bare_quote_marker_is_empty_line() {
        assert_eq!(
            markdown_to_html("> a\n>\n> b").unwrap(),
            "<div><blockquote>a\n\nb</blockquote></div>"
        );
    }

    #[test]
    fn code_block() {
        assert_eq!(
            markdown_to_html("```\nlet x = 1;\n```").unwrap(),
            "<div><pre><code>\nlet x = 1;\n</code></pre></div>"
        );
    }

    #[test]
    fn lone_fence_is_unbalanced_paragraph() {
        assert!(matches!(
            markdown_to_html("```"),
            Err(Error::UnbalancedDelimiter { delimiter: "`", .. })
        ));
    }

    #[test]
    fn short_fence_is_paragraph_of_code_spans() {
        assert_eq!(
            markdown_to_html("````").unwrap(),
            "<div><p><code></code><code></code></p></div>"
        );
    }

    #[test]
    fn empty_code_block() {
        assert_eq!(
            markdown_to_html("``````").unwrap(),
            "<div><pre><code></code></pre></div>"
        );
    }

    #[test]
    fn heading_level_six() {
        assert_eq!(
            markdown_to_html("###### deep").unwrap(),
            "<div><h6>deep</h6></div>"
        );
    }

    #[test]
    fn paragraph_with_link_and_image() {
        assert_eq!(
            markdown_to_html("See [docs](/docs) and ![logo](/logo.png)").unwrap(),
            "<div><p>See <a href=\"/docs\">docs</a> and <img src=\"/logo.png\" alt=\"logo\"></img></p></div>"
        );
    }

    #[test]
    fn blocks_are_siblings_in_order() {
        let md = "# Title\n\nSome text.\n\n- a\n- b";
        assert_eq!(
            markdown_to_html(md).unwrap(),
            "<div><h1>Title</h1><p>Some text.</p><ul><li>a</li><li>b</li></ul></div>"
        );
    }

    #[test]
    fn empty_document() {
        assert_eq!(assemble("").unwrap_err(), Error::EmptyTree);
        assert_eq!(assemble("\n \n").unwrap_err(), Error::EmptyTree);
    }

    #[test]
    fn errors_propagate() {
        assert!(matches!(
            assemble("ok\n\n> a\nb"),
            Err(Error::InconsistentBlockMarker { .. })
        ));
        assert!(matches!(
            assemble("an **open paragraph"),
            Err(Error::UnbalancedDelimiter { .. })
        ));
    }

    #[test]
    fn span_conversion() {
        assert_eq!(span_to_node(Span::Plain("blah".into())).render().unwrap(), "blah");
        assert_eq!(
            span_to_node(Span::Italic("blah".into())).render().unwrap(),
            "<i>blah</i>"
        );
        assert_eq!(
            span_to_node(Span::Code("blah".into())).render().unwrap(),
            "<code>blah</code>"
        );
        assert_eq!(
            span_to_node(Span::Link {
                text: "blah".into(),
                url: "https://www.boot.dev".into()
            })
            .render()
            .unwrap(),
            "<a href=\"https://www.boot.dev\">blah</a>"
        );
    }
}
