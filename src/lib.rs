mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod parser;
pub mod site;
mod title;

pub use block::{BlockType, Span};
pub use config::{Config, SiteConfig};
pub use error::{Error, Result};
pub use html::{assemble, span_to_node};
pub use inline::tokenize;
pub use node::{Attributes, Node};
pub use parser::{classify, split_into_blocks};
pub use title::extract_title;

/// A converted markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub html: String,
}

/// Convert markdown to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    assemble(markdown)?.render()
}

/// Convert markdown to an HTML fragment plus its title.
pub fn convert(markdown: &str) -> Result<Page> {
    let html = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;
    Ok(Page { title, html })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn converts_page() {
        let page = convert("# Tolkien Fan Club\n\n**I like Tolkien**. Read [more](/blog)").unwrap();
        assert_eq!(page.title, "Tolkien Fan Club");
        assert_eq!(
            page.html,
            "<div><h1>Tolkien Fan Club</h1><p><b>I like Tolkien</b>. Read <a href=\"/blog\">more</a></p></div>"
        );
    }

    #[test]
    fn page_without_title_fails() {
        assert!(matches!(
            convert("intro\n\n# Heading"),
            Err(Error::MissingTitle { .. })
        ));
    }
}
