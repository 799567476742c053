use crate::error::{Error, Result};

/// Extract the page title from the document's first line.
///
/// Only the first line is inspected; a heading further down does not count.
pub fn extract_title(document: &str) -> Result<String> {
    let first = document.split('\n').next().unwrap_or_default();
    let Some(rest) = first.strip_prefix('#') else {
        return Err(Error::MissingTitle {
            line: first.to_owned(),
        });
    };
    Ok(rest.trim_start_matches('#').trim().to_owned())
}
