//! Inline tokenizer: splits raw text into typed spans.

use crate::block::Span;
use crate::error::{Error, Result};

const BOLD: &str = "**";
const ITALIC: &str = "*";
const CODE: &str = "`";

/// Tokenize text into an ordered sequence of spans.
///
/// Delimiter passes run first (bold, italic, code), then images and links are
/// extracted from whatever is still plain text. Empty plain text is dropped.
pub fn tokenize(text: &str) -> Result<Vec<Span>> {
    let spans = vec![Span::Plain(text.to_owned())];
    let spans = split_delimiter(spans, BOLD, Span::Bold)?;
    let spans = split_delimiter(spans, ITALIC, Span::Italic)?;
    let spans = split_delimiter(spans, CODE, Span::Code)?;
    let spans = split_markers(spans, MarkerKind::Image);
    Ok(split_markers(spans, MarkerKind::Link))
}

/// Split plain spans on `delimiter`; odd-indexed segments become `styled` spans.
fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    styled: fn(String) -> Span,
) -> Result<Vec<Span>> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let Span::Plain(text) = span else {
            out.push(span);
            continue;
        };

        if text.split(delimiter).count() % 2 == 0 {
            return Err(Error::UnbalancedDelimiter { delimiter, text });
        }

        for (i, segment) in text.split(delimiter).enumerate() {
            if i % 2 == 0 {
                out.push(Span::Plain(segment.to_owned()));
            } else {
                out.push(styled(segment.to_owned()));
            }
        }
    }

    Ok(out)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum MarkerKind {
    Image,
    Link,
}

/// A `[label](url)` match, as byte ranges into the scanned text.
struct Marker {
    start: usize,
    end: usize,
    label: (usize, usize),
    url: (usize, usize),
}

/// Extract image or link markers from plain spans, left to right.
fn split_markers(spans: Vec<Span>, kind: MarkerKind) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let Span::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let mut emitted = 0;
        let mut cursor = 0;
        while let Some(marker) = find_marker(&text, cursor, kind) {
            push_plain(&mut out, &text[emitted..marker.start]);
            let label = text[marker.label.0..marker.label.1].to_owned();
            let url = text[marker.url.0..marker.url.1].to_owned();
            out.push(match kind {
                MarkerKind::Image => Span::Image { alt: label, url },
                MarkerKind::Link => Span::Link { text: label, url },
            });
            emitted = marker.end;
            cursor = marker.end;
        }
        push_plain(&mut out, &text[emitted..]);
    }

    out
}

fn push_plain(out: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        out.push(Span::Plain(text.to_owned()));
    }
}

/// Find the leftmost marker at or after `from`.
///
/// All marker characters are ASCII, so byte offsets are always char boundaries.
fn find_marker(text: &str, from: usize, kind: MarkerKind) -> Option<Marker> {
    let bytes = text.as_bytes();
    let mut pos = from;

    while pos < bytes.len() {
        let open = match kind {
            MarkerKind::Image if bytes[pos] == b'!' && bytes.get(pos + 1) == Some(&b'[') => {
                Some(pos + 1)
            }
            MarkerKind::Link if bytes[pos] == b'[' && (pos == 0 || bytes[pos - 1] != b'!') => {
                Some(pos)
            }
            _ => None,
        };

        if let Some(open) = open {
            if let Some(marker) = match_brackets(bytes, pos, open) {
                return Some(marker);
            }
        }
        pos += 1;
    }

    None
}

/// Match `[label](url)` with `[` at `open`; neither part may hold brackets or parens.
fn match_brackets(bytes: &[u8], start: usize, open: usize) -> Option<Marker> {
    let label_start = open + 1;
    let label_end = scan_until(bytes, label_start, b']', b'[')?;

    if bytes.get(label_end + 1) != Some(&b'(') {
        return None;
    }

    let url_start = label_end + 2;
    let url_end = scan_until(bytes, url_start, b')', b'(')?;

    Some(Marker {
        start,
        end: url_end + 1,
        label: (label_start, label_end),
        url: (url_start, url_end),
    })
}

/// Position of the first `close` from `from`, failing if `reject` comes first.
fn scan_until(bytes: &[u8], from: usize, close: u8, reject: u8) -> Option<usize> {
    for (offset, &b) in bytes.get(from..)?.iter().enumerate() {
        if b == close {
            return Some(from + offset);
        }
        if b == reject {
            return None;
        }
    }
    None
}
