use crate::block::BlockType;
use crate::error::{Error, Result};

const FENCE: &str = "```";

/// Split a document into blocks separated by blank lines.
pub fn split_into_blocks(document: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in document.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}

/// Classify a block, validating the per-line markers of quotes and lists.
pub fn classify(block: &str) -> Result<BlockType> {
    if let Some(level) = heading_level(block) {
        return Ok(BlockType::Heading { level });
    }
    if is_code(block) {
        return Ok(BlockType::Code);
    }
    if block.starts_with('>') {
        validate_lines(block, BlockType::Quote, |_, line| quote_prefix_len(line))?;
        return Ok(BlockType::Quote);
    }
    if unordered_prefix_len(block).is_some() {
        validate_lines(block, BlockType::UnorderedList, |_, line| {
            unordered_prefix_len(line)
        })?;
        return Ok(BlockType::UnorderedList);
    }
    if block.starts_with("1.") {
        validate_lines(block, BlockType::OrderedList, ordered_prefix_len)?;
        return Ok(BlockType::OrderedList);
    }
    Ok(BlockType::Paragraph)
}

/// Level of a single-line heading: 1-6 `#`, a space, then some text.
fn heading_level(block: &str) -> Option<u8> {
    if block.contains('\n') {
        return None;
    }
    let level = block.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = block[level..].strip_prefix(' ')?;
    (!rest.is_empty()).then_some(level as u8)
}

fn is_code(block: &str) -> bool {
    block.len() >= 2 * FENCE.len() && block.starts_with(FENCE) && block.ends_with(FENCE)
}

/// Length of a quote marker: always two bytes, `>` and the character after it.
pub(crate) fn quote_prefix_len(line: &str) -> Option<usize> {
    line.starts_with('>').then_some(2)
}

/// Length of an unordered list marker (`* ` or `- `).
pub(crate) fn unordered_prefix_len(line: &str) -> Option<usize> {
    (line.starts_with("* ") || line.starts_with("- ")).then_some(2)
}

/// Length of the `N. ` prefix of the `index`-th (0-based) ordered list line.
pub(crate) fn ordered_prefix_len(index: usize, line: &str) -> Option<usize> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let number: usize = line[..digits].parse().ok()?;
    if number != index + 1 || !line[digits..].starts_with(". ") {
        return None;
    }
    Some(digits + 2)
}

fn validate_lines(
    block: &str,
    block_type: BlockType,
    prefix_len: impl Fn(usize, &str) -> Option<usize>,
) -> Result<()> {
    let lines = block.lines().filter(|line| !line.trim().is_empty());
    for (index, line) in lines.enumerate() {
        if prefix_len(index, line).is_none() {
            return Err(Error::InconsistentBlockMarker {
                block: block_type,
                line_number: index + 1,
                line: line.to_owned(),
            });
        }
    }
    Ok(())
}
