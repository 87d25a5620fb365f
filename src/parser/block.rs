//! Block segmentation and classification.
//!
//! A document is split into blocks on blank lines, and each block is
//! classified by prefix rules applied to its lines. The `strip_*` helpers
//! remove block syntax to expose a block's inline content.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::BlockType;

/// A newline followed by one or more blank (possibly whitespace-only) lines.
static BLOCK_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n(?:[ \t]*\n)+").unwrap());

const CODE_FENCE: &str = "```";
const MAX_HEADING_LEVEL: usize = 6;

/// Split a document into trimmed blocks.
///
/// Empty blocks are kept; an empty document yields one empty block.
pub fn segment(document: &str) -> Vec<String> {
    BLOCK_SEPARATOR
        .split(document.trim())
        .map(|block| block.trim().to_string())
        .collect()
}

/// Classify a block. Falls back to [`BlockType::Paragraph`].
pub fn classify(block: &str) -> BlockType {
    if let Some(level) = heading_level(block) {
        return BlockType::Heading(level);
    }
    if block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE) {
        return BlockType::Code;
    }

    let lines: Vec<&str> = block.split('\n').map(str::trim).collect();

    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }
    if lines
        .iter()
        .all(|line| line.starts_with("* ") || line.starts_with("- "))
    {
        return BlockType::UnorderedList;
    }
    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| has_ordinal_marker(line, i + 1))
    {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// Heading level of a line opening with 1-6 `#` followed by a space.
///
/// Seven or more `#` is not a heading.
pub fn heading_level(text: &str) -> Option<u8> {
    let hashes = text.bytes().take_while(|&b| b == b'#').count();
    if (1..=MAX_HEADING_LEVEL).contains(&hashes) && text[hashes..].starts_with(' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

/// Remove every leading `#` and space from a heading.
pub fn strip_heading_prefix(text: &str) -> &str {
    text.trim_start_matches(['#', ' '])
}

/// Remove a list marker (the first whitespace-delimited token) and the
/// single whitespace character after it.
///
/// A line with no whitespace is all marker and yields an empty string.
pub fn strip_list_marker(line: &str) -> &str {
    match line.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((i, c)) => &line[i + c.len_utf8()..],
        None => "",
    }
}

/// Remove a single leading `>` and the surrounding whitespace from a line.
pub fn strip_quote_marker(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix('>').unwrap_or(line).trim()
}

/// Literal content of a fenced code block.
///
/// The fences are removed. Text after the opening fence on its line is
/// dropped only when it is a single word (a language tag); otherwise it is
/// code. Leading blank lines and trailing whitespace are trimmed, and
/// indentation of the first code line on its own line is kept.
pub fn strip_code_fence(block: &str) -> &str {
    let fence = CODE_FENCE.len();
    let inner = if block.len() >= 2 * fence
        && block.starts_with(CODE_FENCE)
        && block.ends_with(CODE_FENCE)
    {
        &block[fence..block.len() - fence]
    } else {
        block.trim_start_matches('`').trim_end_matches('`')
    };

    let body = match inner.split_once('\n') {
        Some((first, rest)) if is_info_string(first) => rest,
        _ => inner.trim_start_matches([' ', '\t']),
    };
    body.trim_start_matches(['\n', '\r']).trim_end()
}

fn is_info_string(line: &str) -> bool {
    !line.trim().contains(char::is_whitespace)
}

/// Lines of a block, each trimmed.
pub fn block_lines(block: &str) -> impl Iterator<Item = &str> {
    block.split('\n').map(str::trim)
}

fn has_ordinal_marker(line: &str, ordinal: usize) -> bool {
    line.strip_prefix(ordinal.to_string().as_str())
        .is_some_and(|rest| rest.starts_with(". "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_document() {
        let markdown = "
# This is a heading

This is a paragraph of text. It has some **bold** and *italic* words inside of it.

* This is the first list item in a list block
* This is a list item
* This is another list item
                ";
        assert_eq!(
            segment(markdown),
            vec![
                "# This is a heading",
                "This is a paragraph of text. It has some **bold** and *italic* words inside of it.",
                "* This is the first list item in a list block\n* This is a list item\n* This is another list item",
            ]
        );
    }

    #[test]
    fn test_segment_simple() {
        assert_eq!(
            segment("# Heading\n\nParagraph one\n\nParagraph two"),
            vec!["# Heading", "Paragraph one", "Paragraph two"]
        );
    }

    #[test]
    fn test_segment_collapses_long_and_whitespace_runs() {
        assert_eq!(segment("a\n\n\n\nb\n  \n\t\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_segment_keeps_single_newlines() {
        assert_eq!(segment("a\nb\n\nc"), vec!["a\nb", "c"]);
    }

    #[test]
    fn test_segment_empty_document() {
        assert_eq!(segment(""), vec![""]);
        assert_eq!(segment("  \n\n  "), vec![""]);
    }

    #[test]
    fn test_classify() {
        let cases = [
            ("### this is a heading", BlockType::Heading(3)),
            ("# h", BlockType::Heading(1)),
            ("###### h", BlockType::Heading(6)),
            (
                "####### this is not a heading (too many #s)",
                BlockType::Paragraph,
            ),
            ("#nospace", BlockType::Paragraph),
            (
                "```py\nname=input('Enter your name: ')\nprint('Hello ' + name + '!')\n```",
                BlockType::Code,
            ),
            ("```\nunterminated", BlockType::Paragraph),
            (
                "> something profound\n> by someone\n> who knows something",
                BlockType::Quote,
            ),
            (
                "* buy chicken\n* buy sauce\n* make dinner",
                BlockType::UnorderedList,
            ),
            (
                "- buy chicken\n- buy sauce\n- make dinner",
                BlockType::UnorderedList,
            ),
            (
                "- buy chicken\n* buy sauce\n- make dinner",
                BlockType::UnorderedList,
            ),
            ("*not a list*", BlockType::Paragraph),
            (
                "1. buy chicken\n2. buy sauce\n3. make dinner",
                BlockType::OrderedList,
            ),
            (
                "3. buy chicken\n4. buy sauce\n5. make dinner",
                BlockType::Paragraph,
            ),
            ("2. a\n3. b", BlockType::Paragraph),
            ("1. a\n3. b", BlockType::Paragraph),
            ("This is some *very* random text", BlockType::Paragraph),
            ("", BlockType::Paragraph),
        ];

        for (block, expected) in cases {
            assert_eq!(classify(block), expected, "block: {block:?}");
        }
    }

    #[test]
    fn test_classify_long_ordered_list() {
        let block: Vec<String> = (1..=12).map(|i| format!("{i}. item")).collect();
        assert_eq!(classify(&block.join("\n")), BlockType::OrderedList);
    }

    #[test]
    fn test_heading_prefix_round_trip() {
        for level in 1..=6u8 {
            let block = format!("{}title", BlockType::Heading(level).heading_prefix().unwrap());
            assert_eq!(classify(&block), BlockType::Heading(level));
            let prefix = classify(&block).heading_prefix().unwrap();
            assert_eq!(prefix, format!("{} ", "#".repeat(level as usize)));
        }
    }

    #[test]
    fn test_strip_heading_prefix() {
        assert_eq!(strip_heading_prefix("### Title"), "Title");
        assert_eq!(strip_heading_prefix("# I am **bold**"), "I am **bold**");
        assert_eq!(strip_heading_prefix("# a # b"), "a # b");
    }

    #[test]
    fn test_strip_list_marker() {
        assert_eq!(strip_list_marker("* find shelter"), "find shelter");
        assert_eq!(strip_list_marker("- start a fire"), "start a fire");
        assert_eq!(strip_list_marker("12. twelve"), "twelve");
        assert_eq!(strip_list_marker("*"), "");
    }

    #[test]
    fn test_strip_quote_marker() {
        assert_eq!(strip_quote_marker("> Super interesting"), "Super interesting");
        assert_eq!(strip_quote_marker(">tight"), "tight");
        assert_eq!(strip_quote_marker("> > nested"), "> nested");
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(
            strip_code_fence("```\nname = input()\nprint(name)\n```"),
            "name = input()\nprint(name)"
        );
        assert_eq!(strip_code_fence("```rust\nfn main() {}\n```"), "fn main() {}");
        assert_eq!(strip_code_fence("```inline```"), "inline");
        assert_eq!(strip_code_fence("```\n    indented\n```"), "    indented");
        assert_eq!(strip_code_fence("```"), "");
    }

    #[test]
    fn test_code_on_fence_line_is_kept() {
        assert_eq!(
            strip_code_fence("```x = 1\ny = 2\n```"),
            "x = 1\ny = 2"
        );
        assert_eq!(
            strip_code_fence("``` print(a, b)\n```"),
            "print(a, b)"
        );
        assert_eq!(strip_code_fence("```python \nx\n```"), "x");
        assert_eq!(strip_code_fence("```  \n  x\n```"), "  x");
    }
}
