//! Inline resolution: turns a run of Markdown text into typed spans.
//!
//! Passes run in a fixed order. Each pass only subdivides [`SpanKind::Normal`]
//! spans left by the previous one; typed spans pass through untouched.
//!
//! 1. images `![alt](url)`
//! 2. links `[text](url)` not preceded by `!`
//! 3. bold `**`
//! 4. italic `*`
//! 5. code `` ` ``
//!
//! Bold must run before italic since `*` is a prefix of `**`.

use std::ops::Range;

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{HtmlNode, SpanKind, TextSpan};

static IMAGE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

static LINK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Delimiter passes in resolution order.
const DELIMITERS: [(&str, SpanKind); 3] = [
    ("**", SpanKind::Bold),
    ("*", SpanKind::Italic),
    ("`", SpanKind::Code),
];

/// A bracket-syntax match inside a text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BracketMatch<'a> {
    range: Range<usize>,
    text: &'a str,
    url: &'a str,
}

/// Resolve inline Markdown into an ordered sequence of spans.
///
/// Fails with [`Error::MalformedMarkup`] if any delimiter is unbalanced
/// within a plain text span.
pub fn resolve(text: &str) -> Result<Vec<TextSpan>> {
    let mut spans = vec![TextSpan::normal(text)];
    spans = split_images(spans);
    spans = split_links(spans);
    for (delimiter, kind) in DELIMITERS {
        spans = split_delimiter(spans, delimiter, kind)?;
    }
    trace!("resolved {} inline spans from {:?}", spans.len(), text);
    Ok(spans)
}

/// Resolve inline Markdown straight into leaf HTML nodes.
pub fn resolve_to_nodes(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(to_html_nodes(&resolve(text)?))
}

/// Convert spans to leaf HTML nodes.
pub fn to_html_nodes(spans: &[TextSpan]) -> Vec<HtmlNode> {
    spans
        .iter()
        .map(|span| HtmlNode::Leaf(span.to_html_node()))
        .collect()
}

/// Extract `(alt, url)` pairs of every image in the text.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|m| (m.text.to_string(), m.url.to_string()))
        .collect()
}

/// Extract `(text, url)` pairs of every link in the text, ignoring images.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|m| (m.text.to_string(), m.url.to_string()))
        .collect()
}

/// Split image syntax out of every plain span.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_bracketed(spans, SpanKind::Image, find_images)
}

/// Split link syntax out of every plain span.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_bracketed(spans, SpanKind::Link, find_links)
}

/// Split every plain span on `delimiter`, marking the enclosed pieces `kind`.
///
/// Empty pieces are dropped. A plain span with an odd number of delimiter
/// occurrences fails the whole pass.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_normal() {
            result.push(span);
            continue;
        }

        let pieces: Vec<&str> = span.text.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(Error::malformed(delimiter, &span.text));
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            let piece_kind = if i % 2 == 0 { span.kind } else { kind };
            result.push(TextSpan::new(piece, piece_kind));
        }
    }

    trace!("split on {:?}: {} spans", delimiter, result.len());
    Ok(result)
}

fn split_bracketed<F>(spans: Vec<TextSpan>, kind: SpanKind, find: F) -> Vec<TextSpan>
where
    F: for<'a> Fn(&'a str) -> Vec<BracketMatch<'a>>,
{
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_normal() {
            result.push(span);
            continue;
        }

        let text = span.text.as_str();
        let mut cursor = 0;
        for m in find(text) {
            let before = &text[cursor..m.range.start];
            if !before.is_empty() {
                result.push(TextSpan::normal(before));
            }
            result.push(TextSpan {
                text: m.text.to_string(),
                kind,
                target: Some(m.url.to_string()),
            });
            cursor = m.range.end;
        }

        let rest = &text[cursor..];
        if !rest.is_empty() {
            result.push(TextSpan::normal(rest));
        }
    }

    result
}

fn find_images(text: &str) -> Vec<BracketMatch<'_>> {
    scan(&IMAGE_REGEX, text, false)
}

fn find_links(text: &str) -> Vec<BracketMatch<'_>> {
    scan(&LINK_REGEX, text, true)
}

/// Leftmost non-overlapping matches; with `reject_after_bang`, a match
/// directly preceded by `!` is skipped and scanning resumes one byte later.
fn scan<'a>(regex: &Regex, text: &'a str, reject_after_bang: bool) -> Vec<BracketMatch<'a>> {
    let mut matches = Vec::new();
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = regex.captures_at(text, pos) else {
            break;
        };
        let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            break;
        };

        if reject_after_bang && text[..whole.start()].ends_with('!') {
            // Both patterns start with ASCII '[', so +1 stays on a char boundary.
            pos = whole.start() + 1;
            continue;
        }

        matches.push(BracketMatch {
            range: whole.range(),
            text: label.as_str(),
            url: url.as_str(),
        });
        pos = whole.end();
    }

    matches
}
