use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::block::Span;

// Alternation order is precedence when two constructs start at the same
// position: image, bold, italic, code, link.
static INLINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"!\[(?P<alt>[^\]]*)\]\((?P<src>[^)]+)\)",
        r"|\*\*(?P<bold>.+?)\*\*",
        r"|\*(?P<italic>.+?)\*",
        r"|`(?P<code>[^`]+)`",
        r"|\[(?P<text>[^\]]+)\]\((?P<href>[^)]+)\)",
    ))
    .expect("valid regex")
});

/// Split one line of text into styled spans.
///
/// Text outside any recognized construct becomes `Span::Text` verbatim, so an
/// unpaired `*` or `[` survives as plain text. There is no escape syntax.
pub fn tokenize(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in INLINE_RE.captures_iter(line) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span::Text(line[last..whole.start()].to_string()));
        }
        spans.push(span_from_captures(&caps, whole.as_str()));
        last = whole.end();
    }

    if last < line.len() {
        spans.push(Span::Text(line[last..].to_string()));
    }

    spans
}

fn span_from_captures(caps: &Captures<'_>, whole: &str) -> Span {
    let group = |name: &str| caps.name(name).map(|m| m.as_str().to_string());

    if let Some(url) = group("src") {
        Span::Image {
            alt: group("alt").unwrap_or_default(),
            url,
        }
    } else if let Some(text) = group("bold") {
        Span::Bold(text)
    } else if let Some(text) = group("italic") {
        Span::Italic(text)
    } else if let Some(code) = group("code") {
        Span::Code(code)
    } else if let (Some(text), Some(url)) = (group("text"), group("href")) {
        Span::Link { text, url }
    } else {
        Span::Text(whole.to_string())
    }
}
