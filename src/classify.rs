use once_cell::sync::Lazy;
use regex::Regex;

static ORDERED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.\s(.+)$").expect("valid regex"));

/// What a single source line is, before any multi-line state is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// A ```` ``` ```` marker, with the info string of an opening fence.
    Fence { language: Option<&'a str> },
    /// A line inside a fenced code block, kept verbatim.
    CodeText,
    TableRow,
    Heading { level: u8, text: &'a str },
    Rule,
    Bullet { text: &'a str },
    Numbered { index: Option<u64>, text: &'a str },
    Quote { text: &'a str },
    Blank,
    /// Paragraph text; the whole line is the content.
    Text,
}

/// Classify one line. The first matching rule wins; the caller strips any
/// trailing `\r` beforehand.
pub fn classify(line: &str, in_code_block: bool) -> Line<'_> {
    if let Some(info) = line.strip_prefix("```") {
        let info = info.trim();
        return Line::Fence {
            language: (!info.is_empty()).then_some(info),
        };
    }

    if in_code_block {
        return Line::CodeText;
    }

    if line.trim_start().starts_with('|') {
        return Line::TableRow;
    }

    if let Some((level, text)) = heading(line) {
        return Line::Heading { level, text };
    }

    if line.starts_with("---") || line.starts_with("***") {
        return Line::Rule;
    }

    if let Some(text) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Line::Bullet { text };
    }

    if let Some(caps) = ORDERED_RE.captures(line) {
        if let (Some(number), Some(text)) = (caps.get(1), caps.get(2)) {
            return Line::Numbered {
                index: number.as_str().parse().ok(),
                text: text.as_str(),
            };
        }
    }

    if let Some(text) = line.strip_prefix("> ") {
        return Line::Quote { text };
    }

    if line.trim().is_empty() {
        return Line::Blank;
    }

    Line::Text
}

fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let text = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, text.trim()))
}
