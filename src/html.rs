use crate::block::{Block, Document, Span, TableGrid};
use crate::config::HtmlConfig;

/// Convert a document to HTML
pub fn blocks_to_html(doc: &Document, config: &HtmlConfig) -> String {
    let mut out = String::new();

    if config.standalone {
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
        escape_into(&config.title, &mut out);
        out.push_str("</title>\n</head>\n<body>\n");
    }

    let blocks = doc.blocks();
    let mut i = 0;
    while i < blocks.len() {
        match &blocks[i] {
            Block::ListItem { ordered, .. } => {
                // Consecutive items of the same kind share one list element
                let run = blocks[i..]
                    .iter()
                    .take_while(|b| matches!(b, Block::ListItem { ordered: o, .. } if o == ordered))
                    .count();
                list_to_html(&blocks[i..i + run], *ordered, config, &mut out);
                i += run;
            }
            block => {
                emit_block(block, config, &mut out);
                i += 1;
            }
        }
    }

    if config.standalone {
        out.push_str("</body>\n</html>\n");
    }

    out
}

fn emit_block(block: &Block, config: &HtmlConfig, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            out.push_str(&format!("<h{level}>"));
            spans_to_html(content, config, out);
            out.push_str(&format!("</h{level}>\n"));
        }
        Block::Paragraph { content } => {
            out.push_str("<p>");
            spans_to_html(content, config, out);
            out.push_str("</p>\n");
        }
        Block::Quote { content } => {
            out.push_str("<blockquote><p>");
            spans_to_html(content, config, out);
            out.push_str("</p></blockquote>\n");
        }
        Block::CodeBlock { language, content } => {
            out.push_str("<pre><code");
            if let Some(lang) = language {
                out.push_str(" class=\"language-");
                escape_into(lang, out);
                out.push('"');
            }
            out.push('>');
            escape_into(content, out);
            out.push_str("</code></pre>\n");
        }
        Block::Table(grid) => table_to_html(grid, out),
        Block::Rule => out.push_str("<hr>\n"),
        Block::ListItem { ordered, .. } => {
            list_to_html(std::slice::from_ref(block), *ordered, config, out);
        }
    }
}

fn list_to_html(items: &[Block], ordered: bool, config: &HtmlConfig, out: &mut String) {
    let first_index = items.iter().find_map(|item| match item {
        Block::ListItem { index, .. } => *index,
        _ => None,
    });
    match (ordered, first_index) {
        (false, _) => out.push_str("<ul>\n"),
        (true, Some(start)) if start != 1 => out.push_str(&format!("<ol start=\"{start}\">\n")),
        (true, _) => out.push_str("<ol>\n"),
    }

    for item in items {
        if let Block::ListItem { content, .. } = item {
            out.push_str("<li>");
            spans_to_html(content, config, out);
            out.push_str("</li>\n");
        }
    }

    out.push_str(if ordered { "</ol>\n" } else { "</ul>\n" });
}

fn table_to_html(grid: &TableGrid, out: &mut String) {
    out.push_str("<table>\n<thead>\n<tr>");
    for cell in &grid.header {
        out.push_str("<th>");
        escape_into(cell, out);
        out.push_str("</th>");
    }
    out.push_str("</tr>\n</thead>\n");

    if !grid.rows.is_empty() {
        out.push_str("<tbody>\n");
        for row in &grid.rows {
            out.push_str("<tr>");
            for cell in row {
                out.push_str("<td>");
                escape_into(cell, out);
                out.push_str("</td>");
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n");
    }

    out.push_str("</table>\n");
}

fn spans_to_html(spans: &[Span], config: &HtmlConfig, out: &mut String) {
    for span in spans {
        span_to_html(span, config, out);
    }
}

fn span_to_html(span: &Span, config: &HtmlConfig, out: &mut String) {
    match span {
        Span::Text(text) => escape_into(text, out),
        Span::Bold(text) => wrap("strong", text, out),
        Span::Italic(text) => wrap("em", text, out),
        Span::Code(text) => wrap("code", text, out),
        Span::Link { text, url } => {
            out.push_str("<a href=\"");
            escape_into(url, out);
            out.push('"');
            if config.links_new_tab {
                out.push_str(" target=\"_blank\" rel=\"noopener\"");
            }
            out.push('>');
            escape_into(text, out);
            out.push_str("</a>");
        }
        Span::Image { alt, url } => {
            out.push_str("<img src=\"");
            escape_into(url, out);
            out.push_str("\" alt=\"");
            escape_into(alt, out);
            out.push_str("\">");
        }
    }
}

fn wrap(tag: &str, text: &str, out: &mut String) {
    out.push_str(&format!("<{tag}>"));
    escape_into(text, out);
    out.push_str(&format!("</{tag}>"));
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
