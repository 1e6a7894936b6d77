use crate::block::{Block, Document, surface_text};

/// Convert a document to plain text, keeping only light structural markers.
///
/// Blocks are separated by a blank line, except consecutive list items.
pub fn blocks_to_text(doc: &Document) -> String {
    let mut out = String::new();
    let mut previous: Option<&Block> = None;

    for block in doc {
        if let Some(prev) = previous {
            let in_list = matches!(prev, Block::ListItem { .. }) && matches!(block, Block::ListItem { .. });
            if !in_list {
                out.push('\n');
            }
        }
        emit_block(block, &mut out);
        previous = Some(block);
    }

    out
}

fn emit_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading { content, .. } | Block::Paragraph { content } => {
            out.push_str(&surface_text(content));
            out.push('\n');
        }
        Block::Quote { content } => {
            out.push_str("> ");
            out.push_str(&surface_text(content));
            out.push('\n');
        }
        Block::ListItem {
            ordered,
            index,
            content,
        } => {
            match (*ordered, *index) {
                (true, Some(n)) => out.push_str(&format!("{n}. ")),
                _ => out.push_str("- "),
            }
            out.push_str(&surface_text(content));
            out.push('\n');
        }
        Block::CodeBlock { content, .. } => {
            out.push_str(content);
            if !content.ends_with('\n') {
                out.push('\n');
            }
        }
        Block::Table(grid) => {
            for row in std::iter::once(&grid.header).chain(&grid.rows) {
                out.push_str(&row.join(" | "));
                out.push('\n');
            }
        }
        Block::Rule => out.push_str("---\n"),
    }
}
