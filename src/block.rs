use serde::Serialize;

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl Span {
    /// The displayable text of this span, with markup syntax removed.
    /// Images contribute their alt text.
    pub fn surface_text(&self) -> &str {
        match self {
            Span::Text(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
            Span::Link { text, .. } => text,
            Span::Image { alt, .. } => alt,
        }
    }
}

/// Concatenate the surface text of a run of spans.
pub fn surface_text(spans: &[Span]) -> String {
    spans.iter().map(Span::surface_text).collect()
}

/// A pipe table. Every row holds exactly `header.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableGrid {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableGrid {
    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}

/// Block-level elements parsed from Markdown.
///
/// Blocks never nest: list items and quotes are single, flat lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Heading {
        level: u8,
        content: Vec<Span>,
    },
    Rule,
    ListItem {
        ordered: bool,
        /// The number written in the source, for ordered items.
        index: Option<u64>,
        content: Vec<Span>,
    },
    Quote {
        content: Vec<Span>,
    },
    CodeBlock {
        language: Option<String>,
        content: String,
    },
    Table(TableGrid),
    Paragraph {
        content: Vec<Span>,
    },
}

/// The result of rendering a Markdown string: an ordered, read-only sequence
/// of blocks. A fresh document is built for every render call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub(crate) fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Every link and image target in source order, as `(text, url)` pairs.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading { content, .. }
                | Block::ListItem { content, .. }
                | Block::Quote { content }
                | Block::Paragraph { content } => Some(content.iter()),
                _ => None,
            })
            .flatten()
            .filter_map(|span| match span {
                Span::Link { text, url } => Some((text.as_str(), url.as_str())),
                Span::Image { alt, url } => Some((alt.as_str(), url.as_str())),
                _ => None,
            })
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
