use crate::block::{Block, Document, Span};
use crate::classify::{Line, classify};
use crate::config::ParseConfig;
use crate::inline::tokenize;
use crate::table;

/// Strip YAML frontmatter from the beginning of markdown content
fn strip_frontmatter(markdown: &str) -> &str {
    let mut lines = markdown.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return markdown;
    };
    if first.trim_end() != "---" {
        return markdown;
    }

    let mut offset = first.len();
    for line in lines {
        offset += line.len();
        if line.trim_end() == "---" {
            tracing::debug!(bytes = offset, "stripped front matter");
            return &markdown[offset..];
        }
    }
    // No closing marker: not front matter after all
    markdown
}

/// Parse markdown text into a document using default options.
pub fn parse(markdown: &str) -> Document {
    parse_with_config(markdown, &ParseConfig::default())
}

/// Parse markdown text into a document.
///
/// Parsing is total: every input produces a document.
pub fn parse_with_config(markdown: &str, config: &ParseConfig) -> Document {
    let markdown = if config.strip_frontmatter {
        strip_frontmatter(markdown)
    } else {
        markdown
    };

    let mut builder = Builder::default();
    for line in markdown.split('\n') {
        builder.push_line(line.strip_suffix('\r').unwrap_or(line));
    }
    let blocks = builder.finish();

    tracing::debug!(blocks = blocks.len(), "parsed document");
    Document::new(blocks)
}

/// Multi-line state between two source lines. Exactly one construct can be
/// open at a time.
#[derive(Default)]
enum State<'a> {
    #[default]
    Idle,
    Paragraph(Vec<Span>),
    CodeBlock {
        language: Option<String>,
        content: String,
    },
    Table(Vec<&'a str>),
}

#[derive(Default)]
struct Builder<'a> {
    state: State<'a>,
    blocks: Vec<Block>,
}

impl<'a> Builder<'a> {
    fn push_line(&mut self, line: &'a str) {
        let in_code_block = matches!(self.state, State::CodeBlock { .. });
        let kind = classify(line, in_code_block);

        match (std::mem::take(&mut self.state), kind) {
            (State::CodeBlock { language, content }, Line::Fence { .. }) => {
                self.emit(Block::CodeBlock { language, content });
            }
            (
                State::CodeBlock {
                    language,
                    mut content,
                },
                _,
            ) => {
                content.push_str(line);
                content.push('\n');
                self.state = State::CodeBlock { language, content };
            }

            (State::Table(mut rows), Line::TableRow) => {
                rows.push(line);
                self.state = State::Table(rows);
            }
            (State::Table(rows), kind) => {
                self.close_table(&rows);
                self.start(line, kind);
            }

            (State::Paragraph(mut content), Line::Text) => {
                content.push(Span::Text(" ".to_string()));
                content.extend(tokenize(line));
                self.state = State::Paragraph(content);
            }
            (State::Paragraph(content), kind) => {
                self.emit(Block::Paragraph { content });
                self.start(line, kind);
            }

            (State::Idle, kind) => self.start(line, kind),
        }
    }

    /// Handle a line with no construct open.
    fn start(&mut self, line: &'a str, kind: Line<'a>) {
        match kind {
            Line::Fence { language } => {
                self.state = State::CodeBlock {
                    language: language.map(str::to_string),
                    content: String::new(),
                };
            }
            Line::TableRow => self.state = State::Table(vec![line]),
            Line::Heading { level, text } => self.emit(Block::Heading {
                level,
                content: tokenize(text),
            }),
            Line::Rule => self.emit(Block::Rule),
            Line::Bullet { text } => self.emit(Block::ListItem {
                ordered: false,
                index: None,
                content: tokenize(text),
            }),
            Line::Numbered { index, text } => self.emit(Block::ListItem {
                ordered: true,
                index,
                content: tokenize(text),
            }),
            Line::Quote { text } => self.emit(Block::Quote {
                content: tokenize(text),
            }),
            Line::Blank => {}
            Line::Text | Line::CodeText => self.state = State::Paragraph(tokenize(line)),
        }
    }

    fn close_table(&mut self, rows: &[&str]) {
        match table::assemble(rows) {
            Some(grid) => self.emit(Block::Table(grid)),
            None => tracing::debug!(rows = rows.len(), "discarding table without data rows"),
        }
    }

    fn emit(&mut self, block: Block) {
        tracing::trace!(?block, "block");
        self.blocks.push(block);
    }

    fn finish(mut self) -> Vec<Block> {
        match std::mem::take(&mut self.state) {
            State::Idle => {}
            State::Paragraph(content) => self.emit(Block::Paragraph { content }),
            State::CodeBlock { language, content } => {
                tracing::debug!("unterminated code fence, flushing as code block");
                self.emit(Block::CodeBlock { language, content });
            }
            State::Table(rows) => self.close_table(&rows),
        }
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::TableGrid;

    fn text(s: &str) -> Span {
        Span::Text(s.to_string())
    }

    #[test]
    fn empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n   \n").is_empty());
    }

    #[test]
    fn heading() {
        assert_eq!(
            parse("# Hello").blocks(),
            [Block::Heading {
                level: 1,
                content: vec![text("Hello")]
            }]
        );
    }

    #[test]
    fn paragraph_with_styles() {
        assert_eq!(
            parse("**bold** and *italic*").blocks(),
            [Block::Paragraph {
                content: vec![
                    Span::Bold("bold".into()),
                    text(" and "),
                    Span::Italic("italic".into())
                ]
            }]
        );
    }

    #[test]
    fn paragraph_lines_joined_with_space() {
        assert_eq!(
            parse("first line\nsecond `line`\n\nnext").blocks(),
            [
                Block::Paragraph {
                    content: vec![
                        text("first line"),
                        text(" "),
                        text("second "),
                        Span::Code("line".into())
                    ]
                },
                Block::Paragraph {
                    content: vec![text("next")]
                },
            ]
        );
    }

    #[test]
    fn table() {
        assert_eq!(
            parse("| a | b |\n|---|---|\n| 1 | 2 |").blocks(),
            [Block::Table(TableGrid {
                header: vec!["a".into(), "b".into()],
                rows: vec![vec!["1".into(), "2".into()]],
            })]
        );
    }

    #[test]
    fn separator_only_table_is_dropped() {
        assert!(parse("|---|---|").is_empty());
    }

    #[test]
    fn table_closed_by_following_line() {
        let doc = parse("| a |\n| 1 |\nafter");
        assert!(matches!(doc.blocks()[0], Block::Table(_)));
        assert_eq!(
            doc.blocks()[1],
            Block::Paragraph {
                content: vec![text("after")]
            }
        );
    }

    #[test]
    fn unordered_list() {
        assert_eq!(
            parse("- item1\n- item2").blocks(),
            [
                Block::ListItem {
                    ordered: false,
                    index: None,
                    content: vec![text("item1")]
                },
                Block::ListItem {
                    ordered: false,
                    index: None,
                    content: vec![text("item2")]
                },
            ]
        );
    }

    #[test]
    fn ordered_list_keeps_index() {
        assert_eq!(
            parse("3. three").blocks(),
            [Block::ListItem {
                ordered: true,
                index: Some(3),
                content: vec![text("three")]
            }]
        );
    }

    #[test]
    fn code_block() {
        assert_eq!(
            parse("```\ncode here\n```").blocks(),
            [Block::CodeBlock {
                language: None,
                content: "code here\n".into()
            }]
        );
    }

    #[test]
    fn code_block_is_verbatim() {
        assert_eq!(
            parse("```rust\n# not heading\n\n| not table |\n```").blocks(),
            [Block::CodeBlock {
                language: Some("rust".into()),
                content: "# not heading\n\n| not table |\n".into()
            }]
        );
    }

    #[test]
    fn unterminated_code_block_is_flushed() {
        assert_eq!(
            parse("```\nlet x = 1;").blocks(),
            [Block::CodeBlock {
                language: None,
                content: "let x = 1;\n".into()
            }]
        );
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(
            parse("# Title\r\n\r\n> quote\r\n").blocks(),
            [
                Block::Heading {
                    level: 1,
                    content: vec![text("Title")]
                },
                Block::Quote {
                    content: vec![text("quote")]
                },
            ]
        );
    }

    #[test]
    fn blocks_close_open_paragraph() {
        let doc = parse("intro\n---\nmore");
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.blocks()[1], Block::Rule);
    }

    #[test]
    fn frontmatter_kept_by_default() {
        let doc = parse("---\ntitle: x\n---\n# Body");
        assert_eq!(doc.blocks()[0], Block::Rule);
    }

    #[test]
    fn frontmatter_stripped_when_enabled() {
        let config = ParseConfig {
            strip_frontmatter: true,
        };
        assert_eq!(
            parse_with_config("---\ntitle: x\n---\n# Body", &config).blocks(),
            [Block::Heading {
                level: 1,
                content: vec![text("Body")]
            }]
        );
    }

    #[test]
    fn unclosed_frontmatter_is_not_stripped() {
        assert_eq!(strip_frontmatter("---\nno end"), "---\nno end");
        assert_eq!(strip_frontmatter("---\n---\nbody"), "body");
    }
}
