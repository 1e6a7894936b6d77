//! Block-level rendering cases, one source snippet per expected shape.

use rstest::rstest;
use termsnap_markdown::{Block, Span, TableGrid, render};

fn text(s: &str) -> Span {
    Span::Text(s.to_string())
}

#[rstest]
#[case("# One", 1, "One")]
#[case("## Two", 2, "Two")]
#[case("### Three  ", 3, "Three")]
#[case("###### Six", 6, "Six")]
fn headings(#[case] source: &str, #[case] level: u8, #[case] expected: &str) {
    let doc = render(source);
    assert_eq!(
        doc.blocks(),
        [Block::Heading {
            level,
            content: vec![text(expected)]
        }]
    );
}

#[rstest]
#[case("---")]
#[case("***")]
#[case("-----")]
fn rules(#[case] source: &str) {
    assert_eq!(render(source).blocks(), [Block::Rule]);
}

#[rstest]
#[case("####### seven")]
#[case("#tag")]
#[case(">no space")]
#[case("1.no space")]
#[case("-dash")]
fn falls_back_to_paragraph(#[case] source: &str) {
    assert_eq!(
        render(source).blocks(),
        [Block::Paragraph {
            content: vec![text(source)]
        }]
    );
}

#[test]
fn mixed_document() {
    let source = "\
# Release notes

Version **2.1** ships a new
*file viewer*.

- faster startup
- see [changelog](https://example.com/changes)

> Upgrade soon.

```sh
termsnap --version
```

| Key | Action |
|:----|-------:|
| F5 | Refresh |
";
    let doc = render(source);
    assert_eq!(
        doc.blocks(),
        [
            Block::Heading {
                level: 1,
                content: vec![text("Release notes")]
            },
            Block::Paragraph {
                content: vec![
                    text("Version "),
                    Span::Bold("2.1".into()),
                    text(" ships a new"),
                    text(" "),
                    Span::Italic("file viewer".into()),
                    text("."),
                ]
            },
            Block::ListItem {
                ordered: false,
                index: None,
                content: vec![text("faster startup")]
            },
            Block::ListItem {
                ordered: false,
                index: None,
                content: vec![
                    text("see "),
                    Span::Link {
                        text: "changelog".into(),
                        url: "https://example.com/changes".into()
                    }
                ]
            },
            Block::Quote {
                content: vec![text("Upgrade soon.")]
            },
            Block::CodeBlock {
                language: Some("sh".into()),
                content: "termsnap --version\n".into()
            },
            Block::Table(TableGrid {
                header: vec!["Key".into(), "Action".into()],
                rows: vec![vec!["F5".into(), "Refresh".into()]],
            }),
        ]
    );

    let links: Vec<_> = doc.links().collect();
    assert_eq!(links, vec![("changelog", "https://example.com/changes")]);
}

#[test]
fn table_at_end_of_input_is_assembled() {
    let doc = render("intro\n| a | b |\n| 1 | 2 |");
    assert_eq!(doc.len(), 2);
    assert!(matches!(&doc.blocks()[1], Block::Table(grid) if grid.rows.len() == 1));
}

#[test]
fn lone_table_row_emits_nothing() {
    assert!(render("| just one |").is_empty());
}

#[test]
fn fence_closes_open_table_and_paragraph() {
    let doc = render("para\n| a |\n| b |\n```\nx\n```");
    assert!(matches!(doc.blocks()[0], Block::Paragraph { .. }));
    assert!(matches!(doc.blocks()[1], Block::Table(_)));
    assert!(matches!(doc.blocks()[2], Block::CodeBlock { .. }));
}

#[test]
fn rendering_twice_yields_equal_documents() {
    let source = "# a\n\n- b\n\n| c |\n|---|\n| d |";
    assert_eq!(render(source), render(source));
}
