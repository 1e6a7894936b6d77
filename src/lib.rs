//! Markdown rendering for the TermSnap file viewer.
//!
//! [`render`] turns a Markdown string into a flat [`Document`] of blocks and
//! inline spans that any rich-text surface can draw. The emitters in this
//! crate map that document to HTML or plain text.

mod block;
mod classify;
mod config;
mod error;
mod html;
mod inline;
mod parser;
mod table;
mod text;

pub use block::{Block, Document, Span, TableGrid, surface_text};
pub use classify::{Line, classify};
pub use config::{Config, HtmlConfig, ParseConfig};
pub use error::ConfigError;
pub use inline::tokenize;
pub use table::assemble;

/// Parse markdown text into a document using default config.
pub fn render(markdown: &str) -> Document {
    parser::parse(markdown)
}

/// Parse markdown text into a document with custom config.
pub fn render_with_config(markdown: &str, config: &Config) -> Document {
    parser::parse_with_config(markdown, &config.parse)
}

/// Convert markdown to HTML using default config.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to HTML with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> String {
    let doc = render_with_config(markdown, config);
    html::blocks_to_html(&doc, &config.html)
}

/// Convert markdown to plain text.
pub fn markdown_to_text(markdown: &str) -> String {
    text::blocks_to_text(&render(markdown))
}

/// Convert an already rendered document to HTML.
pub fn document_to_html(doc: &Document, config: &HtmlConfig) -> String {
    html::blocks_to_html(doc, config)
}

/// Convert an already rendered document to plain text.
pub fn document_to_text(doc: &Document) -> String {
    text::blocks_to_text(doc)
}
