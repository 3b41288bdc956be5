mod block;
mod config;
mod convert;
mod error;
mod inline;
mod list;
mod parser;
mod slack;
mod text;

pub use block::{Block, Document, List, ListItem, Span};
pub use config::{Config, HeaderConfig, InlineConfig, UnsupportedInline};
pub use error::{Error, Result};
pub use inline::{style_span, style_spans};
pub use list::flatten_list;
pub use slack::{
    ListStyle, Message, PlainText, RichTextElement, RichTextList, RichTextObject, RichTextSection,
    SlackBlock, TextStyle,
};
pub use text::extract_text;

/// Parse markdown text into a document tree.
pub fn parse(markdown: &str) -> Document {
    parser::parse(markdown)
}

/// Convert a parsed document to Slack blocks using default config.
pub fn convert(document: &Document) -> Result<Vec<SlackBlock>> {
    convert_with_config(document, &Config::compiled_default())
}

/// Convert a parsed document to Slack blocks with custom config.
pub fn convert_with_config(document: &Document, config: &Config) -> Result<Vec<SlackBlock>> {
    convert::blocks_to_slack(document, config)
}

/// Convert markdown to Slack blocks using default config.
pub fn markdown_to_blocks(markdown: &str) -> Result<Vec<SlackBlock>> {
    markdown_to_blocks_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to Slack blocks with custom config.
pub fn markdown_to_blocks_with_config(markdown: &str, config: &Config) -> Result<Vec<SlackBlock>> {
    let document = parse(markdown);
    convert_with_config(&document, config)
}

/// How `markdown_to_json` lays out its output.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOptions {
    /// Wrap the blocks in a `{"blocks": [...]}` message payload.
    pub payload: bool,
    pub pretty: bool,
}

/// Convert markdown to a JSON block array (or message payload).
pub fn markdown_to_json(markdown: &str, config: &Config, options: JsonOptions) -> Result<String> {
    let blocks = markdown_to_blocks_with_config(markdown, config)?;

    let json = match (options.payload, options.pretty) {
        (true, true) => serde_json::to_string_pretty(&Message::from(blocks))?,
        (true, false) => serde_json::to_string(&Message::from(blocks))?,
        (false, true) => serde_json::to_string_pretty(&blocks)?,
        (false, false) => serde_json::to_string(&blocks)?,
    };
    Ok(json)
}
