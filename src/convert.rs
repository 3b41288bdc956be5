use crate::block::{Block, Document, Span};
use crate::config::Config;
use crate::error::Result;
use crate::inline::style_spans;
use crate::list::flatten_list;
use crate::slack::{PlainText, RichTextObject, RichTextSection, SlackBlock};
use crate::text::extract_text;

/// Convert a document's top-level blocks to Slack blocks, in order.
pub fn blocks_to_slack(document: &Document, config: &Config) -> Result<Vec<SlackBlock>> {
    let mut out = Vec::new();

    for block in &document.blocks {
        match convert_block(block, config)? {
            Some(converted) => out.extend(converted),
            None => log::debug!("skipping unsupported block: {}", block.kind()),
        }
    }

    Ok(out)
}

/// The blocks emitted for one top-level node, or `None` if the node kind has
/// no Slack counterpart.
fn convert_block(block: &Block, config: &Config) -> Result<Option<Vec<SlackBlock>>> {
    let converted = match block {
        Block::Heading { content, .. } => vec![SlackBlock::Header {
            text: PlainText {
                text: extract_text(content),
                emoji: config.header.emoji,
            },
        }],
        Block::Paragraph { content } => vec![paragraph_to_slack(content, config)?],
        Block::List(list) => flatten_list(list, 0, config.inline.unsupported)?
            .into_iter()
            .map(|row| SlackBlock::RichText {
                elements: vec![RichTextObject::List(row)],
            })
            .collect(),
        Block::CodeBlock | Block::Quote | Block::Table | Block::Html | Block::Rule => {
            return Ok(None);
        }
    };
    Ok(Some(converted))
}

/// One rich text block with a section per line: the spans are split at each
/// hard line break, keeping empty runs at the edges and between breaks.
fn paragraph_to_slack(content: &[Span], config: &Config) -> Result<SlackBlock> {
    let elements = content
        .split(|span| matches!(span, Span::LineBreak))
        .map(|line| {
            let elements = style_spans(line, config.inline.unsupported)?;
            Ok(RichTextObject::Section(RichTextSection::new(elements)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SlackBlock::RichText { elements })
}
