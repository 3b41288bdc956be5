use crate::block::{Block, List, ListItem};
use crate::config::UnsupportedInline;
use crate::error::Result;
use crate::inline::style_spans;
use crate::slack::{ListStyle, RichTextList, RichTextSection};

/// Flatten a (possibly nested, possibly mixed) list into indent-tagged rows.
///
/// Each paragraph of an item becomes a row at `indent`; nested lists are
/// flattened at `indent + 1` and spliced in place. Consecutive rows with the
/// same indent are then merged into one row. Only adjacent rows merge: a
/// deeper row in between starts a new row at the outer indent.
pub fn flatten_list(
    list: &List,
    indent: usize,
    policy: UnsupportedInline,
) -> Result<Vec<RichTextList>> {
    let style = ListStyle::from_ordered(list.ordered);

    let mut rows = Vec::new();
    for item in &list.items {
        flatten_item(item, style, indent, policy, &mut rows)?;
    }

    let merged = merge_rows(rows);
    log::trace!("flattened list at indent {indent} into {} rows", merged.len());
    Ok(merged)
}

fn flatten_item(
    item: &ListItem,
    style: ListStyle,
    indent: usize,
    policy: UnsupportedInline,
    rows: &mut Vec<RichTextList>,
) -> Result<()> {
    for child in &item.children {
        match child {
            Block::Paragraph { content } => rows.push(RichTextList {
                style,
                indent,
                sections: vec![RichTextSection::new(style_spans(content, policy)?)],
            }),
            Block::List(nested) => rows.extend(flatten_list(nested, indent + 1, policy)?),
            other => log::debug!("skipping {} inside list item", other.kind()),
        }
    }
    Ok(())
}

fn merge_rows(rows: Vec<RichTextList>) -> Vec<RichTextList> {
    let mut merged: Vec<RichTextList> = Vec::with_capacity(rows.len());
    for row in rows {
        match merged.last_mut() {
            Some(last) if last.indent == row.indent => last.sections.extend(row.sections),
            _ => merged.push(row),
        }
    }
    merged
}
