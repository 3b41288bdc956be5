use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::block::{Block, Document, List, ListItem, Span};

/// Strip YAML frontmatter from the beginning of markdown content.
///
/// Both fences must be `---` lines of their own and the YAML must start right
/// after the opening fence; anything else (a leading thematic break, say) is
/// left for the markdown parser.
fn strip_frontmatter(markdown: &str) -> &str {
    // Keep the opening fence's newline so an empty block closes at offset 0
    let Some(fenced) = markdown.strip_prefix("---").filter(|rest| rest.starts_with('\n')) else {
        return markdown;
    };
    if fenced[1..].starts_with('\n') {
        return markdown;
    }

    let mut offset = 0;
    while let Some(found) = fenced[offset..].find("\n---") {
        let close_end = offset + found + 4;
        let after_close = &fenced[close_end..];
        if after_close.is_empty() {
            return after_close;
        }
        if let Some(after_frontmatter) = after_close.strip_prefix('\n') {
            return after_frontmatter.trim_start_matches('\n');
        }
        offset = close_end;
    }
    markdown
}

/// Parse markdown text into a document tree
pub fn parse(markdown: &str) -> Document {
    let markdown = strip_frontmatter(markdown);
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    let parser = Parser::new_ext(markdown, options);
    let mut blocks = Vec::new();
    let mut state = ParseState::default();

    for event in parser {
        process_event(event, &mut state, &mut blocks);
    }

    Document { blocks }
}

#[derive(Default)]
struct ParseState {
    // Current inline content being built
    spans: Vec<Span>,
    // Open inline containers with the content built before each was opened
    span_stack: Vec<(InlineKind, Vec<Span>)>,

    // Current heading level (if in a heading)
    heading_level: Option<u8>,

    // Code blocks, HTML blocks and tables are skipped: their text is dropped
    in_code_block: bool,
    in_html_block: bool,
    in_table: bool,

    // Open lists, items and block quotes, innermost last
    containers: Vec<Container>,
}

enum InlineKind {
    Bold,
    Italic,
    Strikethrough,
    Link { url: String },
    Image { url: String },
}

enum Container {
    List { ordered: bool, items: Vec<ListItem> },
    Item { children: Vec<Block> },
    Quote,
}

impl ParseState {
    /// Add a finished block to the innermost item or quote, or to the document.
    fn push_block(&mut self, block: Block, blocks: &mut Vec<Block>) {
        match self.containers.last_mut() {
            Some(Container::Item { children }) => children.push(block),
            // Quote content has no Slack counterpart
            Some(Container::Quote) => {}
            // Blocks never open directly inside a list
            Some(Container::List { .. }) | None => blocks.push(block),
        }
    }

    /// Tight list items have no paragraph events, so their text collects
    /// directly in `spans`. Wrap it in a paragraph of its own.
    fn flush_tight_item(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        if let Some(Container::Item { children }) = self.containers.last_mut() {
            let content = std::mem::take(&mut self.spans);
            children.push(Block::Paragraph { content });
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(Span::Text(last)) = self.spans.last_mut() {
            last.push_str(text);
        } else {
            self.spans.push(Span::Text(text.to_string()));
        }
    }

    fn open_inline(&mut self, kind: InlineKind) {
        let outer = std::mem::take(&mut self.spans);
        self.span_stack.push((kind, outer));
    }

    fn close_inline(&mut self) {
        let inner = std::mem::take(&mut self.spans);
        if let Some((kind, mut parent)) = self.span_stack.pop() {
            parent.push(match kind {
                InlineKind::Bold => Span::Bold(inner),
                InlineKind::Italic => Span::Italic(inner),
                InlineKind::Strikethrough => Span::Strikethrough(inner),
                InlineKind::Link { url } => Span::Link {
                    url,
                    content: inner,
                },
                InlineKind::Image { url } => Span::Image { url, alt: inner },
            });
            self.spans = parent;
        }
    }
}

fn process_event(event: Event, state: &mut ParseState, blocks: &mut Vec<Block>) {
    match event {
        // Headings
        Event::Start(Tag::Heading { level, .. }) => {
            state.flush_tight_item();
            state.heading_level = Some(heading_level_to_u8(level));
        }
        Event::End(TagEnd::Heading(_)) => {
            if let Some(level) = state.heading_level.take() {
                let content = std::mem::take(&mut state.spans);
                state.push_block(Block::Heading { level, content }, blocks);
            }
        }

        // Paragraphs
        Event::Start(Tag::Paragraph) => {
            state.flush_tight_item();
        }
        Event::End(TagEnd::Paragraph) => {
            let content = std::mem::take(&mut state.spans);
            // Paragraphs in table cells are handled by the cell
            if !content.is_empty() && !state.in_table {
                state.push_block(Block::Paragraph { content }, blocks);
            }
        }

        // Text content
        Event::Text(text) => {
            if !state.in_code_block {
                state.push_text(&text);
            }
        }

        // Inline code
        Event::Code(code) => {
            state.spans.push(Span::Code(code.into_string()));
        }

        // Inline formatting
        Event::Start(Tag::Strong) => state.open_inline(InlineKind::Bold),
        Event::Start(Tag::Emphasis) => state.open_inline(InlineKind::Italic),
        Event::Start(Tag::Strikethrough) => state.open_inline(InlineKind::Strikethrough),
        Event::Start(Tag::Link { dest_url, .. }) => state.open_inline(InlineKind::Link {
            url: dest_url.into_string(),
        }),
        Event::Start(Tag::Image { dest_url, .. }) => state.open_inline(InlineKind::Image {
            url: dest_url.into_string(),
        }),
        Event::End(TagEnd::Strong)
        | Event::End(TagEnd::Emphasis)
        | Event::End(TagEnd::Strikethrough)
        | Event::End(TagEnd::Link)
        | Event::End(TagEnd::Image) => state.close_inline(),

        // Inline HTML
        Event::InlineHtml(html) => {
            state.spans.push(Span::Html(html.into_string()));
        }

        // Code blocks
        Event::Start(Tag::CodeBlock(_)) => {
            state.flush_tight_item();
            state.in_code_block = true;
        }
        Event::End(TagEnd::CodeBlock) => {
            state.in_code_block = false;
            state.push_block(Block::CodeBlock, blocks);
        }

        // HTML blocks
        Event::Start(Tag::HtmlBlock) => {
            state.flush_tight_item();
            state.in_html_block = true;
        }
        Event::Html(html) => {
            if !state.in_html_block {
                state.spans.push(Span::Html(html.into_string()));
            }
        }
        Event::End(TagEnd::HtmlBlock) => {
            state.in_html_block = false;
            state.push_block(Block::Html, blocks);
        }

        // Block quotes
        Event::Start(Tag::BlockQuote(_)) => {
            state.flush_tight_item();
            state.containers.push(Container::Quote);
        }
        Event::End(TagEnd::BlockQuote(_)) => {
            if let Some(Container::Quote) = state.containers.pop() {
                state.push_block(Block::Quote, blocks);
            }
        }

        // Lists
        Event::Start(Tag::List(first_item)) => {
            state.flush_tight_item();
            state.containers.push(Container::List {
                ordered: first_item.is_some(),
                items: Vec::new(),
            });
        }
        Event::End(TagEnd::List(_)) => {
            if let Some(Container::List { ordered, items }) = state.containers.pop() {
                state.push_block(Block::List(List { ordered, items }), blocks);
            }
        }

        Event::Start(Tag::Item) => {
            state.containers.push(Container::Item {
                children: Vec::new(),
            });
        }
        Event::End(TagEnd::Item) => {
            state.flush_tight_item();
            if let Some(Container::Item { children }) = state.containers.pop() {
                if let Some(Container::List { items, .. }) = state.containers.last_mut() {
                    items.push(ListItem { children });
                }
            }
        }

        // Tables
        Event::Start(Tag::Table(_)) => {
            state.flush_tight_item();
            state.in_table = true;
        }
        Event::End(TagEnd::Table) => {
            state.in_table = false;
            state.push_block(Block::Table, blocks);
        }
        Event::End(TagEnd::TableCell) => {
            state.spans.clear();
        }

        // Horizontal rule
        Event::Rule => {
            state.flush_tight_item();
            state.push_block(Block::Rule, blocks);
        }

        // Soft/hard breaks
        Event::SoftBreak => {
            state.push_text(" ");
        }
        Event::HardBreak => {
            state.spans.push(Span::LineBreak);
        }

        // Ignore other events (task list markers, footnotes, math, metadata)
        _ => {}
    }
}

fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
