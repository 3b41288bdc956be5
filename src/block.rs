/// Inline content of a paragraph, heading or list item paragraph
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    Text(String),
    Bold(Vec<Span>),
    Italic(Vec<Span>),
    Strikethrough(Vec<Span>),
    Link { url: String, content: Vec<Span> },
    LineBreak,
    Code(String),
    Image { url: String, alt: Vec<Span> },
    Html(String),
}

impl Span {
    /// Stable name of the node kind, used in errors and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Span::Text(_) => "text",
            Span::Bold(_) => "strong",
            Span::Italic(_) => "emphasis",
            Span::Strikethrough(_) => "delete",
            Span::Link { .. } => "link",
            Span::LineBreak => "break",
            Span::Code(_) => "inline_code",
            Span::Image { .. } => "image",
            Span::Html(_) => "html",
        }
    }
}

/// A single list item. Its children are usually paragraphs and nested lists,
/// but any block the parser found inside the item is kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListItem {
    pub children: Vec<Block>,
}

/// A list (ordered or unordered)
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

/// Block-level elements parsed from Markdown
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading {
        level: u8,
        content: Vec<Span>,
    },
    Paragraph {
        content: Vec<Span>,
    },
    List(List),
    // Kinds the converter skips; only their position in the document is kept
    CodeBlock,
    Quote,
    Table,
    Html,
    Rule,
}

impl Block {
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::List(_) => "list",
            Block::CodeBlock => "code",
            Block::Quote => "blockquote",
            Block::Table => "table",
            Block::Html => "html",
            Block::Rule => "thematic_break",
        }
    }
}

/// A parsed markdown document: its top-level blocks in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}
