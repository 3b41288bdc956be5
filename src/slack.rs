//! Output tree: Slack Block Kit blocks, serialized with their `"type"` tags.

use serde::Serialize;

/// A top-level block of a Slack message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackBlock {
    Header { text: PlainText },
    RichText { elements: Vec<RichTextObject> },
}

/// Text object carried by header blocks. Never styled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "plain_text")]
pub struct PlainText {
    pub text: String,
    pub emoji: bool,
}

/// Direct child of a rich text block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RichTextObject {
    #[serde(rename = "rich_text_section")]
    Section(RichTextSection),
    #[serde(rename = "rich_text_list")]
    List(RichTextList),
}

/// One visual line segment: an ordered run of text and link elements.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RichTextSection {
    pub elements: Vec<RichTextElement>,
}

impl RichTextSection {
    pub fn new(elements: Vec<RichTextElement>) -> Self {
        Self { elements }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextElement {
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<TextStyle>,
    },
    Link {
        text: String,
        url: String,
    },
}

impl RichTextElement {
    pub fn text(text: impl Into<String>) -> Self {
        RichTextElement::Text {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        RichTextElement::Text {
            text: text.into(),
            style: Some(style),
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        RichTextElement::Link {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// Style flags of a text run. Unset flags are left out of the JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub strike: bool,
}

impl TextStyle {
    pub const BOLD: TextStyle = TextStyle {
        bold: true,
        italic: false,
        strike: false,
    };
    pub const ITALIC: TextStyle = TextStyle {
        bold: false,
        italic: true,
        strike: false,
    };
    pub const STRIKE: TextStyle = TextStyle {
        bold: false,
        italic: false,
        strike: true,
    };
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    Bullet,
}

impl ListStyle {
    pub fn from_ordered(ordered: bool) -> Self {
        if ordered {
            ListStyle::Ordered
        } else {
            ListStyle::Bullet
        }
    }
}

/// One flattened list row. The renderer infers nesting from `indent` alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichTextList {
    pub style: ListStyle,
    pub indent: usize,
    #[serde(rename = "elements")]
    pub sections: Vec<RichTextSection>,
}

/// Message payload wrapper, as posted to the chat API.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Message {
    pub blocks: Vec<SlackBlock>,
}

impl From<Vec<SlackBlock>> for Message {
    fn from(blocks: Vec<SlackBlock>) -> Self {
        Self { blocks }
    }
}
