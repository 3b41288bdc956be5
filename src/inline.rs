use crate::block::Span;
use crate::config::UnsupportedInline;
use crate::error::{Error, Result};
use crate::slack::{RichTextElement, TextStyle};
use crate::text::extract_text;

/// Convert the direct inline children of a paragraph into rich text elements.
///
/// Styling is flattened one level: the children of a bold, italic,
/// strikethrough or link span are reduced to plain text under that single
/// outer style. Line breaks are dropped; callers that care about them split
/// the spans first. Any other span is handled according to `policy`.
pub fn style_spans(spans: &[Span], policy: UnsupportedInline) -> Result<Vec<RichTextElement>> {
    let mut elements = Vec::with_capacity(spans.len());
    for span in spans {
        match style_span(span) {
            Some(element) => elements.push(element),
            None if matches!(span, Span::LineBreak) => {}
            None => match policy {
                UnsupportedInline::Error => return Err(Error::UnsupportedInline(span.kind())),
                UnsupportedInline::Skip => {
                    log::debug!("skipping unsupported inline node: {}", span.kind());
                }
            },
        }
    }
    Ok(elements)
}

/// The rich text element for a single span, if it has one.
pub fn style_span(span: &Span) -> Option<RichTextElement> {
    let element = match span {
        Span::Text(text) => RichTextElement::text(text.as_str()),
        Span::Bold(inner) => RichTextElement::styled(extract_text(inner), TextStyle::BOLD),
        Span::Italic(inner) => RichTextElement::styled(extract_text(inner), TextStyle::ITALIC),
        Span::Strikethrough(inner) => {
            RichTextElement::styled(extract_text(inner), TextStyle::STRIKE)
        }
        Span::Link { url, content } => RichTextElement::link(extract_text(content), url.as_str()),
        Span::LineBreak | Span::Code(_) | Span::Image { .. } | Span::Html(_) => return None,
    };
    Some(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Span {
        Span::Text(s.to_string())
    }

    fn style(spans: &[Span]) -> Vec<RichTextElement> {
        style_spans(spans, UnsupportedInline::Error).unwrap()
    }

    #[test]
    fn maps_each_kind() {
        let spans = vec![
            text("plain "),
            Span::Bold(vec![text("b")]),
            Span::Italic(vec![text("i")]),
            Span::Strikethrough(vec![text("s")]),
            Span::Link {
                url: "https://x".to_string(),
                content: vec![text("l")],
            },
        ];
        assert_eq!(
            style(&spans),
            vec![
                RichTextElement::text("plain "),
                RichTextElement::styled("b", TextStyle::BOLD),
                RichTextElement::styled("i", TextStyle::ITALIC),
                RichTextElement::styled("s", TextStyle::STRIKE),
                RichTextElement::link("l", "https://x"),
            ]
        );
    }

    #[test]
    fn nested_styles_flatten_into_outer() {
        let spans = vec![Span::Bold(vec![text("a"), Span::Italic(vec![text("b")])])];
        assert_eq!(
            style(&spans),
            vec![RichTextElement::styled("ab", TextStyle::BOLD)]
        );
    }

    #[test]
    fn bold_inside_link_is_plain_label() {
        let spans = vec![Span::Link {
            url: "https://x".to_string(),
            content: vec![Span::Bold(vec![text("go")])],
        }];
        assert_eq!(style(&spans), vec![RichTextElement::link("go", "https://x")]);
    }

    #[test]
    fn line_breaks_are_dropped() {
        let spans = vec![text("a"), Span::LineBreak, text("b")];
        assert_eq!(
            style(&spans),
            vec![RichTextElement::text("a"), RichTextElement::text("b")]
        );
    }

    #[test]
    fn unsupported_span_errors() {
        let spans = vec![text("a"), Span::Code("x".to_string())];
        let err = style_spans(&spans, UnsupportedInline::Error).unwrap_err();
        assert!(matches!(err, Error::UnsupportedInline("inline_code")));
    }

    #[test]
    fn unsupported_span_skipped() {
        let spans = vec![
            text("a"),
            Span::Html("<b>".to_string()),
            Span::Image {
                url: "i.png".to_string(),
                alt: vec![],
            },
            text("b"),
        ];
        assert_eq!(
            style_spans(&spans, UnsupportedInline::Skip).unwrap(),
            vec![RichTextElement::text("a"), RichTextElement::text("b")]
        );
    }
}
