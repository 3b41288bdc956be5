use crate::block::Span;

/// Flatten inline spans to their plain text, dropping all styling.
///
/// Text leaves are concatenated depth-first, descending through bold, italic,
/// strikethrough and link spans (a link contributes its label, never its URL).
/// Every other span contributes nothing.
pub fn extract_text(spans: &[Span]) -> String {
    let mut out = String::new();
    push_text(spans, &mut out);
    out
}

fn push_text(spans: &[Span], out: &mut String) {
    for span in spans {
        match span {
            Span::Text(text) => out.push_str(text),
            Span::Bold(inner) | Span::Italic(inner) | Span::Strikethrough(inner) => {
                push_text(inner, out)
            }
            Span::Link { content, .. } => push_text(content, out),
            Span::LineBreak | Span::Code(_) | Span::Image { .. } | Span::Html(_) => {}
        }
    }
}
