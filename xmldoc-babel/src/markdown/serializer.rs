//! Markdown serialization of spans
//!
//! Spans → Comrak AST (a single paragraph) → CommonMark string. Text spans are escaped by
//! comrak; raw spans go through as inline HTML, which comrak emits verbatim.

use super::convert::convert_to_span;
use super::resolver::LinkResolver;
use super::span::MdSpan;
use crate::error::XmlDocError;
use crate::visitor::Visitable;
use comrak::nodes::{Ast, AstNode, NodeCode, NodeLink, NodeValue};
use comrak::{format_commonmark, Arena, ComrakOptions};
use serde::Deserialize;
use std::cell::RefCell;

/// How line-break markers in text spans are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineBreakStyle {
    /// A hard line break, kept by renderers.
    #[default]
    Hard,
    /// A plain newline, which renderers join into the surrounding line.
    Soft,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownOptions {
    pub line_breaks: LineBreakStyle,
}

/// Serialize a span tree to CommonMark.
///
/// Line breaks at the very start or end of the output are dropped, as is the final newline.
pub fn serialize_span(span: &MdSpan, options: &MarkdownOptions) -> Result<String, XmlDocError> {
    let arena = Arena::new();
    let root = new_node(&arena, NodeValue::Document);
    let paragraph = new_node(&arena, NodeValue::Paragraph);
    root.append(paragraph);

    append_span(&arena, paragraph, span, options);
    trim_breaks(paragraph);

    let mut output = Vec::new();
    format_commonmark(root, &default_comrak_options(), &mut output)
        .map_err(|e| XmlDocError::Serialization(format!("Comrak serialization failed: {e}")))?;
    let markdown = String::from_utf8(output)
        .map_err(|e| XmlDocError::Serialization(format!("UTF-8 conversion failed: {e}")))?;

    Ok(markdown.trim_end().to_string())
}

/// Convert a text node and serialize the result in one go.
pub fn text_to_markdown<N: Visitable + ?Sized>(
    node: &N,
    resolver: &dyn LinkResolver,
    options: &MarkdownOptions,
) -> Result<String, XmlDocError> {
    let span = MdSpan::Composite(convert_to_span(node, resolver));
    serialize_span(&span, options)
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    // Raw spans are emitted as inline HTML
    options.render.unsafe_ = true;
    options
}

fn new_node<'a>(arena: &'a Arena<AstNode<'a>>, value: NodeValue) -> &'a AstNode<'a> {
    arena.alloc(AstNode::new(RefCell::new(Ast::new(value, (0, 0).into()))))
}

fn append_span<'a>(
    arena: &'a Arena<AstNode<'a>>,
    parent: &'a AstNode<'a>,
    span: &MdSpan,
    options: &MarkdownOptions,
) {
    match span {
        MdSpan::Text(text) => {
            for (i, line) in text.text.split('\n').enumerate() {
                if i > 0 {
                    parent.append(new_node(arena, line_break(options)));
                }
                let line = line.strip_suffix('\r').unwrap_or(line);
                if !line.is_empty() {
                    parent.append(new_node(arena, NodeValue::Text(line.to_string())));
                }
            }
        }
        MdSpan::Code(code) => {
            parent.append(new_node(
                arena,
                NodeValue::Code(NodeCode {
                    num_backticks: backticks_for(&code.code),
                    literal: code.code.clone(),
                }),
            ));
        }
        MdSpan::Link(link) => {
            let node = new_node(
                arena,
                NodeValue::Link(NodeLink {
                    url: link.target.clone(),
                    title: String::new(),
                }),
            );
            parent.append(node);
            append_span(arena, node, &link.text, options);
        }
        MdSpan::RawMarkdown(raw) => {
            parent.append(new_node(arena, NodeValue::HtmlInline(raw.markdown.clone())));
        }
        MdSpan::Emphasis(emphasis) => {
            append_wrapped(arena, parent, NodeValue::Emph, &emphasis.text, options);
        }
        MdSpan::Strong(strong) => {
            append_wrapped(arena, parent, NodeValue::Strong, &strong.text, options);
        }
        MdSpan::Composite(composite) => {
            for child in composite.spans() {
                append_span(arena, parent, child, options);
            }
        }
    }
}

fn append_wrapped<'a>(
    arena: &'a Arena<AstNode<'a>>,
    parent: &'a AstNode<'a>,
    value: NodeValue,
    content: &MdSpan,
    options: &MarkdownOptions,
) {
    let node = new_node(arena, value);
    append_span(arena, node, content, options);
    // `****` would read as a thematic break
    if node.first_child().is_some() {
        parent.append(node);
    }
}

fn line_break(options: &MarkdownOptions) -> NodeValue {
    match options.line_breaks {
        LineBreakStyle::Hard => NodeValue::LineBreak,
        LineBreakStyle::Soft => NodeValue::SoftBreak,
    }
}

fn is_break(node: &AstNode<'_>) -> bool {
    matches!(
        node.data.borrow().value,
        NodeValue::LineBreak | NodeValue::SoftBreak
    )
}

fn trim_breaks<'a>(paragraph: &'a AstNode<'a>) {
    while let Some(first) = paragraph.first_child().filter(|n| is_break(n)) {
        first.detach();
    }
    while let Some(last) = paragraph.last_child().filter(|n| is_break(n)) {
        last.detach();
    }
}

/// One more backtick than the longest run inside the code.
fn backticks_for(code: &str) -> usize {
    let longest = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    longest + 1
}
