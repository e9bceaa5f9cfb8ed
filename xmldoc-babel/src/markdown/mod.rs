//! Markdown rendering of documentation text
//!
//! Conversion happens in two steps:
//!
//! 1. [`ConvertToSpanVisitor`] walks text elements and produces an [`MdCompositeSpan`], an
//!    inline tree of text, code, links and emphasis. Code references are turned into links
//!    by a [`LinkResolver`] supplied by the caller.
//! 2. [`serialize_span`] writes the span tree as CommonMark using comrak.
//!
//! [`text_to_markdown`] runs both steps.

mod convert;
mod resolver;
mod serializer;
mod span;

pub use convert::{convert_to_span, ConvertToSpanVisitor};
pub use resolver::{LinkMap, LinkResolver, NoLinkResolver};
pub use serializer::{serialize_span, text_to_markdown, LineBreakStyle, MarkdownOptions};
pub use span::{
    MdCodeSpan, MdCompositeSpan, MdEmphasisSpan, MdLinkSpan, MdRawMarkdownSpan, MdSpan,
    MdStrongEmphasisSpan, MdTextSpan,
};
