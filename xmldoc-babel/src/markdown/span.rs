//! Inline Markdown spans produced by the converter.
//!
//! Spans only describe structure; turning them into Markdown text is the job of
//! [`serialize_span`](super::serialize_span).

/// An inline unit of Markdown output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MdSpan {
    Text(MdTextSpan),
    Code(MdCodeSpan),
    Link(MdLinkSpan),
    RawMarkdown(MdRawMarkdownSpan),
    Emphasis(MdEmphasisSpan),
    Strong(MdStrongEmphasisSpan),
    Composite(MdCompositeSpan),
}

impl MdSpan {
    /// The marker used where a single span has to represent a line or paragraph break.
    pub fn line_break() -> Self {
        MdSpan::Text(MdTextSpan::new("\n"))
    }

    pub fn text(text: impl Into<String>) -> Self {
        MdSpan::Text(MdTextSpan::new(text))
    }

    pub fn code(code: impl Into<String>) -> Self {
        MdSpan::Code(MdCodeSpan::new(code))
    }

    pub fn link(text: impl Into<MdSpan>, target: impl Into<String>) -> Self {
        MdSpan::Link(MdLinkSpan::new(text, target))
    }

    pub fn raw(markdown: impl Into<String>) -> Self {
        MdSpan::RawMarkdown(MdRawMarkdownSpan::new(markdown))
    }
}

/// Literal text; special characters are escaped when serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdTextSpan {
    pub text: String,
}

impl MdTextSpan {
    pub fn new(text: impl Into<String>) -> Self {
        MdTextSpan { text: text.into() }
    }
}

/// Inline code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdCodeSpan {
    pub code: String,
}

impl MdCodeSpan {
    pub fn new(code: impl Into<String>) -> Self {
        MdCodeSpan { code: code.into() }
    }
}

/// A link with arbitrary span content as its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdLinkSpan {
    pub text: Box<MdSpan>,
    pub target: String,
}

impl MdLinkSpan {
    pub fn new(text: impl Into<MdSpan>, target: impl Into<String>) -> Self {
        MdLinkSpan {
            text: Box::new(text.into()),
            target: target.into(),
        }
    }
}

/// Markdown that is emitted as-is, without escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdRawMarkdownSpan {
    pub markdown: String,
}

impl MdRawMarkdownSpan {
    pub fn new(markdown: impl Into<String>) -> Self {
        MdRawMarkdownSpan {
            markdown: markdown.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdEmphasisSpan {
    pub text: Box<MdSpan>,
}

impl MdEmphasisSpan {
    pub fn new(text: impl Into<MdSpan>) -> Self {
        MdEmphasisSpan {
            text: Box::new(text.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MdStrongEmphasisSpan {
    pub text: Box<MdSpan>,
}

impl MdStrongEmphasisSpan {
    pub fn new(text: impl Into<MdSpan>) -> Self {
        MdStrongEmphasisSpan {
            text: Box::new(text.into()),
        }
    }
}

/// An ordered sequence of spans.
///
/// Spans can only be appended; the order is the output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MdCompositeSpan {
    spans: Vec<MdSpan>,
}

impl MdCompositeSpan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, span: impl Into<MdSpan>) {
        self.spans.push(span.into());
    }

    pub fn spans(&self) -> &[MdSpan] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn into_spans(self) -> Vec<MdSpan> {
        self.spans
    }
}

impl From<Vec<MdSpan>> for MdCompositeSpan {
    fn from(spans: Vec<MdSpan>) -> Self {
        MdCompositeSpan { spans }
    }
}

impl FromIterator<MdSpan> for MdCompositeSpan {
    fn from_iter<I: IntoIterator<Item = MdSpan>>(iter: I) -> Self {
        MdCompositeSpan {
            spans: iter.into_iter().collect(),
        }
    }
}

macro_rules! impl_into_span {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for MdSpan {
                fn from(span: $ty) -> Self {
                    MdSpan::$variant(span)
                }
            }
        )*
    };
}

impl_into_span!(
    Text(MdTextSpan),
    Code(MdCodeSpan),
    Link(MdLinkSpan),
    RawMarkdown(MdRawMarkdownSpan),
    Emphasis(MdEmphasisSpan),
    Strong(MdStrongEmphasisSpan),
    Composite(MdCompositeSpan),
);

impl From<&str> for MdSpan {
    fn from(text: &str) -> Self {
        MdSpan::text(text)
    }
}

impl From<String> for MdSpan {
    fn from(text: String) -> Self {
        MdSpan::text(text)
    }
}
