//! Documentation text → Markdown spans
//!
//! [`ConvertToSpanVisitor`] flattens a tree of text elements into an
//! [`MdCompositeSpan`]. Inline containers whose content has to end up inside a single span
//! (link text, emphasis) are collected in a nested frame that is popped and wrapped once the
//! container has been walked.
//!
//! Only text content is supported. Block-level constructs (lists, code blocks) and
//! declaration nodes need layout decisions that belong to the caller, and handing one to the
//! converter is a programming error: it panics instead of producing partial output.

use super::resolver::{LinkResolver, NoLinkResolver};
use super::span::{
    MdCodeSpan, MdCompositeSpan, MdEmphasisSpan, MdLinkSpan, MdRawMarkdownSpan, MdSpan,
    MdStrongEmphasisSpan, MdTextSpan,
};
use crate::model::{
    BoldElement, CElement, CodeElement, DocumentationFile, EmphasisElement, EventMemberElement,
    ExceptionElement, FieldMemberElement, IdiomaticElement, LineBreakElement, ListElement,
    ListItemElement, MethodMemberElement, NamespaceMemberElement, ParagraphElement,
    ParameterElement, ParameterReferenceElement, PlainTextElement, PropertyMemberElement,
    SeeAlsoCodeReferenceElement, SeeAlsoUrlReferenceElement, SeeCodeReferenceElement,
    SeeUrlReferenceElement, StrongElement, TextBlock, TypeMemberElement, TypeParameterElement,
    TypeParameterReferenceElement, UnrecognizedTextElement,
};
use crate::visitor::{walk_paragraph, DocumentationVisitor, Visitable};

static NO_LINKS: NoLinkResolver = NoLinkResolver;

/// Convert a text node with a fresh visitor.
pub fn convert_to_span<N: Visitable + ?Sized>(
    node: &N,
    resolver: &dyn LinkResolver,
) -> MdCompositeSpan {
    let mut visitor = ConvertToSpanVisitor::with_resolver(resolver);
    node.accept(&mut visitor);
    visitor.into_result()
}

/// Accumulates the spans of the visited text in a stack of composite frames.
///
/// The bottom frame holds the result. A visitor converts one tree at a time; call
/// [`reset`](Self::reset) before reusing it.
pub struct ConvertToSpanVisitor<'r> {
    root: MdCompositeSpan,
    nested: Vec<MdCompositeSpan>,
    resolver: &'r dyn LinkResolver,
}

impl ConvertToSpanVisitor<'static> {
    /// A visitor that renders code references without links.
    pub fn new() -> Self {
        ConvertToSpanVisitor::with_resolver(&NO_LINKS)
    }
}

impl Default for ConvertToSpanVisitor<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> ConvertToSpanVisitor<'r> {
    pub fn with_resolver(resolver: &'r dyn LinkResolver) -> Self {
        ConvertToSpanVisitor {
            root: MdCompositeSpan::new(),
            nested: Vec::new(),
            resolver,
        }
    }

    /// The spans collected so far.
    ///
    /// # Panics
    ///
    /// If a nested frame is still open.
    pub fn result(&self) -> &MdCompositeSpan {
        self.assert_balanced();
        &self.root
    }

    /// Like [`result`](Self::result), consuming the visitor.
    pub fn into_result(self) -> MdCompositeSpan {
        self.assert_balanced();
        self.root
    }

    /// Discard all collected spans.
    pub fn reset(&mut self) {
        self.root = MdCompositeSpan::new();
        self.nested.clear();
    }

    pub fn begin_nested_span(&mut self) {
        self.nested.push(MdCompositeSpan::new());
        tracing::trace!(depth = self.nested.len(), "begin nested span");
    }

    /// Close the innermost frame opened by [`begin_nested_span`](Self::begin_nested_span).
    ///
    /// # Panics
    ///
    /// If no nested frame is open.
    pub fn end_nested_span(&mut self) -> MdCompositeSpan {
        let Some(frame) = self.nested.pop() else {
            panic!("end_nested_span called without a matching begin_nested_span");
        };
        tracing::trace!(depth = self.nested.len(), "end nested span");
        frame
    }

    fn add(&mut self, span: impl Into<MdSpan>) {
        self.nested.last_mut().unwrap_or(&mut self.root).add(span);
    }

    fn convert_nested(&mut self, text: &TextBlock) -> MdCompositeSpan {
        self.begin_nested_span();
        self.visit_text_block(text);
        self.end_nested_span()
    }

    fn assert_balanced(&self) {
        assert!(
            self.nested.is_empty(),
            "ConvertToSpanVisitor has {} unclosed nested span(s)",
            self.nested.len()
        );
    }
}

fn unsupported(kind: &str) -> ! {
    panic!("ConvertToSpanVisitor can only convert text elements, got {kind}");
}

impl DocumentationVisitor for ConvertToSpanVisitor<'_> {
    fn visit_documentation_file(&mut self, _file: &DocumentationFile) {
        unsupported("documentation file");
    }

    fn visit_namespace(&mut self, _member: &NamespaceMemberElement) {
        unsupported("namespace member");
    }

    fn visit_type(&mut self, _member: &TypeMemberElement) {
        unsupported("type member");
    }

    fn visit_field(&mut self, _member: &FieldMemberElement) {
        unsupported("field member");
    }

    fn visit_property(&mut self, _member: &PropertyMemberElement) {
        unsupported("property member");
    }

    fn visit_method(&mut self, _member: &MethodMemberElement) {
        unsupported("method member");
    }

    fn visit_event(&mut self, _member: &EventMemberElement) {
        unsupported("event member");
    }

    fn visit_parameter(&mut self, _param: &ParameterElement) {
        unsupported("parameter");
    }

    fn visit_type_parameter(&mut self, _type_param: &TypeParameterElement) {
        unsupported("type parameter");
    }

    fn visit_exception(&mut self, _exception: &ExceptionElement) {
        unsupported("exception");
    }

    fn visit_see_also_code_reference(&mut self, _see_also: &SeeAlsoCodeReferenceElement) {
        unsupported("seealso");
    }

    fn visit_see_also_url_reference(&mut self, _see_also: &SeeAlsoUrlReferenceElement) {
        unsupported("seealso");
    }

    fn visit_list(&mut self, _list: &ListElement) {
        unsupported("list");
    }

    fn visit_list_item(&mut self, _item: &ListItemElement) {
        unsupported("list item");
    }

    fn visit_code(&mut self, _code: &CodeElement) {
        unsupported("code block");
    }

    fn visit_plain_text(&mut self, plain_text: &PlainTextElement) {
        self.add(MdTextSpan::new(plain_text.content()));
    }

    fn visit_c(&mut self, c: &CElement) {
        if !c.content().is_empty() {
            self.add(MdCodeSpan::new(c.content()));
        }
    }

    fn visit_paragraph(&mut self, para: &ParagraphElement) {
        self.add(MdSpan::line_break());
        walk_paragraph(self, para);
    }

    fn visit_parameter_reference(&mut self, param_ref: &ParameterReferenceElement) {
        self.add(MdCodeSpan::new(param_ref.name()));
    }

    fn visit_type_parameter_reference(&mut self, type_param_ref: &TypeParameterReferenceElement) {
        self.add(MdCodeSpan::new(type_param_ref.name()));
    }

    fn visit_see_code_reference(&mut self, see: &SeeCodeReferenceElement) {
        let text: MdSpan = match see.text() {
            Some(text) => self.convert_nested(text).into(),
            None => MdCodeSpan::new(see.reference().name()).into(),
        };
        match self.resolver.resolve(see.reference()) {
            Some(target) => self.add(MdLinkSpan::new(text, target)),
            None => self.add(text),
        }
    }

    fn visit_see_url_reference(&mut self, see: &SeeUrlReferenceElement) {
        let text: MdSpan = match see.text() {
            Some(text) => self.convert_nested(text).into(),
            None => MdRawMarkdownSpan::new(see.link()).into(),
        };
        self.add(MdLinkSpan::new(text, see.link()));
    }

    fn visit_emphasis(&mut self, emphasis: &EmphasisElement) {
        let text = self.convert_nested(emphasis.text());
        self.add(MdEmphasisSpan::new(text));
    }

    fn visit_idiomatic(&mut self, idiomatic: &IdiomaticElement) {
        let text = self.convert_nested(idiomatic.text());
        self.add(MdEmphasisSpan::new(text));
    }

    fn visit_bold(&mut self, bold: &BoldElement) {
        let text = self.convert_nested(bold.text());
        self.add(MdStrongEmphasisSpan::new(text));
    }

    fn visit_strong(&mut self, strong: &StrongElement) {
        let text = self.convert_nested(strong.text());
        self.add(MdStrongEmphasisSpan::new(text));
    }

    fn visit_line_break(&mut self, _line_break: &LineBreakElement) {
        self.add(MdSpan::line_break());
    }

    fn visit_unrecognized(&mut self, element: &UnrecognizedTextElement) {
        tracing::debug!(element = element.name(), "skipping unrecognized element");
    }
}
