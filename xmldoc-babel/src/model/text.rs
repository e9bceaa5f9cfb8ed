//! Text runs, blocks and simple formatting elements

use super::list::ListElement;
use super::references::{parse_see, ParameterReferenceElement, TypeParameterReferenceElement};
use super::{ParseOptions, TextElement};
use crate::error::XmlDocError;
use crate::visitor::{DocumentationVisitor, Visitable};
use crate::xml::{
    block_indentation, continuation_indentation, ensure_name_is, inner_text, raw_source,
    trim_code, trim_text, with_root_element,
};
use roxmltree::Node;
use std::hash::{Hash, Hasher};

/// An ordered run of mixed text content.
///
/// Empty blocks are all equal and hash like the sentinel `0u64`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock {
    elements: Vec<TextElement>,
}

impl Hash for TextBlock {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.elements.is_empty() {
            0u64.hash(state);
        } else {
            self.elements.hash(state);
        }
    }
}

impl TextBlock {
    pub fn new(elements: Vec<TextElement>) -> Self {
        TextBlock { elements }
    }

    pub fn elements(&self) -> &[TextElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextElement> {
        self.elements.iter()
    }

    /// Parse the content of `node` (its own tag name is not checked).
    pub fn from_xml(node: Node) -> Result<Self, XmlDocError> {
        Self::from_xml_with_options(node, &ParseOptions::default())
    }

    pub fn from_xml_with_options(node: Node, options: &ParseOptions) -> Result<Self, XmlDocError> {
        Ok(TextBlock {
            elements: read_elements(node, options)?,
        })
    }

    pub fn from_xml_str(xml: &str) -> Result<Self, XmlDocError> {
        with_root_element(xml, Self::from_xml)
    }

    /// `None` when `node` has no child nodes at all, the parsed block otherwise.
    pub(crate) fn from_xml_if_not_empty(
        node: Node,
        options: &ParseOptions,
    ) -> Result<Option<Self>, XmlDocError> {
        if node.has_children() {
            Self::from_xml_with_options(node, options).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl From<Vec<TextElement>> for TextBlock {
    fn from(elements: Vec<TextElement>) -> Self {
        TextBlock::new(elements)
    }
}

impl FromIterator<TextElement> for TextBlock {
    fn from_iter<I: IntoIterator<Item = TextElement>>(iter: I) -> Self {
        TextBlock::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TextBlock {
    type Item = &'a TextElement;
    type IntoIter = std::slice::Iter<'a, TextElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Visitable for TextBlock {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_text_block(self);
    }
}

enum Content<'a, 'input> {
    Text(String),
    Element(Node<'a, 'input>),
}

/// Text and element children of `node`. Comments and processing instructions are
/// dropped and the text around them is joined into one run.
fn content_nodes<'a, 'input>(node: Node<'a, 'input>) -> Vec<Content<'a, 'input>> {
    let mut content = Vec::new();
    for child in node.children() {
        if child.is_element() {
            content.push(Content::Element(child));
        } else if let Some(text) = child.text().filter(|_| child.is_text()) {
            match content.last_mut() {
                Some(Content::Text(run)) => run.push_str(text),
                _ => content.push(Content::Text(text.to_string())),
            }
        }
    }
    content
}

fn read_elements(node: Node, options: &ParseOptions) -> Result<Vec<TextElement>, XmlDocError> {
    let content = content_nodes(node);

    let indent = match content.first() {
        Some(Content::Text(text)) => block_indentation(text),
        _ => content
            .iter()
            .find_map(|c| match c {
                Content::Text(text) => Some(continuation_indentation(text)),
                Content::Element(_) => None,
            })
            .unwrap_or(0),
    };

    let mut elements = Vec::new();
    for (position, child) in content.iter().enumerate() {
        match child {
            Content::Text(text) => {
                let first = position == 0;
                let last = position + 1 == content.len();
                let text = trim_text(text, indent, first, last);
                if !text.is_empty() {
                    elements.push(PlainTextElement::new(text).into());
                }
            }
            Content::Element(element) => elements.push(parse_element(*element, options)?),
        }
    }
    Ok(elements)
}

fn parse_element(node: Node, options: &ParseOptions) -> Result<TextElement, XmlDocError> {
    let element = match node.tag_name().name() {
        "para" => ParagraphElement::from_xml_with_options(node, options)?.into(),
        "paramref" | "typeparamref" if has_blank_name(node) => {
            tracing::debug!(
                tag = node.tag_name().name(),
                "keeping reference with a blank name"
            );
            UnrecognizedTextElement::from_xml(node).into()
        }
        "paramref" => ParameterReferenceElement::from_xml(node)?.into(),
        "typeparamref" => TypeParameterReferenceElement::from_xml(node)?.into(),
        "code" => CodeElement::from_xml(node)?.into(),
        "c" => CElement::from_xml(node)?.into(),
        "see" => parse_see(node, options)?,
        "list" => ListElement::from_xml_with_options(node, options)?.into(),
        "em" => EmphasisElement::from_xml_with_options(node, options)?.into(),
        "i" => IdiomaticElement::from_xml_with_options(node, options)?.into(),
        "b" => BoldElement::from_xml_with_options(node, options)?.into(),
        "strong" => StrongElement::from_xml_with_options(node, options)?.into(),
        "br" => LineBreakElement::from_xml(node)?.into(),
        name => {
            tracing::debug!(tag = name, "keeping unrecognized documentation element");
            UnrecognizedTextElement::from_xml(node).into()
        }
    };
    Ok(element)
}

fn has_blank_name(node: Node) -> bool {
    node.attribute("name")
        .is_some_and(|name| name.trim().is_empty())
}

/// A run of literal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlainTextElement {
    content: String,
}

impl PlainTextElement {
    pub fn new(content: impl Into<String>) -> Self {
        PlainTextElement {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Visitable for PlainTextElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_plain_text(self);
    }
}

// Elements that only wrap a block of text and differ by tag name.
macro_rules! text_wrapper_element {
    ($(#[$doc:meta])* $name:ident, $tag:literal, $visit:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name {
            text: TextBlock,
        }

        impl $name {
            pub fn new(text: TextBlock) -> Self {
                $name { text }
            }

            pub fn text(&self) -> &TextBlock {
                &self.text
            }

            pub fn from_xml(node: Node) -> Result<Self, XmlDocError> {
                Self::from_xml_with_options(node, &ParseOptions::default())
            }

            pub fn from_xml_with_options(
                node: Node,
                options: &ParseOptions,
            ) -> Result<Self, XmlDocError> {
                ensure_name_is(node, &[$tag])?;
                Ok($name::new(TextBlock::from_xml_with_options(node, options)?))
            }

            pub fn from_xml_str(xml: &str) -> Result<Self, XmlDocError> {
                with_root_element(xml, Self::from_xml)
            }
        }

        impl Visitable for $name {
            fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
                visitor.$visit(self);
            }
        }
    };
}

text_wrapper_element!(
    /// A `<para>` element.
    ParagraphElement,
    "para",
    visit_paragraph
);
text_wrapper_element!(
    /// An `<em>` element.
    EmphasisElement,
    "em",
    visit_emphasis
);
text_wrapper_element!(
    /// An `<i>` element.
    IdiomaticElement,
    "i",
    visit_idiomatic
);
text_wrapper_element!(
    /// A `<b>` element.
    BoldElement,
    "b",
    visit_bold
);
text_wrapper_element!(
    /// A `<strong>` element.
    StrongElement,
    "strong",
    visit_strong
);

/// A `<code>` block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeElement {
    content: String,
    language: Option<String>,
}

impl CodeElement {
    pub fn new(content: impl Into<String>, language: Option<String>) -> Self {
        CodeElement {
            content: content.into(),
            language,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn from_xml(node: Node) -> Result<Self, XmlDocError> {
        ensure_name_is(node, &["code"])?;
        let language = node
            .attribute("language")
            .or_else(|| node.attribute("lang"))
            .map(str::to_string);
        Ok(CodeElement::new(trim_code(&inner_text(node)), language))
    }

    pub fn from_xml_str(xml: &str) -> Result<Self, XmlDocError> {
        with_root_element(xml, Self::from_xml)
    }
}

impl Visitable for CodeElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_code(self);
    }
}

/// A `<c>` element (inline code).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CElement {
    content: String,
}

impl CElement {
    pub fn new(content: impl Into<String>) -> Self {
        CElement {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn from_xml(node: Node) -> Result<Self, XmlDocError> {
        ensure_name_is(node, &["c"])?;
        Ok(CElement::new(inner_text(node)))
    }

    pub fn from_xml_str(xml: &str) -> Result<Self, XmlDocError> {
        with_root_element(xml, Self::from_xml)
    }
}

impl Visitable for CElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_c(self);
    }
}

/// A `<br>` element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LineBreakElement;

impl LineBreakElement {
    pub fn from_xml(node: Node) -> Result<Self, XmlDocError> {
        ensure_name_is(node, &["br"])?;
        Ok(LineBreakElement)
    }
}

impl Visitable for LineBreakElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_line_break(self);
    }
}

/// An element the model has no mapping for, kept as its raw source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnrecognizedTextElement {
    name: String,
    xml: String,
}

impl UnrecognizedTextElement {
    pub fn new(name: impl Into<String>, xml: impl Into<String>) -> Self {
        UnrecognizedTextElement {
            name: name.into(),
            xml: xml.into(),
        }
    }

    /// Local name of the element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element exactly as it appeared in the source.
    pub fn xml(&self) -> &str {
        &self.xml
    }

    pub fn from_xml(node: Node) -> Self {
        UnrecognizedTextElement::new(node.tag_name().name(), raw_source(node))
    }
}

impl Visitable for UnrecognizedTextElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_unrecognized(self);
    }
}
