//! Typed model of XML documentation comments.
//!
//! The model is built bottom-up from a `roxmltree` element tree and is immutable afterwards.
//! Text content is represented by the closed [`TextElement`] sum type; declaration-level
//! content (members, parameters, exceptions, ...) lives in [`members`].
//!
//! Element Mapping Table
//!
//! | XML element        | Model type                        |
//! |--------------------|-----------------------------------|
//! | text               | [`PlainTextElement`]              |
//! | `<para>`           | [`ParagraphElement`]              |
//! | `<code>`           | [`CodeElement`]                   |
//! | `<c>`              | [`CElement`]                      |
//! | `<see cref>`       | [`SeeCodeReferenceElement`]       |
//! | `<see href>`       | [`SeeUrlReferenceElement`]        |
//! | `<paramref>`       | [`ParameterReferenceElement`]     |
//! | `<typeparamref>`   | [`TypeParameterReferenceElement`] |
//! | `<list>`           | [`ListElement`]                   |
//! | `<listheader>`     | [`ListItemElement`]               |
//! | `<item>`           | [`ListItemElement`]               |
//! | `<em>`             | [`EmphasisElement`]               |
//! | `<i>`              | [`IdiomaticElement`]              |
//! | `<b>`              | [`BoldElement`]                   |
//! | `<strong>`         | [`StrongElement`]                 |
//! | `<br>`             | [`LineBreakElement`]              |
//! | anything else      | [`UnrecognizedTextElement`]       |
//!
//! All types implement structural equality and hashing: two values are equal when their
//! content is equal, recursively, and order matters for sequences.

mod list;
pub mod member_id;
pub mod members;
mod references;
mod text;

pub use list::{ListElement, ListItemElement, ListType};
pub use member_id::{MemberId, MemberKind};
pub use members::{
    DocumentationFile, EventMemberElement, ExceptionElement, FieldMemberElement, MemberDocs,
    MemberElement, MethodMemberElement, NamespaceMemberElement, ParameterElement,
    PropertyMemberElement, SeeAlsoCodeReferenceElement, SeeAlsoElement,
    SeeAlsoUrlReferenceElement, TypeMemberElement, TypeParameterElement,
};
pub use references::{
    ParameterReferenceElement, SeeCodeReferenceElement, SeeUrlReferenceElement,
    TypeParameterReferenceElement,
};
pub use text::{
    BoldElement, CElement, CodeElement, EmphasisElement, IdiomaticElement, LineBreakElement,
    ParagraphElement, PlainTextElement, StrongElement, TextBlock, UnrecognizedTextElement,
};

use crate::visitor::{DocumentationVisitor, Visitable};
use serde::Deserialize;

/// How a `<see>` element without `cref` and `href` attributes is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeePolicy {
    /// Keep the element as an [`UnrecognizedTextElement`]
    #[default]
    Unrecognized,
    /// Fail with [`XmlDocError::MissingAttribute`](crate::XmlDocError::MissingAttribute)
    Error,
}

/// Knobs for building the model from XML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub see_without_target: SeePolicy,
}

/// A node of documentation text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TextElement {
    PlainText(PlainTextElement),
    Paragraph(ParagraphElement),
    Code(CodeElement),
    C(CElement),
    SeeCodeReference(SeeCodeReferenceElement),
    SeeUrlReference(SeeUrlReferenceElement),
    ParameterReference(ParameterReferenceElement),
    TypeParameterReference(TypeParameterReferenceElement),
    List(ListElement),
    ListItem(ListItemElement),
    Block(TextBlock),
    Emphasis(EmphasisElement),
    Idiomatic(IdiomaticElement),
    Bold(BoldElement),
    Strong(StrongElement),
    LineBreak(LineBreakElement),
    Unrecognized(UnrecognizedTextElement),
}

impl Visitable for TextElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            TextElement::PlainText(e) => visitor.visit_plain_text(e),
            TextElement::Paragraph(e) => visitor.visit_paragraph(e),
            TextElement::Code(e) => visitor.visit_code(e),
            TextElement::C(e) => visitor.visit_c(e),
            TextElement::SeeCodeReference(e) => visitor.visit_see_code_reference(e),
            TextElement::SeeUrlReference(e) => visitor.visit_see_url_reference(e),
            TextElement::ParameterReference(e) => visitor.visit_parameter_reference(e),
            TextElement::TypeParameterReference(e) => visitor.visit_type_parameter_reference(e),
            TextElement::List(e) => visitor.visit_list(e),
            TextElement::ListItem(e) => visitor.visit_list_item(e),
            TextElement::Block(e) => visitor.visit_text_block(e),
            TextElement::Emphasis(e) => visitor.visit_emphasis(e),
            TextElement::Idiomatic(e) => visitor.visit_idiomatic(e),
            TextElement::Bold(e) => visitor.visit_bold(e),
            TextElement::Strong(e) => visitor.visit_strong(e),
            TextElement::LineBreak(e) => visitor.visit_line_break(e),
            TextElement::Unrecognized(e) => visitor.visit_unrecognized(e),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for TextElement {
                fn from(value: $ty) -> Self {
                    TextElement::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    PlainText(PlainTextElement),
    Paragraph(ParagraphElement),
    Code(CodeElement),
    C(CElement),
    SeeCodeReference(SeeCodeReferenceElement),
    SeeUrlReference(SeeUrlReferenceElement),
    ParameterReference(ParameterReferenceElement),
    TypeParameterReference(TypeParameterReferenceElement),
    List(ListElement),
    ListItem(ListItemElement),
    Block(TextBlock),
    Emphasis(EmphasisElement),
    Idiomatic(IdiomaticElement),
    Bold(BoldElement),
    Strong(StrongElement),
    LineBreak(LineBreakElement),
    Unrecognized(UnrecognizedTextElement),
);
