//! Cross-references: `<see>`, `<paramref>` and `<typeparamref>`

use super::member_id::MemberId;
use super::text::{CElement, TextBlock, UnrecognizedTextElement};
use super::{ParseOptions, SeePolicy, TextElement};
use crate::error::XmlDocError;
use crate::visitor::{DocumentationVisitor, Visitable};
use crate::xml::{ensure_name_is, non_blank_attribute, required_attribute, with_root_element};
use roxmltree::Node;

/// Route a `<see>` element to the code or URL variant.
///
/// `cref` takes precedence over `href`, blank values count as absent. `<see langword="null"/>`
/// names a language keyword and becomes inline code. An element with none of these is handled
/// according to [`ParseOptions::see_without_target`].
pub(crate) fn parse_see(node: Node, options: &ParseOptions) -> Result<TextElement, XmlDocError> {
    if non_blank_attribute(node, "cref").is_some() {
        return SeeCodeReferenceElement::from_xml_with_options(node, options).map(Into::into);
    }
    if non_blank_attribute(node, "href").is_some() {
        return SeeUrlReferenceElement::from_xml_with_options(node, options).map(Into::into);
    }
    if let Some(keyword) = non_blank_attribute(node, "langword") {
        return Ok(CElement::new(keyword.trim()).into());
    }

    match options.see_without_target {
        SeePolicy::Unrecognized => {
            tracing::debug!("<see> element without cref or href kept as unrecognized");
            Ok(UnrecognizedTextElement::from_xml(node).into())
        }
        SeePolicy::Error => Err(XmlDocError::missing_attribute("see", "cref|href")),
    }
}

/// A `<see cref="..."/>` reference to a code element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeeCodeReferenceElement {
    reference: MemberId,
    text: Option<TextBlock>,
}

impl SeeCodeReferenceElement {
    pub fn new(reference: MemberId, text: Option<TextBlock>) -> Self {
        SeeCodeReferenceElement { reference, text }
    }

    pub fn reference(&self) -> &MemberId {
        &self.reference
    }

    /// Display text overriding the reference name, if any.
    pub fn text(&self) -> Option<&TextBlock> {
        self.text.as_ref()
    }

    pub fn from_xml(node: Node) -> Result<Self, XmlDocError> {
        Self::from_xml_with_options(node, &ParseOptions::default())
    }

    pub fn from_xml_with_options(node: Node, options: &ParseOptions) -> Result<Self, XmlDocError> {
        ensure_name_is(node, &["see"])?;
        let reference = MemberId::parse(required_attribute(node, "cref")?)?;
        let text = TextBlock::from_xml_if_not_empty(node, options)?;
        Ok(SeeCodeReferenceElement::new(reference, text))
    }

    pub fn from_xml_str(xml: &str) -> Result<Self, XmlDocError> {
        with_root_element(xml, Self::from_xml)
    }
}

impl Visitable for SeeCodeReferenceElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_see_code_reference(self);
    }
}

/// A `<see href="..."/>` reference to a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeeUrlReferenceElement {
    link: String,
    text: Option<TextBlock>,
}

impl SeeUrlReferenceElement {
    pub fn new(link: impl Into<String>, text: Option<TextBlock>) -> Result<Self, XmlDocError> {
        let link = link.into();
        if link.trim().is_empty() {
            return Err(XmlDocError::invalid_argument(
                "link",
                "link must not be empty",
            ));
        }
        Ok(SeeUrlReferenceElement { link, text })
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn text(&self) -> Option<&TextBlock> {
        self.text.as_ref()
    }

    pub fn from_xml(node: Node) -> Result<Self, XmlDocError> {
        Self::from_xml_with_options(node, &ParseOptions::default())
    }

    pub fn from_xml_with_options(node: Node, options: &ParseOptions) -> Result<Self, XmlDocError> {
        ensure_name_is(node, &["see"])?;
        let link = required_attribute(node, "href")?;
        let text = TextBlock::from_xml_if_not_empty(node, options)?;
        SeeUrlReferenceElement::new(link, text)
    }

    pub fn from_xml_str(xml: &str) -> Result<Self, XmlDocError> {
        with_root_element(xml, Self::from_xml)
    }
}

impl Visitable for SeeUrlReferenceElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_see_url_reference(self);
    }
}

fn validate_name(name: String) -> Result<String, XmlDocError> {
    if name.trim().is_empty() {
        Err(XmlDocError::invalid_argument(
            "name",
            "name must not be empty",
        ))
    } else {
        Ok(name)
    }
}

/// A `<paramref name="..."/>` element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterReferenceElement {
    name: String,
}

impl ParameterReferenceElement {
    pub fn new(name: impl Into<String>) -> Result<Self, XmlDocError> {
        Ok(ParameterReferenceElement {
            name: validate_name(name.into())?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn from_xml(node: Node) -> Result<Self, XmlDocError> {
        ensure_name_is(node, &["paramref"])?;
        ParameterReferenceElement::new(required_attribute(node, "name")?)
    }

    pub fn from_xml_str(xml: &str) -> Result<Self, XmlDocError> {
        with_root_element(xml, Self::from_xml)
    }
}

impl Visitable for ParameterReferenceElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_parameter_reference(self);
    }
}

/// A `<typeparamref name="..."/>` element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeParameterReferenceElement {
    name: String,
}

impl TypeParameterReferenceElement {
    pub fn new(name: impl Into<String>) -> Result<Self, XmlDocError> {
        Ok(TypeParameterReferenceElement {
            name: validate_name(name.into())?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn from_xml(node: Node) -> Result<Self, XmlDocError> {
        ensure_name_is(node, &["typeparamref"])?;
        TypeParameterReferenceElement::new(required_attribute(node, "name")?)
    }

    pub fn from_xml_str(xml: &str) -> Result<Self, XmlDocError> {
        with_root_element(xml, Self::from_xml)
    }
}

impl Visitable for TypeParameterReferenceElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_type_parameter_reference(self);
    }
}
