//! Declaration-level documentation: the `<doc>` file, its members and their sections.
//!
//!     <doc>
//!         <assembly><name>Lib</name></assembly>
//!         <members>
//!             <member name="M:Lib.Widget.Resize(System.Int32)">
//!                 <summary>...</summary>
//!                 <param name="width">...</param>
//!                 <returns>...</returns>
//!                 <exception cref="T:System.ArgumentException">...</exception>
//!                 <seealso cref="T:Lib.Widget"/>
//!             </member>
//!         </members>
//!     </doc>
//!
//! Each section is optional and parsed into a [`TextBlock`]. The member kind comes from the
//! prefix of the `name` attribute (see [`MemberId`]).

use super::member_id::{MemberId, MemberKind};
use super::text::TextBlock;
use super::ParseOptions;
use crate::error::XmlDocError;
use crate::visitor::{DocumentationVisitor, Visitable};
use crate::xml::{
    child_element, ensure_name_is, inner_text, non_blank_attribute, required_attribute,
    with_root_element,
};
use roxmltree::Node;

fn section(
    node: Node,
    name: &str,
    options: &ParseOptions,
) -> Result<Option<TextBlock>, XmlDocError> {
    child_element(node, name)
        .map(|n| TextBlock::from_xml_with_options(n, options))
        .transpose()
}

fn children_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

/// The root of an XML documentation file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DocumentationFile {
    assembly_name: Option<String>,
    members: Vec<MemberElement>,
}

impl DocumentationFile {
    pub fn new(assembly_name: Option<String>, members: Vec<MemberElement>) -> Self {
        DocumentationFile {
            assembly_name,
            members,
        }
    }

    pub fn assembly_name(&self) -> Option<&str> {
        self.assembly_name.as_deref()
    }

    pub fn members(&self) -> &[MemberElement] {
        &self.members
    }

    pub fn from_xml(node: Node) -> Result<Self, XmlDocError> {
        Self::from_xml_with_options(node, &ParseOptions::default())
    }

    /// Parse a `<doc>` element.
    ///
    /// Members whose id has no known kind (for example `!:` ids) are skipped.
    pub fn from_xml_with_options(node: Node, options: &ParseOptions) -> Result<Self, XmlDocError> {
        ensure_name_is(node, &["doc"])?;

        let assembly_name = child_element(node, "assembly")
            .and_then(|assembly| child_element(assembly, "name"))
            .map(|name| inner_text(name).trim().to_string())
            .filter(|name| !name.is_empty());

        let mut members = Vec::new();
        if let Some(members_node) = child_element(node, "members") {
            for member in children_named(members_node, "member") {
                match MemberElement::from_xml_with_options(member, options) {
                    Ok(member) => members.push(member),
                    Err(XmlDocError::UnknownMemberKind(id)) => {
                        tracing::warn!(id = %id, "skipping member with unknown kind");
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        Ok(DocumentationFile::new(assembly_name, members))
    }

    pub fn from_xml_str(xml: &str) -> Result<Self, XmlDocError> {
        with_root_element(xml, Self::from_xml)
    }
}

impl Visitable for DocumentationFile {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_documentation_file(self);
    }
}

/// Sections every member can have.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MemberDocs {
    pub summary: Option<TextBlock>,
    pub remarks: Option<TextBlock>,
    pub example: Option<TextBlock>,
    pub see_also: Vec<SeeAlsoElement>,
}

impl MemberDocs {
    fn from_xml(node: Node, options: &ParseOptions) -> Result<Self, XmlDocError> {
        let mut see_also = Vec::new();
        for entry in children_named(node, "seealso") {
            if let Some(entry) = SeeAlsoElement::from_xml(entry, options)? {
                see_also.push(entry);
            }
        }

        Ok(MemberDocs {
            summary: section(node, "summary", options)?,
            remarks: section(node, "remarks", options)?,
            example: section(node, "example", options)?,
            see_also,
        })
    }
}

/// A documented member, by kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberElement {
    Namespace(NamespaceMemberElement),
    Type(TypeMemberElement),
    Field(FieldMemberElement),
    Property(PropertyMemberElement),
    Method(MethodMemberElement),
    Event(EventMemberElement),
}

impl MemberElement {
    pub fn id(&self) -> &MemberId {
        match self {
            MemberElement::Namespace(m) => &m.id,
            MemberElement::Type(m) => &m.id,
            MemberElement::Field(m) => &m.id,
            MemberElement::Property(m) => &m.id,
            MemberElement::Method(m) => &m.id,
            MemberElement::Event(m) => &m.id,
        }
    }

    pub fn docs(&self) -> &MemberDocs {
        match self {
            MemberElement::Namespace(m) => &m.docs,
            MemberElement::Type(m) => &m.docs,
            MemberElement::Field(m) => &m.docs,
            MemberElement::Property(m) => &m.docs,
            MemberElement::Method(m) => &m.docs,
            MemberElement::Event(m) => &m.docs,
        }
    }

    pub fn from_xml(node: Node) -> Result<Self, XmlDocError> {
        Self::from_xml_with_options(node, &ParseOptions::default())
    }

    /// Parse a `<member>` element; the kind is taken from the `name` attribute.
    pub fn from_xml_with_options(node: Node, options: &ParseOptions) -> Result<Self, XmlDocError> {
        ensure_name_is(node, &["member"])?;
        let raw_id = required_attribute(node, "name")?;
        let id = MemberId::parse(raw_id)?;
        let docs = MemberDocs::from_xml(node, options)?;

        let member = match id.kind() {
            MemberKind::Namespace => MemberElement::Namespace(NamespaceMemberElement { id, docs }),
            MemberKind::Type => MemberElement::Type(TypeMemberElement {
                id,
                docs,
                type_parameters: type_parameters(node, options)?,
            }),
            MemberKind::Field => MemberElement::Field(FieldMemberElement {
                id,
                docs,
                value: section(node, "value", options)?,
            }),
            MemberKind::Property => MemberElement::Property(PropertyMemberElement {
                id,
                docs,
                value: section(node, "value", options)?,
                exceptions: exceptions(node, options)?,
            }),
            MemberKind::Method => MemberElement::Method(MethodMemberElement {
                id,
                docs,
                parameters: parameters(node, options)?,
                type_parameters: type_parameters(node, options)?,
                returns: section(node, "returns", options)?,
                exceptions: exceptions(node, options)?,
            }),
            MemberKind::Event => MemberElement::Event(EventMemberElement {
                id,
                docs,
                exceptions: exceptions(node, options)?,
            }),
            MemberKind::Unresolved | MemberKind::Unknown => {
                return Err(XmlDocError::UnknownMemberKind(raw_id.to_string()))
            }
        };
        Ok(member)
    }

    pub fn from_xml_str(xml: &str) -> Result<Self, XmlDocError> {
        with_root_element(xml, Self::from_xml)
    }
}

impl Visitable for MemberElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            MemberElement::Namespace(m) => visitor.visit_namespace(m),
            MemberElement::Type(m) => visitor.visit_type(m),
            MemberElement::Field(m) => visitor.visit_field(m),
            MemberElement::Property(m) => visitor.visit_property(m),
            MemberElement::Method(m) => visitor.visit_method(m),
            MemberElement::Event(m) => visitor.visit_event(m),
        }
    }
}

fn parameters(node: Node, options: &ParseOptions) -> Result<Vec<ParameterElement>, XmlDocError> {
    children_named(node, "param")
        .map(|n| ParameterElement::from_xml_with_options(n, options))
        .collect()
}

fn type_parameters(
    node: Node,
    options: &ParseOptions,
) -> Result<Vec<TypeParameterElement>, XmlDocError> {
    children_named(node, "typeparam")
        .map(|n| TypeParameterElement::from_xml_with_options(n, options))
        .collect()
}

fn exceptions(node: Node, options: &ParseOptions) -> Result<Vec<ExceptionElement>, XmlDocError> {
    children_named(node, "exception")
        .map(|n| ExceptionElement::from_xml_with_options(n, options))
        .collect()
}

/// Documentation of a namespace (`N:` id).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceMemberElement {
    id: MemberId,
    docs: MemberDocs,
}

impl NamespaceMemberElement {
    pub fn new(id: MemberId, docs: MemberDocs) -> Self {
        NamespaceMemberElement { id, docs }
    }

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    pub fn docs(&self) -> &MemberDocs {
        &self.docs
    }
}

/// Documentation of a type (`T:` id).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeMemberElement {
    id: MemberId,
    docs: MemberDocs,
    type_parameters: Vec<TypeParameterElement>,
}

impl TypeMemberElement {
    pub fn new(id: MemberId, docs: MemberDocs, type_parameters: Vec<TypeParameterElement>) -> Self {
        TypeMemberElement {
            id,
            docs,
            type_parameters,
        }
    }

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    pub fn docs(&self) -> &MemberDocs {
        &self.docs
    }

    pub fn type_parameters(&self) -> &[TypeParameterElement] {
        &self.type_parameters
    }
}

/// Documentation of a field (`F:` id).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldMemberElement {
    id: MemberId,
    docs: MemberDocs,
    value: Option<TextBlock>,
}

impl FieldMemberElement {
    pub fn new(id: MemberId, docs: MemberDocs, value: Option<TextBlock>) -> Self {
        FieldMemberElement { id, docs, value }
    }

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    pub fn docs(&self) -> &MemberDocs {
        &self.docs
    }

    pub fn value(&self) -> Option<&TextBlock> {
        self.value.as_ref()
    }
}

/// Documentation of a property (`P:` id).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyMemberElement {
    id: MemberId,
    docs: MemberDocs,
    value: Option<TextBlock>,
    exceptions: Vec<ExceptionElement>,
}

impl PropertyMemberElement {
    pub fn new(
        id: MemberId,
        docs: MemberDocs,
        value: Option<TextBlock>,
        exceptions: Vec<ExceptionElement>,
    ) -> Self {
        PropertyMemberElement {
            id,
            docs,
            value,
            exceptions,
        }
    }

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    pub fn docs(&self) -> &MemberDocs {
        &self.docs
    }

    pub fn value(&self) -> Option<&TextBlock> {
        self.value.as_ref()
    }

    pub fn exceptions(&self) -> &[ExceptionElement] {
        &self.exceptions
    }
}

/// Documentation of a method, constructor or operator (`M:` id).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodMemberElement {
    id: MemberId,
    docs: MemberDocs,
    parameters: Vec<ParameterElement>,
    type_parameters: Vec<TypeParameterElement>,
    returns: Option<TextBlock>,
    exceptions: Vec<ExceptionElement>,
}

impl MethodMemberElement {
    pub fn new(id: MemberId, docs: MemberDocs) -> Self {
        MethodMemberElement {
            id,
            docs,
            parameters: Vec::new(),
            type_parameters: Vec::new(),
            returns: None,
            exceptions: Vec::new(),
        }
    }

    pub fn with_parameters(mut self, parameters: Vec<ParameterElement>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_type_parameters(mut self, type_parameters: Vec<TypeParameterElement>) -> Self {
        self.type_parameters = type_parameters;
        self
    }

    pub fn with_returns(mut self, returns: TextBlock) -> Self {
        self.returns = Some(returns);
        self
    }

    pub fn with_exceptions(mut self, exceptions: Vec<ExceptionElement>) -> Self {
        self.exceptions = exceptions;
        self
    }

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    pub fn docs(&self) -> &MemberDocs {
        &self.docs
    }

    pub fn parameters(&self) -> &[ParameterElement] {
        &self.parameters
    }

    pub fn type_parameters(&self) -> &[TypeParameterElement] {
        &self.type_parameters
    }

    pub fn returns(&self) -> Option<&TextBlock> {
        self.returns.as_ref()
    }

    pub fn exceptions(&self) -> &[ExceptionElement] {
        &self.exceptions
    }
}

/// Documentation of an event (`E:` id).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventMemberElement {
    id: MemberId,
    docs: MemberDocs,
    exceptions: Vec<ExceptionElement>,
}

impl EventMemberElement {
    pub fn new(id: MemberId, docs: MemberDocs, exceptions: Vec<ExceptionElement>) -> Self {
        EventMemberElement {
            id,
            docs,
            exceptions,
        }
    }

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    pub fn docs(&self) -> &MemberDocs {
        &self.docs
    }

    pub fn exceptions(&self) -> &[ExceptionElement] {
        &self.exceptions
    }
}

/// A `<param name="...">` section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterElement {
    name: String,
    text: TextBlock,
}

impl ParameterElement {
    pub fn new(name: impl Into<String>, text: TextBlock) -> Result<Self, XmlDocError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(XmlDocError::invalid_argument(
                "name",
                "parameter name must not be empty",
            ));
        }
        Ok(ParameterElement { name, text })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &TextBlock {
        &self.text
    }

    pub fn from_xml_with_options(node: Node, options: &ParseOptions) -> Result<Self, XmlDocError> {
        ensure_name_is(node, &["param"])?;
        let name = required_attribute(node, "name")?;
        ParameterElement::new(name, TextBlock::from_xml_with_options(node, options)?)
    }
}

impl Visitable for ParameterElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_parameter(self);
    }
}

/// A `<typeparam name="...">` section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeParameterElement {
    name: String,
    text: TextBlock,
}

impl TypeParameterElement {
    pub fn new(name: impl Into<String>, text: TextBlock) -> Result<Self, XmlDocError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(XmlDocError::invalid_argument(
                "name",
                "type parameter name must not be empty",
            ));
        }
        Ok(TypeParameterElement { name, text })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &TextBlock {
        &self.text
    }

    pub fn from_xml_with_options(node: Node, options: &ParseOptions) -> Result<Self, XmlDocError> {
        ensure_name_is(node, &["typeparam"])?;
        let name = required_attribute(node, "name")?;
        TypeParameterElement::new(name, TextBlock::from_xml_with_options(node, options)?)
    }
}

impl Visitable for TypeParameterElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_type_parameter(self);
    }
}

/// An `<exception cref="...">` section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExceptionElement {
    reference: MemberId,
    text: TextBlock,
}

impl ExceptionElement {
    pub fn new(reference: MemberId, text: TextBlock) -> Self {
        ExceptionElement { reference, text }
    }

    pub fn reference(&self) -> &MemberId {
        &self.reference
    }

    pub fn text(&self) -> &TextBlock {
        &self.text
    }

    pub fn from_xml_with_options(node: Node, options: &ParseOptions) -> Result<Self, XmlDocError> {
        ensure_name_is(node, &["exception"])?;
        let reference = MemberId::parse(required_attribute(node, "cref")?)?;
        Ok(ExceptionElement::new(
            reference,
            TextBlock::from_xml_with_options(node, options)?,
        ))
    }
}

impl Visitable for ExceptionElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_exception(self);
    }
}

/// A `<seealso>` entry of a member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SeeAlsoElement {
    Code(SeeAlsoCodeReferenceElement),
    Url(SeeAlsoUrlReferenceElement),
}

impl SeeAlsoElement {
    /// `None` for entries with neither a `cref` nor an `href` value (unless the policy makes that an
    /// error).
    fn from_xml(node: Node, options: &ParseOptions) -> Result<Option<Self>, XmlDocError> {
        let text = TextBlock::from_xml_if_not_empty(node, options)?;
        if let Some(cref) = non_blank_attribute(node, "cref") {
            let reference = MemberId::parse(cref)?;
            return Ok(Some(SeeAlsoElement::Code(SeeAlsoCodeReferenceElement {
                reference,
                text,
            })));
        }
        if let Some(href) = non_blank_attribute(node, "href") {
            return Ok(Some(SeeAlsoElement::Url(SeeAlsoUrlReferenceElement::new(
                href, text,
            )?)));
        }

        match options.see_without_target {
            super::SeePolicy::Unrecognized => {
                tracing::debug!("skipping <seealso> without cref or href");
                Ok(None)
            }
            super::SeePolicy::Error => Err(XmlDocError::missing_attribute("seealso", "cref|href")),
        }
    }
}

impl Visitable for SeeAlsoElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            SeeAlsoElement::Code(e) => visitor.visit_see_also_code_reference(e),
            SeeAlsoElement::Url(e) => visitor.visit_see_also_url_reference(e),
        }
    }
}

/// A `<seealso cref="..."/>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeeAlsoCodeReferenceElement {
    reference: MemberId,
    text: Option<TextBlock>,
}

impl SeeAlsoCodeReferenceElement {
    pub fn new(reference: MemberId, text: Option<TextBlock>) -> Self {
        SeeAlsoCodeReferenceElement { reference, text }
    }

    pub fn reference(&self) -> &MemberId {
        &self.reference
    }

    pub fn text(&self) -> Option<&TextBlock> {
        self.text.as_ref()
    }
}

/// A `<seealso href="..."/>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeeAlsoUrlReferenceElement {
    link: String,
    text: Option<TextBlock>,
}

impl SeeAlsoUrlReferenceElement {
    pub fn new(link: impl Into<String>, text: Option<TextBlock>) -> Result<Self, XmlDocError> {
        let link = link.into();
        if link.trim().is_empty() {
            return Err(XmlDocError::invalid_argument(
                "link",
                "link must not be empty",
            ));
        }
        Ok(SeeAlsoUrlReferenceElement { link, text })
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn text(&self) -> Option<&TextBlock> {
        self.text.as_ref()
    }
}
