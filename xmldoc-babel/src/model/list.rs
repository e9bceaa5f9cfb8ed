//! `<list>`, `<listheader>` and `<item>`

use super::text::TextBlock;
use super::ParseOptions;
use crate::error::XmlDocError;
use crate::visitor::{DocumentationVisitor, Visitable};
use crate::xml::{child_element, ensure_name_is, with_root_element};
use roxmltree::Node;

/// The `type` attribute of a `<list>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ListType {
    #[default]
    Bullet,
    Number,
    Table,
}

impl ListType {
    fn from_attribute(value: Option<&str>) -> Self {
        match value {
            None | Some("bullet") => ListType::Bullet,
            Some("number") => ListType::Number,
            Some("table") => ListType::Table,
            Some(other) => {
                tracing::debug!(list_type = other, "unknown list type, using bullet");
                ListType::Bullet
            }
        }
    }
}

/// A `<list>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ListElement {
    list_type: ListType,
    header: Option<ListItemElement>,
    items: Vec<ListItemElement>,
}

impl ListElement {
    pub fn new(
        list_type: ListType,
        header: Option<ListItemElement>,
        items: Vec<ListItemElement>,
    ) -> Self {
        ListElement {
            list_type,
            header,
            items,
        }
    }

    pub fn list_type(&self) -> ListType {
        self.list_type
    }

    /// The `<listheader>` entry, if the list has one.
    pub fn header(&self) -> Option<&ListItemElement> {
        self.header.as_ref()
    }

    pub fn items(&self) -> &[ListItemElement] {
        &self.items
    }

    pub fn from_xml(node: Node) -> Result<Self, XmlDocError> {
        Self::from_xml_with_options(node, &ParseOptions::default())
    }

    pub fn from_xml_with_options(node: Node, options: &ParseOptions) -> Result<Self, XmlDocError> {
        ensure_name_is(node, &["list"])?;

        let list_type = ListType::from_attribute(node.attribute("type"));
        let header = child_element(node, "listheader")
            .map(|n| ListItemElement::from_xml_with_options(n, options))
            .transpose()?;

        let mut items = Vec::new();
        for child in node.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "item" => items.push(ListItemElement::from_xml_with_options(child, options)?),
                "listheader" => {}
                other => tracing::debug!(tag = other, "ignoring unexpected element in <list>"),
            }
        }

        Ok(ListElement::new(list_type, header, items))
    }

    pub fn from_xml_str(xml: &str) -> Result<Self, XmlDocError> {
        with_root_element(xml, Self::from_xml)
    }
}

impl Visitable for ListElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_list(self);
    }
}

/// An `<item>` or `<listheader>` of a list.
///
/// A missing term and an empty term are different values. The description is always present:
/// an item parsed without a `<description>` element gets an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ListItemElement {
    term: Option<TextBlock>,
    description: TextBlock,
}

impl ListItemElement {
    pub fn new(term: Option<TextBlock>, description: TextBlock) -> Self {
        ListItemElement { term, description }
    }

    /// Like [`ListItemElement::new`] for callers holding an optional description.
    pub fn try_new(
        term: Option<TextBlock>,
        description: Option<TextBlock>,
    ) -> Result<Self, XmlDocError> {
        let description = description.ok_or_else(|| {
            XmlDocError::invalid_argument("description", "list item description must be present")
        })?;
        Ok(ListItemElement::new(term, description))
    }

    pub fn term(&self) -> Option<&TextBlock> {
        self.term.as_ref()
    }

    pub fn description(&self) -> &TextBlock {
        &self.description
    }

    pub fn from_xml(node: Node) -> Result<Self, XmlDocError> {
        Self::from_xml_with_options(node, &ParseOptions::default())
    }

    pub fn from_xml_with_options(node: Node, options: &ParseOptions) -> Result<Self, XmlDocError> {
        ensure_name_is(node, &["listheader", "item"])?;

        let term = child_element(node, "term")
            .map(|n| TextBlock::from_xml_with_options(n, options))
            .transpose()?;
        let description = child_element(node, "description")
            .map(|n| TextBlock::from_xml_with_options(n, options))
            .transpose()?
            .unwrap_or_default();

        Ok(ListItemElement::new(term, description))
    }

    pub fn from_xml_str(xml: &str) -> Result<Self, XmlDocError> {
        with_root_element(xml, Self::from_xml)
    }
}

impl Visitable for ListItemElement {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_list_item(self);
    }
}
