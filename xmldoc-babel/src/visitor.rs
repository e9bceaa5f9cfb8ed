//! Double-dispatch traversal over the documentation model.
//!
//! Every node implements [`Visitable::accept`], which calls the matching `visit_*` method of
//! a [`DocumentationVisitor`]. The node type picks the method and the visitor type picks the
//! behavior, so new renderers can be written without touching the model.
//!
//! The default `visit_*` bodies recurse into the node's children through the `walk_*`
//! functions, so a visitor only overrides what it cares about. An override that still wants
//! the default recursion calls the `walk_*` function itself:
//!
//! ```ignore
//! fn visit_paragraph(&mut self, para: &ParagraphElement) {
//!     self.start_paragraph();
//!     walk_paragraph(self, para);
//!     self.end_paragraph();
//! }
//! ```
//!
//! Leaf nodes (plain text, inline code, parameter references, line breaks, unrecognized
//! elements) have empty default bodies.

use crate::model::{
    BoldElement, CElement, CodeElement, DocumentationFile, EmphasisElement, EventMemberElement,
    ExceptionElement, FieldMemberElement, IdiomaticElement, LineBreakElement, ListElement,
    ListItemElement, MemberDocs, MethodMemberElement, NamespaceMemberElement, ParagraphElement,
    ParameterElement, ParameterReferenceElement, PlainTextElement, PropertyMemberElement,
    SeeAlsoCodeReferenceElement, SeeAlsoUrlReferenceElement, SeeCodeReferenceElement,
    SeeUrlReferenceElement, StrongElement, TextBlock, TypeMemberElement, TypeParameterElement,
    TypeParameterReferenceElement, UnrecognizedTextElement,
};

/// A node that can be walked by a [`DocumentationVisitor`].
pub trait Visitable {
    fn accept<V: DocumentationVisitor + ?Sized>(&self, visitor: &mut V);
}

/// One operation per node type of the documentation model.
pub trait DocumentationVisitor {
    fn visit_documentation_file(&mut self, file: &DocumentationFile) {
        walk_documentation_file(self, file);
    }

    fn visit_namespace(&mut self, member: &NamespaceMemberElement) {
        walk_member_docs(self, member.docs());
    }

    fn visit_type(&mut self, member: &TypeMemberElement) {
        walk_type(self, member);
    }

    fn visit_field(&mut self, member: &FieldMemberElement) {
        walk_field(self, member);
    }

    fn visit_property(&mut self, member: &PropertyMemberElement) {
        walk_property(self, member);
    }

    fn visit_method(&mut self, member: &MethodMemberElement) {
        walk_method(self, member);
    }

    fn visit_event(&mut self, member: &EventMemberElement) {
        walk_event(self, member);
    }

    fn visit_parameter(&mut self, param: &ParameterElement) {
        self.visit_text_block(param.text());
    }

    fn visit_type_parameter(&mut self, type_param: &TypeParameterElement) {
        self.visit_text_block(type_param.text());
    }

    fn visit_exception(&mut self, exception: &ExceptionElement) {
        self.visit_text_block(exception.text());
    }

    fn visit_see_also_code_reference(&mut self, see_also: &SeeAlsoCodeReferenceElement) {
        if let Some(text) = see_also.text() {
            self.visit_text_block(text);
        }
    }

    fn visit_see_also_url_reference(&mut self, see_also: &SeeAlsoUrlReferenceElement) {
        if let Some(text) = see_also.text() {
            self.visit_text_block(text);
        }
    }

    fn visit_text_block(&mut self, block: &TextBlock) {
        walk_text_block(self, block);
    }

    fn visit_plain_text(&mut self, _plain_text: &PlainTextElement) {}

    fn visit_paragraph(&mut self, para: &ParagraphElement) {
        walk_paragraph(self, para);
    }

    fn visit_code(&mut self, _code: &CodeElement) {}

    fn visit_c(&mut self, _c: &CElement) {}

    fn visit_see_code_reference(&mut self, see: &SeeCodeReferenceElement) {
        if let Some(text) = see.text() {
            self.visit_text_block(text);
        }
    }

    fn visit_see_url_reference(&mut self, see: &SeeUrlReferenceElement) {
        if let Some(text) = see.text() {
            self.visit_text_block(text);
        }
    }

    fn visit_parameter_reference(&mut self, _param_ref: &ParameterReferenceElement) {}

    fn visit_type_parameter_reference(
        &mut self,
        _type_param_ref: &TypeParameterReferenceElement,
    ) {
    }

    fn visit_list(&mut self, list: &ListElement) {
        walk_list(self, list);
    }

    fn visit_list_item(&mut self, item: &ListItemElement) {
        walk_list_item(self, item);
    }

    fn visit_emphasis(&mut self, emphasis: &EmphasisElement) {
        self.visit_text_block(emphasis.text());
    }

    fn visit_idiomatic(&mut self, idiomatic: &IdiomaticElement) {
        self.visit_text_block(idiomatic.text());
    }

    fn visit_bold(&mut self, bold: &BoldElement) {
        self.visit_text_block(bold.text());
    }

    fn visit_strong(&mut self, strong: &StrongElement) {
        self.visit_text_block(strong.text());
    }

    fn visit_line_break(&mut self, _line_break: &LineBreakElement) {}

    fn visit_unrecognized(&mut self, _element: &UnrecognizedTextElement) {}
}

pub fn walk_documentation_file<V: DocumentationVisitor + ?Sized>(
    visitor: &mut V,
    file: &DocumentationFile,
) {
    for member in file.members() {
        member.accept(visitor);
    }
}

/// Visit summary, remarks and example, then the see-also entries.
pub fn walk_member_docs<V: DocumentationVisitor + ?Sized>(visitor: &mut V, docs: &MemberDocs) {
    for section in [&docs.summary, &docs.remarks, &docs.example]
        .into_iter()
        .flatten()
    {
        visitor.visit_text_block(section);
    }
    for see_also in &docs.see_also {
        see_also.accept(visitor);
    }
}

pub fn walk_type<V: DocumentationVisitor + ?Sized>(visitor: &mut V, member: &TypeMemberElement) {
    walk_member_docs(visitor, member.docs());
    for type_param in member.type_parameters() {
        visitor.visit_type_parameter(type_param);
    }
}

pub fn walk_field<V: DocumentationVisitor + ?Sized>(visitor: &mut V, member: &FieldMemberElement) {
    walk_member_docs(visitor, member.docs());
    if let Some(value) = member.value() {
        visitor.visit_text_block(value);
    }
}

pub fn walk_property<V: DocumentationVisitor + ?Sized>(
    visitor: &mut V,
    member: &PropertyMemberElement,
) {
    walk_member_docs(visitor, member.docs());
    if let Some(value) = member.value() {
        visitor.visit_text_block(value);
    }
    for exception in member.exceptions() {
        visitor.visit_exception(exception);
    }
}

pub fn walk_method<V: DocumentationVisitor + ?Sized>(
    visitor: &mut V,
    member: &MethodMemberElement,
) {
    walk_member_docs(visitor, member.docs());
    for type_param in member.type_parameters() {
        visitor.visit_type_parameter(type_param);
    }
    for param in member.parameters() {
        visitor.visit_parameter(param);
    }
    if let Some(returns) = member.returns() {
        visitor.visit_text_block(returns);
    }
    for exception in member.exceptions() {
        visitor.visit_exception(exception);
    }
}

pub fn walk_event<V: DocumentationVisitor + ?Sized>(visitor: &mut V, member: &EventMemberElement) {
    walk_member_docs(visitor, member.docs());
    for exception in member.exceptions() {
        visitor.visit_exception(exception);
    }
}

pub fn walk_text_block<V: DocumentationVisitor + ?Sized>(visitor: &mut V, block: &TextBlock) {
    for element in block {
        element.accept(visitor);
    }
}

pub fn walk_paragraph<V: DocumentationVisitor + ?Sized>(visitor: &mut V, para: &ParagraphElement) {
    visitor.visit_text_block(para.text());
}

pub fn walk_list<V: DocumentationVisitor + ?Sized>(visitor: &mut V, list: &ListElement) {
    if let Some(header) = list.header() {
        visitor.visit_list_item(header);
    }
    for item in list.items() {
        visitor.visit_list_item(item);
    }
}

pub fn walk_list_item<V: DocumentationVisitor + ?Sized>(visitor: &mut V, item: &ListItemElement) {
    if let Some(term) = item.term() {
        visitor.visit_text_block(term);
    }
    visitor.visit_text_block(item.description());
}
