//! CommonMark output
//!
//! Output is checked by parsing it back with comrak and looking at the AST, plus a few
//! snapshots for simple lines.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use insta::assert_snapshot;
use std::collections::HashSet;
use xmldoc_babel::markdown::{
    text_to_markdown, LineBreakStyle, LinkMap, MarkdownOptions, NoLinkResolver,
};
use xmldoc_babel::model::{DocumentationFile, MemberElement, TextBlock};

const WIDGETS: &str = include_str!("fixtures/Widgets.xml");
const COMBINE: &str = "M:Widgets.Widget`1.Combine(Widgets.Widget{`0})";

fn collect_node_types<'a>(node: &'a AstNode<'a>, types: &mut HashSet<&'static str>) {
    let type_name = match &node.data.borrow().value {
        NodeValue::Document => "Document",
        NodeValue::Paragraph => "Paragraph",
        NodeValue::Text(_) => "Text",
        NodeValue::Code(_) => "Code",
        NodeValue::Link(_) => "Link",
        NodeValue::Strong => "Strong",
        NodeValue::Emph => "Emph",
        NodeValue::LineBreak => "LineBreak",
        NodeValue::SoftBreak => "SoftBreak",
        _ => "Other",
    };
    types.insert(type_name);
    for child in node.children() {
        collect_node_types(child, types);
    }
}

fn node_types(markdown: &str) -> HashSet<&'static str> {
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &ComrakOptions::default());
    let mut types = HashSet::new();
    collect_node_types(root, &mut types);
    types
}

fn member_docs(id: &str) -> MemberElement {
    DocumentationFile::from_xml_str(WIDGETS)
        .unwrap()
        .members()
        .iter()
        .find(|m| m.id().to_string() == id)
        .cloned()
        .unwrap_or_else(|| panic!("no member {id}"))
}

#[test]
fn summary_with_type_parameter_reference() {
    let member = member_docs("T:Widgets.Widget`1");
    let summary = member.docs().summary.as_ref().unwrap();

    let markdown = text_to_markdown(summary, &NoLinkResolver, &MarkdownOptions::default());
    assert_snapshot!(markdown.unwrap(), @"A widget holding a `T`.");
}

#[test]
fn returns_with_bold_text() {
    let MemberElement::Method(method) = member_docs(COMBINE) else {
        panic!("Expected a method");
    };
    let returns = method.returns().unwrap();

    let markdown = text_to_markdown(returns, &NoLinkResolver, &MarkdownOptions::default()).unwrap();
    assert_snapshot!(markdown, @"A **new** widget.");
}

#[test]
fn paragraphs_become_line_breaks() {
    let member = member_docs("T:Widgets.Widget`1");
    let remarks = member.docs().remarks.as_ref().unwrap();

    let hard = text_to_markdown(remarks, &NoLinkResolver, &MarkdownOptions::default()).unwrap();
    let types = node_types(&hard);
    assert!(types.contains("LineBreak"));
    assert!(types.contains("Link"));
    assert!(!types.contains("SoftBreak"));
    assert!(hard.starts_with("Widgets are cheap"));

    let options = MarkdownOptions {
        line_breaks: LineBreakStyle::Soft,
    };
    let soft = text_to_markdown(remarks, &NoLinkResolver, &options).unwrap();
    assert_eq!(
        soft,
        "Widgets are cheap to create.\nSee [the guide](https://example.com/widgets) for details."
    );
}

#[test]
fn linked_references_parse_back_as_links() {
    let member = member_docs(COMBINE);
    let summary = member.docs().summary.as_ref().unwrap();
    let links = LinkMap::new().with_link("T:Widgets.Widget`1", "widget.md");

    let markdown = text_to_markdown(summary, &links, &MarkdownOptions::default()).unwrap();
    assert!(markdown.contains("](widget.md)"));

    let types = node_types(&markdown);
    assert!(types.contains("Link"));
    assert!(types.contains("Code"));
    assert!(!types.contains("Other"));
}

#[test]
fn markdown_in_text_is_escaped() {
    let block = TextBlock::from_xml_str("<summary>Use *args* and [brackets]</summary>").unwrap();
    let markdown = text_to_markdown(&block, &NoLinkResolver, &MarkdownOptions::default()).unwrap();

    let types = node_types(&markdown);
    assert!(!types.contains("Emph"));
    assert!(!types.contains("Link"));
}

#[test]
fn language_keywords_are_inline_code() {
    let xml = r#"<returns>Returns <see langword="null"/> if empty.</returns>"#;
    let block = TextBlock::from_xml_str(xml).unwrap();
    let markdown = text_to_markdown(&block, &NoLinkResolver, &MarkdownOptions::default()).unwrap();
    assert_snapshot!(markdown, @"Returns `null` if empty.");
}
