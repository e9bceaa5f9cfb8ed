//! Span conversion of parsed documentation

use xmldoc_babel::markdown::{
    convert_to_span, ConvertToSpanVisitor, LinkMap, MdCompositeSpan, MdSpan, NoLinkResolver,
};
use xmldoc_babel::model::{
    DocumentationFile, MemberElement, MemberId, MemberKind, SeeAlsoElement,
    SeeAlsoUrlReferenceElement, SeeCodeReferenceElement, TextBlock, TextElement,
};
use xmldoc_babel::visitor::Visitable;

const WIDGETS: &str = include_str!("fixtures/Widgets.xml");

fn summary_of(file: &DocumentationFile, id: &str) -> TextBlock {
    file.members()
        .iter()
        .find(|m| m.id().to_string() == id)
        .and_then(|m| m.docs().summary.clone())
        .unwrap_or_else(|| panic!("no summary for {id}"))
}

fn member_of_kind(kind: MemberKind) -> MemberElement {
    let file = DocumentationFile::from_xml_str(WIDGETS).unwrap();
    file.members()
        .iter()
        .find(|m| m.id().kind() == kind)
        .cloned()
        .unwrap_or_else(|| panic!("no {kind:?} member"))
}

#[test]
fn converts_a_summary() {
    let file = DocumentationFile::from_xml_str(WIDGETS).unwrap();
    let summary = summary_of(&file, "T:Widgets.Widget`1");

    let span = convert_to_span(&summary, &NoLinkResolver);
    assert_eq!(
        span.spans(),
        &[
            MdSpan::text("A widget holding a "),
            MdSpan::code("T"),
            MdSpan::text("."),
        ]
    );
}

#[test]
fn remarks_paragraphs_start_with_breaks() {
    let file = DocumentationFile::from_xml_str(WIDGETS).unwrap();
    let remarks = file.members()[1].docs().remarks.clone().unwrap();

    let span = convert_to_span(&remarks, &NoLinkResolver);
    assert_eq!(
        span.spans(),
        &[
            MdSpan::line_break(),
            MdSpan::text("Widgets are cheap to create."),
            MdSpan::line_break(),
            MdSpan::text("See "),
            MdSpan::link(
                MdCompositeSpan::from(vec![MdSpan::text("the guide")]),
                "https://example.com/widgets"
            ),
            MdSpan::text(" for details."),
        ]
    );
}

#[test]
fn link_map_resolves_code_references() {
    let file = DocumentationFile::from_xml_str(WIDGETS).unwrap();
    let summary = summary_of(&file, "M:Widgets.Widget`1.Combine(Widgets.Widget{`0})");
    let links = LinkMap::new()
        .with_base_url("https://example.com/api")
        .unwrap();

    let span = convert_to_span(&summary, &links);
    assert_eq!(
        span.spans(),
        &[
            MdSpan::text("Combines this widget with "),
            MdSpan::code("other"),
            MdSpan::text(", see "),
            MdSpan::link(
                MdSpan::code("Widgets.Widget`1"),
                "https://example.com/api/widgets.widget-1"
            ),
            MdSpan::text("."),
        ]
    );
}

#[test]
fn one_visitor_converts_several_blocks() {
    let file = DocumentationFile::from_xml_str(WIDGETS).unwrap();
    let mut visitor = ConvertToSpanVisitor::new();

    let mut results = Vec::new();
    for member in file.members() {
        if let Some(summary) = &member.docs().summary {
            visitor.reset();
            summary.accept(&mut visitor);
            results.push(visitor.result().clone());
        }
    }

    assert_eq!(results.len(), file.members().len());
    assert_eq!(
        results[0].spans(),
        &[MdSpan::text("Widgets and the things they are made of.")]
    );
}

#[test]
fn unresolved_references_stay_code() {
    let reference =
        SeeCodeReferenceElement::new(MemberId::parse("!:Widgets.Missing").unwrap(), None);
    let links = LinkMap::new()
        .with_base_url("https://example.com/api")
        .unwrap();

    let span = convert_to_span(&TextElement::from(reference), &links);
    assert_eq!(span.spans(), &[MdSpan::code("Widgets.Missing")]);
}

#[test]
#[should_panic(expected = "ConvertToSpanVisitor can only convert text elements")]
fn rejects_documentation_files() {
    let file = DocumentationFile::from_xml_str(WIDGETS).unwrap();
    convert_to_span(&file, &NoLinkResolver);
}

#[test]
#[should_panic(expected = "ConvertToSpanVisitor can only convert text elements")]
fn rejects_members() {
    let file = DocumentationFile::from_xml_str(WIDGETS).unwrap();
    let method = file
        .members()
        .iter()
        .find(|m| matches!(m, MemberElement::Method(_)))
        .unwrap();
    convert_to_span(method, &NoLinkResolver);
}

#[test]
#[should_panic(expected = "ConvertToSpanVisitor can only convert text elements")]
fn rejects_parameters() {
    let file = DocumentationFile::from_xml_str(WIDGETS).unwrap();
    let Some(MemberElement::Method(method)) = file
        .members()
        .iter()
        .find(|m| matches!(m, MemberElement::Method(_)))
    else {
        panic!("Expected a method");
    };
    convert_to_span(&method.parameters()[0], &NoLinkResolver);
}

#[test]
#[should_panic(expected = "can only convert text elements, got namespace")]
fn rejects_namespaces() {
    convert_to_span(&member_of_kind(MemberKind::Namespace), &NoLinkResolver);
}

#[test]
#[should_panic(expected = "can only convert text elements, got type")]
fn rejects_types() {
    convert_to_span(&member_of_kind(MemberKind::Type), &NoLinkResolver);
}

#[test]
#[should_panic(expected = "can only convert text elements, got field")]
fn rejects_fields() {
    convert_to_span(&member_of_kind(MemberKind::Field), &NoLinkResolver);
}

#[test]
#[should_panic(expected = "can only convert text elements, got property")]
fn rejects_properties() {
    convert_to_span(&member_of_kind(MemberKind::Property), &NoLinkResolver);
}

#[test]
#[should_panic(expected = "can only convert text elements, got event")]
fn rejects_events() {
    convert_to_span(&member_of_kind(MemberKind::Event), &NoLinkResolver);
}

#[test]
#[should_panic(expected = "can only convert text elements, got type parameter")]
fn rejects_type_parameters() {
    let MemberElement::Type(widget) = member_of_kind(MemberKind::Type) else {
        panic!("Expected a type");
    };
    convert_to_span(&widget.type_parameters()[0], &NoLinkResolver);
}

#[test]
#[should_panic(expected = "can only convert text elements, got exception")]
fn rejects_exceptions() {
    let MemberElement::Property(payload) = member_of_kind(MemberKind::Property) else {
        panic!("Expected a property");
    };
    convert_to_span(&payload.exceptions()[0], &NoLinkResolver);
}

#[test]
#[should_panic(expected = "can only convert text elements, got seealso")]
fn rejects_see_also_code_references() {
    let method = member_of_kind(MemberKind::Method);
    let see_also = &method.docs().see_also[0];
    assert!(matches!(see_also, SeeAlsoElement::Code(_)));
    convert_to_span(see_also, &NoLinkResolver);
}

#[test]
#[should_panic(expected = "can only convert text elements, got seealso")]
fn rejects_see_also_url_references() {
    let text = TextBlock::from_xml_str("<seealso>the guide</seealso>").unwrap();
    let guide = SeeAlsoUrlReferenceElement::new("https://example.com/widgets", Some(text)).unwrap();
    convert_to_span(&SeeAlsoElement::Url(guide), &NoLinkResolver);
}
