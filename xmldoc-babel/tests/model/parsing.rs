//! Building the model from documentation XML

use xmldoc_babel::model::{
    CodeElement, DocumentationFile, ListType, MemberElement, MemberKind, ParseOptions,
    PlainTextElement, SeeAlsoElement, SeePolicy, TextBlock, TextElement,
    UnrecognizedTextElement,
};
use xmldoc_babel::XmlDocError;

const WIDGETS: &str = include_str!("../markdown/fixtures/Widgets.xml");
const COMBINE: &str = "M:Widgets.Widget`1.Combine(Widgets.Widget{`0})";

fn widgets() -> DocumentationFile {
    DocumentationFile::from_xml_str(WIDGETS).unwrap()
}

fn plain(content: &str) -> TextBlock {
    TextBlock::new(vec![PlainTextElement::new(content).into()])
}

fn member<'a>(file: &'a DocumentationFile, id: &str) -> &'a MemberElement {
    file.members()
        .iter()
        .find(|m| m.id().to_string() == id)
        .unwrap_or_else(|| panic!("no member {id}"))
}

#[test]
fn reads_assembly_and_members() {
    let file = widgets();

    assert_eq!(file.assembly_name(), Some("Widgets"));
    let kinds: Vec<MemberKind> = file.members().iter().map(|m| m.id().kind()).collect();
    assert_eq!(
        kinds,
        vec![
            MemberKind::Namespace,
            MemberKind::Type,
            MemberKind::Field,
            MemberKind::Property,
            MemberKind::Method,
            MemberKind::Event,
        ]
    );
}

#[test]
fn unresolved_members_are_skipped() {
    let file = widgets();
    assert!(file
        .members()
        .iter()
        .all(|m| m.id().name() != "Widgets.Missing"));
}

#[test]
fn method_sections() {
    let file = widgets();
    let MemberElement::Method(method) = member(&file, COMBINE) else {
        panic!("Expected a method");
    };

    assert_eq!(method.parameters().len(), 1);
    assert_eq!(method.parameters()[0].name(), "other");
    assert_eq!(
        method.parameters()[0].text(),
        &plain("The widget to combine with.")
    );
    assert!(method.returns().is_some());
    assert!(method.type_parameters().is_empty());

    let see_also = &method.docs().see_also;
    assert_eq!(see_also.len(), 1);
    let SeeAlsoElement::Code(entry) = &see_also[0] else {
        panic!("Expected a code reference, found {:?}", see_also[0]);
    };
    assert_eq!(entry.reference().name(), "Widgets.Widget`1.Split");
}

#[test]
fn property_exceptions_and_value() {
    let file = widgets();
    let MemberElement::Property(property) = member(&file, "P:Widgets.Widget`1.Payload") else {
        panic!("Expected a property");
    };

    assert_eq!(property.value(), Some(&plain("The payload.")));
    assert_eq!(property.exceptions().len(), 1);
    assert_eq!(
        property.exceptions()[0].reference().to_string(),
        "T:System.InvalidOperationException"
    );
}

#[test]
fn absent_sections_are_none() {
    let file = widgets();
    let docs = member(&file, "E:Widgets.Widget`1.Changed").docs();
    assert!(docs.summary.is_some());
    assert_eq!(docs.remarks, None);
    assert_eq!(docs.example, None);
}

#[test]
fn unknown_tags_keep_their_source() {
    let block = TextBlock::from_xml_str(
        r#"<summary>Before <custom kind="x">inner <b>bold</b></custom> after</summary>"#,
    )
    .unwrap();

    assert_eq!(
        block.elements(),
        &[
            TextElement::from(PlainTextElement::new("Before ")),
            TextElement::from(UnrecognizedTextElement::new(
                "custom",
                r#"<custom kind="x">inner <b>bold</b></custom>"#
            )),
            TextElement::from(PlainTextElement::new(" after")),
        ]
    );
}

#[test]
fn see_without_target_is_unrecognized_by_default() {
    let block = TextBlock::from_xml_str("<summary><see>nothing</see></summary>").unwrap();
    assert!(matches!(
        block.elements(),
        [TextElement::Unrecognized(element)] if element.name() == "see"
    ));
}

#[test]
fn see_without_target_can_be_an_error() {
    let options = ParseOptions {
        see_without_target: SeePolicy::Error,
    };
    let doc = roxmltree::Document::parse("<summary><see>nothing</see></summary>").unwrap();
    let result = TextBlock::from_xml_with_options(doc.root_element(), &options);

    assert_eq!(
        result,
        Err(XmlDocError::MissingAttribute {
            element: "see".to_string(),
            attribute: "cref|href",
        })
    );
}

#[test]
fn blank_references_do_not_fail_the_file() {
    let file = DocumentationFile::from_xml_str(
        r#"<doc>
            <members>
                <member name="M:Lib.Run">
                    <summary>Runs <see href=""/> and <see cref=""/> with <paramref name=""/>.</summary>
                    <seealso cref=" "/>
                </member>
                <member name="M:Lib.Stop">
                    <summary>Stops.</summary>
                </member>
            </members>
        </doc>"#,
    )
    .unwrap();

    assert_eq!(file.members().len(), 2);
    let run = member(&file, "M:Lib.Run").docs();
    let summary = run.summary.as_ref().unwrap();
    let kept: Vec<&str> = summary
        .iter()
        .filter_map(|element| match element {
            TextElement::Unrecognized(e) => Some(e.name()),
            _ => None,
        })
        .collect();
    assert_eq!(kept, vec!["see", "see", "paramref"]);
    assert!(run.see_also.is_empty());
}

#[test]
fn blank_see_targets_can_be_an_error() {
    let options = ParseOptions {
        see_without_target: SeePolicy::Error,
    };
    let doc = roxmltree::Document::parse(r#"<summary><see cref=""/></summary>"#).unwrap();
    assert_eq!(
        TextBlock::from_xml_with_options(doc.root_element(), &options),
        Err(XmlDocError::MissingAttribute {
            element: "see".to_string(),
            attribute: "cref|href",
        })
    );
}

#[test]
fn parameter_references_need_a_name() {
    let result = TextBlock::from_xml_str("<summary><paramref/></summary>");
    assert!(matches!(
        result,
        Err(XmlDocError::MissingAttribute {
            attribute: "name",
            ..
        })
    ));
}

#[test]
fn malformed_xml_is_an_error() {
    assert!(matches!(
        TextBlock::from_xml_str("<summary>unclosed"),
        Err(XmlDocError::Xml(_))
    ));
}

#[test]
fn code_and_lists() {
    let block = TextBlock::from_xml_str(
        r#"<example>
            <code language="csharp">
                var w = new Widget();
                w.Combine(w);
            </code>
            <list type="number">
                <item><description>first</description></item>
            </list>
        </example>"#,
    )
    .unwrap();

    assert_eq!(block.len(), 2);
    assert_eq!(
        block.elements()[0],
        TextElement::from(CodeElement::new(
            "var w = new Widget();\nw.Combine(w);",
            Some("csharp".to_string())
        ))
    );
    let TextElement::List(list) = &block.elements()[1] else {
        panic!("Expected a list, found {:?}", block.elements()[1]);
    };
    assert_eq!(list.list_type(), ListType::Number);
    assert_eq!(list.items().len(), 1);
    assert_eq!(list.items()[0].term(), None);
}
