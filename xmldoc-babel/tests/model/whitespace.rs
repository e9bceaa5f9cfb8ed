//! Indentation stripping of text runs

use proptest::prelude::*;
use xmldoc_babel::model::{CElement, ParagraphElement, PlainTextElement, TextBlock, TextElement};

fn text(content: &str) -> TextElement {
    PlainTextElement::new(content).into()
}

#[test]
fn strips_comment_indentation() {
    let block = TextBlock::from_xml_str(
        "<summary>\n        Gets the widget.\n          Indented more.\n        </summary>",
    )
    .unwrap();
    assert_eq!(
        block.elements(),
        &[text("Gets the widget.\n  Indented more.")]
    );
}

#[test]
fn runs_after_inline_elements_keep_their_line_structure() {
    let block = TextBlock::from_xml_str("<summary>\n    a <c>x</c>\n    b\n</summary>").unwrap();
    assert_eq!(
        block.elements(),
        &[text("a "), CElement::new("x").into(), text("\nb")]
    );
}

#[test]
fn leading_element_sets_the_indentation() {
    let block = TextBlock::from_xml_str(
        "<summary>\n    <c>Widget</c> does something\n    with continuation.\n    </summary>",
    )
    .unwrap();
    assert_eq!(
        block.elements(),
        &[
            CElement::new("Widget").into(),
            text(" does something\nwith continuation."),
        ]
    );
}

#[test]
fn leading_paragraph_sets_the_indentation() {
    let block =
        TextBlock::from_xml_str("<remarks>\n    <para>a</para>\n    text after\n</remarks>")
            .unwrap();
    assert_eq!(
        block.elements(),
        &[
            ParagraphElement::new(TextBlock::new(vec![text("a")])).into(),
            text("\ntext after"),
        ]
    );
}

#[test]
fn comments_do_not_count_as_content() {
    let block = TextBlock::from_xml_str(
        "<summary>\n    <!-- generated -->\n    Gets the widget\n    by name.\n</summary>",
    )
    .unwrap();
    assert_eq!(block.elements(), &[text("Gets the widget\nby name.")]);

    let block =
        TextBlock::from_xml_str("<summary><?pi x?>\n    Gets\n    it.\n</summary>").unwrap();
    assert_eq!(block.elements(), &[text("Gets\nit.")]);
}

#[test]
fn whitespace_only_runs_are_dropped() {
    let block = TextBlock::from_xml_str("<summary><c>a</c>\n    \n<c>b</c></summary>").unwrap();
    assert_eq!(
        block.elements(),
        &[TextElement::from(CElement::new("a")), CElement::new("b").into()]
    );

    let empty = TextBlock::from_xml_str("<summary>\n    \n</summary>").unwrap();
    assert!(empty.is_empty());
}

#[test]
fn never_strips_text() {
    let block = TextBlock::from_xml_str("<summary>\n    first\n  second\n</summary>").unwrap();
    assert_eq!(block.elements(), &[text("first\nsecond")]);
}

proptest! {
    #[test]
    fn every_line_loses_the_first_line_indent(
        indent in 0usize..8,
        first in "[a-z]{1,6}",
        rest in prop::collection::vec((0usize..3, "[a-z]{1,6}"), 0..5),
    ) {
        let pad = " ".repeat(indent);
        let mut source = format!("<summary>\n{pad}{first}");
        let mut expected = first.clone();
        for (extra, word) in &rest {
            let extra = " ".repeat(*extra);
            source.push_str(&format!("\n{pad}{extra}{word}"));
            expected.push_str(&format!("\n{extra}{word}"));
        }
        source.push_str(&format!("\n{pad}</summary>"));

        let block = TextBlock::from_xml_str(&source).unwrap();
        prop_assert_eq!(block.elements(), &[text(&expected)]);
    }
}
