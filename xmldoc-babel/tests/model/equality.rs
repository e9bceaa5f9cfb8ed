//! Structural equality and hashing of model values

use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use xmldoc_babel::model::{
    BoldElement, CElement, LineBreakElement, ListItemElement, ParagraphElement,
    ParameterReferenceElement, PlainTextElement, TextBlock, TextElement,
};

fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Input data for a text block, so two independent blocks can be built from it.
#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Text(String),
    Code(String),
    Paragraph(Vec<String>),
    Bold(String),
    ParamRef(String),
    Break,
}

fn piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        "[a-z ]{0,8}".prop_map(Piece::Text),
        "[a-z]{0,5}".prop_map(Piece::Code),
        prop::collection::vec("[a-z]{1,5}", 0..3).prop_map(Piece::Paragraph),
        "[a-z]{1,5}".prop_map(Piece::Bold),
        "[a-z]{1,5}".prop_map(Piece::ParamRef),
        Just(Piece::Break),
    ]
}

fn plain(text: &str) -> TextElement {
    PlainTextElement::new(text).into()
}

fn build(pieces: &[Piece]) -> TextBlock {
    pieces
        .iter()
        .map(|piece| -> TextElement {
            match piece {
                Piece::Text(text) => plain(text),
                Piece::Code(code) => CElement::new(code.as_str()).into(),
                Piece::Paragraph(words) => {
                    ParagraphElement::new(words.iter().map(|w| plain(w)).collect()).into()
                }
                Piece::Bold(text) => BoldElement::new(TextBlock::new(vec![plain(text)])).into(),
                Piece::ParamRef(name) => ParameterReferenceElement::new(name.as_str())
                    .unwrap()
                    .into(),
                Piece::Break => LineBreakElement.into(),
            }
        })
        .collect()
}

#[test]
fn empty_blocks_hash_to_the_sentinel() {
    let parsed = TextBlock::from_xml_str("<summary>\n    \n</summary>").unwrap();

    assert_eq!(TextBlock::default(), TextBlock::new(Vec::new()));
    assert_eq!(parsed, TextBlock::default());
    assert_eq!(hash_of(&TextBlock::default()), hash_of(&0u64));
    assert_eq!(hash_of(&parsed), hash_of(&0u64));
}

#[test]
fn never_equal_to_a_different_kind_of_value() {
    let block = TextElement::from(TextBlock::new(vec![plain("x")]));
    assert_ne!(block, TextElement::from(LineBreakElement));
    assert_ne!(Some(&block), None);
    assert_ne!(plain("x"), TextElement::from(CElement::new("x")));
}

#[test]
fn list_item_term_presence_matters() {
    let description = TextBlock::new(vec![plain("d")]);
    let absent = ListItemElement::new(None, description.clone());
    let empty = ListItemElement::new(Some(TextBlock::default()), description);
    assert_ne!(absent, empty);
}

#[test]
fn order_matters() {
    assert_ne!(
        TextBlock::new(vec![plain("a"), plain("b")]),
        TextBlock::new(vec![plain("b"), plain("a")])
    );
}

proptest! {
    #[test]
    fn blocks_built_from_equal_data_are_equal(pieces in prop::collection::vec(piece(), 0..6)) {
        let first = build(&pieces);
        let second = build(&pieces);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(hash_of(&first), hash_of(&second));
    }

    #[test]
    fn blocks_built_from_different_data_differ(
        a in prop::collection::vec(piece(), 0..4),
        b in prop::collection::vec(piece(), 0..4),
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(build(&a), build(&b));
    }
}
