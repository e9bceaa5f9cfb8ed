//! Helpers shared by the `from_xml` constructors
//!
//!     XML parsing itself is done by `roxmltree`. This module only deals with what documentation
//!     comments need on top of a generic element tree: reading text runs with their source
//!     indentation removed, checking element names and required attributes, and capturing the
//!     raw source of elements the model does not understand.
//!
//!     Documentation comments are indented to match the code they document:
//!
//!         /// <summary>
//!         ///     Some text
//!         ///     that continues here.
//!         /// </summary>
//!
//!     The compiler writes the text of `<summary>` as "\n    Some text\n    that continues here.\n".
//!     The indentation of the first non-blank line of a container's first text run is taken as
//!     the container's indentation and removed from every line of every run in that container.
//!     When the container opens with an element, the whitespace in front of it is used instead.

use crate::error::XmlDocError;
use roxmltree::Node;

/// Parse `xml` and hand its root element to `f`.
///
/// Used by the `from_xml_str` constructors: the returned value owns all its data,
/// so the parsed document can be dropped afterwards.
pub(crate) fn with_root_element<T>(
    xml: &str,
    f: impl FnOnce(Node) -> Result<T, XmlDocError>,
) -> Result<T, XmlDocError> {
    let doc = roxmltree::Document::parse(xml)?;
    f(doc.root_element())
}

/// Count the leading whitespace of the first non-blank line of `text`.
pub fn get_indentation(text: &str) -> usize {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .find(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .unwrap_or(0)
}

/// Indentation of a container whose first content node is the text run `text`.
///
/// A run with no visible text sits between the opening tag and the first element, so its
/// last line is the whitespace in front of that element.
pub fn block_indentation(text: &str) -> usize {
    if !text.contains('\n') || text.split('\n').any(|line| !line.trim().is_empty()) {
        return get_indentation(text);
    }
    text.rsplit('\n')
        .next()
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .unwrap_or(0)
}

/// Indentation of the lines after the first one; used for runs that follow an element.
pub fn continuation_indentation(text: &str) -> usize {
    text.split_once('\n')
        .map(|(_, rest)| get_indentation(rest))
        .unwrap_or(0)
}

/// Remove up to `indent` leading whitespace characters from every line of `text`.
///
/// `first` and `last` tell whether the run is the first or last node of its container.
/// The first line of a run that follows an element starts in the middle of a source line,
/// so only the container's first run gets its first line trimmed. Blank lines next to the
/// opening and closing tags are dropped; blank lines next to inline elements are kept as
/// line breaks. Runs made of whitespace-only lines are formatting and become empty.
pub fn trim_text(text: &str, indent: usize, first: bool, last: bool) -> String {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.len() > 1 {
        if lines.iter().all(|line| line.trim().is_empty()) {
            return String::new();
        }
        while last && lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
        while first && lines.first().is_some_and(|line| line.trim().is_empty()) {
            lines.remove(0);
        }
    }

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 && !first {
                line
            } else {
                strip_indentation(line, indent)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove up to `indent` leading whitespace characters, never touching other characters.
fn strip_indentation(line: &str, indent: usize) -> &str {
    let cut = line
        .char_indices()
        .take(indent)
        .take_while(|(_, c)| c.is_whitespace())
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    &line[cut..]
}

/// Normalize the content of a `<code>` block.
///
/// Leading and trailing blank lines are dropped and the indentation of the first
/// non-blank line is removed from all lines.
pub fn trim_code(text: &str) -> String {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let start = lines.iter().position(|line| !line.trim().is_empty());
    let end = lines.iter().rposition(|line| !line.trim().is_empty());

    match (start, end) {
        (Some(start), Some(end)) => {
            let indent = get_indentation(lines[start]);
            lines[start..=end]
                .iter()
                .map(|line| strip_indentation(line, indent).trim_end())
                .collect::<Vec<_>>()
                .join("\n")
        }
        _ => String::new(),
    }
}

/// Concatenated text of all descendant text nodes.
pub(crate) fn inner_text(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// The source text of `node`, exactly as it appeared in the input.
pub(crate) fn raw_source(node: Node) -> String {
    node.document().input_text()[node.range()].to_string()
}

pub(crate) fn ensure_name_is(node: Node, names: &[&str]) -> Result<(), XmlDocError> {
    let actual = node.tag_name().name();
    if names.contains(&actual) {
        Ok(())
    } else {
        Err(XmlDocError::UnexpectedElement {
            expected: names.join("|"),
            actual: actual.to_string(),
        })
    }
}

pub(crate) fn required_attribute<'a>(
    node: Node<'a, '_>,
    attribute: &'static str,
) -> Result<&'a str, XmlDocError> {
    node.attribute(attribute)
        .ok_or_else(|| XmlDocError::missing_attribute(node.tag_name().name(), attribute))
}

/// The value of `attribute`, unless it is missing or only whitespace.
pub(crate) fn non_blank_attribute<'a>(node: Node<'a, '_>, attribute: &str) -> Option<&'a str> {
    node.attribute(attribute)
        .filter(|value| !value.trim().is_empty())
}

/// First child element with the given local name.
pub(crate) fn child_element<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}
