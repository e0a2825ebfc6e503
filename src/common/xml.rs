//! Forgiving XML parsing for BurnSim markup
//!
//! BurnSim exports are often several top-level elements with no enclosing
//! root, which a strict parser rejects. Parsing is a two-stage strategy:
//! the text as given, then the text wrapped in a synthetic root element.
//! The outcome is a tagged [`ForgivingParse`] so callers (and tests) can see
//! which stage succeeded.

use roxmltree::{Document, Node, ParsingOptions};
use tracing::debug;

/// Outcome of the two-stage parse
#[derive(Debug)]
pub enum ForgivingParse<'input> {
    /// The text parsed as a document on its own
    AsGiven(Document<'input>),
    /// The text parsed only once wrapped in the synthetic root
    Wrapped(Document<'input>),
    /// Both stages failed
    Failed { as_given: String, wrapped: String },
}

impl<'input> ForgivingParse<'input> {
    pub fn document(&self) -> Option<&Document<'input>> {
        match self {
            ForgivingParse::AsGiven(doc) | ForgivingParse::Wrapped(doc) => Some(doc),
            ForgivingParse::Failed { .. } => None,
        }
    }

    pub fn is_wrapped(&self) -> bool {
        matches!(self, ForgivingParse::Wrapped(_))
    }
}

/// Markup text together with its wrapped fallback form
#[derive(Debug, Clone)]
pub struct MarkupInput<'a> {
    text: &'a str,
    wrapped: String,
}

impl<'a> MarkupInput<'a> {
    pub fn new(text: &'a str, synthetic_root: &str) -> Self {
        Self {
            text,
            wrapped: format!("<{root}>{text}</{root}>", root = synthetic_root),
        }
    }

    /// Run the two-stage parse
    pub fn parse(&self) -> ForgivingParse<'_> {
        let first = match parse_document(self.text) {
            Ok(doc) => return ForgivingParse::AsGiven(doc),
            Err(err) => err.to_string(),
        };
        debug!("Markup did not parse as given ({}), retrying wrapped", first);

        match parse_document(&self.wrapped) {
            Ok(doc) => ForgivingParse::Wrapped(doc),
            Err(err) => {
                debug!("Wrapped markup did not parse either: {}", err);
                ForgivingParse::Failed {
                    as_given: first,
                    wrapped: err.to_string(),
                }
            }
        }
    }
}

fn parse_document(text: &str) -> Result<Document<'_>, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(text, options)
}

/// Every element below `node` (excluding `node`) with the given local name,
/// in document order
pub fn elements_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .filter(move |child| child.is_element() && child.tag_name().name() == tag)
}

/// First element below `node` with the given local name
pub fn first_element_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    elements_named(node, tag).next()
}

/// Concatenated text of every text node below `node`
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}

/// Trimmed text of the first `tag` element below `node`, empty when absent
pub fn child_text_trimmed(node: Node<'_, '_>, tag: &str) -> String {
    first_element_named(node, tag)
        .map(|child| text_content(child).trim().to_string())
        .unwrap_or_default()
}

/// Owned copy of an attribute value, `None` when the attribute is absent
pub fn attribute(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name).map(str::to_string)
}
