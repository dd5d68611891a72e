//! SVG markup reader
//!
//! Parses an SVG document into a small element tree with `quick-xml`.
//! Comments, processing instructions, the XML declaration and doctype are
//! dropped; entities are resolved; whitespace-only text is discarded.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{IconError, IconResult};

/// A node in the parsed document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with its attributes in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Iterate child elements, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of direct text children
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    fn push_text(&mut self, text: &str) {
        if let Some(Node::Text(existing)) = self.children.last_mut() {
            existing.push_str(text);
        } else {
            self.children.push(Node::Text(text.to_string()));
        }
    }

    fn drop_blank_text(&mut self) {
        self.children.retain(|node| match node {
            Node::Text(text) => !text.trim().is_empty(),
            Node::Element(_) => true,
        });
    }
}

/// Parse SVG markup, requiring a single `<svg>` root element
///
/// `file` is only used for error reporting.
pub fn parse(markup: &str, file: &Path) -> IconResult<Element> {
    let root = parse_document(markup, file)?;
    if root.name != "svg" {
        return Err(IconError::NotSvg {
            file: file.to_path_buf(),
            root: root.name,
        });
    }
    Ok(root)
}

fn parse_document(markup: &str, file: &Path) -> IconResult<Element> {
    let invalid = |message: String| IconError::InvalidSvg {
        file: file.to_path_buf(),
        message,
    };

    let mut reader = Reader::from_str(markup);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| invalid(format!("{} (byte {})", e, reader.error_position())))?;

        match event {
            Event::Start(start) => stack.push(element_from(&start, file)?),
            Event::Empty(start) => {
                let element = element_from(&start, file)?;
                close(element, &mut stack, &mut root, file)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| invalid("unexpected closing tag".to_string()))?;
                close(element, &mut stack, &mut root, file)?;
            }
            Event::Text(text) => {
                let text = std::str::from_utf8(&text).map_err(|e| invalid(e.to_string()))?;
                append_text(text, &mut stack, file)?;
            }
            Event::CData(cdata) => {
                let text = std::str::from_utf8(&cdata).map_err(|e| invalid(e.to_string()))?;
                append_text(text, &mut stack, file)?;
            }
            Event::GeneralRef(reference) => {
                let name = std::str::from_utf8(&reference).map_err(|e| invalid(e.to_string()))?;
                let resolved = resolve_entity(name)
                    .ok_or_else(|| invalid(format!("unknown entity '&{};'", name)))?;
                append_text(&resolved, &mut stack, file)?;
            }
            Event::Eof => break,
            // Comments, declarations, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(invalid(format!("unclosed element <{}>", open.name)));
    }

    root.ok_or_else(|| invalid("document has no root element".to_string()))
}

fn element_from(start: &BytesStart<'_>, file: &Path) -> IconResult<Element> {
    let invalid = |message: String| IconError::InvalidSvg {
        file: file.to_path_buf(),
        message,
    };

    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| invalid(e.to_string()))?
        .to_string();
    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| invalid(e.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(|e| invalid(e.to_string()))?;
        let raw = std::str::from_utf8(&attr.value).map_err(|e| invalid(e.to_string()))?;
        let value = quick_xml::escape::unescape(raw).map_err(|e| invalid(e.to_string()))?;
        element
            .attributes
            .push((key.to_string(), value.into_owned()));
    }

    Ok(element)
}

fn close(
    mut element: Element,
    stack: &mut [Element],
    root: &mut Option<Element>,
    file: &Path,
) -> IconResult<()> {
    element.drop_blank_text();

    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Element(element));
            Ok(())
        }
        None if root.is_some() => Err(IconError::InvalidSvg {
            file: file.to_path_buf(),
            message: format!("second root element <{}>", element.name),
        }),
        None => {
            *root = Some(element);
            Ok(())
        }
    }
}

fn append_text(text: &str, stack: &mut [Element], file: &Path) -> IconResult<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.push_text(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(IconError::InvalidSvg {
            file: file.to_path_buf(),
            message: "text outside of the root element".to_string(),
        }),
    }
}

fn resolve_entity(name: &str) -> Option<String> {
    if let Some(code) = name.strip_prefix('#') {
        let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => code.parse::<u32>().ok()?,
        };
        return char::from_u32(value).map(String::from);
    }

    quick_xml::escape::resolve_predefined_entity(name).map(String::from)
}
