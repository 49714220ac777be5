//! Minimal XML document tree
//!
//! The feed responses are small, so the whole body is read into a tree of
//! [`XmlElement`]s with quick-xml and then queried by tag name. Text runs
//! are stored as written; [`XmlElement::value_of`] trims its result.

use std::fmt;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

/// A structural problem found while reading the XML body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlError(pub String);

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for XmlError {}

fn xml_error(e: impl fmt::Display) -> XmlError {
    XmlError(e.to_string())
}

/// A child of an element: either a nested element or a run of text.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An element with its attributes and children in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an empty element (used by tests and the tree builder).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Value of the named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All descendant elements in document order, excluding `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        let mut stack = Vec::new();
        push_children(&mut stack, self);
        Descendants { stack }
    }

    /// Descendant elements whose name equals `tag` exactly.
    pub fn elements_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.descendants().filter(move |el| el.name == tag)
    }

    /// First descendant element whose name equals `tag`.
    pub fn first_by_tag(&self, tag: &str) -> Option<&XmlElement> {
        self.descendants().find(|el| el.name == tag)
    }

    /// Text of the first child node, if that node is text.
    pub fn first_child_text(&self) -> Option<&str> {
        match self.children.first() {
            Some(XmlNode::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Text value of the first descendant named `tag`.
    ///
    /// Always returns a string: a missing tag, an empty tag, or a tag whose
    /// first child is not text all give `""`.
    pub fn value_of(&self, tag: &str) -> String {
        self.first_by_tag(tag)
            .and_then(XmlElement::first_child_text)
            .map(|text| text.trim().to_string())
            .unwrap_or_default()
    }
}

fn push_children<'a>(stack: &mut Vec<&'a XmlElement>, element: &'a XmlElement) {
    for child in element.children.iter().rev() {
        if let XmlNode::Element(el) = child {
            stack.push(el);
        }
    }
}

fn collect_text(element: &XmlElement, out: &mut String) {
    for child in &element.children {
        match child {
            XmlNode::Text(text) => out.push_str(text),
            XmlNode::Element(el) => collect_text(el, out),
        }
    }
}

/// Pre-order iterator over descendant elements.
pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        push_children(&mut self.stack, next);
        Some(next)
    }
}

/// A parsed XML document.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Elements named `tag` anywhere in the document, the root included.
    pub fn elements_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        std::iter::once(&self.root)
            .chain(self.root.descendants())
            .filter(move |el| el.name == tag)
    }

    /// Like [`elements_by_tag`](Self::elements_by_tag) but ignoring ASCII case.
    pub fn elements_by_tag_ignore_case<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a XmlElement> {
        std::iter::once(&self.root)
            .chain(self.root.descendants())
            .filter(move |el| el.name.eq_ignore_ascii_case(tag))
    }

    /// First element named `tag`, the root included.
    pub fn first_by_tag(&self, tag: &str) -> Option<&XmlElement> {
        std::iter::once(&self.root)
            .chain(self.root.descendants())
            .find(|el| el.name == tag)
    }
}

/// Parse an XML body into a document tree.
///
/// # Errors
/// Returns [`XmlError`] for malformed markup, mismatched or unclosed tags,
/// and bodies without exactly one root element.
pub fn parse_document(xml: &str) -> Result<XmlDocument, XmlError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) => {
                stack.push(start_element(&e)?);
            }
            Event::Empty(e) => {
                let element = start_element(&e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| XmlError("unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(e) => {
                let text = e.unescape().map_err(xml_error)?;
                push_text(&mut stack, &text);
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e.into_inner()).to_string();
                push_text(&mut stack, &text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError(format!("unclosed element <{}>", open.name)));
    }

    root.map(|root| XmlDocument { root })
        .ok_or_else(|| XmlError("document has no root element".to_string()))
}

fn start_element(e: &BytesStart<'_>) -> Result<XmlElement, XmlError> {
    let mut element = XmlElement::new(String::from_utf8_lossy(e.name().as_ref()).to_string());
    for attr in e.attributes() {
        let attr = attr.map_err(xml_error)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr.unescape_value().map_err(xml_error)?.to_string();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Element(element)),
        None if root.is_some() => {
            return Err(XmlError("multiple root elements".to_string()));
        }
        None => *root = Some(element),
    }
    Ok(())
}

fn push_text(stack: &mut [XmlElement], text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(parent) = stack.last_mut() {
        match parent.children.last_mut() {
            // Adjacent text and CDATA runs form one node.
            Some(XmlNode::Text(existing)) => existing.push_str(text),
            _ => parent.children.push(XmlNode::Text(text.to_string())),
        }
    }
}
