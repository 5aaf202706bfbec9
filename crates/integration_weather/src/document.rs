//! Generic attributed document tree
//!
//! The forecast parser only needs tags, ordered children and attribute
//! name/value pairs. This module folds the `quick-xml` event stream into
//! that shape and rejects anything that is not well-formed.

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use thiserror::Error;

/// Reasons a document could not be turned into a tree
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The underlying reader rejected the markup
    #[error("{0}")]
    Malformed(String),

    /// An element was still open at the end of input
    #[error("unclosed element <{0}>")]
    Unclosed(String),

    /// The input held no element at all
    #[error("no root element")]
    Empty,

    /// More than one top-level element
    #[error("unexpected second root element <{0}>")]
    MultipleRoots(String),
}

/// One element with its attributes and child elements
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlNode {
    /// Element name
    pub tag: String,
    /// Attribute name/value pairs in document order
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Parse a complete document and return its root element
    pub fn parse(xml: &str) -> Result<Self, DocumentError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut open: Vec<Self> = Vec::new();
        let mut root: Option<Self> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let node = Self::from_start(&e)?;
                    if open.is_empty() && root.is_some() {
                        return Err(DocumentError::MultipleRoots(node.tag));
                    }
                    open.push(node);
                },
                Ok(Event::Empty(e)) => {
                    let node = Self::from_start(&e)?;
                    Self::attach(node, &mut open, &mut root)?;
                },
                Ok(Event::End(_)) => {
                    // quick-xml has already matched the end name against the open one
                    let node = open
                        .pop()
                        .ok_or_else(|| DocumentError::Malformed("unexpected end tag".to_string()))?;
                    Self::attach(node, &mut open, &mut root)?;
                },
                Ok(Event::Text(_) | Event::CData(_)) if open.is_empty() && root.is_some() => {
                    return Err(DocumentError::Malformed(
                        "text after the root element".to_string(),
                    ));
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(DocumentError::Malformed(e.to_string())),
                _ => {},
            }
        }

        if let Some(unclosed) = open.pop() {
            return Err(DocumentError::Unclosed(unclosed.tag));
        }
        root.ok_or(DocumentError::Empty)
    }

    /// Value of the first attribute called `name`
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child element with the given tag
    #[must_use]
    pub fn child(&self, tag: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// All child elements with the given tag
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |child| child.tag == tag)
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, DocumentError> {
        let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(|e| DocumentError::Malformed(e.to_string()))?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute
                .unescape_value()
                .map_err(|e| DocumentError::Malformed(e.to_string()))?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            tag,
            attributes,
            children: Vec::new(),
        })
    }

    /// Hang a finished element under its parent, or make it the root
    fn attach(
        node: Self,
        open: &mut [Self],
        root: &mut Option<Self>,
    ) -> Result<(), DocumentError> {
        if let Some(parent) = open.last_mut() {
            parent.children.push(node);
            return Ok(());
        }
        if root.is_some() {
            return Err(DocumentError::MultipleRoots(node.tag));
        }
        *root = Some(node);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_document() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
            <weatherdata>
                <sun rise="2024-03-01T06:00:00" set="2024-03-01T18:00:00"/>
                <forecast>
                    <time from="a" to="b"><temperature value="280.0"/></time>
                    <time from="c" to="d"></time>
                </forecast>
            </weatherdata>"#;

        let root = XmlNode::parse(xml).unwrap();
        assert_eq!(root.tag, "weatherdata");
        assert_eq!(root.children.len(), 2);

        let sun = root.child("sun").unwrap();
        assert_eq!(sun.attribute("rise"), Some("2024-03-01T06:00:00"));
        assert_eq!(sun.attribute("missing"), None);

        let forecast = root.child("forecast").unwrap();
        let times: Vec<_> = forecast.children_named("time").collect();
        assert_eq!(times.len(), 2);
        assert_eq!(times[0].children[0].tag, "temperature");
        assert!(times[1].children.is_empty());
    }

    #[test]
    fn test_attribute_entities_are_unescaped() {
        let root = XmlNode::parse(r#"<clouds value="few &amp; far"/>"#).unwrap();
        assert_eq!(root.tag, "clouds");
        assert_eq!(root.attribute("value"), Some("few & far"));
    }

    #[test]
    fn test_text_and_comments_are_ignored() {
        let root = XmlNode::parse("<a><!-- note -->text<b/></a>").unwrap();
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].tag, "b");
    }

    #[test]
    fn test_mismatched_end_tag_is_rejected() {
        let err = XmlNode::parse("<a><b></a>").unwrap_err();
        assert!(matches!(err, DocumentError::Malformed(_)));
    }

    #[test]
    fn test_unclosed_element_is_rejected() {
        assert!(XmlNode::parse("<a><b>").is_err());
        assert!(XmlNode::parse("<weatherdata><forecast><time>").is_err());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(XmlNode::parse(""), Err(DocumentError::Empty)));
        assert!(matches!(
            XmlNode::parse("just some words"),
            Err(DocumentError::Empty)
        ));
    }

    #[test]
    fn test_second_root_is_rejected() {
        let err = XmlNode::parse("<a/><b/>").unwrap_err();
        assert!(matches!(err, DocumentError::MultipleRoots(tag) if tag == "b"));
    }

    #[test]
    fn test_text_after_root_is_rejected() {
        let err = XmlNode::parse("<a/>junk").unwrap_err();
        assert!(matches!(err, DocumentError::Malformed(_)));
        assert!(XmlNode::parse("<a><b/></a>\n trailing words").is_err());
    }

    #[test]
    fn test_whitespace_after_root_is_accepted() {
        let root = XmlNode::parse("<a/>\n  \n").unwrap();
        assert_eq!(root.tag, "a");
    }

    #[test]
    fn test_duplicate_attribute_is_rejected() {
        assert!(XmlNode::parse(r#"<a x="1" x="2"/>"#).is_err());
    }
}
