//! In-memory element tree and the [`TreeDocument`] built on it.
//!
//! [`TreeDocument`] owns a root [`Element`] and its active search prefixes.
//! It is what pool records are built from in tests, and what callers use
//! once a snapshot has been decoded from whatever transport delivered it.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::split_path;
use crate::traits::AttributeDocument;

/// A named node in an attribute tree.
///
/// Leaf attributes carry `text`; sections such as `TEMPLATE` carry
/// `children`. Sibling names may repeat, in which case a lookup returns all
/// of them in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Element name, matched exactly against path segments.
    pub name: String,
    /// Text content, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Child elements in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty section element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Create a leaf element holding `text`.
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    /// Append a child and return `self`, for building trees inline.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append a leaf child and return `self`.
    pub fn with_leaf(self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.with_child(Element::leaf(name, text))
    }
}

/// An [`AttributeDocument`] backed by an owned [`Element`] tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeDocument {
    root: Element,
    prefixes: Vec<String>,
}

impl TreeDocument {
    /// Wrap a root element. The search-prefix list starts empty.
    pub fn new(root: Element) -> Self {
        Self {
            root,
            prefixes: Vec::new(),
        }
    }

    /// The root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Consume the document, returning its root element.
    pub fn into_root(self) -> Element {
        self.root
    }
}

impl From<Element> for TreeDocument {
    fn from(root: Element) -> Self {
        Self::new(root)
    }
}

impl AttributeDocument for TreeDocument {
    fn lookup(&self, path: &str) -> Result<Vec<String>> {
        let segments = split_path(path)?;
        let (first, rest) = match segments.split_first() {
            Some(split) => split,
            None => return Ok(Vec::new()),
        };
        if self.root.name != *first {
            return Ok(Vec::new());
        }

        let mut level: Vec<&Element> = vec![&self.root];
        for segment in rest {
            level = level
                .into_iter()
                .flat_map(|e| e.children.iter())
                .filter(|child| child.name == *segment)
                .collect();
            if level.is_empty() {
                break;
            }
        }

        Ok(level
            .into_iter()
            .filter_map(|e| e.text.clone())
            .collect())
    }

    fn search_prefixes(&self) -> &[String] {
        &self.prefixes
    }

    fn set_search_prefixes(&mut self, prefixes: &[&str]) {
        self.prefixes = prefixes.iter().map(|p| p.to_string()).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocumentError;

    /// A datastore snapshot with a template section.
    fn datastore() -> TreeDocument {
        TreeDocument::new(
            Element::new("DATASTORE")
                .with_leaf("ID", "100")
                .with_leaf("NAME", "default")
                .with_leaf("CLUSTER_ID", "-1")
                .with_leaf("FREE_MB", "51200")
                .with_child(
                    Element::new("TEMPLATE")
                        .with_leaf("DS_MAD", "fs")
                        .with_leaf("TM_MAD", "shared")
                        .with_leaf("NAME", "template-name"),
                ),
        )
    }

    #[test]
    fn lookup_leaf_value() {
        let doc = datastore();
        assert_eq!(doc.lookup("/DATASTORE/ID").unwrap(), vec!["100"]);
        assert_eq!(
            doc.lookup("/DATASTORE/TEMPLATE/TM_MAD").unwrap(),
            vec!["shared"]
        );
    }

    #[test]
    fn lookup_missing_returns_empty() {
        let doc = datastore();
        assert!(doc.lookup("/DATASTORE/NOPE").unwrap().is_empty());
        assert!(doc.lookup("/HOST/ID").unwrap().is_empty());
        assert!(doc.lookup("/DATASTORE/ID/DEEPER").unwrap().is_empty());
    }

    #[test]
    fn lookup_section_without_text_returns_empty() {
        let doc = datastore();
        assert!(doc.lookup("/DATASTORE/TEMPLATE").unwrap().is_empty());
    }

    #[test]
    fn lookup_repeated_siblings_in_order() {
        let doc = TreeDocument::new(
            Element::new("DATASTORE").with_child(
                Element::new("IMAGES")
                    .with_leaf("ID", "3")
                    .with_leaf("ID", "1")
                    .with_leaf("ID", "2"),
            ),
        );
        assert_eq!(
            doc.lookup("/DATASTORE/IMAGES/ID").unwrap(),
            vec!["3", "1", "2"]
        );
    }

    #[test]
    fn lookup_rejects_relative_path() {
        let doc = datastore();
        let err = doc.lookup("DATASTORE/ID").unwrap_err();
        assert!(matches!(err, DocumentError::InvalidPath { .. }));
    }

    #[test]
    fn search_without_prefixes_finds_nothing() {
        let doc = datastore();
        assert!(doc.search_prefixes().is_empty());
        assert!(doc.search("DS_MAD").unwrap().is_empty());
    }

    #[test]
    fn search_tries_prefixes_in_order() {
        let mut doc = datastore();
        doc.set_search_prefixes(&["/DATASTORE/TEMPLATE/", "/DATASTORE/"]);

        // Found under the template first.
        assert_eq!(doc.search("NAME").unwrap(), vec!["template-name"]);
        // Only present at the root.
        assert_eq!(doc.search("FREE_MB").unwrap(), vec!["51200"]);
        // Present nowhere.
        assert!(doc.search("BRIDGE_LIST").unwrap().is_empty());
    }

    #[test]
    fn set_search_prefixes_replaces_previous_list() {
        let mut doc = datastore();
        doc.set_search_prefixes(&["/HOST/TEMPLATE/", "/HOST/", "/HOST/SHARE/"]);
        doc.set_search_prefixes(&["/DATASTORE/"]);
        assert_eq!(doc.search_prefixes(), ["/DATASTORE/".to_string()]);
    }

    fn install_template_prefix<D: AttributeDocument>(mut doc: D) -> Vec<String> {
        doc.set_search_prefixes(&["/DATASTORE/TEMPLATE/"]);
        doc.search("DS_MAD").unwrap()
    }

    #[test]
    fn mutable_borrow_is_a_document() {
        let mut doc = datastore();
        assert_eq!(install_template_prefix(&mut doc), vec!["fs"]);
        assert_eq!(doc.search_prefixes(), ["/DATASTORE/TEMPLATE/".to_string()]);
    }

    #[test]
    fn element_tree_from_json() {
        let json = r#"{
            "name": "DATASTORE",
            "children": [
                { "name": "ID", "text": "7" },
                { "name": "TEMPLATE", "children": [{ "name": "DS_MAD", "text": "ceph" }] }
            ]
        }"#;
        let root: Element = serde_json::from_str(json).unwrap();
        let doc = TreeDocument::from(root);
        assert_eq!(doc.lookup("/DATASTORE/ID").unwrap(), vec!["7"]);
        assert_eq!(
            doc.lookup("/DATASTORE/TEMPLATE/DS_MAD").unwrap(),
            vec!["ceph"]
        );
    }
}
