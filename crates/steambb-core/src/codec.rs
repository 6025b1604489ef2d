//! mdast JSON encoding of the document tree.
//!
//! Nodes go through a flat record with every field optional, so unknown
//! `type` names and extra fields (`position`, `spread`, ...) are accepted.
//! A known type missing one of its required fields is rejected.

use serde::{Deserialize, Serialize};

use crate::{Node, kind};

/// Error converting a decoded record into a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("{kind} node is missing required field `{field}`")]
    MissingField { kind: String, field: &'static str },
    #[error("heading depth must be between 1 and 6, got {0}")]
    InvalidDepth(u8),
}

/// Flat wire form of a node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawNode {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    depth: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ordered: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    checked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Node>>,
}

impl RawNode {
    fn missing(&self, field: &'static str) -> TreeError {
        TreeError::MissingField {
            kind: self.kind.clone(),
            field,
        }
    }

    fn take_children(&mut self) -> Result<Vec<Node>, TreeError> {
        self.children.take().ok_or_else(|| self.missing("children"))
    }

    fn take_value(&mut self) -> Result<String, TreeError> {
        self.value.take().ok_or_else(|| self.missing("value"))
    }

    fn take_url(&mut self) -> Result<String, TreeError> {
        self.url.take().ok_or_else(|| self.missing("url"))
    }
}

impl TryFrom<RawNode> for Node {
    type Error = TreeError;

    fn try_from(mut raw: RawNode) -> Result<Self, Self::Error> {
        let node = match raw.kind.as_str() {
            kind::ROOT => Node::Root {
                children: raw.take_children()?,
            },
            kind::PARAGRAPH => Node::Paragraph {
                children: raw.take_children()?,
            },
            kind::HEADING => {
                let depth = raw.depth.ok_or_else(|| raw.missing("depth"))?;
                if !(1..=6).contains(&depth) {
                    return Err(TreeError::InvalidDepth(depth));
                }
                Node::Heading {
                    depth,
                    children: raw.take_children()?,
                }
            }
            kind::TEXT => Node::Text {
                value: raw.take_value()?,
            },
            kind::LIST => Node::List {
                ordered: raw.ordered.unwrap_or(false),
                start: raw.start,
                children: raw.take_children()?,
            },
            kind::LIST_ITEM => Node::ListItem {
                checked: raw.checked,
                children: raw.take_children()?,
            },
            kind::LINK => Node::Link {
                url: raw.take_url()?,
                children: raw.take_children()?,
            },
            kind::IMAGE => Node::Image {
                url: raw.take_url()?,
                alt: raw.alt.take().unwrap_or_default(),
            },
            kind::STRONG => Node::Strong {
                children: raw.take_children()?,
            },
            kind::EMPHASIS => Node::Emphasis {
                children: raw.take_children()?,
            },
            kind::BLOCKQUOTE => Node::BlockQuote {
                children: raw.take_children()?,
            },
            kind::DELETE => Node::Delete {
                children: raw.take_children()?,
            },
            kind::INLINE_CODE => Node::InlineCode {
                value: raw.take_value()?,
            },
            kind::CODE => Node::Code {
                value: raw.take_value()?,
                lang: raw.lang.take(),
            },
            _ => Node::Other {
                kind: raw.kind,
                value: raw.value,
                children: raw.children,
            },
        };
        Ok(node)
    }
}

impl From<Node> for RawNode {
    fn from(node: Node) -> Self {
        let mut raw = RawNode {
            kind: node.kind().to_string(),
            ..RawNode::default()
        };
        match node {
            Node::Root { children }
            | Node::Paragraph { children }
            | Node::Strong { children }
            | Node::Emphasis { children }
            | Node::BlockQuote { children }
            | Node::Delete { children } => raw.children = Some(children),
            Node::Heading { depth, children } => {
                raw.depth = Some(depth);
                raw.children = Some(children);
            }
            Node::Text { value } | Node::InlineCode { value } => raw.value = Some(value),
            Node::List {
                ordered,
                start,
                children,
            } => {
                raw.ordered = Some(ordered);
                raw.start = start;
                raw.children = Some(children);
            }
            Node::ListItem { checked, children } => {
                raw.checked = checked;
                raw.children = Some(children);
            }
            Node::Link { url, children } => {
                raw.url = Some(url);
                raw.children = Some(children);
            }
            Node::Image { url, alt } => {
                raw.url = Some(url);
                raw.alt = Some(alt);
            }
            Node::Code { value, lang } => {
                raw.value = Some(value);
                raw.lang = lang;
            }
            Node::Other {
                value, children, ..
            } => {
                raw.value = value;
                raw.children = children;
            }
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::root;

    #[test]
    fn test_decode_mdast_json() {
        let json = r#"{
            "type": "root",
            "children": [
                {
                    "type": "heading",
                    "depth": 2,
                    "children": [{ "type": "text", "value": "Title" }],
                    "position": { "start": { "line": 1 } }
                },
                {
                    "type": "list",
                    "ordered": false,
                    "start": null,
                    "spread": false,
                    "children": [
                        {
                            "type": "listItem",
                            "checked": null,
                            "children": [
                                { "type": "paragraph", "children": [{ "type": "text", "value": "one" }] }
                            ]
                        }
                    ]
                }
            ]
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        let expected = root(|r| {
            r.heading(2, |h| h.text("Title"))
                .bullet_list(|l| l.item(|i| i.text("one")))
        });
        assert_eq!(node, expected);
    }

    #[test]
    fn test_unknown_type_becomes_other() {
        let json = r#"{ "type": "thematicBreak" }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node, Node::other("thematicBreak"));

        let json = r#"{ "type": "html", "value": "<b>hi</b>" }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node, Node::other("html").with_value("<b>hi</b>"));
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let err = serde_json::from_str::<Node>(r#"{ "type": "list", "ordered": true }"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("list node is missing required field `children`"), "{err}");

        let err = serde_json::from_str::<Node>(r#"{ "type": "heading", "children": [] }"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("`depth`"), "{err}");
    }

    #[test]
    fn test_heading_depth_out_of_range() {
        let err = serde_json::from_str::<Node>(r#"{ "type": "heading", "depth": 7, "children": [] }"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("between 1 and 6"), "{err}");
    }

    #[test]
    fn test_encode_omits_absent_fields() {
        let node = root(|r| r.para(|p| p.code("x")));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "root",
                "children": [{
                    "type": "paragraph",
                    "children": [{ "type": "inlineCode", "value": "x" }]
                }]
            })
        );
    }

    #[test]
    fn test_encode_then_decode_keeps_tree() {
        let node = root(|r| {
            r.blockquote(|q| q.para(|p| p.text("! hidden")))
                .code_block_lang("fn main() {}", "rust")
                .node(Node::other("table").with_children([Node::other("tableRow")]))
        });
        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
