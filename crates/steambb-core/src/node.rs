//! Node types for the document tree.

/// mdast type names for the node kinds the tree models directly.
pub mod kind {
    pub const ROOT: &str = "root";
    pub const PARAGRAPH: &str = "paragraph";
    pub const HEADING: &str = "heading";
    pub const TEXT: &str = "text";
    pub const LIST: &str = "list";
    pub const LIST_ITEM: &str = "listItem";
    pub const LINK: &str = "link";
    pub const IMAGE: &str = "image";
    pub const STRONG: &str = "strong";
    pub const EMPHASIS: &str = "emphasis";
    pub const BLOCKQUOTE: &str = "blockquote";
    pub const DELETE: &str = "delete";
    pub const INLINE_CODE: &str = "inlineCode";
    pub const CODE: &str = "code";

    /// Whether `name` is one of the kinds with a dedicated `Node` variant.
    pub fn is_known(name: &str) -> bool {
        matches!(
            name,
            ROOT | PARAGRAPH
                | HEADING
                | TEXT
                | LIST
                | LIST_ITEM
                | LINK
                | IMAGE
                | STRONG
                | EMPHASIS
                | BLOCKQUOTE
                | DELETE
                | INLINE_CODE
                | CODE
        )
    }

    // Kinds carried through `Node::Other`.
    pub const BREAK: &str = "break";
    pub const THEMATIC_BREAK: &str = "thematicBreak";
    pub const HTML: &str = "html";
    pub const TABLE: &str = "table";
    pub const TABLE_ROW: &str = "tableRow";
    pub const TABLE_CELL: &str = "tableCell";
    pub const FOOTNOTE_REFERENCE: &str = "footnoteReference";
    pub const FOOTNOTE_DEFINITION: &str = "footnoteDefinition";
    pub const INLINE_MATH: &str = "inlineMath";
    pub const MATH: &str = "math";
    pub const YAML: &str = "yaml";
    pub const TOML: &str = "toml";
    pub const DEFINITION_LIST: &str = "definitionList";
    pub const DEFINITION_TERM: &str = "definitionTerm";
    pub const DEFINITION_DESCRIPTION: &str = "definitionDescription";
}

/// A node in the document tree.
///
/// Leaves (`Text`, `InlineCode`, `Code`, `Image`) carry no children. A tree
/// is built once by a reader and never mutated by the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "crate::codec::RawNode", into = "crate::codec::RawNode")
)]
pub enum Node {
    Root {
        children: Vec<Node>,
    },
    Paragraph {
        children: Vec<Node>,
    },
    Heading {
        /// Heading level, 1 through 6.
        depth: u8,
        children: Vec<Node>,
    },
    Text {
        value: String,
    },
    List {
        ordered: bool,
        /// Number of the first item of an ordered list.
        start: Option<u64>,
        children: Vec<Node>,
    },
    ListItem {
        /// Task list state: `Some` for `[ ]` / `[x]` items.
        checked: Option<bool>,
        children: Vec<Node>,
    },
    Link {
        url: String,
        children: Vec<Node>,
    },
    Image {
        url: String,
        alt: String,
    },
    Strong {
        children: Vec<Node>,
    },
    Emphasis {
        children: Vec<Node>,
    },
    BlockQuote {
        children: Vec<Node>,
    },
    Delete {
        children: Vec<Node>,
    },
    InlineCode {
        value: String,
    },
    Code {
        value: String,
        lang: Option<String>,
    },
    /// Any node type outside the fixed set above.
    Other {
        kind: String,
        value: Option<String>,
        children: Option<Vec<Node>>,
    },
}

impl Node {
    /// Create a text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    /// Create a node of an arbitrary kind with neither value nor children.
    ///
    /// `kind` must not name a kind with its own variant (see [`kind::is_known`]):
    /// such a node would encode as that variant's mdast type and fail to decode.
    pub fn other(kind: impl Into<String>) -> Self {
        let kind = kind.into();
        debug_assert!(
            !kind::is_known(&kind),
            "`{kind}` has a dedicated Node variant"
        );
        Node::Other {
            kind,
            value: None,
            children: None,
        }
    }

    /// Set the value of an `Other` node. Other variants are returned unchanged.
    pub fn with_value(mut self, new_value: impl Into<String>) -> Self {
        if let Node::Other { value, .. } = &mut self {
            *value = Some(new_value.into());
        }
        self
    }

    /// Set the children of an `Other` node. Other variants are returned unchanged.
    pub fn with_children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        if let Node::Other { children, .. } = &mut self {
            *children = Some(nodes.into_iter().collect());
        }
        self
    }

    /// The mdast type name of this node.
    pub fn kind(&self) -> &str {
        match self {
            Node::Root { .. } => kind::ROOT,
            Node::Paragraph { .. } => kind::PARAGRAPH,
            Node::Heading { .. } => kind::HEADING,
            Node::Text { .. } => kind::TEXT,
            Node::List { .. } => kind::LIST,
            Node::ListItem { .. } => kind::LIST_ITEM,
            Node::Link { .. } => kind::LINK,
            Node::Image { .. } => kind::IMAGE,
            Node::Strong { .. } => kind::STRONG,
            Node::Emphasis { .. } => kind::EMPHASIS,
            Node::BlockQuote { .. } => kind::BLOCKQUOTE,
            Node::Delete { .. } => kind::DELETE,
            Node::InlineCode { .. } => kind::INLINE_CODE,
            Node::Code { .. } => kind::CODE,
            Node::Other { kind, .. } => kind.as_str(),
        }
    }

    /// Child nodes; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root { children }
            | Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::List { children, .. }
            | Node::ListItem { children, .. }
            | Node::Link { children, .. }
            | Node::Strong { children }
            | Node::Emphasis { children }
            | Node::BlockQuote { children }
            | Node::Delete { children } => children.as_slice(),
            Node::Other {
                children: Some(children),
                ..
            } => children.as_slice(),
            Node::Text { .. }
            | Node::Image { .. }
            | Node::InlineCode { .. }
            | Node::Code { .. }
            | Node::Other { children: None, .. } => &[],
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(Node::text("x").kind(), "text");
        assert_eq!(
            Node::InlineCode {
                value: "x".into()
            }
            .kind(),
            "inlineCode"
        );
        assert_eq!(Node::other("thematicBreak").kind(), "thematicBreak");
    }

    #[test]
    fn test_leaf_children_are_empty() {
        assert!(Node::text("x").children().is_empty());
        assert!(Node::other("break").children().is_empty());
        let image = Node::Image {
            url: "u".into(),
            alt: String::new(),
        };
        assert!(image.children().is_empty());
    }

    #[test]
    fn test_other_builders() {
        let node = Node::other("table").with_children([Node::text("a")]);
        assert_eq!(node.children().len(), 1);

        let html = Node::other("html").with_value("<br>");
        assert_eq!(
            html,
            Node::Other {
                kind: "html".into(),
                value: Some("<br>".into()),
                children: None,
            }
        );
    }

    #[test]
    fn test_with_value_ignores_known_variants() {
        let text = Node::text("keep").with_value("replaced");
        assert_eq!(text, Node::text("keep"));
    }

    #[test]
    fn test_known_kinds() {
        assert!(kind::is_known(kind::PARAGRAPH));
        assert!(kind::is_known(kind::INLINE_CODE));
        assert!(!kind::is_known(kind::TABLE));
        assert!(!kind::is_known("linkReference"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "dedicated Node variant")]
    fn test_other_rejects_known_kind() {
        let _ = Node::other(kind::PARAGRAPH);
    }
}
