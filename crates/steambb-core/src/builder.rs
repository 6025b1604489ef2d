//! Type-safe tree builders.
//!
//! Block builders only accept block content and inline builders only accept
//! phrasing content, so a heading cannot end up inside a paragraph.
//!
//! # Example
//!
//! ```rust
//! use steambb_core::builder::*;
//!
//! let tree = root(|r| r
//!     .h1(|h| h.text("Patch notes"))
//!     .para(|p| p
//!         .text("This is ")
//!         .strong(|s| s.text("bold"))
//!         .text(" text.")
//!     )
//!     .bullet_list(|l| l
//!         .item(|i| i.text("First item"))
//!         .item(|i| i.text("Second item"))
//!     )
//! );
//! assert_eq!(tree.children().len(), 3);
//! ```

use crate::{Node, kind};

/// Build a root node with type-safe structure.
pub fn root<F>(f: F) -> Node
where
    F: FnOnce(BlockBuilder) -> BlockBuilder,
{
    Node::Root {
        children: f(BlockBuilder::new()).children,
    }
}

/// Builder for block content (root, block quotes, list items).
#[derive(Default)]
pub struct BlockBuilder {
    children: Vec<Node>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a level 1 heading.
    pub fn h1<F>(self, f: F) -> Self
    where
        F: FnOnce(InlineBuilder) -> InlineBuilder,
    {
        self.heading(1, f)
    }

    /// Add a level 2 heading.
    pub fn h2<F>(self, f: F) -> Self
    where
        F: FnOnce(InlineBuilder) -> InlineBuilder,
    {
        self.heading(2, f)
    }

    /// Add a heading with a specific depth.
    pub fn heading<F>(mut self, depth: u8, f: F) -> Self
    where
        F: FnOnce(InlineBuilder) -> InlineBuilder,
    {
        let inline = f(InlineBuilder::new());
        self.children.push(Node::Heading {
            depth,
            children: inline.children,
        });
        self
    }

    /// Add a paragraph.
    pub fn para<F>(mut self, f: F) -> Self
    where
        F: FnOnce(InlineBuilder) -> InlineBuilder,
    {
        let inline = f(InlineBuilder::new());
        self.children.push(Node::Paragraph {
            children: inline.children,
        });
        self
    }

    /// Add a code block.
    pub fn code_block(mut self, code: impl Into<String>) -> Self {
        self.children.push(Node::Code {
            value: code.into(),
            lang: None,
        });
        self
    }

    /// Add a code block with language.
    pub fn code_block_lang(mut self, code: impl Into<String>, lang: impl Into<String>) -> Self {
        self.children.push(Node::Code {
            value: code.into(),
            lang: Some(lang.into()),
        });
        self
    }

    /// Add a block quote.
    pub fn blockquote<F>(mut self, f: F) -> Self
    where
        F: FnOnce(BlockBuilder) -> BlockBuilder,
    {
        let inner = f(BlockBuilder::new());
        self.children.push(Node::BlockQuote {
            children: inner.children,
        });
        self
    }

    /// Add an unordered (bullet) list.
    pub fn bullet_list<F>(mut self, f: F) -> Self
    where
        F: FnOnce(ListBuilder) -> ListBuilder,
    {
        let list = f(ListBuilder::new(false));
        self.children.push(list.build());
        self
    }

    /// Add an ordered (numbered) list starting at 1.
    pub fn ordered_list<F>(self, f: F) -> Self
    where
        F: FnOnce(ListBuilder) -> ListBuilder,
    {
        self.ordered_list_from(1, f)
    }

    /// Add an ordered list starting at a specific number.
    pub fn ordered_list_from<F>(mut self, start: u64, f: F) -> Self
    where
        F: FnOnce(ListBuilder) -> ListBuilder,
    {
        let mut list = f(ListBuilder::new(true));
        list.start = Some(start);
        self.children.push(list.build());
        self
    }

    /// Add a thematic break.
    pub fn hr(mut self) -> Self {
        self.children.push(Node::other(kind::THEMATIC_BREAK));
        self
    }

    /// Add an arbitrary node.
    pub fn node(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }
}

/// Builder for inline content (text, emphasis, links, etc.).
#[derive(Default)]
pub struct InlineBuilder {
    children: Vec<Node>,
}

impl InlineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add plain text.
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.children.push(Node::text(value));
        self
    }

    /// Add emphasized (italic) text.
    pub fn em<F>(mut self, f: F) -> Self
    where
        F: FnOnce(InlineBuilder) -> InlineBuilder,
    {
        let inner = f(InlineBuilder::new());
        self.children.push(Node::Emphasis {
            children: inner.children,
        });
        self
    }

    /// Add strong (bold) text.
    pub fn strong<F>(mut self, f: F) -> Self
    where
        F: FnOnce(InlineBuilder) -> InlineBuilder,
    {
        let inner = f(InlineBuilder::new());
        self.children.push(Node::Strong {
            children: inner.children,
        });
        self
    }

    /// Add strikethrough text.
    pub fn strike<F>(mut self, f: F) -> Self
    where
        F: FnOnce(InlineBuilder) -> InlineBuilder,
    {
        let inner = f(InlineBuilder::new());
        self.children.push(Node::Delete {
            children: inner.children,
        });
        self
    }

    /// Add inline code.
    pub fn code(mut self, value: impl Into<String>) -> Self {
        self.children.push(Node::InlineCode {
            value: value.into(),
        });
        self
    }

    /// Add a link.
    pub fn link<F>(mut self, url: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(InlineBuilder) -> InlineBuilder,
    {
        let inner = f(InlineBuilder::new());
        self.children.push(Node::Link {
            url: url.into(),
            children: inner.children,
        });
        self
    }

    /// Add an image.
    pub fn image(mut self, url: impl Into<String>, alt: impl Into<String>) -> Self {
        self.children.push(Node::Image {
            url: url.into(),
            alt: alt.into(),
        });
        self
    }

    /// Add a hard line break.
    pub fn br(mut self) -> Self {
        self.children.push(Node::other(kind::BREAK));
        self
    }

    /// Add an arbitrary node.
    pub fn node(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }
}

/// Builder for lists.
pub struct ListBuilder {
    ordered: bool,
    start: Option<u64>,
    items: Vec<Node>,
}

impl ListBuilder {
    fn new(ordered: bool) -> Self {
        Self {
            ordered,
            start: None,
            items: Vec::new(),
        }
    }

    /// Add a list item with inline content.
    pub fn item<F>(self, f: F) -> Self
    where
        F: FnOnce(InlineBuilder) -> InlineBuilder,
    {
        self.push_item(None, f)
    }

    /// Add a task list item.
    pub fn task<F>(self, checked: bool, f: F) -> Self
    where
        F: FnOnce(InlineBuilder) -> InlineBuilder,
    {
        self.push_item(Some(checked), f)
    }

    /// Add a list item with block content (nested lists, several paragraphs).
    pub fn item_block<F>(mut self, f: F) -> Self
    where
        F: FnOnce(BlockBuilder) -> BlockBuilder,
    {
        let inner = f(BlockBuilder::new());
        self.items.push(Node::ListItem {
            checked: None,
            children: inner.children,
        });
        self
    }

    fn push_item<F>(mut self, checked: Option<bool>, f: F) -> Self
    where
        F: FnOnce(InlineBuilder) -> InlineBuilder,
    {
        let inline = f(InlineBuilder::new());
        self.items.push(Node::ListItem {
            checked,
            children: vec![Node::Paragraph {
                children: inline.children,
            }],
        });
        self
    }

    fn build(self) -> Node {
        Node::List {
            ordered: self.ordered,
            start: self.start,
            children: self.items,
        }
    }
}
