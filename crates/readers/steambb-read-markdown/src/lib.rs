//! Markdown reader for steambb.
//!
//! Parses CommonMark (with GitHub extensions) into an mdast-shaped tree:
//! soft breaks are folded into the surrounding text, adjacent text fragments
//! are merged, code blocks lose their final newline and tight list items get
//! their inline content wrapped in a paragraph. Bare URLs and email
//! addresses become links, as GitHub renders them.

mod autolink;

use pulldown_cmark::{
    CodeBlockKind, Event, HeadingLevel, MetadataBlockKind, Options, Parser, Tag, TagEnd,
};
use steambb_core::{Node, ParseError, ParseOptions, kind};

/// Parse markdown text into a tree.
pub fn parse(input: &str) -> Node {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse markdown with custom options.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Node {
    let parser = Parser::new_ext(input, extension_flags(options));
    let events: Vec<_> = parser.collect();

    let mut root = Node::Root {
        children: parse_events(&events),
    };
    if options.autolinks {
        autolink::link_literals(&mut root);
    }
    tracing::debug!(
        events = events.len(),
        blocks = root.children().len(),
        "parsed markdown"
    );
    root
}

/// Parse markdown from raw bytes, which must be UTF-8.
pub fn parse_bytes(input: &[u8]) -> Result<Node, ParseError> {
    parse_bytes_with_options(input, &ParseOptions::default())
}

/// Parse markdown from raw bytes with custom options.
pub fn parse_bytes_with_options(input: &[u8], options: &ParseOptions) -> Result<Node, ParseError> {
    let text = std::str::from_utf8(input)?;
    Ok(parse_with_options(text, options))
}

fn extension_flags(options: &ParseOptions) -> Options {
    let mut opts = Options::empty();
    if options.tables {
        opts.insert(Options::ENABLE_TABLES);
    }
    if options.strikethrough {
        opts.insert(Options::ENABLE_STRIKETHROUGH);
    }
    if options.task_lists {
        opts.insert(Options::ENABLE_TASKLISTS);
    }
    if options.footnotes {
        opts.insert(Options::ENABLE_FOOTNOTES);
    }
    if options.front_matter {
        opts.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
        opts.insert(Options::ENABLE_PLUSES_DELIMITED_METADATA_BLOCKS);
    }
    opts
}

/// Parse a slice of events into nodes.
fn parse_events(events: &[Event<'_>]) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut idx = 0;

    while idx < events.len() {
        let (node, consumed) = parse_event(&events[idx..]);
        if let Some(n) = node {
            push_merged(&mut nodes, n);
        }
        idx += consumed.max(1);
    }

    nodes
}

/// Append a node, joining it onto a preceding text node when both are text.
fn push_merged(nodes: &mut Vec<Node>, node: Node) {
    if let Node::Text { value } = &node
        && let Some(Node::Text { value: prev }) = nodes.last_mut()
    {
        prev.push_str(value);
        return;
    }
    nodes.push(node);
}

/// Parse a single event or matched tag pair, returning the node and events consumed.
fn parse_event(events: &[Event<'_>]) -> (Option<Node>, usize) {
    match &events[0] {
        Event::Start(tag) => parse_tag(tag.clone(), events),
        Event::Text(text) => (Some(Node::text(text.to_string())), 1),
        Event::Code(code) => (
            Some(Node::InlineCode {
                value: code.to_string(),
            }),
            1,
        ),
        Event::SoftBreak => (Some(Node::text("\n")), 1),
        Event::HardBreak => (Some(Node::other(kind::BREAK)), 1),
        Event::Rule => (Some(Node::other(kind::THEMATIC_BREAK)), 1),
        Event::End(_) => (None, 1), // Handled by parent
        Event::Html(html) | Event::InlineHtml(html) => {
            (Some(Node::other(kind::HTML).with_value(html.to_string())), 1)
        }
        Event::FootnoteReference(_) => (Some(Node::other(kind::FOOTNOTE_REFERENCE)), 1),
        // Read from the enclosing list item
        Event::TaskListMarker(_) => (None, 1),
        Event::InlineMath(math) => (
            Some(Node::other(kind::INLINE_MATH).with_value(math.to_string())),
            1,
        ),
        Event::DisplayMath(math) => (
            Some(Node::other(kind::MATH).with_value(math.to_string())),
            1,
        ),
    }
}

/// Parse a tag and its contents.
fn parse_tag(tag: Tag<'_>, events: &[Event<'_>]) -> (Option<Node>, usize) {
    // Find the matching end tag
    let end_idx = find_matching_end(&events[1..], &tag);
    let inner_events = &events[1..=end_idx];
    let children = match tag {
        Tag::Item => parse_item_events(inner_events),
        _ => parse_events(inner_events),
    };
    let consumed = end_idx + 2; // +1 for start, +1 for end

    let node = match tag {
        Tag::Paragraph => Node::Paragraph { children },

        Tag::Heading { level, .. } => {
            let depth = match level {
                HeadingLevel::H1 => 1,
                HeadingLevel::H2 => 2,
                HeadingLevel::H3 => 3,
                HeadingLevel::H4 => 4,
                HeadingLevel::H5 => 5,
                HeadingLevel::H6 => 6,
            };
            Node::Heading { depth, children }
        }

        Tag::BlockQuote(_) => Node::BlockQuote { children },

        Tag::CodeBlock(code_kind) => {
            let lang = match code_kind {
                CodeBlockKind::Fenced(info) => info
                    .split_whitespace()
                    .next()
                    .map(|word| word.to_string()),
                CodeBlockKind::Indented => None,
            };
            Node::Code {
                value: strip_final_newline(plain_text(&children)),
                lang,
            }
        }

        Tag::List(start) => Node::List {
            ordered: start.is_some(),
            start,
            children,
        },

        Tag::Item => {
            // The marker opens the item, or its first paragraph in loose lists
            let checked = inner_events.iter().take(2).find_map(|event| match event {
                Event::TaskListMarker(checked) => Some(*checked),
                _ => None,
            });
            Node::ListItem {
                checked,
                children,
            }
        }

        Tag::FootnoteDefinition(_) => {
            Node::other(kind::FOOTNOTE_DEFINITION).with_children(children)
        }

        Tag::Table(_) => Node::other(kind::TABLE).with_children(children),

        // mdast has no table head: the header is the first row
        Tag::TableHead | Tag::TableRow => Node::other(kind::TABLE_ROW).with_children(children),

        Tag::TableCell => Node::other(kind::TABLE_CELL).with_children(children),

        Tag::Emphasis => Node::Emphasis { children },

        Tag::Strong => Node::Strong { children },

        Tag::Strikethrough => Node::Delete { children },

        Tag::Link { dest_url, .. } => Node::Link {
            url: dest_url.to_string(),
            children,
        },

        Tag::Image { dest_url, .. } => Node::Image {
            url: dest_url.to_string(),
            alt: plain_text(&children),
        },

        Tag::HtmlBlock => {
            let html = children
                .iter()
                .filter_map(|n| match n {
                    Node::Other {
                        value: Some(value), ..
                    } => Some(value.as_str()),
                    _ => None,
                })
                .collect::<String>();
            Node::other(kind::HTML).with_value(strip_final_newline(html))
        }

        Tag::MetadataBlock(meta_kind) => {
            let name = match meta_kind {
                MetadataBlockKind::YamlStyle => kind::YAML,
                MetadataBlockKind::PlusesStyle => kind::TOML,
            };
            Node::other(name).with_value(strip_final_newline(plain_text(&children)))
        }

        Tag::DefinitionList => Node::other(kind::DEFINITION_LIST).with_children(children),

        Tag::DefinitionListTitle => Node::other(kind::DEFINITION_TERM).with_children(children),

        Tag::DefinitionListDefinition => {
            Node::other(kind::DEFINITION_DESCRIPTION).with_children(children)
        }
    };

    (Some(node), consumed)
}

/// Parse list item contents, wrapping each run of inline content in a paragraph.
fn parse_item_events(events: &[Event<'_>]) -> Vec<Node> {
    let mut blocks = Vec::new();
    let mut run = Vec::new();
    let mut idx = 0;

    while idx < events.len() {
        let block = starts_block(&events[idx]);
        let (node, consumed) = parse_event(&events[idx..]);
        if let Some(n) = node {
            if block {
                flush_run(&mut blocks, &mut run);
                blocks.push(n);
            } else {
                push_merged(&mut run, n);
            }
        }
        idx += consumed.max(1);
    }
    flush_run(&mut blocks, &mut run);

    blocks
}

fn flush_run(blocks: &mut Vec<Node>, run: &mut Vec<Node>) {
    if !run.is_empty() {
        blocks.push(Node::Paragraph {
            children: std::mem::take(run),
        });
    }
}

/// Whether an event opens flow content. Inline HTML stays phrasing content.
fn starts_block(event: &Event<'_>) -> bool {
    matches!(
        event,
        Event::Rule
            | Event::Start(
                Tag::Paragraph
                    | Tag::Heading { .. }
                    | Tag::BlockQuote(_)
                    | Tag::CodeBlock(_)
                    | Tag::List(_)
                    | Tag::Item
                    | Tag::FootnoteDefinition(_)
                    | Tag::Table(_)
                    | Tag::HtmlBlock
                    | Tag::MetadataBlock(_)
                    | Tag::DefinitionList
            )
    )
}

/// Concatenate the text content of a subtree.
fn plain_text(nodes: &[Node]) -> String {
    let mut text = String::new();
    for node in nodes {
        match node {
            Node::Text { value } | Node::InlineCode { value } => text.push_str(value),
            _ => text.push_str(&plain_text(node.children())),
        }
    }
    text
}

fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

/// Find the index of the matching end tag.
fn find_matching_end(events: &[Event<'_>], start_tag: &Tag<'_>) -> usize {
    let mut depth = 1;
    for (i, event) in events.iter().enumerate() {
        match event {
            Event::Start(t) if tags_match(t, start_tag) => depth += 1,
            Event::End(t) if tag_end_matches(t, start_tag) => {
                depth -= 1;
                if depth == 0 {
                    return i;
                }
            }
            _ => {}
        }
    }
    events.len().saturating_sub(1)
}

/// Check if two start tags are the same type.
fn tags_match(a: &Tag<'_>, b: &Tag<'_>) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

/// Check if an end tag matches a start tag.
fn tag_end_matches(end: &TagEnd, start: &Tag<'_>) -> bool {
    matches!(
        (end, start),
        (TagEnd::Paragraph, Tag::Paragraph)
            | (TagEnd::Heading(_), Tag::Heading { .. })
            | (TagEnd::BlockQuote(_), Tag::BlockQuote(_))
            | (TagEnd::CodeBlock, Tag::CodeBlock(_))
            | (TagEnd::List(_), Tag::List(_))
            | (TagEnd::Item, Tag::Item)
            | (TagEnd::FootnoteDefinition, Tag::FootnoteDefinition(_))
            | (TagEnd::Table, Tag::Table(_))
            | (TagEnd::TableHead, Tag::TableHead)
            | (TagEnd::TableRow, Tag::TableRow)
            | (TagEnd::TableCell, Tag::TableCell)
            | (TagEnd::Emphasis, Tag::Emphasis)
            | (TagEnd::Strong, Tag::Strong)
            | (TagEnd::Strikethrough, Tag::Strikethrough)
            | (TagEnd::Link, Tag::Link { .. })
            | (TagEnd::Image, Tag::Image { .. })
            | (TagEnd::HtmlBlock, Tag::HtmlBlock)
            | (TagEnd::MetadataBlock(_), Tag::MetadataBlock(_))
            | (TagEnd::DefinitionList, Tag::DefinitionList)
            | (TagEnd::DefinitionListTitle, Tag::DefinitionListTitle)
            | (
                TagEnd::DefinitionListDefinition,
                Tag::DefinitionListDefinition
            )
    )
}
