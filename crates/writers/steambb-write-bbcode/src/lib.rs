//! Steam BBCode writer for steambb.
//!
//! Serializes a document tree to the bracket-tag markup accepted by Steam
//! (guides, announcements, workshop descriptions). Every node type has a
//! fixed rendering; node types outside the known set fall back to their
//! value or their children and are reported as fidelity warnings.

use steambb_core::{ConversionResult, FidelityWarning, Node, WarningKind};

/// Separator placed between the top-level blocks of a root node.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Marker that turns a block quote into a spoiler.
const SPOILER_MARKER: &str = "! ";

/// Render a tree to BBCode.
///
/// Never fails. Unrecognized node types are logged and rendered through the
/// fallback rules; use [`emit`] to also collect them as warnings.
pub fn render(node: &Node) -> String {
    emit(node).value
}

/// Render a tree to BBCode, collecting a warning per unrecognized node.
pub fn emit(node: &Node) -> ConversionResult<String> {
    let mut output = String::new();
    let mut warnings = Vec::new();
    emit_node(node, &mut output, &mut warnings);
    ConversionResult::with_warnings(output, warnings)
}

fn emit_nodes(nodes: &[Node], output: &mut String, warnings: &mut Vec<FidelityWarning>) {
    for node in nodes {
        emit_node(node, output, warnings);
    }
}

fn emit_node(node: &Node, output: &mut String, warnings: &mut Vec<FidelityWarning>) {
    match node {
        Node::Root { children } => {
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    output.push_str(BLOCK_SEPARATOR);
                }
                emit_node(child, output, warnings);
            }
        }

        Node::Paragraph { children } => emit_nodes(children, output, warnings),

        Node::Heading { depth, children } => {
            output.push_str(&format!("[h{depth}]"));
            emit_nodes(children, output, warnings);
            output.push_str(&format!("[/h{depth}]"));
        }

        Node::Text { value } => output.push_str(value),

        Node::List {
            ordered, children, ..
        } => {
            let tag = if *ordered { "olist" } else { "list" };
            wrap(tag, children, output, warnings);
        }

        Node::ListItem { children, .. } => {
            output.push_str("[*]");
            emit_nodes(children, output, warnings);
        }

        Node::Link { url, children } => {
            output.push_str(&format!("[url={url}]"));
            emit_nodes(children, output, warnings);
            output.push_str("[/url]");
        }

        Node::Image { url, .. } => {
            output.push_str("[img]");
            output.push_str(url);
            output.push_str("[/img]");
        }

        Node::Strong { children } => wrap("b", children, output, warnings),

        Node::Emphasis { children } => wrap("i", children, output, warnings),

        Node::Delete { children } => wrap("strike", children, output, warnings),

        // Steam has no inline code tag
        Node::InlineCode { value } => {
            output.push_str("[b]");
            output.push_str(value);
            output.push_str("[/b]");
        }

        Node::Code { value, .. } => {
            output.push_str("[code]");
            output.push_str(value);
            output.push_str("[/code]");
        }

        Node::BlockQuote { children } => {
            let mut inner = String::new();
            emit_nodes(children, &mut inner, warnings);
            // `>! text` parses as an ordinary block quote whose text starts with "! "
            match inner.strip_prefix(SPOILER_MARKER) {
                Some(hidden) => {
                    output.push_str("[spoiler]");
                    output.push_str(hidden);
                    output.push_str("[/spoiler]");
                }
                None => {
                    output.push_str("[quote]");
                    output.push_str(&inner);
                    output.push_str("[/quote]");
                }
            }
        }

        Node::Other {
            kind,
            value,
            children,
        } => {
            tracing::warn!(kind = %kind, "unhandled node type");
            warnings.push(FidelityWarning::new(
                WarningKind::UnsupportedNode(kind.clone()),
                format!("Unhandled node type: {kind}"),
            ));
            if let Some(value) = value {
                output.push_str(value);
            } else if let Some(children) = children {
                emit_nodes(children, output, warnings);
            }
        }
    }
}

fn wrap(tag: &str, children: &[Node], output: &mut String, warnings: &mut Vec<FidelityWarning>) {
    output.push_str(&format!("[{tag}]"));
    emit_nodes(children, output, warnings);
    output.push_str(&format!("[/{tag}]"));
}
